//! Declared input: semantic props and the node tree handed to the pipeline.
//!
//! Nodes are ephemeral. They are built (or deserialized) per render call and
//! owned by the caller.

use crate::context::ExplicitSemantics;
use crate::element::Handler;
use crate::vocabulary::{Density, Family, Intent, Prominence, Size};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Selection model shared by a group of selectable nodes
#[derive(Clone)]
pub struct Selection {
    pub current: Option<String>,
    on_select: Arc<dyn Fn(&str) + Send + Sync>,
}

impl Selection {
    pub fn new(current: Option<String>, on_select: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            current,
            on_select: Arc::new(on_select),
        }
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.current.as_deref() == Some(value)
    }

    pub fn select(&self, value: &str) {
        (self.on_select)(value)
    }
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

/// Props a caller passes to `render`
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SemanticProps {
    pub prominence: Option<Prominence>,
    pub intent: Option<Intent>,
    pub density: Option<Density>,
    pub size: Option<Size>,
    /// Explicit selection state; derived from `selection` when absent
    pub selected: Option<bool>,
    pub disabled: bool,
    /// Force pointer affordances on roles that are not clickable by default
    pub clickable: Option<bool>,
    /// Caller classes, always composed last
    pub class_name: Option<String>,
    pub href: Option<String>,
    pub level: Option<u8>,
    pub placeholder: Option<String>,
    pub value: Option<String>,
    /// Passthrough DOM attributes
    pub attrs: BTreeMap<String, String>,
    #[serde(skip)]
    pub on_click: Option<Handler>,
    #[serde(skip)]
    pub selection: Option<Selection>,
}

impl SemanticProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn explicit(&self) -> ExplicitSemantics {
        ExplicitSemantics {
            prominence: self.prominence,
            intent: self.intent,
            density: self.density,
        }
    }

    pub fn with_prominence(mut self, prominence: Prominence) -> Self {
        self.prominence = Some(prominence);
        self
    }

    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.intent = Some(intent);
        self
    }

    pub fn with_density(mut self, density: Density) -> Self {
        self.density = Some(density);
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = Some(selected);
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_clickable(mut self, clickable: bool) -> Self {
        self.clickable = Some(clickable);
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_on_click(mut self, handler: Handler) -> Self {
        self.on_click = Some(handler);
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = Some(selection);
        self
    }

    /// Selection state after consulting the selection model
    pub fn effective_selected(&self) -> bool {
        if let Some(selected) = self.selected {
            return selected;
        }
        match (&self.selection, &self.value) {
            (Some(selection), Some(value)) => selection.is_selected(value),
            _ => false,
        }
    }
}

impl fmt::Debug for SemanticProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SemanticProps")
            .field("prominence", &self.prominence)
            .field("intent", &self.intent)
            .field("density", &self.density)
            .field("size", &self.size)
            .field("selected", &self.selected)
            .field("disabled", &self.disabled)
            .field("clickable", &self.clickable)
            .field("class_name", &self.class_name)
            .field("href", &self.href)
            .field("level", &self.level)
            .field("placeholder", &self.placeholder)
            .field("value", &self.value)
            .field("attrs", &self.attrs)
            .field("on_click", &self.on_click.is_some())
            .field("selection", &self.selection)
            .finish()
    }
}

/// A child of a semantic node: nested node or plain text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Child {
    Text(String),
    Node(Box<SemanticNode>),
}

impl From<SemanticNode> for Child {
    fn from(node: SemanticNode) -> Self {
        Child::Node(Box::new(node))
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

/// Declared node. `role: None` means the node did not declare one and
/// renders as its family default without a diagnostic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticNode {
    pub family: Family,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(flatten)]
    pub props: SemanticProps,
    #[serde(default)]
    pub children: Vec<Child>,
}

impl SemanticNode {
    pub fn new(family: Family, role: impl Into<String>) -> Self {
        Self {
            family,
            role: Some(role.into()),
            props: SemanticProps::default(),
            children: Vec::new(),
        }
    }

    /// Node without a declared role
    pub fn anonymous(family: Family) -> Self {
        Self {
            family,
            role: None,
            props: SemanticProps::default(),
            children: Vec::new(),
        }
    }

    pub fn with_props(mut self, props: SemanticProps) -> Self {
        self.props = props;
        self
    }

    pub fn with_child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Child>) -> Self {
        self.children = children;
        self
    }
}

//! Role descriptors: what a role renders as.

use crate::error::RegistryError;
use crate::renderer::Renderer;
use crate::vocabulary::Family;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Attribute that carries a role's selection state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionAttr {
    Selected,
    Pressed,
    Checked,
    Current,
}

impl SelectionAttr {
    pub fn attribute(&self) -> &'static str {
        match self {
            Self::Selected => "aria-selected",
            Self::Pressed => "aria-pressed",
            Self::Checked => "aria-checked",
            Self::Current => "aria-current",
        }
    }

    /// Attribute value for a given state. `aria-current` is omitted when
    /// not current rather than set to "false".
    pub fn value(&self, selected: bool) -> Option<&'static str> {
        match (self, selected) {
            (Self::Current, true) => Some("true"),
            (Self::Current, false) => None,
            (_, true) => Some("true"),
            (_, false) => Some("false"),
        }
    }
}

/// Registry entry binding a role to its tag, ARIA defaults, structural
/// styles and renderer
#[derive(Clone)]
pub struct RoleDescriptor {
    pub html_tag: String,
    pub aria_props: BTreeMap<String, String>,
    /// Structural classes, composed first
    pub base_styles: String,
    pub renderer: Arc<dyn Renderer>,
    pub description: String,
    pub clickable: bool,
    pub focusable: bool,
    /// Whether the tag supports the native `disabled` attribute
    pub native_disabled: bool,
    pub selection_attr: Option<SelectionAttr>,
}

impl RoleDescriptor {
    pub fn builder(html_tag: impl Into<String>) -> RoleDescriptorBuilder {
        RoleDescriptorBuilder::new(html_tag)
    }

    pub fn renderer_name(&self) -> &str {
        self.renderer.name()
    }
}

impl PartialEq for RoleDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.html_tag == other.html_tag
            && self.aria_props == other.aria_props
            && self.base_styles == other.base_styles
            && self.renderer.name() == other.renderer.name()
            && self.description == other.description
            && self.clickable == other.clickable
            && self.focusable == other.focusable
            && self.native_disabled == other.native_disabled
            && self.selection_attr == other.selection_attr
    }
}

impl fmt::Debug for RoleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoleDescriptor")
            .field("html_tag", &self.html_tag)
            .field("aria_props", &self.aria_props)
            .field("base_styles", &self.base_styles)
            .field("renderer", &self.renderer.name())
            .field("description", &self.description)
            .field("clickable", &self.clickable)
            .field("focusable", &self.focusable)
            .field("native_disabled", &self.native_disabled)
            .field("selection_attr", &self.selection_attr)
            .finish()
    }
}

/// Builder that refuses to produce a descriptor without a renderer
#[derive(Clone, Default)]
pub struct RoleDescriptorBuilder {
    html_tag: String,
    aria_props: BTreeMap<String, String>,
    base_styles: String,
    renderer: Option<Arc<dyn Renderer>>,
    description: String,
    clickable: bool,
    focusable: bool,
    native_disabled: bool,
    selection_attr: Option<SelectionAttr>,
}

impl RoleDescriptorBuilder {
    pub fn new(html_tag: impl Into<String>) -> Self {
        Self {
            html_tag: html_tag.into(),
            ..Default::default()
        }
    }

    pub fn aria(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.aria_props.insert(name.into(), value.into());
        self
    }

    pub fn base_styles(mut self, styles: impl Into<String>) -> Self {
        self.base_styles = styles.into();
        self
    }

    pub fn renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Clickable and focusable, with native `disabled` support
    pub fn interactive(mut self) -> Self {
        self.clickable = true;
        self.focusable = true;
        self.native_disabled = true;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    pub fn native_disabled(mut self, native_disabled: bool) -> Self {
        self.native_disabled = native_disabled;
        self
    }

    pub fn selection_attr(mut self, attr: SelectionAttr) -> Self {
        self.selection_attr = Some(attr);
        self
    }

    /// Finish the descriptor. A missing renderer or an unusable tag is a
    /// configuration defect and fails here rather than at render time.
    pub fn build(self, family: Family, role: &str) -> Result<RoleDescriptor, RegistryError> {
        let renderer = self.renderer.ok_or_else(|| RegistryError::MissingRenderer {
            family,
            role: role.to_string(),
        })?;
        if !is_valid_tag(&self.html_tag) {
            return Err(RegistryError::InvalidTag {
                family,
                role: role.to_string(),
                tag: self.html_tag,
            });
        }
        Ok(RoleDescriptor {
            html_tag: self.html_tag,
            aria_props: self.aria_props,
            base_styles: self.base_styles,
            renderer,
            description: self.description,
            clickable: self.clickable,
            focusable: self.focusable,
            native_disabled: self.native_disabled,
            selection_attr: self.selection_attr,
        })
    }
}

/// Letter first, then letters, digits or `-`
fn is_valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

//! Renderer strategies.
//!
//! A renderer receives fully-composed classes and attributes and decides the
//! final tag, structural attributes and how children are attached. Renderers
//! are stateless and shared between descriptors through `Arc`.

use crate::context::ResolvedSemantics;
use crate::element::{Element, Node};
use crate::node::SemanticProps;
use crate::vocabulary::Prominence;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Everything a renderer needs to emit one element
pub struct RenderInput<'a> {
    /// Tag from the role descriptor
    pub html_tag: &'a str,
    pub semantics: &'a ResolvedSemantics,
    pub props: &'a SemanticProps,
    /// Composed class string, in final order
    pub class_name: String,
    /// ARIA, state and passthrough attributes, already merged
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<Node>,
}

pub trait Renderer: Send + Sync {
    /// Name used to reference this renderer from configuration
    fn name(&self) -> &str;

    fn render(&self, input: RenderInput<'_>) -> Element;
}

fn base_element(tag: &str, input: RenderInput<'_>) -> Element {
    Element::new(tag)
        .with_class(input.class_name)
        .with_children(input.children)
        .with_attributes(input.attributes)
}

/// Emits the descriptor tag as-is
#[derive(Debug, Default, Clone, Copy)]
pub struct ElementRenderer;

impl Renderer for ElementRenderer {
    fn name(&self) -> &str {
        "element"
    }

    fn render(&self, input: RenderInput<'_>) -> Element {
        let tag = input.html_tag.to_string();
        base_element(&tag, input)
    }
}

/// Buttons and links. An `href` turns the element into an anchor; native
/// buttons default to `type="button"` so they never submit a form.
#[derive(Debug, Default, Clone, Copy)]
pub struct ActionRenderer;

impl Renderer for ActionRenderer {
    fn name(&self) -> &str {
        "action"
    }

    fn render(&self, input: RenderInput<'_>) -> Element {
        if let Some(href) = input.props.href.clone() {
            let mut element = base_element("a", input);
            element.attributes.insert("href".to_string(), href);
            element.attributes.remove("disabled");
            return element;
        }
        let tag = input.html_tag.to_string();
        let mut element = base_element(&tag, input);
        if element.tag == "button" {
            element
                .attributes
                .entry("type".to_string())
                .or_insert_with(|| "button".to_string());
        }
        element
    }
}

/// Form controls. Void inputs cannot hold children, so text children become
/// the accessible name instead.
#[derive(Debug, Clone, Copy)]
pub struct FieldRenderer {
    name: &'static str,
    input_type: Option<&'static str>,
}

impl FieldRenderer {
    pub const fn input(name: &'static str, input_type: &'static str) -> Self {
        Self {
            name,
            input_type: Some(input_type),
        }
    }

    /// Non-void controls such as `textarea` and `select`
    pub const fn container(name: &'static str) -> Self {
        Self {
            name,
            input_type: None,
        }
    }
}

impl Renderer for FieldRenderer {
    fn name(&self) -> &str {
        self.name
    }

    fn render(&self, input: RenderInput<'_>) -> Element {
        let props = input.props;
        let tag = input.html_tag.to_string();
        let mut element = base_element(&tag, input);

        if let Some(placeholder) = &props.placeholder {
            element
                .attributes
                .insert("placeholder".to_string(), placeholder.clone());
        }

        if let Some(input_type) = self.input_type {
            element
                .attributes
                .entry("type".to_string())
                .or_insert_with(|| input_type.to_string());
            if let Some(value) = &props.value {
                element.attributes.insert("value".to_string(), value.clone());
            }
            if element.is_void() {
                let label = element.text_content();
                element.children.clear();
                if !label.is_empty() && !element.attributes.contains_key("aria-label") {
                    element.attributes.insert("aria-label".to_string(), label);
                }
            }
        } else if tag == "textarea" && element.children.is_empty() {
            if let Some(value) = &props.value {
                element.children.push(Node::Text(value.clone()));
            }
        }
        element
    }
}

/// Headings whose level follows prominence unless `level` is given
#[derive(Debug, Clone, Copy)]
pub struct HeadingRenderer {
    name: &'static str,
    base_level: u8,
}

impl HeadingRenderer {
    pub const fn new(name: &'static str, base_level: u8) -> Self {
        Self { name, base_level }
    }

    pub fn level_for(&self, prominence: Prominence, explicit: Option<u8>) -> u8 {
        let level = explicit.unwrap_or_else(|| {
            let offset = match prominence {
                Prominence::Hero => 0,
                Prominence::Strong => 1,
                Prominence::Standard => 2,
                Prominence::Subtle => 3,
            };
            self.base_level + offset
        });
        level.clamp(1, 6)
    }
}

impl Renderer for HeadingRenderer {
    fn name(&self) -> &str {
        self.name
    }

    fn render(&self, input: RenderInput<'_>) -> Element {
        let level = self.level_for(input.semantics.prominence, input.props.level);
        base_element(&format!("h{}", level), input)
    }
}

/// Look up a built-in renderer by its configuration name
pub fn renderer_by_name(name: &str) -> Option<Arc<dyn Renderer>> {
    let renderer: Arc<dyn Renderer> = match name {
        "element" => Arc::new(ElementRenderer),
        "action" => Arc::new(ActionRenderer),
        "input" => Arc::new(FieldRenderer::input("input", "text")),
        "search" => Arc::new(FieldRenderer::input("search", "search")),
        "checkbox" => Arc::new(FieldRenderer::input("checkbox", "checkbox")),
        "radio" => Arc::new(FieldRenderer::input("radio", "radio")),
        "textarea" => Arc::new(FieldRenderer::container("textarea")),
        "select" => Arc::new(FieldRenderer::container("select")),
        "title" => Arc::new(HeadingRenderer::new("title", 1)),
        "heading" => Arc::new(HeadingRenderer::new("heading", 2)),
        _ => return None,
    };
    Some(renderer)
}

/// Names accepted by `renderer_by_name`
pub const RENDERER_NAMES: &[&str] = &[
    "element", "action", "input", "search", "checkbox", "radio", "textarea", "select", "title",
    "heading",
];

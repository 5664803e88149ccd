//! Rendered output tree.
//!
//! Attributes live in a `BTreeMap` so serialization order is stable and
//! re-renders are byte-identical. Event handlers travel with the element but
//! are not part of its serialized form.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Event kinds an element can carry handlers for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum EventKind {
    Click,
    Change,
    KeyDown,
}

/// Event delivered to a handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiEvent {
    pub kind: EventKind,
    pub value: Option<String>,
}

impl UiEvent {
    pub fn click() -> Self {
        Self {
            kind: EventKind::Click,
            value: None,
        }
    }
}

pub type Handler = Arc<dyn Fn(&UiEvent) + Send + Sync>;

/// Tags rendered without a closing tag or children
const VOID_TAGS: &[&str] = &["input", "img", "br", "hr", "meta", "link"];

/// Output node: an element or a text run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

/// A concrete, styled element
#[derive(Clone, Serialize)]
pub struct Element {
    pub tag: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<Node>,
    #[serde(skip)]
    handlers: BTreeMap<EventKind, Handler>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class_name: String::new(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
            handlers: BTreeMap::new(),
        }
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_attributes(mut self, attributes: BTreeMap<String, String>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn with_handler(mut self, kind: EventKind, handler: Handler) -> Self {
        self.handlers.insert(kind, handler);
        self
    }

    pub fn set_handler(&mut self, kind: EventKind, handler: Handler) {
        self.handlers.insert(kind, handler);
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn handler(&self, kind: EventKind) -> Option<&Handler> {
        self.handlers.get(&kind)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_name.split_whitespace().any(|c| c == class)
    }

    /// Invoke the handler for `event.kind`. Returns whether one was attached.
    pub fn dispatch(&self, event: &UiEvent) -> bool {
        match self.handlers.get(&event.kind) {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }

    pub fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag.as_str())
    }

    /// Child elements, skipping text runs
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Depth-first walk over this element and all descendant elements
    pub fn walk(&self, visit: &mut dyn FnMut(&Element, Option<&Element>)) {
        fn go<'a>(
            element: &'a Element,
            parent: Option<&'a Element>,
            visit: &mut dyn FnMut(&Element, Option<&Element>),
        ) {
            visit(element, parent);
            for child in element.child_elements() {
                go(child, Some(element), visit);
            }
        }
        go(self, None, visit);
    }

    /// Concatenated text of all descendant text runs
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => out.push_str(&element.text_content()),
            }
        }
        out
    }

    /// Serialize to HTML. `class` comes first, then attributes in name order.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if !self.class_name.is_empty() {
            out.push_str(" class=\"");
            escape_into(&self.class_name, out);
            out.push('"');
        }
        for (name, value) in &self.attributes {
            // Renderers may insert arbitrary names
            if !is_valid_attribute_name(name) {
                continue;
            }
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_into(value, out);
            out.push('"');
        }
        if self.is_void() {
            out.push_str(" />");
            return;
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Text(text) => escape_into(text, out),
                Node::Element(element) => element.write_html(out),
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && self.class_name == other.class_name
            && self.attributes == other.attributes
            && self.children == other.children
            && self.handlers.keys().eq(other.handlers.keys())
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("class_name", &self.class_name)
            .field("attributes", &self.attributes)
            .field("children", &self.children)
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// HTML attribute-name grammar: non-empty, with no whitespace, quotes,
/// `<`, `>`, `/`, `=` or control characters.
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| {
            !c.is_whitespace()
                && !c.is_control()
                && !matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

//! Resolution pipeline.
//!
//! explicit props + parent frame -> semantics -> descriptor -> tokens and
//! interactive classes -> composed style -> renderer -> element, with a new
//! frame (depth + 1) provided to the children.

use crate::compose::{ComposedStyle, StyleComposer};
use crate::context::{provide, resolve_semantics, ContextFrame, ParentContext, ResolvedSemantics};
use crate::diagnostics::Diagnostic;
use crate::element::{is_valid_attribute_name, Element, EventKind, Handler, Node};
use crate::interactive::{resolve_interactive_classes, InteractiveClassConfig, InteractiveRequest};
use crate::node::{Child, SemanticNode, SemanticProps};
use crate::registry::{RoleDescriptor, RoleLookup, RoleRegistry};
use crate::renderer::RenderInput;
use crate::tokens::{resolve_tokens, TokenSet};
use crate::vocabulary::Family;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::trace;

/// Everything computed for one node before its renderer runs
#[derive(Debug, Clone)]
pub struct Resolution<'r> {
    /// Role actually used (the family default after a fallback)
    pub role: &'r str,
    pub descriptor: &'r RoleDescriptor,
    pub fell_back: bool,
    pub semantics: ResolvedSemantics,
    pub tokens: TokenSet,
    pub interactive: InteractiveClassConfig,
    pub style: ComposedStyle,
    pub attributes: BTreeMap<String, String>,
}

impl Resolution<'_> {
    /// Frame this node provides to its children
    pub fn frame(&self) -> ContextFrame {
        ContextFrame::child_of(&self.semantics)
    }
}

/// Output of a single render
#[derive(Debug, Clone)]
pub struct Rendered {
    pub element: Element,
    pub semantics: ResolvedSemantics,
    pub frame: ContextFrame,
    pub tokens: TokenSet,
    pub style: ComposedStyle,
    pub fell_back: bool,
}

impl Rendered {
    pub fn to_html(&self) -> String {
        self.element.to_html()
    }

    /// blake3 digest of the markup and every element's ordered attributes
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.element.to_html().as_bytes());
        self.element.walk(&mut |element, _| {
            hasher.update(element.tag.as_bytes());
            hasher.update(&[0]);
            for (name, value) in &element.attributes {
                hasher.update(name.as_bytes());
                hasher.update(&[0]);
                hasher.update(value.as_bytes());
                hasher.update(&[0]);
            }
        });
        hex::encode(hasher.finalize().as_bytes())
    }
}

/// Renders nodes against a registry. Holds no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'r> {
    registry: &'r RoleRegistry,
}

impl<'r> Pipeline<'r> {
    pub fn new(registry: &'r RoleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r RoleRegistry {
        self.registry
    }

    fn lookup(&self, family: Family, role: Option<&str>) -> RoleLookup<'r> {
        match role {
            Some(role) => self.registry.get_role_config(family, role),
            // Undeclared role: the family default, silently
            None => RoleLookup {
                role: family.default_role(),
                descriptor: self.registry.default_descriptor(family),
                fell_back: false,
            },
        }
    }

    /// Resolve semantics, tokens, classes and attributes for one node
    pub fn resolve(
        &self,
        family: Family,
        role: Option<&str>,
        props: &SemanticProps,
        parent: ParentContext<'_>,
    ) -> Resolution<'r> {
        let lookup = self.lookup(family, role);
        let descriptor = lookup.descriptor;
        let semantics = resolve_semantics(family, lookup.role, &props.explicit(), parent);

        let tokens = resolve_tokens(
            family,
            lookup.role,
            semantics.prominence,
            semantics.intent,
            semantics.density,
            props.size,
        );

        let selected = props.effective_selected();
        let interactive = InteractiveClassConfig {
            selected,
            disabled: props.disabled,
            clickable: props.clickable.unwrap_or(descriptor.clickable)
                || props.on_click.is_some()
                || selection_handler_applies(props),
            focusable: descriptor.focusable,
        };
        let interactive_classes = if interactive.clickable
            || interactive.focusable
            || interactive.selected
            || interactive.disabled
        {
            resolve_interactive_classes(&InteractiveRequest {
                prominence: semantics.prominence,
                intent: semantics.intent,
                config: interactive,
                skip_idle: !tokens.surface.is_empty(),
            })
        } else {
            String::new()
        };

        let style = StyleComposer::new()
            .structural(descriptor.base_styles.clone())
            .interactive(interactive_classes)
            .tokens(&tokens)
            .caller(props.class_name.as_deref())
            .compose();

        let (attributes, rejected) = build_attributes(descriptor, &semantics, props, selected);
        for name in rejected {
            self.registry.report(Diagnostic::InvalidAttribute {
                family,
                role: lookup.role.to_string(),
                name,
            });
        }

        trace!(
            family = %family,
            role = lookup.role,
            fell_back = lookup.fell_back,
            prominence = %semantics.prominence,
            intent = %semantics.intent,
            density = %semantics.density,
            depth = semantics.depth,
            "Resolved node"
        );

        Resolution {
            role: lookup.role,
            descriptor,
            fell_back: lookup.fell_back,
            semantics,
            tokens,
            interactive,
            style,
            attributes,
        }
    }

    /// Render one node with already-rendered children.
    ///
    /// Unknown roles render as the family default and report one
    /// diagnostic; this never fails.
    pub fn render(
        &self,
        family: Family,
        role: &str,
        props: &SemanticProps,
        children: Vec<Node>,
        parent: ParentContext<'_>,
    ) -> Rendered {
        let resolution = self.resolve(family, Some(role), props, parent);
        self.emit(resolution, props, children)
    }

    /// Render a declared tree. Every node provides a fresh frame to its
    /// children, including nodes without a declared role.
    pub fn render_tree(&self, node: &SemanticNode, parent: ParentContext<'_>) -> Rendered {
        let resolution = self.resolve(node.family, node.role.as_deref(), &node.props, parent);
        let frame = resolution.frame();
        let children = provide(&frame, |ctx| {
            node.children
                .iter()
                .map(|child| match child {
                    Child::Text(text) => Node::Text(text.clone()),
                    Child::Node(child) => Node::Element(self.render_tree(child, ctx).element),
                })
                .collect()
        });
        self.emit(resolution, &node.props, children)
    }

    fn emit(&self, resolution: Resolution<'r>, props: &SemanticProps, children: Vec<Node>) -> Rendered {
        let frame = resolution.frame();
        let mut element = resolution.descriptor.renderer.render(RenderInput {
            html_tag: &resolution.descriptor.html_tag,
            semantics: &resolution.semantics,
            props,
            class_name: resolution.style.class_name(),
            attributes: resolution.attributes,
            children,
        });

        if let Some(handler) = click_handler(props) {
            element.set_handler(EventKind::Click, handler);
        }

        Rendered {
            element,
            semantics: resolution.semantics,
            frame,
            tokens: resolution.tokens,
            style: resolution.style,
            fell_back: resolution.fell_back,
        }
    }
}

/// Attributes in precedence order: descriptor ARIA, state, data markers,
/// then caller passthrough, which wins. Caller names that are not valid
/// HTML attribute names are left out and returned separately.
fn build_attributes(
    descriptor: &RoleDescriptor,
    semantics: &ResolvedSemantics,
    props: &SemanticProps,
    selected: bool,
) -> (BTreeMap<String, String>, Vec<String>) {
    let mut attributes = descriptor.aria_props.clone();

    if props.disabled {
        attributes.insert("aria-disabled".to_string(), "true".to_string());
        if descriptor.native_disabled {
            attributes.insert("disabled".to_string(), String::new());
        }
    }

    let selection_known = props.selected.is_some() || props.selection.is_some();
    if let (Some(attr), true) = (descriptor.selection_attr, selection_known) {
        if let Some(value) = attr.value(selected) {
            attributes.insert(attr.attribute().to_string(), value.to_string());
        }
    }
    if selected {
        attributes.insert("data-selected".to_string(), "true".to_string());
    }

    let markers = [
        ("data-family", semantics.family.as_str().to_string()),
        ("data-role", semantics.role.clone()),
        ("data-prominence", semantics.prominence.as_str().to_string()),
        ("data-intent", semantics.intent.as_str().to_string()),
        ("data-density", semantics.density.as_str().to_string()),
        ("data-depth", semantics.depth.saturating_add(1).to_string()),
    ];
    for (name, value) in markers {
        attributes.insert(name.to_string(), value);
    }

    let mut rejected = Vec::new();
    for (name, value) in &props.attrs {
        if is_valid_attribute_name(name) {
            attributes.insert(name.clone(), value.clone());
        } else {
            rejected.push(name.clone());
        }
    }
    (attributes, rejected)
}

fn selection_handler_applies(props: &SemanticProps) -> bool {
    !props.disabled && props.selection.is_some() && props.value.is_some()
}

/// Caller handler, wrapped by selection handling when the node is a
/// selectable value. The caller's handler always runs, after the selection.
fn click_handler(props: &SemanticProps) -> Option<Handler> {
    let caller = props.on_click.clone();
    match (&props.selection, &props.value) {
        (Some(selection), Some(value)) if !props.disabled => {
            let selection = selection.clone();
            let value = value.clone();
            let handler: Handler = Arc::new(move |event| {
                selection.select(&value);
                if let Some(caller) = &caller {
                    caller(event);
                }
            });
            Some(handler)
        }
        _ => caller,
    }
}

//! Extending the registry at runtime

use super::test_utils::recording_registry;
use semweave::diagnostics::Diagnostic;
use semweave::error::RegistryError;
use semweave::registry::SelectionAttr;
use semweave::renderer::{ElementRenderer, RenderInput, Renderer};
use semweave::{Element, Family, Node, ParentContext, Pipeline, RoleDescriptor, SemanticProps};
use std::sync::Arc;

/// Renders a `figure` with the text wrapped in a `figcaption`
struct FigureRenderer;

impl Renderer for FigureRenderer {
    fn name(&self) -> &str {
        "figure"
    }

    fn render(&self, input: RenderInput<'_>) -> Element {
        let caption = Element::new("figcaption").with_children(input.children);
        Element::new("figure")
            .with_class(input.class_name)
            .with_attributes(input.attributes)
            .with_children(vec![Node::Element(caption)])
    }
}

fn card(description: &str, tag: &str) -> RoleDescriptor {
    RoleDescriptor::builder(tag)
        .renderer(Arc::new(ElementRenderer))
        .base_styles("flex flex-col")
        .description(description)
        .build(Family::Block, "Card")
        .unwrap()
}

#[test]
fn last_registration_wins_with_overwrite_diagnostic() {
    let (mut registry, sink) = recording_registry();
    registry
        .register_role(Family::Block, "Card", card("A", "article"))
        .unwrap();
    registry
        .register_role(Family::Block, "Card", card("B", "section"))
        .unwrap();

    let lookup = registry.get_role_config(Family::Block, "Card");
    assert_eq!(lookup.descriptor.description, "B");
    assert_eq!(lookup.descriptor.html_tag, "section");

    // Card is built in, so both registrations overwrote something
    assert_eq!(
        sink.events(),
        vec![
            Diagnostic::RegistryOverwrite {
                family: Family::Block,
                role: "Card".to_string()
            };
            2
        ]
    );
}

#[test]
fn custom_renderer_is_dispatched() {
    let (mut registry, sink) = recording_registry();
    let descriptor = RoleDescriptor::builder("figure")
        .renderer(Arc::new(FigureRenderer))
        .aria("role", "figure")
        .selection_attr(SelectionAttr::Current)
        .build(Family::Block, "Figure")
        .unwrap();
    assert!(registry
        .register_role(Family::Block, "Figure", descriptor)
        .unwrap()
        .is_none());
    assert!(sink.is_empty());

    let pipeline = Pipeline::new(&registry);
    let rendered = pipeline.render(
        Family::Block,
        "Figure",
        &SemanticProps::new().with_selected(true),
        vec![Node::from("Chart")],
        ParentContext::Root,
    );
    assert_eq!(rendered.element.tag, "figure");
    assert_eq!(rendered.element.attr("role"), Some("figure"));
    assert_eq!(rendered.element.attr("aria-current"), Some("true"));
    assert_eq!(rendered.element.attr("data-role"), Some("Figure"));
    assert_eq!(
        rendered.to_html().matches("<figcaption>Chart</figcaption>").count(),
        1
    );
}

#[test]
fn descriptor_without_renderer_fails_at_build_time() {
    let err = RoleDescriptor::builder("div")
        .build(Family::Block, "Broken")
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::MissingRenderer {
            family: Family::Block,
            role: "Broken".to_string()
        }
    );
}

#[test]
fn independent_registries_do_not_share_roles() {
    let (mut a, _) = recording_registry();
    let (b, _) = recording_registry();
    a.register_role(Family::Text, "Kbd", card("kbd", "kbd")).unwrap();
    assert!(a.contains(Family::Text, "Kbd"));
    assert!(!b.contains(Family::Text, "Kbd"));
}

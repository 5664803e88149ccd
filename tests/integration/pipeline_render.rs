//! End-to-end rendering through the public pipeline surface

use super::test_utils::recording_registry;
use semweave::compose::Layer;
use semweave::diagnostics::Diagnostic;
use semweave::interactive::{idle_classes, SELECTED_MARKER};
use semweave::{
    ContextFrame, Density, Family, Intent, Node, ParentContext, Pipeline, Prominence,
    SemanticProps, Size,
};

const HERO_TITLE_TYPOGRAPHY: &str = "font-sans text-4xl font-bold leading-tight tracking-tight";

#[test]
fn hero_title_typography_ignores_ancestor_prominence() {
    let (registry, _) = recording_registry();
    let pipeline = Pipeline::new(&registry);

    for ancestor in Prominence::ALL {
        let frame = ContextFrame {
            prominence: ancestor,
            intent: Intent::Neutral,
            density: Density::Standard,
            role: Some("Section".to_string()),
            depth: 2,
        };
        let rendered = pipeline.render(
            Family::Text,
            "Title",
            &SemanticProps::new().with_prominence(Prominence::Hero),
            vec![Node::from("Dashboard")],
            ParentContext::from(&frame),
        );
        assert_eq!(rendered.tokens.typography.to_string(), HERO_TITLE_TYPOGRAPHY);
        assert_eq!(rendered.element.tag, "h1");
    }
}

#[test]
fn disabled_selected_button_keeps_marker_and_drops_affordances() {
    let (registry, _) = recording_registry();
    let pipeline = Pipeline::new(&registry);
    let rendered = pipeline.render(
        Family::Action,
        "Button",
        &SemanticProps::new().with_disabled(true).with_selected(true),
        vec![Node::from("Bold")],
        ParentContext::Root,
    );
    let class = &rendered.element.class_name;
    assert!(rendered.element.has_class(SELECTED_MARKER));
    assert!(!class.contains("hover:"), "{}", class);
    assert!(!class.contains("active:"), "{}", class);
    assert!(rendered.element.has_class("cursor-not-allowed"));
}

#[test]
fn unknown_role_degrades_to_default_with_one_diagnostic() {
    let (registry, sink) = recording_registry();
    let pipeline = Pipeline::new(&registry);

    for family in Family::ALL {
        let rendered = pipeline.render(
            family,
            "TotallyUnknownRole123",
            &SemanticProps::new(),
            vec![],
            ParentContext::Root,
        );
        assert!(rendered.fell_back);
        assert_eq!(rendered.semantics.role, family.default_role());
        assert_eq!(
            rendered.element.attr("data-role"),
            Some(family.default_role())
        );
    }

    let events = sink.drain();
    assert_eq!(events.len(), Family::ALL.len());
    for (event, family) in events.iter().zip(Family::ALL) {
        assert_eq!(
            event,
            &Diagnostic::UnknownRole {
                family,
                requested: "TotallyUnknownRole123".to_string(),
                fallback: family.default_role().to_string(),
            }
        );
    }
}

#[test]
fn composed_classes_follow_layer_order() {
    let (registry, _) = recording_registry();
    let pipeline = Pipeline::new(&registry);
    let props = SemanticProps::new()
        .with_prominence(Prominence::Strong)
        .with_intent(Intent::Brand)
        .with_size(Size::Large)
        .with_class("w-full");
    let resolution = pipeline.resolve(Family::Action, Some("Button"), &props, ParentContext::Root);

    let layers: Vec<Layer> = resolution.style.layers().map(|(layer, _)| layer).collect();
    let mut sorted = layers.clone();
    sorted.sort();
    assert_eq!(layers, sorted);
    assert_eq!(layers.first(), Some(&Layer::Structural));
    assert_eq!(layers.last(), Some(&Layer::Caller));
    assert!(layers.contains(&Layer::Extra));

    let class = resolution.style.class_name();
    assert!(class.starts_with(&resolution.descriptor.base_styles));
    assert!(class.ends_with("w-full"));
}

#[test]
fn surface_tokens_suppress_idle_interactive_classes() {
    let (registry, _) = recording_registry();
    let pipeline = Pipeline::new(&registry);
    let resolution = pipeline.resolve(
        Family::Action,
        Some("Button"),
        &SemanticProps::new().with_prominence(Prominence::Strong),
        ParentContext::Root,
    );
    assert!(!resolution.tokens.surface.is_empty());
    let interactive = resolution.style.get(Layer::Interactive).unwrap_or_default();
    assert!(!interactive.contains(&idle_classes(Prominence::Strong, Intent::Neutral)));
}

#[test]
fn density_changes_only_spacing() {
    let (registry, _) = recording_registry();
    let pipeline = Pipeline::new(&registry);
    let compact = pipeline.resolve(
        Family::Block,
        Some("Card"),
        &SemanticProps::new().with_density(Density::Compact),
        ParentContext::Root,
    );
    let comfortable = pipeline.resolve(
        Family::Block,
        Some("Card"),
        &SemanticProps::new().with_density(Density::Comfortable),
        ParentContext::Root,
    );
    assert_eq!(compact.tokens.typography, comfortable.tokens.typography);
    assert_eq!(compact.tokens.surface, comfortable.tokens.surface);
    assert_eq!(compact.tokens.geometry, comfortable.tokens.geometry);
    assert_eq!(compact.tokens.shadow, comfortable.tokens.shadow);
    assert_ne!(compact.tokens.spacing, comfortable.tokens.spacing);
}

#[test]
fn field_roles_render_accessible_controls() {
    let (registry, _) = recording_registry();
    let pipeline = Pipeline::new(&registry);

    let checkbox = pipeline.render(
        Family::Field,
        "Checkbox",
        &SemanticProps::new().with_selected(true),
        vec![Node::from("Remember me")],
        ParentContext::Root,
    );
    assert_eq!(checkbox.element.tag, "input");
    assert_eq!(checkbox.element.attr("type"), Some("checkbox"));
    assert_eq!(checkbox.element.attr("aria-checked"), Some("true"));
    assert_eq!(checkbox.element.attr("aria-label"), Some("Remember me"));
    assert!(checkbox.to_html().ends_with(" />"));

    let textbox = pipeline.render(
        Family::Field,
        "Textbox",
        &SemanticProps::new()
            .with_disabled(true)
            .with_placeholder("Search files"),
        vec![],
        ParentContext::Root,
    );
    assert_eq!(textbox.element.attr("disabled"), Some(""));
    assert_eq!(textbox.element.attr("aria-disabled"), Some("true"));
    assert_eq!(textbox.element.attr("placeholder"), Some("Search files"));
}

#[test]
fn link_uses_current_and_href() {
    let (registry, _) = recording_registry();
    let pipeline = Pipeline::new(&registry);
    let rendered = pipeline.render(
        Family::Action,
        "Link",
        &SemanticProps::new()
            .with_href("/settings")
            .with_selected(true)
            .with_disabled(true),
        vec![Node::from("Settings")],
        ParentContext::Root,
    );
    assert_eq!(rendered.element.tag, "a");
    assert_eq!(rendered.element.attr("href"), Some("/settings"));
    assert_eq!(rendered.element.attr("aria-current"), Some("true"));
    assert_eq!(rendered.element.attr("disabled"), None);
    assert_eq!(rendered.element.attr("aria-disabled"), Some("true"));
}

#[test]
fn rerender_is_byte_identical() {
    let (registry, _) = recording_registry();
    let pipeline = Pipeline::new(&registry);
    let props = SemanticProps::new()
        .with_prominence(Prominence::Subtle)
        .with_intent(Intent::Caution)
        .with_attr("aria-describedby", "hint");
    let first = pipeline.render(Family::Action, "Chip", &props, vec![Node::from("x")], ParentContext::Root);
    let second = pipeline.render(Family::Action, "Chip", &props, vec![Node::from("x")], ParentContext::Root);
    assert_eq!(first.to_html(), second.to_html());
    assert_eq!(first.tokens, second.tokens);
    assert_eq!(first.fingerprint(), second.fingerprint());
}

#[test]
fn malformed_attribute_names_are_dropped_and_reported() {
    let (registry, sink) = recording_registry();
    let pipeline = Pipeline::new(&registry);

    let props = SemanticProps::new()
        .with_attr("a><script>evil()</script", "1")
        .with_attr("x onclick=\"alert(1)\" y", "v")
        .with_attr("aria-label", "Save");
    let rendered = pipeline.render(Family::Action, "Button", &props, vec![], ParentContext::Root);
    let html = rendered.to_html();

    assert!(!html.contains("<script>"), "{}", html);
    assert!(!html.contains("onclick"), "{}", html);
    assert_eq!(rendered.element.attr("aria-label"), Some("Save"));

    let events = sink.drain();
    assert_eq!(events.len(), 2);
    for event in &events {
        match event {
            Diagnostic::InvalidAttribute { family, role, .. } => {
                assert_eq!(*family, Family::Action);
                assert_eq!(role, "Button");
            }
            other => panic!("unexpected diagnostic {:?}", other),
        }
    }
}

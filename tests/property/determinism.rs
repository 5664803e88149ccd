//! Property-based tests for determinism and cascade guarantees

use proptest::prelude::*;
use proptest::sample::select;
use semweave::context::{resolve_semantics, ExplicitSemantics};
use semweave::interactive::{
    idle_classes, resolve_interactive_classes, InteractiveClassConfig, InteractiveRequest,
};
use semweave::{
    resolve_tokens, ContextFrame, Density, Element, Family, Intent, ParentContext, Pipeline,
    Prominence, RoleRegistry, SemanticNode, SemanticProps, Size,
};

fn prominence() -> impl Strategy<Value = Prominence> {
    select(Prominence::ALL.to_vec())
}

fn intent() -> impl Strategy<Value = Intent> {
    select(Intent::ALL.to_vec())
}

fn density() -> impl Strategy<Value = Density> {
    select(Density::ALL.to_vec())
}

fn size() -> impl Strategy<Value = Option<Size>> {
    select(vec![None, Some(Size::Small), Some(Size::Medium), Some(Size::Large)])
}

fn family_and_role() -> impl Strategy<Value = (Family, String)> {
    let registry = RoleRegistry::new();
    let pairs: Vec<(Family, String)> = Family::ALL
        .iter()
        .flat_map(|family| {
            registry
                .roles(*family)
                .into_iter()
                .map(move |role| (*family, role.to_string()))
                .collect::<Vec<_>>()
        })
        .collect();
    select(pairs)
}

fn frame() -> impl Strategy<Value = ContextFrame> {
    (prominence(), intent(), density(), 0u32..16).prop_map(|(prominence, intent, density, depth)| {
        ContextFrame {
            prominence,
            intent,
            density,
            role: None,
            depth,
        }
    })
}

/// Same inputs always yield the same token set
#[test]
fn test_token_resolution_determinism_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(family_and_role(), prominence(), intent(), density(), size()),
            |((family, role), prominence, intent, density, size)| {
                let a = resolve_tokens(family, &role, prominence, intent, density, size);
                let b = resolve_tokens(family, &role, prominence, intent, density, size);
                prop_assert_eq!(a, b);
                Ok(())
            },
        )
        .unwrap();
}

/// Rendering the same node twice yields identical attributes and fingerprints
#[test]
fn test_render_fingerprint_determinism_property() {
    let registry = RoleRegistry::new();
    let pipeline = Pipeline::new(&registry);
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(family_and_role(), prominence(), intent(), any::<bool>(), any::<bool>()),
            |((family, role), prominence, intent, selected, disabled)| {
                let props = SemanticProps::new()
                    .with_prominence(prominence)
                    .with_intent(intent)
                    .with_selected(selected)
                    .with_disabled(disabled);
                let a = pipeline.render(family, &role, &props, vec![], ParentContext::Root);
                let b = pipeline.render(family, &role, &props, vec![], ParentContext::Root);
                prop_assert_eq!(&a.element.attributes, &b.element.attributes);
                prop_assert_eq!(a.fingerprint(), b.fingerprint());
                Ok(())
            },
        )
        .unwrap();
}

/// Explicit channels beat the parent frame; absent channels inherit it
#[test]
fn test_explicit_beats_inherited_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(
                frame(),
                proptest::option::of(prominence()),
                proptest::option::of(intent()),
                proptest::option::of(density()),
            ),
            |(parent, prominence, intent, density)| {
                let explicit = ExplicitSemantics {
                    prominence,
                    intent,
                    density,
                };
                let resolved = resolve_semantics(
                    Family::Block,
                    "Card",
                    &explicit,
                    ParentContext::from(&parent),
                );
                prop_assert_eq!(resolved.prominence, prominence.unwrap_or(parent.prominence));
                prop_assert_eq!(resolved.intent, intent.unwrap_or(parent.intent));
                prop_assert_eq!(resolved.density, density.unwrap_or(parent.density));
                prop_assert_eq!(resolved.depth, parent.depth);
                Ok(())
            },
        )
        .unwrap();
}

/// With idle suppressed, unselected nodes never carry resting-state classes
#[test]
fn test_idle_suppression_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(prominence(), intent(), any::<bool>(), any::<bool>(), any::<bool>()),
            |(prominence, intent, disabled, clickable, focusable)| {
                let request = InteractiveRequest {
                    prominence,
                    intent,
                    config: InteractiveClassConfig {
                        selected: false,
                        disabled,
                        clickable,
                        focusable,
                    },
                    skip_idle: true,
                };
                let classes = resolve_interactive_classes(&request);
                prop_assert!(!classes.contains(&idle_classes(prominence, intent)));
                Ok(())
            },
        )
        .unwrap();
}

/// Depth grows by exactly one per rendered level, whatever the nesting
#[test]
fn test_depth_monotonicity_property() {
    let registry = RoleRegistry::new();
    let pipeline = Pipeline::new(&registry);
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &proptest::collection::vec((any::<bool>(), proptest::option::of(intent())), 1..8),
            |levels| {
                let mut node = SemanticNode::new(Family::Text, "Caption").with_child("x");
                for (anonymous, intent) in &levels {
                    let mut props = SemanticProps::new();
                    if let Some(intent) = intent {
                        props = props.with_intent(*intent);
                    }
                    let container = if *anonymous {
                        SemanticNode::anonymous(Family::Block)
                    } else {
                        SemanticNode::new(Family::Block, "Group")
                    };
                    node = container.with_props(props).with_child(node);
                }

                let rendered = pipeline.render_tree(&node, ParentContext::Root);
                let mut deepest = 0u32;
                let mut ok = true;
                rendered.element.walk(&mut |element: &Element, parent: Option<&Element>| {
                    let depth = depth_of(element);
                    let expected = parent.map(|p| depth_of(p) + 1).unwrap_or(1);
                    ok &= depth == expected;
                    deepest = deepest.max(depth);
                });
                prop_assert!(ok);
                prop_assert_eq!(deepest as usize, levels.len() + 1);
                Ok(())
            },
        )
        .unwrap();
}

fn depth_of(element: &Element) -> u32 {
    element
        .attr("data-depth")
        .and_then(|d| d.parse().ok())
        .unwrap_or(0)
}

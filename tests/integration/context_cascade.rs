//! Context frames across nested trees

use super::test_utils::recording_registry;
use semweave::node::Child;
use semweave::{
    ContextFrame, Density, Element, Family, Intent, ParentContext, Pipeline, Prominence,
    SemanticNode, SemanticProps,
};

fn depth_of(element: &Element) -> u32 {
    element.attr("data-depth").unwrap().parse().unwrap()
}

fn nested(levels: usize) -> SemanticNode {
    let mut node = SemanticNode::new(Family::Text, "Body").with_child("leaf");
    for i in 0..levels {
        node = if i % 2 == 0 {
            SemanticNode::anonymous(Family::Block).with_child(node)
        } else {
            SemanticNode::new(Family::Block, "Section").with_child(node)
        };
    }
    node
}

#[test]
fn depth_increases_by_one_at_every_level() {
    let (registry, sink) = recording_registry();
    let pipeline = Pipeline::new(&registry);
    let rendered = pipeline.render_tree(&nested(6), ParentContext::Root);

    let mut visited = 0;
    rendered.element.walk(&mut |element, parent| {
        visited += 1;
        match parent {
            Some(parent) => assert_eq!(depth_of(element), depth_of(parent) + 1),
            None => assert_eq!(depth_of(element), 1),
        }
    });
    assert_eq!(visited, 7);
    // Role-less containers are not unknown roles
    assert!(sink.is_empty());
}

#[test]
fn channels_inherit_independently() {
    let (registry, _) = recording_registry();
    let pipeline = Pipeline::new(&registry);
    let tree = SemanticNode::new(Family::Block, "Dialog")
        .with_props(
            SemanticProps::new()
                .with_intent(Intent::Critical)
                .with_density(Density::Compact),
        )
        .with_children(vec![
            Child::from(
                SemanticNode::new(Family::Action, "Button")
                    .with_props(SemanticProps::new().with_prominence(Prominence::Strong))
                    .with_child("Delete"),
            ),
            Child::from(
                SemanticNode::new(Family::Action, "Button")
                    .with_props(SemanticProps::new().with_intent(Intent::Neutral))
                    .with_child("Cancel"),
            ),
        ]);
    let rendered = pipeline.render_tree(&tree, ParentContext::Root);
    let buttons: Vec<&Element> = rendered.element.child_elements().collect();
    assert_eq!(buttons.len(), 2);

    assert_eq!(buttons[0].attr("data-prominence"), Some("Strong"));
    assert_eq!(buttons[0].attr("data-intent"), Some("Critical"));
    assert_eq!(buttons[0].attr("data-density"), Some("Compact"));

    assert_eq!(buttons[1].attr("data-prominence"), Some("Standard"));
    assert_eq!(buttons[1].attr("data-intent"), Some("Neutral"));
    assert_eq!(buttons[1].attr("data-density"), Some("Compact"));
}

#[test]
fn render_under_explicit_frame_matches_tree_render() {
    let (registry, _) = recording_registry();
    let pipeline = Pipeline::new(&registry);

    let card = pipeline.render(
        Family::Block,
        "Card",
        &SemanticProps::new().with_intent(Intent::Positive),
        vec![],
        ParentContext::Root,
    );
    let frame: ContextFrame = card.frame.clone();
    assert_eq!(frame.depth, 1);
    assert_eq!(frame.role.as_deref(), Some("Card"));

    let manual = pipeline.render(
        Family::Text,
        "Caption",
        &SemanticProps::new(),
        vec!["ok".into()],
        ParentContext::from(&frame),
    );

    let tree = SemanticNode::new(Family::Block, "Card")
        .with_props(SemanticProps::new().with_intent(Intent::Positive))
        .with_child(SemanticNode::new(Family::Text, "Caption").with_child("ok"));
    let from_tree = pipeline.render_tree(&tree, ParentContext::Root);
    let caption = from_tree.element.child_elements().next().unwrap();

    assert_eq!(&manual.element, caption);
}

#[test]
fn depth_saturates_under_deepest_frame() {
    let (registry, _) = recording_registry();
    let pipeline = Pipeline::new(&registry);
    let deepest = ContextFrame {
        depth: u32::MAX,
        ..ContextFrame::root()
    };

    let rendered = pipeline.render(
        Family::Block,
        "Card",
        &SemanticProps::new(),
        vec![],
        ParentContext::from(&deepest),
    );
    assert_eq!(rendered.frame.depth, u32::MAX);
    assert_eq!(
        rendered.element.attr("data-depth"),
        Some(u32::MAX.to_string().as_str())
    );
}

//! Context Cascade
//!
//! Ambient semantic state flows from parent to children as explicit
//! `ContextFrame` values. There is no hidden global or thread-local: every
//! resolution takes a `ParentContext`, and every rendered node provides a new
//! frame one level deeper to its children.

use crate::vocabulary::{Density, Family, Intent, Prominence};
use serde::{Deserialize, Serialize};

/// Inherited semantic state visible to a subtree. Immutable; children get a
/// fresh frame instead of a mutated one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContextFrame {
    pub prominence: Prominence,
    pub intent: Intent,
    pub density: Density,
    /// Role of the node that provided this frame (`None` at the root)
    pub role: Option<String>,
    /// Nesting depth; saturates at `u32::MAX`
    pub depth: u32,
}

impl ContextFrame {
    /// Frame synthesized above the outermost node
    pub fn root() -> Self {
        Self {
            prominence: Prominence::Standard,
            intent: Intent::Neutral,
            density: Density::Standard,
            role: None,
            depth: 0,
        }
    }

    /// Frame a resolved node provides to its children
    pub fn child_of(semantics: &ResolvedSemantics) -> Self {
        Self {
            prominence: semantics.prominence,
            intent: semantics.intent,
            density: semantics.density,
            role: Some(semantics.role.clone()),
            depth: semantics.depth.saturating_add(1),
        }
    }

    pub fn is_root(&self) -> bool {
        self.depth == 0 && self.role.is_none()
    }
}

impl Default for ContextFrame {
    fn default() -> Self {
        Self::root()
    }
}

/// The frame a resolution call reads from. `Root` stands for "no enclosing
/// provider".
#[derive(Debug, Clone, Copy)]
pub enum ParentContext<'a> {
    Root,
    Frame(&'a ContextFrame),
}

impl<'a> ParentContext<'a> {
    /// Nearest enclosing frame, or the synthesized root frame
    pub fn read(&self) -> ContextFrame {
        match self {
            ParentContext::Root => ContextFrame::root(),
            ParentContext::Frame(frame) => (*frame).clone(),
        }
    }

    pub fn depth(&self) -> u32 {
        match self {
            ParentContext::Root => 0,
            ParentContext::Frame(frame) => frame.depth,
        }
    }
}

impl<'a> From<&'a ContextFrame> for ParentContext<'a> {
    fn from(frame: &'a ContextFrame) -> Self {
        ParentContext::Frame(frame)
    }
}

/// Open a scope: `children` runs with `frame` as its parent context.
pub fn provide<R>(frame: &ContextFrame, children: impl FnOnce(ParentContext<'_>) -> R) -> R {
    children(ParentContext::Frame(frame))
}

/// Semantic props a node declares explicitly
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplicitSemantics {
    pub prominence: Option<Prominence>,
    pub intent: Option<Intent>,
    pub density: Option<Density>,
}

/// Fully-defined semantics for one node after the cascade
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedSemantics {
    pub family: Family,
    pub role: String,
    pub prominence: Prominence,
    pub intent: Intent,
    pub density: Density,
    /// Depth of the frame this node was resolved against
    pub depth: u32,
}

/// Merge explicit props with the parent frame: explicit beats inherited, and
/// inherited beats the built-in default. Each channel is resolved
/// independently.
pub fn resolve_semantics(
    family: Family,
    role: &str,
    explicit: &ExplicitSemantics,
    parent: ParentContext<'_>,
) -> ResolvedSemantics {
    let frame = parent.read();
    ResolvedSemantics {
        family,
        role: role.to_string(),
        prominence: explicit.prominence.unwrap_or(frame.prominence),
        intent: explicit.intent.unwrap_or(frame.intent),
        density: explicit.density.unwrap_or(frame.density),
        depth: frame.depth,
    }
}

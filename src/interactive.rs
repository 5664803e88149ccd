//! Interactive-State Resolver
//!
//! Pointer and keyboard affordances (idle, selected, focus, hover, active,
//! disabled) as a class group independent of the token engine.

use crate::vocabulary::{Intent, Prominence};
use serde::{Deserialize, Serialize};

/// Interaction flags for one node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InteractiveClassConfig {
    pub selected: bool,
    pub disabled: bool,
    pub clickable: bool,
    pub focusable: bool,
}

/// Input to `resolve_interactive_classes`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InteractiveRequest {
    pub prominence: Prominence,
    pub intent: Intent,
    pub config: InteractiveClassConfig,
    /// Omit resting-state classes because the token resolver already owns
    /// idle visuals for this node
    pub skip_idle: bool,
}

/// Marker carried by every selected node, hovered or not
pub const SELECTED_MARKER: &str = "is-selected";

const DISABLED_CLASSES: &str = "opacity-50 cursor-not-allowed pointer-events-none";

/// Resting-state classes emitted when the caller does not own idle visuals
pub fn idle_classes(prominence: Prominence, intent: Intent) -> String {
    if prominence.is_solid() {
        intent.expand("bg-{c}-600 text-white")
    } else {
        intent.expand("bg-transparent text-{c}-700")
    }
}

fn selected_classes(intent: Intent) -> String {
    intent.expand("is-selected bg-{c}-100 text-{c}-800 ring-1 ring-inset ring-{c}-300")
}

fn focus_classes(intent: Intent) -> String {
    intent.expand(
        "focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-{c}-500 focus-visible:ring-offset-1",
    )
}

fn pointer_classes(prominence: Prominence, intent: Intent, selected: bool) -> String {
    let template = if selected {
        // hold the selected fill under the pointer
        "cursor-pointer transition-colors hover:bg-{c}-100 active:bg-{c}-200"
    } else if prominence.is_solid() {
        "cursor-pointer transition-colors hover:bg-{c}-700 active:bg-{c}-800"
    } else {
        "cursor-pointer transition-colors hover:bg-{c}-50 active:bg-{c}-100"
    };
    intent.expand(template)
}

/// Compute the interactive class group.
///
/// Order: idle, selected, focus, pointer, disabled. `disabled` suppresses
/// focus and pointer affordances entirely; `selected` keeps its marker and
/// fill regardless of the other flags.
pub fn resolve_interactive_classes(request: &InteractiveRequest) -> String {
    let InteractiveRequest {
        prominence,
        intent,
        config,
        skip_idle,
    } = *request;

    let mut parts: Vec<String> = Vec::new();

    if config.selected {
        parts.push(selected_classes(intent));
    } else if !skip_idle {
        parts.push(idle_classes(prominence, intent));
    }

    if !config.disabled {
        if config.focusable {
            parts.push(focus_classes(intent));
        }
        if config.clickable {
            parts.push(pointer_classes(prominence, intent, config.selected));
        }
    } else {
        parts.push(DISABLED_CLASSES.to_string());
    }

    parts.join(" ")
}

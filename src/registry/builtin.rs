//! Built-in role tables for the four families.

use super::descriptor::{RoleDescriptor, SelectionAttr};
use crate::renderer::{ActionRenderer, ElementRenderer, FieldRenderer, HeadingRenderer, Renderer};
use crate::vocabulary::Family;
use std::collections::BTreeMap;
use std::sync::Arc;

struct BuiltinRole {
    role: &'static str,
    tag: &'static str,
    aria: &'static [(&'static str, &'static str)],
    base: &'static str,
    renderer: fn() -> Arc<dyn Renderer>,
    description: &'static str,
    interaction: Interaction,
    selection: Option<SelectionAttr>,
}

#[derive(Clone, Copy)]
enum Interaction {
    /// clickable + focusable + native disabled
    Control,
    /// focusable + native disabled
    Input,
    Inert,
}

fn action() -> Arc<dyn Renderer> {
    Arc::new(ActionRenderer)
}

fn element() -> Arc<dyn Renderer> {
    Arc::new(ElementRenderer)
}

fn text_input() -> Arc<dyn Renderer> {
    Arc::new(FieldRenderer::input("input", "text"))
}

fn search_input() -> Arc<dyn Renderer> {
    Arc::new(FieldRenderer::input("search", "search"))
}

fn checkbox() -> Arc<dyn Renderer> {
    Arc::new(FieldRenderer::input("checkbox", "checkbox"))
}

fn radio() -> Arc<dyn Renderer> {
    Arc::new(FieldRenderer::input("radio", "radio"))
}

fn textarea() -> Arc<dyn Renderer> {
    Arc::new(FieldRenderer::container("textarea"))
}

fn select() -> Arc<dyn Renderer> {
    Arc::new(FieldRenderer::container("select"))
}

fn title() -> Arc<dyn Renderer> {
    Arc::new(HeadingRenderer::new("title", 1))
}

fn heading() -> Arc<dyn Renderer> {
    Arc::new(HeadingRenderer::new("heading", 2))
}

const ACTION: &[BuiltinRole] = &[
    BuiltinRole {
        role: "Button",
        tag: "button",
        aria: &[],
        base: "inline-flex items-center justify-center select-none whitespace-nowrap",
        renderer: action,
        description: "Primary command trigger",
        interaction: Interaction::Control,
        selection: Some(SelectionAttr::Pressed),
    },
    BuiltinRole {
        role: "IconButton",
        tag: "button",
        aria: &[],
        base: "inline-flex shrink-0 items-center justify-center select-none",
        renderer: action,
        description: "Icon-only command; callers supply aria-label",
        interaction: Interaction::Control,
        selection: Some(SelectionAttr::Pressed),
    },
    BuiltinRole {
        role: "Link",
        tag: "a",
        aria: &[],
        base: "inline-flex items-center",
        renderer: action,
        description: "Navigation to another location",
        interaction: Interaction::Control,
        selection: Some(SelectionAttr::Current),
    },
    BuiltinRole {
        role: "MenuItem",
        tag: "button",
        aria: &[("role", "menuitem")],
        base: "flex w-full items-center text-left select-none",
        renderer: action,
        description: "Entry in a menu",
        interaction: Interaction::Control,
        selection: None,
    },
    BuiltinRole {
        role: "Tab",
        tag: "button",
        aria: &[("role", "tab")],
        base: "inline-flex items-center justify-center select-none whitespace-nowrap",
        renderer: action,
        description: "Tab in a tab list",
        interaction: Interaction::Control,
        selection: Some(SelectionAttr::Selected),
    },
    BuiltinRole {
        role: "ToggleButton",
        tag: "button",
        aria: &[],
        base: "inline-flex items-center justify-center select-none whitespace-nowrap",
        renderer: action,
        description: "Two-state button",
        interaction: Interaction::Control,
        selection: Some(SelectionAttr::Pressed),
    },
    BuiltinRole {
        role: "Chip",
        tag: "button",
        aria: &[],
        base: "inline-flex items-center select-none whitespace-nowrap",
        renderer: action,
        description: "Compact filter or tag toggle",
        interaction: Interaction::Control,
        selection: Some(SelectionAttr::Pressed),
    },
];

const FIELD: &[BuiltinRole] = &[
    BuiltinRole {
        role: "Textbox",
        tag: "input",
        aria: &[],
        base: "block",
        renderer: text_input,
        description: "Single-line text entry",
        interaction: Interaction::Input,
        selection: None,
    },
    BuiltinRole {
        role: "Textarea",
        tag: "textarea",
        aria: &[],
        base: "block resize-y",
        renderer: textarea,
        description: "Multi-line text entry",
        interaction: Interaction::Input,
        selection: None,
    },
    BuiltinRole {
        role: "Searchbox",
        tag: "input",
        aria: &[],
        base: "block",
        renderer: search_input,
        description: "Search query entry",
        interaction: Interaction::Input,
        selection: None,
    },
    BuiltinRole {
        role: "Select",
        tag: "select",
        aria: &[],
        base: "block appearance-none",
        renderer: select,
        description: "Choice from a list of options",
        interaction: Interaction::Input,
        selection: None,
    },
    BuiltinRole {
        role: "Checkbox",
        tag: "input",
        aria: &[],
        base: "shrink-0 accent-current",
        renderer: checkbox,
        description: "Independent on/off choice",
        interaction: Interaction::Control,
        selection: Some(SelectionAttr::Checked),
    },
    BuiltinRole {
        role: "Radio",
        tag: "input",
        aria: &[],
        base: "shrink-0 accent-current",
        renderer: radio,
        description: "One choice within a group",
        interaction: Interaction::Control,
        selection: Some(SelectionAttr::Checked),
    },
    BuiltinRole {
        role: "Switch",
        tag: "button",
        aria: &[("role", "switch")],
        base: "relative inline-flex shrink-0 items-center",
        renderer: action,
        description: "Immediate on/off setting",
        interaction: Interaction::Control,
        selection: Some(SelectionAttr::Checked),
    },
];

const BLOCK: &[BuiltinRole] = &[
    BuiltinRole {
        role: "Container",
        tag: "div",
        aria: &[],
        base: "flex flex-col",
        renderer: element,
        description: "Generic layout container",
        interaction: Interaction::Inert,
        selection: None,
    },
    BuiltinRole {
        role: "Card",
        tag: "div",
        aria: &[],
        base: "flex flex-col overflow-hidden",
        renderer: element,
        description: "Bounded surface grouping related content",
        interaction: Interaction::Inert,
        selection: Some(SelectionAttr::Current),
    },
    BuiltinRole {
        role: "Section",
        tag: "section",
        aria: &[],
        base: "flex flex-col",
        renderer: element,
        description: "Thematic page section",
        interaction: Interaction::Inert,
        selection: None,
    },
    BuiltinRole {
        role: "Toolbar",
        tag: "div",
        aria: &[("role", "toolbar"), ("aria-orientation", "horizontal")],
        base: "flex flex-row items-center",
        renderer: element,
        description: "Row of related controls",
        interaction: Interaction::Inert,
        selection: None,
    },
    BuiltinRole {
        role: "List",
        tag: "ul",
        aria: &[],
        base: "flex flex-col list-none",
        renderer: element,
        description: "Vertical list of items",
        interaction: Interaction::Inert,
        selection: None,
    },
    BuiltinRole {
        role: "ListItem",
        tag: "li",
        aria: &[],
        base: "flex items-center",
        renderer: element,
        description: "Item in a list",
        interaction: Interaction::Inert,
        selection: Some(SelectionAttr::Current),
    },
    BuiltinRole {
        role: "Navigation",
        tag: "nav",
        aria: &[],
        base: "flex flex-col",
        renderer: element,
        description: "Navigation landmark",
        interaction: Interaction::Inert,
        selection: None,
    },
    BuiltinRole {
        role: "Dialog",
        tag: "div",
        aria: &[("role", "dialog"), ("aria-modal", "true")],
        base: "flex flex-col",
        renderer: element,
        description: "Modal dialog surface",
        interaction: Interaction::Inert,
        selection: None,
    },
    BuiltinRole {
        role: "Group",
        tag: "div",
        aria: &[("role", "group")],
        base: "flex flex-row items-center",
        renderer: element,
        description: "Cluster of related items",
        interaction: Interaction::Inert,
        selection: None,
    },
];

const TEXT: &[BuiltinRole] = &[
    BuiltinRole {
        role: "Body",
        tag: "p",
        aria: &[],
        base: "",
        renderer: element,
        description: "Running text",
        interaction: Interaction::Inert,
        selection: None,
    },
    BuiltinRole {
        role: "Title",
        tag: "h1",
        aria: &[],
        base: "",
        renderer: title,
        description: "Page or surface title",
        interaction: Interaction::Inert,
        selection: None,
    },
    BuiltinRole {
        role: "Heading",
        tag: "h2",
        aria: &[],
        base: "",
        renderer: heading,
        description: "Section heading",
        interaction: Interaction::Inert,
        selection: None,
    },
    BuiltinRole {
        role: "Label",
        tag: "label",
        aria: &[],
        base: "inline-block",
        renderer: element,
        description: "Label for a control",
        interaction: Interaction::Inert,
        selection: None,
    },
    BuiltinRole {
        role: "Caption",
        tag: "span",
        aria: &[],
        base: "block",
        renderer: element,
        description: "Secondary descriptive text",
        interaction: Interaction::Inert,
        selection: None,
    },
    BuiltinRole {
        role: "Code",
        tag: "code",
        aria: &[],
        base: "whitespace-pre-wrap break-words",
        renderer: element,
        description: "Inline code",
        interaction: Interaction::Inert,
        selection: None,
    },
];

fn table_for(family: Family) -> &'static [BuiltinRole] {
    match family {
        Family::Action => ACTION,
        Family::Field => FIELD,
        Family::Block => BLOCK,
        Family::Text => TEXT,
    }
}

fn to_descriptor(entry: &BuiltinRole) -> RoleDescriptor {
    let (clickable, focusable, native_disabled) = match entry.interaction {
        Interaction::Control => (true, true, true),
        Interaction::Input => (false, true, true),
        Interaction::Inert => (false, false, false),
    };
    RoleDescriptor {
        html_tag: entry.tag.to_string(),
        aria_props: entry
            .aria
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
        base_styles: entry.base.to_string(),
        renderer: (entry.renderer)(),
        description: entry.description.to_string(),
        clickable,
        focusable,
        native_disabled: native_disabled && entry.tag != "a",
        selection_attr: entry.selection,
    }
}

/// Built-in roles for a family, in declaration order
pub fn builtin_roles(family: Family) -> Vec<(&'static str, RoleDescriptor)> {
    table_for(family)
        .iter()
        .map(|entry| (entry.role, to_descriptor(entry)))
        .collect()
}

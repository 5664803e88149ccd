//! Field family tables: Textbox, Textarea, Searchbox, Select, Checkbox, Switch, Radio.

use super::{Decl, FamilyTables, StyleProp::*};
use crate::vocabulary::{Density, Prominence, Size};

pub(super) const TABLES: FamilyTables = FamilyTables {
    base,
    surface,
    compound,
    spacing,
    size,
};

fn base(role: &str) -> &'static [Decl] {
    match role {
        "Checkbox" => &[(Radius, "rounded-sm"), (BorderWidth, "border"), (Height, "h-4"), (Width, "w-4")],
        "Radio" => &[(Radius, "rounded-full"), (BorderWidth, "border"), (Height, "h-4"), (Width, "w-4")],
        "Switch" => &[(Radius, "rounded-full"), (BorderWidth, "border-2"), (Height, "h-5"), (Width, "w-9")],
        "Textarea" => &[
            (FontFamily, "font-sans"),
            (FontSize, "text-sm"),
            (FontWeight, "font-normal"),
            (LineHeight, "leading-6"),
            (Radius, "rounded-md"),
            (BorderWidth, "border"),
            (MinHeight, "min-h-[5rem]"),
            (Width, "w-full"),
        ],
        "Searchbox" => &[
            (FontFamily, "font-sans"),
            (FontSize, "text-sm"),
            (FontWeight, "font-normal"),
            (LineHeight, "leading-5"),
            (Radius, "rounded-full"),
            (BorderWidth, "border"),
            (Height, "h-9"),
            (Width, "w-full"),
        ],
        _ => &[
            (FontFamily, "font-sans"),
            (FontSize, "text-sm"),
            (FontWeight, "font-normal"),
            (LineHeight, "leading-5"),
            (Radius, "rounded-md"),
            (BorderWidth, "border"),
            (Height, "h-9"),
            (Width, "w-full"),
        ],
    }
}

fn surface(role: &str, prominence: Prominence) -> &'static [Decl] {
    match (role, prominence) {
        ("Checkbox" | "Radio", _) => &[
            (Background, "bg-white"),
            (TextColor, "text-{c}-600"),
            (BorderColor, "border-{c}-400"),
        ],
        ("Switch", _) => &[
            (Background, "bg-slate-200"),
            (TextColor, "text-{c}-600"),
            (BorderColor, "border-transparent"),
        ],
        (_, Prominence::Hero) => &[
            (Background, "bg-white"),
            (TextColor, "text-slate-900"),
            (BorderColor, "border-{c}-500"),
        ],
        (_, Prominence::Strong) => &[
            (Background, "bg-white"),
            (TextColor, "text-slate-900"),
            (BorderColor, "border-{c}-400"),
        ],
        (_, Prominence::Standard) => &[
            (Background, "bg-white"),
            (TextColor, "text-slate-900"),
            (BorderColor, "border-{c}-300"),
        ],
        (_, Prominence::Subtle) => &[
            (Background, "bg-slate-50"),
            (TextColor, "text-slate-700"),
            (BorderColor, "border-transparent"),
        ],
    }
}

fn compound(role: &str, prominence: Prominence) -> &'static [Decl] {
    match (role, prominence) {
        ("Checkbox" | "Radio", Prominence::Hero) => &[(Height, "h-5"), (Width, "w-5")],
        ("Switch", Prominence::Hero) => &[(Height, "h-6"), (Width, "w-11")],
        ("Checkbox" | "Radio" | "Switch", _) => &[],
        ("Textarea", Prominence::Hero) => &[(FontSize, "text-base"), (MinHeight, "min-h-[8rem]"), (Shadow, "shadow-sm")],
        (_, Prominence::Hero) => &[(FontSize, "text-base"), (Height, "h-11"), (Shadow, "shadow-sm")],
        (_, Prominence::Strong) => &[(Shadow, "shadow-sm")],
        (_, Prominence::Standard) => &[],
        (_, Prominence::Subtle) => &[(BorderWidth, "border-0")],
    }
}

fn spacing(role: &str, density: Density) -> &'static [Decl] {
    match (role, density) {
        ("Checkbox" | "Radio" | "Switch", _) => &[],
        ("Textarea", Density::Compact) => &[(PaddingX, "px-2"), (PaddingY, "py-1")],
        ("Textarea", Density::Standard) => &[(PaddingX, "px-3"), (PaddingY, "py-2")],
        ("Textarea", Density::Comfortable) => &[(PaddingX, "px-4"), (PaddingY, "py-3")],
        (_, Density::Compact) => &[(PaddingX, "px-2"), (PaddingY, "py-1")],
        (_, Density::Standard) => &[(PaddingX, "px-3"), (PaddingY, "py-1.5")],
        (_, Density::Comfortable) => &[(PaddingX, "px-3.5"), (PaddingY, "py-2")],
    }
}

fn size(role: &str, size: Size) -> &'static [Decl] {
    match (role, size) {
        (_, Size::Medium) | ("Textarea", _) => &[],
        ("Checkbox" | "Radio", Size::Small) => &[(Height, "h-3.5"), (Width, "w-3.5")],
        ("Checkbox" | "Radio", Size::Large) => &[(Height, "h-5"), (Width, "w-5")],
        ("Switch", Size::Small) => &[(Height, "h-4"), (Width, "w-7")],
        ("Switch", Size::Large) => &[(Height, "h-6"), (Width, "w-11")],
        (_, Size::Small) => &[(Height, "h-7"), (FontSize, "text-xs")],
        (_, Size::Large) => &[(Height, "h-11"), (FontSize, "text-base")],
    }
}

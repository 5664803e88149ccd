//! Action family tables: Button, IconButton, Link, MenuItem, Tab, ToggleButton, Chip.

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
        "Link" => &[
            (FontFamily, "font-sans"),
            (FontSize, "text-sm"),
            (FontWeight, "font-medium"),
            (LineHeight, "leading-5"),
            (TextDecoration, "underline-offset-4"),
            (Radius, "rounded-sm"),
            (BorderWidth, "border-0"),
        ],
        "IconButton" => &[
            (LineHeight, "leading-none"),
            (Radius, "rounded-md"),
            (BorderWidth, "border"),
            (Height, "h-9"),
            (Width, "w-9"),
        ],
        "MenuItem" => &[
            (FontFamily, "font-sans"),
            (FontSize, "text-sm"),
            (FontWeight, "font-normal"),
            (LineHeight, "leading-5"),
            (Radius, "rounded-sm"),
            (BorderWidth, "border-0"),
            (Height, "h-8"),
            (Width, "w-full"),
        ],
        "Tab" => &[
            (FontFamily, "font-sans"),
            (FontSize, "text-sm"),
            (FontWeight, "font-medium"),
            (LineHeight, "leading-5"),
            (Radius, "rounded-none"),
            (BorderWidth, "border-b-2"),
            (Height, "h-9"),
        ],
        "Chip" => &[
            (FontFamily, "font-sans"),
            (FontSize, "text-xs"),
            (FontWeight, "font-medium"),
            (LineHeight, "leading-4"),
            (Radius, "rounded-full"),
            (BorderWidth, "border"),
            (Height, "h-6"),
        ],
        _ => &[
            (FontFamily, "font-sans"),
            (FontSize, "text-sm"),
            (FontWeight, "font-medium"),
            (LineHeight, "leading-5"),
            (Radius, "rounded-md"),
            (BorderWidth, "border"),
            (Height, "h-9"),
        ],
    }
}

fn surface(role: &str, prominence: Prominence) -> &'static [Decl] {
    match (role, prominence) {
        ("Link", Prominence::Subtle) => &[(Background, "bg-transparent"), (TextColor, "text-{c}-500")],
        ("Link", _) => &[(Background, "bg-transparent"), (TextColor, "text-{c}-600")],
        ("Tab" | "MenuItem", Prominence::Hero | Prominence::Strong) => &[
            (Background, "bg-transparent"),
            (TextColor, "text-{c}-700"),
            (BorderColor, "border-transparent"),
        ],
        ("Tab" | "MenuItem", Prominence::Standard) => &[
            (Background, "bg-transparent"),
            (TextColor, "text-slate-700"),
            (BorderColor, "border-transparent"),
        ],
        ("Tab" | "MenuItem", Prominence::Subtle) => &[
            (Background, "bg-transparent"),
            (TextColor, "text-slate-500"),
            (BorderColor, "border-transparent"),
        ],
        (_, Prominence::Hero) => &[
            (Background, "bg-{c}-600"),
            (TextColor, "text-white"),
            (BorderColor, "border-transparent"),
        ],
        (_, Prominence::Strong) => &[
            (Background, "bg-{c}-500"),
            (TextColor, "text-white"),
            (BorderColor, "border-transparent"),
        ],
        (_, Prominence::Standard) => &[
            (Background, "bg-white"),
            (TextColor, "text-{c}-700"),
            (BorderColor, "border-{c}-300"),
        ],
        (_, Prominence::Subtle) => &[
            (Background, "bg-transparent"),
            (TextColor, "text-{c}-600"),
            (BorderColor, "border-transparent"),
        ],
    }
}

fn compound(role: &str, prominence: Prominence) -> &'static [Decl] {
    match (role, prominence) {
        ("Link", Prominence::Hero) => &[(FontSize, "text-base"), (FontWeight, "font-semibold")],
        ("Link", _) => &[],
        ("IconButton", Prominence::Hero) => &[(Height, "h-11"), (Width, "w-11"), (Shadow, "shadow-md")],
        ("IconButton", Prominence::Strong) => &[(Shadow, "shadow-sm")],
        ("MenuItem", Prominence::Hero) => &[(FontWeight, "font-semibold")],
        ("Tab", Prominence::Hero) => &[(FontSize, "text-base"), (FontWeight, "font-semibold")],
        ("Tab", Prominence::Subtle) => &[(FontWeight, "font-normal"), (BorderWidth, "border-b")],
        ("Chip", Prominence::Hero) => &[(FontWeight, "font-semibold")],
        ("MenuItem" | "Tab" | "Chip", _) => &[],
        (_, Prominence::Hero) => &[
            (FontSize, "text-base"),
            (FontWeight, "font-semibold"),
            (Height, "h-11"),
            (Shadow, "shadow-md"),
        ],
        (_, Prominence::Strong) => &[(FontWeight, "font-semibold"), (Shadow, "shadow-sm")],
        (_, Prominence::Standard) => &[],
        (_, Prominence::Subtle) => &[(FontWeight, "font-normal")],
    }
}

fn spacing(role: &str, density: Density) -> &'static [Decl] {
    match (role, density) {
        ("IconButton", Density::Compact) => &[(Padding, "p-1")],
        ("IconButton", Density::Standard) => &[(Padding, "p-2")],
        ("IconButton", Density::Comfortable) => &[(Padding, "p-2.5")],
        ("Link", Density::Compact) => &[(Gap, "gap-0.5")],
        ("Link", Density::Standard) => &[(Gap, "gap-1")],
        ("Link", Density::Comfortable) => &[(Gap, "gap-1.5")],
        ("MenuItem", Density::Compact) => &[(PaddingX, "px-2"), (PaddingY, "py-1"), (Gap, "gap-1.5")],
        ("MenuItem", Density::Standard) => &[(PaddingX, "px-2"), (PaddingY, "py-1.5"), (Gap, "gap-2")],
        ("MenuItem", Density::Comfortable) => &[(PaddingX, "px-3"), (PaddingY, "py-2"), (Gap, "gap-2")],
        ("Tab", Density::Compact) => &[(PaddingX, "px-2"), (PaddingY, "py-1")],
        ("Tab", Density::Standard) => &[(PaddingX, "px-3"), (PaddingY, "py-2")],
        ("Tab", Density::Comfortable) => &[(PaddingX, "px-4"), (PaddingY, "py-2.5")],
        ("Chip", Density::Compact) => &[(PaddingX, "px-1.5"), (PaddingY, "py-0"), (Gap, "gap-1")],
        ("Chip", Density::Standard) => &[(PaddingX, "px-2"), (PaddingY, "py-0.5"), (Gap, "gap-1")],
        ("Chip", Density::Comfortable) => &[(PaddingX, "px-2.5"), (PaddingY, "py-1"), (Gap, "gap-1.5")],
        (_, Density::Compact) => &[(PaddingX, "px-2"), (PaddingY, "py-1"), (Gap, "gap-1")],
        (_, Density::Standard) => &[(PaddingX, "px-3"), (PaddingY, "py-1.5"), (Gap, "gap-2")],
        (_, Density::Comfortable) => &[(PaddingX, "px-4"), (PaddingY, "py-2"), (Gap, "gap-2")],
    }
}

fn size(role: &str, size: Size) -> &'static [Decl] {
    match (role, size) {
        ("Link", _) | (_, Size::Medium) => &[],
        ("IconButton", Size::Small) => &[(Height, "h-7"), (Width, "w-7")],
        ("IconButton", Size::Large) => &[(Height, "h-11"), (Width, "w-11")],
        (_, Size::Small) => &[(Height, "h-7"), (FontSize, "text-xs")],
        (_, Size::Large) => &[(Height, "h-11"), (FontSize, "text-base")],
    }
}

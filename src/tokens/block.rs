//! Block family tables: Container, Card, Section, Toolbar, List, ListItem,
//! Navigation, Dialog, Group.

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
        "Card" => &[(Radius, "rounded-lg"), (BorderWidth, "border"), (Shadow, "shadow-sm")],
        "Dialog" => &[
            (Radius, "rounded-xl"),
            (BorderWidth, "border"),
            (Width, "w-full"),
            (MaxWidth, "max-w-lg"),
            (Shadow, "shadow-xl"),
        ],
        "Toolbar" => &[(Radius, "rounded-md"), (BorderWidth, "border-b"), (MinHeight, "min-h-10")],
        "Navigation" => &[(BorderWidth, "border-r"), (Height, "h-full")],
        "ListItem" => &[
            (FontFamily, "font-sans"),
            (FontSize, "text-sm"),
            (LineHeight, "leading-5"),
            (Radius, "rounded-md"),
        ],
        "List" => &[(Width, "w-full")],
        _ => &[],
    }
}

fn surface(role: &str, prominence: Prominence) -> &'static [Decl] {
    match (role, prominence) {
        ("Card" | "Dialog", Prominence::Hero) => &[
            (Background, "bg-{c}-50"),
            (TextColor, "text-slate-900"),
            (BorderColor, "border-{c}-200"),
        ],
        ("Card" | "Dialog", Prominence::Strong) => &[
            (Background, "bg-white"),
            (TextColor, "text-slate-900"),
            (BorderColor, "border-{c}-200"),
        ],
        ("Card" | "Dialog", Prominence::Standard) => &[
            (Background, "bg-white"),
            (TextColor, "text-slate-900"),
            (BorderColor, "border-slate-200"),
        ],
        ("Card" | "Dialog", Prominence::Subtle) => &[
            (Background, "bg-slate-50"),
            (TextColor, "text-slate-700"),
            (BorderColor, "border-transparent"),
        ],
        ("Toolbar" | "Navigation", Prominence::Hero | Prominence::Strong) => &[
            (Background, "bg-{c}-600"),
            (TextColor, "text-white"),
            (BorderColor, "border-transparent"),
        ],
        ("Toolbar" | "Navigation", Prominence::Standard) => &[
            (Background, "bg-white"),
            (BorderColor, "border-slate-200"),
        ],
        ("Toolbar" | "Navigation", Prominence::Subtle) => &[
            (Background, "bg-transparent"),
            (BorderColor, "border-transparent"),
        ],
        ("ListItem", Prominence::Hero) => &[(Background, "bg-{c}-50"), (TextColor, "text-{c}-800")],
        ("ListItem", Prominence::Strong) => &[(TextColor, "text-slate-900")],
        ("ListItem", Prominence::Standard) => &[(TextColor, "text-slate-700")],
        ("ListItem", Prominence::Subtle) => &[(TextColor, "text-slate-500")],
        ("Section", Prominence::Hero) => &[(Background, "bg-{c}-50")],
        _ => &[],
    }
}

fn compound(role: &str, prominence: Prominence) -> &'static [Decl] {
    match (role, prominence) {
        ("Card", Prominence::Hero) => &[(Radius, "rounded-xl"), (Shadow, "shadow-lg")],
        ("Card", Prominence::Strong) => &[(Shadow, "shadow-md")],
        ("Card", Prominence::Subtle) => &[(Shadow, "shadow-none")],
        ("Dialog", Prominence::Subtle) => &[(Shadow, "shadow-lg")],
        ("Toolbar", Prominence::Hero) => &[(Shadow, "shadow-md"), (MinHeight, "min-h-14")],
        ("ListItem", Prominence::Hero | Prominence::Strong) => &[(FontWeight, "font-medium")],
        _ => &[],
    }
}

fn spacing(role: &str, density: Density) -> &'static [Decl] {
    match (role, density) {
        ("Card", Density::Compact) => &[(Padding, "p-2"), (Gap, "gap-2")],
        ("Card", Density::Standard) => &[(Padding, "p-4"), (Gap, "gap-3")],
        ("Card", Density::Comfortable) => &[(Padding, "p-6"), (Gap, "gap-4")],
        ("Dialog", Density::Compact) => &[(Padding, "p-4"), (Gap, "gap-3")],
        ("Dialog", Density::Standard) => &[(Padding, "p-6"), (Gap, "gap-4")],
        ("Dialog", Density::Comfortable) => &[(Padding, "p-8"), (Gap, "gap-6")],
        ("Section", Density::Compact) => &[(PaddingY, "py-2"), (Gap, "gap-2")],
        ("Section", Density::Standard) => &[(PaddingY, "py-4"), (Gap, "gap-4")],
        ("Section", Density::Comfortable) => &[(PaddingY, "py-8"), (Gap, "gap-6")],
        ("Toolbar", Density::Compact) => &[(PaddingX, "px-2"), (PaddingY, "py-1"), (Gap, "gap-1")],
        ("Toolbar", Density::Standard) => &[(PaddingX, "px-3"), (PaddingY, "py-2"), (Gap, "gap-2")],
        ("Toolbar", Density::Comfortable) => &[(PaddingX, "px-4"), (PaddingY, "py-3"), (Gap, "gap-3")],
        ("Navigation", Density::Compact) => &[(Padding, "p-2"), (Gap, "gap-0.5")],
        ("Navigation", Density::Standard) => &[(Padding, "p-3"), (Gap, "gap-1")],
        ("Navigation", Density::Comfortable) => &[(Padding, "p-4"), (Gap, "gap-2")],
        ("List", Density::Compact) => &[(Gap, "gap-0")],
        ("List", Density::Standard) => &[(Gap, "gap-0.5")],
        ("List", Density::Comfortable) => &[(Gap, "gap-1")],
        ("ListItem", Density::Compact) => &[(PaddingX, "px-2"), (PaddingY, "py-1")],
        ("ListItem", Density::Standard) => &[(PaddingX, "px-3"), (PaddingY, "py-2")],
        ("ListItem", Density::Comfortable) => &[(PaddingX, "px-4"), (PaddingY, "py-3")],
        (_, Density::Compact) => &[(Gap, "gap-1")],
        (_, Density::Standard) => &[(Gap, "gap-2")],
        (_, Density::Comfortable) => &[(Gap, "gap-4")],
    }
}

fn size(role: &str, size: Size) -> &'static [Decl] {
    match (role, size) {
        ("Dialog", Size::Small) => &[(MaxWidth, "max-w-sm")],
        ("Dialog", Size::Large) => &[(MaxWidth, "max-w-2xl")],
        _ => &[],
    }
}

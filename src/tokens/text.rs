//! Text family tables: Body, Title, Heading, Label, Caption, Code.

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
        "Title" => &[
            (FontFamily, "font-sans"),
            (FontSize, "text-xl"),
            (FontWeight, "font-semibold"),
            (LineHeight, "leading-7"),
            (Tracking, "tracking-tight"),
        ],
        "Heading" => &[
            (FontFamily, "font-sans"),
            (FontSize, "text-lg"),
            (FontWeight, "font-semibold"),
            (LineHeight, "leading-7"),
        ],
        "Label" => &[
            (FontFamily, "font-sans"),
            (FontSize, "text-sm"),
            (FontWeight, "font-medium"),
            (LineHeight, "leading-5"),
        ],
        "Caption" => &[
            (FontFamily, "font-sans"),
            (FontSize, "text-xs"),
            (FontWeight, "font-normal"),
            (LineHeight, "leading-4"),
        ],
        "Code" => &[
            (FontFamily, "font-mono"),
            (FontSize, "text-[0.8125rem]"),
            (FontWeight, "font-normal"),
            (LineHeight, "leading-5"),
            (Radius, "rounded"),
        ],
        _ => &[
            (FontFamily, "font-sans"),
            (FontSize, "text-sm"),
            (FontWeight, "font-normal"),
            (LineHeight, "leading-6"),
        ],
    }
}

fn surface(role: &str, prominence: Prominence) -> &'static [Decl] {
    match (role, prominence) {
        ("Code", _) => &[(Background, "bg-slate-100"), (TextColor, "text-{c}-800")],
        (_, Prominence::Hero) => &[(TextColor, "text-{c}-900")],
        (_, Prominence::Strong) => &[(TextColor, "text-{c}-800")],
        (_, Prominence::Standard) => &[(TextColor, "text-{c}-700")],
        (_, Prominence::Subtle) => &[(TextColor, "text-{c}-500")],
    }
}

fn compound(role: &str, prominence: Prominence) -> &'static [Decl] {
    match (role, prominence) {
        ("Title", Prominence::Hero) => &[
            (FontSize, "text-4xl"),
            (FontWeight, "font-bold"),
            (LineHeight, "leading-tight"),
            (Tracking, "tracking-tight"),
        ],
        ("Title", Prominence::Strong) => &[(FontSize, "text-2xl"), (LineHeight, "leading-8")],
        ("Title", Prominence::Subtle) => &[(FontSize, "text-lg"), (FontWeight, "font-medium")],
        ("Heading", Prominence::Hero) => &[(FontSize, "text-2xl"), (FontWeight, "font-bold"), (LineHeight, "leading-8")],
        ("Heading", Prominence::Strong) => &[(FontSize, "text-xl")],
        ("Heading", Prominence::Subtle) => &[(FontSize, "text-base"), (FontWeight, "font-medium"), (LineHeight, "leading-6")],
        ("Label", Prominence::Hero) => &[(FontSize, "text-base"), (FontWeight, "font-semibold")],
        ("Label", Prominence::Subtle) => &[(FontWeight, "font-normal")],
        ("Caption", Prominence::Hero | Prominence::Strong) => &[(FontWeight, "font-medium")],
        ("Code", _) | ("Caption", _) | ("Title", _) | ("Heading", _) | ("Label", _) => &[],
        (_, Prominence::Hero) => &[(FontSize, "text-lg"), (LineHeight, "leading-7")],
        (_, Prominence::Strong) => &[(FontWeight, "font-medium")],
        _ => &[],
    }
}

fn spacing(role: &str, density: Density) -> &'static [Decl] {
    match (role, density) {
        ("Code", Density::Compact) => &[(PaddingX, "px-0.5")],
        ("Code", Density::Standard) => &[(PaddingX, "px-1"), (PaddingY, "py-0.5")],
        ("Code", Density::Comfortable) => &[(PaddingX, "px-1.5"), (PaddingY, "py-0.5")],
        ("Title" | "Heading", Density::Compact) => &[(MarginBottom, "mb-1")],
        ("Title" | "Heading", Density::Standard) => &[(MarginBottom, "mb-2")],
        ("Title" | "Heading", Density::Comfortable) => &[(MarginBottom, "mb-4")],
        _ => &[],
    }
}

fn size(role: &str, size: Size) -> &'static [Decl] {
    match (role, size) {
        ("Title" | "Heading", _) | (_, Size::Medium) => &[],
        (_, Size::Small) => &[(FontSize, "text-xs")],
        (_, Size::Large) => &[(FontSize, "text-base")],
    }
}

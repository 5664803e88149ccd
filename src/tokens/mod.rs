//! Token Resolver
//!
//! Turns resolved semantics into named style-class groups. Resolution is a
//! pure function of its arguments: identical inputs always produce identical
//! `TokenSet`s, so results are safe to memoize.
//!
//! Each family keeps four static tables:
//! 1. base declarations keyed by role,
//! 2. surface declarations keyed by (role, prominence), templated on intent,
//! 3. compound overrides keyed by (role, prominence),
//! 4. spacing keyed by (role, density).
//!
//! Declarations are keyed by `StyleProp`. Applying a later declaration for a
//! property already present replaces the earlier class in place, so compound
//! overrides fully replace conflicting base values rather than stacking.

mod action;
mod block;
mod field;
mod text;

use crate::vocabulary::{Density, Family, Intent, Prominence, Size};
use serde::{Serialize, Serializer};
use std::fmt;

/// A style property a class controls. Determines which group the class
/// belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum StyleProp {
    FontFamily,
    FontSize,
    FontWeight,
    LineHeight,
    Tracking,
    TextDecoration,
    Background,
    TextColor,
    BorderColor,
    Radius,
    BorderWidth,
    Height,
    MinHeight,
    Width,
    MaxWidth,
    Shadow,
    Padding,
    PaddingX,
    PaddingY,
    Gap,
    MarginBottom,
}

/// Named token groups, in composition order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TokenGroupKind {
    Typography,
    Surface,
    Geometry,
    Shadow,
    Spacing,
}

impl StyleProp {
    pub fn group(&self) -> TokenGroupKind {
        use StyleProp::*;
        match self {
            FontFamily | FontSize | FontWeight | LineHeight | Tracking | TextDecoration => {
                TokenGroupKind::Typography
            }
            Background | TextColor | BorderColor => TokenGroupKind::Surface,
            Radius | BorderWidth | Height | MinHeight | Width | MaxWidth => {
                TokenGroupKind::Geometry
            }
            Shadow => TokenGroupKind::Shadow,
            Padding | PaddingX | PaddingY | Gap | MarginBottom => TokenGroupKind::Spacing,
        }
    }
}

/// Static table entry. `{c}` in the class is replaced by the intent palette.
pub(crate) type Decl = (StyleProp, &'static str);

/// Ordered, property-keyed list of classes
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenGroup {
    entries: Vec<(StyleProp, String)>,
}

impl TokenGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class for a property. An existing entry for the same property
    /// is replaced in place; otherwise the entry is appended.
    pub fn set(&mut self, prop: StyleProp, class: impl Into<String>) {
        let class = class.into();
        match self.entries.iter_mut().find(|(p, _)| *p == prop) {
            Some(entry) => entry.1 = class,
            None => self.entries.push((prop, class)),
        }
    }

    pub fn get(&self, prop: StyleProp) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| *p == prop)
            .map(|(_, class)| class.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, class)| class.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Classes in declaration order, empty classes skipped
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .map(|(_, class)| class.as_str())
            .filter(|class| !class.is_empty())
    }

    pub fn entries(&self) -> &[(StyleProp, String)] {
        &self.entries
    }
}

impl fmt::Display for TokenGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in self.classes().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
        }
        Ok(())
    }
}

impl Serialize for TokenGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Resolved, composable style-class groups for one node
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TokenSet {
    pub typography: TokenGroup,
    pub surface: TokenGroup,
    pub geometry: TokenGroup,
    pub shadow: TokenGroup,
    pub spacing: TokenGroup,
    /// Size / legacy modifiers, composed after the token-engine groups
    pub extra_classes: TokenGroup,
}

impl TokenSet {
    /// Token-engine groups in composition order
    pub fn groups(&self) -> [(TokenGroupKind, &TokenGroup); 5] {
        [
            (TokenGroupKind::Typography, &self.typography),
            (TokenGroupKind::Surface, &self.surface),
            (TokenGroupKind::Geometry, &self.geometry),
            (TokenGroupKind::Shadow, &self.shadow),
            (TokenGroupKind::Spacing, &self.spacing),
        ]
    }

    fn group_mut(&mut self, kind: TokenGroupKind) -> &mut TokenGroup {
        match kind {
            TokenGroupKind::Typography => &mut self.typography,
            TokenGroupKind::Surface => &mut self.surface,
            TokenGroupKind::Geometry => &mut self.geometry,
            TokenGroupKind::Shadow => &mut self.shadow,
            TokenGroupKind::Spacing => &mut self.spacing,
        }
    }

    fn apply(&mut self, decls: &[Decl], intent: Intent) {
        for (prop, class) in decls {
            self.group_mut(prop.group())
                .set(*prop, intent.expand(class));
        }
    }

    /// Density writes only into the spacing group
    fn apply_spacing(&mut self, decls: &[Decl]) {
        for (prop, class) in decls {
            debug_assert_eq!(prop.group(), TokenGroupKind::Spacing, "{:?}", prop);
            if prop.group() == TokenGroupKind::Spacing {
                self.spacing.set(*prop, *class);
            }
        }
    }

    fn apply_extra(&mut self, decls: &[Decl], intent: Intent) {
        for (prop, class) in decls {
            self.extra_classes.set(*prop, intent.expand(class));
        }
    }
}

/// Per-family token tables
pub(crate) struct FamilyTables {
    pub base: fn(&str) -> &'static [Decl],
    pub surface: fn(&str, Prominence) -> &'static [Decl],
    pub compound: fn(&str, Prominence) -> &'static [Decl],
    pub spacing: fn(&str, Density) -> &'static [Decl],
    pub size: fn(&str, Size) -> &'static [Decl],
}

pub(crate) fn tables_for(family: Family) -> FamilyTables {
    match family {
        Family::Action => action::TABLES,
        Family::Field => field::TABLES,
        Family::Block => block::TABLES,
        Family::Text => text::TABLES,
    }
}

/// Compute the token set for a role.
///
/// Application order is base → surface → compound → spacing, then size
/// modifiers into `extra_classes`. Roles without table entries (for example
/// roles registered at runtime) receive the family's generic tokens.
pub fn resolve_tokens(
    family: Family,
    role: &str,
    prominence: Prominence,
    intent: Intent,
    density: Density,
    size: Option<Size>,
) -> TokenSet {
    let tables = tables_for(family);
    let mut set = TokenSet::default();
    set.apply((tables.base)(role), intent);
    set.apply((tables.surface)(role, prominence), intent);
    set.apply((tables.compound)(role, prominence), intent);
    set.apply_spacing((tables.spacing)(role, density));
    if let Some(size) = size {
        set.apply_extra((tables.size)(role, size), intent);
    }
    set
}

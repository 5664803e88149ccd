//! Semantic Vocabulary
//!
//! Closed enumerations shared by every family: how important a node is
//! (`Prominence`), what it means (`Intent`), how tightly it is spaced
//! (`Density`), plus the family a role belongs to and the legacy size hint.

use crate::error::VocabularyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual-emphasis rank: Hero > Strong > Standard > Subtle
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Prominence {
    Hero,
    Strong,
    #[default]
    Standard,
    Subtle,
}

impl Prominence {
    pub const ALL: [Prominence; 4] = [
        Prominence::Hero,
        Prominence::Strong,
        Prominence::Standard,
        Prominence::Subtle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "Hero",
            Self::Strong => "Strong",
            Self::Standard => "Standard",
            Self::Subtle => "Subtle",
        }
    }

    /// Hero and Strong render as filled surfaces
    pub fn is_solid(&self) -> bool {
        matches!(self, Self::Hero | Self::Strong)
    }
}

/// Semantic color / meaning channel
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Intent {
    #[default]
    Neutral,
    Brand,
    Positive,
    Caution,
    Critical,
    Info,
}

impl Intent {
    pub const ALL: [Intent; 6] = [
        Intent::Neutral,
        Intent::Brand,
        Intent::Positive,
        Intent::Caution,
        Intent::Critical,
        Intent::Info,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::Brand => "Brand",
            Self::Positive => "Positive",
            Self::Caution => "Caution",
            Self::Critical => "Critical",
            Self::Info => "Info",
        }
    }

    /// Palette scale backing this intent. The scales themselves live in the
    /// host stylesheet; this only selects one.
    pub fn palette(&self) -> &'static str {
        match self {
            Self::Neutral => "slate",
            Self::Brand => "indigo",
            Self::Positive => "emerald",
            Self::Caution => "amber",
            Self::Critical => "rose",
            Self::Info => "sky",
        }
    }

    /// Substitute this intent's palette for `{c}` in a class template
    pub fn expand(&self, template: &str) -> String {
        if template.contains("{c}") {
            template.replace("{c}", self.palette())
        } else {
            template.to_string()
        }
    }
}

/// Spacing-scale selector. Affects spacing groups only.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Density {
    Compact,
    #[default]
    Standard,
    Comfortable,
}

impl Density {
    pub const ALL: [Density; 3] = [Density::Compact, Density::Standard, Density::Comfortable];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "Compact",
            Self::Standard => "Standard",
            Self::Comfortable => "Comfortable",
        }
    }
}

/// Legacy size modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

/// Role family. Each family owns a registry and a default role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Action,
    Field,
    Block,
    Text,
}

impl Family {
    pub const ALL: [Family; 4] = [Family::Action, Family::Field, Family::Block, Family::Text];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "action",
            Self::Field => "field",
            Self::Block => "block",
            Self::Text => "text",
        }
    }

    /// Role substituted when a lookup misses
    pub fn default_role(&self) -> &'static str {
        match self {
            Self::Action => "Button",
            Self::Field => "Textbox",
            Self::Block => "Container",
            Self::Text => "Body",
        }
    }
}

macro_rules! vocabulary_parse {
    ($ty:ident, $kind:literal, [$($variant:ident => $alias:literal),+ $(,)?]) => {
        impl FromStr for $ty {
            type Err = VocabularyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($alias => Ok($ty::$variant),)+
                    _ => Err(VocabularyError::Unknown {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vocabulary_parse!(Prominence, "prominence", [
    Hero => "hero",
    Strong => "strong",
    Standard => "standard",
    Subtle => "subtle",
]);

vocabulary_parse!(Intent, "intent", [
    Neutral => "neutral",
    Brand => "brand",
    Positive => "positive",
    Caution => "caution",
    Critical => "critical",
    Info => "info",
]);

vocabulary_parse!(Density, "density", [
    Compact => "compact",
    Standard => "standard",
    Comfortable => "comfortable",
]);

vocabulary_parse!(Size, "size", [
    Small => "small",
    Medium => "medium",
    Large => "large",
]);

vocabulary_parse!(Family, "family", [
    Action => "action",
    Field => "field",
    Block => "block",
    Text => "text",
]);

/// Name of a role within a family, e.g. "Button" or "Toolbar".
///
/// Registration requires a well-formed name; lookups accept any string and
/// fall back when it is not registered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleName(String);

impl RoleName {
    /// Validate and wrap a role name
    pub fn new(name: impl Into<String>) -> Result<Self, VocabularyError> {
        let name = name.into();
        if Self::is_well_formed(&name) {
            Ok(Self(name))
        } else {
            Err(VocabularyError::InvalidRoleName(name))
        }
    }

    pub fn is_well_formed(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            }
            _ => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RoleName {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for RoleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

//! Style composer.
//!
//! Class layers are combined in one fixed order no matter the order they are
//! supplied in: structural, interactive, typography, surface, geometry,
//! shadow, spacing, size/legacy modifiers, then the caller's class name.
//! Conflicts between distinct classes are left to the host stylesheet.

use crate::tokens::TokenSet;
use serde::Serialize;
use std::fmt;

/// Composition layers, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Structural,
    Interactive,
    Typography,
    Surface,
    Geometry,
    Shadow,
    Spacing,
    Extra,
    Caller,
}

impl Layer {
    pub const ORDER: [Layer; 9] = [
        Layer::Structural,
        Layer::Interactive,
        Layer::Typography,
        Layer::Surface,
        Layer::Geometry,
        Layer::Shadow,
        Layer::Spacing,
        Layer::Extra,
        Layer::Caller,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Collects class layers for one element
#[derive(Debug, Clone, Default)]
pub struct StyleComposer {
    layers: [Option<String>; 9],
}

impl StyleComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one layer. Setting a layer twice keeps the last value.
    pub fn layer(mut self, layer: Layer, classes: impl Into<String>) -> Self {
        let classes = normalize(&classes.into());
        self.layers[layer.index()] = if classes.is_empty() {
            None
        } else {
            Some(classes)
        };
        self
    }

    pub fn structural(self, classes: impl Into<String>) -> Self {
        self.layer(Layer::Structural, classes)
    }

    pub fn interactive(self, classes: impl Into<String>) -> Self {
        self.layer(Layer::Interactive, classes)
    }

    /// Token-engine groups plus size modifiers
    pub fn tokens(self, tokens: &TokenSet) -> Self {
        self.layer(Layer::Typography, tokens.typography.to_string())
            .layer(Layer::Surface, tokens.surface.to_string())
            .layer(Layer::Geometry, tokens.geometry.to_string())
            .layer(Layer::Shadow, tokens.shadow.to_string())
            .layer(Layer::Spacing, tokens.spacing.to_string())
            .layer(Layer::Extra, tokens.extra_classes.to_string())
    }

    pub fn caller(self, class_name: Option<&str>) -> Self {
        match class_name {
            Some(classes) => self.layer(Layer::Caller, classes),
            None => self,
        }
    }

    pub fn compose(self) -> ComposedStyle {
        let layers = Layer::ORDER
            .iter()
            .zip(self.layers)
            .filter_map(|(layer, classes)| classes.map(|c| (*layer, c)))
            .collect();
        ComposedStyle { layers }
    }
}

/// Opaque result of composition
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ComposedStyle {
    layers: Vec<(Layer, String)>,
}

impl ComposedStyle {
    /// Final class attribute value
    pub fn class_name(&self) -> String {
        self.to_string()
    }

    pub fn get(&self, layer: Layer) -> Option<&str> {
        self.layers
            .iter()
            .find(|(l, _)| *l == layer)
            .map(|(_, classes)| classes.as_str())
    }

    pub fn layers(&self) -> impl Iterator<Item = (Layer, &str)> {
        self.layers.iter().map(|(l, c)| (*l, c.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl fmt::Display for ComposedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (_, classes)) in self.layers.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(classes)?;
        }
        Ok(())
    }
}

fn normalize(classes: &str) -> String {
    classes.split_whitespace().collect::<Vec<_>>().join(" ")
}

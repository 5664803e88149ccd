//! Configuration System
//!
//! Layered configuration: built-in defaults, the global user file, workspace
//! files and `SEMWEAVE__*` environment variables, lowest to highest
//! precedence. Besides logging and diagnostics settings, configuration can
//! declare extra roles that are registered on top of the built-in tables.

use crate::diagnostics::DiagnosticPolicy;
use crate::logging::LoggingConfig;
use crate::registry::{RoleRegistry, SelectionAttr};
use crate::vocabulary::Family;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SemweaveConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,

    /// Extra roles, per family
    #[serde(default)]
    pub roles: RolesConfig,
}

/// Which recoverable registry events are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    #[serde(default = "default_true")]
    pub warn_on_overwrite: bool,

    #[serde(default = "default_true")]
    pub warn_on_unknown: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            warn_on_overwrite: true,
            warn_on_unknown: true,
        }
    }
}

impl DiagnosticsConfig {
    pub fn policy(&self) -> DiagnosticPolicy {
        DiagnosticPolicy {
            warn_on_unknown: self.warn_on_unknown,
            warn_on_overwrite: self.warn_on_overwrite,
        }
    }
}

/// Configured roles keyed by name. `BTreeMap` keeps registration order
/// stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RolesConfig {
    #[serde(default)]
    pub action: BTreeMap<String, RoleConfig>,
    #[serde(default)]
    pub field: BTreeMap<String, RoleConfig>,
    #[serde(default)]
    pub block: BTreeMap<String, RoleConfig>,
    #[serde(default)]
    pub text: BTreeMap<String, RoleConfig>,
}

impl RolesConfig {
    pub fn for_family(&self, family: Family) -> &BTreeMap<String, RoleConfig> {
        match family {
            Family::Action => &self.action,
            Family::Field => &self.field,
            Family::Block => &self.block,
            Family::Text => &self.text,
        }
    }

    pub fn len(&self) -> usize {
        Family::ALL.iter().map(|f| self.for_family(*f).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A role declared in configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleConfig {
    /// Role name when it differs from the table key. Config layers may
    /// lowercase keys, so mixed-case names should be given here.
    pub name: Option<String>,
    pub html_tag: String,
    /// Built-in renderer name (see `renderer::RENDERER_NAMES`)
    pub renderer: Option<String>,
    pub base_styles: String,
    pub description: String,
    pub aria: BTreeMap<String, String>,
    pub clickable: Option<bool>,
    pub focusable: Option<bool>,
    pub selection_attr: Option<SelectionAttr>,
}

impl RoleConfig {
    /// Name to register under
    pub fn role_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(key)
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Role(String),
    Logging(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Role(msg) => write!(f, "Role: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl SemweaveConfig {
    /// Validate the entire configuration, collecting every problem
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors: Vec<ValidationError> = RoleRegistry::validate(&self.roles)
            .into_iter()
            .map(|e| ValidationError::Role(e.to_string()))
            .collect();

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

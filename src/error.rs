//! Error types for the semweave resolution pipeline.
//!
//! Unknown roles and registry overwrites are diagnostics, not errors; see
//! `crate::diagnostics`. Only configuration defects surface here.

use crate::vocabulary::Family;
use thiserror::Error;

/// Vocabulary parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    #[error("Unknown {kind}: {value}")]
    Unknown { kind: &'static str, value: String },

    #[error("Invalid role name: {0:?} (must start with a letter and contain only letters, digits, '-' or '_')")]
    InvalidRoleName(String),
}

/// Registry configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Role '{role}' in family {family} has no renderer")]
    MissingRenderer { family: Family, role: String },

    #[error("Role '{role}' in family {family} has invalid html tag {tag:?}")]
    InvalidTag {
        family: Family,
        role: String,
        tag: String,
    },

    #[error("Unknown renderer '{name}' for role '{role}'")]
    UnknownRenderer { name: String, role: String },

    #[error("{0}")]
    InvalidRoleName(#[from] VocabularyError),
}

/// Top-level API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("{0}")]
    Vocabulary(#[from] VocabularyError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Bad command-line input, such as an unsupported output format
    #[error("{0}")]
    Usage(String),

    #[error("Invalid node tree: {0}")]
    InvalidTree(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} diagnostic(s) reported in strict mode")]
    Strict(usize),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidTree(err.to_string())
    }
}

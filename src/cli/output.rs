//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain errors to a one-line message with a stable category prefix.
pub fn map_error(e: &ApiError) -> String {
    let category = match e {
        ApiError::Registry(_) => "registry",
        ApiError::Vocabulary(_) | ApiError::Usage(_) => "usage",
        ApiError::ConfigError(_) => "config",
        ApiError::InvalidTree(_) => "tree",
        ApiError::Io(_) => "io",
        ApiError::Strict(_) => "strict",
    };
    format!("error[{}]: {}", category, e)
}

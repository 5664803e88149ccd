//! Single entry point for loading configuration.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::SemweaveConfig;
use config::{ConfigError, File};
use std::path::Path;
use tracing::debug;

/// Loads `SemweaveConfig` from the layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the global file, then workspace files, then
    /// `SEMWEAVE__*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<SemweaveConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let config = builder.add_source(merge_policy::environment()).build()?;
        let loaded: SemweaveConfig = config.try_deserialize()?;
        debug!(
            workspace = %workspace_root.display(),
            roles = loaded.roles.len(),
            "Configuration loaded"
        );
        Ok(loaded)
    }

    /// Load a single explicit file on top of the defaults, skipping the
    /// layered search.
    pub fn load_from_file(path: &Path) -> Result<SemweaveConfig, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let config = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?;
        config.try_deserialize()
    }
}

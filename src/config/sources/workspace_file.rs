//! Workspace config file source: semweave.toml and semweave.{env}.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Environment variable selecting the env-specific workspace file
pub const ENV_VAR: &str = "SEMWEAVE_ENV";

/// Add workspace config files to builder.
/// Precedence: semweave.toml (base) then semweave.{SEMWEAVE_ENV}.toml.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut builder = builder;

    let base_config_path = workspace_root.join("semweave.toml");
    if base_config_path.is_file() {
        debug!(config_path = %base_config_path.display(), "Loading workspace configuration");
        builder = builder.add_source(File::from(base_config_path).required(false));
    }

    if let Ok(env_name) = std::env::var(ENV_VAR) {
        let env_config_path = workspace_root.join(format!("semweave.{}.toml", env_name));
        if env_config_path.is_file() {
            debug!(config_path = %env_config_path.display(), env = %env_name, "Loading env-specific configuration");
            builder = builder.add_source(File::from(env_config_path).required(false));
        }
    }

    Ok(builder)
}

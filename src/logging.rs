//! Logging System
//!
//! Structured logging using the `tracing` crate. Output goes to stderr by
//! default so rendered markup on stdout stays clean.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Master switch; when false no subscriber is installed
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (if output is "file")
    #[serde(default = "default_log_file")]
    pub file: PathBuf,

    /// Enable colored output (text format only, stdout/stderr only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("semweave.log")
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: default_log_file(),
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), String> {
        LogFormat::parse(&self.format).map_err(|e| e.to_string())?;
        Output::parse(&self.output).map_err(|e| e.to_string())?;
        Ok(())
    }
}

const ENV_FILTER: &str = "SEMWEAVE_LOG";
const ENV_FORMAT: &str = "SEMWEAVE_LOG_FORMAT";
const ENV_OUTPUT: &str = "SEMWEAVE_LOG_OUTPUT";
const ENV_MODULES: &str = "SEMWEAVE_LOG_MODULES";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, ApiError> {
        match value {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(ApiError::ConfigError(format!(
                "Invalid log format: {} (must be 'json' or 'text')",
                value
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Stdout,
    Stderr,
    File,
}

impl Output {
    fn parse(value: &str) -> Result<Self, ApiError> {
        match value {
            "stdout" => Ok(Output::Stdout),
            "stderr" => Ok(Output::Stderr),
            "file" => Ok(Output::File),
            _ => Err(ApiError::ConfigError(format!(
                "Invalid log output: {} (must be 'stdout', 'stderr' or 'file')",
                value
            ))),
        }
    }

    fn writer(self, log_file: &Path) -> Result<BoxMakeWriter, ApiError> {
        match self {
            Output::Stdout => Ok(BoxMakeWriter::new(std::io::stdout)),
            Output::Stderr => Ok(BoxMakeWriter::new(std::io::stderr)),
            Output::File => {
                if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                let file = std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(log_file)
                    .map_err(|e| {
                        ApiError::ConfigError(format!(
                            "Failed to open log file {}: {}",
                            log_file.display(),
                            e
                        ))
                    })?;
                Ok(BoxMakeWriter::new(std::sync::Mutex::new(file)))
            }
        }
    }
}

/// Effective settings after environment overrides
#[derive(Debug)]
struct LogSettings {
    filter: EnvFilter,
    format: LogFormat,
    output: Output,
    color: bool,
    file: PathBuf,
}

impl LogSettings {
    fn resolve(config: &LoggingConfig) -> Result<Self, ApiError> {
        Self::resolve_with(config, &|name: &str| std::env::var(name).ok())
    }

    /// Environment overrides come from `env`; an invalid override is an
    /// error, never silently replaced by the configured value.
    fn resolve_with(
        config: &LoggingConfig,
        env: &dyn Fn(&str) -> Option<String>,
    ) -> Result<Self, ApiError> {
        let format = LogFormat::parse(env(ENV_FORMAT).as_deref().unwrap_or(&config.format))?;
        let output = Output::parse(env(ENV_OUTPUT).as_deref().unwrap_or(&config.output))?;
        Ok(Self {
            filter: build_env_filter(config, env)?,
            format,
            output,
            color: config.color && output != Output::File,
            file: config.file.clone(),
        })
    }
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. CLI arguments (applied to the config by the caller)
/// 2. Environment variables (SEMWEAVE_LOG, SEMWEAVE_LOG_FORMAT, etc.)
/// 3. Configuration file
/// 4. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), ApiError> {
    let defaults = LoggingConfig::default();
    let config = config.unwrap_or(&defaults);
    if !config.enabled {
        return Ok(());
    }

    let settings = LogSettings::resolve(config)?;
    let writer = settings.output.writer(&settings.file)?;
    let registry = Registry::default().with(settings.filter);
    let installed = match settings.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(settings.color)
                    .with_writer(writer),
            )
            .try_init(),
    };
    installed.map_err(|e| ApiError::ConfigError(format!("Failed to install logger: {}", e)))
}

/// `SEMWEAVE_LOG` replaces everything; otherwise the configured level plus
/// per-module directives from config and `SEMWEAVE_LOG_MODULES`.
fn build_env_filter(
    config: &LoggingConfig,
    env: &dyn Fn(&str) -> Option<String>,
) -> Result<EnvFilter, ApiError> {
    if let Some(filter) = env(ENV_FILTER) {
        return EnvFilter::try_new(&filter).map_err(|e| {
            ApiError::ConfigError(format!("Invalid {} filter '{}': {}", ENV_FILTER, filter, e))
        });
    }
    if config.level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut directives: Vec<(String, String)> = config
        .modules
        .iter()
        .map(|(module, level)| (module.clone(), level.clone()))
        .collect();
    directives.sort();
    if let Some(extra) = env(ENV_MODULES) {
        directives.extend(extra.split(',').filter_map(|pair| {
            pair.split_once('=')
                .map(|(module, level)| (module.trim().to_string(), level.trim().to_string()))
        }));
    }

    directives
        .iter()
        .try_fold(EnvFilter::new(&config.level), |filter, (module, level)| -> Result<EnvFilter, ApiError> {
            let directive = format!("{}={}", module, level)
                .parse()
                .map_err(|e| ApiError::ConfigError(format!("Invalid log directive: {}", e)))?;
            Ok(filter.add_directive(directive))
        })
}

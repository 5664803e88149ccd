//! CLI presentation: text, html and json formatters per command.

use crate::config::SemweaveConfig;
use crate::error::ApiError;
use crate::pipeline::{Rendered, Resolution};
use crate::registry::RoleRegistry;
use crate::vocabulary::Family;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;

/// Output format accepted by a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Json,
    Text,
    Toml,
}

impl OutputFormat {
    /// Parse `value`, accepting only the formats in `allowed`
    pub fn parse(value: &str, allowed: &[OutputFormat]) -> Result<Self, ApiError> {
        let format = match value.to_ascii_lowercase().as_str() {
            "html" => Some(OutputFormat::Html),
            "json" => Some(OutputFormat::Json),
            "text" => Some(OutputFormat::Text),
            "toml" => Some(OutputFormat::Toml),
            _ => None,
        };
        match format {
            Some(format) if allowed.contains(&format) => Ok(format),
            _ => Err(ApiError::Usage(format!(
                "Invalid output format: {} (expected one of: {})",
                value,
                allowed
                    .iter()
                    .map(|f| f.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
            OutputFormat::Toml => "toml",
        }
    }
}

fn to_json(value: &serde_json::Value) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value).map_err(|e| ApiError::ConfigError(e.to_string()))
}

pub fn format_rendered(rendered: &Rendered, format: OutputFormat) -> Result<String, ApiError> {
    match format {
        OutputFormat::Json => to_json(&json!({
            "element": rendered.element,
            "semantics": rendered.semantics,
            "frame": rendered.frame,
            "tokens": rendered.tokens,
            "fell_back": rendered.fell_back,
            "fingerprint": rendered.fingerprint(),
        })),
        _ => Ok(rendered.to_html()),
    }
}

pub fn format_tokens(resolution: &Resolution<'_>) -> Result<String, ApiError> {
    to_json(&json!({
        "family": resolution.semantics.family,
        "role": resolution.role,
        "fell_back": resolution.fell_back,
        "semantics": resolution.semantics,
        "tokens": resolution.tokens,
        "interactive": resolution.interactive,
        "layers": resolution.style,
        "class": resolution.style.class_name(),
    }))
}

pub fn format_roles(
    registry: &RoleRegistry,
    family: Option<Family>,
    format: OutputFormat,
) -> Result<String, ApiError> {
    let families: Vec<Family> = match family {
        Some(family) => vec![family],
        None => Family::ALL.to_vec(),
    };

    let rows: Vec<(Family, &str)> = families
        .iter()
        .flat_map(|family| registry.roles(*family).into_iter().map(move |r| (*family, r)))
        .collect();

    if format == OutputFormat::Json {
        let arr: Vec<serde_json::Value> = rows
            .iter()
            .filter_map(|(family, role)| {
                registry.lookup(*family, role).map(|d| {
                    json!({
                        "family": family,
                        "role": role,
                        "default": *role == family.default_role(),
                        "html_tag": d.html_tag,
                        "renderer": d.renderer_name(),
                        "aria": d.aria_props,
                        "base_styles": d.base_styles,
                        "clickable": d.clickable,
                        "focusable": d.focusable,
                        "selection_attr": d.selection_attr,
                        "description": d.description,
                    })
                })
            })
            .collect();
        return to_json(&serde_json::Value::Array(arr));
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Family", "Role", "Tag", "Renderer", "Description"]);
    for (family, role) in &rows {
        if let Some(d) = registry.lookup(*family, role) {
            let name = if *role == family.default_role() {
                format!("{} *", role)
            } else {
                role.to_string()
            };
            table.add_row(vec![
                family.as_str(),
                name.as_str(),
                d.html_tag.as_str(),
                d.renderer_name(),
                d.description.as_str(),
            ]);
        }
    }
    let title = format!("Roles ({})", rows.len());
    Ok(format!("{}\n{}\n* family default", title.bold(), table))
}

pub fn format_config(config: &SemweaveConfig, format: OutputFormat) -> Result<String, ApiError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(config)
            .map_err(|e| ApiError::ConfigError(e.to_string())),
        _ => toml::to_string_pretty(config).map_err(|e| ApiError::ConfigError(e.to_string())),
    }
}

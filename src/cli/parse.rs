//! CLI parse: clap types for semweave. No behavior; definitions only.

use crate::vocabulary::{Density, Family, Intent, Prominence, Size};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// semweave - resolve semantic roles into styled, accessible elements
#[derive(Parser)]
#[command(name = "semweave", version)]
#[command(about = "Resolve semantic roles into styled, accessible elements")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (searched for semweave.toml)
    #[arg(long, default_value = ".", global = true)]
    pub workspace: PathBuf,

    /// Configuration file path (replaces the layered config search)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Fail when any diagnostic (unknown role, overwrite) is reported
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a single node under the root frame
    Render(RenderArgs),
    /// Render a JSON node tree
    Tree {
        /// Path to a JSON SemanticNode document ("-" for stdin)
        file: PathBuf,
        /// Output format (html or json)
        #[arg(long, default_value = "html")]
        format: String,
    },
    /// Print the resolved token set for a role
    Tokens {
        #[command(flatten)]
        semantics: SemanticArgs,
    },
    /// List registered roles
    Roles {
        /// Only this family
        #[arg(long)]
        family: Option<Family>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the effective configuration
    Config {
        /// Output format (toml or json)
        #[arg(long, default_value = "toml")]
        format: String,
    },
}

/// Family, role and the semantic channels
#[derive(Args, Debug, Clone)]
pub struct SemanticArgs {
    /// Role family (action, field, block, text)
    pub family: Family,
    /// Role name, e.g. Button or Title
    pub role: String,
    #[arg(long)]
    pub prominence: Option<Prominence>,
    #[arg(long)]
    pub intent: Option<Intent>,
    #[arg(long)]
    pub density: Option<Density>,
    #[arg(long)]
    pub size: Option<Size>,
}

#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    #[command(flatten)]
    pub semantics: SemanticArgs,
    #[arg(long)]
    pub selected: bool,
    #[arg(long)]
    pub disabled: bool,
    /// Force pointer affordances
    #[arg(long)]
    pub clickable: bool,
    /// Caller class name, composed last
    #[arg(long = "class")]
    pub class_name: Option<String>,
    /// Text child
    #[arg(long)]
    pub text: Option<String>,
    #[arg(long)]
    pub href: Option<String>,
    /// Passthrough attribute as name=value (repeatable)
    #[arg(long = "attr", value_name = "NAME=VALUE")]
    pub attrs: Vec<String>,
    /// Output format (html or json)
    #[arg(long, default_value = "html")]
    pub format: String,
}

//! CLI route: single route table and run context. Dispatches to the pipeline and presentation.

use crate::cli::parse::{Commands, RenderArgs, SemanticArgs};
use crate::cli::presentation::{
    format_config, format_rendered, format_roles, format_tokens, OutputFormat,
};
use crate::config::{ConfigLoader, SemweaveConfig};
use crate::context::ParentContext;
use crate::diagnostics::{DiagnosticSink, MemorySink, TeeSink, TracingSink};
use crate::element::Node;
use crate::error::ApiError;
use crate::node::{SemanticNode, SemanticProps};
use crate::pipeline::Pipeline;
use crate::registry::RoleRegistry;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Runtime context for CLI execution: loaded config and the role registry.
/// Built from workspace path and optional config path using ConfigLoader only.
pub struct RunContext {
    config: SemweaveConfig,
    registry: RoleRegistry,
    recorded: Arc<MemorySink>,
    strict: bool,
    workspace_root: PathBuf,
}

impl RunContext {
    /// Load configuration, validate it and build the registry with any
    /// configured roles applied.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        strict: bool,
    ) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };

        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;

        let recorded = Arc::new(MemorySink::new());
        let sinks: Vec<Arc<dyn DiagnosticSink>> = vec![Arc::new(TracingSink), recorded.clone()];
        let mut registry = RoleRegistry::with_sink(Arc::new(TeeSink::new(sinks)))
            .with_policy(config.diagnostics.policy());
        let applied = registry.apply_config(&config.roles)?;
        // Overwrites from configuration are intentional; strict mode only
        // counts diagnostics raised by the command itself.
        recorded.drain();

        info!(
            workspace = %workspace_root.display(),
            configured_roles = applied,
            "Run context ready"
        );

        Ok(Self {
            config,
            registry,
            recorded,
            strict,
            workspace_root,
        })
    }

    pub fn registry(&self) -> &RoleRegistry {
        &self.registry
    }

    pub fn config(&self) -> &SemweaveConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table. Diagnostics are
    /// drained after every command, failed or not.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let result = self.dispatch(command);
        let reported = self.recorded.drain();
        let output = result?;
        if self.strict && !reported.is_empty() {
            return Err(ApiError::Strict(reported.len()));
        }
        Ok(output)
    }

    fn dispatch(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Render(args) => self.handle_render(args),
            Commands::Tree { file, format } => self.handle_tree(file, format),
            Commands::Tokens { semantics } => self.handle_tokens(semantics),
            Commands::Roles { family, format } => {
                let format = OutputFormat::parse(format, &[OutputFormat::Text, OutputFormat::Json])?;
                format_roles(&self.registry, *family, format)
            }
            Commands::Config { format } => {
                let format = OutputFormat::parse(format, &[OutputFormat::Toml, OutputFormat::Json])?;
                format_config(&self.config, format)
            }
        }
    }

    fn handle_render(&self, args: &RenderArgs) -> Result<String, ApiError> {
        let format = OutputFormat::parse(&args.format, &[OutputFormat::Html, OutputFormat::Json])?;
        let props = render_props(args)?;
        let children: Vec<Node> = args
            .text
            .as_deref()
            .map(|text| vec![Node::from(text)])
            .unwrap_or_default();

        let pipeline = Pipeline::new(&self.registry);
        let rendered = pipeline.render(
            args.semantics.family,
            &args.semantics.role,
            &props,
            children,
            ParentContext::Root,
        );
        debug!(fingerprint = %rendered.fingerprint(), "Rendered node");
        format_rendered(&rendered, format)
    }

    fn handle_tree(&self, file: &Path, format: &str) -> Result<String, ApiError> {
        let format = OutputFormat::parse(format, &[OutputFormat::Html, OutputFormat::Json])?;
        let source = if file.as_os_str() == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            let path = if file.is_absolute() {
                file.to_path_buf()
            } else {
                self.workspace_root.join(file)
            };
            std::fs::read_to_string(&path)?
        };
        let node: SemanticNode = serde_json::from_str(&source)?;

        let pipeline = Pipeline::new(&self.registry);
        let rendered = pipeline.render_tree(&node, ParentContext::Root);
        debug!(fingerprint = %rendered.fingerprint(), "Rendered tree");
        format_rendered(&rendered, format)
    }

    fn handle_tokens(&self, args: &SemanticArgs) -> Result<String, ApiError> {
        let props = semantic_props(args);
        let pipeline = Pipeline::new(&self.registry);
        let resolution = pipeline.resolve(args.family, Some(&args.role), &props, ParentContext::Root);
        format_tokens(&resolution)
    }
}

fn semantic_props(args: &SemanticArgs) -> SemanticProps {
    SemanticProps {
        prominence: args.prominence,
        intent: args.intent,
        density: args.density,
        size: args.size,
        ..SemanticProps::default()
    }
}

fn render_props(args: &RenderArgs) -> Result<SemanticProps, ApiError> {
    let mut props = semantic_props(&args.semantics).with_disabled(args.disabled);
    if args.selected {
        props = props.with_selected(true);
    }
    if args.clickable {
        props = props.with_clickable(true);
    }
    if let Some(class_name) = &args.class_name {
        props = props.with_class(class_name.clone());
    }
    if let Some(href) = &args.href {
        props = props.with_href(href.clone());
    }
    for attr in &args.attrs {
        let (name, value) = attr.split_once('=').ok_or_else(|| {
            ApiError::Usage(format!("Invalid --attr '{}' (expected NAME=VALUE)", attr))
        })?;
        props = props.with_attr(name.trim(), value);
    }
    Ok(props)
}

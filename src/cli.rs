//! CLI domain: parse, route, output, and presentation only.
//! No resolution logic here; the route table calls into the pipeline.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, RenderArgs, SemanticArgs};
pub use presentation::{
    format_config, format_rendered, format_roles, format_tokens, OutputFormat,
};
pub use route::RunContext;

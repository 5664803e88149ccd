//! Integration tests for the semweave resolution pipeline

mod cli_render;
mod config_integration;
mod context_cascade;
mod pipeline_render;
mod registry_extension;
mod test_utils;

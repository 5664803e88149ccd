//! Layered configuration through the run context

use super::test_utils::with_xdg_env;
use semweave::cli::{Cli, RunContext};
use semweave::config::{global_config_path, ConfigLoader};
use semweave::Family;
use clap::Parser;
use std::fs;
use tempfile::TempDir;

fn write_global(contents: &str) {
    let path = global_config_path().unwrap();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn global_path_follows_xdg_config_home() {
    let temp = TempDir::new().unwrap();
    with_xdg_env(&temp, || {
        let path = global_config_path().unwrap();
        assert!(path.starts_with(temp.path()));
        assert!(path.ends_with("semweave/config.toml"));
    });
}

#[test]
fn workspace_role_overrides_global_role() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();

    with_xdg_env(&temp, || {
        write_global(
            r#"
[logging]
level = "debug"

[roles.block.sidebar]
name = "Sidebar"
html_tag = "nav"
renderer = "element"
base_styles = "flex"
"#,
        );
        fs::write(
            workspace.join("semweave.toml"),
            r#"
[roles.block.sidebar]
name = "Sidebar"
html_tag = "aside"
renderer = "element"
base_styles = "flex flex-col"
"#,
        )
        .unwrap();

        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.logging.level, "debug");

        let ctx = RunContext::new(workspace.clone(), None, false).unwrap();
        let sidebar = ctx.registry().lookup(Family::Block, "Sidebar").unwrap();
        assert_eq!(sidebar.html_tag, "aside");
        assert_eq!(sidebar.base_styles, "flex flex-col");
    });
}

#[test]
fn silenced_unknown_roles_pass_strict_mode() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();

    with_xdg_env(&temp, || {
        fs::write(
            workspace.join("semweave.toml"),
            "[diagnostics]\nwarn_on_unknown = false\n",
        )
        .unwrap();

        let ctx = RunContext::new(workspace.clone(), None, true).unwrap();
        let cli = Cli::try_parse_from(["semweave", "render", "text", "Marquee"]).unwrap();
        let html = ctx.execute(&cli.command).unwrap();
        // Fell back to the Text family default
        assert!(html.contains(r#"data-role="Body""#));
    });
}

#[test]
fn explicit_config_file_skips_layered_search() {
    let temp = TempDir::new().unwrap();
    let workspace = temp.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();
    let explicit = temp.path().join("only.toml");
    fs::write(&explicit, "[diagnostics]\nwarn_on_overwrite = false\n").unwrap();

    with_xdg_env(&temp, || {
        write_global("[diagnostics]\nwarn_on_unknown = false\n");

        let ctx = RunContext::new(workspace.clone(), Some(explicit.clone()), false).unwrap();
        assert!(ctx.config().diagnostics.warn_on_unknown);
        assert!(!ctx.config().diagnostics.warn_on_overwrite);
    });
}

#[test]
fn missing_explicit_config_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("absent.toml");
    assert!(RunContext::new(temp.path().to_path_buf(), Some(missing), false).is_err());
}

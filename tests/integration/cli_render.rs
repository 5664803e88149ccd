//! End-to-end runs of the semweave binary

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn semweave(workspace: &Path, args: &[&str]) -> Output {
    let config = workspace.join("cli.toml");
    if !config.exists() {
        std::fs::write(&config, "").unwrap();
    }
    Command::new(env!("CARGO_BIN_EXE_semweave"))
        .arg("--quiet")
        .arg("--workspace")
        .arg(workspace)
        .arg("--config")
        .arg(&config)
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn render_prints_html() {
    let temp = TempDir::new().unwrap();
    let out = semweave(
        temp.path(),
        &["render", "action", "Button", "--prominence", "hero", "--text", "Save"],
    );
    assert!(out.status.success());
    let html = stdout(&out);
    assert!(html.starts_with("<button "));
    assert!(html.contains(r#"data-prominence="Hero""#));
    assert!(html.trim_end().ends_with(">Save</button>"));
}

#[test]
fn render_json_carries_fingerprint() {
    let temp = TempDir::new().unwrap();
    let first = semweave(temp.path(), &["render", "block", "Card", "--format", "json"]);
    let second = semweave(temp.path(), &["render", "block", "Card", "--format", "json"]);
    assert!(first.status.success());

    let a: serde_json::Value = serde_json::from_str(&stdout(&first)).unwrap();
    let b: serde_json::Value = serde_json::from_str(&stdout(&second)).unwrap();
    assert_eq!(a["fingerprint"], b["fingerprint"]);
    assert_eq!(a["fingerprint"].as_str().unwrap().len(), 64);
    assert_eq!(a["semantics"]["role"], "Card");
}

#[test]
fn roles_json_lists_builtins() {
    let temp = TempDir::new().unwrap();
    let out = semweave(temp.path(), &["roles", "--family", "field", "--format", "json"]);
    assert!(out.status.success());
    let roles: Vec<serde_json::Value> = serde_json::from_str(&stdout(&out)).unwrap();
    assert!(roles.iter().all(|r| r["family"] == "field"));
    assert!(roles.iter().any(|r| r["role"] == "Checkbox"));
}

#[test]
fn strict_mode_exits_with_code_two() {
    let temp = TempDir::new().unwrap();
    let out = semweave(temp.path(), &["--strict", "render", "block", "Carousel"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("error[strict]"));

    let lenient = semweave(temp.path(), &["render", "block", "Carousel"]);
    assert!(lenient.status.success());
}

#[test]
fn tree_renders_file_relative_to_workspace() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("form.json"),
        r#"{"family":"block","role":"Section","intent":"Critical","children":[
            {"family":"text","role":"Title","children":["Delete account"]},
            {"family":"action","role":"Button","children":["Delete"]}
        ]}"#,
    )
    .unwrap();
    let out = semweave(temp.path(), &["tree", "form.json"]);
    assert!(out.status.success());
    let html = stdout(&out);
    assert_eq!(html.matches(r#"data-intent="Critical""#).count(), 3);
    assert!(html.contains(r#"data-depth="2""#));
}

#[test]
fn unknown_output_format_fails() {
    let temp = TempDir::new().unwrap();
    let out = semweave(temp.path(), &["config", "--format", "yaml"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("error[usage]"));
}

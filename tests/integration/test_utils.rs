//! Shared test utilities for integration tests
//!
//! Centralized setup/teardown for XDG directories and a registry wired to an
//! in-memory diagnostics sink.

use semweave::diagnostics::MemorySink;
use semweave::RoleRegistry;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Global mutex to serialize XDG environment variable access across all tests
static XDG_ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Environment variable state to restore after test
struct EnvState {
    home: Option<String>,
    xdg_config_home: Option<String>,
    semweave_env: Option<String>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            home: std::env::var("HOME").ok(),
            xdg_config_home: std::env::var("XDG_CONFIG_HOME").ok(),
            semweave_env: std::env::var("SEMWEAVE_ENV").ok(),
        }
    }

    fn restore(self) {
        restore_var("HOME", self.home);
        restore_var("XDG_CONFIG_HOME", self.xdg_config_home);
        restore_var("SEMWEAVE_ENV", self.semweave_env);
    }
}

fn restore_var(name: &str, value: Option<String>) {
    match value {
        Some(orig) => std::env::set_var(name, orig),
        None => std::env::remove_var(name),
    }
}

/// Run `f` with HOME and XDG_CONFIG_HOME pointed into `test_dir`, restoring
/// the original environment afterwards. Serialized by a global mutex.
pub fn with_xdg_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = XDG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_home = test_dir.path().join("home");
    let test_config_home = test_dir.path().join("xdg");
    std::fs::create_dir_all(&test_home).unwrap();
    std::fs::create_dir_all(&test_config_home).unwrap();

    std::env::set_var("HOME", test_home.to_str().unwrap());
    std::env::set_var("XDG_CONFIG_HOME", test_config_home.to_str().unwrap());
    std::env::remove_var("SEMWEAVE_ENV");

    let result = f();

    env_state.restore();

    result
}

/// Registry with built-in roles whose diagnostics land in memory
pub fn recording_registry() -> (RoleRegistry, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    (RoleRegistry::with_sink(sink.clone()), sink)
}

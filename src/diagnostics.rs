//! Diagnostics channel.
//!
//! Registry misses and overwrites are recovered locally and reported here.
//! Sinks must never fail or panic: the channel is purely observational.

use crate::vocabulary::Family;
use parking_lot::Mutex;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Recoverable registry events
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind")]
pub enum Diagnostic {
    /// Role absent from the family registry; the family default was used
    UnknownRole {
        family: Family,
        requested: String,
        fallback: String,
    },
    /// `register_role` replaced an existing entry
    RegistryOverwrite { family: Family, role: String },
    /// Caller attribute whose name is not a valid HTML attribute name; it
    /// was dropped
    InvalidAttribute {
        family: Family,
        role: String,
        name: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownRole {
                family,
                requested,
                fallback,
            } => write!(
                f,
                "Unknown {} role '{}', falling back to '{}'",
                family, requested, fallback
            ),
            Diagnostic::RegistryOverwrite { family, role } => {
                write!(f, "Role '{}' in family {} was overwritten", role, family)
            }
            Diagnostic::InvalidAttribute { family, role, name } => write!(
                f,
                "Dropped invalid attribute name {:?} on {} role '{}'",
                name, family, role
            ),
        }
    }
}

/// Developer-visible log sink for diagnostics
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Sink that forwards diagnostics to `tracing` at warn level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::UnknownRole {
                family,
                requested,
                fallback,
            } => warn!(
                family = %family,
                requested = %requested,
                fallback = %fallback,
                "Unknown role, using family default"
            ),
            Diagnostic::RegistryOverwrite { family, role } => warn!(
                family = %family,
                role = %role,
                "Role registration overwrote an existing entry"
            ),
            Diagnostic::InvalidAttribute { family, role, name } => warn!(
                family = %family,
                role = %role,
                name = ?name,
                "Dropped caller attribute with an invalid name"
            ),
        }
    }
}

/// Sink that records diagnostics in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Diagnostic> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Remove and return everything recorded so far
    pub fn drain(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.events.lock().push(diagnostic.clone());
    }
}

/// Fan-out to several sinks
#[derive(Default, Clone)]
pub struct TeeSink {
    sinks: Vec<Arc<dyn DiagnosticSink>>,
}

impl TeeSink {
    pub fn new(sinks: Vec<Arc<dyn DiagnosticSink>>) -> Self {
        Self { sinks }
    }
}

impl DiagnosticSink for TeeSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        for sink in &self.sinks {
            sink.emit(diagnostic);
        }
    }
}

/// Which diagnostics a registry reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticPolicy {
    pub warn_on_unknown: bool,
    pub warn_on_overwrite: bool,
}

impl Default for DiagnosticPolicy {
    fn default() -> Self {
        Self {
            warn_on_unknown: true,
            warn_on_overwrite: true,
        }
    }
}

impl DiagnosticPolicy {
    pub fn allows(&self, diagnostic: &Diagnostic) -> bool {
        match diagnostic {
            Diagnostic::UnknownRole { .. } => self.warn_on_unknown,
            Diagnostic::RegistryOverwrite { .. } => self.warn_on_overwrite,
            Diagnostic::InvalidAttribute { .. } => true,
        }
    }
}

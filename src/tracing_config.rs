//! Tracing setup for drivers and debugging sessions.
//!
//! The lattice engine emits `trace!` events and spans for every subtype
//! and bound query, and `debug!` events for every registration. Nothing is
//! printed unless a subscriber is installed here.
//!
//! ```bash
//! # Every subtype query, as an indented tree
//! STRATA_LOG=strata_solver=trace STRATA_LOG_FORMAT=tree my-driver
//!
//! # Registrations only, one JSON object per line
//! STRATA_LOG=strata_solver::environment=debug STRATA_LOG_FORMAT=json my-driver
//! ```
//!
//! `STRATA_LOG` takes the `RUST_LOG` filter syntax and wins over `RUST_LOG`
//! when both are set. Output always goes to stderr.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_VAR: &str = "STRATA_LOG";
const FORMAT_VAR: &str = "STRATA_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Flat `fmt` lines.
    #[default]
    Text,
    /// Indented spans via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON.
    Json,
}

impl LogFormat {
    /// Case-insensitive; anything unrecognised is `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Resolved logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Filter directives, `None` when logging is off.
    pub directives: Option<String>,
    pub format: LogFormat,
}

impl TracingConfig {
    /// Read `STRATA_LOG` (then `RUST_LOG`) and `STRATA_LOG_FORMAT`.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Resolve settings from an arbitrary variable source.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let directives = lookup(LOG_VAR).or_else(|| lookup("RUST_LOG"));
        let format = lookup(FORMAT_VAR)
            .map(|value| LogFormat::parse(&value))
            .unwrap_or_default();
        Self { directives, format }
    }

    pub fn is_enabled(&self) -> bool {
        self.directives.is_some()
    }

    /// Install the global subscriber.
    ///
    /// Returns `false` when logging is off or a subscriber is already set.
    pub fn install(&self) -> bool {
        let Some(directives) = &self.directives else {
            return false;
        };
        let filter = EnvFilter::builder().parse_lossy(directives);

        let installed = match self.format {
            LogFormat::Tree => {
                let tree_layer = tracing_tree::HierarchicalLayer::default()
                    .with_writer(std::io::stderr)
                    .with_indent_amount(2)
                    .with_indent_lines(true)
                    .with_deferred_spans(true)
                    .with_targets(true);
                Registry::default().with(filter).with(tree_layer).try_init()
            }
            LogFormat::Json => {
                let json_layer = fmt::layer().json().with_writer(std::io::stderr);
                Registry::default().with(filter).with(json_layer).try_init()
            }
            LogFormat::Text => {
                let text_layer = fmt::layer().with_writer(std::io::stderr);
                Registry::default().with(filter).with(text_layer).try_init()
            }
        };
        if installed.is_err() {
            return false;
        }
        tracing::debug!(format = ?self.format, directives = %directives, "tracing subscriber installed");
        true
    }
}

/// Install a subscriber configured from the environment, if requested.
pub fn init_tracing() -> bool {
    TracingConfig::from_env().install()
}

#[cfg(test)]
#[path = "../tests/tracing_config_tests.rs"]
mod tests;

//! Tracing infrastructure for development diagnostics
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=selection=debug` - only selection diffs
//! - `RUST_LOG=gridpass::update=debug` - module-level filtering
//!
//! Logs are also written to `~/.config/gridpass/logs/gridpass.log` with
//! daily rotation, at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::grid::{Cell, Selection};

/// Initialize tracing subscriber with console and file logging
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "gridpass.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Copy of the selection taken before an update, for diffing
#[derive(Debug, Clone)]
pub struct SelectionSnapshot {
    cells: Vec<Cell>,
}

impl SelectionSnapshot {
    pub fn from_selection(selection: &Selection) -> Self {
        Self {
            cells: selection.as_slice().to_vec(),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        for cell in &other.cells {
            if !self.cells.contains(cell) {
                changes.push(format!("+({})", cell));
            }
        }
        for cell in &self.cells {
            if !other.cells.contains(cell) {
                changes.push(format!("-({})", cell));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(format!(
                "{} [{} → {} cells]",
                changes.join(" "),
                self.cells.len(),
                other.cells.len()
            ))
        }
    }
}

//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code; `render_*` functions return the report
//! text without writing it.

mod catalog;
mod config;
mod output;
mod preview;
mod readiness;

pub use catalog::{render_catalog_stats, run_catalog_seed, run_catalog_stats, run_catalog_validate};
pub use config::{run_config_schema, run_config_show};
pub use output::{exit_codes, should_use_color, write_output, OutputTarget};
pub use preview::{render_preview, run_preview};
pub use readiness::{load_responses, render_readiness, run_readiness};

use crate::catalog::{builtin, load_catalog, Catalog};
use crate::config::{AppConfig, Validatable};
use crate::reports::{create_reporter_with_options, ReportGenerator};
use anyhow::{bail, Context, Result};

/// Label used in reports when no catalog file is configured.
pub const BUILTIN_CATALOG: &str = "built-in";

/// Reject configurations that fail validation, listing every problem.
fn ensure_valid(app: &AppConfig) -> Result<()> {
    let errors = app.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let lines: Vec<String> = errors.iter().map(ToString::to_string).collect();
    bail!("Invalid configuration:\n  {}", lines.join("\n  "));
}

/// Load the configured catalog, or the built-in one. Returns the catalog and
/// a label describing where it came from.
fn load_configured_catalog(app: &AppConfig) -> Result<(Catalog, String)> {
    match &app.catalog.path {
        Some(path) => {
            let catalog = load_catalog(path)?;
            Ok((catalog, path.display().to_string()))
        }
        None => {
            let catalog = builtin().context("built-in catalog failed validation")?;
            tracing::debug!(fingerprint = %catalog.fingerprint_hex(), "Using built-in catalog");
            Ok((catalog, BUILTIN_CATALOG.to_string()))
        }
    }
}

/// Reporter honoring the output settings for the given target.
fn reporter_for(app: &AppConfig, target: &OutputTarget) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(
        app.output.format,
        should_use_color(app.output.no_color, target),
        app.output.pretty,
    )
}

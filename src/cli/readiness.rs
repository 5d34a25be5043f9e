//! Readiness command handler.
//!
//! Implements the `readiness` subcommand: evaluate a responses file against
//! the preview of a configuration and exit non-zero unless production ready.

use super::{ensure_valid, exit_codes, load_configured_catalog, reporter_for, write_output, OutputTarget};
use crate::catalog::DocumentFormat;
use crate::config::AppConfig;
use crate::engine::AssessmentEngine;
use crate::model::{AssessmentConfiguration, AssessmentResponses};
use crate::reports::ReportMetadata;
use anyhow::{Context, Result};
use std::path::Path;

/// Read answers from a JSON or YAML file.
pub fn load_responses(path: &Path) -> Result<AssessmentResponses> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read responses from {}", path.display()))?;
    let format = DocumentFormat::from_path(path).unwrap_or_else(|| DocumentFormat::detect(&content));
    let responses = match format {
        DocumentFormat::Json => serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON responses in {}", path.display()))?,
        DocumentFormat::Yaml => serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML responses in {}", path.display()))?,
    };
    Ok(responses)
}

/// Evaluate readiness and render the verdict. Returns the report text and
/// whether the assessment is production ready.
pub fn render_readiness(
    responses_path: &Path,
    configuration: &AssessmentConfiguration,
    app: &AppConfig,
    target: &OutputTarget,
) -> Result<(String, bool)> {
    ensure_valid(app)?;
    let responses = load_responses(responses_path)?;
    let (catalog, source) = load_configured_catalog(app)?;
    let engine = AssessmentEngine::new(catalog).with_settings(app.readiness.settings());

    let (preview, verdict) = engine.readiness(configuration, &responses)?;
    if verdict.production_ready {
        tracing::info!("Assessment is production ready");
    } else {
        for condition in &verdict.failing {
            tracing::warn!("Readiness condition failed: {condition}");
        }
    }

    let metadata = ReportMetadata::new().with_catalog_source(source);
    let text = reporter_for(app, target).generate_readiness_report(&preview, &verdict, &metadata)?;
    Ok((text, verdict.production_ready))
}

/// Run the readiness command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_readiness(
    responses_path: &Path,
    configuration: AssessmentConfiguration,
    app: AppConfig,
) -> Result<i32> {
    let target = OutputTarget::from_option(app.output.file.clone());
    let (text, ready) = render_readiness(responses_path, &configuration, &app, &target)?;
    write_output(&text, &target)?;
    Ok(if ready {
        exit_codes::SUCCESS
    } else {
        exit_codes::NOT_READY
    })
}

//! Preview command handler.
//!
//! Implements the `preview` subcommand: resolve, score and analyze one
//! assessment configuration.

use super::{ensure_valid, exit_codes, load_configured_catalog, reporter_for, write_output, OutputTarget};
use crate::config::AppConfig;
use crate::engine::AssessmentEngine;
use crate::model::AssessmentConfiguration;
use crate::reports::ReportMetadata;
use anyhow::Result;

/// Compose a preview and render it in the configured format.
pub fn render_preview(
    configuration: &AssessmentConfiguration,
    app: &AppConfig,
    target: &OutputTarget,
) -> Result<String> {
    ensure_valid(app)?;
    let (catalog, source) = load_configured_catalog(app)?;
    let engine = AssessmentEngine::new(catalog).with_settings(app.readiness.settings());

    let preview = engine.preview(configuration)?;
    tracing::info!(
        sections = preview.total_sections,
        questions = preview.total_questions,
        points = preview.total_points,
        "Composed assessment preview"
    );

    let metadata = ReportMetadata::new().with_catalog_source(source);
    Ok(reporter_for(app, target).generate_preview_report(&preview, &metadata)?)
}

/// Run the preview command, returning the desired exit code.
pub fn run_preview(configuration: AssessmentConfiguration, app: AppConfig) -> Result<i32> {
    let target = OutputTarget::from_option(app.output.file.clone());
    let text = render_preview(&configuration, &app, &target)?;
    write_output(&text, &target)?;
    Ok(exit_codes::SUCCESS)
}

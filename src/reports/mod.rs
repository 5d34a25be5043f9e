//! Report generation for previews, readiness verdicts and catalog statistics.
//!
//! Two output formats are available:
//! - JSON: structured data for programmatic integration
//! - Summary: aligned, human-readable terminal output

mod json;
mod summary;
mod types;

pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::{ReportFormat, ReportMetadata};

use crate::catalog::CatalogStats;
use crate::engine::{AssessmentPreview, ReadinessVerdict};
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render an assessment preview
    fn generate_preview_report(
        &self,
        preview: &AssessmentPreview,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError>;

    /// Render a readiness verdict with the preview it was evaluated against
    fn generate_readiness_report(
        &self,
        preview: &AssessmentPreview,
        verdict: &ReadinessVerdict,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError>;

    /// Render catalog table sizes
    fn generate_catalog_report(
        &self,
        stats: &CatalogStats,
        fingerprint: &str,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError>;

    /// Write a preview report to a writer
    fn write_preview_report(
        &self,
        preview: &AssessmentPreview,
        metadata: &ReportMetadata,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_preview_report(preview, metadata)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true, true)
}

/// Create a report generator with color and pretty-printing control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
    pretty: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new().pretty(pretty)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;
    use crate::engine::compose_preview;
    use crate::model::AssessmentConfiguration;

    #[test]
    fn test_create_reporter_formats() {
        assert_eq!(create_reporter(ReportFormat::Json).format(), ReportFormat::Json);
        assert_eq!(
            create_reporter(ReportFormat::Summary).format(),
            ReportFormat::Summary
        );
    }

    #[test]
    fn test_write_preview_report() {
        let catalog = builtin().expect("valid");
        let preview = compose_preview(&catalog, &AssessmentConfiguration::builder("admin").build())
            .expect("preview");
        let mut buffer = Vec::new();
        create_reporter_with_options(ReportFormat::Json, false, false)
            .write_preview_report(&preview, &ReportMetadata::new(), &mut buffer)
            .expect("write");
        let text = String::from_utf8(buffer).expect("utf8");
        assert!(text.contains("\"totalSections\":22"));
    }
}

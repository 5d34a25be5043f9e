//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator, ReportMetadata};
use crate::catalog::CatalogStats;
use crate::engine::{AssessmentPreview, ReadinessVerdict};
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Preview fields stay at the top level; report metadata sits under `report`.
#[derive(Serialize)]
struct PreviewDocument<'a> {
    report: &'a ReportMetadata,
    #[serde(flatten)]
    preview: &'a AssessmentPreview,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReadinessDocument<'a> {
    report: &'a ReportMetadata,
    verdict: &'a ReadinessVerdict,
    preview: &'a AssessmentPreview,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDocument<'a> {
    report: &'a ReportMetadata,
    fingerprint: &'a str,
    stats: &'a CatalogStats,
}

impl ReportGenerator for JsonReporter {
    fn generate_preview_report(
        &self,
        preview: &AssessmentPreview,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        self.render(&PreviewDocument {
            report: metadata,
            preview,
        })
    }

    fn generate_readiness_report(
        &self,
        preview: &AssessmentPreview,
        verdict: &ReadinessVerdict,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        self.render(&ReadinessDocument {
            report: metadata,
            verdict,
            preview,
        })
    }

    fn generate_catalog_report(
        &self,
        stats: &CatalogStats,
        fingerprint: &str,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        self.render(&CatalogDocument {
            report: metadata,
            fingerprint,
            stats,
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

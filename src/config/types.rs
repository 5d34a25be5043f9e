//! Configuration types for pharma-readiness.

use crate::engine::{
    ReadinessSettings, DEFAULT_COMPLETION_THRESHOLD, DEFAULT_SCALE_PASS_THRESHOLD,
};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI flags are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Where reference data comes from
    pub catalog: CatalogConfig,
    /// Production-readiness thresholds
    pub readiness: ReadinessConfig,
    /// Output configuration (format, file, pretty-printing)
    pub output: OutputConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for `AppConfig`.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.catalog.path = Some(path.into());
        self
    }

    pub fn completion_threshold(mut self, threshold: f64) -> Self {
        self.config.readiness.completion_threshold = threshold;
        self
    }

    pub fn scale_pass_threshold(mut self, threshold: u8) -> Self {
        self.config.readiness.scale_pass_threshold = threshold;
        self
    }

    pub fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.output.pretty = pretty;
        self
    }

    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section configs
// ============================================================================

/// Catalog source settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog document (YAML or JSON) to load instead of the built-in catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Production-readiness thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ReadinessConfig {
    /// Share of total points that must be answered, in (0, 1]
    pub completion_threshold: f64,
    /// Lowest scale answer (1-5) that counts as passing a blocker question
    pub scale_pass_threshold: u8,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            completion_threshold: DEFAULT_COMPLETION_THRESHOLD,
            scale_pass_threshold: DEFAULT_SCALE_PASS_THRESHOLD,
        }
    }
}

impl ReadinessConfig {
    #[must_use]
    pub const fn settings(&self) -> ReadinessSettings {
        ReadinessSettings {
            completion_threshold: self.completion_threshold,
            scale_pass_threshold: self.scale_pass_threshold,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Report format: summary or json
    pub format: ReportFormat,
    /// Output file path (stdout when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Disable colored summary output
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Summary,
            file: None,
            pretty: true,
            no_color: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.catalog.path.is_none());
        assert!((config.readiness.completion_threshold - 0.85).abs() < f64::EPSILON);
        assert_eq!(config.readiness.scale_pass_threshold, 4);
        assert_eq!(config.output.format, ReportFormat::Summary);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .catalog_path("catalog.yaml")
            .completion_threshold(0.9)
            .output_format(ReportFormat::Json)
            .build();
        assert_eq!(config.catalog.path, Some(PathBuf::from("catalog.yaml")));
        assert_eq!(config.readiness.settings().completion_threshold, 0.9);
        assert_eq!(config.output.format, ReportFormat::Json);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig =
            serde_yaml::from_str("readiness:\n  completion_threshold: 0.9\n").expect("parse");
        assert_eq!(config.readiness.completion_threshold, 0.9);
        assert_eq!(config.readiness.scale_pass_threshold, 4);
        assert_eq!(config.output, OutputConfig::default());
    }
}

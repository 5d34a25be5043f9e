//! Configuration validation for pharma-readiness.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, CatalogConfig, OutputConfig, ReadinessConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.catalog.validate());
        errors.extend(self.readiness.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for CatalogConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                errors.push(ConfigError {
                    field: "catalog.path".to_string(),
                    message: "Path must not be empty".to_string(),
                });
            } else if path.is_dir() {
                errors.push(ConfigError {
                    field: "catalog.path".to_string(),
                    message: format!("{} is a directory, expected a catalog file", path.display()),
                });
            }
        }
        errors
    }
}

impl Validatable for ReadinessConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let threshold = self.completion_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            errors.push(ConfigError {
                field: "readiness.completion_threshold".to_string(),
                message: format!("Threshold must be in (0.0, 1.0], got {threshold}"),
            });
        }

        if !(1..=5).contains(&self.scale_pass_threshold) {
            errors.push(ConfigError {
                field: "readiness.scale_pass_threshold".to_string(),
                message: format!(
                    "Scale threshold must be between 1 and 5, got {}",
                    self.scale_pass_threshold
                ),
            });
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(file) = &self.file {
            if let Some(parent) = file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError {
                        field: "output.file".to_string(),
                        message: format!("Parent directory does not exist: {}", parent.display()),
                    });
                }
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_completion_threshold_bounds() {
        let mut readiness = ReadinessConfig::default();
        readiness.completion_threshold = 0.0;
        assert_eq!(readiness.validate().len(), 1);
        readiness.completion_threshold = 1.0;
        assert!(readiness.is_valid());
        readiness.completion_threshold = 1.2;
        assert!(!readiness.is_valid());
        readiness.completion_threshold = f64::NAN;
        assert!(!readiness.is_valid());
    }

    #[test]
    fn test_scale_threshold_bounds() {
        let mut readiness = ReadinessConfig::default();
        readiness.scale_pass_threshold = 0;
        assert_eq!(
            readiness.validate()[0].field,
            "readiness.scale_pass_threshold"
        );
        readiness.scale_pass_threshold = 6;
        assert!(!readiness.is_valid());
    }

    #[test]
    fn test_all_errors_reported() {
        let config = AppConfig {
            readiness: ReadinessConfig {
                completion_threshold: 2.0,
                scale_pass_threshold: 9,
            },
            output: OutputConfig {
                file: Some(PathBuf::from("/definitely/not/here/report.json")),
                ..OutputConfig::default()
            },
            ..AppConfig::default()
        };
        assert_eq!(config.validate().len(), 3);
    }
}

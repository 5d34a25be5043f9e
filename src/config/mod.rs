//! Configuration module for pharma-readiness.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.pharma-readiness.yaml` file in your working directory or
//! `~/.config/pharma-readiness/`:
//!
//! ```yaml
//! catalog:
//!   path: ./catalog.yaml
//! readiness:
//!   completion_threshold: 0.9
//!   scale_pass_threshold: 4
//! output:
//!   format: json
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{AppConfig, AppConfigBuilder, CatalogConfig, OutputConfig, ReadinessConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// The schema documents every option accepted in `.pharma-readiness.yaml`
/// and can be used by editors for validation and autocompletion.
pub fn generate_json_schema() -> serde_json::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

//! Config command handlers.

use super::{exit_codes, write_output, OutputTarget};
use crate::config::{generate_example_config, generate_json_schema, AppConfig};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Print the effective configuration as YAML.
///
/// With `example` set, prints a commented starter file instead.
pub fn run_config_show(app: &AppConfig, loaded_from: Option<&Path>, example: bool) -> Result<i32> {
    if example {
        write_output(&generate_example_config(), &OutputTarget::Stdout)?;
        return Ok(exit_codes::SUCCESS);
    }

    let yaml = serde_yaml::to_string(app).context("Failed to serialize configuration")?;
    let header = loaded_from.map_or_else(
        || "# no config file found; showing defaults with CLI overrides\n".to_string(),
        |path| format!("# loaded from {}\n", path.display()),
    );
    write_output(&format!("{header}{yaml}"), &OutputTarget::Stdout)?;
    Ok(exit_codes::SUCCESS)
}

/// Write the JSON Schema of the config file format.
pub fn run_config_schema(output: Option<PathBuf>) -> Result<i32> {
    let schema = generate_json_schema().context("Failed to generate config schema")?;
    write_output(&schema, &OutputTarget::from_option(output))?;
    Ok(exit_codes::SUCCESS)
}

//! Catalog command handlers.
//!
//! `catalog seed` writes the built-in catalog as an editable document,
//! `catalog validate` checks a document without loading it into the engine,
//! and `catalog stats` summarizes the configured catalog.

use super::{ensure_valid, exit_codes, load_configured_catalog, reporter_for, write_output, OutputTarget};
use crate::catalog::{builtin, CatalogBuilder, CatalogDocument, DocumentFormat};
use crate::config::AppConfig;
use crate::reports::ReportMetadata;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Write the built-in catalog as a YAML or JSON document.
///
/// Without an explicit format the output file extension decides, falling
/// back to YAML.
pub fn run_catalog_seed(output: Option<PathBuf>, format: Option<DocumentFormat>) -> Result<i32> {
    let format = format
        .or_else(|| output.as_deref().and_then(DocumentFormat::from_path))
        .unwrap_or(DocumentFormat::Yaml);
    let catalog = builtin().context("built-in catalog failed validation")?;
    let text = catalog.to_document().render(format)?;

    tracing::info!(
        format = format.name(),
        fingerprint = %catalog.fingerprint_hex(),
        "Seeding catalog document"
    );
    write_output(&text, &OutputTarget::from_option(output))?;
    Ok(exit_codes::SUCCESS)
}

/// Validate a catalog document and print every issue found.
///
/// Returns `NOT_READY` (1) when the document parses but fails validation.
/// Unreadable or malformed files are errors.
pub fn run_catalog_validate(path: &Path) -> Result<i32> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog from {}", path.display()))?;
    let document = CatalogDocument::parse(&content, DocumentFormat::from_path(path))
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let issues = CatalogBuilder::from_document(document).validate();
    if issues.is_empty() {
        println!("{}: valid", path.display());
        return Ok(exit_codes::SUCCESS);
    }

    println!("{}: {} issue(s)", path.display(), issues.len());
    for issue in &issues {
        println!("  - {issue}");
    }
    Ok(exit_codes::NOT_READY)
}

/// Render table sizes of the configured catalog.
pub fn render_catalog_stats(app: &AppConfig, target: &OutputTarget) -> Result<String> {
    ensure_valid(app)?;
    let (catalog, source) = load_configured_catalog(app)?;
    let metadata = ReportMetadata::new().with_catalog_source(source);
    Ok(reporter_for(app, target).generate_catalog_report(
        &catalog.stats(),
        &catalog.fingerprint_hex(),
        &metadata,
    )?)
}

/// Run the `catalog stats` command.
pub fn run_catalog_stats(app: AppConfig) -> Result<i32> {
    let target = OutputTarget::from_option(app.output.file.clone());
    let text = render_catalog_stats(&app, &target)?;
    write_output(&text, &target)?;
    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;
    use tempfile::TempDir;

    #[test]
    fn test_seed_then_validate() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("catalog.yaml");
        let code = run_catalog_seed(Some(path.clone()), None).expect("seed");
        assert_eq!(code, exit_codes::SUCCESS);
        assert_eq!(run_catalog_validate(&path).expect("validate"), exit_codes::SUCCESS);
    }

    #[test]
    fn test_validate_reports_broken_document() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("broken.json");
        std::fs::write(
            &path,
            r#"{"sections":[{"id":"a","sectionNumber":1,"title":"A"}],
                "questions":[{"id":"q","sectionId":"missing","text":"Q","type":"boolean","points":1,"category":"c"}]}"#,
        )
        .expect("write");
        assert_eq!(run_catalog_validate(&path).expect("validate"), exit_codes::NOT_READY);
    }

    #[test]
    fn test_stats_json() {
        let app = AppConfig::builder()
            .output_format(ReportFormat::Json)
            .build();
        let text = render_catalog_stats(&app, &OutputTarget::Stdout).expect("stats");
        let value: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(value["stats"]["sections"], 22);
        assert_eq!(value["report"]["catalogSource"], super::super::BUILTIN_CATALOG);
    }
}

//! Serializable catalog documents.
//!
//! Catalog storage is external to the engine; this is the interchange format
//! used to load a catalog snapshot from YAML or JSON. Loading is idempotent:
//! the same document always yields a catalog with the same fingerprint.

use super::{Catalog, CatalogBuilder};
use crate::error::{CatalogError, EngineError, ErrorContext, Result};
use crate::model::{
    AiModelType, DeploymentScenario, Persona, PersonaSectionMapping, Question, Section, SubPersona,
    TherapeuticArea,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Every reference table as plain lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CatalogDocument {
    #[serde(default)]
    pub personas: Vec<Persona>,
    #[serde(default)]
    pub sub_personas: Vec<SubPersona>,
    #[serde(default)]
    pub therapeutic_areas: Vec<TherapeuticArea>,
    #[serde(default)]
    pub ai_model_types: Vec<AiModelType>,
    #[serde(default)]
    pub deployment_scenarios: Vec<DeploymentScenario>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub mappings: Vec<PersonaSectionMapping>,
}

/// On-disk encodings of a catalog document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Some(Self::Json),
            Some("yaml" | "yml") => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Sniff the format from content. JSON documents open with `{`.
    #[must_use]
    pub fn detect(content: &str) -> Self {
        if content.trim_start().starts_with('{') {
            Self::Json
        } else {
            Self::Yaml
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

impl CatalogDocument {
    /// Decode a document; `None` sniffs the format from the content.
    pub fn parse(content: &str, format: Option<DocumentFormat>) -> std::result::Result<Self, CatalogError> {
        match format.unwrap_or_else(|| DocumentFormat::detect(content)) {
            DocumentFormat::Json => Ok(serde_json::from_str(content)?),
            DocumentFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        }
    }

    /// Encode the document.
    pub fn render(&self, format: DocumentFormat) -> std::result::Result<String, CatalogError> {
        match format {
            DocumentFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            DocumentFormat::Yaml => Ok(serde_yaml::to_string(self)?),
        }
    }
}

/// Parse and validate a catalog from a string.
pub fn parse_catalog_str(content: &str, format: Option<DocumentFormat>) -> Result<Catalog> {
    let doc = CatalogDocument::parse(content, format).context("parsing catalog document")?;
    CatalogBuilder::from_document(doc)
        .build()
        .context("validating catalog document")
}

/// Load a catalog from a YAML or JSON file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path).map_err(|e| EngineError::io(path, e))?;
    let format = DocumentFormat::from_path(path);
    let catalog = parse_catalog_str(&content, format)
        .with_context(|| format!("loading catalog from {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        fingerprint = %catalog.fingerprint_hex(),
        "Loaded catalog"
    );
    Ok(catalog)
}

//! Unified error types for pharma-readiness.
//!
//! Lookup failures on required identifiers (persona, sub-persona, therapeutic
//! area for non-admin personas) are fatal and surface as typed variants.
//! Failures on optional multi-select identifiers are recovered by the engine:
//! they are reported as skipped references and logged as
//! [`EngineError::UnknownCatalogReference`].

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for engine operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EngineError {
    /// The configuration names a persona that is not in the catalog
    #[error("Unknown persona '{id}'{}", suggestion_suffix(.suggestion))]
    UnknownPersona {
        id: String,
        suggestion: Option<String>,
    },

    /// The sub-persona does not exist or belongs to another persona
    #[error("Sub-persona '{sub_persona_id}' does not belong to persona '{persona_id}'")]
    UnknownSubPersona {
        persona_id: String,
        sub_persona_id: String,
    },

    /// A non-admin configuration references a missing therapeutic area
    #[error("Unknown therapeutic area '{id}'{}", suggestion_suffix(.suggestion))]
    UnknownTherapeuticArea {
        id: String,
        suggestion: Option<String>,
    },

    /// An optional selection that could not be resolved (recovered, logged)
    #[error("Unknown {kind} '{id}' ignored")]
    UnknownCatalogReference { kind: ReferenceKind, id: String },

    /// Non-admin persona without a therapeutic area
    #[error("Persona '{persona_id}' requires a therapeutic area selection")]
    EmptyConfiguration { persona_id: String },

    /// An answer that cannot apply to its question
    #[error("Invalid answer for question '{question_id}': {reason}")]
    InvalidAnswer { question_id: String, reason: String },

    /// Catalog loading or validation failures
    #[error("Catalog error: {context}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogError,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// The optional reference tables a configuration can point into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReferenceKind {
    TherapeuticArea,
    AiModelType,
    DeploymentScenario,
}

impl ReferenceKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TherapeuticArea => "therapeutic area",
            Self::AiModelType => "AI model type",
            Self::DeploymentScenario => "deployment scenario",
        }
    }
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{s}'?)"))
        .unwrap_or_default()
}

/// Errors raised while loading or validating a catalog.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog failed validation with {} issue(s): {}", .issues.len(), summarize(.issues))]
    Invalid { issues: Vec<CatalogIssue> },

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Issues found during validation, empty for parse and IO errors.
    #[must_use]
    pub fn issues(&self) -> &[CatalogIssue] {
        match self {
            Self::Invalid { issues } => issues,
            _ => &[],
        }
    }
}

fn summarize(issues: &[CatalogIssue]) -> String {
    const SHOWN: usize = 3;
    let mut parts: Vec<String> = issues.iter().take(SHOWN).map(ToString::to_string).collect();
    if issues.len() > SHOWN {
        parts.push(format!("and {} more", issues.len() - SHOWN));
    }
    parts.join("; ")
}

/// A single catalog validation finding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogIssue {
    #[error("{table} id '{id}' is not kebab-case")]
    MalformedId { table: &'static str, id: String },

    #[error("duplicate {table} id '{id}'")]
    DuplicateId { table: &'static str, id: String },

    #[error("section number {number} is used by both '{first}' and '{second}'")]
    DuplicateSectionNumber {
        number: u32,
        first: String,
        second: String,
    },

    #[error("sub-persona '{sub_persona_id}' references missing persona '{persona_id}'")]
    OrphanSubPersona {
        sub_persona_id: String,
        persona_id: String,
    },

    #[error("question '{question_id}' references missing section '{section_id}'")]
    OrphanQuestion {
        question_id: String,
        section_id: String,
    },

    #[error("question '{question_id}' lists unknown sub-persona '{sub_persona_id}' as relevant")]
    UnknownRelevantSubPersona {
        question_id: String,
        sub_persona_id: String,
    },

    #[error("question '{question_id}' has an invalid scale: {reason}")]
    InvalidScale { question_id: String, reason: String },

    #[error("mapping ({persona_id}, {}, {section_id}) references {reason}", .sub_persona_id.as_deref().unwrap_or("*"))]
    DanglingMapping {
        persona_id: String,
        sub_persona_id: Option<String>,
        section_id: String,
        reason: String,
    },

    #[error("mapping ({persona_id}, {}, {section_id}) is declared more than once", .sub_persona_id.as_deref().unwrap_or("*"))]
    DuplicateMapping {
        persona_id: String,
        sub_persona_id: Option<String>,
        section_id: String,
    },

    #[error("mapping ({persona_id}, {section_id}) has priority {priority}, expected 1-3")]
    PriorityOutOfRange {
        persona_id: String,
        section_id: String,
        priority: u8,
    },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl EngineError {
    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogError) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid answer error
    pub fn invalid_answer(question_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAnswer {
            question_id: question_id.into(),
            reason: reason.into(),
        }
    }

    /// Whether the caller supplied a bad identifier or selection.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownPersona { .. }
                | Self::UnknownSubPersona { .. }
                | Self::UnknownTherapeuticArea { .. }
                | Self::EmptyConfiguration { .. }
                | Self::InvalidAnswer { .. }
        )
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<CatalogError> for EngineError {
    fn from(err: CatalogError) -> Self {
        Self::catalog(String::new(), err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson(err.to_string())
    }
}

impl From<serde_yaml::Error> for CatalogError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::InvalidYaml(err.to_string())
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain outward-in, so a failure deep in catalog loading
/// reads "loading catalog from x.yaml: parsing document: ...".
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<EngineError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
///
/// Lookup errors carry their own identifiers and are passed through untouched.
fn add_context_to_error(err: EngineError, new_ctx: &str) -> EngineError {
    match err {
        EngineError::Catalog {
            context: existing,
            source,
        } => EngineError::Catalog {
            context: chain_context(new_ctx, &existing),
            source,
        },
        EngineError::Io {
            path,
            message,
            source,
        } => EngineError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        EngineError::Config(msg) => EngineError::Config(chain_context(new_ctx, &msg)),
        other => other,
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to a configuration error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| EngineError::Config(context.into()))
    }
}

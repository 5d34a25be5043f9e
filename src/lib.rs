//! **Persona-driven assessment composition for pharmaceutical AI compliance.**
//!
//! `pharma-readiness` turns a reference catalog of compliance sections and
//! questions into the assessment a specific stakeholder should answer before
//! an AI system goes to production. A data scientist, a quality lead and a
//! regulatory affairs specialist see different sections, different questions
//! and different weights for the same project.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: personas, reference tables, sections, questions,
//!   persona-section mappings and the request-scoped
//!   [`AssessmentConfiguration`] and [`AssessmentResponses`].
//! - **[`catalog`]**: the immutable, validated [`Catalog`] snapshot and the
//!   [`CatalogStore`] read API the engine consumes. Catalogs load from YAML
//!   or JSON documents, or come from the built-in seed.
//! - **[`engine`]**: eligibility resolution, scoring, blocker analysis,
//!   preview composition and the production-readiness check, bundled by
//!   [`AssessmentEngine`].
//! - **[`reports`]**: JSON and terminal summary renderers.
//! - **[`config`]**: YAML config files layered under CLI flags.
//!
//! ## Composing a Preview
//!
//! ```no_run
//! use pharma_readiness::{catalog, AssessmentConfiguration, AssessmentEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = AssessmentEngine::new(catalog::builtin()?);
//!     let config = AssessmentConfiguration::builder("data-science")
//!         .sub_persona("data-head")
//!         .therapeutic_area("oncology")
//!         .model_type("generative-ai")
//!         .build();
//!
//!     let preview = engine.preview(&config)?;
//!     println!(
//!         "{} sections, {} questions, about {}",
//!         preview.total_sections, preview.total_questions, preview.estimated_time
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Checking Readiness
//!
//! ```no_run
//! use pharma_readiness::{catalog, Answer, AssessmentConfiguration, AssessmentEngine, AssessmentResponses};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = AssessmentEngine::new(catalog::builtin()?);
//!     let config = AssessmentConfiguration::builder("admin").build();
//!     let responses = AssessmentResponses::new().with("gov-01", Answer::Boolean(true));
//!
//!     let (_, verdict) = engine.readiness(&config, &responses)?;
//!     for condition in &verdict.failing {
//!         println!("not ready: {condition}");
//!     }
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod reports;

// Re-export main types for convenience
pub use catalog::{Catalog, CatalogBuilder, CatalogHandle, CatalogStore};
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use engine::{
    AssessmentEngine, AssessmentPreview, ReadinessSettings, ReadinessVerdict, ResolvedSection,
    ScoreBreakdown,
};
pub use error::{CatalogError, EngineError, ErrorContext, OptionContext, ReferenceKind, Result};
pub use model::{
    Answer, AssessmentConfiguration, AssessmentResponses, PersonaSectionMapping, Question,
    Section,
};
pub use reports::{ReportFormat, ReportGenerator};

//! Assessment composition and scoring.
//!
//! The engine is a pure function of a catalog snapshot and a request-scoped
//! [`AssessmentConfiguration`]:
//!
//! 1. [`resolve_sections`] picks the eligible sections and questions
//! 2. [`compute_scores`] sums points and the advisory complexity score
//! 3. [`analyze_blockers`] counts critical sections and blocker questions
//! 4. [`compose_preview`] assembles the three into an [`AssessmentPreview`]
//!
//! [`evaluate_readiness`] then checks a set of answers against a preview.
//! [`AssessmentEngine`] wraps these over a swappable [`CatalogHandle`].

mod blockers;
mod preview;
mod readiness;
mod resolver;
mod scoring;
mod selection;

pub use blockers::{analyze_blockers, BlockerSummary};
pub use preview::{compose_preview, AssessmentPreview, ComplexitySummary, PreviewSection};
pub use readiness::{
    evaluate_readiness, ReadinessCondition, ReadinessSettings, ReadinessVerdict,
    DEFAULT_COMPLETION_THRESHOLD, DEFAULT_SCALE_PASS_THRESHOLD,
};
pub use resolver::{resolve_sections, ResolvedSection};
pub use scoring::{compute_scores, estimated_time_label, estimated_time_minutes, ScoreBreakdown};
pub use selection::SkippedReference;

use crate::catalog::{Catalog, CatalogHandle};
use crate::error::Result;
use crate::model::{AssessmentConfiguration, AssessmentResponses};
use rayon::prelude::*;
use std::sync::Arc;

/// Engine facade over a published catalog.
///
/// Every call takes one snapshot up front and works on it to the end, so a
/// concurrent [`publish`](Self::publish) never affects an in-flight call.
#[derive(Debug)]
pub struct AssessmentEngine {
    catalog: CatalogHandle,
    settings: ReadinessSettings,
}

impl AssessmentEngine {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: CatalogHandle::new(catalog),
            settings: ReadinessSettings::default(),
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: ReadinessSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub const fn settings(&self) -> &ReadinessSettings {
        &self.settings
    }

    /// Current catalog snapshot.
    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        self.catalog.snapshot()
    }

    /// Swap in a new catalog; returns the previous snapshot.
    pub fn publish(&self, catalog: Catalog) -> Arc<Catalog> {
        self.catalog.publish(catalog)
    }

    pub fn preview(&self, config: &AssessmentConfiguration) -> Result<AssessmentPreview> {
        let snapshot = self.catalog.snapshot();
        compose_preview(snapshot.as_ref(), config)
    }

    /// Preview independent configurations in parallel against one snapshot.
    ///
    /// Results keep the input order.
    pub fn preview_many(
        &self,
        configs: &[AssessmentConfiguration],
    ) -> Vec<Result<AssessmentPreview>> {
        let snapshot = self.catalog.snapshot();
        let catalog = snapshot.as_ref();
        configs
            .par_iter()
            .map(|config| compose_preview(catalog, config))
            .collect()
    }

    /// Compose a preview and evaluate answers against it.
    pub fn readiness(
        &self,
        config: &AssessmentConfiguration,
        responses: &AssessmentResponses,
    ) -> Result<(AssessmentPreview, ReadinessVerdict)> {
        let preview = self.preview(config)?;
        let verdict = evaluate_readiness(&preview, responses, &self.settings)?;
        Ok((preview, verdict))
    }
}

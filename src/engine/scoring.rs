//! Complexity and point totals.
//!
//! Two independent axes are computed here. The assessment weight
//! (`total_points`) is the sum of eligible question points. The configuration
//! complexity (`total_complexity`) is the sum of therapeutic area overlays,
//! model type points and deployment points. The complexity score is advisory
//! and never feeds into the assessment weight.

use super::resolver::ResolvedSection;
use super::selection::{Selection, SkippedReference};
use crate::catalog::CatalogStore;
use crate::model::{AssessmentConfiguration, ComplexityTier};
use serde::{Deserialize, Serialize};

/// Minutes budgeted per question, times two (2.5 minutes each).
const HALF_MINUTES_PER_QUESTION: usize = 5;

/// Score totals for one configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub therapy_score: u32,
    pub model_score: u32,
    pub deployment_score: u32,
    pub total_complexity: u32,
    pub complexity_tier: ComplexityTier,
    /// Σ base points of eligible sections; a separate axis from both totals below.
    pub section_base_points: u32,
    pub total_points: u32,
    pub total_sections: usize,
    pub total_questions: usize,
    pub estimated_time_minutes: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_references: Vec<SkippedReference>,
}

/// Compute complexity and point totals over resolved sections.
///
/// Unknown reference ids contribute nothing; they are logged and reported in
/// `skipped_references` instead of failing the computation.
pub fn compute_scores<S: CatalogStore + ?Sized>(
    store: &S,
    config: &AssessmentConfiguration,
    sections: &[ResolvedSection],
) -> ScoreBreakdown {
    let selection = Selection::gather(store, config);
    for skipped in &selection.skipped {
        tracing::warn!(kind = %skipped.kind, id = %skipped.id, "{}", skipped.to_error());
    }

    let therapy_score = saturating_sum(selection.therapeutic_areas.iter().map(|ta| ta.overlay_points));
    let model_score = saturating_sum(selection.model_types.iter().map(|m| m.complexity_points));
    let deployment_score = saturating_sum(selection.deployments.iter().map(|d| d.complexity_points));
    let total_complexity = total_complexity(therapy_score, model_score, deployment_score);

    let total_questions = sections.iter().map(|s| s.questions.len()).sum();

    ScoreBreakdown {
        therapy_score,
        model_score,
        deployment_score,
        total_complexity,
        complexity_tier: ComplexityTier::from_score(total_complexity),
        section_base_points: saturating_sum(sections.iter().map(|s| s.section.base_points)),
        total_points: saturating_sum(sections.iter().map(ResolvedSection::points)),
        total_sections: sections.len(),
        total_questions,
        estimated_time_minutes: estimated_time_minutes(total_questions),
        skipped_references: selection.skipped,
    }
}

/// Catalog weights are unbounded, so every total clamps at `u32::MAX`.
fn saturating_sum(values: impl Iterator<Item = u32>) -> u32 {
    values.fold(0, u32::saturating_add)
}

const fn total_complexity(therapy: u32, model: u32, deployment: u32) -> u32 {
    therapy.saturating_add(model).saturating_add(deployment)
}

/// `ceil(question_count × 2.5)`.
#[must_use]
pub const fn estimated_time_minutes(question_count: usize) -> usize {
    (question_count * HALF_MINUTES_PER_QUESTION).div_ceil(2)
}

/// Human-readable duration: "45 min", "2 hr" or "1 hr 40 min".
#[must_use]
pub fn estimated_time_label(minutes: usize) -> String {
    let (hours, rest) = (minutes / 60, minutes % 60);
    match (hours, rest) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} hr"),
        (h, m) => format!("{h} hr {m} min"),
    }
}

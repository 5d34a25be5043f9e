//! Preview composition.

use super::blockers::{analyze_blockers, BlockerSummary};
use super::resolver::{resolve_sections, ResolvedSection};
use super::scoring::{compute_scores, estimated_time_label, ScoreBreakdown};
use super::selection::SkippedReference;
use crate::catalog::CatalogStore;
use crate::error::Result;
use crate::model::{AssessmentConfiguration, ComplexityTier, Question};
use serde::{Deserialize, Serialize};

/// A resolved section annotated with its blocker count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewSection {
    #[serde(flatten)]
    pub resolved: ResolvedSection,
    pub blocker_count: usize,
    pub points: u32,
}

/// The advisory complexity badge and its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexitySummary {
    pub therapy_score: u32,
    pub model_score: u32,
    pub deployment_score: u32,
    pub total_complexity: u32,
    pub tier: ComplexityTier,
    pub section_base_points: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_references: Vec<SkippedReference>,
}

/// Everything a caller needs to show an assessment before it starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentPreview {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_fingerprint: Option<String>,
    pub configuration: AssessmentConfiguration,
    pub sections: Vec<PreviewSection>,
    pub total_sections: usize,
    pub total_questions: usize,
    pub total_points: u32,
    pub critical_sections: usize,
    pub production_blockers: usize,
    pub estimated_time: String,
    pub estimated_time_minutes: usize,
    pub complexity: ComplexitySummary,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub critical_gaps: Vec<String>,
}

impl AssessmentPreview {
    fn assemble(
        catalog_fingerprint: Option<String>,
        configuration: AssessmentConfiguration,
        sections: Vec<ResolvedSection>,
        scores: ScoreBreakdown,
        blockers: BlockerSummary,
    ) -> Self {
        let sections = sections
            .into_iter()
            .map(|resolved| PreviewSection {
                blocker_count: blockers
                    .per_section
                    .get(&resolved.section.id)
                    .copied()
                    .unwrap_or_default(),
                points: resolved.points(),
                resolved,
            })
            .collect();

        Self {
            catalog_fingerprint,
            configuration,
            sections,
            total_sections: scores.total_sections,
            total_questions: scores.total_questions,
            total_points: scores.total_points,
            critical_sections: blockers.critical_sections,
            production_blockers: blockers.production_blockers,
            estimated_time: estimated_time_label(scores.estimated_time_minutes),
            estimated_time_minutes: scores.estimated_time_minutes,
            complexity: ComplexitySummary {
                therapy_score: scores.therapy_score,
                model_score: scores.model_score,
                deployment_score: scores.deployment_score,
                total_complexity: scores.total_complexity,
                tier: scores.complexity_tier,
                section_base_points: scores.section_base_points,
                skipped_references: scores.skipped_references,
            },
            critical_gaps: blockers.critical_gaps,
        }
    }

    /// Every eligible question, in section order.
    pub fn questions(&self) -> impl Iterator<Item = (&PreviewSection, &Question)> {
        self.sections
            .iter()
            .flat_map(|s| s.resolved.questions.iter().map(move |q| (s, q)))
    }

    /// Section ids in display order.
    pub fn section_ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.resolved.section.id.as_str())
    }
}

/// Resolve, score and analyze one configuration.
///
/// Read-only: the catalog is not touched and nothing is persisted.
pub fn compose_preview<S: CatalogStore + ?Sized>(
    store: &S,
    config: &AssessmentConfiguration,
) -> Result<AssessmentPreview> {
    let sections = resolve_sections(store, config)?;
    let scores = compute_scores(store, config, &sections);
    let blockers = analyze_blockers(&sections);

    Ok(AssessmentPreview::assemble(
        store.snapshot_id(),
        config.clone(),
        sections,
        scores,
        blockers,
    ))
}

//! Critical-section and blocker-question counts.

use super::resolver::ResolvedSection;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Blocker counts over a set of resolved sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockerSummary {
    /// Sections flagged `is_critical_blocker`.
    pub critical_sections: usize,
    /// Blocker questions across all sections, critical or not.
    pub production_blockers: usize,
    /// Blocker question count per section id, in resolved order.
    pub per_section: IndexMap<String, usize>,
    /// Critical sections that currently have no eligible questions.
    pub critical_gaps: Vec<String>,
}

pub fn analyze_blockers(sections: &[ResolvedSection]) -> BlockerSummary {
    let mut summary = BlockerSummary::default();

    for resolved in sections {
        let blockers = resolved.blocker_questions().count();
        summary.production_blockers += blockers;
        summary
            .per_section
            .insert(resolved.section.id.clone(), blockers);

        if resolved.section.is_critical_blocker {
            summary.critical_sections += 1;
            if resolved.questions.is_empty() {
                summary.critical_gaps.push(resolved.section.id.clone());
            }
        }
    }

    summary
}

//! Eligibility resolution: which sections and questions a configuration sees.

use super::selection::Selection;
use crate::catalog::{CatalogStore, SectionAssignment};
use crate::error::{EngineError, Result};
use crate::model::{
    AssessmentConfiguration, EffectiveMapping, Persona, Question, Section, SubPersona,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeSet;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// An eligible section with its filtered questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSection {
    #[serde(flatten)]
    pub section: Section,
    pub mapping: EffectiveMapping,
    pub question_count: usize,
    pub questions: Vec<Question>,
}

impl ResolvedSection {
    /// Sum of question points in this section, saturating at `u32::MAX`.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.questions
            .iter()
            .fold(0, |total, q| total.saturating_add(q.points))
    }

    /// Questions flagged as production blockers.
    pub fn blocker_questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|q| q.is_blocker)
    }
}

/// Resolve the ordered list of eligible sections for a configuration.
///
/// Sections are ordered by effective priority (highest first), then by
/// section number. Non-critical sections left without questions are dropped;
/// critical ones are kept with a zero count so the gap stays visible.
pub fn resolve_sections<S: CatalogStore + ?Sized>(
    store: &S,
    config: &AssessmentConfiguration,
) -> Result<Vec<ResolvedSection>> {
    let persona = lookup_persona(store, &config.persona_id)?;
    let sub_persona = lookup_sub_persona(store, persona, config.sub_persona())?;
    let selection = Selection::gather(store, config);
    check_therapeutic_area(store, persona, config, &selection)?;

    let candidates: Vec<(&Section, EffectiveMapping)> = if persona.is_admin {
        store
            .list_sections()
            .into_iter()
            .map(|section| (section, EffectiveMapping::admin()))
            .collect()
    } else {
        effective_assignments(
            store.list_sections_for_persona(&persona.id, sub_persona.map(|sp| sp.id.as_str())),
            sub_persona.is_some(),
        )
    };

    let filter = QuestionFilter::new(store, persona, sub_persona, &selection);
    let mut resolved: Vec<ResolvedSection> = candidates
        .into_iter()
        .filter_map(|(section, mapping)| {
            let questions: Vec<Question> = store
                .get_questions_for_section(&section.id)
                .into_iter()
                .filter(|q| filter.is_eligible(q))
                .cloned()
                .collect();
            if questions.is_empty() && !section.is_critical_blocker {
                tracing::debug!(section = %section.id, "Dropping section without eligible questions");
                return None;
            }
            Some(ResolvedSection {
                section: section.clone(),
                mapping,
                question_count: questions.len(),
                questions,
            })
        })
        .collect();

    resolved.sort_by_key(|r| (Reverse(r.mapping.priority_score), r.section.section_number));

    tracing::debug!(
        persona = %persona.id,
        sub_persona = ?sub_persona.map(|sp| sp.id.as_str()),
        sections = resolved.len(),
        "Resolved eligible sections"
    );
    Ok(resolved)
}

fn lookup_persona<'a, S: CatalogStore + ?Sized>(store: &'a S, id: &str) -> Result<&'a Persona> {
    store.get_persona(id).ok_or_else(|| EngineError::UnknownPersona {
        id: id.to_string(),
        suggestion: suggest(id, store.persona_ids()),
    })
}

fn lookup_sub_persona<'a, S: CatalogStore + ?Sized>(
    store: &'a S,
    persona: &Persona,
    id: Option<&str>,
) -> Result<Option<&'a SubPersona>> {
    let Some(id) = id else {
        return Ok(None);
    };
    store
        .get_sub_persona(id)
        .filter(|sp| sp.parent_persona_id == persona.id)
        .map(Some)
        .ok_or_else(|| EngineError::UnknownSubPersona {
            persona_id: persona.id.clone(),
            sub_persona_id: id.to_string(),
        })
}

/// Non-admin personas need a known primary therapeutic area. Admins may omit
/// it, and an unknown one is skipped for them like any optional selection.
fn check_therapeutic_area<S: CatalogStore + ?Sized>(
    store: &S,
    persona: &Persona,
    config: &AssessmentConfiguration,
    selection: &Selection<'_>,
) -> Result<()> {
    if persona.is_admin {
        return Ok(());
    }
    let Some(primary) = config.primary_therapeutic_area() else {
        return Err(EngineError::EmptyConfiguration {
            persona_id: persona.id.clone(),
        });
    };
    if selection.therapeutic_areas.iter().any(|ta| ta.id == primary) {
        Ok(())
    } else {
        Err(EngineError::UnknownTherapeuticArea {
            id: primary.to_string(),
            suggestion: suggest(primary, store.therapeutic_area_ids()),
        })
    }
}

/// Pick one mapping row per section.
///
/// A row specific to the active sub-persona beats a persona-wide row; among
/// equals the higher priority wins, and the first row in catalog order breaks
/// remaining ties.
fn effective_assignments(
    assignments: Vec<SectionAssignment<'_>>,
    has_sub_persona: bool,
) -> Vec<(&Section, EffectiveMapping)> {
    let rank = |a: &SectionAssignment<'_>| {
        (
            has_sub_persona && a.mapping.sub_persona_id.is_some(),
            a.mapping.priority_score,
        )
    };

    let mut best: IndexMap<&str, SectionAssignment<'_>> = IndexMap::new();
    for assignment in assignments {
        match best.get_mut(assignment.section.id.as_str()) {
            Some(current) => {
                if rank(&assignment) > rank(current) {
                    *current = assignment;
                }
            }
            None => {
                best.insert(assignment.section.id.as_str(), assignment);
            }
        }
    }

    best.into_values()
        .map(|a| (a.section, EffectiveMapping::from(a.mapping)))
        .collect()
}

/// Question-level eligibility for one configuration.
struct QuestionFilter<'a> {
    bypass: bool,
    sub_persona: Option<&'a str>,
    /// Sub-personas of the persona, consulted when none is selected.
    persona_sub_personas: BTreeSet<&'a str>,
    therapy_tags: BTreeSet<&'a String>,
    model_tags: BTreeSet<&'a String>,
    deployment_tags: BTreeSet<&'a String>,
}

impl<'a> QuestionFilter<'a> {
    fn new<S: CatalogStore + ?Sized>(
        store: &'a S,
        persona: &Persona,
        sub_persona: Option<&'a SubPersona>,
        selection: &Selection<'a>,
    ) -> Self {
        Self {
            bypass: persona.is_admin,
            sub_persona: sub_persona.map(|sp| sp.id.as_str()),
            persona_sub_personas: store
                .sub_personas_of(&persona.id)
                .into_iter()
                .map(|sp| sp.id.as_str())
                .collect(),
            therapy_tags: selection.therapy_tags(),
            model_tags: selection.model_tags(),
            deployment_tags: selection.deployment_tags(),
        }
    }

    fn is_eligible(&self, question: &Question) -> bool {
        if self.bypass {
            return true;
        }
        self.persona_relevant(question)
            && (!question.therapy_specific
                || question.matches_any(self.therapy_tags.iter().copied()))
            && (!question.ai_model_type_specific
                || question.matches_any(self.model_tags.iter().copied()))
            && (!question.deployment_scenario_specific
                || question.matches_any(self.deployment_tags.iter().copied()))
    }

    fn persona_relevant(&self, question: &Question) -> bool {
        if question.persona_relevant.is_empty() {
            return true;
        }
        match self.sub_persona {
            Some(id) => question.persona_relevant.contains(id),
            None => question
                .persona_relevant
                .iter()
                .any(|id| self.persona_sub_personas.contains(id.as_str())),
        }
    }
}

/// Closest candidate to an unknown id, if any is similar enough.
pub(crate) fn suggest<'a, I>(id: &str, candidates: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .map(|candidate| (strsim::jaro_winkler(id, candidate), candidate))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, candidate)| candidate.to_string())
}

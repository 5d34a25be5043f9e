//! Validating catalog construction.

use super::{Catalog, CatalogDocument};
use crate::error::{CatalogError, CatalogIssue};
use crate::model::{
    AiModelType, DeploymentScenario, Persona, PersonaSectionMapping, Question, QuestionType,
    Section, SubPersona, TherapeuticArea, MAX_PRIORITY, MIN_PRIORITY,
};
use indexmap::IndexMap;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use xxhash_rust::xxh3::xxh3_64;

static KEBAB_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("static regex"));

/// Builder that validates reference data before publishing it as a [`Catalog`].
///
/// Every check runs before failing, so a broken catalog document reports all
/// of its problems at once.
#[derive(Debug, Default, Clone)]
#[must_use]
pub struct CatalogBuilder {
    doc: CatalogDocument,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_document(doc: CatalogDocument) -> Self {
        Self { doc }
    }

    pub fn persona(mut self, persona: Persona) -> Self {
        self.doc.personas.push(persona);
        self
    }

    pub fn sub_persona(mut self, sub_persona: SubPersona) -> Self {
        self.doc.sub_personas.push(sub_persona);
        self
    }

    pub fn therapeutic_area(mut self, area: TherapeuticArea) -> Self {
        self.doc.therapeutic_areas.push(area);
        self
    }

    pub fn ai_model_type(mut self, model_type: AiModelType) -> Self {
        self.doc.ai_model_types.push(model_type);
        self
    }

    pub fn deployment_scenario(mut self, scenario: DeploymentScenario) -> Self {
        self.doc.deployment_scenarios.push(scenario);
        self
    }

    pub fn section(mut self, section: Section) -> Self {
        self.doc.sections.push(section);
        self
    }

    pub fn question(mut self, question: Question) -> Self {
        self.doc.questions.push(question);
        self
    }

    pub fn mapping(mut self, mapping: PersonaSectionMapping) -> Self {
        self.doc.mappings.push(mapping);
        self
    }

    /// Run every validation rule without building.
    #[must_use]
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let doc = &self.doc;
        let mut issues = Vec::new();

        let personas = index_ids("persona", doc.personas.iter().map(|p| &p.id), &mut issues);
        let sub_personas = index_ids(
            "sub-persona",
            doc.sub_personas.iter().map(|s| &s.id),
            &mut issues,
        );
        index_ids(
            "therapeutic area",
            doc.therapeutic_areas.iter().map(|t| &t.id),
            &mut issues,
        );
        index_ids(
            "AI model type",
            doc.ai_model_types.iter().map(|m| &m.id),
            &mut issues,
        );
        index_ids(
            "deployment scenario",
            doc.deployment_scenarios.iter().map(|d| &d.id),
            &mut issues,
        );
        let sections = index_ids("section", doc.sections.iter().map(|s| &s.id), &mut issues);
        index_ids("question", doc.questions.iter().map(|q| &q.id), &mut issues);

        let mut numbers: HashMap<u32, &str> = HashMap::new();
        for section in &doc.sections {
            if let Some(first) = numbers.insert(section.section_number, section.id.as_str()) {
                if first != section.id {
                    issues.push(CatalogIssue::DuplicateSectionNumber {
                        number: section.section_number,
                        first: first.to_string(),
                        second: section.id.clone(),
                    });
                }
            }
        }

        for sub in &doc.sub_personas {
            if !personas.contains(sub.parent_persona_id.as_str()) {
                issues.push(CatalogIssue::OrphanSubPersona {
                    sub_persona_id: sub.id.clone(),
                    persona_id: sub.parent_persona_id.clone(),
                });
            }
        }

        for question in &doc.questions {
            if !sections.contains(question.section_id.as_str()) {
                issues.push(CatalogIssue::OrphanQuestion {
                    question_id: question.id.clone(),
                    section_id: question.section_id.clone(),
                });
            }
            for relevant in &question.persona_relevant {
                if !sub_personas.contains(relevant.as_str()) {
                    issues.push(CatalogIssue::UnknownRelevantSubPersona {
                        question_id: question.id.clone(),
                        sub_persona_id: relevant.clone(),
                    });
                }
            }
            if let Some(reason) = scale_problem(question) {
                issues.push(CatalogIssue::InvalidScale {
                    question_id: question.id.clone(),
                    reason,
                });
            }
        }

        let parents: HashMap<&str, &str> = doc
            .sub_personas
            .iter()
            .map(|s| (s.id.as_str(), s.parent_persona_id.as_str()))
            .collect();
        let mut seen_keys = HashSet::new();
        for mapping in &doc.mappings {
            let dangling = |reason: String| CatalogIssue::DanglingMapping {
                persona_id: mapping.persona_id.clone(),
                sub_persona_id: mapping.sub_persona_id.clone(),
                section_id: mapping.section_id.clone(),
                reason,
            };

            if !personas.contains(mapping.persona_id.as_str()) {
                issues.push(dangling(format!("missing persona '{}'", mapping.persona_id)));
            }
            if !sections.contains(mapping.section_id.as_str()) {
                issues.push(dangling(format!("missing section '{}'", mapping.section_id)));
            }
            if let Some(sub) = mapping.sub_persona_id.as_deref() {
                match parents.get(sub) {
                    None => issues.push(dangling(format!("missing sub-persona '{sub}'"))),
                    Some(&parent) if parent != mapping.persona_id => issues.push(dangling(
                        format!("sub-persona '{sub}' owned by persona '{parent}'"),
                    )),
                    Some(_) => {}
                }
            }
            if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&mapping.priority_score) {
                issues.push(CatalogIssue::PriorityOutOfRange {
                    persona_id: mapping.persona_id.clone(),
                    section_id: mapping.section_id.clone(),
                    priority: mapping.priority_score,
                });
            }
            if !seen_keys.insert(mapping.key()) {
                issues.push(CatalogIssue::DuplicateMapping {
                    persona_id: mapping.persona_id.clone(),
                    sub_persona_id: mapping.sub_persona_id.clone(),
                    section_id: mapping.section_id.clone(),
                });
            }
        }

        issues
    }

    /// Validate and freeze the catalog.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let issues = self.validate();
        if !issues.is_empty() {
            return Err(CatalogError::Invalid { issues });
        }

        let CatalogDocument {
            personas,
            sub_personas,
            therapeutic_areas,
            ai_model_types,
            deployment_scenarios,
            mut sections,
            questions,
            mappings,
        } = self.doc;

        sections.sort_by_key(|s| s.section_number);

        let questions: IndexMap<String, Question> =
            questions.into_iter().map(|q| (q.id.clone(), q)).collect();
        let mut questions_by_section: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, question) in questions.values().enumerate() {
            questions_by_section
                .entry(question.section_id.clone())
                .or_default()
                .push(i);
        }

        let mut mappings_by_persona: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, mapping) in mappings.iter().enumerate() {
            mappings_by_persona
                .entry(mapping.persona_id.clone())
                .or_default()
                .push(i);
        }

        let mut catalog = Catalog {
            personas: keyed(personas, |p| &p.id),
            sub_personas: keyed(sub_personas, |s| &s.id),
            therapeutic_areas: keyed(therapeutic_areas, |t| &t.id),
            ai_model_types: keyed(ai_model_types, |m| &m.id),
            deployment_scenarios: keyed(deployment_scenarios, |d| &d.id),
            sections: keyed(sections, |s| &s.id),
            questions,
            mappings,
            questions_by_section,
            mappings_by_persona,
            fingerprint: 0,
        };

        let canonical = serde_json::to_vec(&catalog.to_document())?;
        catalog.fingerprint = xxh3_64(&canonical);

        tracing::debug!(
            sections = catalog.sections.len(),
            questions = catalog.questions.len(),
            fingerprint = %catalog.fingerprint_hex(),
            "Catalog built"
        );

        Ok(catalog)
    }
}

fn keyed<T>(items: Vec<T>, id: impl Fn(&T) -> &String) -> IndexMap<String, T> {
    items.into_iter().map(|item| (id(&item).clone(), item)).collect()
}

/// Collect ids of one table, reporting malformed and duplicate entries.
fn index_ids<'a>(
    table: &'static str,
    ids: impl Iterator<Item = &'a String>,
    issues: &mut Vec<CatalogIssue>,
) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for id in ids {
        if !KEBAB_ID.is_match(id) {
            issues.push(CatalogIssue::MalformedId {
                table,
                id: id.clone(),
            });
        }
        if !seen.insert(id.as_str()) {
            issues.push(CatalogIssue::DuplicateId {
                table,
                id: id.clone(),
            });
        }
    }
    seen
}

fn scale_problem(question: &Question) -> Option<String> {
    match question.question_type {
        QuestionType::Scale1To5 => {
            let scale = question.scale_configuration.unwrap_or_default();
            if scale.min >= scale.max {
                return Some(format!("min {} must be below max {}", scale.min, scale.max));
            }
            if scale.step == 0 {
                return Some("step must be positive".to_string());
            }
            question.scale_labels.as_ref().and_then(|labels| {
                labels
                    .keys()
                    .find(|&&k| k < scale.min || k > scale.max)
                    .map(|k| format!("label key {k} outside {}..={}", scale.min, scale.max))
            })
        }
        QuestionType::Boolean | QuestionType::FreeText => {
            if question.scale_labels.is_some() || question.scale_configuration.is_some() {
                Some(format!(
                    "{} question carries scale metadata",
                    question.question_type.name()
                ))
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExpertiseLevel, ScaleConfiguration};
    use std::collections::BTreeMap;

    fn base() -> CatalogBuilder {
        CatalogBuilder::new()
            .persona(Persona::new("quality", "Quality"))
            .persona(Persona::new("legal", "Legal"))
            .sub_persona(SubPersona::new(
                "qa-lead",
                "quality",
                "QA Lead",
                ExpertiseLevel::Expert,
            ))
            .section(Section::new("governance", 1, "Governance"))
    }

    #[test]
    fn test_valid_catalog_builds() {
        let catalog = base()
            .mapping(PersonaSectionMapping::new("quality", Some("qa-lead"), "governance", 3))
            .build()
            .expect("catalog should build");
        assert_eq!(catalog.stats().mappings, 1);
    }

    #[test]
    fn test_duplicate_section_number_reported() {
        let issues = base().section(Section::new("privacy", 1, "Privacy")).validate();
        assert!(issues.iter().any(|i| matches!(
            i,
            CatalogIssue::DuplicateSectionNumber { number: 1, .. }
        )));
    }

    #[test]
    fn test_orphan_question_and_bad_id_reported_together() {
        let issues = base()
            .question(Question::new(
                "Bad_Id",
                "missing",
                "text",
                QuestionType::Boolean,
                1,
                "general",
            ))
            .validate();
        assert_eq!(issues.len(), 2, "{issues:?}");
        assert!(issues
            .iter()
            .any(|i| matches!(i, CatalogIssue::MalformedId { .. })));
        assert!(issues
            .iter()
            .any(|i| matches!(i, CatalogIssue::OrphanQuestion { .. })));
    }

    #[test]
    fn test_mapping_rules() {
        let issues = base()
            .mapping(PersonaSectionMapping::new("legal", Some("qa-lead"), "governance", 2))
            .mapping(PersonaSectionMapping::new("quality", None, "governance", 4))
            .mapping(PersonaSectionMapping::new("quality", None, "governance", 2))
            .validate();

        assert!(issues.iter().any(|i| matches!(
            i,
            CatalogIssue::DanglingMapping { reason, .. } if reason.contains("owned by persona 'quality'")
        )));
        assert!(issues
            .iter()
            .any(|i| matches!(i, CatalogIssue::PriorityOutOfRange { priority: 4, .. })));
        assert!(issues
            .iter()
            .any(|i| matches!(i, CatalogIssue::DuplicateMapping { .. })));
    }

    #[test]
    fn test_scale_metadata_rules() {
        let mut scale = Question::new(
            "maturity",
            "governance",
            "Rate maturity",
            QuestionType::Scale1To5,
            5,
            "governance",
        );
        scale.scale_configuration = Some(ScaleConfiguration {
            min: 1,
            max: 5,
            step: 1,
        });
        scale.scale_labels = Some(BTreeMap::from([(1, "Ad hoc".to_string()), (6, "Beyond".to_string())]));

        let mut boolean = Question::new(
            "policy",
            "governance",
            "Policy exists?",
            QuestionType::Boolean,
            5,
            "governance",
        );
        boolean.scale_configuration = Some(ScaleConfiguration::default());

        let issues = base().question(scale).question(boolean).validate();
        assert_eq!(
            issues
                .iter()
                .filter(|i| matches!(i, CatalogIssue::InvalidScale { .. }))
                .count(),
            2
        );
    }

    #[test]
    fn test_build_fails_with_all_issues() {
        let err = base()
            .persona(Persona::new("quality", "Duplicate"))
            .sub_persona(SubPersona::new("orphan", "ghost", "Orphan", ExpertiseLevel::Basic))
            .build()
            .expect_err("catalog should be rejected");
        assert_eq!(err.issues().len(), 2);
    }
}

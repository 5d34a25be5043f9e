//! Read-only reference catalogs.
//!
//! A [`Catalog`] is an immutable, validated snapshot of every reference table
//! the engine reads: personas, sub-personas, therapeutic areas, AI model
//! types, deployment scenarios, sections, the question bank and the
//! persona-section mapping table. Catalogs are only ever produced by
//! [`CatalogBuilder`], which checks the foreign keys and uniqueness rules at
//! the boundary so the engine never needs defensive lookups.
//!
//! The engine reads catalogs through the [`CatalogStore`] trait. Refreshes go
//! through [`CatalogHandle::publish`], which swaps in a fully built snapshot.
//!
//! ```no_run
//! use pharma_readiness::catalog::{self, CatalogStore};
//!
//! let catalog = catalog::builtin().expect("built-in catalog is valid");
//! let persona = catalog.get_persona("data-science");
//! println!("{} sections", catalog.list_sections().len());
//! # let _ = persona;
//! ```

mod builder;
mod document;
mod handle;
pub mod seed;

pub use builder::CatalogBuilder;
pub use document::{load_catalog, parse_catalog_str, CatalogDocument, DocumentFormat};
pub use handle::CatalogHandle;
pub use seed::builtin;

use crate::model::{
    AiModelType, DeploymentScenario, Persona, PersonaSectionMapping, Question, Section, SubPersona,
    TherapeuticArea,
};
use indexmap::IndexMap;
use std::collections::HashMap;

/// A section together with one mapping row that grants access to it.
#[derive(Debug, Clone, Copy)]
pub struct SectionAssignment<'a> {
    pub section: &'a Section,
    pub mapping: &'a PersonaSectionMapping,
}

/// Read API over persisted catalog storage.
///
/// Every lookup returns the entity or `None` ("not found"); none of them
/// perform I/O.
pub trait CatalogStore {
    fn get_persona(&self, id: &str) -> Option<&Persona>;

    fn get_sub_persona(&self, id: &str) -> Option<&SubPersona>;

    /// Mapping rows that apply to the persona.
    ///
    /// With a sub-persona, rows for that sub-persona and persona-wide rows
    /// apply. Without one, every row of the persona applies. A section may
    /// appear more than once; picking the effective row is up to the caller.
    fn list_sections_for_persona(
        &self,
        persona_id: &str,
        sub_persona_id: Option<&str>,
    ) -> Vec<SectionAssignment<'_>>;

    /// Questions of a section in catalog order.
    fn get_questions_for_section(&self, section_id: &str) -> Vec<&Question>;

    fn get_therapeutic_area(&self, id: &str) -> Option<&TherapeuticArea>;

    fn get_ai_model_type(&self, id: &str) -> Option<&AiModelType>;

    fn get_deployment_scenario(&self, id: &str) -> Option<&DeploymentScenario>;

    /// The full section catalog ordered by section number.
    fn list_sections(&self) -> Vec<&Section>;

    /// Sub-personas owned by a persona.
    fn sub_personas_of(&self, persona_id: &str) -> Vec<&SubPersona>;

    fn persona_ids(&self) -> Vec<&str>;

    fn therapeutic_area_ids(&self) -> Vec<&str>;

    /// Identifier of the snapshot being read, when the store has one.
    fn snapshot_id(&self) -> Option<String> {
        None
    }
}

/// Immutable catalog snapshot.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) personas: IndexMap<String, Persona>,
    pub(crate) sub_personas: IndexMap<String, SubPersona>,
    pub(crate) therapeutic_areas: IndexMap<String, TherapeuticArea>,
    pub(crate) ai_model_types: IndexMap<String, AiModelType>,
    pub(crate) deployment_scenarios: IndexMap<String, DeploymentScenario>,
    /// Ordered by section number
    pub(crate) sections: IndexMap<String, Section>,
    pub(crate) questions: IndexMap<String, Question>,
    pub(crate) mappings: Vec<PersonaSectionMapping>,
    pub(crate) questions_by_section: HashMap<String, Vec<usize>>,
    pub(crate) mappings_by_persona: HashMap<String, Vec<usize>>,
    pub(crate) fingerprint: u64,
}

impl Catalog {
    /// Stable hash of the catalog contents.
    #[must_use]
    pub const fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Fingerprint rendered as fixed-width hex.
    #[must_use]
    pub fn fingerprint_hex(&self) -> String {
        format!("{:016x}", self.fingerprint)
    }

    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            personas: self.personas.len(),
            sub_personas: self.sub_personas.len(),
            therapeutic_areas: self.therapeutic_areas.len(),
            ai_model_types: self.ai_model_types.len(),
            deployment_scenarios: self.deployment_scenarios.len(),
            sections: self.sections.len(),
            critical_sections: self
                .sections
                .values()
                .filter(|s| s.is_critical_blocker)
                .count(),
            questions: self.questions.len(),
            blocker_questions: self.questions.values().filter(|q| q.is_blocker).count(),
            mappings: self.mappings.len(),
        }
    }

    pub fn personas(&self) -> impl Iterator<Item = &Persona> {
        self.personas.values()
    }

    pub fn ai_model_types(&self) -> impl Iterator<Item = &AiModelType> {
        self.ai_model_types.values()
    }

    pub fn deployment_scenarios(&self) -> impl Iterator<Item = &DeploymentScenario> {
        self.deployment_scenarios.values()
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.values()
    }

    #[must_use]
    pub fn get_section(&self, id: &str) -> Option<&Section> {
        self.sections.get(id)
    }

    #[must_use]
    pub fn get_question(&self, id: &str) -> Option<&Question> {
        self.questions.get(id)
    }

    /// Rebuild the serializable document this catalog was built from.
    #[must_use]
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            personas: self.personas.values().cloned().collect(),
            sub_personas: self.sub_personas.values().cloned().collect(),
            therapeutic_areas: self.therapeutic_areas.values().cloned().collect(),
            ai_model_types: self.ai_model_types.values().cloned().collect(),
            deployment_scenarios: self.deployment_scenarios.values().cloned().collect(),
            sections: self.sections.values().cloned().collect(),
            questions: self.questions.values().cloned().collect(),
            mappings: self.mappings.clone(),
        }
    }
}

impl CatalogStore for Catalog {
    fn get_persona(&self, id: &str) -> Option<&Persona> {
        self.personas.get(id)
    }

    fn get_sub_persona(&self, id: &str) -> Option<&SubPersona> {
        self.sub_personas.get(id)
    }

    fn list_sections_for_persona(
        &self,
        persona_id: &str,
        sub_persona_id: Option<&str>,
    ) -> Vec<SectionAssignment<'_>> {
        let Some(rows) = self.mappings_by_persona.get(persona_id) else {
            return Vec::new();
        };

        rows.iter()
            .map(|&i| &self.mappings[i])
            .filter(|row| match (sub_persona_id, row.sub_persona_id.as_deref()) {
                (None, _) | (Some(_), None) => true,
                (Some(wanted), Some(row_sub)) => wanted == row_sub,
            })
            .filter_map(|mapping| {
                self.sections
                    .get(&mapping.section_id)
                    .map(|section| SectionAssignment { section, mapping })
            })
            .collect()
    }

    fn get_questions_for_section(&self, section_id: &str) -> Vec<&Question> {
        self.questions_by_section
            .get(section_id)
            .map(|indices| {
                indices
                    .iter()
                    .filter_map(|&i| self.questions.get_index(i).map(|(_, q)| q))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn get_therapeutic_area(&self, id: &str) -> Option<&TherapeuticArea> {
        self.therapeutic_areas.get(id)
    }

    fn get_ai_model_type(&self, id: &str) -> Option<&AiModelType> {
        self.ai_model_types.get(id)
    }

    fn get_deployment_scenario(&self, id: &str) -> Option<&DeploymentScenario> {
        self.deployment_scenarios.get(id)
    }

    fn list_sections(&self) -> Vec<&Section> {
        self.sections.values().collect()
    }

    fn sub_personas_of(&self, persona_id: &str) -> Vec<&SubPersona> {
        self.sub_personas
            .values()
            .filter(|sp| sp.parent_persona_id == persona_id)
            .collect()
    }

    fn persona_ids(&self) -> Vec<&str> {
        self.personas.keys().map(String::as_str).collect()
    }

    fn therapeutic_area_ids(&self) -> Vec<&str> {
        self.therapeutic_areas.keys().map(String::as_str).collect()
    }

    fn snapshot_id(&self) -> Option<String> {
        Some(self.fingerprint_hex())
    }
}

/// Table sizes of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub personas: usize,
    pub sub_personas: usize,
    pub therapeutic_areas: usize,
    pub ai_model_types: usize,
    pub deployment_scenarios: usize,
    pub sections: usize,
    pub critical_sections: usize,
    pub questions: usize,
    pub blocker_questions: usize,
    pub mappings: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionType;

    fn small_catalog() -> Catalog {
        CatalogBuilder::new()
            .persona(Persona::new("quality", "Quality"))
            .sub_persona(crate::model::SubPersona::new(
                "qa-lead",
                "quality",
                "QA Lead",
                crate::model::ExpertiseLevel::Expert,
            ))
            .section(Section::new("second", 2, "Second"))
            .section(Section::new("first", 1, "First"))
            .question(Question::new(
                "q-2",
                "first",
                "Second question",
                QuestionType::Boolean,
                5,
                "general",
            ))
            .question(Question::new(
                "q-1",
                "first",
                "First question",
                QuestionType::Boolean,
                5,
                "general",
            ))
            .mapping(PersonaSectionMapping::new("quality", None, "first", 2))
            .mapping(PersonaSectionMapping::new(
                "quality",
                Some("qa-lead"),
                "second",
                3,
            ))
            .build()
            .expect("small catalog is valid")
    }

    #[test]
    fn test_sections_sorted_by_number() {
        let catalog = small_catalog();
        let ids: Vec<&str> = catalog.list_sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn test_questions_keep_declaration_order() {
        let catalog = small_catalog();
        let ids: Vec<&str> = catalog
            .get_questions_for_section("first")
            .iter()
            .map(|q| q.id.as_str())
            .collect();
        assert_eq!(ids, vec!["q-2", "q-1"]);
        assert!(catalog.get_questions_for_section("second").is_empty());
    }

    #[test]
    fn test_persona_wide_rows_apply_to_every_sub_persona() {
        let catalog = small_catalog();
        let with_sub = catalog.list_sections_for_persona("quality", Some("qa-lead"));
        assert_eq!(with_sub.len(), 2);

        let other_sub = catalog.list_sections_for_persona("quality", Some("someone-else"));
        assert_eq!(other_sub.len(), 1);
        assert_eq!(other_sub[0].section.id, "first");

        let without_sub = catalog.list_sections_for_persona("quality", None);
        assert_eq!(without_sub.len(), 2);
    }

    #[test]
    fn test_document_roundtrip_preserves_fingerprint() {
        let catalog = small_catalog();
        let rebuilt = CatalogBuilder::from_document(catalog.to_document())
            .build()
            .expect("rebuilt catalog is valid");
        assert_eq!(catalog.fingerprint(), rebuilt.fingerprint());
        assert_eq!(catalog.fingerprint_hex().len(), 16);
    }

    #[test]
    fn test_stats() {
        let stats = small_catalog().stats();
        assert_eq!(stats.sections, 2);
        assert_eq!(stats.questions, 2);
        assert_eq!(stats.mappings, 2);
        assert_eq!(stats.critical_sections, 0);
    }
}

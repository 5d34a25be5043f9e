//! Lookup of the optional reference selections of a configuration.

use crate::catalog::CatalogStore;
use crate::error::{EngineError, ReferenceKind};
use crate::model::{
    AiModelType, AssessmentConfiguration, DeploymentScenario, RequirementSource, TherapeuticArea,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A selected id that was not found in the catalog and was left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedReference {
    pub kind: ReferenceKind,
    pub id: String,
}

impl SkippedReference {
    /// The recovered failure as an error value, for logs and callers that
    /// want to surface it.
    #[must_use]
    pub fn to_error(&self) -> EngineError {
        EngineError::UnknownCatalogReference {
            kind: self.kind,
            id: self.id.clone(),
        }
    }
}

/// Reference rows a configuration points at, resolved against one catalog.
///
/// Unknown ids are collected in `skipped` rather than failing; whether an
/// unknown therapeutic area is fatal is decided by the resolver.
#[derive(Debug)]
pub(crate) struct Selection<'a> {
    pub therapeutic_areas: Vec<&'a TherapeuticArea>,
    pub model_types: Vec<&'a AiModelType>,
    pub deployments: Vec<&'a DeploymentScenario>,
    pub skipped: Vec<SkippedReference>,
}

impl<'a> Selection<'a> {
    pub fn gather<S: CatalogStore + ?Sized>(store: &'a S, config: &AssessmentConfiguration) -> Self {
        let mut skipped = Vec::new();

        let therapeutic_areas = lookup_all(
            config.therapeutic_area_ids(),
            |id| store.get_therapeutic_area(id),
            ReferenceKind::TherapeuticArea,
            &mut skipped,
        );
        let model_types = lookup_all(
            config.ai_model_type_ids.iter().map(String::as_str),
            |id| store.get_ai_model_type(id),
            ReferenceKind::AiModelType,
            &mut skipped,
        );
        let deployments = lookup_all(
            config.deployment_scenario_ids.iter().map(String::as_str),
            |id| store.get_deployment_scenario(id),
            ReferenceKind::DeploymentScenario,
            &mut skipped,
        );

        Self {
            therapeutic_areas,
            model_types,
            deployments,
            skipped,
        }
    }

    pub fn therapy_tags(&self) -> BTreeSet<&'a String> {
        union_tags(&self.therapeutic_areas)
    }

    pub fn model_tags(&self) -> BTreeSet<&'a String> {
        union_tags(&self.model_types)
    }

    pub fn deployment_tags(&self) -> BTreeSet<&'a String> {
        union_tags(&self.deployments)
    }
}

fn lookup_all<'a, 'i, T, I, F>(
    ids: I,
    lookup: F,
    kind: ReferenceKind,
    skipped: &mut Vec<SkippedReference>,
) -> Vec<&'a T>
where
    I: Iterator<Item = &'i str>,
    F: Fn(&str) -> Option<&'a T>,
{
    let mut found = Vec::new();
    for id in ids {
        match lookup(id) {
            Some(row) => found.push(row),
            None => skipped.push(SkippedReference {
                kind,
                id: id.to_string(),
            }),
        }
    }
    found
}

fn union_tags<'a, T: RequirementSource>(rows: &[&'a T]) -> BTreeSet<&'a String> {
    rows.iter()
        .flat_map(|row| row.requirement_tags().iter())
        .collect()
}

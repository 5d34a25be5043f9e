//! Request-scoped assessment configuration.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The selections a user finalizes before previewing an assessment.
///
/// Any change to a selection produces a new configuration; nothing here is
/// persisted by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentConfiguration {
    pub persona_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_persona_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub therapeutic_area_id: Option<String>,
    /// Extra therapeutic areas; the current UI selects only one.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub additional_therapeutic_area_ids: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(default)]
    pub ai_model_type_ids: BTreeSet<String>,
    #[serde(default)]
    pub deployment_scenario_ids: BTreeSet<String>,
}

impl AssessmentConfiguration {
    pub fn builder(persona_id: impl Into<String>) -> AssessmentConfigurationBuilder {
        AssessmentConfigurationBuilder {
            config: Self {
                persona_id: persona_id.into(),
                ..Self::default()
            },
        }
    }

    /// Every referenced therapeutic area, primary first.
    pub fn therapeutic_area_ids(&self) -> impl Iterator<Item = &str> {
        let primary = self.primary_therapeutic_area();
        primary.into_iter().chain(
            self.additional_therapeutic_area_ids
                .iter()
                .map(String::as_str)
                .filter(move |id| Some(*id) != primary),
        )
    }

    /// The primary therapeutic area, treating blank ids as absent.
    #[must_use]
    pub fn primary_therapeutic_area(&self) -> Option<&str> {
        self.therapeutic_area_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// The sub-persona, treating blank ids as absent.
    #[must_use]
    pub fn sub_persona(&self) -> Option<&str> {
        self.sub_persona_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// Fluent builder for [`AssessmentConfiguration`].
#[derive(Debug)]
#[must_use]
pub struct AssessmentConfigurationBuilder {
    config: AssessmentConfiguration,
}

impl AssessmentConfigurationBuilder {
    pub fn sub_persona(mut self, id: impl Into<String>) -> Self {
        self.config.sub_persona_id = Some(id.into());
        self
    }

    pub fn therapeutic_area(mut self, id: impl Into<String>) -> Self {
        self.config.therapeutic_area_id = Some(id.into());
        self
    }

    pub fn additional_therapeutic_area(mut self, id: impl Into<String>) -> Self {
        self.config.additional_therapeutic_area_ids.insert(id.into());
        self
    }

    pub fn company(mut self, id: impl Into<String>) -> Self {
        self.config.company_id = Some(id.into());
        self
    }

    pub fn model_type(mut self, id: impl Into<String>) -> Self {
        self.config.ai_model_type_ids.insert(id.into());
        self
    }

    pub fn model_types<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .ai_model_type_ids
            .extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn deployment(mut self, id: impl Into<String>) -> Self {
        self.config.deployment_scenario_ids.insert(id.into());
        self
    }

    pub fn deployments<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .deployment_scenario_ids
            .extend(ids.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn build(self) -> AssessmentConfiguration {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_therapeutic_areas_primary_first_without_duplicates() {
        let config = AssessmentConfiguration::builder("data-science")
            .therapeutic_area("oncology")
            .additional_therapeutic_area("cardiology")
            .additional_therapeutic_area("oncology")
            .build();
        let ids: Vec<&str> = config.therapeutic_area_ids().collect();
        assert_eq!(ids, vec!["oncology", "cardiology"]);
    }

    #[test]
    fn test_blank_ids_are_absent() {
        let config = AssessmentConfiguration {
            persona_id: "admin".to_string(),
            sub_persona_id: Some("  ".to_string()),
            therapeutic_area_id: Some(String::new()),
            ..AssessmentConfiguration::default()
        };
        assert_eq!(config.primary_therapeutic_area(), None);
        assert_eq!(config.sub_persona(), None);
        assert_eq!(config.therapeutic_area_ids().count(), 0);
    }

    #[test]
    fn test_duplicate_model_selections_collapse() {
        let config = AssessmentConfiguration::builder("it-technology")
            .model_types(["generative-ai", "generative-ai", "agentic-ai"])
            .build();
        assert_eq!(config.ai_model_type_ids.len(), 2);
    }
}

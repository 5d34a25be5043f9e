//! Reference tables that drive the advisory complexity score.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Complexity tier shared by therapeutic areas, model types and deployment scenarios.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum ComplexityTier {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl ComplexityTier {
    /// Map a total complexity score onto the advisory badge.
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        match score {
            0..=24 => Self::Low,
            25..=49 => Self::Medium,
            50..=74 => Self::High,
            _ => Self::Critical,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A therapeutic area; `overlay_points` feed the therapy axis of the complexity score.
///
/// `requirement_tags` is the requirement set that therapy-specific questions
/// are matched against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TherapeuticArea {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub complexity: ComplexityTier,
    #[serde(default)]
    pub overlay_points: u32,
    #[serde(default)]
    pub requirement_tags: BTreeSet<String>,
}

/// A family of AI models (generative, agentic, predictive, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiModelType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub complexity: ComplexityTier,
    #[serde(default)]
    pub complexity_points: u32,
    #[serde(default)]
    pub requirement_tags: BTreeSet<String>,
}

/// Where and how a model is put to work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentScenario {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub complexity: ComplexityTier,
    #[serde(default)]
    pub complexity_points: u32,
    #[serde(default)]
    pub requirement_tags: BTreeSet<String>,
}

/// Common view over the three reference tables used for tag matching.
pub trait RequirementSource {
    fn id(&self) -> &str;
    fn requirement_tags(&self) -> &BTreeSet<String>;
}

macro_rules! impl_requirement_source {
    ($($ty:ty),+) => {
        $(
            impl RequirementSource for $ty {
                fn id(&self) -> &str {
                    &self.id
                }

                fn requirement_tags(&self) -> &BTreeSet<String> {
                    &self.requirement_tags
                }
            }
        )+
    };
}

impl_requirement_source!(TherapeuticArea, AiModelType, DeploymentScenario);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_from_score_boundaries() {
        assert_eq!(ComplexityTier::from_score(0), ComplexityTier::Low);
        assert_eq!(ComplexityTier::from_score(24), ComplexityTier::Low);
        assert_eq!(ComplexityTier::from_score(25), ComplexityTier::Medium);
        assert_eq!(ComplexityTier::from_score(50), ComplexityTier::High);
        assert_eq!(ComplexityTier::from_score(75), ComplexityTier::Critical);
        assert_eq!(ComplexityTier::from_score(400), ComplexityTier::Critical);
    }
}

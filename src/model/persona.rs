//! Personas and sub-personas.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A role-based view over the assessment.
///
/// Admin personas see every section and question regardless of mappings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl Persona {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            is_admin: false,
        }
    }

    #[must_use]
    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Depth of expertise a sub-persona brings to the assessment.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ExpertiseLevel {
    Basic,
    #[default]
    Intermediate,
    Expert,
}

impl ExpertiseLevel {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Expert => "expert",
        }
    }
}

/// A narrower role inside a persona. `parent_persona_id` is a back-reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubPersona {
    pub id: String,
    pub parent_persona_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub expertise_level: ExpertiseLevel,
}

impl SubPersona {
    pub fn new(
        id: impl Into<String>,
        parent_persona_id: impl Into<String>,
        name: impl Into<String>,
        expertise_level: ExpertiseLevel,
    ) -> Self {
        Self {
            id: id.into(),
            parent_persona_id: parent_persona_id.into(),
            name: name.into(),
            description: String::new(),
            expertise_level,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

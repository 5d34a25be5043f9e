//! Persona to section assignments.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    #[default]
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponsibilityType {
    #[default]
    Owner,
    Approver,
    Reviewer,
}

impl AccessLevel {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

impl ResponsibilityType {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Approver => "approver",
            Self::Reviewer => "reviewer",
        }
    }
}

/// Lowest and highest accepted `priority_score`.
pub const MIN_PRIORITY: u8 = 1;
pub const MAX_PRIORITY: u8 = 3;

/// A (persona, sub-persona, section) assignment row.
///
/// A row without `sub_persona_id` applies to the whole persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonaSectionMapping {
    pub persona_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_persona_id: Option<String>,
    pub section_id: String,
    #[serde(default)]
    pub access_level: AccessLevel,
    #[serde(default)]
    pub responsibility_type: ResponsibilityType,
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub can_approve: bool,
    #[serde(default)]
    pub can_review: bool,
    #[serde(default)]
    pub is_required: bool,
    pub priority_score: u8,
}

impl PersonaSectionMapping {
    pub fn new(
        persona_id: impl Into<String>,
        sub_persona_id: Option<&str>,
        section_id: impl Into<String>,
        priority_score: u8,
    ) -> Self {
        Self {
            persona_id: persona_id.into(),
            sub_persona_id: sub_persona_id.map(str::to_string),
            section_id: section_id.into(),
            access_level: AccessLevel::Primary,
            responsibility_type: ResponsibilityType::Owner,
            can_edit: true,
            can_approve: false,
            can_review: true,
            is_required: true,
            priority_score,
        }
    }

    /// Uniqueness key of this row.
    #[must_use]
    pub fn key(&self) -> (&str, Option<&str>, &str) {
        (
            self.persona_id.as_str(),
            self.sub_persona_id.as_deref(),
            self.section_id.as_str(),
        )
    }

    #[must_use]
    pub fn with_access(mut self, access: AccessLevel, responsibility: ResponsibilityType) -> Self {
        self.access_level = access;
        self.responsibility_type = responsibility;
        self.can_approve = matches!(responsibility, ResponsibilityType::Approver);
        self.can_edit = matches!(responsibility, ResponsibilityType::Owner);
        self
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.is_required = false;
        self
    }
}

/// The mapping attributes the resolver settled on for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveMapping {
    pub access_level: AccessLevel,
    pub responsibility_type: ResponsibilityType,
    pub can_edit: bool,
    pub can_approve: bool,
    pub can_review: bool,
    pub is_required: bool,
    pub priority_score: u8,
}

impl EffectiveMapping {
    /// Implicit mapping granted to admin personas for every section.
    #[must_use]
    pub const fn admin() -> Self {
        Self {
            access_level: AccessLevel::Primary,
            responsibility_type: ResponsibilityType::Owner,
            can_edit: true,
            can_approve: true,
            can_review: true,
            is_required: true,
            priority_score: MAX_PRIORITY,
        }
    }
}

impl From<&PersonaSectionMapping> for EffectiveMapping {
    fn from(row: &PersonaSectionMapping) -> Self {
        Self {
            access_level: row.access_level,
            responsibility_type: row.responsibility_type,
            can_edit: row.can_edit,
            can_approve: row.can_approve,
            can_review: row.can_review,
            is_required: row.is_required,
            priority_score: row.priority_score,
        }
    }
}

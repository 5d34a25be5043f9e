//! Sections and the question bank.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A numbered group of questions covering one compliance topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub section_number: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub base_points: u32,
    /// The whole section is mandatory for production readiness.
    #[serde(default)]
    pub is_critical_blocker: bool,
}

impl Section {
    pub fn new(id: impl Into<String>, section_number: u32, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            section_number,
            title: title.into(),
            description: String::new(),
            base_points: 0,
            is_critical_blocker: false,
        }
    }

    #[must_use]
    pub fn with_base_points(mut self, points: u32) -> Self {
        self.base_points = points;
        self
    }

    #[must_use]
    pub fn critical(mut self) -> Self {
        self.is_critical_blocker = true;
        self
    }
}

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Boolean,
    #[serde(rename = "scale_1_5")]
    Scale1To5,
    FreeText,
}

impl QuestionType {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Scale1To5 => "scale_1_5",
            Self::FreeText => "free_text",
        }
    }
}

/// Bounds for `scale_1_5` questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScaleConfiguration {
    pub min: u8,
    pub max: u8,
    pub step: u8,
}

impl Default for ScaleConfiguration {
    fn default() -> Self {
        Self {
            min: 1,
            max: 5,
            step: 1,
        }
    }
}

impl ScaleConfiguration {
    /// Whether `value` is reachable on this scale.
    #[must_use]
    pub fn accepts(&self, value: u8) -> bool {
        value >= self.min
            && value <= self.max
            && self.step > 0
            && (value - self.min) % self.step == 0
    }

    /// Linear position of `value` between `min` (0.0) and `max` (1.0).
    #[must_use]
    pub fn fraction(&self, value: u8) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        let clamped = value.clamp(self.min, self.max);
        f64::from(clamped - self.min) / f64::from(self.max - self.min)
    }
}

/// One entry of the question bank.
///
/// The `*_specific` flags and `persona_relevant` are selection filters applied
/// by the eligibility resolver; `tags` plus `category` form the key set that
/// specific questions are matched against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub section_id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub points: u32,
    #[serde(default)]
    pub is_blocker: bool,
    pub category: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub evidence_required: Vec<String>,
    #[serde(default)]
    pub responsible_role: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_labels: Option<BTreeMap<u8, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_configuration: Option<ScaleConfiguration>,
    #[serde(default)]
    pub therapy_specific: bool,
    #[serde(default)]
    pub ai_model_type_specific: bool,
    #[serde(default)]
    pub deployment_scenario_specific: bool,
    #[serde(default)]
    pub persona_relevant: BTreeSet<String>,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        section_id: impl Into<String>,
        text: impl Into<String>,
        question_type: QuestionType,
        points: u32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            section_id: section_id.into(),
            text: text.into(),
            question_type,
            points,
            is_blocker: false,
            category: category.into(),
            tags: BTreeSet::new(),
            evidence_required: Vec::new(),
            responsible_role: Vec::new(),
            scale_labels: None,
            scale_configuration: None,
            therapy_specific: false,
            ai_model_type_specific: false,
            deployment_scenario_specific: false,
            persona_relevant: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn blocker(mut self) -> Self {
        self.is_blocker = true;
        self
    }

    #[must_use]
    pub fn tagged<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn evidence<I, S>(mut self, evidence: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.evidence_required
            .extend(evidence.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.responsible_role.extend(roles.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn relevant_to<I, S>(mut self, sub_personas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.persona_relevant
            .extend(sub_personas.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn therapy_specific(mut self) -> Self {
        self.therapy_specific = true;
        self
    }

    #[must_use]
    pub fn model_specific(mut self) -> Self {
        self.ai_model_type_specific = true;
        self
    }

    #[must_use]
    pub fn deployment_specific(mut self) -> Self {
        self.deployment_scenario_specific = true;
        self
    }

    #[must_use]
    pub fn with_scale_labels(mut self, labels: BTreeMap<u8, String>) -> Self {
        self.scale_labels = Some(labels);
        self
    }

    /// The effective scale for `scale_1_5` questions.
    #[must_use]
    pub fn scale(&self) -> Option<ScaleConfiguration> {
        match self.question_type {
            QuestionType::Scale1To5 => Some(self.scale_configuration.unwrap_or_default()),
            QuestionType::Boolean | QuestionType::FreeText => None,
        }
    }

    /// Whether this question matches any of the given requirement tags.
    #[must_use]
    pub fn matches_any<'a, I>(&self, requirement_tags: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        requirement_tags
            .into_iter()
            .any(|tag| tag == &self.category || self.tags.contains(tag))
    }

    /// Whether this question is filtered by any selection criterion.
    #[must_use]
    pub fn is_conditional(&self) -> bool {
        self.therapy_specific
            || self.ai_model_type_specific
            || self.deployment_scenario_specific
            || !self.persona_relevant.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_accepts_steps() {
        let scale = ScaleConfiguration {
            min: 1,
            max: 5,
            step: 2,
        };
        assert!(scale.accepts(1));
        assert!(scale.accepts(3));
        assert!(!scale.accepts(2));
        assert!(!scale.accepts(6));
    }

    #[test]
    fn test_scale_fraction() {
        let scale = ScaleConfiguration::default();
        assert!((scale.fraction(1) - 0.0).abs() < f64::EPSILON);
        assert!((scale.fraction(3) - 0.5).abs() < f64::EPSILON);
        assert!((scale.fraction(5) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_question_type_wire_names() {
        let json = serde_json::to_string(&QuestionType::Scale1To5).expect("serialize");
        assert_eq!(json, "\"scale_1_5\"");
        let parsed: QuestionType = serde_json::from_str("\"free_text\"").expect("deserialize");
        assert_eq!(parsed, QuestionType::FreeText);
    }

    #[test]
    fn test_matches_category_or_tag() {
        let mut q = Question::new("q", "s", "text", QuestionType::Boolean, 5, "oncology");
        q.tags.insert("biomarker".to_string());
        let oncology = ["oncology".to_string()];
        let biomarker = ["biomarker".to_string()];
        let cardio = ["cardiology".to_string()];
        assert!(q.matches_any(&oncology));
        assert!(q.matches_any(&biomarker));
        assert!(!q.matches_any(&cardio));
    }

    #[test]
    fn test_scale_defaults_for_scale_questions() {
        let q = Question::new("q", "s", "text", QuestionType::Scale1To5, 5, "general");
        assert_eq!(q.scale(), Some(ScaleConfiguration::default()));
        let b = Question::new("b", "s", "text", QuestionType::Boolean, 5, "general");
        assert_eq!(b.scale(), None);
    }
}

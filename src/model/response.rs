//! Answers captured while an assessment is in progress.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single answer. The variant must agree with the question's type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Answer {
    Boolean(bool),
    Scale(u8),
    Text(String),
}

impl Answer {
    /// Whether the answer carries any content at all.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        match self {
            Self::Boolean(_) | Self::Scale(_) => true,
            Self::Text(text) => !text.trim().is_empty(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Scale(_) => "scale",
            Self::Text(_) => "text",
        }
    }
}

/// Answers keyed by question id, nested under an `answers` key.
///
/// Any other top-level key is rejected, so a bare map of answers fails to
/// load instead of reading as an empty response set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssessmentResponses {
    #[serde(default)]
    pub answers: BTreeMap<String, Answer>,
}

impl AssessmentResponses {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, question_id: impl Into<String>, answer: Answer) -> Self {
        self.answers.insert(question_id.into(), answer);
        self
    }

    pub fn insert(&mut self, question_id: impl Into<String>, answer: Answer) {
        self.answers.insert(question_id.into(), answer);
    }

    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

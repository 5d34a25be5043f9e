//! Production-readiness verdict over a preview and its answers.
//!
//! An assessment is production ready only when both conditions hold:
//!
//! 1. every blocker question in the preview has a passing answer, which
//!    includes all blocker questions of critical sections;
//! 2. answered points reach the completion threshold of total points.
//!
//! Each failing condition is reported; there is no partial pass.

use super::preview::AssessmentPreview;
use crate::error::{EngineError, Result};
use crate::model::{Answer, AssessmentResponses, Question, QuestionType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default share of total points that must be answered.
pub const DEFAULT_COMPLETION_THRESHOLD: f64 = 0.85;

/// Default lowest scale value that counts as passing.
pub const DEFAULT_SCALE_PASS_THRESHOLD: u8 = 4;

/// Thresholds applied by [`evaluate_readiness`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessSettings {
    pub completion_threshold: f64,
    pub scale_pass_threshold: u8,
}

impl Default for ReadinessSettings {
    fn default() -> Self {
        Self {
            completion_threshold: DEFAULT_COMPLETION_THRESHOLD,
            scale_pass_threshold: DEFAULT_SCALE_PASS_THRESHOLD,
        }
    }
}

/// A readiness condition that did not hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "condition",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum ReadinessCondition {
    /// Blocker questions without a passing answer
    CriticalBlockersUnresolved { question_ids: Vec<String> },
    /// Answered share of total points is below the threshold
    CompletionBelowThreshold { ratio: f64, threshold: f64 },
}

impl std::fmt::Display for ReadinessCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CriticalBlockersUnresolved { question_ids } => write!(
                f,
                "{} blocker question(s) unresolved: {}",
                question_ids.len(),
                question_ids.join(", ")
            ),
            Self::CompletionBelowThreshold { ratio, threshold } => write!(
                f,
                "completion {:.1}% is below the required {:.1}%",
                ratio * 100.0,
                threshold * 100.0
            ),
        }
    }
}

/// Outcome of a readiness evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessVerdict {
    pub production_ready: bool,
    pub failing: Vec<ReadinessCondition>,
    pub answered_points: u32,
    pub total_points: u32,
    pub completion_ratio: f64,
    /// Earned points over total points, in `[0, 1]`.
    pub weighted_score: f64,
    pub unmet_blockers: Vec<String>,
    /// Critical sections with no eligible questions; they pass vacuously.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub critical_gaps: Vec<String>,
}

/// Evaluate answers against a preview.
///
/// Fails with [`EngineError::InvalidAnswer`] when an answer does not fit its
/// question. Answers for questions outside the preview are ignored.
pub fn evaluate_readiness(
    preview: &AssessmentPreview,
    responses: &AssessmentResponses,
    settings: &ReadinessSettings,
) -> Result<ReadinessVerdict> {
    let mut answered_points: u32 = 0;
    let mut earned = 0.0_f64;
    let mut unmet_blockers = Vec::new();
    let mut seen = HashSet::new();

    for (_, question) in preview.questions() {
        seen.insert(question.id.as_str());
        let answer = responses.get(&question.id);
        if let Some(answer) = answer {
            check_answer(question, answer)?;
        }

        if answer.is_some_and(Answer::is_answered) {
            answered_points = answered_points.saturating_add(question.points);
        }
        earned += earned_points(question, answer);

        if question.is_blocker && !passes(question, answer, settings) {
            unmet_blockers.push(question.id.clone());
        }
    }

    for id in responses.answers.keys() {
        if !seen.contains(id.as_str()) {
            tracing::debug!(question = %id, "Ignoring answer for question outside the preview");
        }
    }

    let total_points = preview.total_points;
    let completion_ratio = ratio(f64::from(answered_points), total_points);
    let weighted_score = ratio(earned, total_points);

    let mut failing = Vec::new();
    if !unmet_blockers.is_empty() {
        failing.push(ReadinessCondition::CriticalBlockersUnresolved {
            question_ids: unmet_blockers.clone(),
        });
    }
    if completion_ratio < settings.completion_threshold {
        failing.push(ReadinessCondition::CompletionBelowThreshold {
            ratio: completion_ratio,
            threshold: settings.completion_threshold,
        });
    }

    let verdict = ReadinessVerdict {
        production_ready: failing.is_empty(),
        failing,
        answered_points,
        total_points,
        completion_ratio,
        weighted_score,
        unmet_blockers,
        critical_gaps: preview.critical_gaps.clone(),
    };
    tracing::debug!(
        ready = verdict.production_ready,
        completion = verdict.completion_ratio,
        unmet = verdict.unmet_blockers.len(),
        "Evaluated readiness"
    );
    Ok(verdict)
}

fn ratio(part: f64, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        part / f64::from(total)
    }
}

fn check_answer(question: &Question, answer: &Answer) -> Result<()> {
    match (question.question_type, answer) {
        (QuestionType::Boolean, Answer::Boolean(_)) | (QuestionType::FreeText, Answer::Text(_)) => {
            Ok(())
        }
        (QuestionType::Scale1To5, Answer::Scale(value)) => {
            let scale = question.scale().unwrap_or_default();
            if scale.accepts(*value) {
                Ok(())
            } else {
                Err(EngineError::invalid_answer(
                    &question.id,
                    format!(
                        "value {value} is not on the scale {}..={} (step {})",
                        scale.min, scale.max, scale.step
                    ),
                ))
            }
        }
        (expected, other) => Err(EngineError::invalid_answer(
            &question.id,
            format!("expected a {} answer, got {}", expected.name(), other.kind()),
        )),
    }
}

fn passes(question: &Question, answer: Option<&Answer>, settings: &ReadinessSettings) -> bool {
    match answer {
        Some(Answer::Boolean(value)) => *value,
        Some(Answer::Scale(value)) => *value >= scale_pass_mark(question, settings),
        Some(text @ Answer::Text(_)) => text.is_answered(),
        None => {
            tracing::trace!(question = %question.id, "Blocker question unanswered");
            false
        }
    }
}

/// The pass threshold moved onto the question's own scale, so a short scale
/// (say 1..=3) can still be passed by its top answer.
fn scale_pass_mark(question: &Question, settings: &ReadinessSettings) -> u8 {
    let scale = question.scale().unwrap_or_default();
    settings
        .scale_pass_threshold
        .clamp(scale.min, scale.max.max(scale.min))
}

fn earned_points(question: &Question, answer: Option<&Answer>) -> f64 {
    let full = f64::from(question.points);
    match answer {
        Some(Answer::Boolean(true)) => full,
        Some(Answer::Scale(value)) => full * question.scale().unwrap_or_default().fraction(*value),
        Some(text @ Answer::Text(_)) if text.is_answered() => full,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogBuilder};
    use crate::engine::compose_preview;
    use crate::model::{AssessmentConfiguration, Persona, ScaleConfiguration, Section};

    /// Two sections, 100 points in total, two blocker questions.
    fn catalog() -> Catalog {
        CatalogBuilder::new()
            .persona(Persona::new("admin", "Admin").admin())
            .section(Section::new("critical", 1, "Critical").critical())
            .section(Section::new("general", 2, "General"))
            .question(
                Question::new("c-1", "critical", "Policy?", QuestionType::Boolean, 10, "gov")
                    .blocker(),
            )
            .question(
                Question::new("c-2", "critical", "Maturity", QuestionType::Scale1To5, 10, "gov")
                    .blocker(),
            )
            .question(Question::new("g-1", "general", "Notes", QuestionType::FreeText, 5, "gen"))
            .question(Question::new("g-2", "general", "Done?", QuestionType::Boolean, 75, "gen"))
            .build()
            .expect("valid")
    }

    fn preview() -> AssessmentPreview {
        compose_preview(&catalog(), &AssessmentConfiguration::builder("admin").build())
            .expect("preview")
    }

    fn evaluate(responses: &AssessmentResponses) -> Result<ReadinessVerdict> {
        evaluate_readiness(&preview(), responses, &ReadinessSettings::default())
    }

    #[test]
    fn test_ready_when_both_conditions_hold() {
        let responses = AssessmentResponses::new()
            .with("c-1", Answer::Boolean(true))
            .with("c-2", Answer::Scale(4))
            .with("g-2", Answer::Boolean(true));
        let verdict = evaluate(&responses).expect("valid answers");
        assert_eq!(verdict.total_points, 100);
        assert_eq!(verdict.answered_points, 95);
        assert!(verdict.production_ready);
        assert!(verdict.failing.is_empty());
    }

    #[test]
    fn test_blockers_alone_are_not_enough() {
        let responses = AssessmentResponses::new()
            .with("c-1", Answer::Boolean(true))
            .with("c-2", Answer::Scale(5));
        let verdict = evaluate(&responses).expect("valid answers");
        assert!(!verdict.production_ready);
        assert!(matches!(
            verdict.failing.as_slice(),
            [ReadinessCondition::CompletionBelowThreshold { .. }]
        ));
    }

    #[test]
    fn test_completion_alone_is_not_enough() {
        let responses = AssessmentResponses::new()
            .with("c-1", Answer::Boolean(false))
            .with("c-2", Answer::Scale(3))
            .with("g-1", Answer::Text("See SOP".to_string()))
            .with("g-2", Answer::Boolean(true));
        let verdict = evaluate(&responses).expect("valid answers");
        assert!(!verdict.production_ready);
        assert!((verdict.completion_ratio - 1.0).abs() < f64::EPSILON);
        assert_eq!(verdict.unmet_blockers, vec!["c-1", "c-2"]);
        assert_eq!(
            verdict.failing,
            vec![ReadinessCondition::CriticalBlockersUnresolved {
                question_ids: vec!["c-1".to_string(), "c-2".to_string()],
            }]
        );
    }

    #[test]
    fn test_weighted_score() {
        let responses = AssessmentResponses::new()
            .with("c-1", Answer::Boolean(false))
            .with("c-2", Answer::Scale(3))
            .with("g-1", Answer::Text("done".to_string()));
        let verdict = evaluate(&responses).expect("valid answers");
        // 0 + 10 * 0.5 + 5 + 0
        assert!((verdict.weighted_score - 0.10).abs() < 1e-9);
    }

    #[test]
    fn test_blank_text_is_not_answered() {
        let responses = AssessmentResponses::new().with("g-1", Answer::Text("  ".to_string()));
        let verdict = evaluate(&responses).expect("valid answers");
        assert_eq!(verdict.answered_points, 0);
    }

    #[test]
    fn test_mismatched_answer_kind_is_rejected() {
        let responses = AssessmentResponses::new().with("c-1", Answer::Scale(4));
        assert!(matches!(
            evaluate(&responses),
            Err(EngineError::InvalidAnswer { question_id, .. }) if question_id == "c-1"
        ));
    }

    #[test]
    fn test_out_of_scale_answer_is_rejected() {
        let responses = AssessmentResponses::new().with("c-2", Answer::Scale(9));
        assert!(matches!(
            evaluate(&responses),
            Err(EngineError::InvalidAnswer { .. })
        ));
    }

    #[test]
    fn test_short_scale_blocker_passes_at_its_maximum() {
        let mut rating = Question::new("r-1", "only", "Rating", QuestionType::Scale1To5, 10, "gov")
            .blocker();
        rating.scale_configuration = Some(ScaleConfiguration {
            min: 1,
            max: 3,
            step: 1,
        });
        let catalog = CatalogBuilder::new()
            .persona(Persona::new("admin", "Admin").admin())
            .section(Section::new("only", 1, "Only").critical())
            .question(rating)
            .build()
            .expect("valid");
        let preview = compose_preview(&catalog, &AssessmentConfiguration::builder("admin").build())
            .expect("preview");
        let settings = ReadinessSettings::default();

        let top = AssessmentResponses::new().with("r-1", Answer::Scale(3));
        let verdict = evaluate_readiness(&preview, &top, &settings).expect("valid answer");
        assert!(verdict.unmet_blockers.is_empty());
        assert!(verdict.production_ready);

        let middle = AssessmentResponses::new().with("r-1", Answer::Scale(2));
        let verdict = evaluate_readiness(&preview, &middle, &settings).expect("valid answer");
        assert_eq!(verdict.unmet_blockers, vec!["r-1".to_string()]);
    }

    #[test]
    fn test_unknown_questions_are_ignored() {
        let responses = AssessmentResponses::new().with("nope", Answer::Boolean(true));
        assert!(evaluate(&responses).is_ok());
    }

    #[test]
    fn test_condition_display() {
        let condition = ReadinessCondition::CompletionBelowThreshold {
            ratio: 0.5,
            threshold: 0.85,
        };
        assert_eq!(
            condition.to_string(),
            "completion 50.0% is below the required 85.0%"
        );
    }
}

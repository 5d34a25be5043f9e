//! End-to-end composition scenarios against the built-in catalog.
//!
//! These tests drive the public engine API the way an API layer would:
//! build a configuration, compose a preview and inspect the result.

use pharma_readiness::{
    catalog::{builtin, CatalogBuilder, CatalogStore},
    engine::{compose_preview, AssessmentEngine},
    model::{EffectiveMapping, Persona, Question, QuestionType, Section, TherapeuticArea},
    AssessmentConfiguration, EngineError, PersonaSectionMapping, ReferenceKind,
};

fn engine() -> AssessmentEngine {
    AssessmentEngine::new(builtin().expect("built-in catalog is valid"))
}

fn data_head_oncology() -> AssessmentConfiguration {
    AssessmentConfiguration::builder("data-science")
        .sub_persona("data-head")
        .therapeutic_area("oncology")
        .build()
}

// ============================================================================
// Composition scenarios
// ============================================================================

mod composition {
    use super::*;

    #[test]
    fn test_admin_sees_full_section_catalog() {
        let engine = engine();
        let catalog = engine.catalog();
        let preview = engine
            .preview(&AssessmentConfiguration::builder("admin").build())
            .expect("admin preview");

        assert_eq!(preview.total_sections, catalog.list_sections().len());
        assert_eq!(preview.total_questions, catalog.questions().count());
        assert!(preview
            .sections
            .iter()
            .all(|s| s.resolved.mapping == EffectiveMapping::admin()));
    }

    #[test]
    fn test_admin_with_any_therapeutic_area() {
        let engine = engine();
        for area in ["oncology", "cardiology", "not-an-area"] {
            let config = AssessmentConfiguration::builder("admin")
                .therapeutic_area(area)
                .build();
            let preview = engine.preview(&config).expect("admin preview");
            assert_eq!(preview.total_sections, 22, "area {area}");
        }
    }

    #[test]
    fn test_data_head_oncology_gets_exactly_mapped_sections() {
        let preview = engine().preview(&data_head_oncology()).expect("preview");

        let mut ids: Vec<&str> = preview.section_ids().collect();
        ids.sort_unstable();
        let mut expected = vec![
            "ai-model-validation",
            "gmlp-framework",
            "algorithm-bias",
            "ai-interoperability",
            "advanced-data-gov",
            "tech-specific-governance",
            "ai-validation-general",
            "final-integration",
            "fda-seven-step",
            "context-of-use",
        ];
        expected.sort_unstable();

        assert_eq!(preview.total_sections, 10);
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_sections_ordered_by_priority_then_number() {
        let preview = engine().preview(&data_head_oncology()).expect("preview");
        let keys: Vec<(u8, u32)> = preview
            .sections
            .iter()
            .map(|s| (s.resolved.mapping.priority_score, s.resolved.section.section_number))
            .collect();
        for pair in keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(
                a.0 > b.0 || (a.0 == b.0 && a.1 < b.1),
                "out of order: {a:?} before {b:?}"
            );
        }
    }

    #[test]
    fn test_therapy_specific_question_follows_area() {
        let engine = engine();
        let has_biomarker = |area: &str| {
            let config = AssessmentConfiguration::builder("data-science")
                .sub_persona("data-head")
                .therapeutic_area(area)
                .build();
            engine
                .preview(&config)
                .expect("preview")
                .questions()
                .any(|(_, q)| q.id == "mv-04")
        };
        assert!(has_biomarker("oncology"));
        assert!(!has_biomarker("general-medicine"));
    }

    #[test]
    fn test_model_specific_question_needs_model_selection() {
        let engine = engine();
        let base = engine.preview(&data_head_oncology()).expect("preview");
        assert!(!base.questions().any(|(_, q)| q.id == "mv-03"));

        let generative = AssessmentConfiguration::builder("data-science")
            .sub_persona("data-head")
            .therapeutic_area("oncology")
            .model_type("generative-ai")
            .build();
        let preview = engine.preview(&generative).expect("preview");
        assert!(preview.questions().any(|(_, q)| q.id == "mv-03"));
        assert!(preview.total_points > base.total_points);
    }

    #[test]
    fn test_persona_relevant_question_hidden_from_other_sub_personas() {
        let engine = engine();
        let scientist = AssessmentConfiguration::builder("data-science")
            .sub_persona("data-scientist")
            .therapeutic_area("oncology")
            .build();
        let preview = engine.preview(&scientist).expect("preview");
        assert!(!preview.questions().any(|(_, q)| q.id == "gmlp-03"));

        let head = engine.preview(&data_head_oncology()).expect("preview");
        assert!(head.questions().any(|(_, q)| q.id == "gmlp-03"));
    }
}

// ============================================================================
// Scoring scenarios
// ============================================================================

mod scoring {
    use super::*;

    #[test]
    fn test_model_score_sums_selected_types() {
        let config = AssessmentConfiguration::builder("data-science")
            .sub_persona("data-head")
            .therapeutic_area("oncology")
            .model_types(["agentic-ai", "generative-ai"])
            .build();
        let preview = engine().preview(&config).expect("preview");

        assert_eq!(preview.complexity.model_score, 35);
        assert_eq!(preview.complexity.deployment_score, 0);
        assert_eq!(preview.complexity.therapy_score, 15);
        assert_eq!(preview.complexity.total_complexity, 50);
    }

    #[test]
    fn test_unknown_model_type_is_skipped() {
        let config = AssessmentConfiguration::builder("data-science")
            .sub_persona("data-head")
            .therapeutic_area("oncology")
            .model_type("not-a-real-id")
            .build();
        let preview = engine().preview(&config).expect("unknown model ids are not fatal");

        assert_eq!(preview.complexity.model_score, 0);
        assert_eq!(preview.total_sections, 10);
        let skipped = &preview.complexity.skipped_references;
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].id, "not-a-real-id");
        assert_eq!(skipped[0].kind, ReferenceKind::AiModelType);
    }

    #[test]
    fn test_forty_questions_take_one_hundred_minutes() {
        let mut builder = CatalogBuilder::new()
            .persona(Persona::new("quality", "Quality"))
            .therapeutic_area(TherapeuticArea {
                id: "general".to_string(),
                name: "General".to_string(),
                complexity: Default::default(),
                overlay_points: 0,
                requirement_tags: Default::default(),
            })
            .section(Section::new("bank", 1, "Question bank"))
            .mapping(PersonaSectionMapping::new("quality", None, "bank", 2));
        for i in 0..40 {
            builder = builder.question(Question::new(
                format!("q-{i}"),
                "bank",
                format!("Question {i}"),
                QuestionType::Boolean,
                1,
                "general",
            ));
        }
        let catalog = builder.build().expect("valid catalog");

        let config = AssessmentConfiguration::builder("quality")
            .therapeutic_area("general")
            .build();
        let preview = compose_preview(&catalog, &config).expect("preview");

        assert_eq!(preview.total_questions, 40);
        assert_eq!(preview.estimated_time_minutes, 100);
        assert_eq!(preview.estimated_time, "1 hr 40 min");
        assert_eq!(preview.total_points, 40);
    }

    #[test]
    fn test_points_equal_sum_of_question_weights() {
        let preview = engine().preview(&data_head_oncology()).expect("preview");
        let summed: u32 = preview.questions().map(|(_, q)| q.points).sum();
        assert_eq!(preview.total_points, summed);
        let per_section: u32 = preview.sections.iter().map(|s| s.points).sum();
        assert_eq!(preview.total_points, per_section);
    }

    #[test]
    fn test_blocker_counts_match_sections() {
        let preview = engine().preview(&data_head_oncology()).expect("preview");
        let blockers = preview.questions().filter(|(_, q)| q.is_blocker).count();
        assert_eq!(preview.production_blockers, blockers);
        let critical = preview
            .sections
            .iter()
            .filter(|s| s.resolved.section.is_critical_blocker)
            .count();
        assert_eq!(preview.critical_sections, critical);
    }
}

// ============================================================================
// Error scenarios
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_unknown_persona_suggests_closest() {
        let err = engine()
            .preview(
                &AssessmentConfiguration::builder("data-sceince")
                    .therapeutic_area("oncology")
                    .build(),
            )
            .expect_err("unknown persona");
        match err {
            EngineError::UnknownPersona { id, suggestion } => {
                assert_eq!(id, "data-sceince");
                assert_eq!(suggestion.as_deref(), Some("data-science"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_sub_persona_of_other_persona_rejected() {
        let config = AssessmentConfiguration::builder("data-science")
            .sub_persona("privacy-officer")
            .therapeutic_area("oncology")
            .build();
        let err = engine().preview(&config).expect_err("foreign sub-persona");
        assert!(matches!(err, EngineError::UnknownSubPersona { .. }));
    }

    #[test]
    fn test_missing_therapeutic_area_is_empty_configuration() {
        let config = AssessmentConfiguration::builder("data-science")
            .sub_persona("data-head")
            .build();
        let err = engine().preview(&config).expect_err("no area");
        assert!(matches!(err, EngineError::EmptyConfiguration { .. }));
    }

    #[test]
    fn test_unknown_therapeutic_area_is_fatal_for_non_admin() {
        let config = AssessmentConfiguration::builder("data-science")
            .sub_persona("data-head")
            .therapeutic_area("oncolgy")
            .build();
        let err = engine().preview(&config).expect_err("unknown area");
        match err {
            EngineError::UnknownTherapeuticArea { suggestion, .. } => {
                assert_eq!(suggestion.as_deref(), Some("oncology"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

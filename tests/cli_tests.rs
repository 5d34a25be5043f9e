//! Command handler tests.
//!
//! Exercise the same handlers `main` dispatches to, with output rendered to
//! strings or written into temporary directories.

use pharma_readiness::{
    cli::{
        exit_codes, load_responses, render_preview, render_readiness, run_catalog_seed,
        run_catalog_validate, run_readiness, OutputTarget,
    },
    AppConfig, AssessmentConfiguration, ReportFormat,
};
use tempfile::TempDir;

fn json_config() -> AppConfig {
    AppConfig::builder()
        .output_format(ReportFormat::Json)
        .build()
}

fn admin() -> AssessmentConfiguration {
    AssessmentConfiguration::builder("admin").build()
}

#[test]
fn test_preview_json_has_expected_fields() {
    let text = render_preview(&admin(), &json_config(), &OutputTarget::Stdout).expect("preview");
    let json: serde_json::Value = serde_json::from_str(&text).expect("json");

    for field in [
        "sections",
        "totalSections",
        "totalQuestions",
        "totalPoints",
        "criticalSections",
        "productionBlockers",
        "estimatedTime",
        "estimatedTimeMinutes",
    ] {
        assert!(json.get(field).is_some(), "missing {field}");
    }
    assert_eq!(json["totalSections"], 22);
    assert_eq!(json["report"]["toolName"], "pharma-readiness");
}

#[test]
fn test_preview_summary_lists_sections() {
    let app = AppConfig::default();
    let text = render_preview(&admin(), &app, &OutputTarget::Stdout).expect("preview");
    assert!(text.contains("AI Governance Framework"));
    assert!(text.contains("22"));
}

#[test]
fn test_preview_rejects_invalid_threshold() {
    let app = AppConfig::builder().completion_threshold(1.5).build();
    let err = render_preview(&admin(), &app, &OutputTarget::Stdout).expect_err("invalid");
    assert!(err.to_string().contains("Invalid configuration"));
}

#[test]
fn test_preview_with_custom_catalog_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("catalog.json");
    run_catalog_seed(Some(path.clone()), None).expect("seed");

    let app = AppConfig::builder()
        .catalog_path(&path)
        .output_format(ReportFormat::Json)
        .build();
    let text = render_preview(&admin(), &app, &OutputTarget::Stdout).expect("preview");
    let json: serde_json::Value = serde_json::from_str(&text).expect("json");
    assert_eq!(json["totalSections"], 22);
    assert_eq!(
        json["report"]["catalogSource"],
        path.display().to_string().as_str()
    );
}

#[test]
fn test_readiness_exit_code_for_empty_answers() {
    let dir = TempDir::new().expect("tempdir");
    let responses = dir.path().join("answers.yaml");
    std::fs::write(&responses, "answers: {}\n").expect("write");

    let mut app = json_config();
    app.output.file = Some(dir.path().join("verdict.json"));
    let code = run_readiness(&responses, admin(), app).expect("readiness");
    assert_eq!(code, exit_codes::NOT_READY);

    let verdict = std::fs::read_to_string(dir.path().join("verdict.json")).expect("report");
    let json: serde_json::Value = serde_json::from_str(&verdict).expect("json");
    assert_eq!(json["verdict"]["productionReady"], false);
}

#[test]
fn test_readiness_with_json_answers() {
    let dir = TempDir::new().expect("tempdir");
    let responses = dir.path().join("answers.json");
    std::fs::write(
        &responses,
        r#"{"answers": {"gov-01": true, "reg-03": 4, "cou-02": "Batch release support"}}"#,
    )
    .expect("write");

    let loaded = load_responses(&responses).expect("load");
    assert_eq!(loaded.len(), 3);

    let (text, ready) =
        render_readiness(&responses, &admin(), &json_config(), &OutputTarget::Stdout)
            .expect("readiness");
    assert!(!ready);
    let json: serde_json::Value = serde_json::from_str(&text).expect("json");
    assert!(json["verdict"]["answeredPoints"].as_u64().unwrap_or_default() > 0);
}

#[test]
fn test_responses_without_answers_key_are_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let responses = dir.path().join("answers.json");
    std::fs::write(&responses, r#"{"gov-01": true, "reg-03": 4}"#).expect("write");

    let err = load_responses(&responses).expect_err("bare answer map");
    let message = format!("{err:#}");
    assert!(message.contains("Invalid JSON responses"), "{message}");
    assert!(message.contains("gov-01"), "{message}");

    let yaml = dir.path().join("answers.yaml");
    std::fs::write(&yaml, "gov-01: true\n").expect("write");
    assert!(load_responses(&yaml).is_err());
}

#[test]
fn test_readiness_rejects_mistyped_answer() {
    let dir = TempDir::new().expect("tempdir");
    let responses = dir.path().join("answers.yaml");
    std::fs::write(&responses, "answers:\n  gov-01: 9\n").expect("write");

    let err = render_readiness(&responses, &admin(), &json_config(), &OutputTarget::Stdout)
        .expect_err("boolean question answered with a number");
    assert!(err.to_string().contains("gov-01"));
}

#[test]
fn test_catalog_validate_missing_file_is_error() {
    let dir = TempDir::new().expect("tempdir");
    assert!(run_catalog_validate(&dir.path().join("absent.yaml")).is_err());
}

#[test]
fn test_catalog_seed_yaml_validates() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("seed.yml");
    assert_eq!(
        run_catalog_seed(Some(path.clone()), None).expect("seed"),
        exit_codes::SUCCESS
    );
    assert_eq!(
        run_catalog_validate(&path).expect("validate"),
        exit_codes::SUCCESS
    );
}

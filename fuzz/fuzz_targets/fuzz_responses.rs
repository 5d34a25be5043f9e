#![no_main]
use libfuzzer_sys::fuzz_target;
use pharma_readiness::{
    catalog::builtin, engine::evaluate_readiness, AssessmentConfiguration, AssessmentEngine,
    AssessmentResponses, ReadinessSettings,
};
use std::sync::OnceLock;

fn preview() -> &'static pharma_readiness::AssessmentPreview {
    static PREVIEW: OnceLock<pharma_readiness::AssessmentPreview> = OnceLock::new();
    PREVIEW.get_or_init(|| {
        let engine = AssessmentEngine::new(builtin().expect("built-in catalog"));
        engine
            .preview(&AssessmentConfiguration::builder("admin").build())
            .expect("admin preview")
    })
}

/// Fuzz readiness evaluation with arbitrary JSON answers.
fuzz_target!(|data: &[u8]| {
    if let Ok(responses) = serde_json::from_slice::<AssessmentResponses>(data) {
        let _ = evaluate_readiness(preview(), &responses, &ReadinessSettings::default());
    }
});

//! Benchmarks for preview composition and readiness evaluation.

use criterion::{criterion_group, criterion_main, Criterion};
use pharma_readiness::{
    catalog::builtin,
    engine::{compose_preview, evaluate_readiness},
    Answer, AssessmentConfiguration, AssessmentEngine, AssessmentResponses, ReadinessSettings,
};
use std::hint::black_box;

fn data_head() -> AssessmentConfiguration {
    AssessmentConfiguration::builder("data-science")
        .sub_persona("data-head")
        .therapeutic_area("oncology")
        .model_types(["generative-ai", "agentic-ai"])
        .deployment("clinical-trials")
        .build()
}

fn benchmark_compose_preview(c: &mut Criterion) {
    let catalog = builtin().expect("valid catalog");
    let admin = AssessmentConfiguration::builder("admin").build();
    let scoped = data_head();

    c.bench_function("compose_preview_admin", |b| {
        b.iter(|| compose_preview(black_box(&catalog), black_box(&admin)))
    });
    c.bench_function("compose_preview_data_head", |b| {
        b.iter(|| compose_preview(black_box(&catalog), black_box(&scoped)))
    });
}

fn benchmark_preview_many(c: &mut Criterion) {
    let engine = AssessmentEngine::new(builtin().expect("valid catalog"));
    let configs: Vec<AssessmentConfiguration> = (0..64).map(|_| data_head()).collect();

    c.bench_function("preview_many_64", |b| {
        b.iter(|| engine.preview_many(black_box(&configs)))
    });
}

fn benchmark_readiness(c: &mut Criterion) {
    let catalog = builtin().expect("valid catalog");
    let preview = compose_preview(&catalog, &AssessmentConfiguration::builder("admin").build())
        .expect("preview");
    let responses = preview
        .questions()
        .fold(AssessmentResponses::new(), |r, (_, q)| {
            r.with(q.id.clone(), Answer::Boolean(true))
        });
    let settings = ReadinessSettings::default();

    c.bench_function("evaluate_readiness_admin", |b| {
        b.iter(|| evaluate_readiness(black_box(&preview), black_box(&responses), &settings))
    });
}

criterion_group!(
    benches,
    benchmark_compose_preview,
    benchmark_preview_many,
    benchmark_readiness
);
criterion_main!(benches);

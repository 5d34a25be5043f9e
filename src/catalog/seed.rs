//! Built-in pharmaceutical AI-compliance catalog.
//!
//! This is the reference data a fresh installation starts from. It is loaded
//! explicitly (`catalog seed` writes it out as a document) and never mutated
//! at runtime.

use super::{Catalog, CatalogBuilder};
use crate::error::CatalogError;
use crate::model::{
    AccessLevel, AiModelType, ComplexityTier, DeploymentScenario, ExpertiseLevel, Persona,
    PersonaSectionMapping, Question, QuestionType, ResponsibilityType, Section, SubPersona,
    TherapeuticArea,
};
use std::collections::{BTreeMap, BTreeSet};

/// Id of the built-in administrator persona.
pub const ADMIN_PERSONA: &str = "admin";

/// Build the built-in catalog.
pub fn builtin() -> Result<Catalog, CatalogError> {
    let builder = CatalogBuilder::new();
    let builder = personas().into_iter().fold(builder, CatalogBuilder::persona);
    let builder = sub_personas()
        .into_iter()
        .fold(builder, CatalogBuilder::sub_persona);
    let builder = therapeutic_areas()
        .into_iter()
        .fold(builder, CatalogBuilder::therapeutic_area);
    let builder = ai_model_types()
        .into_iter()
        .fold(builder, CatalogBuilder::ai_model_type);
    let builder = deployment_scenarios()
        .into_iter()
        .fold(builder, CatalogBuilder::deployment_scenario);
    let builder = sections().into_iter().fold(builder, CatalogBuilder::section);
    let builder = questions().into_iter().fold(builder, CatalogBuilder::question);
    let builder = mappings().into_iter().fold(builder, CatalogBuilder::mapping);
    builder.build()
}

fn personas() -> Vec<Persona> {
    vec![
        Persona::new(ADMIN_PERSONA, "Administrator")
            .admin()
            .with_description("Full visibility across every assessment section"),
        Persona::new("executive-leadership", "Executive Leadership")
            .with_description("Strategic accountability for AI adoption and risk appetite"),
        Persona::new("data-science", "Data Science & AI")
            .with_description("Model development, validation and data stewardship"),
        Persona::new("it-technology", "IT & Technology")
            .with_description("Infrastructure, security and integration of AI systems"),
        Persona::new("regulatory-quality", "Regulatory Affairs & Quality")
            .with_description("GxP compliance, validation and regulatory submissions"),
        Persona::new("legal-compliance", "Legal & Compliance")
            .with_description("Privacy, contractual and ethical obligations"),
        Persona::new("clinical-operations", "Clinical Operations")
            .with_description("AI used in trials, safety and patient-facing processes"),
    ]
}

fn sub_personas() -> Vec<SubPersona> {
    use ExpertiseLevel::{Expert, Intermediate};
    vec![
        SubPersona::new("c-suite", "executive-leadership", "C-Suite Executive", Expert),
        SubPersona::new(
            "business-unit-head",
            "executive-leadership",
            "Business Unit Head",
            Intermediate,
        ),
        SubPersona::new("data-head", "data-science", "Head of Data Science", Expert)
            .with_description("Owns the data science function and its model portfolio"),
        SubPersona::new("ml-engineer", "data-science", "ML Engineer", Expert),
        SubPersona::new("data-scientist", "data-science", "Data Scientist", Intermediate),
        SubPersona::new("cio-cto", "it-technology", "CIO / CTO", Expert),
        SubPersona::new("security-architect", "it-technology", "Security Architect", Expert),
        SubPersona::new("it-operations", "it-technology", "IT Operations", Intermediate),
        SubPersona::new(
            "head-regulatory",
            "regulatory-quality",
            "Head of Regulatory Affairs",
            Expert,
        ),
        SubPersona::new("qa-manager", "regulatory-quality", "QA Manager", Intermediate),
        SubPersona::new(
            "validation-specialist",
            "regulatory-quality",
            "Validation Specialist",
            Intermediate,
        ),
        SubPersona::new("general-counsel", "legal-compliance", "General Counsel", Expert),
        SubPersona::new("privacy-officer", "legal-compliance", "Data Privacy Officer", Expert),
        SubPersona::new(
            "clinical-head",
            "clinical-operations",
            "Head of Clinical Operations",
            Expert,
        ),
        SubPersona::new(
            "clinical-data-manager",
            "clinical-operations",
            "Clinical Data Manager",
            Intermediate,
        ),
    ]
}

fn tags(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn therapeutic_areas() -> Vec<TherapeuticArea> {
    let area = |id: &str, name: &str, complexity, overlay_points, requirement: &[&str]| {
        TherapeuticArea {
            id: id.to_string(),
            name: name.to_string(),
            complexity,
            overlay_points,
            requirement_tags: tags(requirement),
        }
    };
    vec![
        area(
            "oncology",
            "Oncology",
            ComplexityTier::High,
            15,
            &["oncology", "biomarker", "companion-diagnostics", "real-world-evidence"],
        ),
        area(
            "cardiology",
            "Cardiovascular",
            ComplexityTier::Medium,
            10,
            &["cardiology", "real-world-evidence", "wearables"],
        ),
        area(
            "neurology",
            "Neurology & CNS",
            ComplexityTier::High,
            15,
            &["neurology", "digital-biomarkers"],
        ),
        area(
            "rare-diseases",
            "Rare Diseases",
            ComplexityTier::Critical,
            20,
            &["rare-disease", "small-populations", "real-world-evidence"],
        ),
        area(
            "infectious-diseases",
            "Infectious Diseases & Vaccines",
            ComplexityTier::Medium,
            10,
            &["infectious-disease", "pharmacovigilance"],
        ),
        area(
            "immunology",
            "Immunology",
            ComplexityTier::Medium,
            10,
            &["immunology", "biomarker"],
        ),
        area("general-medicine", "General Medicine", ComplexityTier::Low, 5, &[]),
    ]
}

fn ai_model_types() -> Vec<AiModelType> {
    let model = |id: &str, name: &str, complexity, complexity_points, requirement: &[&str]| {
        AiModelType {
            id: id.to_string(),
            name: name.to_string(),
            complexity,
            complexity_points,
            requirement_tags: tags(requirement),
        }
    };
    vec![
        model(
            "traditional-ml",
            "Traditional Machine Learning",
            ComplexityTier::Low,
            5,
            &["ml-validation"],
        ),
        model(
            "deep-learning",
            "Deep Learning",
            ComplexityTier::Medium,
            10,
            &["ml-validation", "explainability"],
        ),
        model(
            "computer-vision",
            "Computer Vision",
            ComplexityTier::Medium,
            12,
            &["imaging", "explainability"],
        ),
        model(
            "nlp",
            "Natural Language Processing",
            ComplexityTier::Medium,
            10,
            &["nlp", "explainability"],
        ),
        model(
            "generative-ai",
            "Generative AI / LLMs",
            ComplexityTier::High,
            15,
            &["generative", "hallucination", "explainability"],
        ),
        model(
            "agentic-ai",
            "Agentic AI",
            ComplexityTier::Critical,
            20,
            &["agentic", "autonomy", "human-oversight"],
        ),
    ]
}

fn deployment_scenarios() -> Vec<DeploymentScenario> {
    let scenario = |id: &str, name: &str, complexity, complexity_points, requirement: &[&str]| {
        DeploymentScenario {
            id: id.to_string(),
            name: name.to_string(),
            complexity,
            complexity_points,
            requirement_tags: tags(requirement),
        }
    };
    vec![
        scenario(
            "research-discovery",
            "Research & Drug Discovery",
            ComplexityTier::Low,
            5,
            &["research"],
        ),
        scenario(
            "clinical-trials",
            "Clinical Trials",
            ComplexityTier::High,
            15,
            &["clinical-trial", "gcp"],
        ),
        scenario(
            "manufacturing",
            "GMP Manufacturing",
            ComplexityTier::High,
            15,
            &["gmp", "process-control"],
        ),
        scenario(
            "regulatory-submissions",
            "Regulatory Submissions",
            ComplexityTier::High,
            12,
            &["submission", "traceability"],
        ),
        scenario(
            "commercial",
            "Commercial & Medical Affairs",
            ComplexityTier::Medium,
            8,
            &["commercial", "promotional"],
        ),
        scenario(
            "patient-facing",
            "Patient-Facing Applications",
            ComplexityTier::Critical,
            20,
            &["patient-safety", "human-oversight", "privacy"],
        ),
        scenario(
            "pharmacovigilance-ops",
            "Pharmacovigilance Operations",
            ComplexityTier::High,
            15,
            &["pharmacovigilance", "safety-signal"],
        ),
    ]
}

fn sections() -> Vec<Section> {
    let section = |id: &str, number, title: &str, base_points| {
        Section::new(id, number, title).with_base_points(base_points)
    };
    vec![
        section("governance-framework", 1, "AI Governance Framework", 100).critical(),
        section("regulatory-compliance", 2, "Regulatory Compliance Foundations", 100).critical(),
        section("data-integrity", 3, "Data Integrity & ALCOA+", 90).critical(),
        section("ai-model-validation", 4, "AI Model Validation", 120).critical(),
        section("gmlp-framework", 5, "Good Machine Learning Practice", 100),
        section("algorithm-bias", 6, "Algorithmic Bias & Fairness", 80).critical(),
        section("ai-interoperability", 7, "AI Interoperability", 60),
        section("advanced-data-gov", 8, "Advanced Data Governance", 80),
        section("tech-specific-governance", 9, "Technology-Specific Governance", 90),
        section("ai-validation-general", 10, "General AI Validation", 70),
        section("final-integration", 11, "Final Integration & Readiness", 50),
        section("fda-seven-step", 12, "FDA Seven-Step Credibility Framework", 110).critical(),
        section("context-of-use", 13, "Context of Use Definition", 70).critical(),
        section("cybersecurity", 14, "AI Cybersecurity", 90).critical(),
        section("privacy-protection", 15, "Privacy & Data Protection", 80),
        section("clinical-trial-ai", 16, "Clinical Trial AI Applications", 90),
        section("pharmacovigilance", 17, "Pharmacovigilance & Post-Market Surveillance", 80),
        section("change-control", 18, "Change Control & Lifecycle Management", 70),
        section("vendor-management", 19, "Third-Party AI Vendor Management", 60),
        section("human-oversight", 20, "Human Oversight & Explainability", 80).critical(),
        section("training-competency", 21, "Training & Competency", 40),
        section("business-continuity", 22, "Business Continuity & Incident Response", 50),
    ]
}

fn maturity_labels() -> BTreeMap<u8, String> {
    [
        (1, "Not started"),
        (2, "Initial"),
        (3, "Defined"),
        (4, "Managed"),
        (5, "Optimized"),
    ]
    .into_iter()
    .map(|(k, v)| (k, v.to_string()))
    .collect()
}

fn ask(id: &str, section: &str, text: &str, points: u32, category: &str) -> Question {
    Question::new(id, section, text, QuestionType::Boolean, points, category)
}

fn rate(id: &str, section: &str, text: &str, points: u32, category: &str) -> Question {
    Question::new(id, section, text, QuestionType::Scale1To5, points, category)
        .with_scale_labels(maturity_labels())
}

fn describe(id: &str, section: &str, text: &str, points: u32, category: &str) -> Question {
    Question::new(id, section, text, QuestionType::FreeText, points, category)
}

fn questions() -> Vec<Question> {
    vec![
        // 1. AI Governance Framework
        ask(
            "gov-01",
            "governance-framework",
            "Has the board or executive committee approved an enterprise AI governance policy?",
            15,
            "governance",
        )
        .blocker()
        .evidence(["Approved AI policy", "Board or committee minutes"])
        .roles(["Chief Executive Officer", "Chief Compliance Officer"]),
        rate(
            "gov-02",
            "governance-framework",
            "How mature is the AI governance committee's oversight of the model portfolio?",
            10,
            "governance",
        )
        .roles(["Chief Compliance Officer"]),
        ask(
            "gov-03",
            "governance-framework",
            "Is there a maintained inventory of all AI systems in GxP scope?",
            10,
            "inventory",
        )
        .blocker()
        .evidence(["AI system inventory"]),
        describe(
            "gov-04",
            "governance-framework",
            "Describe the escalation path for AI-related compliance incidents.",
            5,
            "governance",
        ),
        // 2. Regulatory Compliance Foundations
        ask(
            "reg-01",
            "regulatory-compliance",
            "Are applicable AI regulations (FDA, EMA, EU AI Act) mapped to internal controls?",
            15,
            "regulatory",
        )
        .blocker()
        .evidence(["Regulatory requirements traceability matrix"])
        .roles(["Head of Regulatory Affairs"]),
        ask(
            "reg-02",
            "regulatory-compliance",
            "Is 21 CFR Part 11 compliance confirmed for AI systems generating electronic records?",
            10,
            "part-11",
        )
        .blocker()
        .evidence(["Part 11 assessment"]),
        rate(
            "reg-03",
            "regulatory-compliance",
            "How current is regulatory intelligence monitoring for AI guidance?",
            5,
            "regulatory",
        ),
        // 3. Data Integrity & ALCOA+
        ask(
            "di-01",
            "data-integrity",
            "Do AI training and inference data pipelines meet ALCOA+ principles?",
            15,
            "data-integrity",
        )
        .blocker()
        .evidence(["Data integrity assessment", "Pipeline audit trail samples"]),
        ask(
            "di-02",
            "data-integrity",
            "Are audit trails retained for all data transformations feeding AI models?",
            10,
            "data-integrity",
        ),
        ask(
            "di-03",
            "data-integrity",
            "Are real-world evidence sources qualified for fitness-for-purpose?",
            10,
            "real-world-evidence",
        )
        .therapy_specific(),
        // 4. AI Model Validation
        ask(
            "mv-01",
            "ai-model-validation",
            "Is there a documented validation protocol for every production AI model?",
            15,
            "validation",
        )
        .blocker()
        .evidence(["Validation master plan", "Model validation protocols"])
        .roles(["Head of Data Science", "Validation Specialist"]),
        rate(
            "mv-02",
            "ai-model-validation",
            "How rigorous is performance testing across intended-use populations?",
            10,
            "validation",
        ),
        ask(
            "mv-03",
            "ai-model-validation",
            "Are generative model outputs tested for hallucination and factual accuracy?",
            15,
            "hallucination",
        )
        .tagged(["generative"])
        .model_specific()
        .blocker(),
        ask(
            "mv-04",
            "ai-model-validation",
            "Are biomarker models validated against companion diagnostic standards?",
            10,
            "biomarker",
        )
        .tagged(["oncology", "companion-diagnostics"])
        .therapy_specific(),
        // 5. Good Machine Learning Practice
        ask(
            "gmlp-01",
            "gmlp-framework",
            "Are Good Machine Learning Practice principles embedded in the development lifecycle?",
            10,
            "gmlp",
        ),
        ask(
            "gmlp-02",
            "gmlp-framework",
            "Are training and test datasets demonstrably independent?",
            10,
            "gmlp",
        )
        .blocker(),
        rate(
            "gmlp-03",
            "gmlp-framework",
            "How closely are clinical experts involved in model design?",
            5,
            "gmlp",
        )
        .relevant_to(["data-head", "ml-engineer"]),
        // 6. Algorithmic Bias & Fairness
        ask(
            "bias-01",
            "algorithm-bias",
            "Are models assessed for bias across demographic subgroups?",
            15,
            "fairness",
        )
        .blocker()
        .evidence(["Bias assessment report"]),
        describe(
            "bias-02",
            "algorithm-bias",
            "Describe mitigation actions taken for identified bias.",
            5,
            "fairness",
        ),
        ask(
            "bias-03",
            "algorithm-bias",
            "Are small-population effects on fairness metrics analyzed?",
            10,
            "small-populations",
        )
        .therapy_specific(),
        // 7. AI Interoperability
        ask(
            "int-01",
            "ai-interoperability",
            "Do AI systems exchange data using recognized standards such as HL7 FHIR or CDISC?",
            10,
            "interoperability",
        ),
        rate(
            "int-02",
            "ai-interoperability",
            "How well documented are AI system interfaces and data contracts?",
            5,
            "interoperability",
        ),
        // 8. Advanced Data Governance
        ask(
            "adg-01",
            "advanced-data-gov",
            "Is data lineage tracked end to end for AI datasets?",
            10,
            "data-governance",
        ),
        ask(
            "adg-02",
            "advanced-data-gov",
            "Are data stewardship roles assigned for each AI data domain?",
            5,
            "data-governance",
        ),
        ask(
            "adg-03",
            "advanced-data-gov",
            "Are patient data flows for patient-facing AI minimized and consented?",
            10,
            "privacy",
        )
        .tagged(["patient-safety"])
        .deployment_specific(),
        // 9. Technology-Specific Governance
        ask(
            "tsg-01",
            "tech-specific-governance",
            "Are technology-specific controls defined for each AI model family in use?",
            10,
            "technology-governance",
        ),
        ask(
            "tsg-02",
            "tech-specific-governance",
            "Are autonomous agent actions constrained by explicit permission boundaries?",
            15,
            "autonomy",
        )
        .tagged(["agentic"])
        .model_specific()
        .blocker(),
        ask(
            "tsg-03",
            "tech-specific-governance",
            "Are prompt and output filters in place for large language models?",
            10,
            "generative",
        )
        .model_specific(),
        ask(
            "tsg-04",
            "tech-specific-governance",
            "Are computer vision models monitored for image acquisition drift?",
            5,
            "imaging",
        )
        .model_specific(),
        // 10. General AI Validation
        ask(
            "avg-01",
            "ai-validation-general",
            "Is computer software assurance applied to AI-enabled systems?",
            10,
            "validation",
        ),
        rate(
            "avg-02",
            "ai-validation-general",
            "How comprehensive is periodic revalidation of AI systems?",
            5,
            "validation",
        ),
        // 11. Final Integration & Readiness
        ask(
            "fin-01",
            "final-integration",
            "Has an integrated readiness review been signed off by all accountable functions?",
            10,
            "readiness",
        ),
        describe(
            "fin-02",
            "final-integration",
            "Summarize residual risks accepted for production deployment.",
            5,
            "readiness",
        ),
        // 12. FDA Seven-Step Credibility Framework
        ask(
            "fda-01",
            "fda-seven-step",
            "Has the question of interest been defined for each AI model?",
            10,
            "credibility",
        )
        .blocker(),
        ask(
            "fda-02",
            "fda-seven-step",
            "Has model risk been assessed from model influence and decision consequence?",
            15,
            "credibility",
        )
        .blocker()
        .evidence(["Model risk assessment"]),
        ask(
            "fda-03",
            "fda-seven-step",
            "Is a credibility assessment plan documented and executed?",
            10,
            "credibility",
        ),
        ask(
            "fda-04",
            "fda-seven-step",
            "Is model adequacy for regulatory decision-making documented in submissions?",
            10,
            "submission",
        )
        .deployment_specific(),
        // 13. Context of Use Definition
        ask(
            "cou-01",
            "context-of-use",
            "Is the context of use documented for every AI model?",
            10,
            "context-of-use",
        )
        .blocker(),
        describe(
            "cou-02",
            "context-of-use",
            "Describe the boundaries outside which model outputs must not be used.",
            5,
            "context-of-use",
        ),
        // 14. AI Cybersecurity
        ask(
            "cyb-01",
            "cybersecurity",
            "Are AI systems covered by threat modelling that includes adversarial attacks?",
            15,
            "security",
        )
        .blocker(),
        ask(
            "cyb-02",
            "cybersecurity",
            "Are prompt-injection defenses tested for generative and agentic systems?",
            10,
            "generative",
        )
        .tagged(["agentic"])
        .model_specific(),
        rate(
            "cyb-03",
            "cybersecurity",
            "How mature is vulnerability management for ML dependencies?",
            5,
            "security",
        ),
        // 15. Privacy & Data Protection
        ask(
            "prv-01",
            "privacy-protection",
            "Have data protection impact assessments been completed for AI processing of personal data?",
            15,
            "privacy",
        )
        .blocker()
        .roles(["Data Privacy Officer"]),
        ask(
            "prv-02",
            "privacy-protection",
            "Are de-identification techniques validated against re-identification risk?",
            10,
            "privacy",
        ),
        // 16. Clinical Trial AI Applications
        ask(
            "ct-01",
            "clinical-trial-ai",
            "Are AI tools used in trials qualified under ICH E6 GCP expectations?",
            15,
            "gcp",
        )
        .tagged(["clinical-trial"])
        .deployment_specific()
        .blocker(),
        ask(
            "ct-02",
            "clinical-trial-ai",
            "Are AI-assisted patient recruitment criteria reviewed for equity?",
            10,
            "clinical",
        ),
        ask(
            "ct-03",
            "clinical-trial-ai",
            "Are tumour response assessments made by AI adjudicated by blinded readers?",
            10,
            "oncology",
        )
        .therapy_specific(),
        // 17. Pharmacovigilance
        ask(
            "pv-01",
            "pharmacovigilance",
            "Are AI-assisted case intake outputs reviewed by qualified safety staff?",
            15,
            "pharmacovigilance",
        )
        .blocker(),
        ask(
            "pv-02",
            "pharmacovigilance",
            "Is signal detection performance monitored against established methods?",
            10,
            "safety-signal",
        )
        .deployment_specific(),
        // 18. Change Control
        ask(
            "cc-01",
            "change-control",
            "Are model retraining and updates managed under change control?",
            10,
            "change-control",
        )
        .blocker(),
        ask(
            "cc-02",
            "change-control",
            "Is a predetermined change control plan maintained for adaptive models?",
            10,
            "change-control",
        ),
        // 19. Vendor Management
        ask(
            "vm-01",
            "vendor-management",
            "Are third-party AI vendors qualified through documented audits?",
            10,
            "vendor",
        ),
        ask(
            "vm-02",
            "vendor-management",
            "Are foundation model providers' data usage terms reviewed?",
            5,
            "generative",
        )
        .model_specific(),
        // 20. Human Oversight & Explainability
        ask(
            "ho-01",
            "human-oversight",
            "Is human review required before AI outputs affect GxP decisions?",
            15,
            "human-oversight",
        )
        .blocker(),
        rate(
            "ho-02",
            "human-oversight",
            "How explainable are model outputs to their intended reviewers?",
            10,
            "explainability",
        ),
        ask(
            "ho-03",
            "human-oversight",
            "Can humans interrupt or roll back autonomous agent actions?",
            10,
            "human-oversight",
        )
        .tagged(["agentic", "autonomy"])
        .model_specific()
        .blocker(),
        // 21. Training & Competency
        ask(
            "tr-01",
            "training-competency",
            "Have users of AI systems completed role-specific training?",
            5,
            "training",
        ),
        rate(
            "tr-02",
            "training-competency",
            "How well do training materials cover AI limitations?",
            5,
            "training",
        ),
        // 22. Business Continuity
        ask(
            "bc-01",
            "business-continuity",
            "Are fallback procedures defined for AI system outages?",
            10,
            "continuity",
        ),
        ask(
            "bc-02",
            "business-continuity",
            "Are AI incidents integrated into the corporate incident response plan?",
            5,
            "continuity",
        ),
    ]
}

fn mappings() -> Vec<PersonaSectionMapping> {
    let row = |persona: &str, sub: Option<&str>, section: &str, priority| {
        PersonaSectionMapping::new(persona, sub, section, priority)
    };
    let reviewer = |persona: &str, sub: Option<&str>, section: &str, priority| {
        PersonaSectionMapping::new(persona, sub, section, priority)
            .with_access(AccessLevel::Secondary, ResponsibilityType::Reviewer)
            .optional()
    };
    let approver = |persona: &str, sub: Option<&str>, section: &str, priority| {
        PersonaSectionMapping::new(persona, sub, section, priority)
            .with_access(AccessLevel::Primary, ResponsibilityType::Approver)
    };

    let data_head = Some("data-head");
    let ml_engineer = Some("ml-engineer");
    let data_scientist = Some("data-scientist");

    vec![
        // Executive leadership
        approver("executive-leadership", None, "governance-framework", 3),
        approver("executive-leadership", None, "regulatory-compliance", 3),
        approver("executive-leadership", None, "final-integration", 3),
        row("executive-leadership", None, "vendor-management", 2),
        reviewer("executive-leadership", None, "human-oversight", 2),
        row("executive-leadership", None, "business-continuity", 2),
        reviewer("executive-leadership", None, "training-competency", 1),
        reviewer("executive-leadership", Some("c-suite"), "algorithm-bias", 1),
        // Data science: head of data science
        row("data-science", data_head, "ai-model-validation", 3),
        row("data-science", data_head, "gmlp-framework", 3),
        row("data-science", data_head, "algorithm-bias", 3),
        reviewer("data-science", data_head, "ai-interoperability", 2),
        row("data-science", data_head, "advanced-data-gov", 3),
        row("data-science", data_head, "tech-specific-governance", 2),
        row("data-science", data_head, "ai-validation-general", 2),
        approver("data-science", data_head, "final-integration", 1),
        row("data-science", data_head, "fda-seven-step", 3),
        row("data-science", data_head, "context-of-use", 2),
        // Data science: ML engineer
        row("data-science", ml_engineer, "ai-model-validation", 3),
        row("data-science", ml_engineer, "gmlp-framework", 3),
        reviewer("data-science", ml_engineer, "algorithm-bias", 2),
        row("data-science", ml_engineer, "tech-specific-governance", 3),
        row("data-science", ml_engineer, "ai-validation-general", 3),
        reviewer("data-science", ml_engineer, "cybersecurity", 1),
        row("data-science", ml_engineer, "change-control", 2),
        // Data science: data scientist
        row("data-science", data_scientist, "ai-model-validation", 3),
        row("data-science", data_scientist, "algorithm-bias", 3),
        row("data-science", data_scientist, "ai-validation-general", 2),
        reviewer("data-science", data_scientist, "context-of-use", 2),
        row("data-science", data_scientist, "advanced-data-gov", 2),
        // IT & technology
        row("it-technology", None, "cybersecurity", 3),
        row("it-technology", None, "ai-interoperability", 3),
        row("it-technology", None, "business-continuity", 2),
        row("it-technology", None, "change-control", 2),
        reviewer("it-technology", None, "privacy-protection", 2),
        row("it-technology", Some("security-architect"), "tech-specific-governance", 2),
        approver("it-technology", Some("cio-cto"), "governance-framework", 2),
        // Regulatory & quality
        row("regulatory-quality", None, "regulatory-compliance", 3),
        row("regulatory-quality", None, "data-integrity", 3),
        row("regulatory-quality", None, "fda-seven-step", 3),
        row("regulatory-quality", None, "context-of-use", 3),
        row("regulatory-quality", None, "change-control", 2),
        reviewer("regulatory-quality", None, "pharmacovigilance", 2),
        reviewer("regulatory-quality", None, "training-competency", 1),
        row(
            "regulatory-quality",
            Some("validation-specialist"),
            "ai-validation-general",
            3,
        ),
        row(
            "regulatory-quality",
            Some("validation-specialist"),
            "ai-model-validation",
            2,
        ),
        // Legal & compliance
        row("legal-compliance", None, "privacy-protection", 3),
        reviewer("legal-compliance", None, "regulatory-compliance", 2),
        row("legal-compliance", None, "vendor-management", 3),
        reviewer("legal-compliance", None, "algorithm-bias", 2),
        reviewer("legal-compliance", None, "human-oversight", 2),
        // Clinical operations
        row("clinical-operations", None, "clinical-trial-ai", 3),
        row("clinical-operations", None, "pharmacovigilance", 3),
        row("clinical-operations", None, "human-oversight", 2),
        reviewer("clinical-operations", None, "data-integrity", 2),
        reviewer("clinical-operations", None, "context-of-use", 2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = builtin().expect("built-in catalog must validate");
        let stats = catalog.stats();
        assert_eq!(stats.sections, 22);
        assert_eq!(stats.questions, 60);
        assert_eq!(stats.personas, 7);
    }

    #[test]
    fn test_builtin_has_admin() {
        let catalog = builtin().expect("valid");
        let admin = catalog.get_persona(ADMIN_PERSONA).expect("admin exists");
        assert!(admin.is_admin);
    }

    #[test]
    fn test_builtin_is_reproducible() {
        let a = builtin().expect("valid");
        let b = builtin().expect("valid");
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_model_points() {
        let catalog = builtin().expect("valid");
        let points = |id: &str| {
            catalog
                .get_ai_model_type(id)
                .map(|m| m.complexity_points)
                .expect("model type exists")
        };
        assert_eq!(points("agentic-ai"), 20);
        assert_eq!(points("generative-ai"), 15);
    }
}

//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage. Section
//! tables are aligned by display width so multi-byte titles line up.

use super::{ReportError, ReportFormat, ReportGenerator, ReportMetadata};
use crate::catalog::CatalogStats;
use crate::engine::{AssessmentPreview, PreviewSection, ReadinessVerdict};
use std::fmt::Write as _;
use unicode_width::UnicodeWidthStr;

/// Longest section title shown before truncation.
const MAX_TITLE_WIDTH: usize = 44;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Pad `text` with spaces to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{text}{}", " ".repeat(width.saturating_sub(used)))
}

/// Cut `text` to at most `width` display columns, marking the cut.
fn truncate(text: &str, width: usize) -> String {
    if UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(1);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn header(&self, out: &mut String, title: &str) -> Result<(), ReportError> {
        writeln!(out, "{}", self.color(title, "bold"))?;
        writeln!(out, "{}", self.color("─".repeat(60).as_str(), "dim"))?;
        Ok(())
    }

    fn preview_body(&self, out: &mut String, preview: &AssessmentPreview) -> Result<(), ReportError> {
        let config = &preview.configuration;
        let role = config
            .sub_persona()
            .map_or_else(|| config.persona_id.clone(), |sub| format!("{} / {sub}", config.persona_id));
        writeln!(out, "{}  {role}", self.color("Persona:", "cyan"))?;
        if let Some(area) = config.primary_therapeutic_area() {
            writeln!(out, "{}  {area}", self.color("Therapeutic area:", "cyan"))?;
        }
        if !config.ai_model_type_ids.is_empty() {
            let ids: Vec<&str> = config.ai_model_type_ids.iter().map(String::as_str).collect();
            writeln!(out, "{}  {}", self.color("Model types:", "cyan"), ids.join(", "))?;
        }
        if !config.deployment_scenario_ids.is_empty() {
            let ids: Vec<&str> = config
                .deployment_scenario_ids
                .iter()
                .map(String::as_str)
                .collect();
            writeln!(out, "{}  {}", self.color("Deployments:", "cyan"), ids.join(", "))?;
        }
        writeln!(out)?;

        self.section_table(out, &preview.sections)?;
        writeln!(out)?;

        writeln!(
            out,
            "Sections: {}   Questions: {}   Points: {}",
            preview.total_sections, preview.total_questions, preview.total_points
        )?;
        writeln!(
            out,
            "Critical sections: {}   Production blockers: {}",
            preview.critical_sections,
            self.color(&preview.production_blockers.to_string(), "yellow")
        )?;
        writeln!(out, "Estimated time: {}", preview.estimated_time)?;

        let complexity = &preview.complexity;
        writeln!(
            out,
            "Complexity: {} ({})  therapy {} + model {} + deployment {}",
            complexity.total_complexity,
            self.color(complexity.tier.name(), "yellow"),
            complexity.therapy_score,
            complexity.model_score,
            complexity.deployment_score
        )?;
        for skipped in &complexity.skipped_references {
            writeln!(
                out,
                "{} unknown {} '{}' ignored",
                self.color("!", "yellow"),
                skipped.kind,
                skipped.id
            )?;
        }
        for gap in &preview.critical_gaps {
            writeln!(
                out,
                "{} critical section '{gap}' has no eligible questions",
                self.color("!", "red")
            )?;
        }
        Ok(())
    }

    fn section_table(&self, out: &mut String, sections: &[PreviewSection]) -> Result<(), ReportError> {
        let titles: Vec<String> = sections
            .iter()
            .map(|s| truncate(&s.resolved.section.title, MAX_TITLE_WIDTH))
            .collect();
        let title_width = titles
            .iter()
            .map(|t| UnicodeWidthStr::width(t.as_str()))
            .chain(std::iter::once("Section".len()))
            .max()
            .unwrap_or_default();

        writeln!(
            out,
            "{}",
            self.color(
                &format!(
                    "{:>3}  {}  {:>8}  {:<9}  {:>9}  {:>8}  {:>6}",
                    "#",
                    pad("Section", title_width),
                    "Priority",
                    "Role",
                    "Questions",
                    "Blockers",
                    "Points"
                ),
                "dim"
            )
        )?;

        for (section, title) in sections.iter().zip(&titles) {
            let marker = if section.resolved.section.is_critical_blocker {
                self.color("*", "red")
            } else {
                " ".to_string()
            };
            writeln!(
                out,
                "{:>3}{marker} {}  {:>8}  {:<9}  {:>9}  {:>8}  {:>6}",
                section.resolved.section.section_number,
                pad(title, title_width),
                section.resolved.mapping.priority_score,
                section.resolved.mapping.responsibility_type.name(),
                section.resolved.question_count,
                section.blocker_count,
                section.points
            )?;
        }
        Ok(())
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_preview_report(
        &self,
        preview: &AssessmentPreview,
        _metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        self.header(&mut out, "Assessment Preview")?;
        self.preview_body(&mut out, preview)?;
        Ok(out)
    }

    fn generate_readiness_report(
        &self,
        preview: &AssessmentPreview,
        verdict: &ReadinessVerdict,
        _metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        self.header(&mut out, "Production Readiness")?;

        let status = if verdict.production_ready {
            self.color("PRODUCTION READY", "green")
        } else {
            self.color("NOT PRODUCTION READY", "red")
        };
        writeln!(out, "{}  {status}", self.color("Verdict:", "cyan"))?;
        writeln!(
            out,
            "Completion: {:.1}% ({} of {} points)",
            verdict.completion_ratio * 100.0,
            verdict.answered_points,
            verdict.total_points
        )?;
        writeln!(out, "Weighted score: {:.1}%", verdict.weighted_score * 100.0)?;
        for condition in &verdict.failing {
            writeln!(out, "{} {condition}", self.color("✗", "red"))?;
        }
        for gap in &verdict.critical_gaps {
            writeln!(
                out,
                "{} critical section '{gap}' passes with no eligible questions",
                self.color("!", "yellow")
            )?;
        }
        writeln!(out)?;
        self.preview_body(&mut out, preview)?;
        Ok(out)
    }

    fn generate_catalog_report(
        &self,
        stats: &CatalogStats,
        fingerprint: &str,
        _metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        self.header(&mut out, "Catalog")?;
        writeln!(out, "{}  {fingerprint}", self.color("Fingerprint:", "cyan"))?;
        let rows = [
            ("Personas", stats.personas),
            ("Sub-personas", stats.sub_personas),
            ("Therapeutic areas", stats.therapeutic_areas),
            ("AI model types", stats.ai_model_types),
            ("Deployment scenarios", stats.deployment_scenarios),
            ("Sections", stats.sections),
            ("Critical sections", stats.critical_sections),
            ("Questions", stats.questions),
            ("Blocker questions", stats.blocker_questions),
            ("Mappings", stats.mappings),
        ];
        for (label, count) in rows {
            writeln!(out, "{}{count:>6}", pad(label, 22))?;
        }
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

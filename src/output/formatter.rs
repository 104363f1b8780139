//! Output formatters for match and recommendation reports
//!
//! Presentation only: the demo/synthetic condition arrives as the
//! `demo_mode` flag on the report and is rendered here as a banner, never
//! encoded back into the data.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::matching::matcher::CategoryResult;
use crate::matching::recommend::RecommendationReport;
use crate::matching::score::{MatchBand, MatchReport};
use colored::Colorize;
use serde_json::json;
use std::fmt::Write as _;
use std::path::Path;

/// Trait for rendering a match report (and optional recommendations) to text.
pub trait OutputFormatter {
    fn format_report(
        &self,
        report: &MatchReport,
        recommendations: Option<&RecommendationReport>,
    ) -> Result<String>;

    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and a per-category breakdown.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for piping into other tools.
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports.
pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        match color {
            "green" => text.green().bold().to_string(),
            "yellow" => text.yellow().bold().to_string(),
            "red" => text.red().bold().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.bold().to_string(),
        }
    }

    fn band_label(&self, band: MatchBand) -> String {
        match band {
            MatchBand::Strong => self.paint("Strong match", "green"),
            MatchBand::Good => self.paint("Good match", "green"),
            MatchBand::Fair => self.paint("Fair match", "yellow"),
            MatchBand::Weak => self.paint("Weak match", "red"),
        }
    }

    fn write_category(&self, out: &mut String, name: &str, category: &CategoryResult) {
        writeln!(out, "\n{}", self.paint(name, "cyan")).ok();
        if category.total == 0 {
            writeln!(out, "  (none defined by the job)").ok();
            return;
        }
        writeln!(
            out,
            "  Matched {}/{} ({:.1}%)",
            category.matched, category.total, category.match_percentage
        )
        .ok();

        if self.detailed {
            for m in &category.exact_matches {
                writeln!(out, "  = {} (exact: {})", m.resume_skill, m.job_skill).ok();
            }
            for m in &category.partial_matches {
                writeln!(out, "  ~ {} (partial: {})", m.resume_skill, m.job_skill).ok();
            }
        }
        if !category.missing.is_empty() {
            writeln!(out, "  Missing: {}", category.missing.join(", ")).ok();
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(
        &self,
        report: &MatchReport,
        recommendations: Option<&RecommendationReport>,
    ) -> Result<String> {
        let mut out = String::new();

        if report.demo_mode {
            let banner = "[DEMO MODE]";
            writeln!(out, "{}", self.paint(banner, "yellow")).ok();
            if let Some(note) = &report.demo_note {
                writeln!(out, "{}", note).ok();
            }
            writeln!(out).ok();
        }

        writeln!(
            out,
            "Overall match: {} ({})",
            self.paint(
                &format!("{:.1}%", report.overall_match_percentage),
                match report.band() {
                    MatchBand::Strong | MatchBand::Good => "green",
                    MatchBand::Fair => "yellow",
                    MatchBand::Weak => "red",
                }
            ),
            self.band_label(report.band())
        )
        .ok();

        self.write_category(&mut out, "Required skills", &report.required_skills);
        self.write_category(&mut out, "Preferred skills", &report.preferred_skills);

        if self.detailed && !report.resume_skills.is_empty() {
            writeln!(out, "\n{}", self.paint("Resume skills", "cyan")).ok();
            writeln!(out, "  {}", report.resume_skills.join(", ")).ok();
        }

        if let Some(rec) = recommendations {
            writeln!(out, "\n{}", self.paint("Assessment", "cyan")).ok();
            writeln!(out, "  {}", rec.overall_assessment).ok();

            if !rec.priority_skills.is_empty() {
                writeln!(out, "  Priority skills: {}", rec.priority_skills.join(", ")).ok();
            }
            if !rec.nice_to_have_skills.is_empty() {
                writeln!(
                    out,
                    "  Nice to have: {}",
                    rec.nice_to_have_skills.join(", ")
                )
                .ok();
            }
            for item in &rec.action_items {
                writeln!(out, "  - {}", item).ok();
            }
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(
        &self,
        report: &MatchReport,
        recommendations: Option<&RecommendationReport>,
    ) -> Result<String> {
        let value = match recommendations {
            Some(rec) => json!({
                "match_analysis": report,
                "recommendations": rec,
            }),
            None => json!({ "match_analysis": report }),
        };

        Ok(if self.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        })
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(
        &self,
        report: &MatchReport,
        recommendations: Option<&RecommendationReport>,
    ) -> Result<String> {
        let mut out = String::new();

        writeln!(out, "# Skill Match Report\n").ok();
        if report.demo_mode {
            writeln!(out, "> **Demo mode**: {}\n", report.demo_note.as_deref().unwrap_or("")).ok();
        }
        writeln!(
            out,
            "**Overall match: {:.1}%**\n",
            report.overall_match_percentage
        )
        .ok();

        for (name, category) in [
            ("Required skills", &report.required_skills),
            ("Preferred skills", &report.preferred_skills),
        ] {
            writeln!(out, "## {}\n", name).ok();
            if category.total == 0 {
                writeln!(out, "_None defined by the job._\n").ok();
                continue;
            }
            writeln!(
                out,
                "Matched {}/{} ({:.1}%)\n",
                category.matched, category.total, category.match_percentage
            )
            .ok();
            for m in &category.exact_matches {
                writeln!(out, "- `{}`: exact match for `{}`", m.resume_skill, m.job_skill).ok();
            }
            for m in &category.partial_matches {
                writeln!(out, "- `{}`: partial match for `{}`", m.resume_skill, m.job_skill).ok();
            }
            for missing in &category.missing {
                writeln!(out, "- `{}`: missing", missing).ok();
            }
            writeln!(out).ok();
        }

        if let Some(rec) = recommendations {
            writeln!(out, "## Recommendations\n").ok();
            writeln!(out, "{}\n", rec.overall_assessment).ok();
            if !rec.priority_skills.is_empty() {
                writeln!(out, "**Priority skills:** {}\n", rec.priority_skills.join(", ")).ok();
            }
            if !rec.nice_to_have_skills.is_empty() {
                writeln!(
                    out,
                    "**Nice to have:** {}\n",
                    rec.nice_to_have_skills.join(", ")
                )
                .ok();
            }
            for item in &rec.action_items {
                writeln!(out, "- {}", item).ok();
            }
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Coordinates the formatters and handles saving to disk.
pub struct ReportGenerator {
    console: ConsoleFormatter,
    json: JsonFormatter,
    markdown: MarkdownFormatter,
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console: ConsoleFormatter::new(use_colors, detailed),
            json: JsonFormatter::new(true),
            markdown: MarkdownFormatter,
        }
    }

    pub fn generate(
        &self,
        format: OutputFormat,
        report: &MatchReport,
        recommendations: Option<&RecommendationReport>,
    ) -> Result<String> {
        match format {
            OutputFormat::Console => self.console.format_report(report, recommendations),
            OutputFormat::Json => self.json.format_report(report, recommendations),
            OutputFormat::Markdown => self.markdown.format_report(report, recommendations),
        }
    }

    pub fn save(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::SkillMatcher;

    fn sample_report() -> MatchReport {
        let matcher = SkillMatcher::default();
        matcher.analyze(
            &["Python".to_string(), "React".to_string()],
            &["python".to_string(), "java".to_string()],
            &["AWS".to_string()],
        )
    }

    #[test]
    fn test_json_output_carries_wire_field_names() {
        let report = sample_report();
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_report(&report, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let analysis = &value["match_analysis"];
        assert!(analysis["overall_match_percentage"].is_number());
        assert!(analysis["required_skills"]["exact_matches"].is_array());
        assert!(analysis["preferred_skills"]["missing"].is_array());
        assert!(analysis["analysis_summary"]["fair_match"].is_boolean());
        assert_eq!(analysis["demo_mode"], false);
        assert!(value.get("recommendations").is_none());
    }

    #[test]
    fn test_json_output_includes_recommendations_when_present() {
        let matcher = SkillMatcher::default();
        let report = sample_report();
        let rec = matcher.recommend(&report);
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_report(&report, Some(&rec)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert!(value["recommendations"]["overall_assessment"].is_string());
        assert!(value["recommendations"]["priority_skills"].is_array());
    }

    #[test]
    fn test_console_output_mentions_missing_skills() {
        let report = sample_report();
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_report(&report, None).unwrap();

        assert!(output.contains("Overall match"));
        assert!(output.contains("java"));
        assert!(output.contains("AWS"));
    }

    #[test]
    fn test_console_demo_banner() {
        let matcher = SkillMatcher::default();
        let report = matcher.analyze(&["Docker".to_string()], &[], &[]);
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_report(&report, None).unwrap();

        assert!(output.contains("[DEMO MODE]"));
    }

    #[test]
    fn test_markdown_output_sections() {
        let report = sample_report();
        let output = MarkdownFormatter.format_report(&report, None).unwrap();

        assert!(output.contains("# Skill Match Report"));
        assert!(output.contains("## Required skills"));
        assert!(output.contains("## Preferred skills"));
        assert!(output.contains("exact match"));
    }
}

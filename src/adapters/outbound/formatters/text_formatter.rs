use crate::application::read_models::{AssessmentReportView, BriefView, CveListView, HistoryView};
use crate::assessment::policies::{MaturityTier, RiskTier, SeverityTier};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// Width of the horizontal rule under section titles
const RULE_WIDTH: usize = 60;

/// TextFormatter adapter for terminal-friendly plain text reports
///
/// This adapter implements the ReportFormatter port for the default console
/// output. Tiers are coloured with owo-colors unless colour is disabled
/// (`--no-color`, `NO_COLOR`, or output redirected to a file).
pub struct TextFormatter {
    use_color: bool,
}

impl TextFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn risk(&self, text: &str, tier: RiskTier) -> String {
        if !self.use_color {
            return text.to_string();
        }
        match tier {
            RiskTier::Good => text.green().to_string(),
            RiskTier::Warn => text.yellow().to_string(),
            RiskTier::Bad => text.red().to_string(),
        }
    }

    fn severity(&self, text: &str, tier: SeverityTier) -> String {
        if !self.use_color {
            return text.to_string();
        }
        match tier {
            SeverityTier::Critical => text.red().bold().to_string(),
            SeverityTier::High => text.bright_red().to_string(),
            SeverityTier::Other => text.dimmed().to_string(),
        }
    }

    fn maturity(&self, text: &str, tier: MaturityTier) -> String {
        if !self.use_color {
            return text.to_string();
        }
        match tier {
            MaturityTier::High => text.green().to_string(),
            MaturityTier::Medium => text.yellow().to_string(),
            MaturityTier::Low => text.red().to_string(),
        }
    }

    fn title(&self, text: &str) -> String {
        let rule = "─".repeat(RULE_WIDTH);
        if self.use_color {
            format!("{}\n{}\n", text.bold(), rule.dimmed())
        } else {
            format!("{}\n{}\n", text, rule)
        }
    }

    fn warning(&self, text: &str) -> String {
        if self.use_color {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Helper methods for rendering sections
impl TextFormatter {
    fn render_header(&self, out: &mut String, report: &AssessmentReportView) -> std::fmt::Result {
        let entity = &report.entity;
        out.push_str(&self.title(&format!(
            "{} by {}",
            entity.product_name, entity.vendor
        )));
        writeln!(out, "  Category:          {}", entity.taxonomy)?;
        writeln!(out, "  Entity confidence: {}%", entity.confidence_percent)?;
        if let Some(timestamp) = &report.timestamp {
            writeln!(out, "  Assessed:          {}", timestamp)?;
        }
        writeln!(out)
    }

    fn render_trust_score(
        &self,
        out: &mut String,
        report: &AssessmentReportView,
    ) -> std::fmt::Result {
        let score = &report.trust_score;
        out.push_str(&self.title("Trust Score"));
        writeln!(
            out,
            "  {}  [{}]  confidence: {}",
            self.risk(&format!("{}/100", score.value), score.tier),
            self.risk(score.tier.label(), score.tier),
            score.confidence
        )?;
        if !score.rationale.trim().is_empty() {
            writeln!(out, "  {}", score.rationale.trim())?;
        }
        writeln!(out)?;

        if !report.breakdown.is_empty() {
            let width = report
                .breakdown
                .iter()
                .map(|item| item.component.chars().count())
                .max()
                .unwrap_or(0);
            for item in &report.breakdown {
                writeln!(
                    out,
                    "  {:<width$}  {}  weight {:>3}%",
                    item.component,
                    self.risk(&format!("{:>3}", item.score), item.tier),
                    item.weight_percent,
                    width = width
                )?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn render_brief(
        &self,
        out: &mut String,
        brief: &BriefView,
        known_exploited: bool,
    ) -> std::fmt::Result {
        out.push_str(&self.title("Security Brief"));

        if let Some(description) = &brief.description {
            writeln!(out, "  {}", description)?;
        }
        if let Some(usage) = &brief.usage {
            writeln!(out, "  Usage: {}", usage)?;
        }
        if let Some(reputation) = &brief.vendor_reputation {
            writeln!(
                out,
                "  Vendor reputation (PSIRT {}): {}",
                self.maturity(&reputation.psirt_maturity, reputation.tier),
                reputation.summary
            )?;
        }
        if let Some(trends) = &brief.vulnerability_trends {
            writeln!(
                out,
                "  Vulnerability trends: {} critical, {} high, {} medium. {}",
                trends.critical_count, trends.high_count, trends.medium_count, trends.summary
            )?;
        }
        if let Some(incidents) = &brief.incidents {
            writeln!(out, "  Incidents: {}", incidents.summary)?;
        }
        if known_exploited {
            writeln!(
                out,
                "  {}",
                self.warning("⚠ Known Exploited Vulnerability (CISA KEV)")
            )?;
        }
        if let Some(data) = &brief.data_handling {
            writeln!(out, "  Data handling: {}", data.summary)?;
            if let Some(encryption) = &data.encryption {
                writeln!(out, "    Encryption: {}", encryption)?;
            }
            if !data.compliance.is_empty() {
                writeln!(out, "    Compliance: {}", data.compliance.join(", "))?;
            }
        }
        if let Some(controls) = &brief.controls {
            writeln!(out, "  Controls: {}", controls.summary)?;
            writeln!(out, "    Access control: {}", controls.access_control)?;
            writeln!(out, "    Logging: {}", controls.logging)?;
        }
        writeln!(out)
    }

    fn render_cves(&self, out: &mut String, cves: &CveListView) -> std::fmt::Result {
        out.push_str(&self.title("Recent CVEs"));
        for cve in &cves.shown {
            writeln!(
                out,
                "  {:<16} {:<10} {:>4.1}  {}",
                cve.id,
                self.severity(&cve.severity, cve.tier),
                cve.score,
                cve.description
            )?;
        }
        if cves.is_truncated() {
            writeln!(out, "  ({})", cves.summary_line())?;
        }
        writeln!(out)
    }

    fn render_remaining(&self, out: &mut String, report: &AssessmentReportView) -> std::fmt::Result {
        if !report.kev_entries.is_empty() {
            out.push_str(&self.title("CISA Known Exploited Vulnerabilities"));
            for entry in &report.kev_entries {
                writeln!(
                    out,
                    "  {}  {} (added {}, due {})",
                    entry.cve_id, entry.vulnerability, entry.date_added, entry.due_date
                )?;
            }
            writeln!(out)?;
        }

        if !report.alternatives.is_empty() {
            out.push_str(&self.title("Safer Alternatives"));
            for alternative in &report.alternatives {
                let score = alternative
                    .trust_score
                    .map(|s| format!(" [{}/100]", s))
                    .unwrap_or_default();
                writeln!(
                    out,
                    "  • {} ({}){}: {}",
                    alternative.name, alternative.vendor, score, alternative.rationale
                )?;
            }
            writeln!(out)?;
        }

        if !report.evidence_sources.is_empty() {
            out.push_str(&self.title("Evidence Sources"));
            for source in &report.evidence_sources {
                let count = source
                    .count
                    .map(|c| format!(", {} records", c))
                    .unwrap_or_default();
                writeln!(
                    out,
                    "  • {} <{}> (retrieved {}{})",
                    source.source_type, source.url, source.retrieved_at, count
                )?;
            }
        }
        Ok(())
    }
}

impl ReportFormatter for TextFormatter {
    fn format_report(&self, report: &AssessmentReportView) -> Result<String> {
        let mut out = String::new();

        self.render_header(&mut out, report)?;
        self.render_trust_score(&mut out, report)?;
        if let Some(brief) = &report.brief {
            self.render_brief(&mut out, brief, report.known_exploited)?;
        }
        if let Some(cves) = &report.cves {
            self.render_cves(&mut out, cves)?;
        }
        self.render_remaining(&mut out, report)?;

        Ok(out)
    }

    fn format_history(&self, history: &HistoryView) -> Result<String> {
        let mut out = self.title("Recent Assessments");

        if history.is_empty() {
            writeln!(out, "  No assessments yet")?;
            return Ok(out);
        }

        for item in &history.items {
            writeln!(
                out,
                "  {:>2}. {:<30} {}  {}",
                item.position,
                item.product_name,
                self.risk(&format!("{:>3}/100", item.trust_score), item.tier),
                item.timestamp.as_deref().unwrap_or("")
            )?;
        }
        if history.total_cached > history.items.len() {
            writeln!(
                out,
                "  ({} more in history)",
                history.total_cached - history.items.len()
            )?;
        }

        Ok(out)
    }
}

use crate::application::read_models::{
    AlternativeView, AssessmentReportView, BreakdownItemView, BriefView, CveListView,
    EvidenceView, HistoryView, KevEntryView,
};
use crate::assessment::policies::{MaturityTier, RiskTier, SeverityTier};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the score breakdown
const BREAKDOWN_TABLE_HEADER: &str = "| Component | Score | Weight | Tier |\n";

/// Markdown table separator line for the score breakdown
const BREAKDOWN_TABLE_SEPARATOR: &str = "|-----------|-------|--------|------|\n";

/// Markdown table header for CVE information
const CVE_TABLE_HEADER: &str = "| CVE ID | Severity | CVSS | Published | Description |\n";

/// Markdown table separator line for CVE table
const CVE_TABLE_SEPARATOR: &str = "|--------|----------|------|-----------|-------------|\n";

const KEV_TABLE_HEADER: &str = "| CVE ID | Vulnerability | Date Added | Due Date |\n";
const KEV_TABLE_SEPARATOR: &str = "|--------|---------------|------------|----------|\n";

const ALTERNATIVES_TABLE_HEADER: &str = "| Product | Vendor | Trust Score | Rationale |\n";
const ALTERNATIVES_TABLE_SEPARATOR: &str = "|---------|--------|-------------|-----------|\n";

const HISTORY_TABLE_HEADER: &str = "| # | Product | Trust Score | Tier | Assessed |\n";
const HISTORY_TABLE_SEPARATOR: &str = "|---|---------|-------------|------|----------|\n";

/// MarkdownFormatter adapter for rendering assessment reports as Markdown
///
/// This adapter implements the ReportFormatter port for Markdown format,
/// suitable for pasting into tickets or committing next to a vendor review.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn tier_badge(tier: RiskTier) -> &'static str {
        match tier {
            RiskTier::Good => "🟢 good",
            RiskTier::Warn => "🟡 warn",
            RiskTier::Bad => "🔴 bad",
        }
    }

    fn severity_badge(tier: SeverityTier) -> &'static str {
        match tier {
            SeverityTier::Critical => "🔴",
            SeverityTier::High => "🟠",
            SeverityTier::Other => "⚪",
        }
    }

    fn maturity_badge(tier: MaturityTier) -> &'static str {
        match tier {
            MaturityTier::High => "🟢",
            MaturityTier::Medium => "🟡",
            MaturityTier::Low => "🔴",
        }
    }

    fn link(text: &str, url: &str) -> String {
        if url.trim().is_empty() {
            Self::escape_markdown_table_cell(text)
        } else {
            format!("[{}]({})", Self::escape_markdown_table_cell(text), url.trim())
        }
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    /// Renders the header section
    fn render_header(&self, output: &mut String, report: &AssessmentReportView) {
        let entity = &report.entity;
        output.push_str(&format!(
            "# Security Assessment: {}\n\n",
            entity.product_name
        ));
        output.push_str(&format!("**Vendor:** {}  \n", entity.vendor));
        output.push_str(&format!("**Category:** {}  \n", entity.taxonomy));
        output.push_str(&format!(
            "**Entity Confidence:** {}%  \n",
            entity.confidence_percent
        ));
        if let Some(timestamp) = &report.timestamp {
            output.push_str(&format!("**Assessed:** {}  \n", timestamp));
        }
        output.push('\n');
    }

    /// Renders the trust score and its breakdown
    fn render_trust_score(&self, output: &mut String, report: &AssessmentReportView) {
        let score = &report.trust_score;
        output.push_str("## Trust Score\n\n");
        output.push_str(&format!(
            "**{}/100** {} (confidence: {})\n\n",
            score.value,
            Self::tier_badge(score.tier),
            score.confidence
        ));
        if !score.rationale.trim().is_empty() {
            output.push_str(&format!("{}\n\n", score.rationale.trim()));
        }

        if !report.breakdown.is_empty() {
            self.render_breakdown(output, &report.breakdown);
        }
    }

    fn render_breakdown(&self, output: &mut String, breakdown: &[BreakdownItemView]) {
        output.push_str("### Score Breakdown\n\n");
        output.push_str(BREAKDOWN_TABLE_HEADER);
        output.push_str(BREAKDOWN_TABLE_SEPARATOR);
        for item in breakdown {
            output.push_str(&format!(
                "| {} | {} | {}% | {} |\n",
                Self::escape_markdown_table_cell(&item.component),
                item.score,
                item.weight_percent,
                Self::tier_badge(item.tier)
            ));
        }
        output.push('\n');
    }

    /// Renders the narrative security brief
    fn render_brief(&self, output: &mut String, brief: &BriefView, known_exploited: bool) {
        output.push_str("## Security Brief\n\n");

        if let Some(description) = &brief.description {
            output.push_str(&format!("### Overview\n\n{}\n\n", description));
        }
        if let Some(usage) = &brief.usage {
            output.push_str(&format!("### Usage\n\n{}\n\n", usage));
        }
        if let Some(reputation) = &brief.vendor_reputation {
            output.push_str("### Vendor Reputation\n\n");
            output.push_str(&format!(
                "**PSIRT Maturity:** {} {}\n\n",
                Self::maturity_badge(reputation.tier),
                reputation.psirt_maturity
            ));
            output.push_str(&format!("{}\n\n", reputation.summary));
        }
        if let Some(trends) = &brief.vulnerability_trends {
            output.push_str("### Vulnerability Trends\n\n");
            output.push_str(&format!(
                "- Critical: {}\n- High: {}\n- Medium: {}\n\n",
                trends.critical_count, trends.high_count, trends.medium_count
            ));
            output.push_str(&format!("{}\n\n", trends.summary));
        }
        if let Some(incidents) = &brief.incidents {
            output.push_str("### Incidents\n\n");
            output.push_str(&format!("{}\n\n", incidents.summary));
        }
        if known_exploited {
            output.push_str(
                "> ⚠️ **Known Exploited Vulnerability:** listed in the CISA KEV catalog\n\n",
            );
        }
        if let Some(data) = &brief.data_handling {
            output.push_str("### Data Handling\n\n");
            output.push_str(&format!("{}\n\n", data.summary));
            if let Some(encryption) = &data.encryption {
                output.push_str(&format!("- **Encryption:** {}\n", encryption));
            }
            if !data.compliance.is_empty() {
                output.push_str(&format!(
                    "- **Compliance:** {}\n",
                    data.compliance.join(", ")
                ));
            }
            output.push('\n');
        }
        if let Some(controls) = &brief.controls {
            output.push_str("### Controls\n\n");
            output.push_str(&format!("{}\n\n", controls.summary));
            output.push_str(&format!(
                "- **Access Control:** {}\n- **Logging:** {}\n\n",
                controls.access_control, controls.logging
            ));
        }
    }

    fn render_kev_entries(&self, output: &mut String, entries: &[KevEntryView]) {
        output.push_str("## CISA Known Exploited Vulnerabilities\n\n");
        output.push_str(KEV_TABLE_HEADER);
        output.push_str(KEV_TABLE_SEPARATOR);
        for entry in entries {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::link(&entry.cve_id, &entry.url),
                Self::escape_markdown_table_cell(&entry.vulnerability),
                Self::escape_markdown_table_cell(&entry.date_added),
                Self::escape_markdown_table_cell(&entry.due_date)
            ));
        }
        output.push('\n');
    }

    fn render_cves(&self, output: &mut String, cves: &CveListView) {
        output.push_str("## Recent CVEs\n\n");
        output.push_str(CVE_TABLE_HEADER);
        output.push_str(CVE_TABLE_SEPARATOR);
        for cve in &cves.shown {
            output.push_str(&format!(
                "| {} | {} {} | {:.1} | {} | {} |\n",
                Self::link(&cve.id, &cve.url),
                Self::severity_badge(cve.tier),
                Self::escape_markdown_table_cell(&cve.severity),
                cve.score,
                Self::escape_markdown_table_cell(&cve.published),
                Self::escape_markdown_table_cell(&cve.description)
            ));
        }
        output.push('\n');
        if cves.is_truncated() {
            output.push_str(&format!("*{}*\n\n", cves.summary_line()));
        }
    }

    fn render_alternatives(&self, output: &mut String, alternatives: &[AlternativeView]) {
        output.push_str("## Safer Alternatives\n\n");
        output.push_str(ALTERNATIVES_TABLE_HEADER);
        output.push_str(ALTERNATIVES_TABLE_SEPARATOR);
        for alternative in alternatives {
            let score = alternative
                .trust_score
                .map_or("N/A".to_string(), |s| format!("{}/100", s));
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&alternative.name),
                Self::escape_markdown_table_cell(&alternative.vendor),
                score,
                Self::escape_markdown_table_cell(&alternative.rationale)
            ));
        }
        output.push('\n');
    }

    fn render_evidence(&self, output: &mut String, sources: &[EvidenceView]) {
        output.push_str("## Evidence Sources\n\n");
        for source in sources {
            let count = source
                .count
                .map(|c| format!(" ({} records)", c))
                .unwrap_or_default();
            output.push_str(&format!(
                "- {}{}, retrieved {}\n",
                Self::link(&source.source_type, &source.url),
                count,
                source.retrieved_at
            ));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AssessmentReportView) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, report);
        self.render_trust_score(&mut output, report);

        if let Some(brief) = &report.brief {
            self.render_brief(&mut output, brief, report.known_exploited);
        }
        if !report.kev_entries.is_empty() {
            self.render_kev_entries(&mut output, &report.kev_entries);
        }
        if let Some(cves) = &report.cves {
            self.render_cves(&mut output, cves);
        }
        if !report.alternatives.is_empty() {
            self.render_alternatives(&mut output, &report.alternatives);
        }
        if !report.evidence_sources.is_empty() {
            self.render_evidence(&mut output, &report.evidence_sources);
        }

        Ok(output)
    }

    fn format_history(&self, history: &HistoryView) -> Result<String> {
        let mut output = String::from("## Recent Assessments\n\n");

        if history.is_empty() {
            output.push_str("*No assessments yet*\n");
            return Ok(output);
        }

        output.push_str(HISTORY_TABLE_HEADER);
        output.push_str(HISTORY_TABLE_SEPARATOR);
        for item in &history.items {
            output.push_str(&format!(
                "| {} | {} | {}/100 | {} | {} |\n",
                item.position,
                Self::escape_markdown_table_cell(&item.product_name),
                item.trust_score,
                Self::tier_badge(item.tier),
                item.timestamp.as_deref().unwrap_or("N/A")
            ));
        }

        Ok(output)
    }
}

//! Report view structs for read model
//!
//! These structs are the display-ready shape of an `AssessmentResult`:
//! every tier is already resolved, every optional section is either present
//! or `None`, and list truncation has already happened.

use crate::assessment::domain::{Controls, VulnerabilityTrends};
use crate::assessment::policies::{MaturityTier, RiskTier, SeverityTier};
use serde::Serialize;

/// Main read model for one assessment report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReportView {
    pub entity: EntityView,
    pub trust_score: TrustScoreView,
    pub breakdown: Vec<BreakdownItemView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brief: Option<BriefView>,
    /// KEV flag, surfaced separately from the incident summary text
    pub known_exploited: bool,
    pub evidence_sources: Vec<EvidenceView>,
    pub alternatives: Vec<AlternativeView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cves: Option<CveListView>,
    pub kev_entries: Vec<KevEntryView>,
    /// Human-formatted creation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityView {
    pub product_name: String,
    pub vendor: String,
    pub taxonomy: String,
    pub confidence_percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrustScoreView {
    pub value: u32,
    pub tier: RiskTier,
    pub confidence: String,
    pub rationale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownItemView {
    pub component: String,
    pub score: u32,
    pub weight_percent: u32,
    pub tier: RiskTier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BriefView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_reputation: Option<VendorReputationView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vulnerability_trends: Option<VulnerabilityTrends>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incidents: Option<IncidentsView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_handling: Option<DataHandlingView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls: Option<Controls>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorReputationView {
    pub summary: String,
    pub psirt_maturity: String,
    pub tier: MaturityTier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidentsView {
    pub summary: String,
    pub has_kev: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataHandlingView {
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption: Option<String>,
    /// Distinct certification labels in first-seen order
    pub compliance: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvidenceView {
    pub source_type: String,
    pub url: String,
    pub retrieved_at: String,
    /// Record count; `None` when absent or zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativeView {
    pub name: String,
    pub vendor: String,
    pub rationale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_score: Option<u32>,
}

/// CVE list truncated for display, remembering how many exist in total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CveListView {
    pub shown: Vec<CveView>,
    pub total: usize,
}

impl CveListView {
    /// e.g. "Showing 5 of 12 CVEs"
    pub fn summary_line(&self) -> String {
        format!("Showing {} of {} CVEs", self.shown.len(), self.total)
    }

    pub fn is_truncated(&self) -> bool {
        self.shown.len() < self.total
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CveView {
    pub id: String,
    pub severity: String,
    pub tier: SeverityTier,
    pub score: f64,
    pub description: String,
    pub published: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KevEntryView {
    pub cve_id: String,
    pub vulnerability: String,
    pub date_added: String,
    pub due_date: String,
    pub url: String,
}

use crate::shared::error::ContractViolation;
use serde::{Deserialize, Serialize};

/// Upper bound of trust and component scores
pub const MAX_TRUST_SCORE: u32 = 100;

/// Upper bound of a CVSS base score
pub const MAX_CVSS_SCORE: f64 = 10.0;

/// AssessmentResult aggregate returned by the evaluation backend
///
/// This is the unit displayed after a successful assessment and retained
/// verbatim in the history cache. Optional sections model data the backend
/// may omit; an absent section is rendered as "not present", never as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub entity: Entity,
    pub taxonomy: String,
    pub trust_score: TrustScore,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brief: Option<SecurityBrief>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_sources: Option<Vec<EvidenceSource>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<Alternative>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cve_data: Option<Vec<CveRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cisa_data: Option<Vec<KevEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_mode: Option<bool>,
    /// ISO-8601 creation time, with or without UTC offset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// The resolved product behind a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub product_name: String,
    pub vendor: String,
    /// Resolution confidence in [0, 1]
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustScore {
    pub value: u32,
    /// Confidence label, e.g. "HIGH", "medium"
    pub confidence: String,
    #[serde(default)]
    pub rationale: String,
    #[serde(default)]
    pub breakdown: Vec<ScoreComponent>,
}

/// One weighted factor contributing to the trust score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub component: String,
    pub score: u32,
    /// Advisory weight in [0, 1]; weights are not required to sum to 1
    pub weight: f64,
}

/// Narrative security posture brief
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityBrief {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_reputation: Option<VendorReputation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vulnerability_trends: Option<VulnerabilityTrends>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incidents: Option<Incidents>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_handling: Option<DataHandling>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controls: Option<Controls>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorReputation {
    #[serde(default)]
    pub summary: String,
    /// "HIGH", "MEDIUM", "LOW" or any other backend label
    #[serde(default)]
    pub psirt_maturity: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityTrends {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub critical_count: u32,
    #[serde(default)]
    pub high_count: u32,
    #[serde(default)]
    pub medium_count: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Incidents {
    #[serde(default)]
    pub summary: String,
    /// Whether any vulnerability is in the Known Exploited Vulnerabilities catalog
    #[serde(default, rename = "hasKEV")]
    pub has_kev: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataHandling {
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption: Option<String>,
    /// Certification labels such as "SOC2" or "ISO 27001"
    #[serde(default)]
    pub compliance: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Controls {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub access_control: String,
    #[serde(default)]
    pub logging: String,
}

/// A cited origin backing part of the assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceSource {
    #[serde(rename = "type")]
    pub source_type: String,
    pub url: String,
    #[serde(default)]
    pub retrieved_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

/// A suggested safer alternative
///
/// The backend has used both `product`/`name` and `rationale`/`reason` for
/// the same fields, so both spellings are retained and resolved on read.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Alternative {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub vendor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trust_score: Option<u32>,
}

impl Alternative {
    /// Product name, preferring `product` over `name`
    pub fn display_name(&self) -> &str {
        first_non_empty(self.product.as_deref(), self.name.as_deref())
    }

    /// Rationale, preferring `rationale` over `reason`
    pub fn display_rationale(&self) -> &str {
        first_non_empty(self.rationale.as_deref(), self.reason.as_deref())
    }
}

fn first_non_empty<'a>(primary: Option<&'a str>, fallback: Option<&'a str>) -> &'a str {
    primary
        .filter(|s| !s.is_empty())
        .or(fallback)
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CveRecord {
    pub id: String,
    /// "CRITICAL", "HIGH", "MEDIUM", "LOW" or any other backend label
    #[serde(default)]
    pub severity: String,
    /// CVSS base score in [0, 10]
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub published: String,
    #[serde(default)]
    pub url: String,
}

/// CISA Known Exploited Vulnerabilities catalog entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KevEntry {
    #[serde(default, rename = "cveID")]
    pub cve_id: String,
    #[serde(default)]
    pub vulnerability: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub vendor_project: String,
    #[serde(default)]
    pub date_added: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub url: String,
}

impl AssessmentResult {
    /// Checks the numeric ranges the display contract relies on
    ///
    /// # Errors
    /// Returns the first violated range. Negative integers never get this far
    /// because they fail deserialization into unsigned fields.
    pub fn validate(&self) -> Result<(), ContractViolation> {
        if !(0.0..=1.0).contains(&self.entity.confidence) {
            return Err(ContractViolation::OutOfRange {
                field: "entity.confidence".to_string(),
                value: self.entity.confidence.to_string(),
                range: "0..=1",
            });
        }

        if self.trust_score.value > MAX_TRUST_SCORE {
            return Err(ContractViolation::OutOfRange {
                field: "trust_score.value".to_string(),
                value: self.trust_score.value.to_string(),
                range: "0..=100",
            });
        }

        for (i, item) in self.trust_score.breakdown.iter().enumerate() {
            if item.score > MAX_TRUST_SCORE {
                return Err(ContractViolation::OutOfRange {
                    field: format!("trust_score.breakdown[{}].score", i),
                    value: item.score.to_string(),
                    range: "0..=100",
                });
            }
            if !(0.0..=1.0).contains(&item.weight) {
                return Err(ContractViolation::OutOfRange {
                    field: format!("trust_score.breakdown[{}].weight", i),
                    value: item.weight.to_string(),
                    range: "0..=1",
                });
            }
        }

        for (i, cve) in self.cve_data.iter().flatten().enumerate() {
            if !(0.0..=MAX_CVSS_SCORE).contains(&cve.score) {
                return Err(ContractViolation::OutOfRange {
                    field: format!("cve_data[{}].score", i),
                    value: cve.score.to_string(),
                    range: "0..=10",
                });
            }
        }

        Ok(())
    }

    /// Whether the brief flags a Known Exploited Vulnerability
    pub fn has_kev(&self) -> bool {
        self.brief
            .as_ref()
            .and_then(|brief| brief.incidents.as_ref())
            .map(|incidents| incidents.has_kev)
            .unwrap_or(false)
    }
}

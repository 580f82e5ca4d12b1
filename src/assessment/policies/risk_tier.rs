use serde::Serialize;
use std::fmt;

/// Scores at or above this value are classified as good
pub const GOOD_SCORE_THRESHOLD: u32 = 80;

/// Scores at or above this value (and below the good threshold) are classified as warn
pub const WARN_SCORE_THRESHOLD: u32 = 60;

/// Maximum number of CVEs shown in a report
pub const CVE_DISPLAY_LIMIT: usize = 5;

/// Maximum number of history entries shown
pub const HISTORY_DISPLAY_LIMIT: usize = 5;

/// Three-tier classification of a 0-100 score
///
/// Applies to both the overall trust score and every breakdown component.
/// The cutpoints are part of the user-facing risk signal and must not drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Good,
    Warn,
    Bad,
}

impl RiskTier {
    pub fn from_score(score: u32) -> Self {
        if score >= GOOD_SCORE_THRESHOLD {
            RiskTier::Good
        } else if score >= WARN_SCORE_THRESHOLD {
            RiskTier::Warn
        } else {
            RiskTier::Bad
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Good => "good",
            RiskTier::Warn => "warn",
            RiskTier::Bad => "bad",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// CVE severity tier: CRITICAL and HIGH are distinct, everything else shares one tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Critical,
    High,
    Other,
}

impl SeverityTier {
    pub fn from_severity(severity: &str) -> Self {
        let severity = severity.trim();
        if severity.eq_ignore_ascii_case("CRITICAL") {
            SeverityTier::Critical
        } else if severity.eq_ignore_ascii_case("HIGH") {
            SeverityTier::High
        } else {
            SeverityTier::Other
        }
    }
}

/// PSIRT maturity tier: HIGH and MEDIUM are recognised, anything else is low
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaturityTier {
    High,
    Medium,
    Low,
}

impl MaturityTier {
    pub fn from_psirt(maturity: &str) -> Self {
        let maturity = maturity.trim();
        if maturity.eq_ignore_ascii_case("HIGH") {
            MaturityTier::High
        } else if maturity.eq_ignore_ascii_case("MEDIUM") {
            MaturityTier::Medium
        } else {
            MaturityTier::Low
        }
    }
}

//! Shared report fixtures for formatter tests

use crate::application::read_models::{
    AssessmentReportBuilder, AssessmentReportView, HistoryView, HistoryViewBuilder,
};
use crate::assessment::domain::AssessmentResult;
use serde_json::json;

/// A fully populated Slack assessment with 7 CVEs and one KEV entry
pub fn full_result() -> AssessmentResult {
    serde_json::from_value(json!({
        "entity": {"product_name": "Slack", "vendor": "Slack Technologies", "confidence": 0.9},
        "taxonomy": "Collaboration Platform",
        "trust_score": {
            "value": 72,
            "confidence": "HIGH",
            "rationale": "Mature vendor | some incidents",
            "breakdown": [
                {"component": "Vendor Reputation", "score": 85, "weight": 0.25},
                {"component": "CVE Severity", "score": 65, "weight": 0.25},
                {"component": "Incident History", "score": 45, "weight": 0.2}
            ]
        },
        "brief": {
            "description": "Cloud-based team messaging",
            "usage": "Internal communication",
            "vendorReputation": {"summary": "Established PSIRT", "psirtMaturity": "HIGH"},
            "vulnerabilityTrends": {"summary": "Moderate", "criticalCount": 1, "highCount": 3, "mediumCount": 5},
            "incidents": {"summary": "2022 token theft", "hasKEV": true},
            "dataHandling": {"summary": "Encrypted at rest", "encryption": "AES-256", "compliance": ["SOC2", "ISO 27001"]},
            "controls": {"summary": "Enterprise grade", "accessControl": "SSO, MFA", "logging": "Audit logs"}
        },
        "evidence_sources": [
            {"type": "NVD CVE Database", "url": "https://nvd.nist.gov/", "retrieved_at": "2024-06-15T10:30:00", "count": 7},
            {"type": "Vendor Security Page", "url": "https://slack.com/security", "retrieved_at": "2024-06-15T10:30:00", "count": 0}
        ],
        "alternatives": [
            {"product": "Mattermost", "vendor": "Mattermost Inc.", "rationale": "Self-hosted", "trust_score": 82},
            {"name": "Element", "vendor": "New Vector", "reason": "End-to-end encrypted"}
        ],
        "cve_data": cves(7),
        "cisa_data": [
            {"cveID": "CVE-2024-0001", "vulnerability": "Token disclosure", "product": "Slack",
             "vendorProject": "Slack", "dateAdded": "2024-02-01", "dueDate": "2024-02-22", "url": "https://www.cisa.gov/"}
        ],
        "snapshot_mode": true,
        "timestamp": "2024-06-15T10:30:00.123456"
    }))
    .unwrap()
}

fn cves(count: usize) -> Vec<serde_json::Value> {
    (1..=count)
        .map(|i| {
            let severity = match i {
                1 => "CRITICAL",
                2 | 3 => "HIGH",
                _ => "MEDIUM",
            };
            let id = format!("CVE-2024-000{}", i);
            let url = format!("https://nvd.nist.gov/vuln/detail/{}", id);
            json!({
                "id": id,
                "severity": severity,
                "score": 7.5,
                "description": format!("Issue {}", i),
                "published": "2024-01-01",
                "url": url
            })
        })
        .collect()
}

/// The smallest valid assessment: no optional sections at all
pub fn minimal_result() -> AssessmentResult {
    serde_json::from_value(json!({
        "entity": {"product_name": "7-Zip", "vendor": "Igor Pavlov", "confidence": 0.95},
        "taxonomy": "File Archiver",
        "trust_score": {"value": 85, "confidence": "high"}
    }))
    .unwrap()
}

pub fn full_report() -> AssessmentReportView {
    AssessmentReportBuilder::build(&full_result())
}

pub fn minimal_report() -> AssessmentReportView {
    AssessmentReportBuilder::build(&minimal_result())
}

pub fn history() -> HistoryView {
    let mut unnamed = minimal_result();
    unnamed.entity.product_name = String::new();
    unnamed.trust_score.value = 40;
    HistoryViewBuilder::build(&[full_result(), minimal_result(), unnamed], 3)
}

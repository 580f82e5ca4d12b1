//! Builders that turn `AssessmentResult` values into view models
//!
//! All display policy (risk tiers, CVE truncation, alias resolution,
//! timestamp formatting) is applied here so that formatters only lay text out.

use super::assessment_report_view::*;
use super::history_view::{HistoryItemView, HistoryView};
use crate::assessment::domain::{
    Alternative, AssessmentResult, CveRecord, DataHandling, EvidenceSource, KevEntry,
    SecurityBrief,
};
use crate::assessment::policies::{MaturityTier, RiskTier, SeverityTier, CVE_DISPLAY_LIMIT};
use chrono::{DateTime, NaiveDateTime};

/// Product name shown for history entries whose entity has no name
pub const UNKNOWN_PRODUCT: &str = "Unknown";

/// Builder for creating AssessmentReportView from an AssessmentResult
pub struct AssessmentReportBuilder;

impl AssessmentReportBuilder {
    pub fn build(result: &AssessmentResult) -> AssessmentReportView {
        AssessmentReportView {
            entity: Self::build_entity(result),
            trust_score: TrustScoreView {
                value: result.trust_score.value,
                tier: RiskTier::from_score(result.trust_score.value),
                confidence: result.trust_score.confidence.clone(),
                rationale: result.trust_score.rationale.clone(),
            },
            breakdown: Self::build_breakdown(result),
            brief: result.brief.as_ref().map(Self::build_brief),
            known_exploited: result.has_kev(),
            evidence_sources: result
                .evidence_sources
                .iter()
                .flatten()
                .map(Self::build_evidence)
                .collect(),
            alternatives: result
                .alternatives
                .iter()
                .flatten()
                .map(Self::build_alternative)
                .collect(),
            cves: Self::build_cves(result.cve_data.as_deref()),
            kev_entries: result
                .cisa_data
                .iter()
                .flatten()
                .map(Self::build_kev_entry)
                .collect(),
            timestamp: result.timestamp.as_deref().map(format_timestamp),
        }
    }

    fn build_entity(result: &AssessmentResult) -> EntityView {
        EntityView {
            product_name: result.entity.product_name.clone(),
            vendor: result.entity.vendor.clone(),
            taxonomy: result.taxonomy.clone(),
            confidence_percent: to_percent(result.entity.confidence),
        }
    }

    fn build_breakdown(result: &AssessmentResult) -> Vec<BreakdownItemView> {
        result
            .trust_score
            .breakdown
            .iter()
            .map(|item| BreakdownItemView {
                component: item.component.clone(),
                score: item.score,
                weight_percent: to_percent(item.weight),
                tier: RiskTier::from_score(item.score),
            })
            .collect()
    }

    fn build_brief(brief: &SecurityBrief) -> BriefView {
        BriefView {
            description: brief.description.clone(),
            usage: brief.usage.clone(),
            vendor_reputation: brief
                .vendor_reputation
                .as_ref()
                .map(|rep| VendorReputationView {
                    summary: rep.summary.clone(),
                    psirt_maturity: rep.psirt_maturity.clone(),
                    tier: MaturityTier::from_psirt(&rep.psirt_maturity),
                }),
            vulnerability_trends: brief.vulnerability_trends.clone(),
            incidents: brief.incidents.as_ref().map(|incidents| IncidentsView {
                summary: incidents.summary.clone(),
                has_kev: incidents.has_kev,
            }),
            data_handling: brief.data_handling.as_ref().map(Self::build_data_handling),
            controls: brief.controls.clone(),
        }
    }

    fn build_data_handling(data: &DataHandling) -> DataHandlingView {
        let mut compliance: Vec<String> = Vec::with_capacity(data.compliance.len());
        for label in &data.compliance {
            let label = label.trim();
            if !label.is_empty() && !compliance.iter().any(|seen| seen == label) {
                compliance.push(label.to_string());
            }
        }

        DataHandlingView {
            summary: data.summary.clone(),
            encryption: data.encryption.clone().filter(|e| !e.trim().is_empty()),
            compliance,
        }
    }

    fn build_evidence(source: &EvidenceSource) -> EvidenceView {
        EvidenceView {
            source_type: source.source_type.clone(),
            url: source.url.clone(),
            retrieved_at: format_timestamp(&source.retrieved_at),
            count: source.count.filter(|&count| count > 0),
        }
    }

    fn build_alternative(alternative: &Alternative) -> AlternativeView {
        AlternativeView {
            name: alternative.display_name().to_string(),
            vendor: alternative.vendor.clone(),
            rationale: alternative.display_rationale().to_string(),
            // 0 means "not scored"
            trust_score: alternative.trust_score.filter(|&score| score > 0),
        }
    }

    fn build_cves(cves: Option<&[CveRecord]>) -> Option<CveListView> {
        let cves = cves.filter(|list| !list.is_empty())?;

        let shown = cves
            .iter()
            .take(CVE_DISPLAY_LIMIT)
            .map(|cve| CveView {
                id: cve.id.clone(),
                severity: cve.severity.clone(),
                tier: SeverityTier::from_severity(&cve.severity),
                score: cve.score,
                description: cve.description.clone(),
                published: cve.published.clone(),
                url: cve.url.clone(),
            })
            .collect();

        Some(CveListView {
            shown,
            total: cves.len(),
        })
    }

    fn build_kev_entry(entry: &KevEntry) -> KevEntryView {
        KevEntryView {
            cve_id: entry.cve_id.clone(),
            vulnerability: entry.vulnerability.clone(),
            date_added: entry.date_added.clone(),
            due_date: entry.due_date.clone(),
            url: entry.url.clone(),
        }
    }
}

/// Builder for the "Recent Assessments" list
pub struct HistoryViewBuilder;

impl HistoryViewBuilder {
    /// Builds the view for `entries`, which the caller has already limited.
    /// `total_cached` is the number of entries in the cache.
    pub fn build(entries: &[AssessmentResult], total_cached: usize) -> HistoryView {
        let items = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let name = entry.entity.product_name.trim();
                HistoryItemView {
                    position: i + 1,
                    product_name: if name.is_empty() {
                        UNKNOWN_PRODUCT.to_string()
                    } else {
                        name.to_string()
                    },
                    trust_score: entry.trust_score.value,
                    tier: RiskTier::from_score(entry.trust_score.value),
                    timestamp: entry.timestamp.as_deref().map(format_timestamp),
                }
            })
            .collect();

        HistoryView {
            items,
            total_cached,
        }
    }
}

/// Formats an ISO-8601 timestamp for display
///
/// Offset-carrying values keep their offset; naive values (the backend's
/// usual form) are shown as-is without a zone. Anything unparseable is
/// returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M:%S %:z").to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    raw.to_string()
}

fn to_percent(fraction: f64) -> u32 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::{
        Controls, Entity, Incidents, ScoreComponent, TrustScore, VendorReputation,
    };

    fn create_result(product: &str, score: u32) -> AssessmentResult {
        AssessmentResult {
            entity: Entity {
                product_name: product.to_string(),
                vendor: "Vendor".to_string(),
                confidence: 0.9,
            },
            taxonomy: "utility".to_string(),
            trust_score: TrustScore {
                value: score,
                confidence: "HIGH".to_string(),
                rationale: "Solid track record".to_string(),
                breakdown: vec![
                    ScoreComponent {
                        component: "Vendor Reputation".to_string(),
                        score: 90,
                        weight: 0.25,
                    },
                    ScoreComponent {
                        component: "Incident History".to_string(),
                        score: 45,
                        weight: 0.2,
                    },
                ],
            },
            brief: None,
            evidence_sources: None,
            alternatives: None,
            cve_data: None,
            cisa_data: None,
            snapshot_mode: None,
            timestamp: Some("2024-06-15T10:30:00.123456".to_string()),
        }
    }

    fn create_cve(id: &str, severity: &str) -> CveRecord {
        CveRecord {
            id: id.to_string(),
            severity: severity.to_string(),
            score: 7.5,
            description: "desc".to_string(),
            published: "2024-01-01".to_string(),
            url: format!("https://nvd.nist.gov/vuln/detail/{}", id),
        }
    }

    #[test]
    fn test_build_headline_and_score() {
        let view = AssessmentReportBuilder::build(&create_result("7-Zip", 85));

        assert_eq!(view.entity.product_name, "7-Zip");
        assert_eq!(view.entity.taxonomy, "utility");
        assert_eq!(view.entity.confidence_percent, 90);
        assert_eq!(view.trust_score.value, 85);
        assert_eq!(view.trust_score.tier, RiskTier::Good);
        assert_eq!(view.trust_score.confidence, "HIGH");
        assert_eq!(view.timestamp.as_deref(), Some("2024-06-15 10:30:00"));
    }

    #[test]
    fn test_build_breakdown_tiers_each_component() {
        let view = AssessmentReportBuilder::build(&create_result("7-Zip", 70));

        assert_eq!(view.breakdown.len(), 2);
        assert_eq!(view.breakdown[0].weight_percent, 25);
        assert_eq!(view.breakdown[0].tier, RiskTier::Good);
        assert_eq!(view.breakdown[1].weight_percent, 20);
        assert_eq!(view.breakdown[1].tier, RiskTier::Bad);
        assert_eq!(view.trust_score.tier, RiskTier::Warn);
    }

    #[test]
    fn test_build_absent_sections() {
        let view = AssessmentReportBuilder::build(&create_result("7-Zip", 85));

        assert!(view.brief.is_none());
        assert!(view.cves.is_none());
        assert!(view.evidence_sources.is_empty());
        assert!(view.alternatives.is_empty());
        assert!(view.kev_entries.is_empty());
        assert!(!view.known_exploited);
    }

    #[test]
    fn test_build_truncates_cves_and_keeps_total() {
        let mut result = create_result("7-Zip", 85);
        result.cve_data = Some(
            (1..=12)
                .map(|i| create_cve(&format!("CVE-2024-{:04}", i), "HIGH"))
                .collect(),
        );

        let cves = AssessmentReportBuilder::build(&result).cves.unwrap();
        assert_eq!(cves.shown.len(), 5);
        assert_eq!(cves.total, 12);
        assert!(cves.is_truncated());
        assert_eq!(cves.shown[0].id, "CVE-2024-0001");
        assert_eq!(cves.shown[4].id, "CVE-2024-0005");
        assert_eq!(cves.summary_line(), "Showing 5 of 12 CVEs");
    }

    #[test]
    fn test_build_cve_severity_tiers() {
        let mut result = create_result("7-Zip", 85);
        result.cve_data = Some(vec![
            create_cve("CVE-1", "CRITICAL"),
            create_cve("CVE-2", "HIGH"),
            create_cve("CVE-3", "LOW"),
        ]);

        let cves = AssessmentReportBuilder::build(&result).cves.unwrap();
        assert!(!cves.is_truncated());
        assert_eq!(cves.shown[0].tier, SeverityTier::Critical);
        assert_eq!(cves.shown[1].tier, SeverityTier::High);
        assert_eq!(cves.shown[2].tier, SeverityTier::Other);
    }

    #[test]
    fn test_build_empty_cve_list_is_absent() {
        let mut result = create_result("7-Zip", 85);
        result.cve_data = Some(vec![]);
        assert!(AssessmentReportBuilder::build(&result).cves.is_none());
    }

    #[test]
    fn test_build_brief_surfaces_kev_and_psirt_tier() {
        let mut result = create_result("Slack", 78);
        result.brief = Some(SecurityBrief {
            vendor_reputation: Some(VendorReputation {
                summary: "Mature program".to_string(),
                psirt_maturity: "medium".to_string(),
                sources: vec![],
            }),
            incidents: Some(Incidents {
                summary: "One incident".to_string(),
                has_kev: true,
                sources: vec![],
            }),
            data_handling: Some(DataHandling {
                summary: "Encrypted".to_string(),
                encryption: Some("AES-256".to_string()),
                compliance: vec![
                    "SOC2".to_string(),
                    "ISO 27001".to_string(),
                    "SOC2".to_string(),
                ],
            }),
            controls: Some(Controls::default()),
            ..Default::default()
        });

        let view = AssessmentReportBuilder::build(&result);
        assert!(view.known_exploited);

        let brief = view.brief.unwrap();
        assert_eq!(
            brief.vendor_reputation.unwrap().tier,
            MaturityTier::Medium
        );
        assert!(brief.incidents.unwrap().has_kev);
        assert_eq!(
            brief.data_handling.unwrap().compliance,
            vec!["SOC2".to_string(), "ISO 27001".to_string()]
        );
        assert!(brief.description.is_none());
    }

    #[test]
    fn test_build_evidence_hides_zero_count() {
        let mut result = create_result("7-Zip", 85);
        result.evidence_sources = Some(vec![
            EvidenceSource {
                source_type: "NVD CVE Database".to_string(),
                url: "https://nvd.nist.gov/".to_string(),
                retrieved_at: "2024-06-15T10:30:00".to_string(),
                count: Some(0),
            },
            EvidenceSource {
                source_type: "CISA KEV".to_string(),
                url: "https://www.cisa.gov/".to_string(),
                retrieved_at: "2024-06-15T10:30:00Z".to_string(),
                count: Some(2),
            },
        ]);

        let view = AssessmentReportBuilder::build(&result);
        assert_eq!(view.evidence_sources[0].count, None);
        assert_eq!(view.evidence_sources[1].count, Some(2));
        assert_eq!(
            view.evidence_sources[1].retrieved_at,
            "2024-06-15 10:30:00 +00:00"
        );
    }

    #[test]
    fn test_build_alternatives_resolve_aliases() {
        let mut result = create_result("Slack", 78);
        result.alternatives = Some(vec![Alternative {
            name: Some("Mattermost".to_string()),
            vendor: "Mattermost Inc.".to_string(),
            reason: Some("Self-hosted".to_string()),
            ..Default::default()
        }]);

        let view = AssessmentReportBuilder::build(&result);
        assert_eq!(view.alternatives[0].name, "Mattermost");
        assert_eq!(view.alternatives[0].rationale, "Self-hosted");
        assert_eq!(view.alternatives[0].trust_score, None);
    }

    #[test]
    fn test_build_alternatives_hide_zero_trust_score() {
        let mut result = create_result("Slack", 78);
        result.alternatives = Some(vec![
            Alternative {
                product: Some("Element".to_string()),
                vendor: "Element".to_string(),
                trust_score: Some(0),
                ..Default::default()
            },
            Alternative {
                product: Some("Signal".to_string()),
                vendor: "Signal Foundation".to_string(),
                trust_score: Some(88),
                ..Default::default()
            },
        ]);

        let view = AssessmentReportBuilder::build(&result);
        assert_eq!(view.alternatives[0].trust_score, None);
        assert_eq!(view.alternatives[1].trust_score, Some(88));
    }

    #[test]
    fn test_build_kev_entries() {
        let mut result = create_result("Exchange", 40);
        result.cisa_data = Some(vec![KevEntry {
            cve_id: "CVE-2021-26855".to_string(),
            vulnerability: "Server-Side Request Forgery".to_string(),
            ..Default::default()
        }]);

        let view = AssessmentReportBuilder::build(&result);
        assert_eq!(view.kev_entries.len(), 1);
        assert_eq!(view.kev_entries[0].cve_id, "CVE-2021-26855");
        assert_eq!(view.trust_score.tier, RiskTier::Bad);
    }

    #[test]
    fn test_history_view_positions_and_unknown_name() {
        let entries = vec![create_result("7-Zip", 85), create_result("  ", 55)];

        let view = HistoryViewBuilder::build(&entries, 12);
        assert_eq!(view.total_cached, 12);
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].position, 1);
        assert_eq!(view.items[0].product_name, "7-Zip");
        assert_eq!(view.items[0].tier, RiskTier::Good);
        assert_eq!(view.items[1].position, 2);
        assert_eq!(view.items[1].product_name, UNKNOWN_PRODUCT);
        assert_eq!(view.items[1].tier, RiskTier::Bad);
    }

    #[test]
    fn test_history_view_empty() {
        let view = HistoryViewBuilder::build(&[], 0);
        assert!(view.is_empty());
    }

    #[test]
    fn test_format_timestamp_variants() {
        assert_eq!(
            format_timestamp("2024-06-15T10:30:00"),
            "2024-06-15 10:30:00"
        );
        assert_eq!(
            format_timestamp("2024-06-15T10:30:00.5+09:00"),
            "2024-06-15 10:30:00 +09:00"
        );
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp(""), "");
    }

    #[test]
    fn test_to_percent_rounds() {
        assert_eq!(to_percent(0.875), 88);
        assert_eq!(to_percent(1.0), 100);
        assert_eq!(to_percent(0.0), 0);
    }
}

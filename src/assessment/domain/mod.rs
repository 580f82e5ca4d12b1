/// Domain models for product reputation assessment
pub mod assessment_result;
pub mod query;

pub use assessment_result::{
    Alternative, AssessmentResult, Controls, CveRecord, DataHandling, Entity, EvidenceSource,
    Incidents, KevEntry, ScoreComponent, SecurityBrief, TrustScore, VendorReputation,
    VulnerabilityTrends, MAX_CVSS_SCORE, MAX_TRUST_SCORE,
};
pub use query::{AssessmentQuery, QueryKind};

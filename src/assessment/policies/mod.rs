/// Policies encoding the result presentation contract
pub mod risk_tier;

pub use risk_tier::{
    MaturityTier, RiskTier, SeverityTier, CVE_DISPLAY_LIMIT, GOOD_SCORE_THRESHOLD,
    HISTORY_DISPLAY_LIMIT, WARN_SCORE_THRESHOLD,
};

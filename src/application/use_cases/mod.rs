/// Use cases module containing application business logic orchestration
mod assessment_session;
mod history_cache;

pub use assessment_session::{
    AssessmentSession, SessionState, SessionStatus, SkipReason, SubmitOutcome, CANCELLED_MESSAGE,
};
pub use history_cache::HistoryCache;

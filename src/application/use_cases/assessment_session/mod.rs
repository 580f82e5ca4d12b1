use crate::application::dto::AssessRequest;
use crate::application::use_cases::HistoryCache;
use crate::assessment::domain::{AssessmentQuery, AssessmentResult};
use crate::ports::outbound::{AssessmentBackend, ProgressReporter};
use crate::shared::error::BackendResult;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;

/// Error message left behind when a submission is dropped before it resolves
pub const CANCELLED_MESSAGE: &str = "Assessment cancelled before the backend responded";

/// Request lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SessionStatus::Idle => "idle",
            SessionStatus::Loading => "loading",
            SessionStatus::Success => "success",
            SessionStatus::Error => "error",
        };
        write!(f, "{}", label)
    }
}

/// Snapshot of everything the session displays
///
/// After a request resolves, `result` is set only in `Success` and
/// `error_message` only in `Error`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub query: String,
    pub status: SessionStatus,
    pub result: Option<AssessmentResult>,
    pub error_message: Option<String>,
}

/// Why a `submit()` call did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The query was empty or whitespace-only
    EmptyQuery,
    /// Another submission is still loading
    InFlight,
}

/// Result of a `submit()` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No request was issued and the state is unchanged
    Skipped(SkipReason),
    /// A request was issued and resolved into this status
    Completed(SessionStatus),
}

/// AssessmentSession - Session controller for assessment requests
///
/// Owns the query text and the Idle/Loading/Success/Error state, issues
/// assessment requests, and keeps the history cache fresh after every
/// successful assessment.
///
/// The state lives behind a `std::sync::Mutex` that is never held across an
/// `.await`; the only suspension points are the backend calls. History
/// refreshes run as detached tasks whose handles are kept so they can be
/// awaited with [`settle`](Self::settle) or aborted with [`close`](Self::close).
///
/// # Type Parameters
/// * `B` - AssessmentBackend implementation
/// * `R` - ProgressReporter implementation
pub struct AssessmentSession<B, R> {
    backend: Arc<B>,
    progress_reporter: Arc<R>,
    history: HistoryCache<B, R>,
    state: Mutex<SessionState>,
    refresh_tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl<B, R> AssessmentSession<B, R>
where
    B: AssessmentBackend + 'static,
    R: ProgressReporter + 'static,
{
    /// Creates an idle session with an empty history cache
    pub fn new(backend: Arc<B>, progress_reporter: Arc<R>) -> Self {
        let history = HistoryCache::new(Arc::clone(&backend), Arc::clone(&progress_reporter));
        Self {
            backend,
            progress_reporter,
            history,
            state: Mutex::new(SessionState::default()),
            refresh_tasks: Mutex::new(Vec::new()),
        }
    }

    /// Replaces the query text; allowed in any status
    pub fn set_query(&self, text: impl Into<String>) {
        self.lock_state().query = text.into();
    }

    /// Submits the current query
    ///
    /// Does nothing when the trimmed query is empty or a request is already
    /// loading. Otherwise exactly one assessment request is sent and the
    /// session ends in `Success` or `Error`. On success a history refresh is
    /// spawned in the background; its failure never touches session state.
    pub async fn submit(&self) -> SubmitOutcome {
        let query = {
            let mut state = self.lock_state();
            let Some(query) = AssessmentQuery::parse(&state.query) else {
                return SubmitOutcome::Skipped(SkipReason::EmptyQuery);
            };
            if state.status == SessionStatus::Loading {
                return SubmitOutcome::Skipped(SkipReason::InFlight);
            }
            state.status = SessionStatus::Loading;
            state.result = None;
            state.error_message = None;
            query
        };

        let mut guard = LoadingGuard::new(&self.state, self.progress_reporter.as_ref());
        self.progress_reporter.report_waiting(&format!(
            "🔍 Assessing {} ({})...",
            query,
            query.kind()
        ));

        let outcome = self.request_assessment(&query).await;
        guard.disarm();

        match outcome {
            Ok(result) => {
                self.progress_reporter.report_completion(&format!(
                    "Assessment complete: {} scored {}/100",
                    result.entity.product_name, result.trust_score.value
                ));
                {
                    let mut state = self.lock_state();
                    state.status = SessionStatus::Success;
                    state.result = Some(result);
                    state.error_message = None;
                }
                self.spawn_history_refresh();
                SubmitOutcome::Completed(SessionStatus::Success)
            }
            Err(e) => {
                let message = e.to_string();
                self.progress_reporter
                    .report_error(&format!("❌ Assessment failed: {}", message));
                let mut state = self.lock_state();
                state.status = SessionStatus::Error;
                state.result = None;
                state.error_message = Some(message);
                SubmitOutcome::Completed(SessionStatus::Error)
            }
        }
    }

    async fn request_assessment(&self, query: &AssessmentQuery) -> BackendResult<AssessmentResult> {
        let request = AssessRequest::snapshot(query);
        let result = self.backend.assess(&request).await?;
        result.validate()?;
        Ok(result)
    }

    /// Displays a cached history entry without a network call
    ///
    /// Only the result changes; status and error message are left as they are.
    pub fn select_history_entry(&self, entry: AssessmentResult) {
        self.lock_state().result = Some(entry);
    }

    /// Populates the history cache in the foreground
    ///
    /// Used at session start. Failure is reported and leaves the cache as is.
    pub async fn refresh_history(&self) -> bool {
        self.history.refresh().await
    }

    fn spawn_history_refresh(&self) {
        let history = self.history.clone();
        let generation = history.next_generation();
        let handle = tokio::spawn(async move {
            history.refresh_generation(generation).await;
        });

        let mut tasks = self.lock_tasks();
        tasks.retain(|task| !task.is_finished());
        tasks.push(handle);
    }

    /// Waits for every outstanding background history refresh
    pub async fn settle(&self) {
        let handles = std::mem::take(&mut *self.lock_tasks());
        for joined in futures::future::join_all(handles).await {
            if let Err(e) = joined {
                if e.is_panic() {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: History refresh task panicked: {}",
                        e
                    ));
                }
            }
        }
    }

    /// Aborts every outstanding background history refresh
    pub fn close(&self) {
        for task in self.lock_tasks().drain(..) {
            task.abort();
        }
    }

    /// Returns a snapshot of the full session state
    pub fn state(&self) -> SessionState {
        self.lock_state().clone()
    }

    pub fn query(&self) -> String {
        self.lock_state().query.clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.lock_state().status
    }

    pub fn result(&self) -> Option<AssessmentResult> {
        self.lock_state().result.clone()
    }

    pub fn error_message(&self) -> Option<String> {
        self.lock_state().error_message.clone()
    }

    /// The history cache backing this session
    pub fn history(&self) -> &HistoryCache<B, R> {
        &self.history
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_tasks(&self) -> MutexGuard<'_, Vec<JoinHandle<()>>> {
        self.refresh_tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<B, R> Drop for AssessmentSession<B, R> {
    fn drop(&mut self) {
        let tasks = self
            .refresh_tasks
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        for task in tasks.drain(..) {
            task.abort();
        }
    }
}

/// Moves a still-loading session to `Error` if the submit future is dropped
struct LoadingGuard<'a, R: ProgressReporter> {
    state: &'a Mutex<SessionState>,
    progress_reporter: &'a R,
    armed: bool,
}

impl<'a, R: ProgressReporter> LoadingGuard<'a, R> {
    fn new(state: &'a Mutex<SessionState>, progress_reporter: &'a R) -> Self {
        Self {
            state,
            progress_reporter,
            armed: true,
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl<R: ProgressReporter> Drop for LoadingGuard<'_, R> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.status == SessionStatus::Loading {
            state.status = SessionStatus::Error;
            state.result = None;
            state.error_message = Some(CANCELLED_MESSAGE.to_string());
            drop(state);
            self.progress_reporter
                .report_error(&format!("❌ {}", CANCELLED_MESSAGE));
        }
    }
}

use crate::assessment::domain::AssessmentResult;
use crate::ports::outbound::{AssessmentBackend, ProgressReporter};
use crate::shared::error::{BackendError, BackendResult};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

/// The cached list together with the generation of the refresh that wrote it
#[derive(Default)]
struct CachedHistory {
    entries: Vec<AssessmentResult>,
    generation: u64,
}

/// HistoryCache - Most-recent-first list of past assessments
///
/// The list is owned here and replaced wholesale on every successful refresh;
/// readers only ever receive clones. Cloning the cache yields another handle
/// to the same list, which is how detached refresh tasks update it.
///
/// Every refresh is numbered when it starts. A response is applied only if
/// no later-numbered refresh has already been applied, so overlapping
/// refreshes can never put an older list back.
///
/// # Type Parameters
/// * `B` - AssessmentBackend implementation
/// * `R` - ProgressReporter implementation
pub struct HistoryCache<B, R> {
    backend: Arc<B>,
    progress_reporter: Arc<R>,
    entries: Arc<RwLock<CachedHistory>>,
    next_generation: Arc<AtomicU64>,
}

impl<B, R> Clone for HistoryCache<B, R> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            progress_reporter: Arc::clone(&self.progress_reporter),
            entries: Arc::clone(&self.entries),
            next_generation: Arc::clone(&self.next_generation),
        }
    }
}

impl<B, R> HistoryCache<B, R>
where
    B: AssessmentBackend,
    R: ProgressReporter,
{
    /// Creates an empty cache bound to `backend`
    pub fn new(backend: Arc<B>, progress_reporter: Arc<R>) -> Self {
        Self {
            backend,
            progress_reporter,
            entries: Arc::new(RwLock::new(CachedHistory::default())),
            next_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Reserves the number for a refresh that is about to start
    ///
    /// Numbers increase monotonically from 1.
    pub fn next_generation(&self) -> u64 {
        self.next_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Re-fetches the history and replaces the cached list
    ///
    /// A failure never propagates: it is reported as a warning and the
    /// previous list is kept.
    ///
    /// # Returns
    /// `true` if the list was replaced
    pub async fn refresh(&self) -> bool {
        let generation = self.next_generation();
        self.refresh_generation(generation).await
    }

    /// Runs a refresh numbered in advance with [`next_generation`](Self::next_generation)
    ///
    /// A response that arrives after a later-numbered refresh has been
    /// applied is discarded.
    ///
    /// # Returns
    /// `true` if the list was replaced
    pub async fn refresh_generation(&self, generation: u64) -> bool {
        match self.fetch_validated().await {
            Ok(entries) => {
                let mut cached = self.entries.write().unwrap_or_else(PoisonError::into_inner);
                if generation < cached.generation {
                    return false;
                }
                cached.entries = entries;
                cached.generation = generation;
                true
            }
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Failed to refresh assessment history: {}",
                    e
                ));
                false
            }
        }
    }

    async fn fetch_validated(&self) -> BackendResult<Vec<AssessmentResult>> {
        let entries = self.backend.fetch_history().await?;
        for entry in &entries {
            entry.validate().map_err(BackendError::from)?;
        }
        Ok(entries)
    }

    /// Returns clones of the first `limit` entries, in backend order
    pub fn entries(&self, limit: usize) -> Vec<AssessmentResult> {
        self.read().entries.iter().take(limit).cloned().collect()
    }

    /// Returns a clone of the entry at `index` (0-based)
    pub fn get(&self, index: usize) -> Option<AssessmentResult> {
        self.read().entries.get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().entries.is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, CachedHistory> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }
}

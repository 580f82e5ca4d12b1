use async_trait::async_trait;
use reputation_recon::prelude::*;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Mock AssessmentBackend for testing
///
/// Assessment responses are served in the order they were scripted. When a
/// gate is set, `assess` waits for it before answering.
pub struct MockBackend {
    assess_responses: Mutex<VecDeque<BackendResult<AssessmentResult>>>,
    history_response: Mutex<BackendResult<Vec<AssessmentResult>>>,
    gate: Option<Arc<Notify>>,
    assess_calls: AtomicUsize,
    history_calls: AtomicUsize,
    requests: Mutex<Vec<AssessRequest>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            assess_responses: Mutex::new(VecDeque::new()),
            history_response: Mutex::new(Ok(Vec::new())),
            gate: None,
            assess_calls: AtomicUsize::new(0),
            history_calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_assess_response(self, response: BackendResult<AssessmentResult>) -> Self {
        self.assess_responses.lock().unwrap().push_back(response);
        self
    }

    pub fn with_history(self, entries: Vec<AssessmentResult>) -> Self {
        *self.history_response.lock().unwrap() = Ok(entries);
        self
    }

    pub fn with_history_error(self, error: BackendError) -> Self {
        *self.history_response.lock().unwrap() = Err(error);
        self
    }

    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn assess_calls(&self) -> usize {
        self.assess_calls.load(Ordering::SeqCst)
    }

    pub fn history_calls(&self) -> usize {
        self.history_calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<AssessRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssessmentBackend for MockBackend {
    async fn assess(&self, request: &AssessRequest) -> BackendResult<AssessmentResult> {
        self.assess_calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.assess_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::Network("no scripted response".to_string())))
    }

    async fn fetch_history(&self) -> BackendResult<Vec<AssessmentResult>> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        self.history_response.lock().unwrap().clone()
    }
}

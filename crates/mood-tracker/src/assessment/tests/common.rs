use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;
use tokio::sync::Notify;

use crate::assessment::catalog::QUESTIONS;
use crate::assessment::domain::{AnswerSet, Submission};
use crate::assessment::service::AssessmentService;
use crate::assessment::share::{Clipboard, ClipboardError};
use crate::assessment::store::{StoreError, SubmissionStore};

pub(super) const PAGE_URL: &str = "https://moods.example.com/";

#[derive(Default)]
pub(super) struct MemoryStore {
    records: Mutex<Vec<Submission>>,
}

impl MemoryStore {
    pub(super) fn records(&self) -> Vec<Submission> {
        self.records.lock().expect("store mutex poisoned").clone()
    }
}

impl SubmissionStore for MemoryStore {
    async fn insert(&self, submission: Submission) -> Result<(), StoreError> {
        self.records
            .lock()
            .expect("store mutex poisoned")
            .push(submission);
        Ok(())
    }
}

pub(super) struct UnavailableStore;

impl SubmissionStore for UnavailableStore {
    async fn insert(&self, _submission: Submission) -> Result<(), StoreError> {
        Err(StoreError::Transport("database offline".to_string()))
    }
}

/// Holds every write until `release` is notified.
#[derive(Default)]
pub(super) struct GatedStore {
    pub(super) release: Notify,
    pub(super) inner: MemoryStore,
}

impl SubmissionStore for GatedStore {
    async fn insert(&self, submission: Submission) -> Result<(), StoreError> {
        self.release.notified().await;
        self.inner.insert(submission).await
    }
}

#[derive(Default)]
pub(super) struct MemoryClipboard {
    writes: Mutex<Vec<String>>,
}

impl MemoryClipboard {
    pub(super) fn writes(&self) -> Vec<String> {
        self.writes.lock().expect("clipboard mutex poisoned").clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.writes
            .lock()
            .expect("clipboard mutex poisoned")
            .push(text.to_string());
        Ok(())
    }
}

pub(super) struct DeniedClipboard;

impl Clipboard for DeniedClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("permission denied".to_string()))
    }
}

pub(super) fn build_service() -> (
    Arc<AssessmentService<MemoryStore, MemoryClipboard>>,
    Arc<MemoryStore>,
    Arc<MemoryClipboard>,
) {
    let store = Arc::new(MemoryStore::default());
    let clipboard = Arc::new(MemoryClipboard::default());
    let service = Arc::new(AssessmentService::new(
        store.clone(),
        clipboard.clone(),
        PAGE_URL,
    ));
    (service, store, clipboard)
}

/// Three negative answers out of five, in mixed case and padding.
pub(super) fn struggling_answers() -> AnswerSet {
    AnswerSet::from_pairs([
        (QUESTIONS[0], "no"),
        (QUESTIONS[1], " No "),
        (QUESTIONS[2], "NO"),
        (QUESTIONS[3], "yes"),
        (QUESTIONS[4], "high"),
    ])
    .expect("catalog questions")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

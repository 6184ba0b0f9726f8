mod rest;

pub use rest::RestSubmissionStore;

use std::future::Future;

use super::domain::Submission;

/// Append-only sink for submissions. Callers never read back what they wrote.
pub trait SubmissionStore: Send + Sync + 'static {
    fn insert(&self, submission: Submission) -> impl Future<Output = Result<(), StoreError>> + Send;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store transport unavailable: {0}")]
    Transport(String),
    #[error("store rejected the write with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

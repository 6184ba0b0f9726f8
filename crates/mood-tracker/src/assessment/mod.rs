//! Mood self-assessment: questionnaire catalog, scoring, rolling mood
//! history, and the submit pipeline that reveals feedback before the
//! submission reaches the store.

pub mod catalog;
pub mod domain;
pub mod history;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;
pub mod share;
pub mod store;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogView, Motivation, Mood, MOTIVATION, QUESTIONS};
pub use domain::{AnswerError, AnswerSet, Responses, Submission};
pub use history::{MoodHistory, MOOD_HISTORY_CAPACITY};
pub use router::assessment_router;
pub use scoring::{feedback, score, FeedbackResult, FeedbackTier, ScoringEngine};
pub use service::{AssessmentService, CopyLinkView, ResultView, SessionView, SubmitOutcome};
pub use session::{AssessmentPhase, SessionState};
pub use share::{
    share_links, Clipboard, ClipboardError, ShareAdapter, ShareLinks, SystemClipboard,
    COPIED_RESET_DELAY,
};
pub use store::{RestSubmissionStore, StoreError, SubmissionStore};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::catalog::Mood;
use super::domain::{AnswerError, Responses, Submission};
use super::history::MoodHistory;
use super::scoring::{FeedbackResult, ScoringEngine};

/// Whether the result panel is visible. A new submit from `ResultShown`
/// stays in `ResultShown` and replaces the previous result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentPhase {
    #[default]
    Editing,
    ResultShown,
}

impl AssessmentPhase {
    pub const fn label(self) -> &'static str {
        match self {
            AssessmentPhase::Editing => "editing",
            AssessmentPhase::ResultShown => "result_shown",
        }
    }
}

/// Feedback plus the mood that was selected when it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionResult {
    pub feedback: FeedbackResult,
    pub mood: Option<Mood>,
}

/// All mutable state owned by one assessment session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub responses: Responses,
    pub phase: AssessmentPhase,
    pub result: Option<SessionResult>,
    pub history: MoodHistory,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_mood(&mut self, mood: Option<Mood>) {
        self.responses.mood = mood;
    }

    pub fn answer(&mut self, question: &str, answer: impl Into<String>) -> Result<(), AnswerError> {
        self.responses.answers.set(question, answer)
    }

    pub fn write_journal(&mut self, journal: impl Into<String>) {
        self.responses.journal = journal.into();
    }
}

/// The session's single transition. Nothing is validated: a missing mood,
/// no answers, and an empty journal all produce a result and a submission.
pub fn submit(
    state: SessionState,
    engine: &ScoringEngine,
    now: DateTime<Utc>,
) -> (SessionState, Submission) {
    let SessionState {
        responses, history, ..
    } = state;

    let feedback = engine.evaluate(&responses.answers);
    let result = SessionResult {
        feedback,
        mood: responses.mood,
    };
    let history = history.append(responses.mood);
    let submission = Submission::capture(&responses, now);

    let next = SessionState {
        responses,
        phase: AssessmentPhase::ResultShown,
        result: Some(result),
        history,
    };

    (next, submission)
}

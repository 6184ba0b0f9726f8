use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::catalog::{mood_label, Mood};
use super::domain::{AnswerError, AnswerSet};
use super::history::MoodHistory;
use super::scoring::{FeedbackTier, ScoringEngine};
use super::session::{self, AssessmentPhase, SessionState};
use super::share::{Clipboard, ShareAdapter, ShareLinks};
use super::store::SubmissionStore;

/// Owns the session, the scoring engine, and the outbound collaborators.
pub struct AssessmentService<S, C> {
    session: Mutex<SessionState>,
    engine: ScoringEngine,
    store: Arc<S>,
    share: ShareAdapter<C>,
}

/// Returned by [`AssessmentService::submit`]. The view already reflects the
/// new result; `persistence` completes whenever the store write settles and
/// carries no outcome. Dropping it leaves the write running.
pub struct SubmitOutcome {
    pub view: SessionView,
    pub persistence: JoinHandle<()>,
}

impl<S, C> AssessmentService<S, C>
where
    S: SubmissionStore,
    C: Clipboard,
{
    pub fn new(store: Arc<S>, clipboard: Arc<C>, page_url: impl Into<String>) -> Self {
        Self {
            session: Mutex::new(SessionState::new()),
            engine: ScoringEngine::new(),
            store,
            share: ShareAdapter::new(clipboard, page_url),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn select_mood(&self, mood: Option<Mood>) -> SessionView {
        let mut session = self.lock();
        session.select_mood(mood);
        self.view_of(&session)
    }

    pub fn answer(
        &self,
        question: &str,
        answer: impl Into<String>,
    ) -> Result<SessionView, AnswerError> {
        let mut session = self.lock();
        session.answer(question, answer)?;
        Ok(self.view_of(&session))
    }

    pub fn write_journal(&self, journal: impl Into<String>) -> SessionView {
        let mut session = self.lock();
        session.write_journal(journal);
        self.view_of(&session)
    }

    pub fn view(&self) -> SessionView {
        let session = self.lock();
        self.view_of(&session)
    }

    /// Scores the current responses, records the result and mood history,
    /// then hands the submission to the store on a detached task. The write's
    /// outcome is only logged. Must be called from within a tokio runtime.
    pub fn submit(&self) -> SubmitOutcome {
        let (view, submission) = {
            let mut session = self.lock();
            let current = std::mem::take(&mut *session);
            let (next, submission) = session::submit(current, &self.engine, Utc::now());
            *session = next;
            (self.view_of(&session), submission)
        };

        if let Some(result) = &view.result {
            info!(
                score = result.score,
                tier = result.tier.label(),
                mood = mood_label(result.mood),
                "assessment submitted"
            );
        }

        let store = Arc::clone(&self.store);
        let persistence = tokio::spawn(async move {
            match store.insert(submission).await {
                Ok(()) => debug!("submission persisted"),
                Err(err) => warn!(error = %err, "submission was not persisted"),
            }
        });

        SubmitOutcome { view, persistence }
    }

    pub fn share_links(&self) -> ShareLinks {
        self.share.links()
    }

    pub async fn copy_link(&self) -> CopyLinkView {
        let copied = self.share.copy_link().await;
        CopyLinkView {
            copied,
            page_url: self.share.page_url().to_string(),
        }
    }

    pub fn is_link_copied(&self) -> bool {
        self.share.is_copied()
    }

    fn view_of(&self, session: &SessionState) -> SessionView {
        let result = session.result.as_ref().map(|result| ResultView {
            score: result.feedback.score,
            tier: result.feedback.tier,
            message: result.feedback.message.clone(),
            mood: result.mood,
            mood_line: result
                .mood
                .map(|mood| format!("You’re feeling {} today.", mood.label())),
            history: session.history.clone(),
            history_trail: session.history.trail(),
            share: self.share.links(),
            link_copied: self.share.is_copied(),
        });

        SessionView {
            phase: session.phase,
            mood: session.responses.mood,
            answers: session.responses.answers.clone(),
            journal: session.responses.journal.clone(),
            result,
        }
    }
}

/// What the UI needs to render the page in its current state.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub phase: AssessmentPhase,
    pub mood: Option<Mood>,
    pub answers: AnswerSet,
    pub journal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultView>,
}

/// Contents of the result panel.
#[derive(Debug, Clone, Serialize)]
pub struct ResultView {
    pub score: u32,
    pub tier: FeedbackTier,
    pub message: String,
    pub mood: Option<Mood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood_line: Option<String>,
    pub history: MoodHistory,
    pub history_trail: String,
    pub share: ShareLinks,
    pub link_copied: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CopyLinkView {
    pub copied: bool,
    pub page_url: String,
}

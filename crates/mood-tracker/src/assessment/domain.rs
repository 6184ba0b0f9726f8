use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use super::catalog::{find_question, mood_label, Mood, QUESTIONS};

/// Free-text answers keyed by question prompt. A missing key reads as an
/// empty answer. Keys can only come from the question catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<&'static str, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, Q, A>(pairs: I) -> Result<Self, AnswerError>
    where
        I: IntoIterator<Item = (Q, A)>,
        Q: AsRef<str>,
        A: Into<String>,
    {
        let mut answers = Self::new();
        for (question, answer) in pairs {
            answers.set(question.as_ref(), answer)?;
        }
        Ok(answers)
    }

    pub fn set(&mut self, question: &str, answer: impl Into<String>) -> Result<(), AnswerError> {
        let key = find_question(question)
            .ok_or_else(|| AnswerError::UnknownQuestion(question.to_string()))?;
        self.0.insert(key, answer.into());
        Ok(())
    }

    pub fn get(&self, question: &str) -> &str {
        self.0.get(question).map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    /// Answered questions in catalog order.
    pub fn in_catalog_order(&self) -> impl Iterator<Item = (&'static str, &str)> {
        QUESTIONS.iter().filter_map(move |question| {
            self.0
                .get(question)
                .map(|answer| (*question, answer.as_str()))
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("question is not part of the questionnaire: {0}")]
    UnknownQuestion(String),
}

/// Everything the user has entered so far in the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Responses {
    pub mood: Option<Mood>,
    pub answers: AnswerSet,
    pub journal: String,
}

/// Snapshot handed to the store once per submit. `mood` is written as its
/// display label, or an empty string when nothing was picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    #[serde(serialize_with = "serialize_mood_label")]
    pub mood: Option<Mood>,
    pub answers: AnswerSet,
    pub journal: String,
    pub created_at: DateTime<Utc>,
}

impl Submission {
    pub fn capture(responses: &Responses, created_at: DateTime<Utc>) -> Self {
        Self {
            mood: responses.mood,
            answers: responses.answers.clone(),
            journal: responses.journal.clone(),
            created_at,
        }
    }
}

fn serialize_mood_label<S>(mood: &Option<Mood>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(mood_label(*mood))
}

use std::collections::VecDeque;

use serde::Serialize;

use super::catalog::{mood_label, Mood};

/// Number of recent moods kept in the rolling history.
pub const MOOD_HISTORY_CAPACITY: usize = 5;

/// Rolling window of the moods recorded at each submit, oldest first.
/// Unselected moods are recorded as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MoodHistory(VecDeque<Option<Mood>>);

impl MoodHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last four entries followed by `mood`.
    pub fn append(&self, mood: Option<Mood>) -> Self {
        let mut next = self.clone();
        next.push(mood);
        next
    }

    pub fn push(&mut self, mood: Option<Mood>) {
        while self.0.len() >= MOOD_HISTORY_CAPACITY {
            self.0.pop_front();
        }
        self.0.push_back(mood);
    }

    pub fn entries(&self) -> impl Iterator<Item = Option<Mood>> + '_ {
        self.0.iter().copied()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.entries().map(mood_label).collect()
    }

    /// History as the result panel shows it, e.g. `😊 Happy → 😢 Sad`.
    pub fn trail(&self) -> String {
        self.labels().join(" → ")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

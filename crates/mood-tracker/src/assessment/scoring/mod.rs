mod policy;
mod rules;

pub use policy::{
    feedback, tier_for, FeedbackTier, HIGH_CONCERN_MESSAGE, HIGH_CONCERN_THRESHOLD,
    LOW_CONCERN_MESSAGE, MODERATE_CONCERN_MESSAGE, MODERATE_CONCERN_SCORE,
};
pub use rules::{score, NEGATIVE_TERMS};

use super::domain::AnswerSet;
use serde::{Deserialize, Serialize};

/// Stateless keyword classifier over an answer set. Mood, journal, and
/// history never influence the outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, answers: &AnswerSet) -> FeedbackResult {
        let (components, score) = rules::score_components(answers);
        let tier = tier_for(score);

        FeedbackResult {
            score,
            tier,
            message: tier.message().to_string(),
            components,
        }
    }
}

/// Per-question contribution, kept so a result can be audited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub question: String,
    pub normalized_answer: String,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackResult {
    pub score: u32,
    pub tier: FeedbackTier,
    pub message: String,
    pub components: Vec<ScoreComponent>,
}

use serde::{Deserialize, Serialize};

/// Scores at or above this value get the high-concern message.
pub const HIGH_CONCERN_THRESHOLD: u32 = 3;
/// The single score that maps to the moderate-concern message.
pub const MODERATE_CONCERN_SCORE: u32 = 2;

pub const HIGH_CONCERN_MESSAGE: &str = "You might be going through a tough time. Consider talking to a friend, journaling, or reaching out for support 💙";
pub const MODERATE_CONCERN_MESSAGE: &str = "Things seem a bit off, but you’re managing. Keep an eye on your mental health and try relaxing activities 🌿";
pub const LOW_CONCERN_MESSAGE: &str =
    "You seem to be doing okay. Keep up your good routines and stay connected! 😊";

/// Feedback bucket selected from a severity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    LowConcern,
    ModerateConcern,
    HighConcern,
}

impl FeedbackTier {
    pub const fn message(self) -> &'static str {
        match self {
            FeedbackTier::LowConcern => LOW_CONCERN_MESSAGE,
            FeedbackTier::ModerateConcern => MODERATE_CONCERN_MESSAGE,
            FeedbackTier::HighConcern => HIGH_CONCERN_MESSAGE,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FeedbackTier::LowConcern => "low_concern",
            FeedbackTier::ModerateConcern => "moderate_concern",
            FeedbackTier::HighConcern => "high_concern",
        }
    }
}

pub fn tier_for(score: u32) -> FeedbackTier {
    if score >= HIGH_CONCERN_THRESHOLD {
        FeedbackTier::HighConcern
    } else if score == MODERATE_CONCERN_SCORE {
        FeedbackTier::ModerateConcern
    } else {
        FeedbackTier::LowConcern
    }
}

pub fn feedback(score: u32) -> &'static str {
    tier_for(score).message()
}

use serde::{Deserialize, Serialize};

/// Emotional-state labels offered on the mood picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Calm,
    Neutral,
}

impl Mood {
    pub const fn ordered() -> [Self; 5] {
        [Self::Happy, Self::Sad, Self::Angry, Self::Calm, Self::Neutral]
    }

    /// Display label, which is also what gets written to the remote store.
    pub const fn label(self) -> &'static str {
        match self {
            Mood::Happy => "😊 Happy",
            Mood::Sad => "😢 Sad",
            Mood::Angry => "😡 Angry",
            Mood::Calm => "😌 Calm",
            Mood::Neutral => "😐 Neutral",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Calm => "calm",
            Mood::Neutral => "neutral",
        }
    }

    pub fn from_name(value: &str) -> Option<Self> {
        let needle = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|mood| mood.name() == needle)
    }
}

/// Label used when no mood was picked before submitting.
pub const UNSELECTED_MOOD_LABEL: &str = "";

pub fn mood_label(mood: Option<Mood>) -> &'static str {
    mood.map(Mood::label).unwrap_or(UNSELECTED_MOOD_LABEL)
}

/// Questionnaire prompts in display order. A prompt's text is its identity.
pub const QUESTIONS: [&str; 5] = [
    "How often do you feel overwhelmed?",
    "Do you sleep well most nights?",
    "Have you lost interest in things you used to enjoy?",
    "Do you feel connected to people around you?",
    "How is your energy level during the day?",
];

/// Returns the catalog's own `'static` copy of a prompt, if it exists.
pub fn find_question(text: &str) -> Option<&'static str> {
    QUESTIONS.iter().copied().find(|question| *question == text)
}

/// Side-panel content shown next to the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Motivation {
    pub title: &'static str,
    pub quote: &'static str,
    pub author: &'static str,
    pub note: &'static str,
    pub resource_label: &'static str,
    pub resource_url: &'static str,
}

pub const MOTIVATION: Motivation = Motivation {
    title: "✨ Thought of the Day",
    quote: "You have power over your mind – not outside events. Realize this, and you will find strength.",
    author: "Marcus Aurelius",
    note: "Small steps create lasting change. Breathe, reflect, and be kind to yourself. 💛",
    resource_label: "🌐 Get AI Mental Health Tips or Talk to a Therapist",
    resource_url: "https://www.betterhelp.com/advice/",
};

/// Serializable view of the static catalog for the UI boundary.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub moods: Vec<MoodOption>,
    pub questions: Vec<&'static str>,
    pub motivation: Motivation,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoodOption {
    pub mood: Mood,
    pub label: &'static str,
}

impl CatalogView {
    pub fn current() -> Self {
        Self {
            moods: Mood::ordered()
                .into_iter()
                .map(|mood| MoodOption {
                    mood,
                    label: mood.label(),
                })
                .collect(),
            questions: QUESTIONS.to_vec(),
            motivation: MOTIVATION,
        }
    }
}

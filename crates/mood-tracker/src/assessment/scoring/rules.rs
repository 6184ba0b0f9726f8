use super::super::domain::AnswerSet;
use super::ScoreComponent;

/// Answers that count as one point of concern once trimmed and lowercased.
pub const NEGATIVE_TERMS: [&str; 4] = ["no", "not really", "bad", "low"];

pub(crate) fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

pub(crate) fn is_negative(answer: &str) -> bool {
    let normalized = normalize(answer);
    NEGATIVE_TERMS.contains(&normalized.as_str())
}

/// Counts exact vocabulary matches across every recorded answer.
pub fn score(answers: &AnswerSet) -> u32 {
    answers.values().filter(|answer| is_negative(answer)).count() as u32
}

pub(crate) fn score_components(answers: &AnswerSet) -> (Vec<ScoreComponent>, u32) {
    let mut components = Vec::new();
    let mut total: u32 = 0;

    for (question, answer) in answers.in_catalog_order() {
        let points = u32::from(is_negative(answer));
        total += points;
        components.push(ScoreComponent {
            question: question.to_string(),
            normalized_answer: normalize(answer),
            points,
        });
    }

    (components, total)
}

use super::common::*;
use crate::assessment::catalog::QUESTIONS;
use crate::assessment::domain::AnswerSet;
use crate::assessment::scoring::{
    feedback, score, tier_for, FeedbackTier, ScoringEngine, HIGH_CONCERN_MESSAGE,
    HIGH_CONCERN_THRESHOLD, LOW_CONCERN_MESSAGE, MODERATE_CONCERN_MESSAGE,
    MODERATE_CONCERN_SCORE, NEGATIVE_TERMS,
};

#[test]
fn every_vocabulary_term_counts_once_regardless_of_case_and_padding() {
    for term in NEGATIVE_TERMS {
        for variant in [
            term.to_string(),
            term.to_uppercase(),
            format!("  {term}\t"),
        ] {
            let answers =
                AnswerSet::from_pairs([(QUESTIONS[0], variant.as_str())]).expect("known question");
            assert_eq!(score(&answers), 1, "variant {variant:?} should count");
        }
    }
}

#[test]
fn near_misses_and_empty_answers_score_zero() {
    let answers = AnswerSet::from_pairs([
        (QUESTIONS[0], "nope"),
        (QUESTIONS[1], "not really sure"),
        (QUESTIONS[2], ""),
        (QUESTIONS[3], "n o"),
        (QUESTIONS[4], "lowish"),
    ])
    .expect("catalog questions");
    assert_eq!(score(&answers), 0);
}

#[test]
fn empty_answer_set_is_low_concern() {
    let result = ScoringEngine::new().evaluate(&AnswerSet::new());
    assert_eq!(result.score, 0);
    assert_eq!(result.tier, FeedbackTier::LowConcern);
    assert_eq!(result.message, LOW_CONCERN_MESSAGE);
    assert!(result.components.is_empty());
}

#[test]
fn feedback_thresholds_follow_named_constants() {
    assert_eq!(feedback(0), LOW_CONCERN_MESSAGE);
    assert_eq!(feedback(1), LOW_CONCERN_MESSAGE);
    assert_eq!(feedback(MODERATE_CONCERN_SCORE), MODERATE_CONCERN_MESSAGE);
    assert_eq!(feedback(HIGH_CONCERN_THRESHOLD), HIGH_CONCERN_MESSAGE);
    assert_eq!(feedback(10), HIGH_CONCERN_MESSAGE);
    assert_eq!(tier_for(2), FeedbackTier::ModerateConcern);
    assert!(HIGH_CONCERN_MESSAGE.contains("reaching out for support"));
}

#[test]
fn three_negative_answers_reach_high_concern() {
    let result = ScoringEngine::new().evaluate(&struggling_answers());

    assert_eq!(result.score, 3);
    assert_eq!(result.tier, FeedbackTier::HighConcern);
    assert_eq!(result.message, HIGH_CONCERN_MESSAGE);

    let points: Vec<u32> = result
        .components
        .iter()
        .map(|component| component.points)
        .collect();
    assert_eq!(points, vec![1, 1, 1, 0, 0]);
    assert_eq!(result.components[1].normalized_answer, "no");
    assert_eq!(result.components[0].question, QUESTIONS[0]);
}

#[test]
fn score_never_exceeds_answered_questions() {
    let answers = AnswerSet::from_pairs(QUESTIONS.iter().map(|question| (*question, "bad")))
        .expect("catalog questions");
    assert_eq!(score(&answers), QUESTIONS.len() as u32);
    assert_eq!(
        ScoringEngine::new().evaluate(&answers).tier,
        FeedbackTier::HighConcern
    );
}

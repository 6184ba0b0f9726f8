use super::common::*;
use std::sync::Arc;

use chrono::Utc;

use crate::assessment::catalog::{Mood, QUESTIONS};
use crate::assessment::domain::AnswerError;
use crate::assessment::scoring::{FeedbackTier, HIGH_CONCERN_MESSAGE, LOW_CONCERN_MESSAGE};
use crate::assessment::service::AssessmentService;
use crate::assessment::session::AssessmentPhase;

#[tokio::test]
async fn submit_with_nothing_entered_still_succeeds() {
    let (service, store, _) = build_service();

    let outcome = service.submit();
    let result = outcome.view.result.clone().expect("result shown");
    assert_eq!(outcome.view.phase, AssessmentPhase::ResultShown);
    assert_eq!(result.score, 0);
    assert_eq!(result.message, LOW_CONCERN_MESSAGE);
    assert_eq!(result.mood, None);
    assert!(result.mood_line.is_none());
    assert_eq!(result.history.entries().collect::<Vec<_>>(), vec![None]);

    outcome.persistence.await.expect("persistence task joins");
    let records = store.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].mood, None);
    assert!(records[0].answers.is_empty());
}

#[tokio::test]
async fn struggling_answers_produce_high_concern_result() {
    let (service, store, _) = build_service();
    service.select_mood(Some(Mood::Sad));
    for (question, answer) in struggling_answers().in_catalog_order() {
        service.answer(question, answer).expect("catalog question");
    }
    service.write_journal("rough week");

    let outcome = service.submit();
    let result = outcome.view.result.clone().expect("result shown");
    assert_eq!(result.score, 3);
    assert_eq!(result.tier, FeedbackTier::HighConcern);
    assert_eq!(result.message, HIGH_CONCERN_MESSAGE);
    assert_eq!(
        result.mood_line.as_deref(),
        Some("You’re feeling 😢 Sad today.")
    );

    outcome.persistence.await.expect("persistence task joins");
    let records = store.records();
    assert_eq!(records[0].journal, "rough week");
    assert_eq!(records[0].answers.get(QUESTIONS[1]), " No ");
}

#[tokio::test]
async fn rapid_submits_each_write_and_extend_history() {
    let (service, store, _) = build_service();
    service.select_mood(Some(Mood::Calm));

    let first = service.submit();
    let second = service.submit();
    first.persistence.await.expect("first write joins");
    second.persistence.await.expect("second write joins");

    assert_eq!(store.records().len(), 2);
    let history = second.view.result.expect("result shown").history;
    assert_eq!(
        history.entries().collect::<Vec<_>>(),
        vec![Some(Mood::Calm), Some(Mood::Calm)]
    );
}

#[tokio::test]
async fn result_is_visible_before_the_write_settles() {
    let store = Arc::new(GatedStore::default());
    let service = AssessmentService::new(
        store.clone(),
        Arc::new(MemoryClipboard::default()),
        PAGE_URL,
    );
    service.select_mood(Some(Mood::Happy));

    let outcome = service.submit();
    assert!(outcome.view.result.is_some());
    assert_eq!(service.view().phase, AssessmentPhase::ResultShown);
    assert!(store.inner.records().is_empty());

    store.release.notify_one();
    outcome.persistence.await.expect("persistence task joins");
    assert_eq!(store.inner.records().len(), 1);
}

#[tokio::test]
async fn store_failures_do_not_reach_the_caller() {
    let service = AssessmentService::new(
        Arc::new(UnavailableStore),
        Arc::new(MemoryClipboard::default()),
        PAGE_URL,
    );

    let outcome = service.submit();
    assert!(outcome.view.result.is_some());
    outcome
        .persistence
        .await
        .expect("failed write is swallowed, not panicked");
    assert_eq!(service.view().result.map(|result| result.score), Some(0));
}

#[tokio::test]
async fn history_window_keeps_last_five_submissions() {
    let (service, _, _) = build_service();
    let moods = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Calm,
        Mood::Neutral,
        Mood::Happy,
        Mood::Sad,
    ];

    let mut last = None;
    for mood in moods {
        service.select_mood(Some(mood));
        last = Some(service.submit().view);
    }

    let result = last.and_then(|view| view.result).expect("result shown");
    assert_eq!(
        result.history_trail,
        "😡 Angry → 😌 Calm → 😐 Neutral → 😊 Happy → 😢 Sad"
    );
}

#[tokio::test]
async fn unknown_questions_are_rejected_without_touching_state() {
    let (service, _, _) = build_service();

    let err = service
        .answer("Favourite food?", "pizza")
        .expect_err("unknown question");
    assert!(matches!(err, AnswerError::UnknownQuestion(_)));
    assert!(service.view().answers.is_empty());
    assert_eq!(service.view().phase, AssessmentPhase::Editing);
}

#[tokio::test]
async fn submission_is_timestamped_at_submit() {
    let (service, store, _) = build_service();
    service.write_journal("drafted earlier");

    let before = Utc::now();
    let outcome = service.submit();
    let after = Utc::now();

    outcome.persistence.await.expect("persistence task joins");
    let created_at = store.records()[0].created_at;
    assert!(
        before <= created_at && created_at <= after,
        "created_at {created_at} outside [{before}, {after}]"
    );
}

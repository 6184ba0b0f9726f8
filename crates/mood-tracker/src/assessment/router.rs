use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::catalog::{CatalogView, Mood};
use super::domain::AnswerError;
use super::service::AssessmentService;
use super::share::Clipboard;
use super::store::SubmissionStore;

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    #[serde(default)]
    pub mood: Option<Mood>,
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct JournalRequest {
    #[serde(default)]
    pub journal: String,
}

/// Router builder exposing the assessment page as JSON endpoints.
pub fn assessment_router<S, C>(service: Arc<AssessmentService<S, C>>) -> Router
where
    S: SubmissionStore,
    C: Clipboard,
{
    Router::new()
        .route("/api/v1/assessment", get(view_handler::<S, C>))
        .route("/api/v1/assessment/catalog", get(catalog_handler))
        .route("/api/v1/assessment/mood", put(mood_handler::<S, C>))
        .route("/api/v1/assessment/answers", put(answer_handler::<S, C>))
        .route("/api/v1/assessment/journal", put(journal_handler::<S, C>))
        .route("/api/v1/assessment/submit", post(submit_handler::<S, C>))
        .route("/api/v1/assessment/share", get(share_handler::<S, C>))
        .route("/api/v1/assessment/share/copy", post(copy_handler::<S, C>))
        .with_state(service)
}

pub(crate) async fn catalog_handler() -> Json<CatalogView> {
    Json(CatalogView::current())
}

pub(crate) async fn view_handler<S, C>(
    State(service): State<Arc<AssessmentService<S, C>>>,
) -> Response
where
    S: SubmissionStore,
    C: Clipboard,
{
    (StatusCode::OK, Json(service.view())).into_response()
}

pub(crate) async fn mood_handler<S, C>(
    State(service): State<Arc<AssessmentService<S, C>>>,
    Json(request): Json<MoodRequest>,
) -> Response
where
    S: SubmissionStore,
    C: Clipboard,
{
    (StatusCode::OK, Json(service.select_mood(request.mood))).into_response()
}

pub(crate) async fn answer_handler<S, C>(
    State(service): State<Arc<AssessmentService<S, C>>>,
    Json(request): Json<AnswerRequest>,
) -> Response
where
    S: SubmissionStore,
    C: Clipboard,
{
    match service.answer(&request.question, request.answer) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error @ AnswerError::UnknownQuestion(_)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn journal_handler<S, C>(
    State(service): State<Arc<AssessmentService<S, C>>>,
    Json(request): Json<JournalRequest>,
) -> Response
where
    S: SubmissionStore,
    C: Clipboard,
{
    (StatusCode::OK, Json(service.write_journal(request.journal))).into_response()
}

pub(crate) async fn submit_handler<S, C>(
    State(service): State<Arc<AssessmentService<S, C>>>,
) -> Response
where
    S: SubmissionStore,
    C: Clipboard,
{
    let outcome = service.submit();
    (StatusCode::OK, Json(outcome.view)).into_response()
}

pub(crate) async fn share_handler<S, C>(
    State(service): State<Arc<AssessmentService<S, C>>>,
) -> Response
where
    S: SubmissionStore,
    C: Clipboard,
{
    (StatusCode::OK, Json(service.share_links())).into_response()
}

pub(crate) async fn copy_handler<S, C>(
    State(service): State<Arc<AssessmentService<S, C>>>,
) -> Response
where
    S: SubmissionStore,
    C: Clipboard,
{
    (StatusCode::OK, Json(service.copy_link().await)).into_response()
}

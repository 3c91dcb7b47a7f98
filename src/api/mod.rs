pub mod categories;
pub mod deserializers;
pub mod health;
pub mod questions;
pub mod quizzes;
pub mod search;

use crate::config::Config;
use crate::db::Repository;
use crate::engine::PageRequest;
use crate::error::AppError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::http::{header, Method};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Config,
}

impl AppState {
    pub fn new(repo: Arc<Repository>, config: Config) -> Self {
        Self { repo, config }
    }

    /// Coerce `page`/`limit` query values using the configured page size.
    pub fn page_request(&self, query: &PageQuery) -> PageRequest {
        PageRequest::from_params(
            query.page.as_deref(),
            query.limit.as_deref(),
            self.config.questions_per_page,
        )
    }
}

/// Raw paging parameters. Kept as strings so junk values fall back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/categories", get(categories::get_categories))
        .route(
            "/categories/:category_id/questions",
            get(categories::get_category_questions),
        )
        .route(
            "/questions",
            get(questions::get_questions).post(questions::create_question),
        )
        .route("/questions/search", post(search::search_questions))
        .route("/questions/:question_id", delete(questions::delete_question))
        .route("/quizzes", post(quizzes::play_quiz))
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("no route".into())
}

/// Unwrap a JSON body. Well-formed JSON of the wrong shape is unprocessable;
/// anything else (bad syntax, wrong content type) is a bad request.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::JsonDataError(e)) => Err(AppError::Unprocessable(e.body_text())),
        Err(e) => Err(AppError::BadRequest(e.body_text())),
    }
}

/// Unwrap an integer path id. A non-integer segment means no such resource.
pub(crate) fn path_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    path.map(|Path(id)| id)
        .map_err(|e| AppError::NotFound(e.body_text()))
}

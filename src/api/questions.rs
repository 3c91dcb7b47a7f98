use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::api::deserializers::deserialize_optional_int;
use crate::api::{json_body, path_id, AppState, PageQuery};
use crate::domain::{category_map, CategoryMap, NewQuestion, Question};
use crate::engine::PageRequest;
use crate::error::{AppError, ErrorEnvelope};

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
    pub total_questions: i64,
    pub questions: Vec<Question>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i64,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub question_created: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionBody {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_int")]
    pub category: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_int")]
    pub difficulty: Option<i64>,
}

impl CreateQuestionBody {
    /// `None` if any of the four fields is missing.
    pub fn into_new_question(self) -> Option<NewQuestion> {
        Some(NewQuestion {
            question: self.question?,
            answer: self.answer?,
            category: self.category?,
            difficulty: self.difficulty?,
        })
    }
}

pub async fn get_questions(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let page = state.page_request(&params);
    let questions = state.repo.list_questions_page(&page).await?;
    if questions.is_empty() {
        return Err(AppError::NotFound(format!(
            "page {} (limit {}) is empty",
            page.page(),
            page.limit()
        )));
    }

    let total_questions = state.repo.count_questions().await?;
    let categories = state.repo.list_categories().await?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions,
        total_questions,
        categories: category_map(&categories),
    }))
}

pub async fn delete_question(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    Query(params): Query<PageQuery>,
) -> Result<Json<DeletedResponse>, AppError> {
    let question_id = path_id(path)?;

    let existing = state
        .repo
        .get_question(question_id)
        .await
        .map_err(|e| unprocessable("look up question", e))?;
    let Some(question) = existing else {
        warn!(question_id, "delete requested for unknown question");
        return Err(AppError::NotFound(format!("question {}", question_id)));
    };

    let deleted = state
        .repo
        .delete_question(question.id)
        .await
        .map_err(|e| unprocessable("delete question", e))?;
    if !deleted {
        // removed by a concurrent request between lookup and delete
        return Err(AppError::NotFound(format!("question {}", question_id)));
    }
    info!(question_id, category = question.category, "question deleted");

    let page = state.page_request(&params);
    let (questions, total_questions) = listing_after_write(&state, &page).await?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted: question_id,
        total_questions,
        questions,
    }))
}

pub async fn create_question(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
    payload: Result<Json<CreateQuestionBody>, JsonRejection>,
) -> Result<Response, AppError> {
    let body = json_body(payload)?;
    let Some(new_question) = body.into_new_question() else {
        warn!("create question rejected: missing fields");
        return Ok(Json(ErrorEnvelope::new(422, "Missing information")).into_response());
    };

    if !new_question.has_valid_difficulty() {
        return Err(AppError::Unprocessable(format!(
            "difficulty {} out of range",
            new_question.difficulty
        )));
    }

    let stored = state
        .repo
        .insert_question(&new_question)
        .await
        .map_err(|e| unprocessable("insert question", e))?;
    info!(question_id = stored.id, category = stored.category, "question created");

    let page = state.page_request(&params);
    let (questions, total_questions) = listing_after_write(&state, &page).await?;

    Ok(Json(CreatedResponse {
        success: true,
        created: stored.id,
        questions,
        total_questions,
        question_created: stored.question,
    })
    .into_response())
}

/// The requested page of all questions plus the new total.
async fn listing_after_write(
    state: &AppState,
    page: &PageRequest,
) -> Result<(Vec<Question>, i64), AppError> {
    let questions = state
        .repo
        .list_questions_page(page)
        .await
        .map_err(|e| unprocessable("list questions", e))?;
    let total = state
        .repo
        .count_questions()
        .await
        .map_err(|e| unprocessable("count questions", e))?;
    Ok((questions, total))
}

fn unprocessable(action: &str, err: sqlx::Error) -> AppError {
    error!(error = %err, "{} failed", action);
    AppError::Unprocessable(format!("{} failed: {}", action, err))
}

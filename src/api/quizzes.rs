use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::deserializers::deserialize_optional_category_id;
use crate::api::{json_body, AppState};
use crate::domain::Question;
use crate::engine::{select_next, QuizOutcome, QuizRequest};
use crate::error::{AppError, ErrorEnvelope};

pub const FINISHED_MESSAGE: &str = "You finished all questions";

#[derive(Debug, Default, Deserialize)]
pub struct QuizBody {
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
    #[serde(default, deserialize_with = "deserialize_optional_category_id")]
    pub quiz_category: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QuizResponse {
    Question { success: bool, question: Question },
    Finished { success: bool, message: String },
}

/// Serve a random question from the category that the client has not seen.
///
/// Missing values keep HTTP 200 and report `error: 404` in the body. An
/// unknown category is a bad request.
pub async fn play_quiz(
    State(state): State<AppState>,
    payload: Result<Json<QuizBody>, JsonRejection>,
) -> Result<Response, AppError> {
    let body = json_body(payload)?;
    let Some(request) = QuizRequest::new(body.previous_questions, body.quiz_category) else {
        return Ok(Json(ErrorEnvelope::new(404, "Missing values")).into_response());
    };

    if state.repo.get_category(request.category).await?.is_none() {
        return Err(AppError::BadRequest(format!(
            "unknown quiz category {}",
            request.category
        )));
    }

    let pool = state.repo.questions_in_category(request.category).await?;

    let outcome = {
        let mut rng = rand::thread_rng();
        select_next(&pool, &request.previous, &mut rng)
    };

    let response = match outcome {
        QuizOutcome::Next(question) => {
            debug!(
                category = request.category,
                question_id = question.id,
                served = request.previous.len(),
                "quiz question selected"
            );
            QuizResponse::Question {
                success: true,
                question: question.clone(),
            }
        }
        QuizOutcome::Finished => {
            debug!(category = request.category, "quiz category exhausted");
            QuizResponse::Finished {
                success: true,
                message: FINISHED_MESSAGE.to_string(),
            }
        }
    };

    Ok(Json(response).into_response())
}

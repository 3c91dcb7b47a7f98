use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::api::{json_body, AppState, PageQuery};
use crate::domain::Question;
use crate::engine::paginate;
use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct SearchBody {
    #[serde(default, alias = "searchTerm")]
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Case-insensitive substring search over question text. No matches is a
/// successful empty result; a missing or empty term is not found.
pub async fn search_questions(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
    payload: Result<Json<SearchBody>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let term = json_body(payload)?
        .title
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::NotFound("search term missing".into()))?;

    let selection = state.repo.search_questions(&term).await.map_err(|e| {
        error!(error = %e, term = %term, "search failed");
        AppError::NotFound(format!("search failed: {}", e))
    })?;
    let page = state.page_request(&params);

    Ok(Json(SearchResponse {
        success: true,
        questions: paginate(&selection, &page).to_vec(),
        total_questions: selection.len(),
    }))
}

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use crate::api::{path_id, AppState, PageQuery};
use crate::domain::{category_map, CategoryMap, Question};
use crate::engine::paginate;
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Count of every stored question, not just this category's.
    pub total_questions: i64,
    pub current_category: String,
}

pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = state.repo.list_categories().await?;
    if categories.is_empty() {
        return Err(AppError::NotFound("no categories stored".into()));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(&categories),
    }))
}

pub async fn get_category_questions(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    Query(params): Query<PageQuery>,
) -> Result<Json<CategoryQuestionsResponse>, AppError> {
    let category_id = path_id(path)?;
    let category = state
        .repo
        .get_category(category_id)
        .await?
        .ok_or_else(|| AppError::BadRequest(format!("unknown category {}", category_id)))?;

    let selection = state.repo.questions_in_category(category.id).await?;
    let total_questions = state.repo.count_questions().await?;
    let page = state.page_request(&params);

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: paginate(&selection, &page).to_vec(),
        total_questions,
        current_category: category.kind,
    }))
}

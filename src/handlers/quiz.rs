// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    access::Caller,
    error::AppError,
    models::quiz::{QuizRequest, Submission},
    state::AppState,
};

/// Creates a test in a section. Returns 201 with the test summary.
pub async fn create_test(
    State(state): State<AppState>,
    caller: Caller,
    Path(section_id): Path<i64>,
    Json(payload): Json<QuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let summary = state.quizzes.create(&caller, section_id, payload).await?;
    Ok((StatusCode::CREATED, Json(summary)))
}

/// Full test including correct answers. Owners and admins only.
pub async fn get_test_for_editing(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = state.quizzes.get_for_editing(&caller, id).await?;
    Ok(Json(quiz))
}

pub async fn update_test(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i64>,
    Json(payload): Json<QuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = state.quizzes.update(&caller, id, payload).await?;
    Ok(Json(quiz))
}

pub async fn delete_test(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.quizzes.delete(&caller, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Test without correct answers, for taking it.
pub async fn get_test(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let quiz = state.quizzes.get_for_taking(&caller, id).await?;
    Ok(Json(quiz))
}

/// Grades the caller's single attempt and returns the score.
pub async fn submit_test(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i64>,
    Json(payload): Json<Submission>,
) -> Result<impl IntoResponse, AppError> {
    let score = state.quizzes.submit(&caller, id, &payload).await?;
    Ok(Json(json!({
        "test_id": id,
        "score": score,
    })))
}

pub async fn my_results(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let results = state.quizzes.results_for_student(&caller).await?;
    Ok(Json(results))
}

pub async fn course_results(
    State(state): State<AppState>,
    caller: Caller,
    Path(course_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let results = state.quizzes.results_for_course(&caller, course_id).await?;
    Ok(Json(results))
}

pub async fn test_results(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let results = state.quizzes.results_for_test(&caller, id).await?;
    Ok(Json(results))
}

// src/handlers/course.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{access::Caller, error::AppError, models::course::CourseRequest, state::AppState};

pub async fn create_course(
    State(state): State<AppState>,
    caller: Caller,
    Json(payload): Json<CourseRequest>,
) -> Result<impl IntoResponse, AppError> {
    let course = state.courses.create(&caller, payload).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// Courses visible to the caller: all, taught, or attended depending on role.
pub async fn list_courses(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let courses = state.courses.list(&caller).await?;
    Ok(Json(courses))
}

/// Course detail with sections, tasks, materials and test summaries.
pub async fn get_course(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let course = state.courses.get_with_content(&caller, id).await?;
    Ok(Json(course))
}

pub async fn delete_course(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.courses.delete(&caller, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn enroll(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.courses.enroll(&caller, id).await?;
    Ok(StatusCode::CREATED)
}

pub async fn unenroll(
    State(state): State<AppState>,
    caller: Caller,
    Path((course_id, student_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    state.courses.unenroll(&caller, course_id, student_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn participants(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let participants = state.courses.participants(&caller, id).await?;
    Ok(Json(participants))
}

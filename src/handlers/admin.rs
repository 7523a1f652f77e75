// src/handlers/admin.rs

//! User administration and reports. Everything here sits behind `admin_middleware`.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    access::Caller,
    error::AppError,
    models::user::{AdminUserUpdateRequest, Role},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct UserFilter {
    pub role: Option<Role>,
}

/// Lists all users, optionally filtered by `?role=`.
pub async fn list_users(
    State(state): State<AppState>,
    Query(filter): Query<UserFilter>,
) -> Result<impl IntoResponse, AppError> {
    let users = state.users.list(filter.role).await?;
    Ok(Json(users))
}

/// Activates a pending account.
pub async fn approve_user(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.users.approve(&caller, id).await?;
    Ok(Json(user))
}

/// Partially updates another user's account.
pub async fn update_user(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i64>,
    Json(payload): Json<AdminUserUpdateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.users.update(&caller, id, payload).await?;
    Ok(Json(user))
}

/// Deactivates an account. Users are never hard-deleted.
pub async fn deactivate_user(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.users.deactivate(&caller, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_teachers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let teachers = state.users.list(Some(Role::Teacher)).await?;
    Ok(Json(teachers))
}

pub async fn list_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = state.users.list(Some(Role::Student)).await?;
    Ok(Json(students))
}

pub async fn teacher_courses(
    State(state): State<AppState>,
    Path(teacher_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let courses = state.courses.list_by_teacher(teacher_id).await?;
    Ok(Json(courses))
}

pub async fn student_courses(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let courses = state.courses.list_by_student(student_id).await?;
    Ok(Json(courses))
}

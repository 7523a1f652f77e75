// src/handlers/content.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    access::Caller,
    error::AppError,
    models::content::{MaterialRequest, SectionRequest, TaskRequest},
    state::AppState,
};

pub async fn create_section(
    State(state): State<AppState>,
    caller: Caller,
    Path(course_id): Path<i64>,
    Json(payload): Json<SectionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let section = state.content.create_section(&caller, course_id, payload).await?;
    Ok((StatusCode::CREATED, Json(section)))
}

pub async fn create_task(
    State(state): State<AppState>,
    caller: Caller,
    Path(section_id): Path<i64>,
    Json(payload): Json<TaskRequest>,
) -> Result<impl IntoResponse, AppError> {
    let task = state.content.create_task(&caller, section_id, payload).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn get_task(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let task = state.content.get_task(&caller, id).await?;
    Ok(Json(task))
}

pub async fn update_task(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i64>,
    Json(payload): Json<TaskRequest>,
) -> Result<impl IntoResponse, AppError> {
    let task = state.content.update_task(&caller, id, payload).await?;
    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.content.delete_task(&caller, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn create_material(
    State(state): State<AppState>,
    caller: Caller,
    Path(section_id): Path<i64>,
    Json(payload): Json<MaterialRequest>,
) -> Result<impl IntoResponse, AppError> {
    let material = state
        .content
        .create_material(&caller, section_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(material)))
}

pub async fn get_material(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let material = state.content.get_material(&caller, id).await?;
    Ok(Json(material))
}

pub async fn update_material(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i64>,
    Json(payload): Json<MaterialRequest>,
) -> Result<impl IntoResponse, AppError> {
    let material = state.content.update_material(&caller, id, payload).await?;
    Ok(Json(material))
}

pub async fn delete_material(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.content.delete_material(&caller, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

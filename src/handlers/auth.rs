// src/handlers/auth.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    access::Caller,
    error::AppError,
    models::user::{LoginRequest, RegisterRequest},
    state::AppState,
};

/// Registers a new user.
///
/// Hashes the password using Argon2 before storing it. The account stays
/// inactive until an admin approves it.
/// Returns 201 Created and the user object (excluding password).
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.users.register(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Authenticates a user and returns a JWT token.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.users.login(payload).await?;
    Ok(Json(response))
}

/// Returns the account behind the presented token.
pub async fn me(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, AppError> {
    let user = state.users.get(caller.id).await?;
    Ok(Json(user))
}

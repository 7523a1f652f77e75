// src/repositories/user_repository.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::{AppError, AppResult, map_unique_violation},
    models::user::{AdminUserUpdateRequest, NewUser, Role, User, UserRow},
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a user. A taken email is a `Conflict`.
    async fn create(&self, user: NewUser) -> AppResult<i64>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    /// All users, or only those with `role`, newest first.
    async fn list(&self, role: Option<Role>) -> AppResult<Vec<User>>;
    /// Returns false when no such user exists.
    async fn set_active(&self, id: i64, active: bool) -> AppResult<bool>;
    /// Overwrites only the fields present in `changes`. Returns false when no
    /// such user exists; an email taken by someone else is a `BadRequest`.
    async fn update(&self, id: i64, changes: &AdminUserUpdateRequest) -> AppResult<bool>;
}

pub const EMAIL_TAKEN_MESSAGE: &str = "Email address already taken by another user.";

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: NewUser) -> AppResult<i64> {
        let conflict = AppError::Conflict(format!("Email '{}' already exists", user.email));
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO users (email, password, full_name, role, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.full_name)
        .bind(user.role.as_str())
        .bind(user.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, conflict))?;

        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password, full_name, role, is_active, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password, full_name, role, is_active, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    async fn list(&self, role: Option<Role>) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password, full_name, role, is_active, created_at
            FROM users
            WHERE ($1::TEXT IS NULL OR role = $1)
            ORDER BY id DESC
            "#,
        )
        .bind(role.map(|r| r.as_str()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list users: {:?}", e);
            AppError::from(e)
        })?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn set_active(&self, id: i64, active: bool) -> AppResult<bool> {
        let result = sqlx::query("UPDATE users SET is_active = $1 WHERE id = $2")
            .bind(active)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn update(&self, id: i64, changes: &AdminUserUpdateRequest) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                full_name = COALESCE($1, full_name),
                email = COALESCE($2, email),
                role = COALESCE($3, role),
                is_active = COALESCE($4, is_active)
            WHERE id = $5
            "#,
        )
        .bind(changes.full_name.as_deref())
        .bind(changes.email.as_deref())
        .bind(changes.role.map(|r| r.as_str()))
        .bind(changes.is_active)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, AppError::BadRequest(EMAIL_TAKEN_MESSAGE.to_string()))
        })?;

        Ok(result.rows_affected() > 0)
    }
}

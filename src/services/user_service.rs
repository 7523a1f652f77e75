// src/services/user_service.rs

use std::sync::Arc;

use validator::Validate;

use crate::{
    access::Caller,
    error::{AppError, AppResult},
    models::user::{
        AdminUserUpdateRequest, AuthResponse, LoginRequest, NewUser, RegisterRequest, Role, User,
    },
    repositories::UserRepository,
    utils::{
        hash::{hash_password, verify_password},
        jwt::sign_jwt,
    },
};

pub struct UserService {
    users: Arc<dyn UserRepository>,
    jwt_secret: String,
    jwt_expiration: u64,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, jwt_secret: String, jwt_expiration: u64) -> Self {
        Self {
            users,
            jwt_secret,
            jwt_expiration,
        }
    }

    /// Registers a new account. Accounts start inactive until an admin approves them.
    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        request.validate()?;

        if request.role == Role::Admin {
            return Err(AppError::BadRequest(
                "Cannot register with the ADMIN role".to_string(),
            ));
        }

        let password_hash = hash_password(&request.password)?;
        let id = self
            .users
            .create(NewUser {
                email: request.email,
                password_hash,
                full_name: request.full_name,
                role: request.role,
                is_active: false,
            })
            .await?;

        tracing::info!(user_id = id, "Registered new user, awaiting approval");
        self.get(id).await
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        request.validate()?;

        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::AuthError("Invalid email or password".to_string()))?;

        if !verify_password(&request.password, &user.password)? {
            return Err(AppError::AuthError("Invalid email or password".to_string()));
        }

        if !user.is_active {
            return Err(AppError::Forbidden(
                "Account is inactive. Waiting for admin approval.".to_string(),
            ));
        }

        let token = sign_jwt(user.id, user.role, &self.jwt_secret, self.jwt_expiration)?;

        Ok(AuthResponse {
            token,
            token_type: "Bearer",
            user,
        })
    }

    pub async fn get(&self, id: i64) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn list(&self, role: Option<Role>) -> AppResult<Vec<User>> {
        self.users.list(role).await
    }

    pub async fn approve(&self, caller: &Caller, id: i64) -> AppResult<User> {
        if caller.id == id {
            return Err(AppError::BadRequest("Cannot approve own account".to_string()));
        }
        if !self.users.set_active(id, true).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        tracing::info!(user_id = id, admin_id = caller.id, "User approved");
        self.get(id).await
    }

    pub async fn deactivate(&self, caller: &Caller, id: i64) -> AppResult<()> {
        if caller.id == id {
            return Err(AppError::BadRequest(
                "Cannot deactivate own account".to_string(),
            ));
        }

        let user = self.get(id).await?;
        if !user.is_active {
            return Err(AppError::BadRequest("User is already inactive".to_string()));
        }

        self.users.set_active(id, false).await?;
        tracing::info!(user_id = id, admin_id = caller.id, "User deactivated");
        Ok(())
    }

    /// Edits another user's name, email, role or active flag.
    pub async fn update(
        &self,
        caller: &Caller,
        id: i64,
        changes: AdminUserUpdateRequest,
    ) -> AppResult<User> {
        if caller.id == id {
            return Err(AppError::BadRequest("Cannot modify own account".to_string()));
        }
        changes.validate()?;

        if !self.users.update(id, &changes).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        tracing::info!(user_id = id, admin_id = caller.id, "User updated");
        self.get(id).await
    }

    /// Creates the bootstrap administrator unless the email is already taken.
    /// Returns whether a user was created.
    pub async fn seed_admin(&self, email: &str, password: &str) -> AppResult<bool> {
        if self.users.find_by_email(email).await?.is_some() {
            return Ok(false);
        }

        let password_hash = hash_password(password)?;
        self.users
            .create(NewUser {
                email: email.to_string(),
                password_hash,
                full_name: "Administrator".to_string(),
                role: Role::Admin,
                is_active: true,
            })
            .await?;

        tracing::info!("Seeded admin user: {}", email);
        Ok(true)
    }
}

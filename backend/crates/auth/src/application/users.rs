//! User Management Use Cases
//!
//! Listing, detail, update and soft delete for user records.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_id::UserId,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

// ============================================================================
// List / Get
// ============================================================================

/// List users use case
pub struct ListUsersUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> ListUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// List all non-deleted users
    pub async fn execute(&self) -> AuthResult<Vec<User>> {
        self.repo.list().await
    }
}

/// Get user use case
pub struct GetUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> GetUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &UserId) -> AuthResult<User> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}

// ============================================================================
// Update
// ============================================================================

/// Fields to update; `None` leaves the stored value unchanged
#[derive(Debug, Default)]
pub struct UpdateUserInput {
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

/// Update user use case (serves both PATCH and PUT)
pub struct UpdateUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &UserId, input: UpdateUserInput) -> AuthResult<User> {
        let mut user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if let Some(name) = input.name {
            user.set_name(name);
        }

        if let Some(username) = input.username {
            let username = UserName::new(username)
                .map_err(|e| AuthError::field("username", e.to_string()))?;
            if username != user.username && self.repo.count_by_username(&username).await? != 0 {
                return Err(AuthError::DuplicateUsername);
            }
            user.set_username(username);
        }

        if let Some(password) = input.password {
            let raw = RawPassword::new(password)
                .map_err(|e| AuthError::PasswordValidation(e.message().to_string()))?;
            let hash = UserPassword::from_raw(&raw)
                .map_err(|e| AuthError::Internal(e.to_string()))?;
            user.set_password(hash);
        }

        if let Some(role) = input.role {
            user.set_role(Some(role));
        }

        if let Some(is_active) = input.is_active {
            user.set_active(is_active);
        }

        self.repo.update(&user).await?;

        tracing::info!(user_id = %user.user_id, "User updated");

        Ok(user)
    }
}

// ============================================================================
// Delete
// ============================================================================

/// Soft-delete user use case
pub struct DeleteUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Mark the user deleted and return the final state of the record
    pub async fn execute(&self, user_id: &UserId) -> AuthResult<User> {
        let mut user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        self.repo.soft_delete(user_id).await?;
        user.soft_delete();

        tracing::info!(user_id = %user.user_id, "User soft-deleted");

        Ok(user)
    }
}

//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub username: String,
    pub password: String,
    /// Only set when an administrator creates the account
    pub role: Option<String>,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<User> {
        let username =
            UserName::new(input.username).map_err(|e| AuthError::field("username", e.to_string()))?;

        // Fast-path duplicate check. Not atomic against a concurrent
        // registration; the unique index is the authoritative guard and
        // surfaces as the same error.
        if self.repo.count_by_username(&username).await? != 0 {
            return Err(AuthError::DuplicateUsername);
        }

        let raw = RawPassword::new(input.password)
            .map_err(|e| AuthError::PasswordValidation(e.message().to_string()))?;
        let password_hash = UserPassword::from_raw(&raw)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(input.name, username, password_hash, input.role);

        self.repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User registered"
        );

        Ok(user)
    }
}

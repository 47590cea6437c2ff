//! Logout Use Case
//!
//! Closes a user's session by clearing the stored refresh token.
//! Outstanding access tokens are untouched and stay valid until their own
//! expiry; only refresh is revoked here.

use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> LogoutUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Clear the stored refresh token. Idempotent: logging out with no open
    /// session is a no-op success.
    pub async fn execute(&self, user_id: &UserId) -> AuthResult<()> {
        self.repo.update_refresh_token(user_id, None).await?;

        tracing::info!(user_id = %user_id, "User logged out");
        Ok(())
    }
}

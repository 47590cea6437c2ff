//! Login Use Case
//!
//! Authenticates a user and opens a session by persisting a fresh refresh
//! token on the user record.

use std::sync::Arc;

use crate::application::credentials::CredentialVerifier;
use crate::application::token::{TokenCodec, TokenKind};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub access_token: String,
    pub refresh_token: String,
    /// The authenticated user; callers must render a password-stripped view
    pub user: User,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    codec: Arc<TokenCodec>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, codec: Arc<TokenCodec>) -> Self {
        Self { repo, codec }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let verifier = CredentialVerifier::new(self.repo.clone());
        let user = verifier.verify(&input.username, &input.password).await?;

        let access_token = self
            .codec
            .issue(&user.user_id, user.username.as_str(), TokenKind::Access)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let refresh_token = self
            .codec
            .issue(&user.user_id, user.username.as_str(), TokenKind::Refresh)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Persisting the new refresh token invalidates any previous one
        self.repo
            .update_refresh_token(&user.user_id, Some(&refresh_token))
            .await?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User logged in"
        );

        Ok(LoginOutput {
            access_token,
            refresh_token,
            user,
        })
    }
}

//! Refresh Token Use Case
//!
//! Exchanges a valid refresh token for a new token pair, rotating the
//! stored refresh token in the process. The stored value is the single
//! point of revocation: a token that no longer matches it is dead even if
//! its signature and expiry are fine.

use std::sync::Arc;

use crate::application::token::{TokenCodec, TokenKind};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Refresh output: the rotated token pair
#[derive(Debug)]
pub struct RefreshOutput {
    pub access_token: String,
    pub refresh_token: String,
}

/// Refresh token use case
pub struct RefreshTokenUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    codec: Arc<TokenCodec>,
}

impl<R> RefreshTokenUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, codec: Arc<TokenCodec>) -> Self {
        Self { repo, codec }
    }

    /// Rotate the token pair
    ///
    /// Every failure in this path, whatever its cause, is reported as
    /// [`AuthError::InvalidToken`] so the response never reveals whether
    /// the token was forged, expired, rotated out, or orphaned.
    pub async fn execute(&self, presented: &str) -> AuthResult<RefreshOutput> {
        self.rotate(presented).await.map_err(|e| {
            if !matches!(e, AuthError::InvalidToken) {
                tracing::warn!(error = %e, "Refresh failed, collapsing to invalid-token");
            }
            AuthError::InvalidToken
        })
    }

    async fn rotate(&self, presented: &str) -> AuthResult<RefreshOutput> {
        let claims = self
            .codec
            .verify(presented)
            .map_err(|_| AuthError::InvalidToken)?;

        let user_id = UserId::from_uuid(claims.sub);

        let user = self
            .repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        // Must match the stored value byte for byte; rejects rotated-out
        // and logged-out tokens before their natural expiry
        if user.refresh_token.as_deref() != Some(presented) {
            return Err(AuthError::InvalidToken);
        }

        let access_token = self
            .codec
            .issue(&user.user_id, user.username.as_str(), TokenKind::Access)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let refresh_token = self
            .codec
            .issue(&user.user_id, user.username.as_str(), TokenKind::Refresh)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Last writer wins: concurrent refreshes race here and the loser's
        // pair becomes unusable at its next refresh
        self.repo
            .update_refresh_token(&user.user_id, Some(&refresh_token))
            .await?;

        tracing::info!(user_id = %user.user_id, "Refresh token rotated");

        Ok(RefreshOutput {
            access_token,
            refresh_token,
        })
    }
}

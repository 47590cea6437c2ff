//! Credential Verifier
//!
//! Checks a username/password pair against the user store. Every failure
//! surfaces as the same [`AuthError::AuthenticationFailed`] so callers
//! cannot learn which of the two fields was wrong.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Credential verifier
pub struct CredentialVerifier<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> CredentialVerifier<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Verify a credential pair and return the matching user
    ///
    /// Soft-deleted users are invisible here; an unparsable username or
    /// password is treated like a miss rather than a validation error.
    pub async fn verify(&self, username: &str, password: &str) -> AuthResult<User> {
        let username =
            UserName::new(username).map_err(|_| AuthError::AuthenticationFailed)?;

        let user = self
            .repo
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::AuthenticationFailed)?;

        let raw = RawPassword::new(password.to_string())
            .map_err(|_| AuthError::AuthenticationFailed)?;

        if !user.password_hash.verify(&raw) {
            return Err(AuthError::AuthenticationFailed);
        }

        Ok(user)
    }
}

//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::presentation::validation::FieldError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Bad username or password. A single variant: callers never learn
    /// which of the two was wrong.
    #[error("Username or password is wrong")]
    AuthenticationFailed,

    /// Bad signature, expired, or mismatched refresh token. All refresh
    /// failures collapse into this one user-facing message.
    #[error("Invalid or expired refresh token")]
    InvalidToken,

    /// Missing or malformed bearer token on a protected call
    #[error("You are not authorized to access this resource")]
    Unauthorized,

    /// Registration conflict
    #[error("Username is already exists")]
    DuplicateUsername,

    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Request field validation failed
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    /// Password policy violation
    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Build a single-field validation error
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        AuthError::Validation(vec![FieldError {
            field: field.into(),
            message: message.into(),
        }])
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::AuthenticationFailed
            | AuthError::InvalidToken
            | AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
            AuthError::DuplicateUsername
            | AuthError::Validation(_)
            | AuthError::PasswordValidation(_) => StatusCode::BAD_REQUEST,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::AuthenticationFailed
            | AuthError::InvalidToken
            | AuthError::Unauthorized => ErrorKind::Unauthorized,
            AuthError::DuplicateUsername
            | AuthError::Validation(_)
            | AuthError::PasswordValidation(_) => ErrorKind::BadRequest,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            AuthError::Validation(fields) => match serde_json::to_value(fields) {
                Ok(details) => err.with_details(details),
                Err(_) => err,
            },
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::AuthenticationFailed => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Refresh token rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AuthError::AuthenticationFailed.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AuthError::InvalidToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        // The upstream API reports duplicate usernames as 400, not 409
        assert_eq!(
            AuthError::DuplicateUsername.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AuthError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AuthError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_uniform_credential_message() {
        // Unknown user and wrong password must be indistinguishable
        assert_eq!(
            AuthError::AuthenticationFailed.to_string(),
            "Username or password is wrong"
        );
    }

    #[test]
    fn test_duplicate_username_message() {
        assert_eq!(
            AuthError::DuplicateUsername.to_string(),
            "Username is already exists"
        );
    }

    #[test]
    fn test_validation_details_attached() {
        let err = AuthError::field("username", "String must contain at least 3 character(s)");
        let app = err.to_app_error();
        assert!(app.details().is_some());
        assert_eq!(app.status_code(), 400);
    }
}

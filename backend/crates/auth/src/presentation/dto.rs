//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Response Envelope
// ============================================================================

/// Uniform success envelope; errors use the same shape via `AppError`
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(status_code: u16, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status_code,
            message: message.into(),
            data,
        }
    }
}

// ============================================================================
// Auth
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response: token pair plus the password-stripped user view
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserResponse,
}

/// Refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Refresh response: the rotated token pair
#[derive(Debug, Clone, Serialize)]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
}

// ============================================================================
// Users
// ============================================================================

/// Self-service registration request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    pub password: String,
}

/// Administrative create-user request (role is required here)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub username: String,
    pub password: String,
    pub role: String,
}

/// Partial update request. `is_active` is kept as raw JSON so the
/// validator can coerce both booleans and "true"/"false" strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchUserRequest {
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<serde_json::Value>,
}

/// Full update request; name and username are mandatory
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutUserRequest {
    pub name: String,
    pub username: String,
    pub password: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<serde_json::Value>,
}

/// User view returned to clients. Never carries the password hash or the
/// stored refresh token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub is_active: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id.to_string(),
            name: user.name.clone(),
            username: user.username.as_str().to_string(),
            role: user.role.clone(),
            is_active: user.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{
        user_name::UserName,
        user_password::{RawPassword, UserPassword},
    };

    #[test]
    fn test_user_response_strips_credentials() {
        let raw = RawPassword::new("password123".to_string()).unwrap();
        let mut user = User::new(
            "Ann".to_string(),
            UserName::new("ann1").unwrap(),
            UserPassword::from_raw(&raw).unwrap(),
            None,
        );
        user.set_refresh_token("some-refresh-token".to_string());

        let view = UserResponse::from(&user);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["username"], "ann1");
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("refreshToken").is_none());
        // role is omitted entirely when absent
        assert!(json.get("role").is_none());
    }

    #[test]
    fn test_envelope_shape() {
        let body = ApiResponse::new(200, "Login successful", Some(42));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["message"], "Login successful");
        assert_eq!(json["data"], 42);
    }
}

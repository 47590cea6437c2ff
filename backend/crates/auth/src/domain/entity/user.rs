//! User Entity
//!
//! The single user aggregate: profile fields, credential hash, the
//! currently valid refresh token, and the soft-delete marker.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    user_id::UserId, user_name::UserName, user_password::UserPassword,
};

/// User entity
///
/// `refresh_token` holds the only refresh token the user may redeem; it is
/// overwritten on every login/refresh and nulled on logout. A set
/// `deleted_at` removes the user from all normal lookups.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name
    pub name: String,
    /// User name (unique, for login)
    pub username: UserName,
    /// Hashed password
    pub password_hash: UserPassword,
    /// Free-form role label, absent by default
    pub role: Option<String>,
    /// Active flag
    pub is_active: bool,
    /// Currently valid refresh token, if a session is open
    pub refresh_token: Option<String>,
    /// Soft-delete marker
    pub deleted_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user with no open session
    pub fn new(
        name: String,
        username: UserName,
        password_hash: UserPassword,
        role: Option<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name,
            username,
            password_hash,
            role,
            is_active: true,
            refresh_token: None,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the user is soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Replace the stored refresh token (login or rotation)
    pub fn set_refresh_token(&mut self, token: String) {
        self.refresh_token = Some(token);
        self.updated_at = Utc::now();
    }

    /// Clear the stored refresh token (logout)
    pub fn clear_refresh_token(&mut self) {
        self.refresh_token = None;
        self.updated_at = Utc::now();
    }

    /// Update the display name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Update the username
    pub fn set_username(&mut self, username: UserName) {
        self.username = username;
        self.updated_at = Utc::now();
    }

    /// Update the password hash
    pub fn set_password(&mut self, password_hash: UserPassword) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Update the role label
    pub fn set_role(&mut self, role: Option<String>) {
        self.role = role;
        self.updated_at = Utc::now();
    }

    /// Update the active flag
    pub fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
        self.updated_at = Utc::now();
    }

    /// Mark the user as deleted; also deactivates the account
    pub fn soft_delete(&mut self) {
        let now = Utc::now();
        self.deleted_at = Some(now);
        self.is_active = false;
        self.updated_at = now;
    }
}

//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::{user_id::UserId, user_name::UserName};
use crate::error::AuthResult;

/// User repository trait
///
/// Unless stated otherwise, lookups exclude soft-deleted users.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>>;

    /// Count users with this username, including soft-deleted ones.
    /// A deleted user still reserves its username.
    async fn count_by_username(&self, username: &UserName) -> AuthResult<i64>;

    /// List all users
    async fn list(&self) -> AuthResult<Vec<User>>;

    /// Update profile and credential fields
    async fn update(&self, user: &User) -> AuthResult<()>;

    /// Overwrite the stored refresh token; `None` clears it.
    /// Last writer wins, no lock is taken.
    async fn update_refresh_token(&self, user_id: &UserId, token: Option<&str>) -> AuthResult<()>;

    /// Mark the user deleted and deactivate the account
    async fn soft_delete(&self, user_id: &UserId) -> AuthResult<()>;
}

//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - User registration and login with username + password
//! - Stateless access tokens with server-tracked refresh tokens
//! - Refresh token rotation: each refresh replaces the stored token
//! - Logout by refresh-token revocation
//! - User CRUD with soft delete
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (NIST SP 800-63B compliant)
//! - One live refresh token per user; a rotated-out or logged-out token is
//!   rejected even before it expires
//! - Credential and refresh failures are uniform: responses never reveal
//!   which part of the input was wrong
//! - Logout does not recall outstanding access tokens; they lapse on their
//!   own short expiry

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::middleware::AuthIdentity;
pub use presentation::router::{auth_router, user_router};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, validation, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod validation;

pub use handlers::AuthAppState;
pub use middleware::{AuthIdentity, GuardState, extract_bearer_token, require_auth};
pub use router::{auth_router, auth_router_generic, user_router, user_router_generic};

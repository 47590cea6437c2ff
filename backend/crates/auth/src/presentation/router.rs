//! Auth and User Routers

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenCodec;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{GuardState, require_auth};

/// Create the auth router with the PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create the user router with the PostgreSQL repository
pub fn user_router(repo: PgUserRepository, config: AuthConfig) -> Router {
    user_router_generic(repo, config)
}

/// Create a generic auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let codec = Arc::new(TokenCodec::new(&config));
    let guard = GuardState {
        codec: codec.clone(),
    };
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        codec,
    };

    let protected = Router::new()
        .route("/logout", post(handlers::logout::<R>))
        .route_layer(middleware::from_fn_with_state(guard, require_auth));

    Router::new()
        .route("/login", post(handlers::login::<R>))
        .route("/refresh", post(handlers::refresh::<R>))
        .merge(protected)
        .with_state(state)
}

/// Create a generic user router for any repository implementation
///
/// Registration is open; everything else sits behind the access guard.
pub fn user_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let codec = Arc::new(TokenCodec::new(&config));
    let guard = GuardState {
        codec: codec.clone(),
    };
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        codec,
    };

    let protected = Router::new()
        .route(
            "/",
            get(handlers::list_users::<R>).post(handlers::create_user::<R>),
        )
        .route(
            "/{id}",
            get(handlers::get_user::<R>)
                .patch(handlers::patch_user::<R>)
                .put(handlers::put_user::<R>)
                .delete(handlers::delete_user::<R>),
        )
        .route_layer(middleware::from_fn_with_state(guard, require_auth));

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .merge(protected)
        .with_state(state)
}

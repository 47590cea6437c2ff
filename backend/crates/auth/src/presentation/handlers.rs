//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenCodec;
use crate::application::{
    DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, LoginInput, LoginUseCase, LogoutUseCase,
    RefreshTokenUseCase, RegisterInput, RegisterUseCase, UpdateUserUseCase,
};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    ApiResponse, CreateUserRequest, LoginRequest, LoginResponse, PatchUserRequest, PutUserRequest,
    RefreshTokenRequest, RegisterRequest, TokenPairResponse, UserResponse,
};
use crate::presentation::middleware::AuthIdentity;
use crate::presentation::validation;

/// Shared state for auth and user handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub codec: Arc<TokenCodec>,
}

// ============================================================================
// Auth
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<ApiResponse<LoginResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.codec.clone());

    let output = use_case
        .execute(LoginInput {
            username: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(ApiResponse::new(
        StatusCode::OK.as_u16(),
        "Login successful",
        Some(LoginResponse {
            access_token: output.access_token,
            refresh_token: output.refresh_token,
            user: UserResponse::from(&output.user),
        }),
    )))
}

/// POST /api/auth/refresh
pub async fn refresh<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RefreshTokenRequest>,
) -> AuthResult<Json<ApiResponse<TokenPairResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RefreshTokenUseCase::new(state.repo.clone(), state.codec.clone());

    let output = use_case.execute(&req.refresh_token).await?;

    Ok(Json(ApiResponse::new(
        StatusCode::OK.as_u16(),
        "Token refreshed successfully",
        Some(TokenPairResponse {
            access_token: output.access_token,
            refresh_token: output.refresh_token,
        }),
    )))
}

/// POST /api/auth/logout (requires a valid access token)
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    Extension(identity): Extension<AuthIdentity>,
) -> AuthResult<Json<ApiResponse<()>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LogoutUseCase::new(state.repo.clone());

    use_case.execute(&identity.user_id).await?;

    Ok(Json(ApiResponse::new(
        StatusCode::OK.as_u16(),
        "Logged out successfully",
        None,
    )))
}

// ============================================================================
// Users
// ============================================================================

/// POST /api/users/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    validation::validate_register(&req).map_err(AuthError::Validation)?;

    let use_case = RegisterUseCase::new(state.repo.clone());

    let user = use_case
        .execute(RegisterInput {
            name: req.name,
            username: req.username,
            password: req.password,
            role: None,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            StatusCode::CREATED.as_u16(),
            "User created successfully",
            Some(UserResponse::from(&user)),
        )),
    ))
}

/// POST /api/users (administrative create, role required)
pub async fn create_user<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<CreateUserRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    validation::validate_create_user(&req).map_err(AuthError::Validation)?;

    let use_case = RegisterUseCase::new(state.repo.clone());

    let user = use_case
        .execute(RegisterInput {
            name: req.name,
            username: req.username,
            password: req.password,
            role: Some(req.role),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            StatusCode::CREATED.as_u16(),
            "User created successfully",
            Some(UserResponse::from(&user)),
        )),
    ))
}

/// GET /api/users
pub async fn list_users<R>(
    State(state): State<AuthAppState<R>>,
) -> AuthResult<Json<ApiResponse<Vec<UserResponse>>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListUsersUseCase::new(state.repo.clone());

    let users = use_case.execute().await?;
    let views = users.iter().map(UserResponse::from).collect();

    Ok(Json(ApiResponse::new(
        StatusCode::OK.as_u16(),
        "Users successfully retrieved",
        Some(views),
    )))
}

/// GET /api/users/{id}
pub async fn get_user<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<String>,
) -> AuthResult<Json<ApiResponse<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetUserUseCase::new(state.repo.clone());

    let user = use_case.execute(&parse_user_id(&id)?).await?;

    Ok(Json(ApiResponse::new(
        StatusCode::OK.as_u16(),
        "User successfully retrieved",
        Some(UserResponse::from(&user)),
    )))
}

/// PATCH /api/users/{id}
pub async fn patch_user<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<String>,
    Json(req): Json<PatchUserRequest>,
) -> AuthResult<Json<ApiResponse<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let input = validation::validate_patch_user(&req).map_err(AuthError::Validation)?;

    let use_case = UpdateUserUseCase::new(state.repo.clone());

    let user = use_case.execute(&parse_user_id(&id)?, input).await?;

    Ok(Json(ApiResponse::new(
        StatusCode::OK.as_u16(),
        "User updated successfully",
        Some(UserResponse::from(&user)),
    )))
}

/// PUT /api/users/{id}
pub async fn put_user<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<String>,
    Json(req): Json<PutUserRequest>,
) -> AuthResult<Json<ApiResponse<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let input = validation::validate_put_user(&req).map_err(AuthError::Validation)?;

    let use_case = UpdateUserUseCase::new(state.repo.clone());

    let user = use_case.execute(&parse_user_id(&id)?, input).await?;

    Ok(Json(ApiResponse::new(
        StatusCode::OK.as_u16(),
        "User updated successfully",
        Some(UserResponse::from(&user)),
    )))
}

/// DELETE /api/users/{id}
pub async fn delete_user<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<String>,
) -> AuthResult<Json<ApiResponse<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteUserUseCase::new(state.repo.clone());

    let user = use_case.execute(&parse_user_id(&id)?).await?;

    Ok(Json(ApiResponse::new(
        StatusCode::OK.as_u16(),
        "User deleted successfully",
        Some(UserResponse::from(&user)),
    )))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// A non-UUID path id cannot match any record, so it reads as a miss
fn parse_user_id(id: &str) -> AuthResult<UserId> {
    UserId::parse(id).map_err(|_| AuthError::UserNotFound)
}

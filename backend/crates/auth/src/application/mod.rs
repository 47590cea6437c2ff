//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod credentials;
pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;
pub mod token;
pub mod users;

// Re-exports
pub use config::AuthConfig;
pub use credentials::CredentialVerifier;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use refresh::{RefreshOutput, RefreshTokenUseCase};
pub use register::{RegisterInput, RegisterUseCase};
pub use token::{Claims, TokenCodec, TokenError, TokenKind};
pub use users::{
    DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserInput, UpdateUserUseCase,
};

//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_id::UserId, user_name::UserName, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                name,
                username,
                password_hash,
                role,
                is_active,
                refresh_token,
                deleted_at,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(&user.name)
        .bind(user.username.as_str())
        .bind(user.password_hash.as_str())
        .bind(&user.role)
        .bind(user.is_active)
        .bind(&user.refresh_token)
        .bind(user.deleted_at)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                name,
                username,
                password_hash,
                role,
                is_active,
                refresh_token,
                deleted_at,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                name,
                username,
                password_hash,
                role,
                is_active,
                refresh_token,
                deleted_at,
                created_at,
                updated_at
            FROM users
            WHERE username = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn count_by_username(&self, username: &UserName) -> AuthResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users WHERE username = $1",
        )
        .bind(username.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn list(&self) -> AuthResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                name,
                username,
                password_hash,
                role,
                is_active,
                refresh_token,
                deleted_at,
                created_at,
                updated_at
            FROM users
            WHERE deleted_at IS NULL
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(UserRow::into_user).collect())
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                name = $2,
                username = $3,
                password_hash = $4,
                role = $5,
                is_active = $6,
                updated_at = $7
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(&user.name)
        .bind(user.username.as_str())
        .bind(user.password_hash.as_str())
        .bind(&user.role)
        .bind(user.is_active)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(())
    }

    async fn update_refresh_token(
        &self,
        user_id: &UserId,
        token: Option<&str>,
    ) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                refresh_token = $2,
                updated_at = $3
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(token)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn soft_delete(&self, user_id: &UserId) -> AuthResult<()> {
        let now = Utc::now();

        sqlx::query(
            r#"
            UPDATE users SET
                deleted_at = $2,
                is_active = FALSE,
                updated_at = $2
            WHERE user_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Unique-violation on the username index is the store-level duplicate
/// guard; report it like the pre-check does.
fn map_unique_violation(err: sqlx::Error) -> AuthError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            AuthError::DuplicateUsername
        }
        _ => AuthError::Database(err),
    }
}

// ============================================================================
// Row Type for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    name: String,
    username: String,
    password_hash: String,
    role: Option<String>,
    is_active: bool,
    refresh_token: Option<String>,
    deleted_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::from_uuid(self.user_id),
            name: self.name,
            username: UserName::from_db(self.username),
            password_hash: UserPassword::from_db(self.password_hash),
            role: self.role,
            is_active: self.is_active,
            refresh_token: self.refresh_token,
            deleted_at: self.deleted_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use kernel::error::app_error::{AppError, AppResult};

/// Fallback signing secret. Matches the upstream service's development
/// placeholder; production deployments must set JWT_SECRET.
pub const DEFAULT_JWT_SECRET: &str = "rahasia123";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Signing secret for access and refresh tokens
    pub jwt_secret: String,
    /// Access token lifetime (1 day)
    pub access_token_ttl: Duration,
    /// Refresh token lifetime (7 days)
    pub refresh_token_ttl: Duration,
    /// Accept expired tokens. Explicit escape hatch for clock-skewed
    /// environments, off by default.
    pub ignore_expiration: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            access_token_ttl: Duration::from_secs(24 * 3600),
            refresh_token_ttl: Duration::from_secs(7 * 24 * 3600),
            ignore_expiration: false,
        }
    }
}

impl AuthConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Variables: `JWT_SECRET`, `JWT_EXPIRATION_TIME` (default "1d"),
    /// `JWT_REFRESH_EXPIRATION_TIME` (default "7d"),
    /// `JWT_IGNORE_EXPIRATION` ("true"/"false").
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!("JWT_SECRET not set, using the development placeholder");
                defaults.jwt_secret
            }
        };

        let access_token_ttl = env_duration("JWT_EXPIRATION_TIME", defaults.access_token_ttl);
        let refresh_token_ttl =
            env_duration("JWT_REFRESH_EXPIRATION_TIME", defaults.refresh_token_ttl);

        let ignore_expiration = std::env::var("JWT_IGNORE_EXPIRATION")
            .map(|v| v == "true")
            .unwrap_or(false);

        Self {
            jwt_secret,
            access_token_ttl,
            refresh_token_ttl,
            ignore_expiration,
        }
    }

    /// Like [`from_env`](Self::from_env), but refuses to fall back to the
    /// placeholder secret. Used by hardened (release) builds.
    pub fn from_env_strict() -> AppResult<Self> {
        match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => Ok(Self {
                jwt_secret: secret,
                ..Self::from_env()
            }),
            _ => Err(AppError::internal(
                "JWT_SECRET must be set in the environment",
            )),
        }
    }
}

fn env_duration(var: &str, default: Duration) -> Duration {
    match std::env::var(var) {
        Ok(value) => match parse_duration(&value) {
            Some(duration) => duration,
            None => {
                tracing::warn!(var, value = %value, "Unparsable duration, using default");
                default
            }
        },
        Err(_) => default,
    }
}

/// Parse a duration like "1d", "12h", "30m", "45s" or bare seconds.
pub fn parse_duration(value: &str) -> Option<Duration> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let (number, unit) = match value.char_indices().last() {
        Some((idx, c)) if c.is_ascii_alphabetic() => (&value[..idx], Some(c)),
        _ => (value, None),
    };

    let number: u64 = number.parse().ok()?;

    let seconds = match unit {
        Some('d') => number.checked_mul(24 * 3600)?,
        Some('h') => number.checked_mul(3600)?,
        Some('m') => number.checked_mul(60)?,
        Some('s') | None => number,
        Some(_) => return None,
    };

    Some(Duration::from_secs(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.access_token_ttl, Duration::from_secs(86_400));
        assert_eq!(config.refresh_token_ttl, Duration::from_secs(604_800));
        assert!(!config.ignore_expiration);
    }

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("1d"), Some(Duration::from_secs(86_400)));
        assert_eq!(parse_duration("7d"), Some(Duration::from_secs(604_800)));
        assert_eq!(parse_duration("12h"), Some(Duration::from_secs(43_200)));
        assert_eq!(parse_duration("30m"), Some(Duration::from_secs(1_800)));
        assert_eq!(parse_duration("45s"), Some(Duration::from_secs(45)));
        assert_eq!(parse_duration("3600"), Some(Duration::from_secs(3_600)));
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("abc"), None);
        assert_eq!(parse_duration("1w"), None);
        assert_eq!(parse_duration("-5d"), None);
    }
}

//! Token Codec
//!
//! Signs and verifies the bearer tokens used by the API. Access and refresh
//! tokens carry identical claims and differ only in lifetime; both are
//! HS256-signed with the process-wide secret. Verification is a pure
//! function of the token, the secret and the clock.

use chrono::Utc;
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind as JwtErrorKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::domain::value_object::user_id::UserId;

/// Which of the two token lifetimes to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Short-lived, authorizes individual requests
    Access,
    /// Longer-lived, only redeemable for a new token pair
    Refresh,
}

/// Signed token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's id
    pub sub: Uuid,
    /// Username at issuance time
    pub username: String,
    /// Unique token id. Makes every issuance distinct, so rotating a
    /// refresh token always changes the stored value even within the same
    /// clock second.
    pub jti: Uuid,
    /// Issued-at (unix seconds)
    pub iat: usize,
    /// Expiry (unix seconds)
    pub exp: usize,
}

/// Token verification/issuance errors
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token is expired")]
    Expired,

    #[error("token is malformed")]
    Malformed,

    #[error("token signing failed: {0}")]
    Signing(String),
}

/// Stateless signer/verifier for both token kinds
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_ttl: std::time::Duration,
    refresh_ttl: std::time::Duration,
    ignore_expiration: bool,
}

impl TokenCodec {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl: config.access_token_ttl,
            refresh_ttl: config.refresh_token_ttl,
            ignore_expiration: config.ignore_expiration,
        }
    }

    /// Issue a signed, time-bounded token for the given subject
    pub fn issue(
        &self,
        user_id: &UserId,
        username: &str,
        kind: TokenKind,
    ) -> Result<String, TokenError> {
        let ttl = match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        };

        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: *user_id.as_uuid(),
            username: username.to_string(),
            jti: Uuid::new_v4(),
            iat: now,
            exp: now + ttl.as_secs() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a token and return its claims
    ///
    /// When `ignore_expiration` is configured, expired tokens are still
    /// accepted; signature checks always apply.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        if self.ignore_expiration {
            validation.validate_exp = false;
            validation.required_spec_claims.clear();
        }

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::InvalidSignature => TokenError::InvalidSignature,
                JwtErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> TokenCodec {
        TokenCodec::new(&AuthConfig::default())
    }

    fn expired_token(config: &AuthConfig) -> String {
        // Well past the default 60s verification leeway
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: Uuid::new_v4(),
            username: "ann1".to_string(),
            jti: Uuid::new_v4(),
            iat: now - 7200,
            exp: now - 3600,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_issue_verify_round_trip() {
        let codec = codec();
        let user_id = UserId::new();

        let token = codec.issue(&user_id, "ann1", TokenKind::Access).unwrap();
        let claims = codec.verify(&token).unwrap();

        assert_eq!(claims.sub, *user_id.as_uuid());
        assert_eq!(claims.username, "ann1");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_refresh_outlives_access() {
        let codec = codec();
        let user_id = UserId::new();

        let access = codec.issue(&user_id, "ann1", TokenKind::Access).unwrap();
        let refresh = codec.issue(&user_id, "ann1", TokenKind::Refresh).unwrap();

        let access_exp = codec.verify(&access).unwrap().exp;
        let refresh_exp = codec.verify(&refresh).unwrap().exp;
        assert!(refresh_exp > access_exp);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let codec = codec();
        let other = TokenCodec::new(&AuthConfig {
            jwt_secret: "another-secret".to_string(),
            ..AuthConfig::default()
        });

        let token = other
            .issue(&UserId::new(), "ann1", TokenKind::Access)
            .unwrap();

        assert!(matches!(
            codec.verify(&token),
            Err(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            codec().verify("not.a.token"),
            Err(TokenError::Malformed)
        ));
    }

    #[test]
    fn test_expired_rejected() {
        let config = AuthConfig::default();
        let codec = TokenCodec::new(&config);
        let token = expired_token(&config);

        assert!(matches!(codec.verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_ignore_expiration_accepts_expired() {
        let config = AuthConfig {
            ignore_expiration: true,
            ..AuthConfig::default()
        };
        let codec = TokenCodec::new(&config);
        let token = expired_token(&config);

        let claims = codec.verify(&token).unwrap();
        assert_eq!(claims.username, "ann1");
    }
}

//! User Password Value Object
//!
//! Domain value object for user passwords. Delegates to
//! `platform::password` for cryptographic operations.

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{ClearTextPassword, HashedPassword, PasswordPolicyError};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Wrapper around `ClearTextPassword` with domain-specific error handling.
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password with validation
    ///
    /// ## Validation Rules
    /// - Minimum 8 characters, maximum 255
    /// - No control characters
    /// - Unicode NFKC normalized
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::TooShort { min, actual } => AppError::bad_request(format!(
                "Password must be at least {} characters (got {})",
                min, actual
            )),

            PasswordPolicyError::TooLong { max, actual } => AppError::bad_request(format!(
                "Password must be at most {} characters (got {})",
                max, actual
            )),

            PasswordPolicyError::EmptyOrWhitespace => {
                AppError::bad_request("Password cannot be empty")
            }

            PasswordPolicyError::InvalidCharacter => {
                AppError::bad_request("Password contains invalid characters")
            }
        })?;

        Ok(Self(clear_text))
    }

    /// Access the inner ClearTextPassword
    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Stored Hash)
// ============================================================================

/// Hashed user password as persisted on the user record
///
/// The stored value is opaque to the domain: it only supports hashing a raw
/// password into a new value and verifying a raw password against it.
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword {
    hash: String,
}

impl UserPassword {
    /// Hash a raw password for storage
    pub fn from_raw(raw: &RawPassword) -> AppResult<Self> {
        let hashed = raw
            .inner()
            .hash()
            .map_err(|e| AppError::internal(e.to_string()))?;

        Ok(Self {
            hash: hashed.as_phc_string().to_string(),
        })
    }

    /// Restore from a stored hash without re-validating
    pub fn from_db(hash: String) -> Self {
        Self { hash }
    }

    /// Get the stored hash string
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Verify a raw password against this hash
    ///
    /// Returns false for a malformed stored hash rather than erroring, so a
    /// corrupted record behaves like a failed credential check.
    pub fn verify(&self, raw: &RawPassword) -> bool {
        match HashedPassword::from_phc_string(self.hash.clone()) {
            Ok(hashed) => hashed.verify(raw.inner()),
            Err(_) => false,
        }
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("password123".to_string()).unwrap();
        let stored = UserPassword::from_raw(&raw).unwrap();

        assert!(stored.verify(&raw));

        let wrong = RawPassword::new("wrong-password".to_string()).unwrap();
        assert!(!stored.verify(&wrong));
    }

    #[test]
    fn test_policy_rejects_short() {
        assert!(RawPassword::new("short".to_string()).is_err());
    }

    #[test]
    fn test_malformed_stored_hash_never_verifies() {
        let raw = RawPassword::new("password123".to_string()).unwrap();
        let stored = UserPassword::from_db("garbage".to_string());
        assert!(!stored.verify(&raw));
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::new("password123".to_string()).unwrap();
        let stored = UserPassword::from_raw(&raw).unwrap();
        assert!(!format!("{:?}", raw).contains("password123"));
        assert!(!format!("{:?}", stored).contains(stored.as_str()));
    }
}

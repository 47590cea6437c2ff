//! User Name Value Object
//!
//! Usernames are stored exactly as entered: lookups are case-sensitive and
//! no canonical form is kept.

use std::fmt;
use thiserror::Error;

/// Minimum username length in characters
pub const MIN_USER_NAME_LENGTH: usize = 3;

/// Maximum username length in characters
pub const MAX_USER_NAME_LENGTH: usize = 15;

/// Username validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("User name cannot be empty")]
    Empty,

    #[error("User name must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("User name must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
}

/// Validated username
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Create a new username with validation
    pub fn new(raw: impl Into<String>) -> Result<Self, UserNameError> {
        let value = raw.into();

        if value.trim().is_empty() {
            return Err(UserNameError::Empty);
        }

        let char_count = value.chars().count();

        if char_count < MIN_USER_NAME_LENGTH {
            return Err(UserNameError::TooShort {
                min: MIN_USER_NAME_LENGTH,
                actual: char_count,
            });
        }

        if char_count > MAX_USER_NAME_LENGTH {
            return Err(UserNameError::TooLong {
                max: MAX_USER_NAME_LENGTH,
                actual: char_count,
            });
        }

        Ok(Self(value))
    }

    /// Restore from a stored value without re-validating
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_name() {
        let name = UserName::new("ann1").unwrap();
        assert_eq!(name.as_str(), "ann1");
    }

    #[test]
    fn test_too_short() {
        assert!(matches!(
            UserName::new("ab"),
            Err(UserNameError::TooShort { .. })
        ));
    }

    #[test]
    fn test_too_long() {
        assert!(matches!(
            UserName::new("a".repeat(16)),
            Err(UserNameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_boundary_lengths() {
        assert!(UserName::new("abc").is_ok());
        assert!(UserName::new("a".repeat(15)).is_ok());
    }

    #[test]
    fn test_empty() {
        assert_eq!(UserName::new(""), Err(UserNameError::Empty));
        assert_eq!(UserName::new("   "), Err(UserNameError::Empty));
    }

    #[test]
    fn test_case_sensitive() {
        // Stored as entered, no canonicalization
        let upper = UserName::new("Ann1").unwrap();
        let lower = UserName::new("ann1").unwrap();
        assert_ne!(upper, lower);
    }
}

//! Request Validation
//!
//! Explicit validation functions for request DTOs. Each returns either a
//! typed value or the full list of field errors, so responses can report
//! every offending field at once.

use serde::Serialize;

use crate::application::users::UpdateUserInput;
use crate::presentation::dto::{
    CreateUserRequest, PatchUserRequest, PutUserRequest, RegisterRequest,
};

/// A single field validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

// Field constraints carried over from the upstream schemas
const NAME_BOUNDS: (usize, usize) = (3, 75);
const USERNAME_BOUNDS: (usize, usize) = (3, 15);
const PASSWORD_BOUNDS: (usize, usize) = (8, 255);
const ROLE_MIN: usize = 3;

fn check_len(errors: &mut Vec<FieldError>, field: &str, value: &str, min: usize, max: usize) {
    let len = value.chars().count();
    if len < min {
        errors.push(FieldError::new(
            field,
            format!("String must contain at least {} character(s)", min),
        ));
    } else if len > max {
        errors.push(FieldError::new(
            field,
            format!("String must contain at most {} character(s)", max),
        ));
    }
}

fn coerce_bool(
    errors: &mut Vec<FieldError>,
    field: &str,
    value: &serde_json::Value,
) -> Option<bool> {
    match value {
        serde_json::Value::Bool(b) => Some(*b),
        serde_json::Value::String(s) => match s.to_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => {
                errors.push(FieldError::new(field, "Invalid boolean string"));
                None
            }
        },
        _ => {
            errors.push(FieldError::new(field, "Invalid boolean string"));
            None
        }
    }
}

/// Validate a self-service registration request
pub fn validate_register(req: &RegisterRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    check_len(&mut errors, "name", &req.name, NAME_BOUNDS.0, NAME_BOUNDS.1);
    check_len(
        &mut errors,
        "username",
        &req.username,
        USERNAME_BOUNDS.0,
        USERNAME_BOUNDS.1,
    );
    check_len(
        &mut errors,
        "password",
        &req.password,
        PASSWORD_BOUNDS.0,
        PASSWORD_BOUNDS.1,
    );

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate an administrative create-user request
pub fn validate_create_user(req: &CreateUserRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    check_len(&mut errors, "name", &req.name, NAME_BOUNDS.0, NAME_BOUNDS.1);
    check_len(
        &mut errors,
        "username",
        &req.username,
        USERNAME_BOUNDS.0,
        USERNAME_BOUNDS.1,
    );
    check_len(
        &mut errors,
        "password",
        &req.password,
        PASSWORD_BOUNDS.0,
        PASSWORD_BOUNDS.1,
    );
    if req.role.chars().count() < ROLE_MIN {
        errors.push(FieldError::new(
            "role",
            format!("String must contain at least {} character(s)", ROLE_MIN),
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate a partial update; every field is optional
pub fn validate_patch_user(req: &PatchUserRequest) -> Result<UpdateUserInput, Vec<FieldError>> {
    let mut errors = Vec::new();

    if let Some(name) = &req.name {
        check_len(&mut errors, "name", name, NAME_BOUNDS.0, NAME_BOUNDS.1);
    }
    if let Some(username) = &req.username {
        check_len(
            &mut errors,
            "username",
            username,
            USERNAME_BOUNDS.0,
            USERNAME_BOUNDS.1,
        );
    }
    if let Some(password) = &req.password {
        check_len(
            &mut errors,
            "password",
            password,
            PASSWORD_BOUNDS.0,
            PASSWORD_BOUNDS.1,
        );
    }

    let is_active = req
        .is_active
        .as_ref()
        .and_then(|value| coerce_bool(&mut errors, "isActive", value));

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(UpdateUserInput {
        name: req.name.clone(),
        username: req.username.clone(),
        password: req.password.clone(),
        role: req.role.clone(),
        is_active,
    })
}

/// Validate a full update; name and username are required
pub fn validate_put_user(req: &PutUserRequest) -> Result<UpdateUserInput, Vec<FieldError>> {
    let mut errors = Vec::new();

    check_len(&mut errors, "name", &req.name, NAME_BOUNDS.0, NAME_BOUNDS.1);
    check_len(
        &mut errors,
        "username",
        &req.username,
        USERNAME_BOUNDS.0,
        USERNAME_BOUNDS.1,
    );
    if let Some(password) = &req.password {
        check_len(
            &mut errors,
            "password",
            password,
            PASSWORD_BOUNDS.0,
            PASSWORD_BOUNDS.1,
        );
    }

    let is_active = req
        .is_active
        .as_ref()
        .and_then(|value| coerce_bool(&mut errors, "isActive", value));

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(UpdateUserInput {
        name: Some(req.name.clone()),
        username: Some(req.username.clone()),
        password: req.password.clone(),
        role: req.role.clone(),
        is_active,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request(name: &str, username: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_register_ok() {
        let req = register_request("Ann", "ann1", "password123");
        assert!(validate_register(&req).is_ok());
    }

    #[test]
    fn test_register_bounds() {
        // name too short
        assert!(validate_register(&register_request("Ab", "ann1", "password123")).is_err());
        // username too long
        assert!(
            validate_register(&register_request("Ann", &"u".repeat(16), "password123")).is_err()
        );
        // password too short
        assert!(validate_register(&register_request("Ann", "ann1", "short")).is_err());
    }

    #[test]
    fn test_register_collects_all_errors() {
        let req = register_request("", "", "");
        let errors = validate_register(&req).unwrap_err();
        assert_eq!(errors.len(), 3);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "username", "password"]);
    }

    #[test]
    fn test_create_user_requires_role() {
        let req = CreateUserRequest {
            name: "Ann".to_string(),
            username: "ann1".to_string(),
            password: "password123".to_string(),
            role: "ad".to_string(),
        };
        let errors = validate_create_user(&req).unwrap_err();
        assert_eq!(errors[0].field, "role");
    }

    #[test]
    fn test_patch_bool_coercion() {
        let base = PatchUserRequest {
            name: None,
            username: None,
            password: None,
            role: None,
            is_active: None,
        };

        // Native boolean
        let req = PatchUserRequest {
            is_active: Some(serde_json::json!(false)),
            ..base.clone()
        };
        assert_eq!(validate_patch_user(&req).unwrap().is_active, Some(false));

        // String forms, case-insensitive
        let req = PatchUserRequest {
            is_active: Some(serde_json::json!("True")),
            ..base.clone()
        };
        assert_eq!(validate_patch_user(&req).unwrap().is_active, Some(true));

        let req = PatchUserRequest {
            is_active: Some(serde_json::json!("false")),
            ..base.clone()
        };
        assert_eq!(validate_patch_user(&req).unwrap().is_active, Some(false));

        // Anything else is rejected
        let req = PatchUserRequest {
            is_active: Some(serde_json::json!("yes")),
            ..base.clone()
        };
        let errors = validate_patch_user(&req).unwrap_err();
        assert_eq!(errors[0].message, "Invalid boolean string");

        let req = PatchUserRequest {
            is_active: Some(serde_json::json!(1)),
            ..base
        };
        assert!(validate_patch_user(&req).is_err());
    }

    #[test]
    fn test_patch_empty_is_valid() {
        let req = PatchUserRequest {
            name: None,
            username: None,
            password: None,
            role: None,
            is_active: None,
        };
        let input = validate_patch_user(&req).unwrap();
        assert!(input.name.is_none());
        assert!(input.is_active.is_none());
    }

    #[test]
    fn test_put_requires_name_and_username() {
        let req = PutUserRequest {
            name: "".to_string(),
            username: "".to_string(),
            password: None,
            role: None,
            is_active: None,
        };
        let errors = validate_put_user(&req).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}

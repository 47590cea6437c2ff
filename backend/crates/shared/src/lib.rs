//! Shared Kernel - Domain-crossing minimal core
//!
//! The smallest vocabulary every crate agrees on: the unified error type
//! and its HTTP mapping (including the uniform response envelope), and
//! typed ID primitives. Anything that is easy to change or owned by a
//! single domain does not belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;

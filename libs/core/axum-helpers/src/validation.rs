//! Building blocks for [`ValidateFields`](crate::ValidateFields) implementations.
//!
//! ```ignore
//! let mut errors = FieldErrors::new();
//! errors
//!     .check("name", !rules::is_blank(name), "must not be null or empty")
//!     .check("email", email.map_or(true, rules::is_email), "invalid email");
//! errors.into_vec()
//! ```

use crate::errors::FieldError;

/// Ordered collector of failed field rules.
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` against `field` unless `passed` holds.
    pub fn check(&mut self, field: &str, passed: bool, message: &str) -> &mut Self {
        if !passed {
            self.0.push(FieldError::new(field, message));
        }
        self
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.0
    }
}

pub mod rules {
    use validator::ValidateEmail;

    /// Missing, empty, or whitespace only.
    pub fn is_blank(value: Option<&str>) -> bool {
        value.is_none_or(|v| v.trim().is_empty())
    }

    /// Length in characters (not bytes) within `min..=max`.
    pub fn char_len_between(value: &str, min: usize, max: usize) -> bool {
        (min..=max).contains(&value.chars().count())
    }

    /// No leading or trailing whitespace.
    pub fn is_trimmed(value: &str) -> bool {
        value.trim() == value
    }

    /// Syntactically valid email address.
    pub fn is_email(value: &str) -> bool {
        value.validate_email()
    }
}

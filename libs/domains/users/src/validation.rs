use axum_helpers::{FieldError, FieldErrors, ValidateFields, rules};

use crate::models::UserRequest;

pub const NOT_BLANK: &str = "must not be null or empty";
pub const NAME_SIZE: &str = "must be between 3 and 50 characters";
pub const NAME_TRIMMED: &str = "field cannot have black spaces at the beginning or at end";
pub const INVALID_EMAIL: &str = "invalid email";

const NAME_MIN: usize = 3;
const NAME_MAX: usize = 50;

impl ValidateFields for UserRequest {
    fn field_errors(&self) -> Vec<FieldError> {
        let name = self.name.as_deref();
        let email = self.email.as_deref();
        let password = self.password.as_deref();

        let mut errors = FieldErrors::new();
        errors
            .check("name", !rules::is_blank(name), NOT_BLANK)
            .check(
                "name",
                name.is_none_or(|n| rules::char_len_between(n, NAME_MIN, NAME_MAX)),
                NAME_SIZE,
            )
            .check("name", name.is_none_or(rules::is_trimmed), NAME_TRIMMED)
            .check("email", !rules::is_blank(email), NOT_BLANK)
            .check(
                "email",
                rules::is_blank(email) || email.is_some_and(rules::is_email),
                INVALID_EMAIL,
            )
            .check("password", !rules::is_blank(password), NOT_BLANK);
        errors.into_vec()
    }
}

use axum_helpers::AppError;
use mongodb::error::{ErrorKind, WriteFailure};
use thiserror::Error;

use crate::models::EMAIL_INDEX;

pub const EMAIL_ALREADY_REGISTERED: &str = "E-mail already registered";
pub const DUPLICATE_KEY: &str = "Duplicate key exception";

/// Server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Object not found. Id: {0}, Type: User")]
    NotFound(String),

    /// A unique index rejected the write. `index` is the violated index name
    /// when the store reports one.
    #[error("Duplicate key on index {}", .index.as_deref().unwrap_or("<unknown>"))]
    DuplicateKey { index: Option<String> },

    #[error("Database error: {0}")]
    Database(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    pub fn duplicate_on(index: impl Into<String>) -> Self {
        UserError::DuplicateKey {
            index: Some(index.into()),
        }
    }
}

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => AppError::NotFound(err.to_string()),
            UserError::DuplicateKey { index } if index.as_deref() == Some(EMAIL_INDEX) => {
                AppError::BadRequest(EMAIL_ALREADY_REGISTERED.to_string())
            }
            UserError::DuplicateKey { .. } => AppError::BadRequest(DUPLICATE_KEY.to_string()),
            UserError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl From<mongodb::error::Error> for UserError {
    fn from(err: mongodb::error::Error) -> Self {
        let duplicate = match err.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == DUPLICATE_KEY_CODE => {
                Some(&e.message)
            }
            ErrorKind::Command(e) if e.code == DUPLICATE_KEY_CODE => Some(&e.message),
            _ => None,
        };

        match duplicate {
            Some(message) => UserError::DuplicateKey {
                index: violated_index(message),
            },
            None => UserError::Database(err.to_string()),
        }
    }
}

/// Index name from a server message such as
/// `E11000 duplicate key error collection: db.users index: users_email_unique dup key: { ... }`.
fn violated_index(message: &str) -> Option<String> {
    let (_, rest) = message.split_once("index: ")?;
    rest.split_whitespace().next().map(str::to_string)
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Name of the unique index on `users.email`.
pub const EMAIL_INDEX: &str = "users_email_unique";

/// Stored user record.
///
/// `id` is `None` until the store assigns one on first save and never changes
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /users` and `PATCH /users/{id}`.
///
/// Every field is optional on the wire so that missing or `null` values are
/// reported as field errors instead of a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "name": "usuario",
    "email": "usuario@email.com",
    "password": "usuario123"
}))]
pub struct UserRequest {
    /// 3 to 50 characters, no leading or trailing whitespace
    pub name: Option<String>,
    /// Valid address, unique across users
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

/// User as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": "6565f1c3a1b2c3d4e5f60718",
    "name": "usuario",
    "email": "usuario@email.com",
    "password": "usuario123"
}))]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

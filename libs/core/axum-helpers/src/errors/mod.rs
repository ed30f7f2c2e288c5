pub mod handlers;
pub mod messages;
pub mod responses;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Error body returned for every failed request.
///
/// # JSON Example
///
/// ```json
/// {
///   "timestamp": "2025-01-14T10:21:07.311Z",
///   "path": "/users/123",
///   "status": 404,
///   "error": "Not Found",
///   "message": "Object not found. Id: 123, Type: User"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StandardError {
    /// When the error was produced
    pub timestamp: DateTime<Utc>,
    /// Path of the request that failed
    pub path: String,
    /// HTTP status code
    pub status: u16,
    /// Short status phrase
    pub error: String,
    /// Human-readable message
    pub message: String,
}

/// A single failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field_name: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            message: message.into(),
        }
    }
}

/// [`StandardError`] plus the ordered list of failed field rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidationError {
    #[serde(flatten)]
    pub base: StandardError,
    pub errors: Vec<FieldError>,
}

/// Application error type, independent of the request it occurred in.
///
/// Bind it to a request path with [`AppError::at`] (or [`ResultExt::at_path`])
/// to obtain an [`ApiError`] that renders the wire body.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Path extraction error: {0}")]
    PathRejection(#[from] PathRejection),

    #[error("Validation failed on {} rule(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Method Not Allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(e) => e.status(),
            AppError::PathRejection(e) => e.status(),
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Bind this error to the path of the request that produced it.
    pub fn at(self, path: impl Into<String>) -> ApiError {
        ApiError {
            error: self,
            path: path.into(),
        }
    }
}

/// An [`AppError`] bound to a request path; the handler-level error type.
#[derive(Debug, Error)]
#[error("{error} (path: {path})")]
pub struct ApiError {
    pub error: AppError,
    pub path: String,
}

/// Converts handler results into [`ApiError`]s carrying the request path.
///
/// ```ignore
/// let user = service.find_by_id(&id).await.at_path(uri.path())?;
/// ```
pub trait ResultExt<T> {
    fn at_path(self, path: &str) -> Result<T, ApiError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<AppError>,
{
    fn at_path(self, path: &str) -> Result<T, ApiError> {
        self.map_err(|e| e.into().at(path))
    }
}

impl ApiError {
    fn standard(&self, status: StatusCode, error: String, message: String) -> StandardError {
        StandardError {
            timestamp: Utc::now(),
            path: self.path.clone(),
            status: status.as_u16(),
            error,
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.error.status();
        let phrase = status.canonical_reason().unwrap_or("Unknown").to_string();

        let message = match &self.error {
            AppError::Validation(errors) => {
                tracing::info!(path = %self.path, violations = errors.len(), "Validation error");
                let body = ValidationError {
                    base: self.standard(
                        status,
                        messages::VALIDATION_ERROR.to_string(),
                        messages::VALIDATION_FAILED.to_string(),
                    ),
                    errors: errors.clone(),
                };
                return (status, Json(body)).into_response();
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(path = %self.path, "JSON extraction error: {:?}", e);
                e.body_text()
            }
            AppError::PathRejection(e) => {
                tracing::info!(path = %self.path, "Path extraction error: {:?}", e);
                e.body_text()
            }
            AppError::BadRequest(msg) => {
                tracing::info!(path = %self.path, "Bad request: {}", msg);
                msg.clone()
            }
            AppError::NotFound(msg) => {
                tracing::info!(path = %self.path, "Not found: {}", msg);
                msg.clone()
            }
            AppError::MethodNotAllowed(msg) => {
                tracing::info!(path = %self.path, "Method not allowed: {}", msg);
                msg.clone()
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(path = %self.path, "Internal server error: {}", msg);
                messages::INTERNAL_ERROR.to_string()
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!(path = %self.path, "Service unavailable: {}", msg);
                msg.clone()
            }
        };

        let body = self.standard(status, phrase, message);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::Value;

    async fn render(error: ApiError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_renders_standard_error() {
        let (status, body) = render(AppError::NotFound("gone".to_string()).at("/users/1")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["message"], "gone");
        assert_eq!(body["path"], "/users/1");
        assert!(body["timestamp"].is_string());
        assert!(body.get("errors").is_none());
    }

    #[tokio::test]
    async fn test_validation_renders_ordered_field_errors() {
        let errors = vec![
            FieldError::new("name", "must not be null or empty"),
            FieldError::new("email", "invalid email"),
        ];
        let (status, body) = render(AppError::Validation(errors).at("/users")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
        assert_eq!(body["error"], "Validation error");
        assert_eq!(body["message"], "Error on validation attributes");
        assert_eq!(body["errors"][0]["fieldName"], "name");
        assert_eq!(body["errors"][1]["fieldName"], "email");
        assert_eq!(body["errors"][1]["message"], "invalid email");
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let (status, body) =
            render(AppError::InternalServerError("socket reset".to_string()).at("/users")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal Server Error");
        assert_eq!(body["message"], messages::INTERNAL_ERROR);
    }

    #[test]
    fn test_at_path_maps_errors() {
        let result: Result<(), AppError> = Err(AppError::BadRequest("nope".to_string()));
        let err = result.at_path("/users").unwrap_err();
        assert_eq!(err.path, "/users");
        assert_eq!(err.error.status(), StatusCode::BAD_REQUEST);
    }
}

//! Reusable OpenAPI response types for consistent API documentation.

use super::{StandardError, ValidationError};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "timestamp": "2025-01-14T10:21:07.311Z",
        "path": "/users",
        "status": 500,
        "error": "Internal Server Error",
        "message": "An unexpected error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub StandardError);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Field validation failed",
    content_type = "application/json",
    example = json!({
        "timestamp": "2025-01-14T10:21:07.311Z",
        "path": "/users",
        "status": 400,
        "error": "Validation error",
        "message": "Error on validation attributes",
        "errors": [
            { "fieldName": "name", "message": "must be between 3 and 50 characters" }
        ]
    })
)]
pub struct BadRequestValidationResponse(pub ValidationError);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Duplicate key",
    content_type = "application/json",
    example = json!({
        "timestamp": "2025-01-14T10:21:07.311Z",
        "path": "/users",
        "status": 400,
        "error": "Bad Request",
        "message": "E-mail already registered"
    })
)]
pub struct BadRequestResponse(pub StandardError);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "timestamp": "2025-01-14T10:21:07.311Z",
        "path": "/users/123",
        "status": 404,
        "error": "Not Found",
        "message": "Object not found. Id: 123, Type: User"
    })
)]
pub struct NotFoundResponse(pub StandardError);

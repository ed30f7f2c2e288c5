use axum::extract::OriginalUri;
use axum::http::Method;

use super::{ApiError, AppError};

/// Fallback for paths no route matches.
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    AppError::NotFound(format!("No handler found for {} {}", method, uri.path())).at(uri.path())
}

/// Fallback for a known path requested with an unsupported method.
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    AppError::MethodNotAllowed(format!("Method {} is not supported for {}", method, uri.path()))
        .at(uri.path())
}

//! String path parameter extractor with JSON rejections.

use crate::errors::{ApiError, ResultExt};
use axum::{
    extract::{FromRequestParts, OriginalUri, Path},
    http::request::Parts,
};

/// Extractor for a single opaque id path parameter.
///
/// Rejections (e.g. invalid percent-encoding) render as a
/// [`StandardError`](crate::StandardError) bound to the original request path.
///
/// # Example
/// ```ignore
/// use axum_helpers::IdPath;
///
/// async fn get_user(IdPath(id): IdPath) -> String {
///     format!("User ID: {}", id)
/// }
/// ```
pub struct IdPath(pub String);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let path = parts
            .extensions
            .get::<OriginalUri>()
            .map(|OriginalUri(uri)| uri.path().to_string())
            .unwrap_or_else(|| parts.uri.path().to_string());

        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .at_path(&path)?;

        Ok(IdPath(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request as HttpRequest, StatusCode, header},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn echo(IdPath(id): IdPath) -> String {
        id
    }

    fn app() -> Router {
        Router::new().nest("/v1", Router::new().route("/things/{id}", get(echo)))
    }

    fn get_uri(uri: &str) -> HttpRequest<Body> {
        HttpRequest::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_extracts_id() {
        let response = app().oneshot(get_uri("/v1/things/abc123")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"abc123");
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_a_standard_error() {
        let response = app().oneshot(get_uri("/v1/things/%FF")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], 400);
        assert_eq!(body["error"], "Bad Request");
        assert_eq!(body["path"], "/v1/things/%FF");
        assert!(body["timestamp"].is_string());
        assert!(body["message"].as_str().unwrap().contains("id"));
    }
}

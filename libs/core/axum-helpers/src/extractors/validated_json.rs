//! JSON extractor that runs explicit per-type field validation.

use crate::errors::{ApiError, AppError, FieldError, ResultExt};
use axum::extract::{FromRequest, Json, OriginalUri, Request};
use serde::de::DeserializeOwned;

/// Explicit validation for a request body.
///
/// Implementations return one [`FieldError`] per failed rule, in the order the
/// rules are evaluated. An empty vector means the value is valid.
pub trait ValidateFields {
    fn field_errors(&self) -> Vec<FieldError>;
}

/// JSON extractor with validation.
///
/// Decoding failures are rejected with the JSON rejection's status; rule
/// failures are rejected with a 400 validation body. Both carry the original
/// request path.
///
/// # Example
/// ```ignore
/// use axum_helpers::{FieldError, ValidateFields, ValidatedJson};
///
/// #[derive(Deserialize)]
/// struct Rename { name: String }
///
/// impl ValidateFields for Rename {
///     fn field_errors(&self) -> Vec<FieldError> {
///         if self.name.is_empty() {
///             vec![FieldError::new("name", "must not be null or empty")]
///         } else {
///             vec![]
///         }
///     }
/// }
///
/// async fn rename(ValidatedJson(body): ValidatedJson<Rename>) -> String {
///     body.name
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + ValidateFields,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req
            .extensions()
            .get::<OriginalUri>()
            .map(|OriginalUri(uri)| uri.path().to_string())
            .unwrap_or_else(|| req.uri().path().to_string());

        let Json(data) = Json::<T>::from_request(req, state).await.at_path(&path)?;

        let errors = data.field_errors();
        if !errors.is_empty() {
            return Err(AppError::Validation(errors).at(path));
        }

        Ok(ValidatedJson(data))
    }
}

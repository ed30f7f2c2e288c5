//! Custom extractors for Axum handlers.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::{ValidateFields, ValidatedJson};

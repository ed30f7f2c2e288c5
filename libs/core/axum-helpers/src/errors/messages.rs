//! Fixed phrases used in error bodies.

/// `error` phrase of a validation failure body
pub const VALIDATION_ERROR: &str = "Validation error";

/// `message` of a validation failure body
pub const VALIDATION_FAILED: &str = "Error on validation attributes";

/// `message` returned in place of internal error details
pub const INTERNAL_ERROR: &str = "An unexpected error occurred";

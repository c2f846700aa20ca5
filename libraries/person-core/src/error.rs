/// Core error types for the person service
use thiserror::Error;

/// Request validation failures
///
/// Each variant names the offending field so the HTTP layer can surface a
/// precise message without inspecting the request again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent from the request
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A required field was present but empty
    #[error("field must not be empty: {0}")]
    EmptyField(&'static str),

    /// The external identifier is not a well-formed UUID
    #[error("external_id is not a valid UUID")]
    InvalidExternalId,

    /// The email does not match standard email syntax
    #[error("email is not a valid email address")]
    InvalidEmail,

    /// The date of birth is not a parseable timestamp
    #[error("date_of_birth is not a valid RFC 3339 timestamp")]
    InvalidDateOfBirth,
}

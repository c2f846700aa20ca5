/// Incoming save request and its validation
use crate::error::ValidationError;
use crate::types::NewPerson;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use uuid::Uuid;

// Local part, an @, a domain with at least one dot. Matches what the
// original service accepted; full RFC 5322 parsing is out of scope.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"));

/// Raw save request as received over the wire
///
/// Every field deserializes as an optional raw string so that absence and
/// malformed values are distinguished explicitly in [`validate`] rather than
/// rejected opaquely during deserialization.
///
/// [`validate`]: SavePersonRequest::validate
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SavePersonRequest {
    /// Client-supplied external identifier (UUID string)
    pub external_id: Option<String>,

    /// Display name
    pub name: Option<String>,

    /// Email address
    pub email: Option<String>,

    /// Date of birth (RFC 3339 timestamp string)
    pub date_of_birth: Option<String>,
}

impl SavePersonRequest {
    /// Validate the raw request into a typed [`NewPerson`]
    ///
    /// Fails if any field is absent or empty, if `external_id` is not a
    /// well-formed UUID, if `email` does not match email syntax, or if
    /// `date_of_birth` is not a parseable RFC 3339 timestamp. No side
    /// effects.
    pub fn validate(self) -> Result<NewPerson, ValidationError> {
        let external_id = self
            .external_id
            .ok_or(ValidationError::MissingField("external_id"))?;
        let name = self.name.ok_or(ValidationError::MissingField("name"))?;
        let email = self.email.ok_or(ValidationError::MissingField("email"))?;
        let date_of_birth = self
            .date_of_birth
            .ok_or(ValidationError::MissingField("date_of_birth"))?;

        if name.is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        if email.is_empty() {
            return Err(ValidationError::EmptyField("email"));
        }

        let external_id =
            Uuid::parse_str(&external_id).map_err(|_| ValidationError::InvalidExternalId)?;

        if !EMAIL_RE.is_match(&email) {
            return Err(ValidationError::InvalidEmail);
        }

        let date_of_birth = DateTime::parse_from_rfc3339(&date_of_birth)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| ValidationError::InvalidDateOfBirth)?;

        Ok(NewPerson {
            external_id,
            name,
            email,
            date_of_birth,
        })
    }
}

/// Person domain types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored person record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Server-assigned internal identifier (primary key)
    pub id: i64,

    /// Client-supplied external identifier, unique across all records
    pub external_id: Uuid,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Date of birth
    pub date_of_birth: DateTime<Utc>,

    /// Record creation timestamp (audit-only)
    pub created_at: DateTime<Utc>,

    /// Record update timestamp (audit-only)
    pub updated_at: DateTime<Utc>,
}

/// A validated person ready for insertion
///
/// Produced by [`crate::SavePersonRequest::validate`]; the storage layer
/// assigns the internal id and audit timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    /// Client-supplied external identifier
    pub external_id: Uuid,

    /// Display name (non-empty)
    pub name: String,

    /// Email address (non-empty, syntax-checked)
    pub email: String,

    /// Date of birth
    pub date_of_birth: DateTime<Utc>,
}

/// External representation of a person
///
/// Internal id and audit timestamps are deliberately omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonResponse {
    /// Client-supplied external identifier
    pub external_id: Uuid,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Date of birth
    pub date_of_birth: DateTime<Utc>,
}

impl Person {
    /// Map a stored record to its external representation
    pub fn to_response(&self) -> PersonResponse {
        PersonResponse {
            external_id: self.external_id,
            name: self.name.clone(),
            email: self.email.clone(),
            date_of_birth: self.date_of_birth,
        }
    }
}

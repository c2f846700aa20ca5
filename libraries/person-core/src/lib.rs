//! Person Service Core
//!
//! Domain types, request validation, and response mapping for the person
//! service. This crate performs no I/O; the storage and HTTP layers build
//! on top of it.
//!
//! # Example
//!
//! ```rust
//! use person_core::SavePersonRequest;
//!
//! let request = SavePersonRequest {
//!     external_id: Some("550e8400-e29b-41d4-a716-446655440000".to_string()),
//!     name: Some("Alice".to_string()),
//!     email: Some("alice@example.com".to_string()),
//!     date_of_birth: Some("1990-01-15T00:00:00Z".to_string()),
//! };
//!
//! let new_person = request.validate().unwrap();
//! assert_eq!(new_person.name, "Alice");
//! ```

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::ValidationError;
pub use types::{NewPerson, Person, PersonResponse, SavePersonRequest};

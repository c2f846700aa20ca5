/// Domain types for the person service
mod person;
mod request;

pub use person::{NewPerson, Person, PersonResponse};
pub use request::SavePersonRequest;

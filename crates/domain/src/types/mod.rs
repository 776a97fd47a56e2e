//! Domain types and models

pub mod field_errors;
pub mod request;
pub mod user;

pub use field_errors::FieldErrors;
pub use request::{IdentityRole, ProfileAction, ProfilePatch, RequestKind};
pub use user::Identity;

//! # ProfileGate Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The self-or-admin access rule
//! - Field validators for client-supplied profile values
//! - The profile view/update use case
//! - Port interfaces (traits) for storage and time
//!
//! ## Architecture Principles
//! - Only depends on `profilegate-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits

pub mod user;

pub use user::access::AccessGuard;
pub use user::ports::{Clock, IdentityRepository, SystemClock};
pub use user::service::ProfileUpdateService;
pub use user::validation::{apply_patch, validate_name, validate_patch, validate_phone, FieldViolation};

//! Domain constants
//!
//! Field policy limits and the client-facing error messages attached to
//! rejected fields.

// Field policy
pub const NAME_MAX_CHARS: usize = 10;
pub const PHONE_EXACT_CHARS: usize = 11;

// Payload keys
pub const FIELD_NAME: &str = "name";
pub const FIELD_PHONE: &str = "phone";

// Rejection messages (returned verbatim in 422 bodies)
pub const MSG_INVALID_NAME_LENGTH: &str = "invalid name length";
pub const MSG_INVALID_PHONE_FORMAT: &str = "invalid phone format";

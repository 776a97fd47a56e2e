//! Field validators for client-supplied profile values
//!
//! Length is the only acceptance criterion; content is not inspected.
//! Lengths count characters, not bytes.

use profilegate_domain::constants::{
    FIELD_NAME, FIELD_PHONE, MSG_INVALID_NAME_LENGTH, MSG_INVALID_PHONE_FORMAT, NAME_MAX_CHARS,
    PHONE_EXACT_CHARS,
};
use profilegate_domain::{FieldErrors, Identity, ProfilePatch};
use thiserror::Error;

/// A single rejected field value
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldViolation {
    #[error("{}", MSG_INVALID_NAME_LENGTH)]
    NameTooLong,

    #[error("{}", MSG_INVALID_PHONE_FORMAT)]
    InvalidPhoneFormat,
}

impl FieldViolation {
    /// Payload key the violation belongs to.
    pub fn field(self) -> &'static str {
        match self {
            Self::NameTooLong => FIELD_NAME,
            Self::InvalidPhoneFormat => FIELD_PHONE,
        }
    }
}

/// Accept names of at most 10 characters.
pub fn validate_name(value: &str) -> Result<(), FieldViolation> {
    if value.chars().count() > NAME_MAX_CHARS {
        return Err(FieldViolation::NameTooLong);
    }
    Ok(())
}

/// Accept phones of exactly 11 characters.
pub fn validate_phone(value: &str) -> Result<(), FieldViolation> {
    if value.chars().count() != PHONE_EXACT_CHARS {
        return Err(FieldViolation::InvalidPhoneFormat);
    }
    Ok(())
}

/// Validate every present field, collecting all rejections.
pub fn validate_patch(patch: &ProfilePatch) -> Result<(), FieldErrors> {
    let checks = [
        patch.name.as_deref().map(validate_name),
        patch.phone.as_deref().map(validate_phone),
    ];

    let mut errors = FieldErrors::new();
    for violation in checks.into_iter().flatten().filter_map(Result::err) {
        errors.insert(violation.field(), violation.to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Apply `patch` to `identity` only if every present field is valid.
///
/// On rejection `identity` is left exactly as it was.
pub fn apply_patch(identity: &mut Identity, patch: &ProfilePatch) -> Result<(), FieldErrors> {
    validate_patch(patch)?;

    if let Some(name) = &patch.name {
        identity.name.clone_from(name);
    }
    if let Some(phone) = &patch.phone {
        identity.phone.clone_from(phone);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_boundary() {
        assert!(validate_name("").is_ok());
        assert!(validate_name("Petr").is_ok());
        assert!(validate_name("0123456789").is_ok());
        assert_eq!(validate_name("01234567890"), Err(FieldViolation::NameTooLong));
        assert_eq!(validate_name("ThisNameIsWayTooLong"), Err(FieldViolation::NameTooLong));
    }

    #[test]
    fn name_counts_characters_not_bytes() {
        // 10 Cyrillic letters, 20 bytes
        assert!(validate_name("Александра").is_ok());
    }

    #[test]
    fn phone_requires_exactly_eleven() {
        assert!(validate_phone("79111111111").is_ok());
        assert_eq!(validate_phone("7911111111"), Err(FieldViolation::InvalidPhoneFormat));
        assert_eq!(validate_phone("791111111111"), Err(FieldViolation::InvalidPhoneFormat));
        assert_eq!(validate_phone(""), Err(FieldViolation::InvalidPhoneFormat));
    }

    #[test]
    fn phone_content_is_not_inspected() {
        assert!(validate_phone("+7 911-1111").is_ok());
    }

    #[test]
    fn violation_messages_and_fields() {
        assert_eq!(FieldViolation::NameTooLong.to_string(), "invalid name length");
        assert_eq!(FieldViolation::NameTooLong.field(), "name");
        assert_eq!(FieldViolation::InvalidPhoneFormat.to_string(), "invalid phone format");
        assert_eq!(FieldViolation::InvalidPhoneFormat.field(), "phone");
    }

    #[test]
    fn patch_collects_every_rejection() {
        let patch = ProfilePatch::default().with_name("ThisNameIsWayTooLong").with_phone("123");

        let errors = validate_patch(&patch).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("invalid name length"));
        assert_eq!(errors.get("phone"), Some("invalid phone format"));
    }

    #[test]
    fn absent_fields_are_not_validated() {
        assert!(validate_patch(&ProfilePatch::default()).is_ok());
        assert!(validate_patch(&ProfilePatch::default().with_name("Petr")).is_ok());
    }

    #[test]
    fn apply_is_all_or_nothing() {
        let mut identity = Identity::new(1, "Alex", "79222222222");
        let patch = ProfilePatch::default().with_name("Petr").with_phone("bad");

        let errors = apply_patch(&mut identity, &patch).unwrap_err();

        assert!(errors.contains("phone"));
        assert!(!errors.contains("name"));
        assert_eq!(identity.name, "Alex");
        assert_eq!(identity.phone, "79222222222");
    }

    #[test]
    fn apply_assigns_present_fields_only() {
        let mut identity = Identity::new(1, "Alex", "79222222222");

        apply_patch(&mut identity, &ProfilePatch::default().with_phone("79111111111")).unwrap();

        assert_eq!(identity.name, "Alex");
        assert_eq!(identity.phone, "79111111111");
    }
}

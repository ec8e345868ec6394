//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use flyweight_foundation::{BundleId, EntityId, Error, ErrorContext, ErrorKind, ValidationError};

#[test]
fn validation_error_display_names_field() {
    let err = Error::validation(ValidationError::EmptyField("location".to_string()));
    assert_eq!(format!("{err}"), "validation failed: field `location` is empty");
}

#[test]
fn empty_name_display() {
    let err: Error = ValidationError::EmptyName.into();
    assert_eq!(format!("{err}"), "validation failed: entity name is empty");
}

#[test]
fn bundle_not_found_display() {
    let err = Error::bundle_not_found(BundleId::new(999));
    assert_eq!(format!("{err}"), "bundle not found: BundleId(999)");
    assert!(err.is_not_found());
}

#[test]
fn entity_not_found_display() {
    let err = Error::entity_not_found(EntityId::new(4));
    assert_eq!(format!("{err}"), "entity not found: EntityId(4)");
    assert!(err.is_not_found());
    assert!(!err.is_validation());
}

#[test]
fn invariant_violation_is_neither_validation_nor_not_found() {
    let err = Error::invariant_violation("boom");
    assert!(matches!(err.kind, ErrorKind::InvariantViolation(_)));
    assert!(!err.is_validation());
    assert!(!err.is_not_found());
}

#[test]
fn context_does_not_change_display() {
    let err = Error::bundle_not_found(BundleId::new(1))
        .with_context(ErrorContext::new().with_operation("InternPool::lookup"));
    assert_eq!(format!("{err}"), "bundle not found: BundleId(1)");
    assert!(err.context.is_some());
}

#[test]
fn errors_are_std_errors() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<Error>();
    assert_error::<ValidationError>();
}

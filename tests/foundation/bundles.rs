//! Integration tests for attribute bundles
//!
//! Tests construction, structural equality, and field access.

use std::collections::HashSet;

use flyweight_foundation::{AttributeBundle, ErrorKind, Field, ValidationError};

fn metadata(department: &str, role: &str, location: &str) -> AttributeBundle {
    AttributeBundle::builder()
        .field("department", department)
        .field("role", role)
        .field("location", location)
        .build()
        .unwrap()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn builder_and_pairs_agree() {
    let built = metadata("HR", "Manager", "London");
    let from_pairs = AttributeBundle::new(vec![
        ("department".to_string(), "HR".to_string()),
        ("role".to_string(), "Manager".to_string()),
        ("location".to_string(), "London".to_string()),
    ])
    .unwrap();

    assert_eq!(built, from_pairs);
}

#[test]
fn fields_exposed_in_name_order() {
    let bundle = metadata("HR", "Manager", "London");

    assert_eq!(
        bundle.fields(),
        &[
            Field::new("department", "HR"),
            Field::new("location", "London"),
            Field::new("role", "Manager"),
        ]
    );
}

#[test]
fn duplicate_names_rejected() {
    let err = AttributeBundle::new([("role", "a"), ("role", "b")]).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::Validation(ValidationError::DuplicateField(_))
    ));
}

// =============================================================================
// Equality and Hashing
// =============================================================================

#[test]
fn equal_bundles_collapse_in_hash_set() {
    let mut set = HashSet::new();
    set.insert(metadata("Engineering", "Developer", "Bangalore"));
    set.insert(metadata("Engineering", "Developer", "Bangalore"));
    set.insert(metadata("HR", "Manager", "London"));

    assert_eq!(set.len(), 2);
}

#[test]
fn clones_share_storage() {
    let original = metadata("HR", "Manager", "London");
    let copy = original.clone();

    assert!(original.shares_storage(&copy));
    assert!(!original.shares_storage(&metadata("HR", "Manager", "London")));
}

#[test]
fn field_values_are_case_sensitive() {
    assert_ne!(
        metadata("hr", "Manager", "London"),
        metadata("HR", "Manager", "London")
    );
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn debug_shows_fields() {
    let debug = format!("{:?}", metadata("HR", "Manager", "London"));
    assert!(debug.contains("\"department\": \"HR\""));
}

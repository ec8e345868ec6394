//! Integration tests for the entity store
//!
//! Tests record creation, foreign-key references, and listing.

use std::sync::Arc;

use flyweight_foundation::{EntityId, ErrorKind, ValidationError};
use flyweight_storage::{EntityStore, InternPool};

use crate::metadata;

fn store() -> EntityStore {
    EntityStore::new(Arc::new(InternPool::new()))
}

// =============================================================================
// Creation
// =============================================================================

#[test]
fn create_and_get() {
    let store = store();
    let id = store
        .create("Alice", metadata("Engineering", "Developer", "Bangalore"))
        .unwrap();

    let record = store.get(id).unwrap();
    assert_eq!(record.id, id);
    assert_eq!(&*record.name, "Alice");
    assert_eq!(record.to_string(), "Entity(1) Alice -> Bundle(1)");
}

#[test]
fn empty_name_rejected() {
    let store = store();
    let err = store
        .create("", metadata("HR", "Manager", "London"))
        .unwrap_err();

    assert!(matches!(
        err.kind,
        ErrorKind::Validation(ValidationError::EmptyName)
    ));
    assert_eq!(store.count(), 0);
    assert_eq!(store.pool().count(), 0);
}

#[test]
fn get_never_allocated_id() {
    let store = store();
    store
        .create("Alice", metadata("HR", "Manager", "London"))
        .unwrap();

    assert!(store.get(EntityId::new(2)).unwrap_err().is_not_found());
    assert!(store.get(EntityId::new(0)).unwrap_err().is_not_found());
}

// =============================================================================
// References
// =============================================================================

#[test]
fn every_record_references_pooled_bundle() {
    let store = store();
    let submitted = [
        ("Alice", metadata("Engineering", "Developer", "Bangalore")),
        ("Diana", metadata("HR", "Manager", "London")),
        ("Frank", metadata("Sales", "Lead", "Paris")),
    ];

    for (name, bundle) in &submitted {
        let id = store.create(*name, bundle.clone()).unwrap();
        let resolved = store.resolve(id).unwrap();
        assert_eq!(&resolved.bundle, bundle);
    }
}

#[test]
fn resolve_unknown_entity_is_not_found() {
    let store = store();
    assert!(store.resolve(EntityId::new(1)).unwrap_err().is_not_found());
}

// =============================================================================
// Listing
// =============================================================================

#[test]
fn list_in_creation_order() {
    let store = store();
    for name in ["Charlie", "Alice", "Bob"] {
        store
            .create(name, metadata("HR", "Manager", "London"))
            .unwrap();
    }

    let names: Vec<_> = store
        .list()
        .iter()
        .map(|r| r.name.to_string())
        .collect();
    assert_eq!(names, vec!["Charlie", "Alice", "Bob"]);
}

#[test]
fn empty_store_lists_nothing() {
    let store = store();
    let snapshot = store.list();
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.get(0), None);
}

#[test]
fn snapshot_supports_for_loops() {
    let store = store();
    store
        .create("Alice", metadata("HR", "Manager", "London"))
        .unwrap();

    let snapshot = store.list();
    let mut seen = 0;
    for record in &snapshot {
        assert_eq!(record.id, EntityId::FIRST);
        seen += 1;
    }
    assert_eq!(seen, 1);
}

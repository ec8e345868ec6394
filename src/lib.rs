//! Flyweight - Concurrent canonicalization pool
//!
//! This crate re-exports both layers of the flyweight system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: flyweight_storage    — InternPool, EntityStore
//! Layer 0: flyweight_foundation — AttributeBundle, ids, schema, Error
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use flyweight::{AttributeBundle, EntityStore, InternPool};
//!
//! let pool = Arc::new(InternPool::new());
//! let users = EntityStore::new(Arc::clone(&pool));
//!
//! let engineer = AttributeBundle::builder()
//!     .field("department", "Engineering")
//!     .field("role", "Developer")
//!     .field("location", "Bangalore")
//!     .build()?;
//!
//! let alice = users.create("Alice", engineer.clone())?;
//! let bob = users.create("Bob", engineer)?;
//!
//! assert_eq!(users.get(alice)?.bundle_id, users.get(bob)?.bundle_id);
//! assert_eq!(pool.count(), 1);
//! # Ok::<(), flyweight::foundation::Error>(())
//! ```

pub use flyweight_foundation as foundation;
pub use flyweight_storage as storage;

pub use flyweight_foundation::{
    AttributeBundle, BundleId, BundleSchema, EntityId, Error, ErrorKind, PoolConfig, Result,
    ValidationError,
};
pub use flyweight_storage::{
    EntityRecord, EntitySnapshot, EntityStore, InternPool, InternRecord, ResolvedEntity,
};

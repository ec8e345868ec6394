//! Named records that reference pooled bundles.
//!
//! The `EntityStore` never holds bundle contents. Each record carries the
//! [`BundleId`] the pool handed back, the way a row carries a foreign key.

use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::BuildHasher;
use std::sync::Arc;

use flyweight_foundation::schema::is_blank;
use flyweight_foundation::{
    AttributeBundle, BundleId, EntityId, Error, ErrorContext, Result, ValidationError,
};
use parking_lot::RwLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::pool::InternPool;

/// A named record holding a reference to a pooled bundle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntityRecord {
    /// Store-assigned identifier.
    pub id: EntityId,
    /// Display name, e.g. `Alice`.
    pub name: Arc<str>,
    /// Foreign key into the intern pool.
    pub bundle_id: BundleId,
}

impl fmt::Display for EntityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.id, self.name, self.bundle_id)
    }
}

/// An entity joined with its canonical bundle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedEntity {
    /// The stored record.
    pub record: EntityRecord,
    /// The bundle `record.bundle_id` refers to.
    pub bundle: AttributeBundle,
}

impl fmt::Display for ResolvedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.record.id, self.record.name, self.bundle)
    }
}

/// Point-in-time view of an entity store, in creation order.
///
/// Taking a snapshot is O(1) and it never changes afterwards, so it can be
/// iterated as many times as needed while the store keeps growing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntitySnapshot(im::Vector<EntityRecord>);

impl EntitySnapshot {
    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the snapshot has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets a record by creation position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&EntityRecord> {
        self.0.get(index)
    }

    /// Iterates over records in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &EntityRecord> + '_ {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a EntitySnapshot {
    type Item = &'a EntityRecord;
    type IntoIter = im::vector::Iter<'a, EntityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Lock-protected store state.
struct StoreTables {
    /// Records in creation order; `records[id.slot()]` holds `id`.
    records: im::Vector<EntityRecord>,
    /// Next id to hand out. Independent of the pool's counter.
    next_id: EntityId,
}

/// Append-only store of named records referencing an [`InternPool`].
///
/// Entities are never deduplicated: the same name and bundle submitted twice
/// yields two records pointing at one bundle id. Several stores may share a
/// single pool.
pub struct EntityStore<S = RandomState> {
    pool: Arc<InternPool<S>>,
    tables: RwLock<StoreTables>,
}

impl<S: BuildHasher> EntityStore<S> {
    /// Creates an empty store backed by `pool`.
    #[must_use]
    pub fn new(pool: Arc<InternPool<S>>) -> Self {
        Self {
            pool,
            tables: RwLock::new(StoreTables {
                records: im::Vector::new(),
                next_id: EntityId::FIRST,
            }),
        }
    }

    /// Returns the pool this store references.
    #[must_use]
    pub fn pool(&self) -> &Arc<InternPool<S>> {
        &self.pool
    }

    /// Creates a record named `name` whose bundle is interned in the pool.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `name` is blank or the bundle fails the
    /// pool schema; nothing is stored in that case. Returns an invariant
    /// violation if the pool hands back an id it cannot resolve, or if the
    /// entity id space is exhausted. In the exhausted case the bundle has
    /// already been interned and stays in the pool; no entity is stored.
    pub fn create(&self, name: impl Into<Arc<str>>, bundle: AttributeBundle) -> Result<EntityId> {
        let name = name.into();
        let context = || ErrorContext::new().with_operation("EntityStore::create");

        if is_blank(&name) {
            tracing::debug!("Rejected entity with blank name");
            return Err(Error::from(ValidationError::EmptyName).with_context(context()));
        }

        let bundle_id = self
            .pool
            .get_or_create(bundle)
            .map_err(|err| err.with_context(context().with_frame("InternPool::get_or_create")))?;

        if !self.pool.contains(bundle_id) {
            tracing::error!(%bundle_id, %name, "Pool returned an unresolvable bundle id");
            return Err(Error::invariant_violation(format!(
                "bundle {bundle_id} missing from pool after interning"
            ))
            .with_context(context()));
        }

        let mut tables = self.tables.write();
        let id = tables.next_id;
        let next_id = id
            .next()
            .ok_or_else(|| Error::invariant_violation("entity id space exhausted"))?;
        tables.records.push_back(EntityRecord {
            id,
            name: Arc::clone(&name),
            bundle_id,
        });
        tables.next_id = next_id;
        drop(tables);

        tracing::debug!(%id, %name, %bundle_id, "Created entity");
        Ok(id)
    }

    /// Returns the record for `id`.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if `id` was never allocated by this store.
    pub fn get(&self, id: EntityId) -> Result<EntityRecord> {
        let tables = self.tables.read();
        id.slot()
            .and_then(|slot| tables.records.get(slot))
            .cloned()
            .ok_or_else(|| {
                Error::entity_not_found(id)
                    .with_context(ErrorContext::new().with_operation("EntityStore::get"))
            })
    }

    /// Returns the record for `id` together with its canonical bundle.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if `id` is unknown, or an invariant
    /// violation if the record's bundle id does not resolve in the pool.
    pub fn resolve(&self, id: EntityId) -> Result<ResolvedEntity> {
        let record = self.get(id)?;
        let bundle = self.pool.lookup(record.bundle_id).map_err(|_| {
            tracing::error!(%id, bundle_id = %record.bundle_id, "Dangling bundle reference");
            Error::invariant_violation(format!(
                "{} references unknown {}",
                record.id, record.bundle_id
            ))
            .with_context(ErrorContext::new().with_operation("EntityStore::resolve"))
        })?;
        Ok(ResolvedEntity { record, bundle })
    }

    /// Returns every record that references `bundle_id`, in creation order.
    #[must_use]
    pub fn find_by_bundle(&self, bundle_id: BundleId) -> Vec<EntityRecord> {
        self.tables
            .read()
            .records
            .iter()
            .filter(|record| record.bundle_id == bundle_id)
            .cloned()
            .collect()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tables.read().records.len()
    }

    /// Returns true if no records have been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns a snapshot of all records in creation order.
    #[must_use]
    pub fn list(&self) -> EntitySnapshot {
        EntitySnapshot(self.tables.read().records.clone())
    }
}

impl<S: BuildHasher> fmt::Debug for EntityStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityStore")
            .field("count", &self.count())
            .field("pool", &self.pool)
            .finish()
    }
}

//! Canonical bundle storage.
//!
//! The `InternPool` guarantees that each distinct [`AttributeBundle`] value is
//! stored exactly once and addressed by a stable [`BundleId`]. Both of its
//! tables are updated inside one write-locked section, so concurrent callers
//! submitting equal novel bundles converge on a single record.

use std::collections::HashMap;
use std::collections::hash_map::{Entry, RandomState};
use std::fmt;
use std::hash::BuildHasher;

use flyweight_foundation::{AttributeBundle, BundleId, Error, ErrorContext, PoolConfig, Result};
use parking_lot::RwLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A canonical bundle and the id it was interned under.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InternRecord {
    /// Pool-assigned identifier.
    pub id: BundleId,
    /// The canonical bundle.
    pub bundle: AttributeBundle,
}

impl fmt::Display for InternRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.bundle)
    }
}

/// Lock-protected pool state.
struct PoolTables<S> {
    /// Bundle value to id. Collisions resolve by full structural equality.
    index: HashMap<AttributeBundle, BundleId, S>,
    /// Records in allocation order; `records[id.slot()]` holds `id`.
    records: Vec<InternRecord>,
    /// Next id to hand out. Never decreases.
    next_id: BundleId,
}

/// Deduplicating registry of attribute bundles.
///
/// The pool is explicitly constructed and shared by handle (usually an
/// `Arc<InternPool>`); there is no global instance. Records are never removed,
/// so ids stay valid for the pool's whole lifetime.
///
/// The hasher is a type parameter so callers can pick one; correctness never
/// depends on it, since the index compares full bundle values.
pub struct InternPool<S = RandomState> {
    config: PoolConfig,
    tables: RwLock<PoolTables<S>>,
}

impl Default for InternPool {
    fn default() -> Self {
        Self::new()
    }
}

impl InternPool {
    /// Creates an empty pool with the default user-metadata schema.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PoolConfig::default())
    }

    /// Creates an empty pool with the given configuration.
    #[must_use]
    pub fn with_config(config: PoolConfig) -> Self {
        Self::with_config_and_hasher(config, RandomState::new())
    }
}

impl<S: BuildHasher> InternPool<S> {
    /// Creates an empty pool that hashes bundles with `hasher`.
    #[must_use]
    pub fn with_config_and_hasher(config: PoolConfig, hasher: S) -> Self {
        let capacity = config.initial_capacity;
        Self {
            config,
            tables: RwLock::new(PoolTables {
                index: HashMap::with_capacity_and_hasher(capacity, hasher),
                records: Vec::with_capacity(capacity),
                next_id: BundleId::FIRST,
            }),
        }
    }

    /// Returns the pool configuration.
    #[must_use]
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Checks a bundle against the pool schema without interning it.
    ///
    /// # Errors
    ///
    /// Returns a validation error describing the first problem found.
    pub fn validate(&self, bundle: &AttributeBundle) -> Result<()> {
        self.config.schema.validate(bundle)
    }

    /// Returns the id of `bundle`, interning it first if it is new.
    ///
    /// Repeated calls with value-equal bundles return the same id regardless
    /// of which caller got there first. New ids are strictly increasing.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the bundle does not satisfy the pool
    /// schema; the pool is left untouched. Returns an invariant violation if
    /// the id space is exhausted.
    pub fn get_or_create(&self, bundle: AttributeBundle) -> Result<BundleId> {
        if let Err(err) = self.validate(&bundle) {
            tracing::debug!(%bundle, error = %err, "Rejected bundle");
            return Err(err.with_context(
                ErrorContext::new().with_operation("InternPool::get_or_create"),
            ));
        }

        let mut guard = self.tables.write();
        let tables = &mut *guard;

        match tables.index.entry(bundle) {
            Entry::Occupied(entry) => {
                let id = *entry.get();
                tracing::trace!(%id, "Intern hit");
                Ok(id)
            }
            Entry::Vacant(entry) => {
                let id = tables.next_id;
                let next_id = id
                    .next()
                    .ok_or_else(|| Error::invariant_violation("bundle id space exhausted"))?;
                let bundle = entry.key().clone();
                entry.insert(id);
                tracing::debug!(%id, %bundle, "Interned new bundle");
                tables.records.push(InternRecord { id, bundle });
                tables.next_id = next_id;
                Ok(id)
            }
        }
    }

    /// Returns the canonical bundle for `id`.
    ///
    /// The returned bundle shares storage with every other handle to the same
    /// pooled value.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if `id` was never allocated by this pool.
    pub fn lookup(&self, id: BundleId) -> Result<AttributeBundle> {
        let tables = self.tables.read();
        id.slot()
            .and_then(|slot| tables.records.get(slot))
            .map(|record| record.bundle.clone())
            .ok_or_else(|| {
                Error::bundle_not_found(id)
                    .with_context(ErrorContext::new().with_operation("InternPool::lookup"))
            })
    }

    /// Returns the id of an already interned bundle without inserting.
    #[must_use]
    pub fn find(&self, bundle: &AttributeBundle) -> Option<BundleId> {
        self.tables.read().index.get(bundle).copied()
    }

    /// Returns true if `id` was allocated by this pool.
    #[must_use]
    pub fn contains(&self, id: BundleId) -> bool {
        id.slot()
            .is_some_and(|slot| slot < self.tables.read().records.len())
    }

    /// Returns the number of distinct bundles interned.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tables.read().records.len()
    }

    /// Returns true if nothing has been interned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns a copy of every record in id order.
    #[must_use]
    pub fn records(&self) -> Vec<InternRecord> {
        self.tables.read().records.clone()
    }
}

impl<S: BuildHasher> fmt::Debug for InternPool<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InternPool")
            .field("config", &self.config)
            .field("count", &self.count())
            .finish_non_exhaustive()
    }
}

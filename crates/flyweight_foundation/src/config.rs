//! Configuration for intern pools.

use crate::schema::BundleSchema;

/// Configuration for an intern pool.
///
/// Controls which bundles are admitted and how the pool's tables are sized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Schema every bundle must satisfy before it is interned.
    pub schema: BundleSchema,

    /// Number of distinct bundles to reserve room for up front.
    pub initial_capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            schema: BundleSchema::default(),
            initial_capacity: 16,
        }
    }
}

impl PoolConfig {
    /// Creates a configuration that admits any non-empty bundle.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            schema: BundleSchema::any(),
            ..Self::default()
        }
    }

    /// Builder method to set the bundle schema.
    #[must_use]
    pub fn with_schema(mut self, schema: BundleSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Builder method to set the initial capacity.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}

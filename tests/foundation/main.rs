//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: AttributeBundle, ids, schemas, and errors.

mod bundles;
mod errors;
mod schemas;

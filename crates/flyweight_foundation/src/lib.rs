//! Core value types for flyweight.
//!
//! This crate provides:
//! - [`AttributeBundle`] - Immutable, structurally compared field bundles
//! - [`BundleId`] and [`EntityId`] - Sequential identifiers
//! - [`BundleSchema`] and [`PoolConfig`] - Validation and pool configuration
//! - [`Error`] - Error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bundle;
pub mod config;
pub mod error;
pub mod id;
pub mod schema;

pub use bundle::{AttributeBundle, BundleBuilder, Field};
pub use config::PoolConfig;
pub use error::{Error, ErrorContext, ErrorKind, Result, ValidationError};
pub use id::{BundleId, EntityId};
pub use schema::BundleSchema;

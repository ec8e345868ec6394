//! Intern pool and referencing entity store for flyweight.
//!
//! This crate provides:
//! - [`InternPool`] - Canonical storage of distinct attribute bundles
//! - [`EntityStore`] - Named records referencing pooled bundles by id

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod pool;

pub use entity::{EntityRecord, EntitySnapshot, EntityStore, ResolvedEntity};
pub use pool::{InternPool, InternRecord};

//! Immutable attribute bundles.
//!
//! A bundle is the intrinsic, shareable part of a record: a small set of
//! named string fields such as `department`, `role` and `location`. Bundles
//! compare and hash by value, so two independently built bundles with the
//! same fields are the same key in an intern pool.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// A single named field of an [`AttributeBundle`].
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Field {
    /// Field name, e.g. `department`.
    pub name: Arc<str>,
    /// Field value, e.g. `Engineering`.
    pub value: Arc<str>,
}

impl Field {
    /// Creates a field from a name and a value.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, value: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An immutable bundle of named string fields.
///
/// Fields are kept sorted by name, so construction order does not affect
/// equality. Cloning is O(1): clones share one backing allocation, which is
/// what lets an intern pool hand the same canonical bundle to every caller.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Field>", into = "Vec<Field>")
)]
pub struct AttributeBundle {
    fields: Arc<[Field]>,
}

impl AttributeBundle {
    /// Starts building a bundle field by field.
    #[must_use]
    pub fn builder() -> BundleBuilder {
        BundleBuilder::default()
    }

    /// Creates a bundle from `(name, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError::DuplicateField`] if a name appears twice.
    pub fn new<I, N, V>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<Arc<str>>,
        V: Into<Arc<str>>,
    {
        Self::from_fields(
            fields
                .into_iter()
                .map(|(name, value)| Field::new(name, value))
                .collect(),
        )
    }

    fn from_fields(mut fields: Vec<Field>) -> Result<Self> {
        fields.sort_by(|a, b| a.name.cmp(&b.name));
        if let Some(pair) = fields.windows(2).find(|w| w[0].name == w[1].name) {
            return Err(ValidationError::DuplicateField(pair[0].name.to_string()).into());
        }
        Ok(Self {
            fields: fields.into(),
        })
    }

    /// Returns the value of the named field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .binary_search_by(|f| f.name.as_ref().cmp(name))
            .ok()
            .map(|idx| self.fields[idx].value.as_ref())
    }

    /// Returns true if the bundle has a field with this name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the fields in canonical (name) order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Iterates over field names in canonical order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|f| f.name.as_ref())
    }

    /// Iterates over `(name, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.fields
            .iter()
            .map(|f| (f.name.as_ref(), f.value.as_ref()))
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the bundle has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true if both handles share one allocation.
    ///
    /// Equal bundles returned by the same intern pool always share storage;
    /// independently built equal bundles do not.
    #[must_use]
    pub fn shares_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.fields, &other.fields)
    }
}

impl fmt::Debug for AttributeBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl fmt::Display for AttributeBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        write!(f, ")")
    }
}

impl TryFrom<Vec<Field>> for AttributeBundle {
    type Error = crate::error::Error;

    fn try_from(fields: Vec<Field>) -> Result<Self> {
        Self::from_fields(fields)
    }
}

impl From<AttributeBundle> for Vec<Field> {
    fn from(bundle: AttributeBundle) -> Self {
        bundle.fields.to_vec()
    }
}

/// Incremental builder for [`AttributeBundle`].
#[derive(Clone, Debug, Default)]
pub struct BundleBuilder {
    fields: Vec<Field>,
}

impl BundleBuilder {
    /// Adds a field.
    #[must_use]
    pub fn field(mut self, name: impl Into<Arc<str>>, value: impl Into<Arc<str>>) -> Self {
        self.fields.push(Field::new(name, value));
        self
    }

    /// Finishes the bundle.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError::DuplicateField`] if a name was added twice.
    pub fn build(self) -> Result<AttributeBundle> {
        AttributeBundle::from_fields(self.fields)
    }
}

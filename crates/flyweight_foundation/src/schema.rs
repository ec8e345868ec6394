//! Bundle schemas.
//!
//! A schema names the fields every bundle in a pool must carry. Validation
//! happens before a pool takes its lock, so a rejected bundle never touches
//! pool state.

use std::sync::Arc;

use crate::bundle::AttributeBundle;
use crate::error::{Result, ValidationError};

/// Required fields for bundles admitted to a pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BundleSchema {
    /// Field names every bundle must carry, in declaration order.
    pub required: Vec<Arc<str>>,
    /// Whether fields outside `required` are accepted.
    pub allow_extra_fields: bool,
}

impl Default for BundleSchema {
    /// The user-metadata schema: `department`, `role`, `location`.
    fn default() -> Self {
        Self::new(["department", "role", "location"])
    }
}

impl BundleSchema {
    /// Creates a strict schema with the given required fields.
    #[must_use]
    pub fn new<I, N>(required: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Arc<str>>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
            allow_extra_fields: false,
        }
    }

    /// Creates a schema with no required fields that accepts any field.
    #[must_use]
    pub fn any() -> Self {
        Self {
            required: Vec::new(),
            allow_extra_fields: true,
        }
    }

    /// Builder method to accept or reject undeclared fields.
    #[must_use]
    pub fn with_extra_fields(mut self, allow: bool) -> Self {
        self.allow_extra_fields = allow;
        self
    }

    /// Returns true if `name` is a required field.
    #[must_use]
    pub fn requires(&self, name: &str) -> bool {
        self.required.iter().any(|r| r.as_ref() == name)
    }

    /// Checks a bundle against this schema.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the bundle is empty, lacks a required
    /// field, has an empty name or value, or carries an undeclared field
    /// while extras are disallowed.
    pub fn validate(&self, bundle: &AttributeBundle) -> Result<()> {
        if bundle.is_empty() {
            return Err(ValidationError::EmptyBundle.into());
        }

        for name in &self.required {
            if !bundle.contains(name) {
                return Err(ValidationError::MissingField(name.to_string()).into());
            }
        }

        for (name, value) in bundle.iter() {
            if is_blank(name) || is_blank(value) {
                return Err(ValidationError::EmptyField(name.to_string()).into());
            }
            if !self.allow_extra_fields && !self.requires(name) {
                return Err(ValidationError::UnknownField(name.to_string()).into());
            }
        }

        Ok(())
    }
}

/// Returns true for empty or whitespace-only strings.
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

//! Error types for flyweight.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::id::{BundleId, EntityId};

/// Convenience alias for results carrying a flyweight [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for pool and store operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(error: ValidationError) -> Self {
        Self::new(ErrorKind::Validation(error))
    }

    /// Creates a bundle not found error.
    #[must_use]
    pub fn bundle_not_found(id: BundleId) -> Self {
        Self::new(ErrorKind::BundleNotFound(id))
    }

    /// Creates an entity not found error.
    #[must_use]
    pub fn entity_not_found(id: EntityId) -> Self {
        Self::new(ErrorKind::EntityNotFound(id))
    }

    /// Creates an invariant violation error.
    #[must_use]
    pub fn invariant_violation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvariantViolation(message.into()))
    }

    /// Returns true if this is a validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation(_))
    }

    /// Returns true if a bundle or entity lookup missed.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::BundleNotFound(_) | ErrorKind::EntityNotFound(_)
        )
    }
}

impl From<ValidationError> for Error {
    fn from(error: ValidationError) -> Self {
        Self::validation(error)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Input was rejected before any state was touched.
    #[error("validation failed: {0}")]
    Validation(ValidationError),

    /// No bundle was ever interned under this id.
    #[error("bundle not found: {0:?}")]
    BundleNotFound(BundleId),

    /// No entity was ever created under this id.
    #[error("entity not found: {0:?}")]
    EntityNotFound(EntityId),

    /// Internal consistency failure (should not happen).
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

/// Reasons a bundle or entity name is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The bundle has no fields at all.
    #[error("bundle has no fields")]
    EmptyBundle,

    /// A field required by the schema is absent.
    #[error("missing required field `{0}`")]
    MissingField(String),

    /// A field name or value is empty or whitespace.
    #[error("field `{0}` is empty")]
    EmptyField(String),

    /// A field is not declared by a strict schema.
    #[error("unknown field `{0}`")]
    UnknownField(String),

    /// The same field name was supplied twice.
    #[error("duplicate field `{0}`")]
    DuplicateField(String),

    /// An entity name is empty or whitespace.
    #[error("entity name is empty")]
    EmptyName,
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation that failed, e.g. `InternPool::get_or_create`.
    pub operation: Option<String>,
    /// Outer operations, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the failing operation.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = &self.operation {
            write!(f, "in {operation}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  from {frame}")?;
            }
        }
        Ok(())
    }
}

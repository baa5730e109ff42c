//! Error types for tree traversal, writes, and node construction.
//!
//! Path lookups fail loudly: resolving through a missing or scalar value is an error
//! rather than an absent marker, so a malformed address never silently lands a write
//! somewhere unrelated.

use thiserror::Error;

/// Structured error types for binding operations.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// A path walked through a missing or non-container value
    #[error("Cannot resolve path '{path}': {reason}")]
    PathResolution { path: String, reason: String },

    /// An operation expected a container and received something else
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// Hydration input nested deeper than the configured limit
    #[error("Input at '{path}' exceeds the maximum nesting depth of {limit}")]
    DepthExceeded { path: String, limit: usize },
}

impl BindingError {
    /// Check if this error is related to path resolution
    pub fn is_path_error(&self) -> bool {
        matches!(self, BindingError::PathResolution { .. })
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, BindingError::TypeMismatch { .. })
    }

    /// Check if this error was raised by the depth guard
    pub fn is_depth_error(&self) -> bool {
        matches!(self, BindingError::DepthExceeded { .. })
    }

    /// Get the path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            BindingError::PathResolution { path, .. } | BindingError::DepthExceeded { path, .. } => {
                Some(path)
            }
            _ => None,
        }
    }

    pub(crate) fn unresolved(path: impl ToString, reason: impl Into<String>) -> Self {
        BindingError::PathResolution {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        BindingError::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

// Conversion from BindingError to the main Error type
impl From<BindingError> for crate::Error {
    fn from(err: BindingError) -> Self {
        crate::Error::Binding(err)
    }
}

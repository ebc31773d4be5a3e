//! Persistence gateway infrastructure
//!
//! Every storage adapter (PostgreSQL, in-memory mock) reports failures
//! through the same `StoreError` type, so the service layer stays agnostic
//! of the backing engine. Lookup misses are NOT errors: gateway operations
//! model absence as `Option`/`bool` results and reserve `StoreError` for
//! genuine engine faults (lost connections, violated constraints).

use thiserror::Error;

/// Error type for persistence gateway operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection to the underlying storage engine failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The operation conflicts with existing data (unique or foreign key)
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// An internal storage error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl StoreError {
    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        StoreError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        StoreError::Conflict {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        StoreError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an Internal error wrapping an underlying cause
    pub fn internal_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        StoreError::Internal {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if this error is a data conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict { .. })
    }

    /// Returns true if this error indicates a transient failure that may
    /// succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Connection { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_classification() {
        let err = StoreError::conflict("email already taken");
        assert!(err.is_conflict());
        assert!(!err.is_transient());
    }

    #[test]
    fn test_connection_is_transient() {
        let err = StoreError::connection("pool exhausted");
        assert!(err.is_transient());
    }

    #[test]
    fn test_error_display() {
        let err = StoreError::internal("unexpected row shape");
        assert_eq!(err.to_string(), "Internal error: unexpected row shape");
    }
}

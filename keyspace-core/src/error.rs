//! Error types shared by every keyspace store implementation.

use thiserror::Error;

use crate::format::FormatError;

/// Error type for keyspace operations.
///
/// Argument errors (`EmptyKey`, `EmptyField`) are raised synchronously before
/// any network call. `Store` is the single wrapping boundary for errors coming
/// out of the underlying store client; the original error is always retained
/// as the source and no retry is attempted — retry and backoff decisions
/// belong to the caller.
#[derive(Debug, Error)]
pub enum KeyspaceError {
    /// The raw key was empty.
    #[error("key is empty")]
    EmptyKey,

    /// The hash field identifier was empty.
    #[error("field is empty")]
    EmptyField,

    /// Value serialization or deserialization failed.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The underlying store call failed.
    #[error("store operation failed: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

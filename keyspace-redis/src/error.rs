//! Error types for the Redis facade.
//!
//! All errors convert into [`KeyspaceError`] so callers deal with a single
//! taxonomy regardless of the store behind the facade.

use keyspace_core::KeyspaceError;
use redis::RedisError;

/// Error type for Redis facade operations.
///
/// Wraps errors from the underlying [`redis`] crate. You typically don't
/// handle this directly: it appears when [`RedisKeyspaceBuilder::build`] gets
/// an invalid connection URL, or when a command fails, and is converted into
/// [`KeyspaceError::Store`] with the cause retained.
///
/// [`RedisKeyspaceBuilder::build`]: crate::RedisKeyspaceBuilder::build
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An error from the underlying Redis client.
    #[error("redis error: {0}")]
    Redis(#[from] RedisError),
}

impl From<Error> for KeyspaceError {
    fn from(error: Error) -> Self {
        match error {
            Error::Redis(source) => Self::Store(Box::new(source)),
        }
    }
}

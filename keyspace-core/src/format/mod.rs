//! Pluggable value serialization formats.
//!
//! Keys always travel as UTF-8 text; values go through one of these formats.
//! [`JsonFormat`] is the default — stored values stay readable and integer
//! values stay compatible with the store's numeric commands. [`BincodeFormat`]
//! trades readability for compactness.

use bytes::Bytes;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

mod bincode;
mod json;

pub use self::bincode::BincodeFormat;
pub use json::JsonFormat;

/// Serialization or deserialization failure.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error(transparent)]
    Serialize(Box<dyn std::error::Error + Send + Sync>),

    #[error(transparent)]
    Deserialize(Box<dyn std::error::Error + Send + Sync>),
}

/// Value serialization strategy.
///
/// Implementations must be cheap to clone; the client clones its format into
/// every outgoing command path.
pub trait ValueFormat: Clone + Send + Sync {
    /// Serialize a value into the bytes sent to the store.
    fn serialize<T>(&self, value: &T) -> Result<Bytes, FormatError>
    where
        T: Serialize;

    /// Deserialize bytes read from the store.
    fn deserialize<T>(&self, data: &[u8]) -> Result<T, FormatError>
    where
        T: DeserializeOwned;
}

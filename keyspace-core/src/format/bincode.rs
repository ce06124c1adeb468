use ::bincode::config::standard as bincode_config;
use ::bincode::serde::{decode_from_slice, encode_to_vec};
use bytes::Bytes;
use serde::{Serialize, de::DeserializeOwned};

use super::{FormatError, ValueFormat};

/// Bincode value format.
///
/// Compact binary encoding; values are not readable in the store and numeric
/// commands cannot operate on them.
#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeFormat;

impl ValueFormat for BincodeFormat {
    fn serialize<T>(&self, value: &T) -> Result<Bytes, FormatError>
    where
        T: Serialize,
    {
        encode_to_vec(value, bincode_config())
            .map(Bytes::from)
            .map_err(|e| FormatError::Serialize(Box::new(e)))
    }

    fn deserialize<T>(&self, data: &[u8]) -> Result<T, FormatError>
    where
        T: DeserializeOwned,
    {
        decode_from_slice(data, bincode_config())
            .map(|(value, _)| value)
            .map_err(|e| FormatError::Deserialize(Box::new(e)))
    }
}

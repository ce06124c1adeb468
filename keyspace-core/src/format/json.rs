use bytes::Bytes;
use serde::{Serialize, de::DeserializeOwned};

use super::{FormatError, ValueFormat};

/// JSON value format (default).
///
/// Integers serialize to their plain text representation, which keeps stored
/// counters compatible with `INCR`-style commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl ValueFormat for JsonFormat {
    fn serialize<T>(&self, value: &T) -> Result<Bytes, FormatError>
    where
        T: Serialize,
    {
        serde_json::to_vec(value)
            .map(Bytes::from)
            .map_err(|e| FormatError::Serialize(Box::new(e)))
    }

    fn deserialize<T>(&self, data: &[u8]) -> Result<T, FormatError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice(data).map_err(|e| FormatError::Deserialize(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Order {
        id: u64,
        customer: String,
    }

    #[test]
    fn round_trips_structs() {
        let order = Order {
            id: 27,
            customer: "zyp".into(),
        };
        let data = JsonFormat.serialize(&order).unwrap();
        let back: Order = JsonFormat.deserialize(&data).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn integers_serialize_as_plain_text() {
        let data = JsonFormat.serialize(&42i64).unwrap();
        assert_eq!(data.as_ref(), b"42");
    }

    #[test]
    fn garbage_input_is_a_deserialize_error() {
        let result: Result<Order, _> = JsonFormat.deserialize(b"not json");
        assert!(matches!(result, Err(FormatError::Deserialize(_))));
    }
}

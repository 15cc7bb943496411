use crate::error::InternalError;
use serde::{Serialize, de::DeserializeOwned};

/// Serialize a row payload.
pub fn serialize<T: Serialize>(value: &T) -> Result<Vec<u8>, InternalError> {
    serde_json::to_vec(value)
        .map_err(|err| InternalError::serialize_internal(format!("row failed to serialize: {err}")))
}

/// Deserialize a row payload into its entity type.
pub fn deserialize<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, InternalError> {
    serde_json::from_slice(bytes)
        .map_err(|err| InternalError::store_corruption(format!("row failed to deserialize: {err}")))
}

/// Deserialize a row payload into an untyped tree, for cross-type field
/// resolution where the concrete entity type is not in scope.
pub fn deserialize_dynamic(bytes: &[u8]) -> Result<serde_json::Value, InternalError> {
    serde_json::from_slice(bytes)
        .map_err(|err| InternalError::store_corruption(format!("row failed to deserialize: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        name: String,
        n: u32,
    }

    #[test]
    fn roundtrip() {
        let row = Row {
            name: "clout".into(),
            n: 9,
        };
        let bytes = serialize(&row).unwrap();
        let back: Row = deserialize(&bytes).unwrap();

        assert_eq!(back, row);
    }

    #[test]
    fn corrupt_bytes_error() {
        let err = deserialize::<Row>(b"not json").unwrap_err();
        assert!(err.message.contains("deserialize"));
    }
}

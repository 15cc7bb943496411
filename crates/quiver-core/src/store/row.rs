use crate::{
    error::InternalError,
    serialize::{deserialize, deserialize_dynamic, serialize},
};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error as ThisError;

/// Max serialized bytes for a single row to keep value loads bounded.
pub const MAX_ROW_BYTES: usize = 4 * 1024 * 1024;

///
/// RawRowError
///

#[derive(Debug, ThisError)]
pub enum RawRowError {
    #[error("row exceeds max size: {len} bytes (limit {MAX_ROW_BYTES})")]
    TooLarge { len: usize },
}

impl From<RawRowError> for InternalError {
    fn from(err: RawRowError) -> Self {
        Self::new(
            crate::error::ErrorClass::Unsupported,
            crate::error::ErrorOrigin::Store,
            err.to_string(),
        )
    }
}

///
/// RawRow
/// One serialized entity payload as stored.
///

#[derive(Clone, Debug)]
pub struct RawRow(Vec<u8>);

impl RawRow {
    pub fn try_new(bytes: Vec<u8>) -> Result<Self, RawRowError> {
        let len = bytes.len();
        if len > MAX_ROW_BYTES {
            return Err(RawRowError::TooLarge { len });
        }

        Ok(Self(bytes))
    }

    /// Encode an entity into a bounded row.
    pub fn try_encode<T: Serialize>(value: &T) -> Result<Self, InternalError> {
        let bytes = serialize(value)?;
        Ok(Self::try_new(bytes)?)
    }

    pub fn try_decode<T: DeserializeOwned>(&self) -> Result<T, InternalError> {
        deserialize(&self.0)
    }

    /// Untyped decode for cross-type field resolution.
    pub fn try_decode_dynamic(&self) -> Result<serde_json::Value, InternalError> {
        deserialize_dynamic(&self.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_row_is_rejected() {
        let err = RawRow::try_new(vec![0; MAX_ROW_BYTES + 1]).unwrap_err();
        assert!(err.to_string().contains("max size"));
    }

    #[test]
    fn roundtrip() {
        let row = RawRow::try_encode(&("boog", 7u8)).unwrap();
        let back: (String, u8) = row.try_decode().unwrap();

        assert_eq!(back, ("boog".to_string(), 7));
    }
}

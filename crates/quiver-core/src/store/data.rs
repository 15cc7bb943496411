use crate::{store::RawRow, types::RecordId};
use derive_more::{Deref, DerefMut};
use std::collections::BTreeMap;

///
/// DataStore
/// Primary rows for one entity type, keyed by record id. Ids are ULIDs,
/// so iteration order is creation order.
///

#[derive(Debug, Default, Deref, DerefMut)]
pub struct DataStore(BTreeMap<RecordId, RawRow>);

impl DataStore {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Sum of bytes used by all stored rows.
    #[must_use]
    pub fn memory_bytes(&self) -> u64 {
        self.0.values().map(|row| row.len() as u64).sum()
    }
}

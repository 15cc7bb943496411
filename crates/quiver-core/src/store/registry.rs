use crate::{error::InternalError, store::DataStore};
use std::{cell::RefCell, collections::BTreeMap};

///
/// StoreRegistry
///
/// One store per registered entity type, addressed by entity name.
/// Stores sit behind `RefCell`s; a `with_store_mut` closure is the
/// registry's transaction unit, so a check-then-write that stays inside
/// one closure cannot interleave with another writer.
///

#[derive(Debug, Default)]
pub struct StoreRegistry {
    stores: BTreeMap<&'static str, RefCell<DataStore>>,
}

impl StoreRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stores: BTreeMap::new(),
        }
    }

    /// Register a store for an entity name. Idempotent.
    pub fn register(&mut self, entity_name: &'static str) {
        self.stores
            .entry(entity_name)
            .or_insert_with(|| RefCell::new(DataStore::new()));
    }

    #[must_use]
    pub fn is_registered(&self, entity_name: &str) -> bool {
        self.stores.contains_key(entity_name)
    }

    pub fn with_store<R>(
        &self,
        entity_name: &str,
        f: impl FnOnce(&DataStore) -> R,
    ) -> Result<R, InternalError> {
        let store = self.try_get(entity_name)?;
        Ok(f(&store.borrow()))
    }

    pub fn with_store_mut<R>(
        &self,
        entity_name: &str,
        f: impl FnOnce(&mut DataStore) -> R,
    ) -> Result<R, InternalError> {
        let store = self.try_get(entity_name)?;
        Ok(f(&mut store.borrow_mut()))
    }

    /// Remove all rows from every store. Test and fixture support.
    pub fn clear_all(&self) {
        for store in self.stores.values() {
            store.borrow_mut().clear();
        }
    }

    fn try_get(&self, entity_name: &str) -> Result<&RefCell<DataStore>, InternalError> {
        self.stores.get(entity_name).ok_or_else(|| {
            InternalError::store_invariant(format!("store not registered: {entity_name}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{store::RawRow, types::RecordId};

    #[test]
    fn unregistered_store_is_an_invariant_error() {
        let registry = StoreRegistry::new();
        let err = registry.with_store("ghost", |_| ()).unwrap_err();

        assert!(err.message.contains("ghost"));
    }

    #[test]
    fn register_is_idempotent() {
        let mut registry = StoreRegistry::new();
        registry.register("club");

        let id = RecordId::generate();
        registry
            .with_store_mut("club", |store| {
                store.insert(id, RawRow::try_encode(&"row").unwrap());
            })
            .unwrap();

        registry.register("club");
        let len = registry.with_store("club", |store| store.len()).unwrap();
        assert_eq!(len, 1);
    }
}

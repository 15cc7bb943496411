pub mod executor;
pub mod query;
pub mod relation;

use crate::{
    error::InternalError,
    store::{DataStore, StoreRegistry},
    traits::EntityKind,
    types::RecordId,
};

///
/// RelationGuard
///
/// Delete-side protection callback for one foreign key. Registered by
/// the schema crate; the delete executor runs every guard whose target
/// matches the entity being removed and blocks while any still counts
/// live references.
///

pub struct RelationGuard {
    /// Entity holding the foreign key.
    pub source: &'static str,
    /// Entity the key points at.
    pub target: &'static str,
    /// Field name on the source, for diagnostics.
    pub field: &'static str,
    /// Count source rows referencing the given target id.
    pub count: fn(&Db, &'static str, RecordId) -> Result<u64, InternalError>,
}

///
/// Db
///
/// The shared store set plus the registered relation guards. All access
/// is request-scoped and synchronous; a store borrow is the transaction
/// unit.
///

pub struct Db {
    stores: StoreRegistry,
    guards: &'static [RelationGuard],
}

impl Db {
    #[must_use]
    pub const fn new(guards: &'static [RelationGuard]) -> Self {
        Self {
            stores: StoreRegistry::new(),
            guards,
        }
    }

    /// Register the store for an entity type. Idempotent.
    pub fn register<E: EntityKind>(&mut self) {
        self.stores.register(E::ENTITY_NAME);
    }

    pub fn with_store<E: EntityKind, R>(
        &self,
        f: impl FnOnce(&DataStore) -> R,
    ) -> Result<R, InternalError> {
        self.stores.with_store(E::ENTITY_NAME, f)
    }

    pub fn with_store_mut<E: EntityKind, R>(
        &self,
        f: impl FnOnce(&mut DataStore) -> R,
    ) -> Result<R, InternalError> {
        self.stores.with_store_mut(E::ENTITY_NAME, f)
    }

    /// Whether a row exists in the named store.
    pub fn contains(&self, entity_name: &str, id: RecordId) -> Result<bool, InternalError> {
        self.stores
            .with_store(entity_name, |store| store.contains_key(&id))
    }

    /// Resolve one field of a row in another entity's store, by name.
    /// Returns `None` when the row is missing or the field is unset.
    pub fn resolve_field(
        &self,
        entity_name: &str,
        id: RecordId,
        field: &str,
    ) -> Result<Option<String>, InternalError> {
        let row = self
            .stores
            .with_store(entity_name, |store| store.get(&id).cloned())?;

        let Some(row) = row else {
            return Ok(None);
        };

        let tree = row.try_decode_dynamic()?;
        Ok(tree.get(field).and_then(json_text))
    }

    pub fn guards_for<'d>(
        &'d self,
        target: &'d str,
    ) -> impl Iterator<Item = &'d RelationGuard> + 'd {
        self.guards.iter().filter(move |g| g.target == target)
    }

    /// Remove all rows from every store. Test and fixture support.
    pub fn clear_all(&self) {
        self.stores.clear_all();
    }
}

// Textual projection of a JSON leaf, for ordering and slug sources.
fn json_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

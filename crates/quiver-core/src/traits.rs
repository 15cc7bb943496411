use crate::{
    model::entity::EntityModel, record::BaseRecord, sanitize::Sanitize, types::RecordId,
    validate::Validate, value::Value,
};
use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Debug;

///
/// Path
/// Fully-qualified schema path.
///

pub trait Path {
    const PATH: &'static str;
}

///
/// EntityKind
///
/// A fully registry-bound entity or membership type. Collapses identity,
/// schema facts, and runtime behavior into the one contract the generic
/// executors require.
///

pub trait EntityKind:
    Path + Clone + Debug + PartialEq + Serialize + DeserializeOwned + Sanitize + Validate + 'static
{
    /// Stable external name; doubles as the store key.
    const ENTITY_NAME: &'static str;

    /// Static descriptor the executors plan from.
    const MODEL: &'static EntityModel;

    fn base(&self) -> &BaseRecord;

    fn base_mut(&mut self) -> &mut BaseRecord;

    /// Dynamic projection of one declared field. `None` for unknown
    /// fields and for optional fields that are unset, which is also how
    /// unset values escape uniqueness checks (NULLs never collide).
    fn field_value(&self, field: &str) -> Option<Value>;

    fn id(&self) -> RecordId {
        self.base().id
    }
}

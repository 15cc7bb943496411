use crate::model::{
    field::FieldModel, index::IndexModel, relation::RelationModel, slug::SlugSource,
};

///
/// EntityModel
///
/// Static descriptor for one entity type: the single source the generic
/// executors plan from. One descriptor per type replaces the per-type
/// CRUD boilerplate of the admin layer.
///

pub struct EntityModel {
    /// Fully-qualified Rust type path (for diagnostics).
    pub path: &'static str,
    /// Stable external name used as the store key and in errors.
    pub entity_name: &'static str,
    /// Declared fields beyond the base record.
    pub fields: &'static [FieldModel],
    /// Uniqueness rules checked inside the save transaction.
    pub indexes: &'static [IndexModel],
    /// Delete-protected foreign keys.
    pub relations: &'static [RelationModel],
    /// Slug sources, in derivation order.
    pub slug: &'static [SlugSource],
    /// Natural ordering keys for listing. Dotted paths (`club.name`)
    /// resolve across a relation; the record id is always the final
    /// tiebreak.
    pub order: &'static [&'static str],
    /// Fields searched by the free-text list filter; dotted paths allowed.
    pub searchable: &'static [&'static str],
    /// Fields forming the idempotent get-or-create probe key.
    pub natural_key: &'static [&'static str],
}

impl EntityModel {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn relation(&self, field: &str) -> Option<&RelationModel> {
        self.relations.iter().find(|r| r.field == field)
    }
}

///
/// SlugSource
///
/// One declared slug source, in derivation order. Either a text field of
/// the owning entity, or a field pulled across a declared relation
/// (memberships derive from the names of both sides).
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SlugSource {
    Field(&'static str),
    Related {
        /// Relation field on the owning entity.
        relation: &'static str,
        /// Text field on the target entity.
        field: &'static str,
    },
}

impl SlugSource {
    #[must_use]
    pub const fn field(name: &'static str) -> Self {
        Self::Field(name)
    }

    #[must_use]
    pub const fn related(relation: &'static str, field: &'static str) -> Self {
        Self::Related { relation, field }
    }
}

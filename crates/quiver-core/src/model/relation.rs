///
/// RelationModel
///
/// One delete-protected foreign key declared by an entity. The save
/// executor checks the target row exists; the delete executor on the
/// target side blocks while any source row still points at it.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RelationModel {
    /// Field on the owning entity holding the target id.
    pub field: &'static str,
    /// Target entity name (its store key).
    pub target: &'static str,
    /// Whether the field must be present. Optional relations are only
    /// checked when set.
    pub required: bool,
}

impl RelationModel {
    #[must_use]
    pub const fn new(field: &'static str, target: &'static str) -> Self {
        Self {
            field,
            target,
            required: true,
        }
    }

    #[must_use]
    pub const fn optional(field: &'static str, target: &'static str) -> Self {
        Self {
            field,
            target,
            required: false,
        }
    }
}

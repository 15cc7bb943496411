///
/// FieldModel
/// Runtime field metadata used by planning and validation.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldModel {
    /// Field name as used in queries, ordering, and slug sources.
    pub name: &'static str,
    /// Runtime type family, aligned with `Value` variants.
    pub kind: FieldKind,
}

impl FieldModel {
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

///
/// FieldKind
///
/// Minimal type surface needed by the executors. A lossy projection of
/// the declared Rust types.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    Bool,
    Date,
    Id,
    Int,
    Text,
    Uint,
}

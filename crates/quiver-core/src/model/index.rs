use std::fmt::{self, Display};

///
/// IndexModel
/// Runtime-only descriptor for a uniqueness rule enforced at save time.
/// Field order is significant for diagnostics.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IndexModel {
    pub fields: &'static [&'static str],
    pub unique: bool,
}

impl IndexModel {
    #[must_use]
    pub const fn new(fields: &'static [&'static str], unique: bool) -> Self {
        Self { fields, unique }
    }

    #[must_use]
    pub const fn unique(fields: &'static [&'static str]) -> Self {
        Self::new(fields, true)
    }
}

impl Display for IndexModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self.fields.join(", ");

        if self.unique {
            write!(f, "UNIQUE ({fields})")
        } else {
            write!(f, "({fields})")
        }
    }
}

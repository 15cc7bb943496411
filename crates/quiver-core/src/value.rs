use crate::types::RecordId;
use std::{
    cmp::Ordering,
    fmt::{self, Display},
};
use time::Date;

///
/// Value
///
/// Dynamic projection of one entity field, used for uniqueness
/// comparison, natural-key ordering, and distinct-value queries.
/// A lossy view: only the families this domain stores are present.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    Bool(bool),
    Date(Date),
    Id(RecordId),
    Int(i64),
    Text(String),
    Uint(u64),
}

impl Value {
    // Variant rank for cross-family ordering. Same-family values compare
    // by payload; mixed families fall back to rank so sorting stays total.
    const fn rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Date(_) => 1,
            Self::Id(_) => 2,
            Self::Int(_) => 3,
            Self::Text(_) => 4,
            Self::Uint(_) => 5,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Id(a), Self::Id(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            // Case-insensitive first so listings read naturally; raw bytes
            // break the tie to keep the order total.
            (Self::Text(a), Self::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (Self::Uint(a), Self::Uint(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => v.fmt(f),
            Self::Date(v) => v.fmt(f),
            Self::Id(v) => v.fmt(f),
            Self::Int(v) => v.fmt(f),
            Self::Text(v) => v.fmt(f),
            Self::Uint(v) => v.fmt(f),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_ordering_is_case_insensitive() {
        let a = Value::Text("apple".into());
        let b = Value::Text("Banana".into());

        assert!(a < b);
    }

    #[test]
    fn mixed_families_order_by_rank() {
        let flag = Value::Bool(true);
        let text = Value::Text("a".into());

        assert!(flag < text);
    }

    #[test]
    fn uint_ordering_is_numeric() {
        assert!(Value::Uint(9) < Value::Uint(10));
    }
}

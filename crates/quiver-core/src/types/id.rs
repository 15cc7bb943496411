use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    str::FromStr,
    sync::{LazyLock, Mutex},
};
use ulid::Ulid;

///
/// RecordId
///
/// Opaque primary key for every entity and membership row. ULIDs sort by
/// creation time, which gives the stable secondary ordering key for free.
///

#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
pub struct RecordId(Ulid);

impl RecordId {
    /// Generate a fresh id from the global monotonic generator.
    #[must_use]
    pub fn generate() -> Self {
        Self(generate_ulid())
    }

    /// The nil id used by drafts before their first save.
    #[must_use]
    pub const fn nil() -> Self {
        Self(Ulid::nil())
    }

    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Lowercase rendering, used as the slug fallback for sourceless rows.
    #[must_use]
    pub fn to_lower_string(&self) -> String {
        self.0.to_string().to_lowercase()
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RecordId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Ulid::from_string(s)?))
    }
}

impl From<Ulid> for RecordId {
    fn from(ulid: Ulid) -> Self {
        Self(ulid)
    }
}

///
/// GENERATOR is lazily initiated with a Mutex
/// it has to keep state so that key order is maintained
///

static GENERATOR: LazyLock<Mutex<Generator>> = LazyLock::new(|| Mutex::new(Generator::default()));

fn generate_ulid() -> Ulid {
    let mut generator = GENERATOR.lock().expect("ULID generator mutex poisoned");

    generator.generate()
}

///
/// Generator
///
/// Monotonic ULID generation; increments within the same millisecond so
/// two rows created back to back never tie on id.
///

#[derive(Default)]
struct Generator {
    previous: Ulid,
}

impl Generator {
    fn generate(&mut self) -> Ulid {
        let ulid = Ulid::new();

        // maybe time went backward, or it is the same ms.
        // increment instead of taking the new random so order is kept
        if ulid <= self.previous {
            if let Some(next) = self.previous.increment() {
                self.previous = next;
                return self.previous;
            }
        }

        self.previous = ulid;
        ulid
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic_generation() {
        let mut g = Generator::default();
        let a = g.generate();
        let b = g.generate();

        assert!(a < b);
    }

    #[test]
    fn nil_roundtrip() {
        let id = RecordId::nil();
        assert!(id.is_nil());

        let parsed: RecordId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn generated_ids_are_distinct() {
        let a = RecordId::generate();
        let b = RecordId::generate();

        assert_ne!(a, b);
        assert!(a < b);
    }
}

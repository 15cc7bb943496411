use quiver_core::types::UserId;
use time::OffsetDateTime;

///
/// RegistryConfig
///
/// Runtime knobs that are not schema facts: the identity stamped onto
/// rows saved without an explicit author, and the clock, injectable so
/// tests can pin timestamps.
///

#[derive(Clone, Copy, Debug)]
pub struct RegistryConfig {
    /// Author recorded when a draft carries a nil author id.
    pub default_author: UserId,
    pub clock: fn() -> OffsetDateTime,
}

impl RegistryConfig {
    #[must_use]
    pub fn new(default_author: UserId) -> Self {
        Self {
            default_author,
            clock: OffsetDateTime::now_utc,
        }
    }

    #[must_use]
    pub const fn with_clock(mut self, clock: fn() -> OffsetDateTime) -> Self {
        self.clock = clock;
        self
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new(UserId::generate())
    }
}

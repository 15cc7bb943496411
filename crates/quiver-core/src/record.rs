use crate::types::{RecordId, UserId};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

///
/// BaseRecord
///
/// Audit block embedded (serde-flattened) in every entity and membership
/// row: generated id, timestamps, soft-activation flag, derived slug,
/// and authorship. Drafts carry a nil id and epoch timestamps; the save
/// executor fills them in.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BaseRecord {
    pub id: RecordId,
    pub created_at: OffsetDateTime,
    pub modified_at: OffsetDateTime,
    pub is_active: bool,
    pub slug: String,

    /// Set when a caller has overridden the slug by hand. Pinned slugs
    /// are uniqueness-checked but never recomputed from source fields.
    #[serde(default)]
    pub slug_pinned: bool,

    pub author: UserId,
    pub info: Option<String>,
}

impl BaseRecord {
    /// A draft base: not yet saved, active, unslugged, unauthored.
    #[must_use]
    pub const fn draft() -> Self {
        Self {
            id: RecordId::nil(),
            created_at: OffsetDateTime::UNIX_EPOCH,
            modified_at: OffsetDateTime::UNIX_EPOCH,
            is_active: true,
            slug: String::new(),
            slug_pinned: false,
            author: UserId::nil(),
            info: None,
        }
    }

    /// Bump the modification timestamp.
    pub const fn touch(&mut self, now: OffsetDateTime) {
        self.modified_at = now;
    }
}

impl Default for BaseRecord {
    fn default() -> Self {
        Self::draft()
    }
}

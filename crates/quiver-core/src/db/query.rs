///
/// ListQuery
///
/// The one query shape the admin surface needs: activation filter,
/// free-text search over the declared searchable fields, and paging.
/// Ordering always follows the entity's declared natural key with the
/// record id as the final tiebreak.
///

#[derive(Clone, Debug, Default)]
pub struct ListQuery {
    /// `None` lists all statuses (the default admin view).
    pub is_active: Option<bool>,
    /// Case-insensitive substring over the searchable fields.
    pub search: Option<String>,
    pub offset: usize,
    pub limit: Option<usize>,
}

impl ListQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn active(mut self) -> Self {
        self.is_active = Some(true);
        self
    }

    #[must_use]
    pub const fn inactive(mut self) -> Self {
        self.is_active = Some(false);
        self
    }

    #[must_use]
    pub fn search(mut self, needle: impl Into<String>) -> Self {
        self.search = Some(needle.into());
        self
    }

    #[must_use]
    pub const fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

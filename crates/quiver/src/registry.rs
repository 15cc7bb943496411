use crate::config::RegistryConfig;
use quiver_core::{
    Error,
    db::{
        Db,
        executor::{DeleteExecutor, LifecycleExecutor, LoadExecutor, SaveExecutor, StatusReport},
        query::ListQuery,
    },
    traits::EntityKind,
    types::{RecordId, UserId},
};

///
/// Registry
///
/// The typed CRUD surface over every declared entity. One generic
/// method set, parameterized by the entity type; the static model
/// descriptors drive everything type-specific underneath.
///

pub struct Registry {
    db: Db,
    config: RegistryConfig,
}

impl Registry {
    #[must_use]
    pub fn new(config: RegistryConfig) -> Self {
        let mut db = Db::new(quiver_schema::GUARDS);
        quiver_schema::register_all(&mut db);

        Self { db, config }
    }

    fn now(&self) -> time::OffsetDateTime {
        (self.config.clock)()
    }

    /// Insert a draft. Id, timestamps, and slug are generated; a nil
    /// author is replaced by the configured default identity.
    pub fn create<E: EntityKind>(&self, mut draft: E) -> Result<E, Error> {
        if draft.base().author.is_nil() {
            draft.base_mut().author = self.config.default_author;
        }

        SaveExecutor::new(&self.db).insert(draft, self.now())
    }

    /// Insert a draft on behalf of a specific author.
    pub fn create_as<E: EntityKind>(&self, mut draft: E, author: UserId) -> Result<E, Error> {
        draft.base_mut().author = author;

        SaveExecutor::new(&self.db).insert(draft, self.now())
    }

    /// Re-save an existing row. Id and `created_at` are immutable (the
    /// stored values win); the slug is re-derived unless pinned.
    pub fn update<E: EntityKind>(&self, entity: E) -> Result<E, Error> {
        SaveExecutor::new(&self.db).update_at(entity, self.now())
    }

    pub fn get<E: EntityKind>(&self, id: RecordId) -> Result<E, Error> {
        LoadExecutor::new(&self.db).one(id)
    }

    pub fn get_by_slug<E: EntityKind>(&self, slug: &str) -> Result<E, Error> {
        LoadExecutor::new(&self.db).by_slug(slug)
    }

    pub fn list<E: EntityKind>(&self, query: &ListQuery) -> Result<Vec<E>, Error> {
        LoadExecutor::new(&self.db).list(query)
    }

    pub fn count<E: EntityKind>(&self) -> Result<usize, Error> {
        Ok(LoadExecutor::<E>::new(&self.db).count()?)
    }

    /// Flip activation on a batch of ids; per-row independence, with
    /// missing and already-in-state ids reported rather than failed.
    pub fn set_active<E: EntityKind>(
        &self,
        ids: &[RecordId],
        active: bool,
    ) -> Result<StatusReport, Error> {
        Ok(LifecycleExecutor::<E>::new(&self.db).set_active(ids, active, self.now())?)
    }

    pub fn activate<E: EntityKind>(&self, ids: &[RecordId]) -> Result<StatusReport, Error> {
        self.set_active::<E>(ids, true)
    }

    pub fn deactivate<E: EntityKind>(&self, ids: &[RecordId]) -> Result<StatusReport, Error> {
        self.set_active::<E>(ids, false)
    }

    /// Hard-remove a row. Blocked while any registered relation still
    /// references it; deactivation is the soft alternative.
    pub fn delete<E: EntityKind>(&self, id: RecordId) -> Result<(), Error> {
        DeleteExecutor::<E>::new(&self.db).one(id)
    }

    /// Idempotent insert keyed by the entity's declared natural key.
    /// Returns the existing row untouched when the probe matches.
    pub fn get_or_create<E: EntityKind>(&self, draft: E) -> Result<(E, bool), Error> {
        if let Some(found) = LoadExecutor::new(&self.db).find_natural(&draft)? {
            return Ok((found, false));
        }

        Ok((self.create(draft)?, true))
    }

    /// Distinct live values of one text field, deduplicated
    /// case-insensitively and sorted.
    pub fn distinct_values<E: EntityKind>(&self, field: &str) -> Result<Vec<String>, Error> {
        LoadExecutor::<E>::new(&self.db).distinct(field)
    }

    /// Pin an explicit slug onto a row. Shape-checked and
    /// uniqueness-checked; pinned slugs survive source-field edits.
    pub fn set_slug<E: EntityKind>(&self, id: RecordId, slug: &str) -> Result<E, Error> {
        let mut entity: E = self.get(id)?;
        entity.base_mut().slug = slug.to_string();

        self.update(entity)
    }

    /// Drop a pin; the slug re-derives from its sources on this save.
    pub fn unpin_slug<E: EntityKind>(&self, id: RecordId) -> Result<E, Error> {
        let mut entity: E = self.get(id)?;
        entity.base_mut().slug_pinned = false;
        entity.base_mut().slug.clear();

        self.update(entity)
    }

    /// Remove every row from every store. Fixture support.
    pub fn clear(&self) {
        self.db.clear_all();
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

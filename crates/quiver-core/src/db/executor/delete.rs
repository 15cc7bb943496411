use crate::{
    db::Db,
    error::{BlockingRelation, Error, NotFoundError, RecordKey, ReferentialIntegrityError},
    obs::sink::{self, Event, ExecKind},
    traits::EntityKind,
    types::RecordId,
};
use std::marker::PhantomData;

///
/// DeleteExecutor
///
/// Hard deletion is the exception path: it runs every registered
/// relation guard targeting this entity and refuses while any source
/// rows still reference the id. Soft removal goes through the lifecycle
/// executor instead.
///

pub struct DeleteExecutor<'d, E: EntityKind> {
    db: &'d Db,
    _marker: PhantomData<E>,
}

impl<'d, E: EntityKind> DeleteExecutor<'d, E> {
    #[must_use]
    pub const fn new(db: &'d Db) -> Self {
        Self {
            db,
            _marker: PhantomData,
        }
    }

    /// Remove a single row by primary key.
    pub fn one(&self, id: RecordId) -> Result<(), Error> {
        sink::record(Event::ExecStart {
            kind: ExecKind::Delete,
            entity: E::ENTITY_NAME,
        });

        if !self.db.contains(E::ENTITY_NAME, id)? {
            return Err(NotFoundError {
                entity: E::ENTITY_NAME,
                key: RecordKey::Id(id),
            }
            .into());
        }

        let mut blocking: Vec<BlockingRelation> = Vec::new();
        for guard in self.db.guards_for(E::ENTITY_NAME) {
            let count = (guard.count)(self.db, guard.field, id)?;
            if count == 0 {
                continue;
            }

            // Two foreign keys from the same source merge into one line.
            match blocking.iter_mut().find(|b| b.entity == guard.source) {
                Some(entry) => entry.count += count,
                None => blocking.push(BlockingRelation {
                    entity: guard.source,
                    count,
                }),
            }
        }

        if !blocking.is_empty() {
            sink::record(Event::BlockedDelete {
                entity: E::ENTITY_NAME,
                blocking: blocking.iter().map(|b| b.count).sum(),
            });

            return Err(ReferentialIntegrityError {
                entity: E::ENTITY_NAME,
                id,
                blocking,
            }
            .into());
        }

        self.db.with_store_mut::<E, _>(|store| {
            store.remove(&id);
        })?;

        sink::record(Event::ExecFinish {
            kind: ExecKind::Delete,
            entity: E::ENTITY_NAME,
            rows: 1,
        });

        Ok(())
    }
}

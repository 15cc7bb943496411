use crate::{
    db::Db,
    error::InternalError,
    obs::sink::{self, Event, ExecKind},
    store::RawRow,
    traits::EntityKind,
    types::RecordId,
};
use std::marker::PhantomData;
use time::OffsetDateTime;

///
/// StatusReport
///
/// Outcome of a bulk activation change. Rows update independently;
/// partial failure is reported, not rolled back.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StatusReport {
    /// Rows whose flag was flipped (and modified_at bumped).
    pub updated: Vec<RecordId>,
    /// Rows already in the requested state; untouched.
    pub skipped: Vec<RecordId>,
    /// Ids with no row.
    pub missing: Vec<RecordId>,
}

impl StatusReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

///
/// LifecycleExecutor
///
/// Soft-activation transitions: the everyday "delete" is
/// `set_active(false)` here, never a row removal.
///

pub struct LifecycleExecutor<'d, E: EntityKind> {
    db: &'d Db,
    _marker: PhantomData<E>,
}

impl<'d, E: EntityKind> LifecycleExecutor<'d, E> {
    #[must_use]
    pub const fn new(db: &'d Db) -> Self {
        Self {
            db,
            _marker: PhantomData,
        }
    }

    /// Flip `is_active` on a batch of ids. Side effect is limited to the
    /// flag and `modified_at`; slugs and audit fields stay put.
    pub fn set_active(
        &self,
        ids: &[RecordId],
        active: bool,
        now: OffsetDateTime,
    ) -> Result<StatusReport, InternalError> {
        sink::record(Event::ExecStart {
            kind: ExecKind::Lifecycle,
            entity: E::ENTITY_NAME,
        });

        let report = self.db.with_store_mut::<E, _>(
            |store| -> Result<StatusReport, InternalError> {
                let mut report = StatusReport::default();

                for &id in ids {
                    let Some(row) = store.get(&id) else {
                        report.missing.push(id);
                        continue;
                    };

                    let mut entity: E = row.try_decode()?;
                    if entity.base().is_active == active {
                        report.skipped.push(id);
                        continue;
                    }

                    entity.base_mut().is_active = active;
                    entity.base_mut().touch(now);

                    store.insert(id, RawRow::try_encode(&entity)?);
                    report.updated.push(id);
                }

                Ok(report)
            },
        )??;

        sink::record(Event::ExecFinish {
            kind: ExecKind::Lifecycle,
            entity: E::ENTITY_NAME,
            rows: report.updated.len() as u64,
        });

        Ok(report)
    }
}

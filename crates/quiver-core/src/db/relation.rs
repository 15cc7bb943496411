use crate::{db::Db, error::InternalError, traits::EntityKind, types::RecordId, value::Value};

/// Count rows of `E` whose `field` references the target id.
///
/// Monomorphized per source entity and registered as a fn-pointer
/// [`RelationGuard`](crate::db::RelationGuard) so the delete executor
/// can run guards without knowing source types.
pub fn count_refs<E: EntityKind>(
    db: &Db,
    field: &'static str,
    target: RecordId,
) -> Result<u64, InternalError> {
    db.with_store::<E, _>(|store| {
        let mut count = 0u64;

        for row in store.values() {
            let entity: E = row.try_decode()?;
            if entity.field_value(field) == Some(Value::Id(target)) {
                count += 1;
            }
        }

        Ok(count)
    })?
}

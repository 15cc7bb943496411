use crate::{
    db::{Db, query::ListQuery},
    error::{Error, InternalError, Issue, NotFoundError, RecordKey, ValidationError},
    model::field::FieldKind,
    obs::sink::{self, Event, ExecKind},
    traits::EntityKind,
    types::RecordId,
    value::Value,
};
use std::marker::PhantomData;

///
/// LoadExecutor
///

pub struct LoadExecutor<'d, E: EntityKind> {
    db: &'d Db,
    _marker: PhantomData<E>,
}

impl<'d, E: EntityKind> LoadExecutor<'d, E> {
    #[must_use]
    pub const fn new(db: &'d Db) -> Self {
        Self {
            db,
            _marker: PhantomData,
        }
    }

    /// Load a single row by primary key.
    pub fn one(&self, id: RecordId) -> Result<E, Error> {
        self.try_one(id)?.ok_or_else(|| {
            NotFoundError {
                entity: E::ENTITY_NAME,
                key: RecordKey::Id(id),
            }
            .into()
        })
    }

    pub fn try_one(&self, id: RecordId) -> Result<Option<E>, InternalError> {
        let row = self.db.with_store::<E, _>(|store| store.get(&id).cloned())?;
        row.map(|r| r.try_decode()).transpose()
    }

    /// Load a single row by its unique slug.
    pub fn by_slug(&self, slug: &str) -> Result<E, Error> {
        let found = self
            .all()?
            .into_iter()
            .find(|entity| entity.base().slug == slug);

        found.ok_or_else(|| {
            NotFoundError {
                entity: E::ENTITY_NAME,
                key: RecordKey::Slug(slug.to_string()),
            }
            .into()
        })
    }

    /// List rows: activation filter, text search, natural-key order with
    /// id tiebreak, then paging.
    pub fn list(&self, query: &ListQuery) -> Result<Vec<E>, Error> {
        sink::record(Event::ExecStart {
            kind: ExecKind::Load,
            entity: E::ENTITY_NAME,
        });

        let mut rows = self.all()?;

        if let Some(active) = query.is_active {
            rows.retain(|row| row.base().is_active == active);
        }

        if let Some(needle) = &query.search {
            let needle = needle.to_lowercase();
            let mut kept = Vec::with_capacity(rows.len());

            for row in rows {
                if self.matches_search(&row, &needle)? {
                    kept.push(row);
                }
            }

            rows = kept;
        }

        let mut keyed = Vec::with_capacity(rows.len());
        for row in rows {
            let key = self.sort_key(&row)?;
            keyed.push((key, row));
        }
        keyed.sort_by(|a, b| a.0.cmp(&b.0));

        let paged = keyed
            .into_iter()
            .map(|(_, row)| row)
            .skip(query.offset)
            .take(query.limit.unwrap_or(usize::MAX))
            .collect::<Vec<_>>();

        sink::record(Event::ExecFinish {
            kind: ExecKind::Load,
            entity: E::ENTITY_NAME,
            rows: paged.len() as u64,
        });

        Ok(paged)
    }

    /// Find the row matching the probe on the declared natural key.
    /// The idempotent seed path: equality over every key field,
    /// including unset-equals-unset.
    pub fn find_natural(&self, probe: &E) -> Result<Option<E>, InternalError> {
        let rows = self.all()?;

        Ok(rows.into_iter().find(|row| {
            E::MODEL
                .natural_key
                .iter()
                .all(|field| row.field_value(field) == probe.field_value(field))
        }))
    }

    /// Distinct values of a declared text field, sorted and deduplicated.
    /// The query-time projection backing dynamic choice lists.
    pub fn distinct(&self, field: &str) -> Result<Vec<String>, Error> {
        let Some(model) = E::MODEL.field(field) else {
            return Err(field_error(E::ENTITY_NAME, field, "unknown field"));
        };
        if model.kind != FieldKind::Text {
            return Err(field_error(E::ENTITY_NAME, field, "not a text field"));
        }

        let mut values: Vec<String> = self
            .all()?
            .iter()
            .filter_map(|row| row.field_value(field).and_then(|v| match v {
                Value::Text(s) => Some(s),
                _ => None,
            }))
            .collect();

        values.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
        values.dedup_by(|a, b| a.to_lowercase() == b.to_lowercase());

        Ok(values)
    }

    pub fn all(&self) -> Result<Vec<E>, InternalError> {
        self.db.with_store::<E, _>(|store| {
            store
                .values()
                .map(|row| row.try_decode())
                .collect::<Result<Vec<E>, _>>()
        })?
    }

    pub fn count(&self) -> Result<usize, InternalError> {
        self.db.with_store::<E, _>(|store| store.len())
    }

    // Search over the declared searchable fields, dotted paths included.
    fn matches_search(&self, row: &E, needle: &str) -> Result<bool, InternalError> {
        for path in E::MODEL.searchable {
            if let Some(text) = self.resolve_path(row, path)?
                && text.to_lowercase().contains(needle)
            {
                return Ok(true);
            }
        }

        Ok(false)
    }

    // Ordering key from the declared order paths plus the id tiebreak.
    fn sort_key(&self, row: &E) -> Result<Vec<Value>, InternalError> {
        let mut key = Vec::with_capacity(E::MODEL.order.len() + 1);

        for path in E::MODEL.order {
            let value = if path.contains('.') {
                Value::Text(self.resolve_path(row, path)?.unwrap_or_default())
            } else {
                row.field_value(path)
                    .unwrap_or_else(|| Value::Text(String::new()))
            };
            key.push(value);
        }

        key.push(Value::Id(row.id()));
        Ok(key)
    }

    // Resolve an own field or a `relation.field` path to text.
    fn resolve_path(&self, row: &E, path: &str) -> Result<Option<String>, InternalError> {
        if let Some((relation, field)) = path.split_once('.') {
            let Some(rel) = E::MODEL.relation(relation) else {
                return Ok(None);
            };

            match row.field_value(relation) {
                Some(Value::Id(id)) => self.db.resolve_field(rel.target, id, field),
                _ => Ok(None),
            }
        } else {
            Ok(row.field_value(path).map(|v| v.to_string()))
        }
    }
}

fn field_error(entity: &'static str, field: &str, message: &str) -> Error {
    ValidationError {
        entity,
        issues: vec![Issue {
            field: field.to_string(),
            message: message.to_string(),
        }],
    }
    .into()
}

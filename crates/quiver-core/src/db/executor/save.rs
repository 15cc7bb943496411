use crate::{
    db::Db,
    error::{
        Error, InternalError, Issue, NotFoundError, RecordKey, UniquenessError, ValidationError,
    },
    model::slug::SlugSource,
    obs::sink::{self, Event, ExecKind},
    slug,
    store::RawRow,
    traits::EntityKind,
    types::RecordId,
    validate::Issues,
    value::Value,
};
use std::marker::PhantomData;
use time::OffsetDateTime;

///
/// SaveMode
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SaveMode {
    Insert,
    Update,
}

///
/// SaveExecutor
///
/// Sanitize, validate, check uniqueness, derive the slug, and write —
/// with every check-then-write step inside one store borrow so two
/// saves can never interleave between check and write.
///

pub struct SaveExecutor<'d, E: EntityKind> {
    db: &'d Db,
    _marker: PhantomData<E>,
}

impl<'d, E: EntityKind> SaveExecutor<'d, E> {
    #[must_use]
    pub const fn new(db: &'d Db) -> Self {
        Self {
            db,
            _marker: PhantomData,
        }
    }

    /// Insert a brand-new row; generates the id when the draft carries nil.
    pub fn insert(&self, mut entity: E, now: OffsetDateTime) -> Result<E, Error> {
        if entity.base().id.is_nil() {
            entity.base_mut().id = RecordId::generate();
        }

        self.save(SaveMode::Insert, entity, now)
    }

    /// Update an existing row (errors if it does not exist).
    pub fn update(&self, entity: E) -> Result<E, Error> {
        self.save(SaveMode::Update, entity, OffsetDateTime::now_utc())
    }

    /// Update with an explicit clock, for deterministic tests.
    pub fn update_at(&self, entity: E, now: OffsetDateTime) -> Result<E, Error> {
        self.save(SaveMode::Update, entity, now)
    }

    fn save(&self, mode: SaveMode, mut entity: E, now: OffsetDateTime) -> Result<E, Error> {
        sink::record(Event::ExecStart {
            kind: ExecKind::Save,
            entity: E::ENTITY_NAME,
        });

        entity.sanitize();

        // Declared field checks plus relation existence; dangling
        // references are validation findings, reported together.
        let mut issues = Issues::new(E::ENTITY_NAME);
        entity.validate(&mut issues);
        self.check_relations(&entity, &mut issues)?;
        issues.into_result()?;

        // Resolve cross-relation slug sources before the store borrow;
        // they read other stores, never this one.
        let sources = self.slug_sources(&entity)?;

        let saved = self
            .db
            .with_store_mut::<E, _>(|store| -> Result<E, Error> {
                let id = entity.base().id;

                let old: Option<E> = match (mode, store.get(&id)) {
                    (SaveMode::Insert, None) => None,
                    (SaveMode::Insert, Some(_)) => {
                        return Err(InternalError::executor_invariant(format!(
                            "generated key already exists: {id}"
                        ))
                        .into());
                    }
                    (SaveMode::Update, Some(row)) => Some(row.try_decode()?),
                    (SaveMode::Update, None) => {
                        return Err(NotFoundError {
                            entity: E::ENTITY_NAME,
                            key: RecordKey::Id(id),
                        }
                        .into());
                    }
                };

                // Every other row, decoded once for the uniqueness and
                // slug scans below.
                let mut others: Vec<E> = Vec::with_capacity(store.len().saturating_sub(1));
                for (rid, row) in store.iter() {
                    if *rid != id {
                        others.push(row.try_decode()?);
                    }
                }

                Self::check_uniqueness(&entity, &others)?;

                let (resolved, pinned) = Self::resolve_slug(&entity, old.as_ref(), &sources, &others)?;

                {
                    let base = entity.base_mut();
                    base.slug = resolved;
                    base.slug_pinned = pinned;

                    match (mode, &old) {
                        (SaveMode::Insert, _) => {
                            base.created_at = now;
                        }
                        (SaveMode::Update, Some(prev)) => {
                            // id and creation time are immutable.
                            base.created_at = prev.base().created_at;
                        }
                        (SaveMode::Update, None) => unreachable!("checked above"),
                    }
                    base.touch(now);
                }

                let row = RawRow::try_encode(&entity)?;
                store.insert(id, row);

                Ok(entity)
            })??;

        sink::record(Event::ExecFinish {
            kind: ExecKind::Save,
            entity: E::ENTITY_NAME,
            rows: 1,
        });

        Ok(saved)
    }

    // Relation fields must point at existing rows; optional relations
    // are only checked when set.
    fn check_relations(&self, entity: &E, issues: &mut Issues) -> Result<(), Error> {
        for rel in E::MODEL.relations {
            match entity.field_value(rel.field) {
                Some(Value::Id(id)) => {
                    if !self.db.contains(rel.target, id)? {
                        issues.issue(rel.field, format!("references missing {}", rel.target));
                    }
                }
                Some(_) => issues.issue(rel.field, "expected an id"),
                None if rel.required => issues.issue(rel.field, "required"),
                None => {}
            }
        }

        Ok(())
    }

    // Gather slug source values in declared order. Related sources read
    // the target row live, so a renamed club re-slugs its memberships on
    // their next save.
    fn slug_sources(&self, entity: &E) -> Result<Vec<String>, Error> {
        let mut out = Vec::with_capacity(E::MODEL.slug.len());

        for source in E::MODEL.slug {
            match source {
                SlugSource::Field(field) => {
                    if let Some(Value::Text(text)) = entity.field_value(field) {
                        out.push(text);
                    }
                }
                SlugSource::Related { relation, field } => {
                    let rel = E::MODEL.relation(relation).ok_or_else(|| {
                        InternalError::executor_invariant(format!(
                            "slug source names unknown relation: {relation}"
                        ))
                    })?;

                    if let Some(Value::Id(id)) = entity.field_value(relation)
                        && let Some(text) = self.db.resolve_field(rel.target, id, field)?
                    {
                        out.push(text);
                    }
                }
            }
        }

        Ok(out)
    }

    fn check_uniqueness(entity: &E, others: &[E]) -> Result<(), Error> {
        for index in E::MODEL.indexes {
            if !index.unique {
                continue;
            }

            // Unset fields never collide (NULL semantics).
            let Some(values) = index
                .fields
                .iter()
                .map(|f| entity.field_value(f))
                .collect::<Option<Vec<_>>>()
            else {
                continue;
            };

            let collides = others.iter().any(|other| {
                index
                    .fields
                    .iter()
                    .map(|f| other.field_value(f))
                    .collect::<Option<Vec<_>>>()
                    .as_ref()
                    == Some(&values)
            });

            if collides {
                sink::record(Event::UniqueViolation {
                    entity: E::ENTITY_NAME,
                });

                return Err(UniquenessError {
                    entity: E::ENTITY_NAME,
                    fields: index.fields.to_vec(),
                    value: values
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", "),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Decide the stored slug. Hand-edited slugs pin; pinned slugs are
    /// kept verbatim; everything else re-derives from the sources with
    /// deterministic disambiguation against the live slug set.
    fn resolve_slug(
        entity: &E,
        old: Option<&E>,
        sources: &[String],
        others: &[E],
    ) -> Result<(String, bool), Error> {
        let taken = |candidate: &str| others.iter().any(|o| o.base().slug == candidate);

        let incoming = entity.base().slug.clone();
        let stored = old.map(|o| o.base().slug.clone());

        let manual = match &stored {
            Some(prev) => !incoming.is_empty() && incoming != *prev,
            None => !incoming.is_empty(),
        };

        if manual {
            if !slug::is_valid(&incoming) {
                return Err(ValidationError {
                    entity: E::ENTITY_NAME,
                    issues: vec![Issue {
                        field: "slug".to_string(),
                        message: "malformed slug".to_string(),
                    }],
                }
                .into());
            }
            if taken(&incoming) {
                sink::record(Event::UniqueViolation {
                    entity: E::ENTITY_NAME,
                });
                return Err(UniquenessError {
                    entity: E::ENTITY_NAME,
                    fields: vec!["slug"],
                    value: incoming,
                }
                .into());
            }

            return Ok((incoming, true));
        }

        if entity.base().slug_pinned
            && let Some(prev) = stored
        {
            return Ok((prev, true));
        }

        let refs: Vec<&str> = sources.iter().map(String::as_str).collect();
        let mut candidate = slug::slugify(&refs);
        if candidate.is_empty() {
            // Sourceless stubs fall back to the id.
            candidate = entity.base().id.to_lower_string();
        }

        // A stored slug that is this candidate (or this candidate plus a
        // disambiguation counter) is already derived from these sources;
        // keeping it prevents drift when an earlier collision partner
        // has since gone away.
        if let Some(prev) = &stored
            && is_derived_from(prev, &candidate)
        {
            return Ok((prev.clone(), false));
        }

        let resolved = slug::disambiguate(&candidate, taken).map_err(|err| UniquenessError {
            entity: E::ENTITY_NAME,
            fields: vec!["slug"],
            value: err.candidate,
        })?;

        if resolved != candidate {
            sink::record(Event::SlugCollision {
                entity: E::ENTITY_NAME,
            });
        }

        Ok((resolved, false))
    }
}

// Whether a stored slug is the candidate itself or the candidate with a
// numeric disambiguation suffix.
fn is_derived_from(stored: &str, candidate: &str) -> bool {
    if stored == candidate {
        return true;
    }

    stored
        .strip_prefix(candidate)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_slug_detection() {
        assert!(is_derived_from("club", "club"));
        assert!(is_derived_from("club-2", "club"));
        assert!(is_derived_from("club-10", "club"));
        assert!(!is_derived_from("club-x", "club"));
        assert!(!is_derived_from("clubhouse", "club"));
        assert!(!is_derived_from("club-", "club"));
    }
}

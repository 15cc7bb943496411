//! End-to-end registry behavior: CRUD, slugs, uniqueness, activation,
//! and delete protection, exercised through the public surface.

use quiver::prelude::*;

fn registry() -> Registry {
    Registry::default()
}

#[test]
fn create_get_round_trip() {
    let registry = registry();

    let mut draft = Archer::new("Jansen", "Piet");
    draft.union_number = Some(111_111);

    let saved = registry.create(draft).unwrap();
    assert!(!saved.base.id.is_nil());
    assert!(saved.base.is_active);
    assert!(!saved.base.author.is_nil());
    assert_eq!(saved.base.slug, "jansen");

    let loaded: Archer = registry.get(saved.id()).unwrap();
    assert_eq!(loaded, saved);

    let by_slug: Archer = registry.get_by_slug("jansen").unwrap();
    assert_eq!(by_slug.id(), saved.id());
}

#[test]
fn explicit_author_overrides_the_default_identity() {
    let registry = registry();
    let author = UserId::generate();

    let club = registry.create_as(Club::new("De Pijl"), author).unwrap();
    assert_eq!(club.base.author, author);
}

#[test]
fn get_missing_id_is_not_found() {
    let registry = registry();

    let err = registry.get::<Archer>(RecordId::generate()).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn same_club_name_in_two_towns_gets_counter_suffix() {
    let registry = registry();

    let first = registry
        .create(Club::in_town("De Boogschutters", "Eindhoven"))
        .unwrap();
    let second = registry
        .create(Club::in_town("De Boogschutters", "Breda"))
        .unwrap();
    let third = registry
        .create(Club::in_town("De Boogschutters", "Tilburg"))
        .unwrap();

    assert_eq!(first.base.slug, "de-boogschutters");
    assert_eq!(second.base.slug, "de-boogschutters-2");
    assert_eq!(third.base.slug, "de-boogschutters-3");
}

#[test]
fn union_number_is_unique_when_set() {
    let registry = registry();

    let mut a = Archer::new("Jansen", "Piet");
    a.union_number = Some(222_222);
    registry.create(a).unwrap();

    let mut b = Archer::new("Bakker", "Anna");
    b.union_number = Some(222_222);
    let err = registry.create(b).unwrap_err();
    assert!(matches!(err, Error::Uniqueness(_)));

    // Unset numbers never collide with each other.
    registry.create(Archer::new("de Vries", "Kees")).unwrap();
    registry.create(Archer::new("Smit", "Joke")).unwrap();
}

#[test]
fn validation_reports_all_findings_at_once() {
    let registry = registry();

    let mut draft = Archer::new("", "");
    draft.zip_code = Some("12345678".to_string());

    let err = registry.create(draft).unwrap_err();
    let Error::Validation(v) = err else {
        panic!("expected validation error, got {err}");
    };
    assert_eq!(v.issues.len(), 3);
}

#[test]
fn update_preserves_id_and_created_at() {
    let registry = registry();

    let saved = registry.create(Club::in_town("De Pijl", "Utrecht")).unwrap();

    let mut edited = saved.clone();
    edited.town = Some("Amersfoort".to_string());
    let updated = registry.update(edited).unwrap();

    assert_eq!(updated.id(), saved.id());
    assert_eq!(updated.base.created_at, saved.base.created_at);
    assert_eq!(updated.town.as_deref(), Some("Amersfoort"));
}

#[test]
fn slug_tracks_source_rename_unless_pinned() {
    let registry = registry();

    let club = registry.create(Club::new("Willem Tell")).unwrap();
    assert_eq!(club.base.slug, "willem-tell");

    let mut renamed = club.clone();
    renamed.name = "Robin Hood".to_string();
    let renamed = registry.update(renamed).unwrap();
    assert_eq!(renamed.base.slug, "robin-hood");

    // Pin a hand-picked slug; a further rename leaves it alone.
    let pinned: Club = registry.set_slug(renamed.id(), "the-hood").unwrap();
    assert_eq!(pinned.base.slug, "the-hood");
    assert!(pinned.base.slug_pinned);

    let mut renamed_again = pinned.clone();
    renamed_again.name = "Sherwood".to_string();
    let renamed_again = registry.update(renamed_again).unwrap();
    assert_eq!(renamed_again.base.slug, "the-hood");

    // Unpinning re-derives from the current name.
    let unpinned: Club = registry.unpin_slug(renamed_again.id()).unwrap();
    assert_eq!(unpinned.base.slug, "sherwood");
    assert!(!unpinned.base.slug_pinned);
}

#[test]
fn malformed_manual_slug_is_rejected() {
    let registry = registry();

    let club = registry.create(Club::new("De Pijl")).unwrap();
    let err = registry
        .set_slug::<Club>(club.id(), "Not A Slug!")
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn membership_slug_joins_both_sides() {
    let registry = registry();

    let archer = registry.create(Archer::new("Jansen", "Piet")).unwrap();
    let club = registry
        .create(Club::in_town("De Boogschutters", "Eindhoven"))
        .unwrap();

    let membership = registry
        .create(ClubMembership::new(club.id(), archer.id()))
        .unwrap();
    assert_eq!(membership.base.slug, "jansen-de-boogschutters");
}

#[test]
fn membership_with_dangling_reference_fails_validation() {
    let registry = registry();

    let archer = registry.create(Archer::new("Jansen", "Piet")).unwrap();
    let err = registry
        .create(ClubMembership::new(RecordId::generate(), archer.id()))
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn referenced_archer_cannot_be_deleted_but_can_be_deactivated() {
    let registry = registry();

    let archer = registry.create(Archer::new("Jansen", "Piet")).unwrap();
    let club = registry.create(Club::new("De Pijl")).unwrap();
    let membership = registry
        .create(ClubMembership::new(club.id(), archer.id()))
        .unwrap();

    let err = registry.delete::<Archer>(archer.id()).unwrap_err();
    let Error::ReferentialIntegrity(ri) = err else {
        panic!("expected referential-integrity error, got {err}");
    };
    assert!(
        ri.blocking
            .iter()
            .any(|b| b.entity == "club_membership" && b.count == 1)
    );

    // Soft path still works while referenced.
    let report = registry.deactivate::<Archer>(&[archer.id()]).unwrap();
    assert_eq!(report.updated, vec![archer.id()]);
    let archer: Archer = registry.get(archer.id()).unwrap();
    assert!(!archer.base.is_active);

    // Removing the membership unblocks the hard delete.
    registry.delete::<ClubMembership>(membership.id()).unwrap();
    registry.delete::<Archer>(archer.id()).unwrap();
    assert!(matches!(
        registry.get::<Archer>(archer.id()),
        Err(Error::NotFound(_))
    ));
}

#[test]
fn listing_orders_by_declared_natural_keys() {
    let registry = registry();

    registry.create(Archer::new("de Vries", "Anna")).unwrap();
    registry.create(Archer::new("Bakker", "Willem")).unwrap();
    registry.create(Archer::new("Bakker", "Anna")).unwrap();

    let listed: Vec<Archer> = registry.list(&ListQuery::new()).unwrap();
    let names: Vec<(String, String)> = listed
        .into_iter()
        .map(|a| (a.last_name, a.first_name))
        .collect();

    assert_eq!(
        names,
        vec![
            ("Bakker".to_string(), "Anna".to_string()),
            ("Bakker".to_string(), "Willem".to_string()),
            ("de Vries".to_string(), "Anna".to_string()),
        ]
    );
}

#[test]
fn list_filters_by_activation_and_search() {
    let registry = registry();

    let keep = registry.create(Club::in_town("De Pijl", "Utrecht")).unwrap();
    let retired = registry
        .create(Club::in_town("Willem Tell", "Breda"))
        .unwrap();
    registry.deactivate::<Club>(&[retired.id()]).unwrap();

    let active: Vec<Club> = registry.list(&ListQuery::new().active()).unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id(), keep.id());

    // Search covers towns too, case-insensitively.
    let hits: Vec<Club> = registry.list(&ListQuery::new().search("breda")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id(), retired.id());
}

#[test]
fn list_paging_applies_after_ordering() {
    let registry = registry();

    for name in ["Alfa", "Bravo", "Charlie", "Delta"] {
        registry.create(Team::new(name)).unwrap();
    }

    let page: Vec<Team> = registry
        .list(&ListQuery::new().offset(1).limit(2))
        .unwrap();
    let names: Vec<&str> = page.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Bravo", "Charlie"]);
}

#[test]
fn distinct_values_deduplicates_and_sorts() {
    let registry = registry();

    registry.create(Club::in_town("A", "Utrecht")).unwrap();
    registry.create(Club::in_town("B", "utrecht")).unwrap();
    registry.create(Club::in_town("C", "Breda")).unwrap();
    registry.create(Club::new("D")).unwrap();

    let towns = registry.distinct_values::<Club>("town").unwrap();
    assert_eq!(towns, vec!["Breda".to_string(), "Utrecht".to_string()]);
}

#[test]
fn distinct_values_rejects_unknown_field() {
    let registry = registry();

    let err = registry.distinct_values::<Club>("quiver_count").unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn get_or_create_is_idempotent_on_natural_key() {
    let registry = registry();

    let (first, created) = registry
        .get_or_create(Discipline::new("Indoor 18m"))
        .unwrap();
    assert!(created);

    let (second, created) = registry
        .get_or_create(Discipline::new("Indoor 18m"))
        .unwrap();
    assert!(!created);
    assert_eq!(first.id(), second.id());
    assert_eq!(registry.count::<Discipline>().unwrap(), 1);
}

//! Bulk activation over mixed batches: present, absent, and
//! already-in-state rows each land in their own report bucket.

use quiver::prelude::*;

#[test]
fn mixed_batch_reports_each_outcome() {
    let registry = Registry::default();

    let a = registry.create(Team::new("Eerste team")).unwrap();
    let b = registry.create(Team::new("Tweede team")).unwrap();
    let ghost = RecordId::generate();

    registry.deactivate::<Team>(&[a.id()]).unwrap();

    // a flips back on, b is already active, ghost does not exist.
    let report = registry
        .activate::<Team>(&[a.id(), b.id(), ghost])
        .unwrap();

    assert_eq!(report.updated, vec![a.id()]);
    assert_eq!(report.skipped, vec![b.id()]);
    assert_eq!(report.missing, vec![ghost]);
    assert!(!report.is_complete());

    let a: Team = registry.get(a.id()).unwrap();
    assert!(a.base.is_active);
}

#[test]
fn deactivation_bumps_modified_at_only() {
    let registry = Registry::default();

    let team = registry.create(Team::new("Jeugdteam")).unwrap();
    registry.deactivate::<Team>(&[team.id()]).unwrap();

    let reloaded: Team = registry.get(team.id()).unwrap();
    assert!(!reloaded.base.is_active);
    assert_eq!(reloaded.base.slug, team.base.slug);
    assert_eq!(reloaded.base.created_at, team.base.created_at);
    assert!(reloaded.base.modified_at >= team.base.modified_at);
}

#[test]
fn set_active_is_idempotent() {
    let registry = Registry::default();

    let team = registry.create(Team::new("Recreanten")).unwrap();

    let first = registry.deactivate::<Team>(&[team.id()]).unwrap();
    assert_eq!(first.updated.len(), 1);

    let second = registry.deactivate::<Team>(&[team.id()]).unwrap();
    assert!(second.updated.is_empty());
    assert_eq!(second.skipped, vec![team.id()]);
    assert!(second.is_complete());
}

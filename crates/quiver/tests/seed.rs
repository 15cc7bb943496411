//! The fixture loader is idempotent: a second run probes every natural
//! key, creates nothing, and leaves the stores unchanged.

use quiver::{prelude::*, seed};

#[test]
fn first_run_populates_the_registry() {
    let registry = Registry::default();

    let report = seed::fill(&registry).unwrap();
    assert!(report.created > 0);
    assert_eq!(report.existing, 0);

    assert_eq!(registry.count::<Archer>().unwrap(), 3);
    assert_eq!(registry.count::<Club>().unwrap(), 5);
    assert_eq!(registry.count::<Discipline>().unwrap(), 10);
    assert_eq!(registry.count::<ClubMembership>().unwrap(), 3);
}

#[test]
fn second_run_creates_nothing() {
    let registry = Registry::default();

    let first = seed::fill(&registry).unwrap();
    let second = seed::fill(&registry).unwrap();

    assert_eq!(second.created, 0);
    assert_eq!(second.existing, first.created);
    assert_eq!(registry.count::<Archer>().unwrap(), 3);
    assert_eq!(registry.count::<Club>().unwrap(), 5);
}

#[test]
fn seeded_memberships_resolve_their_slug_sources() {
    let registry = Registry::default();
    seed::fill(&registry).unwrap();

    let memberships: Vec<ClubMembership> = registry.list(&ListQuery::new()).unwrap();
    for membership in memberships {
        assert!(!membership.base.slug.is_empty());

        let archer: Archer = registry.get(membership.archer).unwrap();
        assert!(membership.base.slug.contains(
            &archer
                .last_name
                .to_lowercase()
                .replace(' ', "-")
        ));
    }
}

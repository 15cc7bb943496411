//! Property coverage for the slug deriver: shape invariants for
//! arbitrary input, and uniqueness under deliberately colliding names.

use proptest::prelude::*;
use quiver::prelude::*;
use quiver_core::slug::{SLUG_MAX_LEN, is_valid, slugify};
use std::collections::BTreeSet;

proptest! {
    #[test]
    fn slugify_output_is_well_formed(input in ".{0,120}") {
        let slug = slugify(&[&input]);

        prop_assert!(slug.len() <= SLUG_MAX_LEN);
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
        prop_assert!(slug.is_empty() || is_valid(&slug));
    }

    #[test]
    fn slugify_is_idempotent(input in ".{0,120}") {
        let once = slugify(&[&input]);
        let twice = slugify(&[&once]);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn ascii_words_survive_recognizably(word in "[a-z]{1,20}") {
        let slug = slugify(&[&word]);
        prop_assert_eq!(slug, word);
    }
}

proptest! {
    // Store-backed run: expensive, so fewer cases.
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn colliding_names_always_get_distinct_slugs(
        name in "[a-zA-Z ]{1,30}",
        copies in 2usize..8,
    ) {
        prop_assume!(!slugify(&[&name]).is_empty());

        let registry = Registry::default();
        let mut slugs = BTreeSet::new();

        for _ in 0..copies {
            let club = registry.create(Club::new(name.clone())).unwrap();
            prop_assert!(slugs.insert(club.base.slug.clone()), "duplicate slug");
        }
    }
}

use thiserror::Error as ThisError;

/// Maximum stored slug length, including any disambiguation suffix.
pub const SLUG_MAX_LEN: usize = 50;

/// Cap on disambiguation attempts. Collisions resolve deterministically
/// with a numeric suffix; the cap guards against unbounded retry if a
/// type somehow accumulates that many identical sources.
pub const MAX_SLUG_ATTEMPTS: u32 = 10_000;

///
/// SlugExhausted
///

#[derive(Debug, ThisError)]
#[error("slug disambiguation exhausted after {MAX_SLUG_ATTEMPTS} attempts: '{candidate}'")]
pub struct SlugExhausted {
    pub candidate: String,
}

/// Normalize source values into a URL-safe slug candidate.
///
/// Sources are joined in declared order, lowercased, and reduced to
/// ASCII alphanumeric runs separated by single hyphens. Non-ASCII
/// letters are dropped rather than transliterated. The result is
/// truncated to [`SLUG_MAX_LEN`] and never ends in a hyphen.
#[must_use]
pub fn slugify(sources: &[&str]) -> String {
    let joined = sources.join(" ");
    let mut out = String::with_capacity(joined.len().min(SLUG_MAX_LEN));

    for ch in joined.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if out.len() >= SLUG_MAX_LEN {
                break;
            }
            out.push(ch);
        } else if ch.is_alphanumeric() {
            // dropped, not a separator
        } else if !out.is_empty() && !out.ends_with('-') {
            if out.len() >= SLUG_MAX_LEN {
                break;
            }
            out.push('-');
        }
    }

    while out.ends_with('-') {
        out.pop();
    }

    out
}

/// Whether a stored or hand-edited slug has a valid shape.
#[must_use]
pub fn is_valid(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= SLUG_MAX_LEN
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
        && !slug.contains("--")
}

/// Resolve a candidate against existing slugs of the same type.
///
/// Returns the candidate unchanged when free; otherwise appends `-2`,
/// `-3`, … deterministically, shortening the stem so the suffixed value
/// still fits [`SLUG_MAX_LEN`]. The `taken` check must already exclude
/// the record's own prior slug on update.
pub fn disambiguate(
    candidate: &str,
    mut taken: impl FnMut(&str) -> bool,
) -> Result<String, SlugExhausted> {
    if !taken(candidate) {
        return Ok(candidate.to_string());
    }

    for n in 2..=MAX_SLUG_ATTEMPTS {
        let suffix = format!("-{n}");
        let room = SLUG_MAX_LEN - suffix.len();

        let mut stem = if candidate.len() > room {
            candidate[..room].to_string()
        } else {
            candidate.to_string()
        };
        while stem.ends_with('-') {
            stem.pop();
        }

        let attempt = format!("{stem}{suffix}");
        if !taken(&attempt) {
            return Ok(attempt);
        }
    }

    Err(SlugExhausted {
        candidate: candidate.to_string(),
    })
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify(&["De Boogschutters"]), "de-boogschutters");
    }

    #[test]
    fn slugify_joins_sources_in_order() {
        assert_eq!(slugify(&["Jansen", "De Pijlen"]), "jansen-de-pijlen");
    }

    #[test]
    fn slugify_collapses_punctuation_runs() {
        assert_eq!(slugify(&["'s-Hertogenbosch  (Den Bosch)"]), "s-hertogenbosch-den-bosch");
    }

    #[test]
    fn slugify_drops_non_ascii_letters() {
        assert_eq!(slugify(&["café"]), "caf");
    }

    #[test]
    fn slugify_empty_input() {
        assert_eq!(slugify(&["!!!"]), "");
        assert_eq!(slugify(&[]), "");
    }

    #[test]
    fn slugify_truncates_without_trailing_hyphen() {
        let long = "a ".repeat(60);
        let slug = slugify(&[long.as_str()]);

        assert!(slug.len() <= SLUG_MAX_LEN);
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn disambiguate_free_candidate() {
        let got = disambiguate("club", |_| false).unwrap();
        assert_eq!(got, "club");
    }

    #[test]
    fn disambiguate_appends_counter() {
        let existing = ["club", "club-2"];
        let got = disambiguate("club", |s| existing.contains(&s)).unwrap();
        assert_eq!(got, "club-3");
    }

    #[test]
    fn disambiguate_respects_max_len() {
        let stem = "x".repeat(SLUG_MAX_LEN);
        let got = disambiguate(&stem, |s| s == stem).unwrap();

        assert!(got.len() <= SLUG_MAX_LEN);
        assert!(got.ends_with("-2"));
    }

    #[test]
    fn disambiguate_exhaustion_errors() {
        let err = disambiguate("dup", |_| true).unwrap_err();
        assert!(err.to_string().contains("dup"));
    }

    #[test]
    fn valid_slug_shapes() {
        assert!(is_valid("de-boogschutters-2"));
        assert!(!is_valid(""));
        assert!(!is_valid("Upper"));
        assert!(!is_valid("-leading"));
        assert!(!is_valid("double--hyphen"));
    }
}

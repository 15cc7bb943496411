///
/// Sanitize
///
/// Normalization pass run before validation on every save. Total and
/// non-failing; anything questionable is left for validation to flag.
///

pub trait Sanitize {
    fn sanitize(&mut self) {}
}

/// Trim surrounding whitespace in place.
pub fn text(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

/// Trim an optional field; whitespace-only values collapse to `None`.
pub fn opt_text(value: &mut Option<String>) {
    if let Some(inner) = value {
        text(inner);
        if inner.is_empty() {
            *value = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_trims() {
        let mut v = "  Jansen \n".to_string();
        text(&mut v);
        assert_eq!(v, "Jansen");
    }

    #[test]
    fn opt_text_collapses_blank_to_none() {
        let mut v = Some("   ".to_string());
        opt_text(&mut v);
        assert_eq!(v, None);

        let mut v = Some(" Eindhoven ".to_string());
        opt_text(&mut v);
        assert_eq!(v.as_deref(), Some("Eindhoven"));
    }
}

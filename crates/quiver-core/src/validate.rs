use crate::error::{Issue, ValidationError};

///
/// Validate
///
/// Per-entity declared checks, collected rather than fail-fast so the
/// caller can surface every field problem at once.
///

pub trait Validate {
    fn validate(&self, issues: &mut Issues) {
        let _ = issues;
    }
}

///
/// Issues
/// Collector for field-level validation findings.
///

#[derive(Debug)]
pub struct Issues {
    entity: &'static str,
    issues: Vec<Issue>,
}

impl Issues {
    #[must_use]
    pub const fn new(entity: &'static str) -> Self {
        Self {
            entity,
            issues: Vec::new(),
        }
    }

    pub fn issue(&mut self, field: &str, message: impl Into<String>) {
        self.issues.push(Issue {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// Required text field: non-empty after sanitization.
    pub fn require(&mut self, field: &str, value: &str) {
        if value.is_empty() {
            self.issue(field, "required");
        }
    }

    pub fn max_len(&mut self, field: &str, value: &str, max: usize) {
        let len = value.chars().count();
        if len > max {
            self.issue(field, format!("length ({len}) exceeds max-{max}"));
        }
    }

    pub fn opt_max_len(&mut self, field: &str, value: Option<&str>, max: usize) {
        if let Some(value) = value {
            self.max_len(field, value, max);
        }
    }

    /// Counted field that must be at least one (grid columns/rows).
    pub fn positive(&mut self, field: &str, value: u32) {
        if value == 0 {
            self.issue(field, "must be positive");
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                entity: self.entity,
                issues: self.issues,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_multiple_issues() {
        let mut issues = Issues::new("archer");
        issues.require("last_name", "");
        issues.max_len("first_name", "abcdef", 3);

        let err = issues.into_result().unwrap_err();
        assert_eq!(err.issues.len(), 2);
        assert!(err.to_string().contains("last_name: required"));
    }

    #[test]
    fn empty_collector_is_ok() {
        let mut issues = Issues::new("club");
        issues.require("name", "De Pijl");

        assert!(issues.into_result().is_ok());
    }
}

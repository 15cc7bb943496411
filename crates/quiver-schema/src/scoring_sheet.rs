use quiver_core::{prelude::*, sanitize};
use serde::{Deserialize, Serialize};

///
/// ScoringSheet
///
/// A scoring grid layout: so many arrows (columns) over so many ends
/// (rows). Kept data-only; scoring itself lives elsewhere.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringSheet {
    #[serde(flatten)]
    pub base: BaseRecord,

    pub name: String,
    pub columns: u32,
    pub rows: u32,
}

impl ScoringSheet {
    #[must_use]
    pub fn new(name: impl Into<String>, columns: u32, rows: u32) -> Self {
        Self {
            base: BaseRecord::draft(),
            name: name.into(),
            columns,
            rows,
        }
    }
}

static MODEL: EntityModel = EntityModel {
    path: ScoringSheet::PATH,
    entity_name: "scoring_sheet",
    fields: &[
        FieldModel::new("name", FieldKind::Text),
        FieldModel::new("columns", FieldKind::Uint),
        FieldModel::new("rows", FieldKind::Uint),
    ],
    indexes: &[],
    relations: &[],
    slug: &[SlugSource::field("name")],
    order: &["name"],
    searchable: &["name", "info"],
    natural_key: &["name"],
};

impl Path for ScoringSheet {
    const PATH: &'static str = "quiver_schema::scoring_sheet::ScoringSheet";
}

impl Sanitize for ScoringSheet {
    fn sanitize(&mut self) {
        sanitize::text(&mut self.name);
        sanitize::opt_text(&mut self.base.info);
    }
}

impl Validate for ScoringSheet {
    fn validate(&self, issues: &mut Issues) {
        issues.require("name", &self.name);
        issues.max_len("name", &self.name, 64);
        issues.positive("columns", self.columns);
        issues.positive("rows", self.rows);
    }
}

impl EntityKind for ScoringSheet {
    const ENTITY_NAME: &'static str = "scoring_sheet";
    const MODEL: &'static EntityModel = &MODEL;

    fn base(&self) -> &BaseRecord {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseRecord {
        &mut self.base
    }

    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "name" => Some(Value::Text(self.name.clone())),
            "columns" => Some(Value::Uint(self.columns.into())),
            "rows" => Some(Value::Uint(self.rows.into())),
            "info" => self.base.info.clone().map(Value::Text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_grid_dimensions_fail_validation() {
        let sheet = ScoringSheet::new("25m 1p", 0, 0);
        let mut issues = Issues::new(ScoringSheet::ENTITY_NAME);
        sheet.validate(&mut issues);

        let err = issues.into_result().unwrap_err();
        assert_eq!(err.issues.len(), 2);
    }
}

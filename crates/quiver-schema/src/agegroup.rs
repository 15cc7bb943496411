use quiver_core::{prelude::*, sanitize};
use serde::{Deserialize, Serialize};

///
/// AgeGroup
/// Cadet, junior, senior, master... Names are unique.
///

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AgeGroup {
    #[serde(flatten)]
    pub base: BaseRecord,

    pub name: String,
}

impl AgeGroup {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

static MODEL: EntityModel = EntityModel {
    path: AgeGroup::PATH,
    entity_name: "agegroup",
    fields: &[FieldModel::new("name", FieldKind::Text)],
    indexes: &[IndexModel::unique(&["name"])],
    relations: &[],
    slug: &[SlugSource::field("name")],
    order: &["name"],
    searchable: &["name", "info"],
    natural_key: &["name"],
};

impl Path for AgeGroup {
    const PATH: &'static str = "quiver_schema::agegroup::AgeGroup";
}

impl Sanitize for AgeGroup {
    fn sanitize(&mut self) {
        sanitize::text(&mut self.name);
        sanitize::opt_text(&mut self.base.info);
    }
}

impl Validate for AgeGroup {
    fn validate(&self, issues: &mut Issues) {
        issues.require("name", &self.name);
        issues.max_len("name", &self.name, 64);
    }
}

impl EntityKind for AgeGroup {
    const ENTITY_NAME: &'static str = "agegroup";
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
            "info" => self.base.info.clone().map(Value::Text),
            _ => None,
        }
    }
}

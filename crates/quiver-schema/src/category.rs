use quiver_core::{prelude::*, sanitize};
use serde::{Deserialize, Serialize};

///
/// Category
/// Competition category (recurve, compound, barebow...).
///

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(flatten)]
    pub base: BaseRecord,

    pub name: String,
}

impl Category {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

static CATEGORY: EntityModel = EntityModel {
    path: Category::PATH,
    entity_name: "category",
    fields: &[FieldModel::new("name", FieldKind::Text)],
    indexes: &[],
    relations: &[],
    slug: &[SlugSource::field("name")],
    order: &["name"],
    searchable: &["name", "info"],
    natural_key: &["name"],
};

impl Path for Category {
    const PATH: &'static str = "quiver_schema::category::Category";
}

impl Sanitize for Category {
    fn sanitize(&mut self) {
        sanitize::text(&mut self.name);
        sanitize::opt_text(&mut self.base.info);
    }
}

impl Validate for Category {
    fn validate(&self, issues: &mut Issues) {
        issues.require("name", &self.name);
        issues.max_len("name", &self.name, 64);
    }
}

impl EntityKind for Category {
    const ENTITY_NAME: &'static str = "category";
    const MODEL: &'static EntityModel = &CATEGORY;

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

///
/// CategoryMembership
///
/// Joins an archer to a category, optionally narrowed by age group.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryMembership {
    #[serde(flatten)]
    pub base: BaseRecord,

    pub category: RecordId,
    pub archer: RecordId,
    pub agegroup: Option<RecordId>,
}

impl CategoryMembership {
    #[must_use]
    pub fn new(category: RecordId, archer: RecordId) -> Self {
        Self {
            base: BaseRecord::draft(),
            category,
            archer,
            agegroup: None,
        }
    }

    #[must_use]
    pub const fn with_agegroup(mut self, agegroup: RecordId) -> Self {
        self.agegroup = Some(agegroup);
        self
    }
}

static CATEGORY_MEMBERSHIP: EntityModel = EntityModel {
    path: CategoryMembership::PATH,
    entity_name: "category_membership",
    fields: &[
        FieldModel::new("category", FieldKind::Id),
        FieldModel::new("archer", FieldKind::Id),
        FieldModel::new("agegroup", FieldKind::Id),
    ],
    indexes: &[],
    relations: &[
        RelationModel::new("category", "category"),
        RelationModel::new("archer", "archer"),
        RelationModel::optional("agegroup", "agegroup"),
    ],
    slug: &[
        SlugSource::related("category", "name"),
        SlugSource::related("archer", "last_name"),
    ],
    order: &["category.name", "archer.last_name"],
    searchable: &["category.name", "archer.last_name"],
    natural_key: &["category", "archer"],
};

impl Path for CategoryMembership {
    const PATH: &'static str = "quiver_schema::category::CategoryMembership";
}

impl Sanitize for CategoryMembership {
    fn sanitize(&mut self) {
        sanitize::opt_text(&mut self.base.info);
    }
}

impl Validate for CategoryMembership {}

impl EntityKind for CategoryMembership {
    const ENTITY_NAME: &'static str = "category_membership";
    const MODEL: &'static EntityModel = &CATEGORY_MEMBERSHIP;

    fn base(&self) -> &BaseRecord {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseRecord {
        &mut self.base
    }

    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "category" => Some(Value::Id(self.category)),
            "archer" => Some(Value::Id(self.archer)),
            "agegroup" => self.agegroup.map(Value::Id),
            _ => None,
        }
    }
}

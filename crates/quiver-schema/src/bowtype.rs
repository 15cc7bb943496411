use quiver_core::{prelude::*, sanitize};
use serde::{Deserialize, Serialize};

///
/// BowType
/// Recurve, compound, longbow... Names are unique and short.
///

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BowType {
    #[serde(flatten)]
    pub base: BaseRecord,

    pub name: String,
}

impl BowType {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

static BOWTYPE: EntityModel = EntityModel {
    path: BowType::PATH,
    entity_name: "bowtype",
    fields: &[FieldModel::new("name", FieldKind::Text)],
    indexes: &[IndexModel::unique(&["name"])],
    relations: &[],
    slug: &[SlugSource::field("name")],
    order: &["name"],
    searchable: &["name", "info"],
    natural_key: &["name"],
};

impl Path for BowType {
    const PATH: &'static str = "quiver_schema::bowtype::BowType";
}

impl Sanitize for BowType {
    fn sanitize(&mut self) {
        sanitize::text(&mut self.name);
        sanitize::opt_text(&mut self.base.info);
    }
}

impl Validate for BowType {
    fn validate(&self, issues: &mut Issues) {
        issues.require("name", &self.name);
        issues.max_len("name", &self.name, 32);
    }
}

impl EntityKind for BowType {
    const ENTITY_NAME: &'static str = "bowtype";
    const MODEL: &'static EntityModel = &BOWTYPE;

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
/// BowTypeMembership
/// Which bow types an archer shoots.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BowTypeMembership {
    #[serde(flatten)]
    pub base: BaseRecord,

    pub bowtype: RecordId,
    pub archer: RecordId,
}

impl BowTypeMembership {
    #[must_use]
    pub fn new(bowtype: RecordId, archer: RecordId) -> Self {
        Self {
            base: BaseRecord::draft(),
            bowtype,
            archer,
        }
    }
}

static BOWTYPE_MEMBERSHIP: EntityModel = EntityModel {
    path: BowTypeMembership::PATH,
    entity_name: "bowtype_membership",
    fields: &[
        FieldModel::new("bowtype", FieldKind::Id),
        FieldModel::new("archer", FieldKind::Id),
    ],
    indexes: &[],
    relations: &[
        RelationModel::new("bowtype", "bowtype"),
        RelationModel::new("archer", "archer"),
    ],
    slug: &[
        SlugSource::related("bowtype", "name"),
        SlugSource::related("archer", "last_name"),
    ],
    order: &["bowtype.name", "archer.last_name"],
    searchable: &["bowtype.name", "archer.last_name"],
    natural_key: &["bowtype", "archer"],
};

impl Path for BowTypeMembership {
    const PATH: &'static str = "quiver_schema::bowtype::BowTypeMembership";
}

impl Sanitize for BowTypeMembership {
    fn sanitize(&mut self) {
        sanitize::opt_text(&mut self.base.info);
    }
}

impl Validate for BowTypeMembership {}

impl EntityKind for BowTypeMembership {
    const ENTITY_NAME: &'static str = "bowtype_membership";
    const MODEL: &'static EntityModel = &BOWTYPE_MEMBERSHIP;

    fn base(&self) -> &BaseRecord {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseRecord {
        &mut self.base
    }

    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "bowtype" => Some(Value::Id(self.bowtype)),
            "archer" => Some(Value::Id(self.archer)),
            _ => None,
        }
    }
}

use quiver_core::{prelude::*, sanitize};
use serde::{Deserialize, Serialize};

///
/// Discipline
/// A shooting discipline (target, field, 3D, ...). Names are unique.
///

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Discipline {
    #[serde(flatten)]
    pub base: BaseRecord,

    pub name: String,
}

impl Discipline {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

static DISCIPLINE: EntityModel = EntityModel {
    path: Discipline::PATH,
    entity_name: "discipline",
    fields: &[FieldModel::new("name", FieldKind::Text)],
    indexes: &[IndexModel::unique(&["name"])],
    relations: &[],
    slug: &[SlugSource::field("name")],
    order: &["name"],
    searchable: &["name", "info"],
    natural_key: &["name"],
};

impl Path for Discipline {
    const PATH: &'static str = "quiver_schema::discipline::Discipline";
}

impl Sanitize for Discipline {
    fn sanitize(&mut self) {
        sanitize::text(&mut self.name);
        sanitize::opt_text(&mut self.base.info);
    }
}

impl Validate for Discipline {
    fn validate(&self, issues: &mut Issues) {
        issues.require("name", &self.name);
        issues.max_len("name", &self.name, 64);
    }
}

impl EntityKind for Discipline {
    const ENTITY_NAME: &'static str = "discipline";
    const MODEL: &'static EntityModel = &DISCIPLINE;

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
/// DisciplineMembership
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisciplineMembership {
    #[serde(flatten)]
    pub base: BaseRecord,

    pub discipline: RecordId,
    pub archer: RecordId,
}

impl DisciplineMembership {
    #[must_use]
    pub fn new(discipline: RecordId, archer: RecordId) -> Self {
        Self {
            base: BaseRecord::draft(),
            discipline,
            archer,
        }
    }
}

static DISCIPLINE_MEMBERSHIP: EntityModel = EntityModel {
    path: DisciplineMembership::PATH,
    entity_name: "discipline_membership",
    fields: &[
        FieldModel::new("discipline", FieldKind::Id),
        FieldModel::new("archer", FieldKind::Id),
    ],
    indexes: &[],
    relations: &[
        RelationModel::new("discipline", "discipline"),
        RelationModel::new("archer", "archer"),
    ],
    slug: &[
        SlugSource::related("discipline", "name"),
        SlugSource::related("archer", "last_name"),
    ],
    order: &["discipline.name", "archer.last_name"],
    searchable: &["discipline.name", "archer.last_name"],
    natural_key: &["discipline", "archer"],
};

impl Path for DisciplineMembership {
    const PATH: &'static str = "quiver_schema::discipline::DisciplineMembership";
}

impl Sanitize for DisciplineMembership {
    fn sanitize(&mut self) {
        sanitize::opt_text(&mut self.base.info);
    }
}

impl Validate for DisciplineMembership {}

impl EntityKind for DisciplineMembership {
    const ENTITY_NAME: &'static str = "discipline_membership";
    const MODEL: &'static EntityModel = &DISCIPLINE_MEMBERSHIP;

    fn base(&self) -> &BaseRecord {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseRecord {
        &mut self.base
    }

    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "discipline" => Some(Value::Id(self.discipline)),
            "archer" => Some(Value::Id(self.archer)),
            _ => None,
        }
    }
}

use quiver_core::{prelude::*, sanitize};
use serde::{Deserialize, Serialize};

///
/// Team
///

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(flatten)]
    pub base: BaseRecord,

    pub name: String,
}

impl Team {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

static TEAM: EntityModel = EntityModel {
    path: Team::PATH,
    entity_name: "team",
    fields: &[FieldModel::new("name", FieldKind::Text)],
    indexes: &[],
    relations: &[],
    slug: &[SlugSource::field("name")],
    order: &["name"],
    searchable: &["name"],
    natural_key: &["name"],
};

impl Path for Team {
    const PATH: &'static str = "quiver_schema::team::Team";
}

impl Sanitize for Team {
    fn sanitize(&mut self) {
        sanitize::text(&mut self.name);
        sanitize::opt_text(&mut self.base.info);
    }
}

impl Validate for Team {
    fn validate(&self, issues: &mut Issues) {
        issues.require("name", &self.name);
        issues.max_len("name", &self.name, 64);
    }
}

impl EntityKind for Team {
    const ENTITY_NAME: &'static str = "team";
    const MODEL: &'static EntityModel = &TEAM;

    fn base(&self) -> &BaseRecord {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseRecord {
        &mut self.base
    }

    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "name" => Some(Value::Text(self.name.clone())),
            _ => None,
        }
    }
}

///
/// TeamMembership
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamMembership {
    #[serde(flatten)]
    pub base: BaseRecord,

    pub team: RecordId,
    pub archer: RecordId,
}

impl TeamMembership {
    #[must_use]
    pub fn new(team: RecordId, archer: RecordId) -> Self {
        Self {
            base: BaseRecord::draft(),
            team,
            archer,
        }
    }
}

static TEAM_MEMBERSHIP: EntityModel = EntityModel {
    path: TeamMembership::PATH,
    entity_name: "team_membership",
    fields: &[
        FieldModel::new("team", FieldKind::Id),
        FieldModel::new("archer", FieldKind::Id),
    ],
    indexes: &[],
    relations: &[
        RelationModel::new("team", "team"),
        RelationModel::new("archer", "archer"),
    ],
    slug: &[
        SlugSource::related("team", "name"),
        SlugSource::related("archer", "last_name"),
    ],
    order: &["team.name", "archer.last_name"],
    searchable: &["team.name", "archer.last_name"],
    natural_key: &["team", "archer"],
};

impl Path for TeamMembership {
    const PATH: &'static str = "quiver_schema::team::TeamMembership";
}

impl Sanitize for TeamMembership {
    fn sanitize(&mut self) {
        sanitize::opt_text(&mut self.base.info);
    }
}

impl Validate for TeamMembership {}

impl EntityKind for TeamMembership {
    const ENTITY_NAME: &'static str = "team_membership";
    const MODEL: &'static EntityModel = &TEAM_MEMBERSHIP;

    fn base(&self) -> &BaseRecord {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseRecord {
        &mut self.base
    }

    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "team" => Some(Value::Id(self.team)),
            "archer" => Some(Value::Id(self.archer)),
            _ => None,
        }
    }
}

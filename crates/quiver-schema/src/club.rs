use quiver_core::{prelude::*, sanitize};
use serde::{Deserialize, Serialize};
use time::Date;

///
/// Club
///
/// An affiliated club. Names are not unique on their own (two towns can
/// both have "De Pijl"), so the natural key pairs name with town.
///

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Club {
    #[serde(flatten)]
    pub base: BaseRecord,

    pub name: String,
    pub address: Option<String>,
    pub town: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub social_media: Option<String>,
}

impl Club {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn in_town(name: impl Into<String>, town: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            town: Some(town.into()),
            ..Default::default()
        }
    }
}

static CLUB: EntityModel = EntityModel {
    path: Club::PATH,
    entity_name: "club",
    fields: &[
        FieldModel::new("name", FieldKind::Text),
        FieldModel::new("address", FieldKind::Text),
        FieldModel::new("town", FieldKind::Text),
        FieldModel::new("email", FieldKind::Text),
        FieldModel::new("phone", FieldKind::Text),
        FieldModel::new("website", FieldKind::Text),
        FieldModel::new("social_media", FieldKind::Text),
    ],
    indexes: &[],
    relations: &[],
    slug: &[SlugSource::field("name")],
    order: &["name"],
    searchable: &["name", "town"],
    natural_key: &["name", "town"],
};

impl Path for Club {
    const PATH: &'static str = "quiver_schema::club::Club";
}

impl Sanitize for Club {
    fn sanitize(&mut self) {
        sanitize::text(&mut self.name);
        sanitize::opt_text(&mut self.address);
        sanitize::opt_text(&mut self.town);
        sanitize::opt_text(&mut self.email);
        sanitize::opt_text(&mut self.phone);
        sanitize::opt_text(&mut self.website);
        sanitize::opt_text(&mut self.social_media);
        sanitize::opt_text(&mut self.base.info);
    }
}

impl Validate for Club {
    fn validate(&self, issues: &mut Issues) {
        issues.require("name", &self.name);
        issues.max_len("name", &self.name, 64);
        issues.opt_max_len("address", self.address.as_deref(), 128);
        issues.opt_max_len("town", self.town.as_deref(), 64);
        issues.opt_max_len("email", self.email.as_deref(), 254);
        issues.opt_max_len("phone", self.phone.as_deref(), 15);
        issues.opt_max_len("website", self.website.as_deref(), 200);
        issues.opt_max_len("social_media", self.social_media.as_deref(), 128);
    }
}

impl EntityKind for Club {
    const ENTITY_NAME: &'static str = "club";
    const MODEL: &'static EntityModel = &CLUB;

    fn base(&self) -> &BaseRecord {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseRecord {
        &mut self.base
    }

    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "name" => Some(Value::Text(self.name.clone())),
            "address" => self.address.clone().map(Value::Text),
            "town" => self.town.clone().map(Value::Text),
            "email" => self.email.clone().map(Value::Text),
            "phone" => self.phone.clone().map(Value::Text),
            "website" => self.website.clone().map(Value::Text),
            "social_media" => self.social_media.clone().map(Value::Text),
            _ => None,
        }
    }
}

///
/// ClubMembership
///
/// Joins an archer to a club, with an optional membership window. Both
/// foreign keys are delete-protected on their target side.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClubMembership {
    #[serde(flatten)]
    pub base: BaseRecord,

    pub club: RecordId,
    pub archer: RecordId,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

impl ClubMembership {
    #[must_use]
    pub fn new(club: RecordId, archer: RecordId) -> Self {
        Self {
            base: BaseRecord::draft(),
            club,
            archer,
            start_date: None,
            end_date: None,
        }
    }
}

static CLUB_MEMBERSHIP: EntityModel = EntityModel {
    path: ClubMembership::PATH,
    entity_name: "club_membership",
    fields: &[
        FieldModel::new("club", FieldKind::Id),
        FieldModel::new("archer", FieldKind::Id),
        FieldModel::new("start_date", FieldKind::Date),
        FieldModel::new("end_date", FieldKind::Date),
    ],
    indexes: &[],
    relations: &[
        RelationModel::new("club", "club"),
        RelationModel::new("archer", "archer"),
    ],
    slug: &[
        SlugSource::related("archer", "last_name"),
        SlugSource::related("club", "name"),
    ],
    order: &["club.name", "archer.last_name"],
    searchable: &["archer.last_name", "club.name"],
    natural_key: &["club", "archer"],
};

impl Path for ClubMembership {
    const PATH: &'static str = "quiver_schema::club::ClubMembership";
}

impl Sanitize for ClubMembership {
    fn sanitize(&mut self) {
        sanitize::opt_text(&mut self.base.info);
    }
}

impl Validate for ClubMembership {
    fn validate(&self, issues: &mut Issues) {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date)
            && end < start
        {
            issues.issue("end_date", "before start_date");
        }
    }
}

impl EntityKind for ClubMembership {
    const ENTITY_NAME: &'static str = "club_membership";
    const MODEL: &'static EntityModel = &CLUB_MEMBERSHIP;

    fn base(&self) -> &BaseRecord {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseRecord {
        &mut self.base
    }

    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "club" => Some(Value::Id(self.club)),
            "archer" => Some(Value::Id(self.archer)),
            "start_date" => self.start_date.map(Value::Date),
            "end_date" => self.end_date.map(Value::Date),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn membership_window_must_be_ordered() {
        let mut m = ClubMembership::new(RecordId::generate(), RecordId::generate());
        m.start_date = Some(date!(2025 - 09 - 01));
        m.end_date = Some(date!(2025 - 01 - 01));

        let mut issues = Issues::new(ClubMembership::ENTITY_NAME);
        m.validate(&mut issues);
        assert!(issues.into_result().is_err());
    }

    #[test]
    fn club_natural_key_pairs_name_and_town() {
        let club = Club::in_town("De Pijl", "Eindhoven");
        assert_eq!(
            club.field_value("town"),
            Some(Value::Text("Eindhoven".to_string()))
        );
        assert_eq!(Club::MODEL.natural_key, &["name", "town"]);
    }
}

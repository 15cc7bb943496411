use quiver_core::{prelude::*, sanitize};
use serde::{Deserialize, Serialize};
use time::Date;

///
/// Archer
///
/// A registered member of the federation. The union number is the
/// federation-issued membership number; it is optional (juniors and
/// guests may not have one yet) but unique when present.
///

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Archer {
    #[serde(flatten)]
    pub base: BaseRecord,

    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub union_number: Option<u32>,

    // contact block
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub zip_code: Option<String>,

    pub birth_date: Option<Date>,
}

impl Archer {
    #[must_use]
    pub fn new(last_name: impl Into<String>, first_name: impl Into<String>) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            ..Default::default()
        }
    }

    /// "Last First Middle", the conventional display form.
    #[must_use]
    pub fn full_name(&self) -> String {
        let mut name = format!("{} {}", self.last_name, self.first_name);
        if let Some(middle) = &self.middle_name {
            name.push(' ');
            name.push_str(middle);
        }
        name
    }
}

static MODEL: EntityModel = EntityModel {
    path: Archer::PATH,
    entity_name: "archer",
    fields: &[
        FieldModel::new("last_name", FieldKind::Text),
        FieldModel::new("first_name", FieldKind::Text),
        FieldModel::new("middle_name", FieldKind::Text),
        FieldModel::new("union_number", FieldKind::Uint),
        FieldModel::new("email", FieldKind::Text),
        FieldModel::new("phone", FieldKind::Text),
        FieldModel::new("address", FieldKind::Text),
        FieldModel::new("city", FieldKind::Text),
        FieldModel::new("province", FieldKind::Text),
        FieldModel::new("zip_code", FieldKind::Text),
        FieldModel::new("birth_date", FieldKind::Date),
    ],
    indexes: &[IndexModel::unique(&["union_number"])],
    relations: &[],
    slug: &[SlugSource::field("last_name")],
    order: &["last_name", "first_name"],
    searchable: &["last_name", "first_name", "middle_name"],
    natural_key: &["last_name", "first_name"],
};

impl Path for Archer {
    const PATH: &'static str = "quiver_schema::archer::Archer";
}

impl Sanitize for Archer {
    fn sanitize(&mut self) {
        sanitize::text(&mut self.last_name);
        sanitize::text(&mut self.first_name);
        sanitize::opt_text(&mut self.middle_name);
        sanitize::opt_text(&mut self.email);
        sanitize::opt_text(&mut self.phone);
        sanitize::opt_text(&mut self.address);
        sanitize::opt_text(&mut self.city);
        sanitize::opt_text(&mut self.province);
        sanitize::opt_text(&mut self.zip_code);
        sanitize::opt_text(&mut self.base.info);
    }
}

impl Validate for Archer {
    fn validate(&self, issues: &mut Issues) {
        issues.require("last_name", &self.last_name);
        issues.max_len("last_name", &self.last_name, 64);
        issues.require("first_name", &self.first_name);
        issues.max_len("first_name", &self.first_name, 32);
        issues.opt_max_len("middle_name", self.middle_name.as_deref(), 6);
        issues.opt_max_len("email", self.email.as_deref(), 254);
        issues.opt_max_len("phone", self.phone.as_deref(), 15);
        issues.opt_max_len("address", self.address.as_deref(), 128);
        issues.opt_max_len("city", self.city.as_deref(), 64);
        issues.opt_max_len("province", self.province.as_deref(), 64);
        issues.opt_max_len("zip_code", self.zip_code.as_deref(), 6);
    }
}

impl EntityKind for Archer {
    const ENTITY_NAME: &'static str = "archer";
    const MODEL: &'static EntityModel = &MODEL;

    fn base(&self) -> &BaseRecord {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseRecord {
        &mut self.base
    }

    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "last_name" => Some(Value::Text(self.last_name.clone())),
            "first_name" => Some(Value::Text(self.first_name.clone())),
            "middle_name" => self.middle_name.clone().map(Value::Text),
            "union_number" => self.union_number.map(|n| Value::Uint(n.into())),
            "email" => self.email.clone().map(Value::Text),
            "phone" => self.phone.clone().map(Value::Text),
            "address" => self.address.clone().map(Value::Text),
            "city" => self.city.clone().map(Value::Text),
            "province" => self.province.clone().map(Value::Text),
            "zip_code" => self.zip_code.clone().map(Value::Text),
            "birth_date" => self.birth_date.map(Value::Date),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_includes_middle_when_set() {
        let mut archer = Archer::new("Jansen", "Piet");
        assert_eq!(archer.full_name(), "Jansen Piet");

        archer.middle_name = Some("van".to_string());
        assert_eq!(archer.full_name(), "Jansen Piet van");
    }

    #[test]
    fn validation_flags_missing_names() {
        let archer = Archer::new("", "");
        let mut issues = Issues::new(Archer::ENTITY_NAME);
        archer.validate(&mut issues);

        let err = issues.into_result().unwrap_err();
        assert_eq!(err.issues.len(), 2);
    }

    #[test]
    fn unset_union_number_projects_none() {
        let archer = Archer::new("Jansen", "Piet");
        assert_eq!(archer.field_value("union_number"), None);

        let mut archer = archer;
        archer.union_number = Some(123_456);
        assert_eq!(
            archer.field_value("union_number"),
            Some(Value::Uint(123_456))
        );
    }
}

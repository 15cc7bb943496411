use quiver_core::{prelude::*, sanitize};
use serde::{Deserialize, Serialize};

// Equipment placeholders: declared and registered so records can be
// created and slugged, but not fleshed out beyond an optional name.
// One macro keeps nineteen near-identical types from drifting apart.
macro_rules! equipment_stub {
    ($(#[doc = $doc:literal])* $ty:ident, $name:literal) => {
        $(#[doc = $doc])*
        #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
        pub struct $ty {
            #[serde(flatten)]
            pub base: BaseRecord,

            pub name: Option<String>,
        }

        impl $ty {
            #[must_use]
            pub fn named(name: impl Into<String>) -> Self {
                Self {
                    name: Some(name.into()),
                    ..Default::default()
                }
            }
        }

        impl Path for $ty {
            const PATH: &'static str =
                concat!("quiver_schema::equipment::", stringify!($ty));
        }

        impl Sanitize for $ty {
            fn sanitize(&mut self) {
                sanitize::opt_text(&mut self.name);
                sanitize::opt_text(&mut self.base.info);
            }
        }

        impl Validate for $ty {
            fn validate(&self, issues: &mut Issues) {
                issues.opt_max_len("name", self.name.as_deref(), 64);
            }
        }

        impl EntityKind for $ty {
            const ENTITY_NAME: &'static str = $name;
            const MODEL: &'static EntityModel = &EntityModel {
                path: <$ty as Path>::PATH,
                entity_name: $name,
                fields: &[FieldModel::new("name", FieldKind::Text)],
                indexes: &[],
                relations: &[],
                slug: &[SlugSource::Field("name")],
                order: &["name"],
                searchable: &["name"],
                natural_key: &["name"],
            };

            fn base(&self) -> &BaseRecord {
                &self.base
            }

            fn base_mut(&mut self) -> &mut BaseRecord {
                &mut self.base
            }

            fn field_value(&self, field: &str) -> Option<Value> {
                match field {
                    "name" => self.name.clone().map(Value::Text),
                    _ => None,
                }
            }
        }
    };
}

equipment_stub!(Sight, "sight");
equipment_stub!(Stabilizer, "stabilizer");
equipment_stub!(Clicker, "clicker");
equipment_stub!(Plunger, "plunger");
equipment_stub!(FingerTab, "finger_tab");
equipment_stub!(ArmGuard, "arm_guard");
equipment_stub!(ChestGuard, "chest_guard");
equipment_stub!(QuiverType, "quiver_type");
equipment_stub!(Quiver, "quiver");
equipment_stub!(LimbType, "limb_type");
equipment_stub!(Limb, "limb");
equipment_stub!(RiserType, "riser_type");
equipment_stub!(Riser, "riser");
equipment_stub!(Bow, "bow");
equipment_stub!(StringMaterial, "string_material");
equipment_stub!(ArrowRestType, "arrow_rest_type");
equipment_stub!(ArrowRest, "arrow_rest");
equipment_stub!(NockingPoint, "nocking_point");
equipment_stub!(
    /// Catch-all for gear that has no dedicated type yet.
    Equipment,
    "equipment"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_shapes_agree() {
        let sight = Sight::named("Shibuya Ultima");
        assert_eq!(Sight::ENTITY_NAME, "sight");
        assert_eq!(
            sight.field_value("name"),
            Some(Value::Text("Shibuya Ultima".to_string()))
        );
        assert_eq!(Bow::MODEL.slug, Sight::MODEL.slug);
    }
}

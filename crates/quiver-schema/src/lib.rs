//! The declared domain: federation entities, membership joins, and the
//! equipment placeholder family, each carrying its static model
//! descriptor. Registration and relation guards live here so the core
//! runtime stays schema-agnostic.

pub mod agegroup;
pub mod archer;
pub mod bowtype;
pub mod category;
pub mod club;
pub mod discipline;
pub mod equipment;
pub mod scoring_sheet;
pub mod team;

use quiver_core::{
    db::{Db, RelationGuard, relation::count_refs},
    traits::EntityKind,
};

use crate::{
    agegroup::AgeGroup,
    archer::Archer,
    bowtype::{BowType, BowTypeMembership},
    category::{Category, CategoryMembership},
    club::{Club, ClubMembership},
    discipline::{Discipline, DisciplineMembership},
    equipment::{
        ArmGuard, ArrowRest, ArrowRestType, Bow, ChestGuard, Clicker, Equipment, FingerTab, Limb,
        LimbType, NockingPoint, Plunger, Quiver, QuiverType, Riser, RiserType, Sight, Stabilizer,
        StringMaterial,
    },
    scoring_sheet::ScoringSheet,
    team::{Team, TeamMembership},
};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        agegroup::AgeGroup,
        archer::Archer,
        bowtype::{BowType, BowTypeMembership},
        category::{Category, CategoryMembership},
        club::{Club, ClubMembership},
        discipline::{Discipline, DisciplineMembership},
        scoring_sheet::ScoringSheet,
        team::{Team, TeamMembership},
    };
}

// One guard per declared foreign key. The delete executor consults this
// table whenever a target-side row is removed.
const fn guard<E: EntityKind>(field: &'static str, target: &'static str) -> RelationGuard {
    RelationGuard {
        source: E::ENTITY_NAME,
        target,
        field,
        count: count_refs::<E>,
    }
}

pub static GUARDS: &[RelationGuard] = &[
    guard::<ClubMembership>("club", "club"),
    guard::<ClubMembership>("archer", "archer"),
    guard::<DisciplineMembership>("discipline", "discipline"),
    guard::<DisciplineMembership>("archer", "archer"),
    guard::<CategoryMembership>("category", "category"),
    guard::<CategoryMembership>("archer", "archer"),
    guard::<CategoryMembership>("agegroup", "agegroup"),
    guard::<TeamMembership>("team", "team"),
    guard::<TeamMembership>("archer", "archer"),
    guard::<BowTypeMembership>("bowtype", "bowtype"),
    guard::<BowTypeMembership>("archer", "archer"),
];

/// Register a store for every declared entity type.
pub fn register_all(db: &mut Db) {
    db.register::<Archer>();
    db.register::<Club>();
    db.register::<ClubMembership>();
    db.register::<Discipline>();
    db.register::<DisciplineMembership>();
    db.register::<Category>();
    db.register::<CategoryMembership>();
    db.register::<AgeGroup>();
    db.register::<Team>();
    db.register::<TeamMembership>();
    db.register::<BowType>();
    db.register::<BowTypeMembership>();
    db.register::<ScoringSheet>();

    // equipment placeholders
    db.register::<Sight>();
    db.register::<Stabilizer>();
    db.register::<Clicker>();
    db.register::<Plunger>();
    db.register::<FingerTab>();
    db.register::<ArmGuard>();
    db.register::<ChestGuard>();
    db.register::<QuiverType>();
    db.register::<Quiver>();
    db.register::<LimbType>();
    db.register::<Limb>();
    db.register::<RiserType>();
    db.register::<Riser>();
    db.register::<Bow>();
    db.register::<StringMaterial>();
    db.register::<ArrowRestType>();
    db.register::<ArrowRest>();
    db.register::<NockingPoint>();
    db.register::<Equipment>();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_declared_relation_has_a_guard() {
        let declared = [
            ClubMembership::MODEL,
            DisciplineMembership::MODEL,
            CategoryMembership::MODEL,
            TeamMembership::MODEL,
            BowTypeMembership::MODEL,
        ];

        for model in declared {
            for relation in model.relations {
                assert!(
                    GUARDS.iter().any(|g| g.source == model.entity_name
                        && g.field == relation.field
                        && g.target == relation.target),
                    "missing guard for {}.{}",
                    model.entity_name,
                    relation.field
                );
            }
        }
    }
}

//! Deterministic fixture loader. Every row goes through `get_or_create`
//! on its natural key, so running the loader twice changes nothing.

use crate::registry::Registry;
use quiver_core::{Error, traits::EntityKind};
use quiver_schema::prelude::*;

///
/// SeedReport
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SeedReport {
    pub created: usize,
    pub existing: usize,
}

impl SeedReport {
    const fn tally(&mut self, created: bool) {
        if created {
            self.created += 1;
        } else {
            self.existing += 1;
        }
    }
}

const ARCHERS: &[(&str, &str)] = &[("Jansen", "Piet"), ("de Vries", "Anna"), ("Bakker", "Willem")];

const CLUBS: &[(&str, &str)] = &[
    ("De Boogschutters", "Eindhoven"),
    ("Willem Tell", "Breda"),
    ("Robin Hood", "Tilburg"),
    ("De Pijl", "Utrecht"),
    ("Vast en Zeker", "Arnhem"),
];

const DISCIPLINES: &[&str] = &[
    "Indoor 18m",
    "Indoor 25m",
    "Outdoor 70m",
    "Outdoor 50m",
    "Veld",
    "3D",
    "Clout",
    "Flight",
    "Run-Archery",
    "Lange afstand",
];

const CATEGORIES: &[&str] = &["Recurve", "Compound", "Barebow", "Longbow", "Traditioneel"];

const AGEGROUPS: &[&str] = &["Onder 12", "Onder 14", "Onder 18", "Senioren", "Masters"];

const TEAMS: &[&str] = &[
    "Eerste team",
    "Tweede team",
    "Derde team",
    "Jeugdteam",
    "Recreanten",
];

const BOWTYPES: &[&str] = &["Recurve", "Compound", "Barebow", "Longbow", "Instinctief"];

const SHEETS: &[(&str, u32, u32)] = &[("18m 3 pijlen", 3, 10), ("25m 1 pijl", 1, 25)];

/// Load the fixture set. Safe to run against a non-empty registry; rows
/// already present (by natural key) are left untouched and counted as
/// existing.
pub fn fill(registry: &Registry) -> Result<SeedReport, Error> {
    let mut report = SeedReport::default();

    let mut archers = Vec::with_capacity(ARCHERS.len());
    for (last, first) in ARCHERS {
        let (archer, created) = registry.get_or_create(Archer::new(*last, *first))?;
        report.tally(created);
        archers.push(archer);
    }

    let mut clubs = Vec::with_capacity(CLUBS.len());
    for (name, town) in CLUBS {
        let (club, created) = registry.get_or_create(Club::in_town(*name, *town))?;
        report.tally(created);
        clubs.push(club);
    }

    let mut disciplines = Vec::with_capacity(DISCIPLINES.len());
    for name in DISCIPLINES {
        let (discipline, created) = registry.get_or_create(Discipline::new(*name))?;
        report.tally(created);
        disciplines.push(discipline);
    }

    let mut categories = Vec::with_capacity(CATEGORIES.len());
    for name in CATEGORIES {
        let (category, created) = registry.get_or_create(Category::new(*name))?;
        report.tally(created);
        categories.push(category);
    }

    let mut agegroups = Vec::with_capacity(AGEGROUPS.len());
    for name in AGEGROUPS {
        let (agegroup, created) = registry.get_or_create(AgeGroup::new(*name))?;
        report.tally(created);
        agegroups.push(agegroup);
    }

    let mut teams = Vec::with_capacity(TEAMS.len());
    for name in TEAMS {
        let (team, created) = registry.get_or_create(Team::new(*name))?;
        report.tally(created);
        teams.push(team);
    }

    let mut bowtypes = Vec::with_capacity(BOWTYPES.len());
    for name in BOWTYPES {
        let (bowtype, created) = registry.get_or_create(BowType::new(*name))?;
        report.tally(created);
        bowtypes.push(bowtype);
    }

    for (name, columns, rows) in SHEETS {
        let (_, created) = registry.get_or_create(ScoringSheet::new(*name, *columns, *rows))?;
        report.tally(created);
    }

    // Round-robin joins: archer i takes the i-th club, discipline,
    // category, team, and bow type, wrapping as needed. Deterministic,
    // so a re-run probes the same natural keys.
    for (i, archer) in archers.iter().enumerate() {
        let club = &clubs[i % clubs.len()];
        let (_, created) = registry.get_or_create(ClubMembership::new(club.id(), archer.id()))?;
        report.tally(created);

        let discipline = &disciplines[i % disciplines.len()];
        let (_, created) =
            registry.get_or_create(DisciplineMembership::new(discipline.id(), archer.id()))?;
        report.tally(created);

        let category = &categories[i % categories.len()];
        let agegroup = &agegroups[i % agegroups.len()];
        let (_, created) = registry.get_or_create(
            CategoryMembership::new(category.id(), archer.id()).with_agegroup(agegroup.id()),
        )?;
        report.tally(created);

        let team = &teams[i % teams.len()];
        let (_, created) = registry.get_or_create(TeamMembership::new(team.id(), archer.id()))?;
        report.tally(created);

        let bowtype = &bowtypes[i % bowtypes.len()];
        let (_, created) =
            registry.get_or_create(BowTypeMembership::new(bowtype.id(), archer.id()))?;
        report.tally(created);
    }

    Ok(report)
}

use serde::{Deserialize, Serialize};

use super::enums::PopulationKind;

/// The number and type of people aboard a ship or colony.
///
/// One population unit represents ten million people; quantities here are
/// already in units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Population {
    pub construction: i64,
    pub professionals: i64,
    pub soldiers: i64,
    pub spies: i64,
    pub trainees: i64,
    pub unskilled: i64,
    pub others: i64,
}

impl Population {
    /// Starting population of a surface home colony.
    pub fn home_colony() -> Self {
        Self {
            construction: 20_000,
            professionals: 2_000_000,
            soldiers: 2_500_000,
            unskilled: 6_000_000,
            others: 5_900_000,
            ..Self::default()
        }
    }

    /// Starting population of a home world's orbiting colony.
    pub fn orbiting_colony() -> Self {
        Self {
            construction: 10_000,
            professionals: 100_000,
            soldiers: 150_000,
            unskilled: 370_000,
            others: 350_000,
            ..Self::default()
        }
    }

    pub fn count(&self, kind: PopulationKind) -> i64 {
        match kind {
            PopulationKind::Construction => self.construction,
            PopulationKind::Professionals => self.professionals,
            PopulationKind::Soldiers => self.soldiers,
            PopulationKind::Spies => self.spies,
            PopulationKind::Trainees => self.trainees,
            PopulationKind::Unskilled => self.unskilled,
            PopulationKind::Others => self.others,
        }
    }

    pub fn total(&self) -> i64 {
        self.construction
            + self.professionals
            + self.soldiers
            + self.spies
            + self.trainees
            + self.unskilled
            + self.others
    }

    /// Food units needed to feed the population for one turn.
    ///
    /// Returns `(min, full)`: the full amount is 1.00 food units per
    /// population unit per turn; the minimum to stave off starvation is a
    /// quarter of that, rounded up.
    pub fn food_needed_per_turn(&self) -> (i64, i64) {
        let total = self.total();
        ((total + 3) / 4, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_sum_every_bracket() {
        let p = Population::home_colony();
        assert_eq!(p.total(), 16_420_000);
        assert_eq!(p.count(PopulationKind::Spies), 0);
    }

    #[test]
    fn minimum_rations_round_up() {
        let p = Population {
            unskilled: 5,
            ..Population::default()
        };
        let (min, full) = p.food_needed_per_turn();
        assert_eq!(min, 2);
        assert_eq!(full, 5);
    }
}

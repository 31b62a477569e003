use serde::{Deserialize, Serialize};

use super::enums::UnitKind;

// Notes on scale:
//   10_000_000 people in one population unit
//   40_000_000 people fed by one food unit per turn
//
// Population quantities are stored scaled; mass and volume math divides by
// 100 (rounding up) to get back to physical units.

/// An inventory item held by a colony or ship: a kind, a tech level, a
/// quantity, and whether the units are assembled or still in crates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub kind: UnitKind,
    pub tech_level: u8,
    pub quantity: u32,
    pub assembled: bool,
}

impl Unit {
    pub fn new(kind: UnitKind, tech_level: u8, quantity: u32) -> Self {
        Self {
            kind,
            tech_level,
            quantity,
            assembled: false,
        }
    }

    pub fn assembled(kind: UnitKind, tech_level: u8, quantity: u32) -> Self {
        Self {
            kind,
            tech_level,
            quantity,
            assembled: true,
        }
    }

    fn scaled_quantity(&self) -> i64 {
        let quantity = i64::from(self.quantity);
        if self.kind == UnitKind::Population {
            (quantity + 99) / 100
        } else {
            quantity
        }
    }

    /// Total mass of the stack, in mass units.
    pub fn mass(&self) -> f64 {
        let tech_level = f64::from(self.tech_level);
        let mass_per_unit = match self.kind {
            UnitKind::ConsumerGood | UnitKind::Gold => 0.6,
            UnitKind::Farm => (2.0 * tech_level) + 6.0,
            UnitKind::Food => 6.0,
            UnitKind::Fuel | UnitKind::Metal | UnitKind::Nonmetal | UnitKind::Population => 1.0,
            UnitKind::Mine | UnitKind::Power => (2.0 * tech_level) + 10.0,
            UnitKind::LightStructural => 0.5,
            UnitKind::Structural => 1.0,
            UnitKind::Noop => 0.0,
        };
        self.scaled_quantity() as f64 * mass_per_unit
    }

    /// Metallic and non-metallic units needed to build one unit of the stack.
    pub fn materials(&self) -> (f64, f64) {
        let tech_level = f64::from(self.tech_level);
        match self.kind {
            UnitKind::ConsumerGood => (0.2, 0.4),
            UnitKind::Farm => (4.0 + tech_level, 2.0 + tech_level),
            UnitKind::Mine | UnitKind::Power => (5.0 + tech_level, 5.0 + tech_level),
            UnitKind::LightStructural => (0.1, 0.4),
            UnitKind::Structural => (0.4, 0.6),
            _ => (0.0, 0.0),
        }
    }

    /// What the stack yields in one production turn, if it produces at all.
    /// Only assembled farms and power plants produce.
    pub fn produce(&self) -> Option<Unit> {
        if !self.assembled {
            return None;
        }
        match self.kind {
            UnitKind::Farm => {
                let quantity = if self.tech_level == 1 {
                    25 * self.quantity
                } else {
                    5 * u32::from(self.tech_level) * self.quantity
                };
                Some(Unit::new(UnitKind::Food, 1, quantity))
            }
            UnitKind::Power => Some(Unit::new(
                UnitKind::Fuel,
                1,
                u32::from(self.tech_level) * self.quantity,
            )),
            _ => None,
        }
    }

    /// Volume units the stack may safely enclose. Zero unless the stack is
    /// assembled structural material.
    pub fn space(&self, structure_ratio: i64) -> i64 {
        if structure_ratio <= 0
            || !self.assembled
            || !matches!(self.kind, UnitKind::LightStructural | UnitKind::Structural)
        {
            return 0;
        }
        let tl = i64::from(self.tech_level);
        (i64::from(self.quantity) * tl * tl) / structure_ratio
    }

    /// Containers needed for long-term storage. Assembled industrial units
    /// take twice the space of crated ones.
    pub fn volume(&self) -> f64 {
        let tech_level = f64::from(self.tech_level);
        let containers_per_unit = match self.kind {
            UnitKind::ConsumerGood | UnitKind::Gold => 0.3,
            UnitKind::Farm => {
                let base = tech_level + 3.0;
                if self.assembled { base * 2.0 } else { base }
            }
            UnitKind::Food => 3.0,
            UnitKind::Fuel | UnitKind::Metal | UnitKind::Nonmetal => 0.5,
            UnitKind::Mine | UnitKind::Power => {
                let base = tech_level + 5.0;
                if self.assembled { base * 2.0 } else { base }
            }
            UnitKind::LightStructural => 0.25,
            UnitKind::Structural => 0.5,
            UnitKind::Population => 1.0,
            UnitKind::Noop => 0.0,
        };
        self.scaled_quantity() as f64 * containers_per_unit
    }

    /// S-expression form for the diagnostic world dump.
    pub fn sexpr(&self) -> String {
        match self.kind {
            UnitKind::ConsumerGood => format!("(goods {})", self.quantity),
            UnitKind::Food => format!("(food {})", self.quantity),
            UnitKind::Fuel => format!("(fuel {})", self.quantity),
            UnitKind::Gold => format!("(gold {})", self.quantity),
            UnitKind::Metal => format!("(metal {})", self.quantity),
            UnitKind::Nonmetal => format!("(non-metal {})", self.quantity),
            UnitKind::Noop => "(noop)".to_string(),
            UnitKind::Population => format!("(pop {})", self.quantity),
            UnitKind::Farm | UnitKind::Mine | UnitKind::Power => format!(
                "({} (tl {}) (qty {}))",
                self.kind.as_str().to_ascii_lowercase(),
                self.tech_level,
                self.quantity
            ),
            UnitKind::LightStructural => {
                format!("(lsu (tl {}) (qty {}))", self.tech_level, self.quantity)
            }
            UnitKind::Structural => {
                format!("(su (tl {}) (qty {}))", self.tech_level, self.quantity)
            }
        }
    }
}

use serde::{Deserialize, Serialize};

/// The eight entity classes sharing the global identifier namespace.
///
/// The string forms are the `type` values accepted by the Name order, so a
/// rename can only land on the kind of entity the player thought they were
/// renaming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum EntityClass {
    Colony,
    Deposit,
    Orbit,
    Planet,
    Polity,
    Ship,
    Star,
    System,
}

string_enum!(EntityClass {
    Colony => "colony",
    Deposit => "deposit",
    Orbit => "orbit",
    Planet => "planet",
    Polity => "polity",
    Ship => "ship",
    Star => "star",
    System => "system",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PlanetKind {
    AsteroidBelt,
    GasGiant,
    Terrestrial,
}

string_enum!(PlanetKind {
    AsteroidBelt => "asteroid-belt",
    GasGiant => "gas-giant",
    Terrestrial => "terrestrial",
});

/// Structural form of a colony. Affects the enclosure factor used by
/// capacity math: open colonies sit on habitable ground, enclosed colonies
/// pay for life support, orbiting colonies pay for everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ColonyKind {
    Open,
    Enclosed,
    Orbiting,
}

string_enum!(ColonyKind {
    Open => "open",
    Enclosed => "enclosed",
    Orbiting => "orbiting",
});

impl ColonyKind {
    /// Structural units required per enclosed volume unit.
    pub fn structure_factor(&self) -> i64 {
        match self {
            ColonyKind::Open => 1,
            ColonyKind::Enclosed => 5,
            ColonyKind::Orbiting => 10,
        }
    }
}

/// Directional diplomatic standing one polity holds toward another.
/// Order is important: diplomacy starts at Unknown and rises to Ally.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub enum DiplomaticStatus {
    #[default]
    Unknown,
    /// Allows messages to be sent.
    Acquaintance,
    /// Allows assets to be transferred.
    Friend,
    Ally,
}

string_enum!(DiplomaticStatus {
    Unknown => "unknown",
    Acquaintance => "acquaintance",
    Friend => "friend",
    Ally => "ally",
});

/// The labor type of a population unit. Controls what actions the unit
/// may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PopulationKind {
    Others,
    Construction,
    Professionals,
    Soldiers,
    Spies,
    Trainees,
    Unskilled,
}

string_enum!(PopulationKind {
    Others => "others",
    Construction => "construction",
    Professionals => "professionals",
    Soldiers => "soldiers",
    Spies => "spies",
    Trainees => "trainees",
    Unskilled => "unskilled",
});

/// A mineable resource deposit kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ResourceKind {
    Fuel,
    Gold,
    Metal,
    Nonmetal,
}

string_enum!(ResourceKind {
    Fuel => "FUEL",
    Gold => "GOLD",
    Metal => "METAL",
    Nonmetal => "NONMETAL",
});

/// Kind of an inventory unit held by a colony or ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum UnitKind {
    Noop,
    ConsumerGood,
    Farm,
    Food,
    Fuel,
    Gold,
    LightStructural,
    Metal,
    Mine,
    Nonmetal,
    Population,
    Power,
    Structural,
}

string_enum!(UnitKind {
    Noop => "NOOP",
    ConsumerGood => "GOODS",
    Farm => "FARM",
    Food => "FOOD",
    Fuel => "FUEL",
    Gold => "GOLD",
    LightStructural => "LSU",
    Metal => "METAL",
    Mine => "MINE",
    Nonmetal => "NONMETAL",
    Population => "POP",
    Power => "POWER",
    Structural => "SU",
});

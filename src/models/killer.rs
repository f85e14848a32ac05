//! Killer (opponent) enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{normalize_name, ValidationError};

/// Every killer a match can be logged against.
///
/// Declaration order is the canonical order: derived `Ord` follows it, and
/// ranking ties are broken by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Killer {
    Trapper,
    Wraith,
    Hillbilly,
    Nurse,
    Hag,
    Doctor,
    Huntress,
    Cannibal,
    Nightmare,
    Pig,
    Spirit,
    GhostFace,
    Oni,
    Executioner,
    Blight,
    Twins,
    Trickster,
    Nemesis,
    Cenobite,
    Artist,
    Onryo,
    Dredge,
    Mastermind,
    Knight,
    SkullMerchant,
    Singularity,
    Xenomorph,
    GoodGuy,
    Unknown,
    Lich,
    DarkLord,
    Houndmaster,
    Animatronic,
}

impl Killer {
    /// All killers in declaration order.
    pub const ALL: [Killer; 33] = [
        Killer::Trapper,
        Killer::Wraith,
        Killer::Hillbilly,
        Killer::Nurse,
        Killer::Hag,
        Killer::Doctor,
        Killer::Huntress,
        Killer::Cannibal,
        Killer::Nightmare,
        Killer::Pig,
        Killer::Spirit,
        Killer::GhostFace,
        Killer::Oni,
        Killer::Executioner,
        Killer::Blight,
        Killer::Twins,
        Killer::Trickster,
        Killer::Nemesis,
        Killer::Cenobite,
        Killer::Artist,
        Killer::Onryo,
        Killer::Dredge,
        Killer::Mastermind,
        Killer::Knight,
        Killer::SkullMerchant,
        Killer::Singularity,
        Killer::Xenomorph,
        Killer::GoodGuy,
        Killer::Unknown,
        Killer::Lich,
        Killer::DarkLord,
        Killer::Houndmaster,
        Killer::Animatronic,
    ];

    /// Display name used in report lines.
    pub fn name(&self) -> &'static str {
        match self {
            Killer::Trapper => "Trapper",
            Killer::Wraith => "Wraith",
            Killer::Hillbilly => "Hillbilly",
            Killer::Nurse => "Nurse",
            Killer::Hag => "Hag",
            Killer::Doctor => "Doctor",
            Killer::Huntress => "Huntress",
            Killer::Cannibal => "Cannibal",
            Killer::Nightmare => "Nightmare",
            Killer::Pig => "Pig",
            Killer::Spirit => "Spirit",
            Killer::GhostFace => "Ghost Face",
            Killer::Oni => "Oni",
            Killer::Executioner => "Executioner",
            Killer::Blight => "Blight",
            Killer::Twins => "Twins",
            Killer::Trickster => "Trickster",
            Killer::Nemesis => "Nemesis",
            Killer::Cenobite => "Cenobite",
            Killer::Artist => "Artist",
            Killer::Onryo => "Onryo",
            Killer::Dredge => "Dredge",
            Killer::Mastermind => "Mastermind",
            Killer::Knight => "Knight",
            Killer::SkullMerchant => "Skull Merchant",
            Killer::Singularity => "Singularity",
            Killer::Xenomorph => "Xenomorph",
            Killer::GoodGuy => "Good Guy",
            Killer::Unknown => "Unknown",
            Killer::Lich => "Lich",
            Killer::DarkLord => "Dark Lord",
            Killer::Houndmaster => "Houndmaster",
            Killer::Animatronic => "Animatronic",
        }
    }
}

impl std::fmt::Display for Killer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Killer {
    type Err = ValidationError;

    /// Accepts the display name or the snake_case key, ignoring case,
    /// spaces and punctuation ("Ghost Face", "ghost_face", "ghostface").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        Killer::ALL
            .iter()
            .copied()
            .find(|k| normalize_name(k.name()) == wanted)
            .ok_or_else(|| ValidationError::UnknownKiller(s.to_string()))
    }
}

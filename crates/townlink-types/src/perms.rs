//! Plot permission wrappers shared by player and town records.

use serde::{Deserialize, Serialize};

/// Which resident groups may perform one plot action.
///
/// The wire form is a four-element boolean array in the fixed order
/// `[resident, nation, ally, outsider]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[bool; 4]", into = "[bool; 4]")]
pub struct ActionSet {
    /// Town residents.
    pub resident: bool,
    /// Members of the owning nation.
    pub nation: bool,
    /// Members of allied nations.
    pub ally: bool,
    /// Everyone else.
    pub outsider: bool,
}

impl From<[bool; 4]> for ActionSet {
    fn from([resident, nation, ally, outsider]: [bool; 4]) -> Self {
        Self {
            resident,
            nation,
            ally,
            outsider,
        }
    }
}

impl From<ActionSet> for [bool; 4] {
    fn from(set: ActionSet) -> Self {
        [set.resident, set.nation, set.ally, set.outsider]
    }
}

/// World-interaction toggles on a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    /// Player-versus-player combat allowed.
    pub pvp: bool,
    /// Explosions allowed.
    pub explosion: bool,
    /// Fire spread allowed.
    pub fire: bool,
    /// Hostile mob spawning allowed.
    pub mobs: bool,
}

/// The full permission block carried by player and town records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    /// Block placement.
    pub build: ActionSet,
    /// Block removal.
    pub destroy: ActionSet,
    /// Lever/button/door interaction.
    pub switch: ActionSet,
    /// Item use.
    #[serde(rename = "itemUse")]
    pub item_use: ActionSet,
    /// World-interaction toggles.
    pub flags: Flags,
}

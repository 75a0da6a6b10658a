//! The town record.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::ids::{NationIdentifier, PlayerIdentifier, QuarterIdentifier};
use crate::perms::Permissions;
use crate::raw::impl_record;
use crate::spatial::{BlockPos, Spawn};

/// A fully decoded town.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Town {
    /// Town name.
    pub name: String,
    /// Town UUID.
    pub uuid: Uuid,
    /// Message board text, if set.
    pub board: Option<String>,
    /// Name of the player who founded the town.
    pub founder: String,
    /// Linked wiki URL, if set.
    pub wiki: Option<String>,
    /// The current mayor.
    pub mayor: PlayerIdentifier,
    /// The town's nation, if it belongs to one.
    #[serde(deserialize_with = "NationIdentifier::opt")]
    pub nation: Option<NationIdentifier>,
    /// Lifecycle timestamps.
    pub timestamps: TownTimestamps,
    /// Boolean status flags.
    pub status: TownStatus,
    /// Numeric stats.
    pub stats: TownStats,
    /// Town-wide plot permissions.
    pub perms: Permissions,
    /// Spawn and claim geometry.
    pub coordinates: TownCoordinates,
    /// Resident list, as lightweight references.
    pub residents: Vec<PlayerIdentifier>,
    /// Players trusted in the town.
    pub trusted: Vec<PlayerIdentifier>,
    /// Players outlawed from the town.
    pub outlaws: Vec<PlayerIdentifier>,
    /// Quarters inside the town.
    pub quarters: Vec<QuarterIdentifier>,
    /// Town rank assignments, rank name to holders.
    #[serde(default)]
    pub ranks: BTreeMap<String, Vec<PlayerIdentifier>>,
    #[serde(skip)]
    raw: Value,
}

impl_record!(Town, "town");

/// Lifecycle timestamps on a town record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TownTimestamps {
    /// Founding time.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub registered: DateTime<Utc>,
    /// When the town joined its current nation, if in one.
    #[serde(with = "chrono::serde::ts_milliseconds_option", default)]
    pub joined_nation_at: Option<DateTime<Utc>>,
    /// When the town fell into ruin, if it has.
    #[serde(with = "chrono::serde::ts_milliseconds_option", default)]
    pub ruined_at: Option<DateTime<Utc>>,
}

/// Boolean status flags on a town record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TownStatus {
    /// Spawn is publicly visible.
    pub is_public: bool,
    /// Anyone may join without invitation.
    pub is_open: bool,
    /// Neutral in wars.
    pub is_neutral: bool,
    /// Capital of its nation.
    pub is_capital: bool,
    /// Claimed beyond its block allowance.
    pub is_over_claimed: bool,
    /// Fallen into ruin.
    pub is_ruined: bool,
    /// Listed for sale.
    pub is_for_sale: bool,
    /// Member of a nation.
    pub has_nation: bool,
    /// Protected from overclaim attacks.
    pub has_overclaim_shield: bool,
    /// Outsiders may teleport to the spawn.
    pub can_outsiders_spawn: bool,
}

/// Numeric stats on a town record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TownStats {
    /// Claimed town blocks.
    pub num_town_blocks: u32,
    /// Claim allowance.
    pub max_town_blocks: u32,
    /// Bonus blocks granted on top of the allowance.
    pub bonus_blocks: u32,
    /// Resident count.
    pub num_residents: u32,
    /// Trusted player count.
    pub num_trusted: u32,
    /// Outlaw count.
    pub num_outlaws: u32,
    /// Town bank balance in gold.
    pub balance: i64,
    /// Asking price while listed for sale.
    pub for_sale_price: Option<f64>,
}

/// Spawn point and claim geometry of a town.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TownCoordinates {
    /// Town spawn, if set.
    #[serde(deserialize_with = "Spawn::opt")]
    pub spawn: Option<Spawn>,
    /// Home block, if set.
    #[serde(deserialize_with = "BlockPos::opt")]
    pub home_block: Option<BlockPos>,
    /// Every claimed town block.
    pub town_blocks: Vec<BlockPos>,
}

//! The nation record.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::ids::{NationIdentifier, PlayerIdentifier, TownIdentifier};
use crate::raw::impl_record;
use crate::spatial::Spawn;

/// A fully decoded nation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nation {
    /// Nation name.
    pub name: String,
    /// Nation UUID.
    pub uuid: Uuid,
    /// Message board text, if set.
    pub board: Option<String>,
    /// Fill colour on the public map.
    pub dynmap_colour: String,
    /// Outline colour on the public map.
    pub dynmap_outline: String,
    /// Linked wiki URL, if set.
    pub wiki: Option<String>,
    /// The nation's leader.
    pub king: PlayerIdentifier,
    /// The capital town.
    pub capital: TownIdentifier,
    /// Lifecycle timestamps.
    pub timestamps: NationTimestamps,
    /// Boolean status flags.
    pub status: NationStatus,
    /// Numeric stats.
    pub stats: NationStats,
    /// Spawn geometry.
    pub coordinates: NationCoordinates,
    /// Every resident across the nation's towns.
    pub residents: Vec<PlayerIdentifier>,
    /// Member towns.
    pub towns: Vec<TownIdentifier>,
    /// Allied nations.
    pub allies: Vec<NationIdentifier>,
    /// Enemy nations.
    pub enemies: Vec<NationIdentifier>,
    /// Towns sanctioned by the nation.
    pub sanctioned: Vec<TownIdentifier>,
    /// Nation rank assignments, rank name to holders.
    #[serde(default)]
    pub ranks: BTreeMap<String, Vec<PlayerIdentifier>>,
    #[serde(skip)]
    raw: Value,
}

impl_record!(Nation, "nation");

/// Lifecycle timestamps on a nation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationTimestamps {
    /// Founding time.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub registered: DateTime<Utc>,
}

/// Boolean status flags on a nation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationStatus {
    /// Spawn is publicly visible.
    pub is_public: bool,
    /// Towns may join without invitation.
    pub is_open: bool,
    /// Neutral in wars.
    pub is_neutral: bool,
}

/// Numeric stats on a nation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationStats {
    /// Claimed town blocks across all member towns.
    pub num_town_blocks: u32,
    /// Resident count across all member towns.
    pub num_residents: u32,
    /// Member town count.
    pub num_towns: u32,
    /// Ally count.
    pub num_allies: u32,
    /// Enemy count.
    pub num_enemies: u32,
    /// Nation bank balance in gold.
    pub balance: i64,
}

/// Spawn geometry of a nation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NationCoordinates {
    /// Nation spawn, if set.
    #[serde(deserialize_with = "Spawn::opt")]
    pub spawn: Option<Spawn>,
}

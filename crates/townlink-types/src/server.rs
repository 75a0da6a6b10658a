//! The per-world server status record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::raw::impl_record;

/// A snapshot of one world's server state and aggregate stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatus {
    /// Server software version.
    pub version: String,
    /// Current moon phase name.
    pub moon_phase: String,
    /// Server clock timestamps.
    pub timestamps: ServerTimestamps,
    /// Weather flags.
    pub status: ServerWeather,
    /// Aggregate world stats.
    pub stats: ServerStats,
    /// Vote party progress.
    pub vote_party: VoteParty,
    #[serde(skip)]
    raw: Value,
}

impl_record!(ServerStatus, "server status");

/// Server clock timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTimestamps {
    /// When the next in-game new day begins.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub new_day_time: DateTime<Utc>,
    /// Milliseconds into the current in-game day.
    pub server_time_of_day: i64,
}

/// Weather flags on the server record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerWeather {
    /// A storm is active.
    pub has_storm: bool,
    /// Thunder is active.
    pub is_thundering: bool,
}

/// Aggregate world stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStats {
    /// World time in ticks, modulo the day length.
    pub time: i64,
    /// Total world time in ticks.
    pub full_time: i64,
    /// Player slot capacity.
    pub max_players: u32,
    /// Players currently online.
    pub num_online_players: u32,
    /// Townless players currently online.
    pub num_online_nomads: u32,
    /// Registered residents.
    pub num_residents: u32,
    /// Registered townless players.
    pub num_nomads: u32,
    /// Town count.
    pub num_towns: u32,
    /// Claimed town block count.
    pub num_town_blocks: u32,
    /// Nation count.
    pub num_nations: u32,
    /// Quarter count.
    pub num_quarters: u32,
    /// Quarter cuboid count.
    pub num_cuboids: u32,
}

/// Vote party progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteParty {
    /// Votes required to trigger a party.
    pub target: u32,
    /// Votes still needed.
    pub num_remaining: u32,
}

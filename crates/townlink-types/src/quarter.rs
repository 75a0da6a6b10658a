//! The quarter record.
//!
//! Quarters are sub-town plots defined as unions of cuboids, each with an
//! optional owner and its own trust list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::ids::{PlayerIdentifier, TownIdentifier};
use crate::raw::impl_record;
use crate::spatial::Cuboid;

/// A fully decoded quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quarter {
    /// Quarter name.
    pub name: String,
    /// Quarter UUID.
    pub uuid: Uuid,
    /// Quarter type (e.g. `"apartment"`, `"shop"`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Current owner, absent while unclaimed.
    #[serde(deserialize_with = "PlayerIdentifier::opt")]
    pub owner: Option<PlayerIdentifier>,
    /// The town the quarter belongs to.
    pub town: TownIdentifier,
    /// Lifecycle timestamps.
    pub timestamps: QuarterTimestamps,
    /// Boolean status flags.
    pub status: QuarterStatus,
    /// Numeric stats.
    pub stats: QuarterStats,
    /// Display colour as `[r, g, b]`.
    pub colour: Rgb,
    /// Players trusted in the quarter.
    pub trusted: Vec<PlayerIdentifier>,
    /// The block volumes making up the quarter.
    pub cuboids: Vec<Cuboid>,
    #[serde(skip)]
    raw: Value,
}

impl_record!(Quarter, "quarter");

/// Lifecycle timestamps on a quarter record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterTimestamps {
    /// Creation time.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub registered: DateTime<Utc>,
    /// When the quarter was last claimed, if ever.
    #[serde(with = "chrono::serde::ts_milliseconds_option", default)]
    pub claimed_at: Option<DateTime<Utc>>,
}

/// Boolean status flags on a quarter record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterStatus {
    /// Purchasable by players from outside the town.
    pub is_embassy: bool,
}

/// Numeric stats on a quarter record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterStats {
    /// Asking price, absent while not for sale.
    pub price: Option<i64>,
    /// Total volume in blocks.
    pub volume: u64,
    /// Number of cuboids in the quarter.
    pub num_cuboids: u32,
}

/// An RGB display colour, serialized on the wire as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

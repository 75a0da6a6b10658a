//! Record and identifier types for the Townlink map API client.
//!
//! This crate is the single source of truth for every value the API returns:
//! one record type per endpoint, lightweight identifier types for
//! relationship fields, and the spatial and permission wrappers they share.
//! Records are decoded once via their `from_raw` constructors and retain the
//! raw payload for forward-compatible field access.
//!
//! # Modules
//!
//! - [`ids`] -- Identifier types for referencing entities without fetching them
//! - [`player`], [`town`], [`nation`], [`quarter`] -- The core entity records
//! - [`discord`] -- Discord account links and their lookup keys
//! - [`location`] -- Map coordinate lookup results
//! - [`server`] -- The per-world server status record
//! - [`spatial`] -- Spawn points, block coordinates, cuboids
//! - [`perms`] -- Plot permission wrappers
//! - [`error`] -- The decode error type

pub mod discord;
pub mod error;
pub mod ids;
pub mod location;
pub mod nation;
pub mod perms;
pub mod player;
pub mod quarter;
mod raw;
pub mod server;
pub mod spatial;
pub mod town;

// Re-export all public types at crate root for convenience.
pub use discord::{DiscordLink, DiscordQuery, DiscordQueryKind};
pub use error::DecodeError;
pub use ids::{
    NationIdentifier, PlayerIdentifier, QuarterIdentifier, TownIdentifier,
    decode_identifier_list,
};
pub use location::LocationInfo;
pub use nation::{Nation, NationCoordinates, NationStats, NationStatus, NationTimestamps};
pub use perms::{ActionSet, Flags, Permissions};
pub use player::{Player, PlayerRanks, PlayerStats, PlayerStatus, PlayerTimestamps};
pub use quarter::{Quarter, QuarterStats, QuarterStatus, QuarterTimestamps, Rgb};
pub use server::{ServerStats, ServerStatus, ServerTimestamps, ServerWeather, VoteParty};
pub use spatial::{BlockPos, Cuboid, MapPoint, Spawn};
pub use town::{Town, TownCoordinates, TownStats, TownStatus, TownTimestamps};

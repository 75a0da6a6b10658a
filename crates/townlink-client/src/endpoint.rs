//! The bulk endpoint table.
//!
//! Every bulk-queryable collection is a variant here. Dispatching on this
//! enum replaces the runtime type discovery the service's older clients
//! used: every match over it is exhaustive, so adding an endpoint is a
//! compile-checked change.

use serde::{Deserialize, Serialize};

/// A bulk-queryable collection on the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    /// Player records.
    Players,
    /// Town records.
    Towns,
    /// Nation records.
    Nations,
    /// Quarter records.
    Quarters,
    /// Discord account links.
    Discord,
    /// Map coordinate lookups.
    Location,
}

impl Endpoint {
    /// The endpoint's path segment under the world base URL.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Players => "players",
            Self::Towns => "towns",
            Self::Nations => "nations",
            Self::Quarters => "quarters",
            Self::Discord => "discord",
            Self::Location => "location",
        }
    }

    /// The largest batch the service accepts for this endpoint in one
    /// request. Currently 100 across the board.
    pub const fn max_batch_size(self) -> usize {
        crate::batch::MAX_BATCH_SIZE
    }
}

impl core::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.path())
    }
}

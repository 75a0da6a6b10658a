//! Discord account links and the query shapes for looking them up.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::raw::impl_record;

/// One side or both of a Discord-to-Minecraft account link.
///
/// An unlinked account leaves the other half absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscordLink {
    /// Discord account ID, absent when no Discord account is linked.
    pub id: Option<String>,
    /// Minecraft account UUID, absent when no Minecraft account is linked.
    pub uuid: Option<Uuid>,
    #[serde(skip)]
    raw: Value,
}

impl_record!(DiscordLink, "discord link");

/// Which side of a link a [`DiscordQuery`] key identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscordQueryKind {
    /// The key is a Discord account ID.
    Discord,
    /// The key is a Minecraft account UUID.
    Minecraft,
}

/// One lookup key for the discord endpoint.
///
/// Serializes to the wire form `{"type": ..., "target": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordQuery {
    /// Which side of the link the target identifies.
    #[serde(rename = "type")]
    pub kind: DiscordQueryKind,
    /// The account ID or UUID to look up.
    pub target: String,
}

impl DiscordQuery {
    /// Build a lookup key.
    pub fn new(kind: DiscordQueryKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
        }
    }
}

//! The player record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::ids::{NationIdentifier, PlayerIdentifier, TownIdentifier};
use crate::perms::Permissions;
use crate::raw::impl_record;

/// A fully decoded player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Account name.
    pub name: String,
    /// Account UUID.
    pub uuid: Uuid,
    /// Title shown before the name, if any.
    pub title: Option<String>,
    /// Surname shown after the name, if any.
    pub surname: Option<String>,
    /// Name with title and surname applied.
    pub formatted_name: String,
    /// Free-form about text, if the player has set one.
    pub about: Option<String>,
    /// The player's town, absent for nomads.
    #[serde(deserialize_with = "TownIdentifier::opt")]
    pub town: Option<TownIdentifier>,
    /// The player's nation, absent when townless or the town has none.
    #[serde(deserialize_with = "NationIdentifier::opt")]
    pub nation: Option<NationIdentifier>,
    /// Lifecycle timestamps.
    pub timestamps: PlayerTimestamps,
    /// Boolean status flags.
    pub status: PlayerStatus,
    /// Numeric stats.
    pub stats: PlayerStats,
    /// Personal plot permissions.
    pub perms: Permissions,
    /// Held town and nation ranks.
    pub ranks: PlayerRanks,
    /// Friends list, as lightweight references.
    pub friends: Vec<PlayerIdentifier>,
    #[serde(skip)]
    raw: Value,
}

impl_record!(Player, "player");

/// Lifecycle timestamps on a player record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerTimestamps {
    /// First join.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub registered: DateTime<Utc>,
    /// When the player joined their current town, if in one.
    #[serde(with = "chrono::serde::ts_milliseconds_option", default)]
    pub joined_town_at: Option<DateTime<Utc>>,
    /// Last seen online; absent while the player is online.
    #[serde(with = "chrono::serde::ts_milliseconds_option", default)]
    pub last_online: Option<DateTime<Utc>>,
}

/// Boolean status flags on a player record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatus {
    /// Currently online.
    pub is_online: bool,
    /// Server-controlled NPC account.
    #[serde(rename = "isNPC")]
    pub is_npc: bool,
    /// Mayor of their town.
    pub is_mayor: bool,
    /// Leader of their nation.
    pub is_king: bool,
    /// Member of a town.
    pub has_town: bool,
    /// Member of a nation.
    pub has_nation: bool,
}

/// Numeric stats on a player record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    /// Account balance in gold.
    pub balance: i64,
    /// Number of friends.
    pub num_friends: u32,
}

/// Town and nation ranks held by a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRanks {
    /// Ranks within the player's town.
    pub town_ranks: Vec<String>,
    /// Ranks within the player's nation.
    pub nation_ranks: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn player_fixture() -> Value {
        json!({
            "name": "Fix",
            "uuid": "a6a6ab24-0000-4000-8000-9e1a0e1a0e1a",
            "title": null,
            "surname": null,
            "formattedName": "Fix",
            "about": "hello",
            "town": {"name": "Harbor", "uuid": "b6a6ab24-0000-4000-8000-9e1a0e1a0e1a"},
            "nation": {"name": null, "uuid": null},
            "timestamps": {
                "registered": 1_577_836_800_000_i64,
                "joinedTownAt": 1_609_459_200_000_i64,
                "lastOnline": null
            },
            "status": {
                "isOnline": true,
                "isNPC": false,
                "isMayor": false,
                "isKing": false,
                "hasTown": true,
                "hasNation": false
            },
            "stats": {"balance": 250, "numFriends": 1},
            "perms": {
                "build": [false, false, false, false],
                "destroy": [false, false, false, false],
                "switch": [false, false, false, false],
                "itemUse": [false, false, false, false],
                "flags": {"pvp": false, "explosion": false, "fire": false, "mobs": false}
            },
            "ranks": {"townRanks": ["councillor"], "nationRanks": []},
            "friends": [
                {"name": "Pal", "uuid": "c6a6ab24-0000-4000-8000-9e1a0e1a0e1a"}
            ]
        })
    }

    #[test]
    fn decodes_fixture_with_nullable_fields() {
        let raw = player_fixture();
        let player = Player::from_raw(raw.clone()).ok();
        assert!(player.is_some(), "fixture should decode");
        let Some(player) = player else { return };

        assert_eq!(player.name, "Fix");
        assert_eq!(player.title, None);
        assert!(player.town.as_ref().is_some_and(|t| !t.is_empty()));
        assert_eq!(player.nation, None, "all-null nation object decodes to None");
        assert_eq!(player.timestamps.last_online, None);
        assert!(player.timestamps.joined_town_at.is_some());
        assert_eq!(player.stats.balance, 250);
        assert_eq!(player.ranks.town_ranks, vec!["councillor".to_owned()]);
        assert_eq!(player.friends.len(), 1);
        assert_eq!(player.raw(), &raw, "raw payload is retained");
    }

    #[test]
    fn reserializing_a_decoded_player_decodes_identically() {
        let first = Player::from_raw(player_fixture()).ok();
        let reencoded = first
            .as_ref()
            .and_then(|p| serde_json::to_value(p).ok())
            .unwrap_or_default();
        let second = Player::from_raw(reencoded).ok();

        let fields = |p: &Player| {
            (
                p.name.clone(),
                p.uuid,
                p.town.clone(),
                p.stats,
                p.timestamps,
                p.friends.clone(),
            )
        };
        assert_eq!(
            first.as_ref().map(fields),
            second.as_ref().map(fields),
            "no field corruption across encode and decode"
        );
        assert!(second.is_some());
    }

    #[test]
    fn missing_required_field_is_a_decode_error() {
        let mut raw = player_fixture();
        if let Some(map) = raw.as_object_mut() {
            map.remove("uuid");
        }
        let result = Player::from_raw(raw);
        assert!(result.is_err(), "required fields never default silently");
    }
}

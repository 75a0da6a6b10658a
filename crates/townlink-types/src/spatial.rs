//! Spatial wrappers: spawn points, block coordinates, cuboids.

use serde::{Deserialize, Serialize};

/// A spawn point inside a world.
///
/// Towns and nations expose their spawn under `coordinates.spawn`; when no
/// spawn is set the API nulls every field of the object, which decodes to
/// `None` on the owning record (see [`Spawn::opt`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spawn {
    /// World the spawn is in.
    pub world: String,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
    /// Camera pitch, when recorded.
    pub pitch: Option<f64>,
    /// Camera yaw, when recorded.
    pub yaw: Option<f64>,
}

/// Wire shape of a spawn object where every field may be null.
#[derive(Deserialize)]
struct MaybeSpawn {
    world: Option<String>,
    x: Option<f64>,
    y: Option<f64>,
    z: Option<f64>,
    pitch: Option<f64>,
    yaw: Option<f64>,
}

impl Spawn {
    /// Deserialize a spawn slot, mapping the all-null object form (and a
    /// plain `null`) to `None`.
    ///
    /// A null `world` marks an unset spawn, matching the API's contract.
    pub fn opt<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let Some(raw) = Option::<MaybeSpawn>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let Some(world) = raw.world else {
            return Ok(None);
        };

        Ok(Some(Self {
            world,
            x: raw.x.unwrap_or_default(),
            y: raw.y.unwrap_or_default(),
            z: raw.z.unwrap_or_default(),
            pitch: raw.pitch,
            yaw: raw.yaw,
        }))
    }
}

/// A block-grid coordinate pair, serialized on the wire as `[x, z]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct BlockPos {
    /// X block coordinate.
    pub x: i32,
    /// Z block coordinate.
    pub z: i32,
}

impl From<[i32; 2]> for BlockPos {
    fn from([x, z]: [i32; 2]) -> Self {
        Self { x, z }
    }
}

impl From<BlockPos> for [i32; 2] {
    fn from(pos: BlockPos) -> Self {
        [pos.x, pos.z]
    }
}

impl BlockPos {
    /// Deserialize an `[x, z]` pair whose elements may be null, mapping the
    /// null forms to `None`.
    ///
    /// Used for a town's home block, which the API nulls element-wise when
    /// unset.
    pub fn opt<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Option<(Option<i32>, Option<i32>)> = Deserialize::deserialize(deserializer)?;
        Ok(match raw {
            Some((Some(x), Some(z))) => Some(Self { x, z }),
            _ => None,
        })
    }
}

/// An axis-aligned block volume, described by two opposite corners.
///
/// Quarters are unions of cuboids; corners arrive as `[x, y, z]` triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cuboid {
    /// First corner, `[x, y, z]`.
    pub pos1: [i32; 3],
    /// Opposite corner, `[x, y, z]`.
    pub pos2: [i32; 3],
}

/// A horizontal map point, as returned by the location endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    /// X coordinate.
    pub x: f64,
    /// Z coordinate.
    pub z: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct SpawnHolder {
        #[serde(deserialize_with = "Spawn::opt")]
        spawn: Option<Spawn>,
    }

    #[test]
    fn unset_spawn_decodes_to_none() {
        let holder: Result<SpawnHolder, _> = serde_json::from_value(json!({
            "spawn": {"world": null, "x": null, "y": null, "z": null, "pitch": null, "yaw": null}
        }));
        assert!(matches!(holder, Ok(SpawnHolder { spawn: None })));
    }

    #[test]
    fn set_spawn_decodes_fields() {
        let holder: Result<SpawnHolder, _> = serde_json::from_value(json!({
            "spawn": {"world": "world", "x": 100.5, "y": 64.0, "z": -20.0, "pitch": 0.0, "yaw": 90.0}
        }));
        let spawn = holder.ok().and_then(|h| h.spawn);
        assert!(spawn.as_ref().is_some_and(|s| s.world == "world"));
        assert!(spawn.is_some_and(|s| (s.x - 100.5).abs() < f64::EPSILON));
    }

    #[test]
    fn block_pos_roundtrips_as_array() {
        let pos: Result<BlockPos, _> = serde_json::from_value(json!([12, -7]));
        assert_eq!(pos.ok(), Some(BlockPos { x: 12, z: -7 }));

        let back = serde_json::to_value(BlockPos { x: 12, z: -7 }).unwrap_or_default();
        assert_eq!(back, json!([12, -7]));
    }

    #[derive(Deserialize)]
    struct HomeBlockHolder {
        #[serde(deserialize_with = "BlockPos::opt")]
        home_block: Option<BlockPos>,
    }

    #[test]
    fn null_home_block_decodes_to_none() {
        let holder: Result<HomeBlockHolder, _> =
            serde_json::from_value(json!({"home_block": [null, null]}));
        assert!(matches!(holder, Ok(HomeBlockHolder { home_block: None })));
    }
}

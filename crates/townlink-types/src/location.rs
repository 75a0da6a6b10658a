//! The location lookup result.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::{NationIdentifier, TownIdentifier};
use crate::raw::impl_record;
use crate::spatial::MapPoint;

/// What claims, if anything, cover one queried map coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationInfo {
    /// The queried point, echoed back by the service.
    pub location: MapPoint,
    /// True when no town claims the point.
    pub is_wilderness: bool,
    /// The claiming town, absent in wilderness.
    #[serde(deserialize_with = "TownIdentifier::opt")]
    pub town: Option<TownIdentifier>,
    /// The claiming town's nation, absent in wilderness or for
    /// nationless towns.
    #[serde(deserialize_with = "NationIdentifier::opt")]
    pub nation: Option<NationIdentifier>,
    #[serde(skip)]
    raw: Value,
}

impl_record!(LocationInfo, "location info");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wilderness_point_has_no_claims() {
        let raw = json!({
            "location": {"x": 500.0, "z": 500.0},
            "isWilderness": true,
            "town": {"name": null, "uuid": null},
            "nation": {"name": null, "uuid": null}
        });

        let info = LocationInfo::from_raw(raw).ok();
        assert!(info.is_some(), "fixture should decode");
        let Some(info) = info else { return };

        assert!(info.is_wilderness);
        assert_eq!(info.town, None);
        assert_eq!(info.nation, None);
    }

    #[test]
    fn claimed_point_carries_town() {
        let raw = json!({
            "location": {"x": 0.0, "z": 0.0},
            "isWilderness": false,
            "town": {"name": "Harbor", "uuid": "b6a6ab24-0000-4000-8000-9e1a0e1a0e1a"},
            "nation": {"name": null, "uuid": null}
        });

        let info = LocationInfo::from_raw(raw).ok();
        let town = info.and_then(|i| i.town);
        assert!(town.is_some_and(|t| t.name.as_deref() == Some("Harbor")));
    }
}

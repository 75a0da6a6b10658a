//! Lightweight identifier types for referencing entities without fetching them.
//!
//! Relationship fields in the API (a town's residents, a nation's allies, a
//! quarter's owner) carry `{name, uuid}` pairs instead of full records.
//! Resolving an identifier into a record is a separate, caller-initiated
//! fetch, which keeps record decoding constant in network cost.
//!
//! Each entity kind gets its own identifier type so the compiler prevents,
//! say, passing a town reference where a player reference is expected.

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

/// Generates an identifier type for one entity kind.
macro_rules! define_identifier {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name {
            /// Display name, when known.
            pub name: Option<String>,
            /// Canonical UUID, when known.
            pub uuid: Option<Uuid>,
        }

        impl $name {
            /// Reference an entity by display name alone.
            pub fn of_name(name: impl Into<String>) -> Self {
                Self {
                    name: Some(name.into()),
                    uuid: None,
                }
            }

            /// Reference an entity by UUID alone.
            pub const fn of_uuid(uuid: Uuid) -> Self {
                Self {
                    name: None,
                    uuid: Some(uuid),
                }
            }

            /// Build a fully resolved reference with both halves.
            pub fn new(name: impl Into<String>, uuid: Uuid) -> Self {
                Self {
                    name: Some(name.into()),
                    uuid: Some(uuid),
                }
            }

            /// True when both halves are absent.
            ///
            /// The API renders "no such entity" relationship slots as an
            /// object with `name` and `uuid` both null.
            pub const fn is_empty(&self) -> bool {
                self.name.is_none() && self.uuid.is_none()
            }

            /// The lookup key for this reference: the UUID when present,
            /// otherwise the name. `None` for an empty reference.
            pub fn query_key(&self) -> Option<String> {
                self.uuid
                    .map(|uuid| uuid.to_string())
                    .or_else(|| self.name.clone())
            }

            /// Deserialize an identifier slot, mapping both absence forms
            /// to `None`.
            ///
            /// For record fields like a town's nation or a quarter's owner
            /// the API keeps the object but nulls both halves; a plain
            /// `null` is accepted as well.
            pub fn opt<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let id = Option::<Self>::deserialize(deserializer)?;
                Ok(id.filter(|id| !id.is_empty()))
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match (&self.name, &self.uuid) {
                    (Some(name), _) => write!(f, "{name}"),
                    (None, Some(uuid)) => write!(f, "{uuid}"),
                    (None, None) => write!(f, "<empty>"),
                }
            }
        }
    };
}

define_identifier! {
    /// Reference to a player by name and/or UUID.
    PlayerIdentifier
}

define_identifier! {
    /// Reference to a town by name and/or UUID.
    TownIdentifier
}

define_identifier! {
    /// Reference to a nation by name and/or UUID.
    NationIdentifier
}

define_identifier! {
    /// Reference to a quarter by name and/or UUID.
    QuarterIdentifier
}

/// Decode a JSON array of identifier objects, skipping malformed elements.
///
/// Listing endpoints return thousands of `{name, uuid}` objects; one
/// malformed entry should not discard the rest of the list.
pub fn decode_identifier_list<T: DeserializeOwned>(array: &[Value]) -> Vec<T> {
    array
        .iter()
        .filter_map(|element| T::deserialize(element).ok())
        .collect()
}

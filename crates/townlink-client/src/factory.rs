//! Building typed records from raw payloads, keyed by endpoint.
//!
//! The service's older clients discovered record types at runtime through
//! reflection; here the mapping is an exhaustive match on [`Endpoint`], so
//! the compiler proves every endpoint has a record type and vice versa.

use serde_json::Value;
use townlink_types::{
    DecodeError, DiscordLink, LocationInfo, Nation, Player, Quarter, Town,
};

use crate::endpoint::Endpoint;

/// Binds a record type to the bulk endpoint that serves it.
///
/// Implemented by the six record types; the typed fetch methods on the
/// client use it to pick the endpoint and decode each slot.
pub trait BulkEntity: Sized {
    /// The endpoint serving this record type.
    const ENDPOINT: Endpoint;

    /// Decode one record from its raw payload.
    fn from_raw(raw: Value) -> Result<Self, DecodeError>;
}

/// Wires one record type to its endpoint.
macro_rules! impl_bulk_entity {
    ($record:ty, $endpoint:expr) => {
        impl BulkEntity for $record {
            const ENDPOINT: Endpoint = $endpoint;

            fn from_raw(raw: Value) -> Result<Self, DecodeError> {
                Self::from_raw(raw)
            }
        }
    };
}

impl_bulk_entity!(Player, Endpoint::Players);
impl_bulk_entity!(Town, Endpoint::Towns);
impl_bulk_entity!(Nation, Endpoint::Nations);
impl_bulk_entity!(Quarter, Endpoint::Quarters);
impl_bulk_entity!(DiscordLink, Endpoint::Discord);
impl_bulk_entity!(LocationInfo, Endpoint::Location);

/// A record from any bulk endpoint.
///
/// For callers that pick the endpoint at runtime; statically typed callers
/// use the typed client methods instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// A player record.
    Player(Player),
    /// A town record.
    Town(Town),
    /// A nation record.
    Nation(Nation),
    /// A quarter record.
    Quarter(Quarter),
    /// A discord link record.
    DiscordLink(DiscordLink),
    /// A location lookup result.
    LocationInfo(LocationInfo),
}

impl Record {
    /// The endpoint this record came from.
    pub const fn endpoint(&self) -> Endpoint {
        match self {
            Self::Player(_) => Endpoint::Players,
            Self::Town(_) => Endpoint::Towns,
            Self::Nation(_) => Endpoint::Nations,
            Self::Quarter(_) => Endpoint::Quarters,
            Self::DiscordLink(_) => Endpoint::Discord,
            Self::LocationInfo(_) => Endpoint::Location,
        }
    }
}

/// Build a typed record from a raw payload, dispatching on the endpoint
/// tag supplied by the caller (never on the payload's shape).
pub fn build(endpoint: Endpoint, raw: Value) -> Result<Record, DecodeError> {
    match endpoint {
        Endpoint::Players => Player::from_raw(raw).map(Record::Player),
        Endpoint::Towns => Town::from_raw(raw).map(Record::Town),
        Endpoint::Nations => Nation::from_raw(raw).map(Record::Nation),
        Endpoint::Quarters => Quarter::from_raw(raw).map(Record::Quarter),
        Endpoint::Discord => DiscordLink::from_raw(raw).map(Record::DiscordLink),
        Endpoint::Location => LocationInfo::from_raw(raw).map(Record::LocationInfo),
    }
}

//! Shared decoding machinery for record types.
//!
//! Every record is decoded once from a `serde_json::Value` and keeps that
//! value alongside the typed fields, so callers can read fields the API adds
//! before this crate learns about them.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::DecodeError;

/// Decode a payload into a typed record, tagging failures with the record name.
pub(crate) fn decode<T: DeserializeOwned>(
    entity: &'static str,
    raw: &Value,
) -> Result<T, DecodeError> {
    T::deserialize(raw).map_err(|source| DecodeError::new(entity, source))
}

/// Generates the `from_raw` constructor and `raw` accessor for a record type.
///
/// The record struct must carry a `#[serde(skip)] raw: serde_json::Value`
/// field for the retained payload.
macro_rules! impl_record {
    ($name:ident, $entity:literal) => {
        impl $name {
            /// Decode a record from its raw API payload, retaining the payload.
            ///
            /// # Errors
            ///
            /// Returns [`crate::DecodeError`] if the payload does not match
            /// this record's schema.
            pub fn from_raw(raw: serde_json::Value) -> Result<Self, crate::DecodeError> {
                let mut record: Self = crate::raw::decode($entity, &raw)?;
                record.raw = raw;
                Ok(record)
            }

            /// The raw payload this record was decoded from.
            ///
            /// Useful for fields the API exposes that this crate does not
            /// model yet.
            pub const fn raw(&self) -> &serde_json::Value {
                &self.raw
            }
        }
    };
}

pub(crate) use impl_record;

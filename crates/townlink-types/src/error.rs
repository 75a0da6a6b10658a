//! Error type for record decoding.
//!
//! Every `from_raw` constructor in this crate returns [`DecodeError`] when a
//! payload does not match the record's schema. Fields the API marks nullable
//! decode to `None` instead; anything else missing or mistyped is an error,
//! never a silent default.

/// A raw API payload did not match the expected record shape.
#[derive(Debug, thiserror::Error)]
#[error("malformed {entity} record: {source}")]
pub struct DecodeError {
    /// Which record type was being decoded (e.g. `"player"`).
    pub entity: &'static str,
    /// The underlying deserialization failure, with its field path.
    #[source]
    pub source: serde_json::Error,
}

impl DecodeError {
    /// Build a decode error for the named record type.
    pub const fn new(entity: &'static str, source: serde_json::Error) -> Self {
        Self { entity, source }
    }
}

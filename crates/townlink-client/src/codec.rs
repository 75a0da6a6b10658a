//! Wire encoding and decoding for bulk requests.
//!
//! Every bulk endpoint speaks the same envelope: the request is
//! `{"query": [...]}` and the response is a JSON array with one element per
//! submitted key. The key shapes differ (plain strings, discord
//! `{type, target}` pairs, `[x, z]` coordinate pairs) but all of them are
//! just `Serialize`, so one codec covers every endpoint.

use serde::Serialize;
use serde_json::Value;

use crate::batch::Batch;
use crate::error::ClientError;

/// The request envelope for every bulk endpoint.
#[derive(Serialize)]
struct RequestBody<'a, K> {
    query: &'a [K],
}

/// Serialize a batch into the wire request body.
pub fn encode<K: Serialize>(batch: &Batch<K>) -> Result<String, ClientError> {
    serde_json::to_string(&RequestBody { query: &batch.keys })
        .map_err(|e| ClientError::Encode(e.to_string()))
}

/// Decode a bulk response body into one slot per submitted key.
///
/// The service returns `null` for a key it could not resolve; that becomes
/// an explicit `None` at the same position, never an omission. Any element
/// that is neither an object nor null fails the decode with its position.
pub fn decode(url: &str, body: &str) -> Result<Vec<Option<Value>>, ClientError> {
    let parsed: Value = serde_json::from_str(body).map_err(|e| ClientError::Decode {
        url: url.to_owned(),
        offset: 0,
        reason: format!("response body is not valid JSON: {e}"),
    })?;

    let Value::Array(elements) = parsed else {
        return Err(ClientError::Decode {
            url: url.to_owned(),
            offset: 0,
            reason: "expected a top-level JSON array".to_owned(),
        });
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(offset, element)| match element {
            Value::Null => Ok(None),
            Value::Object(_) => Ok(Some(element)),
            other => Err(ClientError::Decode {
                url: url.to_owned(),
                offset,
                reason: format!("expected an object or null, got {}", kind_of(&other)),
            }),
        })
        .collect()
}

/// Human-readable JSON value kind for decode errors.
const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use townlink_types::{DiscordQuery, DiscordQueryKind};

    const URL: &str = "https://api.example/v3/aurora/players";

    fn batch_of<K>(keys: Vec<K>) -> Batch<K> {
        Batch { index: 0, keys }
    }

    #[test]
    fn string_keys_encode_to_query_array() {
        let batch = batch_of(vec!["Fix".to_owned(), "Harbor".to_owned()]);
        let body = encode(&batch).unwrap_or_default();
        let parsed: Value = serde_json::from_str(&body).unwrap_or_default();
        assert_eq!(parsed, json!({"query": ["Fix", "Harbor"]}));
    }

    #[test]
    fn discord_keys_encode_to_type_target_pairs() {
        let batch = batch_of(vec![
            DiscordQuery::new(DiscordQueryKind::Discord, "123"),
            DiscordQuery::new(DiscordQueryKind::Minecraft, "a6a6ab24"),
        ]);
        let body = encode(&batch).unwrap_or_default();
        let parsed: Value = serde_json::from_str(&body).unwrap_or_default();
        assert_eq!(
            parsed,
            json!({"query": [
                {"type": "discord", "target": "123"},
                {"type": "minecraft", "target": "a6a6ab24"}
            ]})
        );
    }

    #[test]
    fn coordinate_keys_encode_to_pairs() {
        let batch = batch_of(vec![(500, 500), (0, -20)]);
        let body = encode(&batch).unwrap_or_default();
        let parsed: Value = serde_json::from_str(&body).unwrap_or_default();
        assert_eq!(parsed, json!({"query": [[500, 500], [0, -20]]}));
    }

    #[test]
    fn nulls_stay_at_their_positions() {
        let body = r#"[{"name": "a"}, null, {"name": "c"}]"#;
        let slots = decode(URL, body).unwrap_or_default();
        assert_eq!(slots.len(), 3);
        assert!(slots.first().is_some_and(Option::is_some));
        assert_eq!(slots.get(1), Some(&None));
        assert!(slots.get(2).is_some_and(Option::is_some));
    }

    #[test]
    fn non_array_body_is_a_decode_error() {
        let result = decode(URL, r#"{"message": "boom"}"#);
        assert!(matches!(
            result,
            Err(ClientError::Decode { offset: 0, .. })
        ));
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        let result = decode(URL, "<html>504</html>");
        assert!(matches!(result, Err(ClientError::Decode { .. })));
    }

    #[test]
    fn scalar_element_is_a_decode_error_with_offset() {
        let result = decode(URL, r#"[{"name": "a"}, 42]"#);
        assert!(matches!(
            result,
            Err(ClientError::Decode { offset: 1, .. })
        ));
    }
}

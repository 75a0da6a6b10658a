//! End-to-end tests of the bulk fetch pipeline over a scripted transport.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use uuid::Uuid;

use townlink_client::{
    Client, ClientConfig, ClientError, RawResponse, RemoteKind, Transport,
};
use townlink_client::types::DiscordQueryKind;

/// Scripted in-process transport.
///
/// Answers each endpoint from the query itself: discord targets echo back
/// as links, players resolve to null, location points are wilderness except
/// the origin. Optionally fails any batch containing a marker target and
/// sleeps before answering.
#[derive(Default)]
struct ScriptedTransport {
    post_bodies: Mutex<Vec<String>>,
    calls: AtomicUsize,
    fail_on_target: Option<String>,
    delay: Option<Duration>,
}

impl ScriptedTransport {
    fn recorded_query_lens(&self) -> Vec<usize> {
        self.post_bodies
            .lock()
            .map(|bodies| {
                bodies
                    .iter()
                    .map(|body| {
                        serde_json::from_str::<Value>(body)
                            .ok()
                            .and_then(|v| v.get("query").and_then(Value::as_array).map(Vec::len))
                            .unwrap_or(0)
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn answer(&self, url: &str, query: &[Value]) -> Vec<Value> {
        query
            .iter()
            .map(|key| {
                if url.ends_with("/discord") {
                    let target = key.get("target").and_then(Value::as_str).unwrap_or("");
                    json!({"id": target, "uuid": null})
                } else if url.ends_with("/location") {
                    let x = key.get(0).and_then(Value::as_i64).unwrap_or(0);
                    let z = key.get(1).and_then(Value::as_i64).unwrap_or(0);
                    if x == 0 && z == 0 {
                        json!({
                            "location": {"x": 0.0, "z": 0.0},
                            "isWilderness": false,
                            "town": {"name": "Harbor", "uuid": "b6a6ab24-0000-4000-8000-9e1a0e1a0e1a"},
                            "nation": {"name": null, "uuid": null}
                        })
                    } else {
                        json!({
                            "location": {"x": x, "z": z},
                            "isWilderness": true,
                            "town": {"name": null, "uuid": null},
                            "nation": {"name": null, "uuid": null}
                        })
                    }
                } else {
                    // Players (and anything else scripted as unresolvable).
                    Value::Null
                }
            })
            .collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, _url: &str) -> Result<RawResponse, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(RawResponse {
            status: 200,
            body: "[]".to_owned(),
        })
    }

    async fn post(&self, url: &str, body: String) -> Result<RawResponse, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut bodies) = self.post_bodies.lock() {
            bodies.push(body.clone());
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let parsed: Value = serde_json::from_str(&body).unwrap_or_default();
        let query = parsed
            .get("query")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        if let Some(marker) = &self.fail_on_target {
            let hit = query.iter().any(|key| {
                key.as_str() == Some(marker.as_str())
                    || key.get("target").and_then(Value::as_str) == Some(marker.as_str())
            });
            if hit {
                return Ok(RawResponse {
                    status: 504,
                    body: "gateway timeout".to_owned(),
                });
            }
        }

        Ok(RawResponse {
            status: 200,
            body: Value::Array(self.answer(url, &query)).to_string(),
        })
    }
}

fn client_over(transport: Arc<ScriptedTransport>, config: ClientConfig) -> Client {
    Client::with_transport(config, transport)
}

#[tokio::test]
async fn two_hundred_fifty_keys_split_into_three_posts() {
    let transport = Arc::new(ScriptedTransport::default());
    let client = client_over(Arc::clone(&transport), ClientConfig::default());

    let targets: Vec<String> = (0..250).map(|i| format!("t{i}")).collect();
    let links = client
        .discord_links(DiscordQueryKind::Discord, &targets)
        .await
        .unwrap_or_default();

    assert_eq!(transport.recorded_query_lens(), vec![100, 100, 50]);
    assert_eq!(links.len(), 250, "one slot per key");

    // Alignment survives batching: slot i carries target i.
    for probe in [0_usize, 99, 100, 249] {
        let got = links
            .get(probe)
            .and_then(|slot| slot.as_ref())
            .and_then(|link| link.id.as_deref());
        let expected = format!("t{probe}");
        assert_eq!(got, Some(expected.as_str()), "slot {probe}");
    }
}

#[tokio::test]
async fn unknown_player_is_an_absence_marker_not_an_error() {
    let transport = Arc::new(ScriptedTransport::default());
    let client = client_over(transport, ClientConfig::default());

    let result = client.players_by_uuids(&[Uuid::nil()]).await;
    let slots = result.unwrap_or_default();
    assert_eq!(slots.len(), 1);
    assert!(slots.first().is_some_and(Option::is_none));
}

#[tokio::test]
async fn failing_middle_batch_fails_the_whole_fetch() {
    let transport = Arc::new(ScriptedTransport {
        fail_on_target: Some("t2".to_owned()),
        ..ScriptedTransport::default()
    });
    let client = client_over(
        Arc::clone(&transport),
        ClientConfig::default().with_batch_size(1),
    );

    let targets: Vec<String> = (0..5).map(|i| format!("t{i}")).collect();
    let err = client
        .discord_links(DiscordQueryKind::Discord, &targets)
        .await
        .err();

    assert!(
        matches!(err, Some(ClientError::Remote { batch: Some(2), status: 504, .. })),
        "exactly one remote error with the failing batch index"
    );
    assert_eq!(
        err.as_ref().and_then(|e| e.remote_kind()),
        Some(RemoteKind::GatewayTimeout)
    );
}

#[tokio::test]
async fn empty_key_set_makes_no_network_calls() {
    let transport = Arc::new(ScriptedTransport::default());
    let client = client_over(Arc::clone(&transport), ClientConfig::default());

    let empty: [&str; 0] = [];
    let result = client.players(&empty).await;
    assert!(matches!(result, Ok(ref slots) if slots.is_empty()));
    assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn location_lookup_distinguishes_wilderness_from_claims() {
    let transport = Arc::new(ScriptedTransport::default());
    let client = client_over(transport, ClientConfig::default());

    let infos = client
        .location_info(&[(500, 500), (0, 0)])
        .await
        .unwrap_or_default();
    assert_eq!(infos.len(), 2);

    let wild = infos.first().and_then(|slot| slot.as_ref());
    assert!(wild.is_some_and(|info| info.is_wilderness && info.town.is_none()));

    let claimed = infos.get(1).and_then(|slot| slot.as_ref());
    assert!(claimed.is_some_and(|info| {
        !info.is_wilderness
            && info
                .town
                .as_ref()
                .is_some_and(|town| town.name.as_deref() == Some("Harbor"))
    }));
}

#[tokio::test]
async fn fetch_deadline_aborts_slow_fetches() {
    let transport = Arc::new(ScriptedTransport {
        delay: Some(Duration::from_millis(200)),
        ..ScriptedTransport::default()
    });
    let client = client_over(
        transport,
        ClientConfig::default().with_fetch_deadline(Duration::from_millis(50)),
    );

    let result = client.towns(&["Harbor"]).await;
    assert!(matches!(result, Err(ClientError::DeadlineExceeded)));
}

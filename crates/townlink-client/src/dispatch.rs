//! The concurrency core: one request per batch, bounded fan-out, in-order
//! collection.
//!
//! Batches are independent, so requests run concurrently up to the
//! configured limit. Results come back ordered by batch index whatever the
//! completion order, because the stream is buffered in order rather than
//! unordered. The first failing batch aborts the whole dispatch: the error
//! propagates, the stream is dropped, and dropping it cancels every request
//! still in flight. There is no partial-success contract at this layer.

use futures::StreamExt;
use futures::stream;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::batch::Batch;
use crate::codec;
use crate::error::ClientError;
use crate::transport::Transport;

/// Decoded slots for one batch, one per submitted key.
pub(crate) type BatchRecords = Vec<Option<Value>>;

/// Execute every batch against `url`, at most `concurrency` in flight.
///
/// Returns per-batch record slots in batch-index order, or the first
/// failure.
pub(crate) async fn dispatch<K: Serialize>(
    transport: &dyn Transport,
    url: &str,
    batches: Vec<Batch<K>>,
    concurrency: usize,
) -> Result<Vec<BatchRecords>, ClientError> {
    let total = batches.len();
    let mut results = Vec::with_capacity(total);

    let mut in_order = stream::iter(
        batches
            .into_iter()
            .map(|batch| run_batch(transport, url, batch)),
    )
    .buffered(concurrency.max(1));

    while let Some(outcome) = in_order.next().await {
        results.push(outcome?);
    }

    debug!(url = url, batches = total, "all batches completed");
    Ok(results)
}

/// Encode, send and decode one batch.
async fn run_batch<K: Serialize>(
    transport: &dyn Transport,
    url: &str,
    batch: Batch<K>,
) -> Result<BatchRecords, ClientError> {
    let index = batch.index;
    let body = codec::encode(&batch)?;

    debug!(url = url, batch = index, keys = batch.keys.len(), "dispatching batch");
    let response = transport.post(url, body).await?;

    if !response.is_success() {
        warn!(
            url = url,
            batch = index,
            status = response.status,
            "batch request failed"
        );
        return Err(ClientError::Remote {
            status: response.status,
            url: url.to_owned(),
            body: response.body,
            batch: Some(index),
        });
    }

    codec::decode(url, &response.body)
}

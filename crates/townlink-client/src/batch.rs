//! Splitting a key list into request-sized batches.

/// Hard per-request key cap imposed by the service.
pub const MAX_BATCH_SIZE: usize = 100;

/// One request-sized slice of a fetch's key list.
///
/// Tagged with its position in the overall split so results reassemble
/// deterministically however the underlying requests complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch<K> {
    /// 0-based position in the overall split.
    pub index: usize,
    /// The keys in this batch, in caller order.
    pub keys: Vec<K>,
}

/// Split `keys` into batches of at most `max_batch_size` keys.
///
/// The batch size is clamped to `[1, MAX_BATCH_SIZE]`. Batches partition
/// the input exactly: batch `i` holds keys `[i*size, min((i+1)*size, n))`
/// in original order, and only the last batch may be short. An empty input
/// yields no batches.
pub fn split<K: Clone>(keys: &[K], max_batch_size: usize) -> Vec<Batch<K>> {
    let size = max_batch_size.clamp(1, MAX_BATCH_SIZE);
    keys.chunks(size)
        .enumerate()
        .map(|(index, chunk)| Batch {
            index,
            keys: chunk.to_vec(),
        })
        .collect()
}

//! Fan-in: concatenating per-batch results into one output.
//!
//! The dispatcher already returns batches in index order and stops at the
//! first failure, so assembly is a straight concatenation and never sees a
//! partial set. Within a batch the record order is whatever the service
//! returned for that batch.

use serde_json::Value;

/// Concatenate per-batch record slots in batch-index order.
///
/// Null slots (unresolved keys) pass through at their positions, so the
/// output length is the sum of the batch response lengths and, when the
/// service honours its one-element-per-key contract, equals the number of
/// keys submitted.
pub(crate) fn concatenate(batches: Vec<Vec<Option<Value>>>) -> Vec<Option<Value>> {
    batches.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn batches_concatenate_in_order() {
        let batches = vec![
            vec![Some(json!({"i": 0})), Some(json!({"i": 1}))],
            vec![Some(json!({"i": 2}))],
            vec![Some(json!({"i": 3})), Some(json!({"i": 4}))],
        ];

        let out = concatenate(batches);
        let order: Vec<Option<i64>> = out
            .iter()
            .map(|slot| slot.as_ref().and_then(|v| v.get("i")).and_then(Value::as_i64))
            .collect();
        assert_eq!(order, vec![Some(0), Some(1), Some(2), Some(3), Some(4)]);
    }

    #[test]
    fn null_slots_keep_their_positions() {
        let batches = vec![
            vec![Some(json!({})), None],
            vec![None, Some(json!({}))],
        ];

        let out = concatenate(batches);
        assert_eq!(out.len(), 4);
        assert!(out.first().is_some_and(Option::is_some));
        assert_eq!(out.get(1), Some(&None));
        assert_eq!(out.get(2), Some(&None));
        assert!(out.get(3).is_some_and(Option::is_some));
    }

    #[test]
    fn empty_input_assembles_to_empty_output() {
        assert!(concatenate(Vec::new()).is_empty());
    }
}

//! Folding lookup results into one mapping.

use crate::types::{LookupResult, MergedResult};

/// Fold results left to right; later results overwrite matching keys.
///
/// The input order is the tool-call declaration order, which is the single
/// source of truth for conflict resolution.
pub(crate) fn merge(results: Vec<LookupResult>) -> MergedResult {
    let mut merged = MergedResult::new();
    for result in results {
        for (key, value) in result {
            merged.insert(key, value);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result(json: serde_json::Value) -> LookupResult {
        json.as_object().unwrap().clone()
    }

    #[test]
    fn disjoint_keys_are_unioned() {
        let merged = merge(vec![
            result(json!({"temperature": 22.5})),
            result(json!({"stock": 412.0})),
        ]);
        assert_eq!(merged["temperature"], json!(22.5));
        assert_eq!(merged["stock"], json!(412.0));
    }

    #[test]
    fn later_results_overwrite_earlier_keys() {
        let merged = merge(vec![
            result(json!({"value": 1.0, "query": "temperature"})),
            result(json!({"value": 2.0, "query": "stock"})),
        ]);
        assert_eq!(merged["value"], json!(2.0));
        assert_eq!(merged["query"], json!("stock"));
    }

    #[test]
    fn empty_input_merges_to_empty_mapping() {
        assert!(merge(Vec::new()).is_empty());
    }
}

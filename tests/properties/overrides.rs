//! Property tests for the item-model override merge.

use proptest::prelude::*;
use serde_json::{json, Value};

use packmerge::merge_overrides;

/// An override record with an optional custom_model_data key and a unique
/// tag so equal-keyed records stay distinguishable.
fn record(key: Option<i64>, tag: u32) -> Value {
    match key {
        Some(cmd) => json!({
            "predicate": { "custom_model_data": cmd },
            "model": format!("item/m{tag}")
        }),
        None => json!({ "model": format!("item/m{tag}") }),
    }
}

fn records(keys: &[Option<i64>], tag_base: u32) -> Vec<Value> {
    keys.iter()
        .enumerate()
        .map(|(i, key)| record(*key, tag_base + i as u32))
        .collect()
}

fn key_of(value: &Value) -> Option<i64> {
    value.get("predicate")?.get("custom_model_data")?.as_i64()
}

fn optional_key() -> BoxedStrategy<Option<i64>> {
    prop_oneof![
        3 => (0i64..100).prop_map(Some).boxed(),
        1 => Just(None).boxed(),
    ]
    .boxed()
}

fn key_batches() -> impl Strategy<Value = Vec<Vec<Option<i64>>>> {
    proptest::collection::vec(
        proptest::collection::vec(optional_key(), 0..12),
        1..5,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: No record is ever dropped or duplicated by a merge.
    #[test]
    fn property_merge_preserves_every_record(
        existing_keys in proptest::collection::vec(optional_key(), 0..12),
        new_keys in proptest::collection::vec(optional_key(), 0..12),
    ) {
        let mut merged = records(&existing_keys, 0);
        let new = records(&new_keys, 1000);

        let mut expected: Vec<String> = merged.iter().chain(new.iter())
            .map(|r| r.to_string())
            .collect();
        expected.sort();

        merge_overrides(&mut merged, new);

        let mut actual: Vec<String> = merged.iter().map(|r| r.to_string()).collect();
        actual.sort();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: Building a list from scratch through repeated merges keeps
    /// the keyed subsequence non-decreasing.
    #[test]
    fn property_keyed_subsequence_stays_sorted(batches in key_batches()) {
        let mut merged: Vec<Value> = Vec::new();
        for (i, batch) in batches.iter().enumerate() {
            merge_overrides(&mut merged, records(batch, i as u32 * 1000));
        }

        let keyed: Vec<i64> = merged.iter().filter_map(key_of).collect();
        prop_assert!(
            keyed.windows(2).all(|w| w[0] <= w[1]),
            "keyed subsequence out of order: {:?}", keyed
        );
    }

    /// PROPERTY: Keyless records keep their relative arrival order.
    #[test]
    fn property_keyless_records_keep_arrival_order(batches in key_batches()) {
        let mut merged: Vec<Value> = Vec::new();
        let mut arrival: Vec<String> = Vec::new();

        for (i, batch) in batches.iter().enumerate() {
            let new = records(batch, i as u32 * 1000);
            arrival.extend(
                new.iter()
                    .filter(|r| key_of(r).is_none())
                    .map(|r| r.to_string()),
            );
            merge_overrides(&mut merged, new);
        }

        let observed: Vec<String> = merged
            .iter()
            .filter(|r| key_of(r).is_none())
            .map(|r| r.to_string())
            .collect();
        prop_assert_eq!(observed, arrival);
    }

    /// PROPERTY: Merging an empty batch is a no-op.
    #[test]
    fn property_empty_merge_is_identity(
        existing_keys in proptest::collection::vec(optional_key(), 0..12),
    ) {
        let mut merged = records(&existing_keys, 0);
        let before = merged.clone();
        merge_overrides(&mut merged, Vec::new());
        prop_assert_eq!(merged, before);
    }
}

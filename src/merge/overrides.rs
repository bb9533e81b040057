//! Item-model override list merge
//!
//! Item models carry an "overrides" list whose entries may be keyed by
//! `predicate.custom_model_data`. The list must stay sorted ascending by
//! that key for the game to resolve models correctly, so new entries are
//! spliced into position rather than appended.

use serde_json::Value;

/// Numeric sort key of an override record, if it carries one.
///
/// Anything that is not an integer under `predicate.custom_model_data`
/// counts as absent.
fn custom_model_data(record: &Value) -> Option<i64> {
    record.get("predicate")?.get("custom_model_data")?.as_i64()
}

/// Merge `new` override records into `existing`, in order.
///
/// Keyed records are inserted before the first existing record whose key is
/// greater than or equal to theirs; with no such record they append at the
/// end. Keyless records always append at the end in arrival order. No
/// record is ever dropped.
///
/// Equal keys insert before the existing entry; this matches the behavior
/// packs already rely on and is deliberate.
pub fn merge_overrides(existing: &mut Vec<Value>, new: Vec<Value>) {
    for record in new {
        let Some(value) = custom_model_data(&record) else {
            existing.push(record);
            continue;
        };

        let slot = existing
            .iter()
            .position(|entry| custom_model_data(entry).is_some_and(|key| value <= key));

        match slot {
            Some(index) => existing.insert(index, record),
            None => existing.push(record),
        }
    }
}

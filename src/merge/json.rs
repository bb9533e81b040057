//! Pure JSON merge rules
//!
//! Both functions mutate the existing document in place and touch nothing
//! on disk; the I/O driver in `merge::merge_file` decides when to call them
//! and writes the result back.

use serde_json::{Map, Value};

/// Shallow key-overwrite merge.
///
/// Every top-level key of `new` lands in `existing`: same-named keys are
/// overwritten (keeping their original position), fresh keys are appended.
/// Keys only present in `existing` are untouched.
pub fn merge_shallow(existing: &mut Map<String, Value>, new: Map<String, Value>) {
    for (key, value) in new {
        existing.insert(key, value);
    }
}

/// Union merge of one named list field.
///
/// - `new` lacks `key`: nothing to merge, `existing` is untouched.
/// - `existing` lacks `key`: the new list is adopted wholesale.
/// - both have it: each new element is appended only if no deeply-equal
///   element is already present. Existing order is never disturbed; unique
///   new elements keep their relative order.
///
/// A non-list value under `key` on the existing side is replaced by the new
/// list; a non-list on the new side is treated as absent.
pub fn merge_list_union(existing: &mut Map<String, Value>, new: Map<String, Value>, key: &str) {
    let new_elements = match new.get(key) {
        Some(Value::Array(elements)) => elements.clone(),
        _ => return,
    };

    match existing.get_mut(key) {
        Some(Value::Array(elements)) => {
            for element in new_elements {
                if !elements.contains(&element) {
                    elements.push(element);
                }
            }
        }
        _ => {
            existing.insert(key.to_string(), Value::Array(new_elements));
        }
    }
}

//! The merge engine
//!
//! Pure rules live in the submodules (`strategy` decides, `json` and
//! `overrides` combine documents); `merge_file` is the thin I/O driver that
//! reads the destination, applies the chosen rule, and writes the result
//! back. Each file is handled independently - nothing is cached across
//! calls.

pub mod json;
pub mod overrides;
pub mod strategy;

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

pub use json::{merge_list_union, merge_shallow};
pub use overrides::merge_overrides;
pub use strategy::{classify, MergeStrategy};

use crate::error::MergeResult;
use crate::json::{read_json_object, write_json_file};
use crate::report::Reporter;

/// What the driver did with one source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Destination replaced (or created) with a byte copy of the source
    Copied,
    /// Destination rewritten with merged content
    Merged,
    /// Nothing written (unloadable source, or nothing to contribute)
    Skipped,
}

/// Merge one source file into the output tree.
///
/// `segments` is the file's path relative to the asset root, split into
/// components; it selects the strategy. A missing destination always means
/// a plain copy, whatever the classification would have been.
pub fn merge_file(
    source: &Path,
    dest: &Path,
    segments: &[String],
    report: &Reporter,
) -> MergeResult<MergeOutcome> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    if !dest.exists() {
        fs::copy(source, dest)?;
        report.detail(&format!("copy: {}", dest.display()));
        return Ok(MergeOutcome::Copied);
    }

    match classify(segments) {
        MergeStrategy::OverrideList => merge_item_model(source, dest, report),
        MergeStrategy::ShallowJson => merge_shallow_file(source, dest, report),
        MergeStrategy::ListUnion(key) => merge_list_union_file(source, dest, key, report),
        MergeStrategy::Overwrite => {
            fs::copy(source, dest)?;
            report.detail(&format!("overwrite: {}", dest.display()));
            Ok(MergeOutcome::Copied)
        }
    }
}

/// Both sides of a JSON merge, or the short-circuit the load dictated
enum LoadedPair {
    /// Source unloadable: skip this file, leave the destination alone
    SkipSource,
    /// Destination unloadable: the source wins wholesale
    CopySource,
    /// Both parsed
    Both {
        new: Map<String, Value>,
        existing: Map<String, Value>,
    },
}

/// Load source then destination, applying the shared failure policy:
/// a bad source contributes nothing, a bad destination gets replaced.
fn load_pair(source: &Path, dest: &Path, report: &Reporter) -> LoadedPair {
    let Some(new) = read_json_object(source, report) else {
        return LoadedPair::SkipSource;
    };
    let Some(existing) = read_json_object(dest, report) else {
        return LoadedPair::CopySource;
    };
    LoadedPair::Both { new, existing }
}

fn merge_shallow_file(source: &Path, dest: &Path, report: &Reporter) -> MergeResult<MergeOutcome> {
    let (new, mut existing) = match load_pair(source, dest, report) {
        LoadedPair::SkipSource => return Ok(MergeOutcome::Skipped),
        LoadedPair::CopySource => {
            fs::copy(source, dest)?;
            return Ok(MergeOutcome::Copied);
        }
        LoadedPair::Both { new, existing } => (new, existing),
    };

    merge_shallow(&mut existing, new);
    write_json_file(dest, &existing)?;
    report.detail(&format!("shallow merge: {}", dest.display()));
    Ok(MergeOutcome::Merged)
}

fn merge_list_union_file(
    source: &Path,
    dest: &Path,
    key: &str,
    report: &Reporter,
) -> MergeResult<MergeOutcome> {
    let (new, mut existing) = match load_pair(source, dest, report) {
        LoadedPair::SkipSource => return Ok(MergeOutcome::Skipped),
        LoadedPair::CopySource => {
            fs::copy(source, dest)?;
            return Ok(MergeOutcome::Copied);
        }
        LoadedPair::Both { new, existing } => (new, existing),
    };

    // Nothing to merge when the source has no such list
    if !matches!(new.get(key), Some(Value::Array(_))) {
        return Ok(MergeOutcome::Skipped);
    }

    merge_list_union(&mut existing, new, key);
    write_json_file(dest, &existing)?;
    report.detail(&format!("list union ({key}): {}", dest.display()));
    Ok(MergeOutcome::Merged)
}

fn merge_item_model(source: &Path, dest: &Path, report: &Reporter) -> MergeResult<MergeOutcome> {
    let (mut new, mut existing) = match load_pair(source, dest, report) {
        LoadedPair::SkipSource => return Ok(MergeOutcome::Skipped),
        LoadedPair::CopySource => {
            fs::copy(source, dest)?;
            return Ok(MergeOutcome::Copied);
        }
        LoadedPair::Both { new, existing } => (new, existing),
    };

    // A model without overrides contributes nothing to an existing model
    let Some(Value::Array(new_overrides)) = new.remove("overrides") else {
        return Ok(MergeOutcome::Skipped);
    };

    match existing.get_mut("overrides") {
        Some(Value::Array(overrides)) => merge_overrides(overrides, new_overrides),
        _ => {
            existing.insert("overrides".to_string(), Value::Array(new_overrides));
        }
    }

    write_json_file(dest, &existing)?;
    report.detail(&format!("override merge: {}", dest.display()));
    Ok(MergeOutcome::Merged)
}

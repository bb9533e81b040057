//! Pack walking and orchestration
//!
//! Drives the whole run: read the declared pack list, visit each pack's
//! asset tree in order, and hand every file to the merge driver. Later
//! packs win overwrite conflicts; merge rules combine where they apply.
//! A missing pack or a failed file is reported and skipped, never fatal.

use std::fs;
use std::path::Path;

use crate::config::{display_relative, MergeConfig};
use crate::error::{MergeError, MergeResult};
use crate::merge::merge_file;
use crate::report::Reporter;

/// Read the ordered pack list from the configured file.
///
/// One pack name per line; blank lines are kept here and skipped during the
/// walk so line numbers stay meaningful to users. A missing file is fatal.
pub fn read_pack_list(config: &MergeConfig) -> MergeResult<Vec<String>> {
    if !config.pack_list.exists() {
        return Err(MergeError::PackListMissing {
            path: config.pack_list.clone(),
        });
    }
    let content = fs::read_to_string(&config.pack_list)?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Merge every declared pack into the output tree, in declaration order.
///
/// Returns the contributors: packs that existed and were walked, in
/// processing order.
pub fn merge_packs(config: &MergeConfig, packs: &[String], report: &Reporter) -> Vec<String> {
    let mut contributors = Vec::new();

    for pack in packs {
        if pack.is_empty() {
            continue;
        }

        let assets = config.pack_assets(pack);
        if !assets.exists() {
            report.error(&format!("{pack} doesn't exist!"));
            continue;
        }

        contributors.push(pack.clone());
        report.info(&format!("Merging {pack}"));
        walk_pack(config, &assets, &assets, report);
    }

    contributors
}

/// Recursively visit every file under `current`, merging each into the
/// output at the same path relative to `asset_root`.
fn walk_pack(config: &MergeConfig, asset_root: &Path, current: &Path, report: &Reporter) {
    let entries = match fs::read_dir(current) {
        Ok(entries) => entries,
        Err(err) => {
            report.error(&format!("cannot read {}: {err}", current.display()));
            return;
        }
    };

    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(err) => {
                report.error(&format!("cannot read {}: {err}", current.display()));
                continue;
            }
        };

        if path.is_dir() {
            walk_pack(config, asset_root, &path, report);
            continue;
        }

        let relative = match path.strip_prefix(asset_root) {
            Ok(relative) => relative,
            Err(_) => continue,
        };
        let segments: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        let dest = config.output_assets().join(relative);

        if let Err(err) = merge_file(&path, &dest, &segments, report) {
            report.error(&format!(
                "failed to merge {}: {err}",
                display_relative(&path, &config.root)
            ));
        }
    }
}

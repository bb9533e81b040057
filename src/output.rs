//! Output pack scaffolding
//!
//! The simple I/O around the merge engine: resetting the output asset tree,
//! writing the `pack.mcmeta` descriptor, and writing the contributor
//! manifest.

use std::fs;

use serde::Serialize;
use serde_json::Value;

use crate::config::{MergeConfig, MANIFEST_HEADER};
use crate::error::MergeResult;
use crate::json::write_json_file;

/// The `pack.mcmeta` descriptor
#[derive(Debug, Serialize)]
struct PackMcmeta {
    pack: PackSection,
}

#[derive(Debug, Serialize)]
struct PackSection {
    pack_format: u32,
    description: Value,
}

/// Delete the output asset tree so the run starts from scratch.
///
/// Only `assets/` is removed; the descriptor and manifest are rewritten in
/// place by their own steps.
pub fn reset_output(config: &MergeConfig) -> MergeResult<()> {
    let assets = config.output_assets();
    if assets.exists() {
        fs::remove_dir_all(&assets)?;
    }
    Ok(())
}

/// Write `pack.mcmeta` at the output root, creating the directory first.
pub fn write_mcmeta(config: &MergeConfig) -> MergeResult<()> {
    fs::create_dir_all(&config.output)?;
    let mcmeta = PackMcmeta {
        pack: PackSection {
            pack_format: config.pack_format,
            description: config.description.clone(),
        },
    };
    write_json_file(&config.output.join("pack.mcmeta"), &mcmeta)
}

/// Write the contributor manifest: a header line, then one line per pack
/// in processing order.
pub fn write_manifest(config: &MergeConfig, contributors: &[String]) -> MergeResult<()> {
    let mut lines = vec![format!("{MANIFEST_HEADER}\n")];
    lines.extend(contributors.iter().cloned());
    fs::write(config.manifest_path(), lines.join("\n"))?;
    Ok(())
}

//! Run configuration for packmerge
//!
//! All knobs for a merge run live in one immutable value handed to the
//! orchestrator at startup. Nothing here is ambient global state.

use std::path::{Path, PathBuf};

use serde_json::{json, Value};

/// Default `pack_format` written to `pack.mcmeta`
pub const DEFAULT_PACK_FORMAT: u32 = 12;

/// Default pack list file name, looked up under the root directory
pub const DEFAULT_PACK_LIST: &str = "packs.txt";

/// Default output pack directory name, created under the root directory
pub const DEFAULT_OUTPUT_DIR: &str = "merged-pack";

/// File name of the contributor manifest, written at the output root
pub const MANIFEST_FILE: &str = "constituent-packs.txt";

/// Header line of the contributor manifest
pub const MANIFEST_HEADER: &str = "List of constituent packs:";

/// Subdirectory of a pack (and of the output) holding mergeable assets
pub const ASSETS_DIR: &str = "assets";

/// Configuration for a single merge run
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Directory containing the input packs and the pack list file
    pub root: PathBuf,
    /// Path to the pack list file (one pack name per line)
    pub pack_list: PathBuf,
    /// Output pack directory
    pub output: PathBuf,
    /// Format version written to `pack.mcmeta`
    pub pack_format: u32,
    /// Description written to `pack.mcmeta` (plain string or text components)
    pub description: Value,
}

impl MergeConfig {
    /// Build a config rooted at `root` with all defaults
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            pack_list: root.join(DEFAULT_PACK_LIST),
            output: root.join(DEFAULT_OUTPUT_DIR),
            root,
            pack_format: DEFAULT_PACK_FORMAT,
            description: default_description(),
        }
    }

    /// Asset subtree of the output pack - the target of all merges
    pub fn output_assets(&self) -> PathBuf {
        self.output.join(ASSETS_DIR)
    }

    /// Asset root of a named input pack
    pub fn pack_assets(&self, pack: &str) -> PathBuf {
        self.root.join(pack).join(ASSETS_DIR)
    }

    /// Path to the contributor manifest in the output pack
    pub fn manifest_path(&self) -> PathBuf {
        self.output.join(MANIFEST_FILE)
    }
}

/// Default `pack.mcmeta` description: a small text-component list
pub fn default_description() -> Value {
    json!([
        "",
        { "text": "Merged Resource Pack", "color": "blue", "bold": true }
    ])
}

/// Displayable form of a path for diagnostics, relative to the run root
/// when possible
pub fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

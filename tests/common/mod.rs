//! Common test utilities for packmerge integration tests.
//!
//! Provides `TestEnv`: an isolated root directory with helpers to lay out
//! input packs, run the compiled binary, and inspect the merged output.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

/// Result of running the packmerge CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment: a temp root holding input packs, the pack
/// list, and the merged output.
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("failed to create temp root"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_packmerge")),
        }
    }

    /// Write one file into a pack's asset tree
    pub fn add_pack_file(&self, pack: &str, relative: &str, content: &str) {
        let path = self.root.path().join(pack).join("assets").join(relative);
        fs::create_dir_all(path.parent().unwrap()).expect("failed to create pack dirs");
        fs::write(path, content).expect("failed to write pack file");
    }

    /// Create an empty pack (asset root with no files)
    pub fn add_empty_pack(&self, pack: &str) {
        let path = self.root.path().join(pack).join("assets");
        fs::create_dir_all(path).expect("failed to create pack dirs");
    }

    /// Write the pack list file
    pub fn write_pack_list(&self, packs: &[&str]) {
        let content = packs.join("\n");
        fs::write(self.root.path().join("packs.txt"), content).expect("failed to write pack list");
    }

    /// Run packmerge against this root (non-interactive)
    pub fn run(&self) -> TestResult {
        self.run_args(&[])
    }

    /// Run packmerge with extra flags
    pub fn run_args(&self, extra: &[&str]) -> TestResult {
        let root = self.root.path().to_string_lossy().into_owned();
        let mut cmd = Command::new(&self.bin);
        cmd.args(["--root", &root, "--yes"]).args(extra);

        let output = cmd.output().expect("failed to execute packmerge");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Path inside the merged output pack
    pub fn output_path(&self, relative: &str) -> PathBuf {
        self.root.path().join("merged-pack").join(relative)
    }

    /// Read a merged output file as text
    pub fn read_output(&self, relative: &str) -> String {
        fs::read_to_string(self.output_path(relative))
            .unwrap_or_else(|_| panic!("missing output file: {relative}"))
    }

    /// Read and parse a merged output file as JSON
    pub fn read_output_json(&self, relative: &str) -> Value {
        serde_json::from_str(&self.read_output(relative))
            .unwrap_or_else(|_| panic!("invalid JSON in output file: {relative}"))
    }

    /// Snapshot the whole output pack as relative-path -> bytes
    pub fn output_tree(&self) -> BTreeMap<String, Vec<u8>> {
        let mut tree = BTreeMap::new();
        let root = self.output_path("");
        if root.exists() {
            collect_tree(&root, &root, &mut tree);
        }
        tree
    }
}

fn collect_tree(root: &Path, current: &Path, tree: &mut BTreeMap<String, Vec<u8>>) {
    for entry in fs::read_dir(current).expect("failed to read output dir") {
        let path = entry.expect("failed to read output entry").path();
        if path.is_dir() {
            collect_tree(root, &path, tree);
        } else {
            let relative = path
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            tree.insert(relative, fs::read(&path).expect("failed to read output file"));
        }
    }
}

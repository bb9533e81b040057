//! Packmerge - content-aware resource pack merger
//!
//! Packmerge combines an ordered list of Minecraft-style resource packs into
//! a single output pack. Colliding files are resolved with type-specific
//! merge rules (item-model override sorting, shallow JSON merge, JSON
//! list-union) instead of blind overwrite.

pub mod cli;
pub mod config;
pub mod error;
pub mod json;
pub mod merge;
pub mod output;
pub mod pack;
pub mod report;

// Re-exports for convenience
pub use config::MergeConfig;
pub use error::{MergeError, MergeResult};
pub use json::read_json_object;
pub use merge::{classify, merge_file, MergeOutcome, MergeStrategy};
pub use merge::{merge_overrides, merge_shallow, merge_list_union};
pub use pack::{merge_packs, read_pack_list};
pub use report::Reporter;

//! Merge strategy classification
//!
//! A file's relative path inside the asset tree determines how a collision
//! with an existing output file is resolved. The rules form a closed set
//! evaluated in fixed priority order, so every path maps to exactly one
//! strategy.

/// How a colliding file is merged into the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Replace the destination wholesale
    Overwrite,
    /// Top-level key overwrite (lang files, sounds.json)
    ShallowJson,
    /// Union of one named list field (atlases "sources", font "providers")
    ListUnion(&'static str),
    /// Sorted item-model "overrides" merge
    OverrideList,
}

const NAMESPACE_MINECRAFT: &str = "minecraft";
const SOUNDS_FILE: &str = "sounds.json";

/// Classify a file by its path segments relative to the asset root.
///
/// Priority order matters: `minecraft/models/item/...` must win over any
/// later rule, and the two-segment `sounds.json` rule must not swallow
/// namespaced subdirectory files.
pub fn classify(segments: &[String]) -> MergeStrategy {
    if segments.len() >= 3
        && segments[0] == NAMESPACE_MINECRAFT
        && segments[1] == "models"
        && segments[2] == "item"
    {
        return MergeStrategy::OverrideList;
    }
    if segments.len() == 2 && segments[1] == SOUNDS_FILE {
        return MergeStrategy::ShallowJson;
    }
    if segments.len() >= 2 && segments[1] == "lang" {
        return MergeStrategy::ShallowJson;
    }
    if segments.len() >= 2 && segments[0] == NAMESPACE_MINECRAFT && segments[1] == "atlases" {
        return MergeStrategy::ListUnion("sources");
    }
    if segments.len() >= 2 && segments[1] == "font" {
        return MergeStrategy::ListUnion("providers");
    }
    MergeStrategy::Overwrite
}

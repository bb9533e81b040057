//! Guarded JSON loading and deterministic JSON writing
//!
//! Loading never propagates an error: a missing file, unreadable bytes, or
//! malformed JSON all come back as `None` with a diagnostic naming the file.
//! Undecodable byte sequences are replaced rather than rejected - a pack
//! with a broken encoding should degrade to a skipped file, not a crash.
//!
//! Writing uses 4-space indentation and preserves key insertion order, so
//! identical inputs always serialize to identical bytes.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

use crate::error::MergeResult;
use crate::report::Reporter;

/// Read a file and parse it as a JSON object.
///
/// Returns `None` (after reporting) when the file is missing, unreadable,
/// malformed, or not a JSON object at the top level.
pub fn read_json_object(path: &Path, report: &Reporter) -> Option<Map<String, Value>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(_) => {
            report.error(&format!("Invalid JSON file at: {}", path.display()));
            return None;
        }
    };

    // Lossy recovery: substitute undecodable sequences instead of aborting.
    let text = String::from_utf8_lossy(&bytes);

    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) | Err(_) => {
            report.error(&format!("Invalid JSON file at: {}", path.display()));
            None
        }
    }
}

/// Serialize a JSON document to `path` with 4-space indentation.
///
/// Key order is whatever the in-memory map holds (insertion order), which
/// makes the output a deterministic function of the merge inputs.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> MergeResult<()> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    let mut file = fs::File::create(path)?;
    file.write_all(&buf)?;
    Ok(())
}

//! Flat-document loading and saving
//!
//! Convenience helpers for callers that persist the untyped document as JSON
//! on disk. The codec itself never touches the filesystem; these helpers
//! exist so the orchestration layer has a single, error-mapped way to read a
//! document in and write the flattened result back out.

use crate::error::Result;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parse a flat document from a JSON string.
pub fn from_json_str(content: &str) -> Result<Value> {
    Ok(serde_json::from_str(content)?)
}

/// Serialize a flat document to pretty-printed JSON.
pub fn to_json_string(doc: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Load a flat document from a JSON file.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    from_json_str(&content)
}

/// Save a flat document to a JSON file.
pub fn save_document(doc: &Value, path: &Path) -> Result<()> {
    fs::write(path, to_json_string(doc)?)?;
    Ok(())
}

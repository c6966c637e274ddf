//! View metadata files
//!
//! Metadata is declarative data, never code: `meta.toml` or `meta.json` next
//! to a view's entry component. The top level must be a table/object.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use viewtree_router::Meta;

/// Loads the first metadata file from `candidates` present in `dir`
pub fn load_for_dir(dir: &Path, candidates: &[String]) -> Result<Option<Meta>> {
    for name in candidates {
        let path = dir.join(name);
        if path.is_file() {
            return parse_file(&path).map(Some);
        }
    }
    Ok(None)
}

/// Parses a metadata file, picking the format from its extension
pub fn parse_file(path: &Path) -> Result<Meta> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read metadata file: {:?}", path))?;

    let parsed = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => parse_toml(&content),
        Some("json") => parse_json(&content),
        other => anyhow::bail!("Unsupported metadata format {:?}: {:?}", other, path),
    };

    parsed.with_context(|| format!("Failed to parse metadata file: {:?}", path))
}

pub fn parse_toml(content: &str) -> Result<Meta> {
    if content.trim().is_empty() {
        return Ok(Meta::new());
    }
    Ok(toml::from_str::<Meta>(content)?)
}

pub fn parse_json(content: &str) -> Result<Meta> {
    if content.trim().is_empty() {
        return Ok(Meta::new());
    }
    match serde_json::from_str::<Value>(content)? {
        Value::Object(map) => Ok(map),
        other => anyhow::bail!("metadata must be an object, found {}", kind(&other)),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

//! Metadata loader - reads one metadata file into an asset record.
//!
//! Files that parse but carry no `id` are not assets (the library also
//! exports other JSON files); they load as `None` rather than an error.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Q2wcError, Result};
use crate::types::AssetRecord;

/// Load a metadata file from disk.
pub fn load_asset(path: &Path) -> Result<Option<AssetRecord>> {
    let content = fs::read_to_string(path).map_err(|e| Q2wcError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;

    parse_asset(&content, path)
}

/// Parse metadata content. `path` is only used for error reporting.
pub fn parse_asset(content: &str, path: &Path) -> Result<Option<AssetRecord>> {
    let value: Value = serde_json::from_str(content).map_err(|e| Q2wcError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
        help: None,
    })?;

    let Value::Object(fields) = &value else {
        return Err(Q2wcError::Parse {
            path: path.to_path_buf(),
            message: "expected a JSON object".to_string(),
            help: None,
        });
    };

    if !has_id(fields.get("id")) {
        return Ok(None);
    }

    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| Q2wcError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
            help: Some(
                "Asset metadata needs string 'id' and 'name', 'tags' and 'categories' lists, and a 'maps' list of {type, uri}"
                    .to_string(),
            ),
        })
}

/// An asset needs an `id` that is present and not empty.
fn has_id(id: Option<&Value>) -> bool {
    match id {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

//! The flat field set a descriptor document is written from.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Q2wcError, Result};

use super::asset::MapRole;

/// Prefix of the per-map field names (`map_albedo`, `map_normal`, ...).
pub const MAP_FIELD_PREFIX: &str = "map_";

/// Fields derived from one asset record, ready to be serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDescriptor {
    pub taglist: String,
    pub desc: String,
    pub guid: String,
    /// Seconds since the epoch times 10^8.
    pub time: i64,
    pub preview: String,
    /// Resolved map uris keyed by map type.
    maps: BTreeMap<String, String>,
}

impl OutputDescriptor {
    pub fn new(
        taglist: impl Into<String>,
        desc: impl Into<String>,
        guid: impl Into<String>,
        time: i64,
        preview: impl Into<String>,
    ) -> Self {
        Self {
            taglist: taglist.into(),
            desc: desc.into(),
            guid: guid.into(),
            time,
            preview: preview.into(),
            maps: BTreeMap::new(),
        }
    }

    /// Register a map. A later map of the same type replaces the earlier one.
    pub fn insert_map(&mut self, map_type: impl Into<String>, uri: impl Into<String>) {
        self.maps.insert(map_type.into(), uri.into());
    }

    /// Get the uri registered for a map type.
    pub fn map(&self, map_type: &str) -> Option<&str> {
        self.maps.get(map_type).map(String::as_str)
    }

    /// Number of resolved maps.
    pub fn map_count(&self) -> usize {
        self.maps.len()
    }

    /// Look up any field by its descriptor name.
    pub fn field(&self, name: &str) -> Option<String> {
        match name {
            "taglist" => Some(self.taglist.clone()),
            "desc" => Some(self.desc.clone()),
            "guid" => Some(self.guid.clone()),
            "time" => Some(self.time.to_string()),
            "preview" => Some(self.preview.clone()),
            _ => name
                .strip_prefix(MAP_FIELD_PREFIX)
                .and_then(|map_type| self.map(map_type))
                .map(str::to_string),
        }
    }

    /// All field names present, fixed fields first.
    pub fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = ["taglist", "desc", "guid", "time", "preview"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        names.extend(self.maps.keys().map(|t| format!("{}{}", MAP_FIELD_PREFIX, t)));
        names
    }

    /// Get the uri for a required role, failing if the map was not resolved.
    ///
    /// `dir` only feeds the error message.
    pub fn require_map(&self, role: MapRole, dir: &Path) -> Result<&str> {
        self.map(role.map_type()).ok_or_else(|| Q2wcError::MissingField {
            field: role.field_name().to_string(),
            path: dir.to_path_buf(),
        })
    }
}

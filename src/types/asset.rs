//! Asset metadata as exported by the texture library.
//!
//! Each asset directory carries one JSON file describing the surface. Only the
//! fields needed to build a descriptor are kept; everything else in the
//! export is ignored.
//!
//! # Example
//!
//! ```json
//! {
//!   "id": "X1",
//!   "name": "Foo",
//!   "tags": ["a"],
//!   "categories": ["b"],
//!   "maps": [{ "type": "albedo", "uri": "Foo_albedo.png", "mimeType": "image/png" }]
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// One parsed metadata file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Library-wide unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    /// Texture maps in export order.
    pub maps: Vec<MapEntry>,
}

impl AssetRecord {
    /// Tags followed by categories, space separated.
    pub fn taglist(&self) -> String {
        self.tags
            .iter()
            .chain(self.categories.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Human readable description, `name(id)`.
    pub fn description(&self) -> String {
        format!("{}({})", self.name, self.id)
    }

    /// Preview image name. Never checked for existence.
    pub fn preview(&self) -> String {
        format!("{}_Preview.png", self.id)
    }
}

/// A texture map reference inside an asset record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapEntry {
    /// Semantic role of the map (`albedo`, `normal`, ...).
    #[serde(rename = "type")]
    pub map_type: String,
    /// Path of the map file relative to the asset directory.
    pub uri: String,
    #[serde(rename = "mimeType", default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl MapEntry {
    pub fn new(map_type: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            map_type: map_type.into(),
            uri: uri.into(),
            mime_type: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// The map roles a descriptor must reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapRole {
    Diffuse,
    Normal,
    Displacement,
}

impl MapRole {
    /// All roles, in document order.
    pub const ALL: [MapRole; 3] = [MapRole::Diffuse, MapRole::Normal, MapRole::Displacement];

    /// The metadata map type that fills this role.
    pub fn map_type(&self) -> &'static str {
        match self {
            MapRole::Diffuse => "albedo",
            MapRole::Normal => "normal",
            MapRole::Displacement => "displacement",
        }
    }

    /// Name of the descriptor field holding this role's uri.
    pub fn field_name(&self) -> &'static str {
        match self {
            MapRole::Diffuse => "map_albedo",
            MapRole::Normal => "map_normal",
            MapRole::Displacement => "map_displacement",
        }
    }

    /// XML element written for this role.
    pub fn element(&self) -> &'static str {
        match self {
            MapRole::Diffuse => "Diffuse",
            MapRole::Normal => "Normal",
            MapRole::Displacement => "Displacement",
        }
    }
}

impl fmt::Display for MapRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.map_type())
    }
}

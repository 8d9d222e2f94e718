//! Converter configuration.
//!
//! Everything the pipeline treats as a constant lives here so that scan,
//! transform and write receive it explicitly instead of reading globals.

use uuid::Uuid;

/// Extension of the per-asset metadata files exported by the library.
pub const METADATA_EXTENSION: &str = "json";

/// Name of the descriptor written into every asset directory.
pub const DESCRIPTOR_FILENAME: &str = "Description.xml";

/// Descriptor format version understood by World Creator 2.
pub const WC_VERSION: &str = "2.0";

/// Publisher name embedded in every descriptor.
pub const PUBLISHER: &str = "Quixel Megascans";

/// Publisher website embedded in every descriptor.
pub const WEBSITE: &str = "https://quixel.com/megascans/";

/// Map format excluded from descriptors unless `include_exr` is set.
pub const EXR_MAP_TYPE: &str = "image/x-exr";

/// Options controlling a conversion run.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Namespace for deriving descriptor guids from asset ids.
    pub namespace: Uuid,
    /// Follow symbolic links while scanning.
    pub follow_links: bool,
    /// Keep maps of the EXR format.
    pub include_exr: bool,
    /// Extension identifying metadata files (without the dot).
    pub metadata_extension: String,
    /// File name of the generated descriptor.
    pub descriptor_filename: String,
    /// Value of the root element's `Version` attribute.
    pub wc_version: String,
    pub publisher: String,
    pub website: String,
}

impl Default for ConverterConfig {
    /// The namespace is random, so guids change on every run.
    fn default() -> Self {
        Self {
            namespace: Uuid::new_v4(),
            follow_links: false,
            include_exr: false,
            metadata_extension: METADATA_EXTENSION.to_string(),
            descriptor_filename: DESCRIPTOR_FILENAME.to_string(),
            wc_version: WC_VERSION.to_string(),
            publisher: PUBLISHER.to_string(),
            website: WEBSITE.to_string(),
        }
    }
}

impl ConverterConfig {
    /// Create a configuration with a fresh per-run namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed guid namespace (stable guids across runs).
    pub fn with_namespace(mut self, namespace: Uuid) -> Self {
        self.namespace = namespace;
        self
    }

    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    pub fn with_exr(mut self, include_exr: bool) -> Self {
        self.include_exr = include_exr;
        self
    }

    /// Check whether a map with this type/mime type should be left out.
    pub fn skips_map_format(&self, format: &str) -> bool {
        !self.include_exr && format == EXR_MAP_TYPE
    }
}

//! q2wc - Quixel to World Creator 2
//!
//! A library for batch-generating World Creator texture descriptors
//! (`Description.xml`) from the metadata files of a Quixel Megascans library.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod render;
pub mod types;

pub use cli::convert::convert_library;
pub use config::ConverterConfig;
pub use discovery::{scan_library, AssetScanner, ScanOutcome, ScanResult};
pub use error::{Q2wcError, Result};
pub use render::{describe_asset, render_xml, write_descriptors, write_xml, WriteSummary};
pub use types::{AssetRecord, MapEntry, MapRole, OutputDescriptor};

//! Metadata discovery for a texture library.
//!
//! Walks the library tree, parses every metadata file and collects the
//! assets keyed by their canonical metadata path. Per-file problems are
//! logged and skipped; only an unusable root is an error.
//!
//! # Example
//!
//! ```ignore
//! use q2wc::{discovery::scan_library, ConverterConfig};
//!
//! let scan = scan_library("./Megascans Library", &ConverterConfig::default())?;
//! println!("Found {} assets", scan.len());
//! ```

mod loader;
mod scanner;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, warn};

use crate::config::ConverterConfig;
use crate::error::{Q2wcError, Result};
use crate::types::AssetRecord;

pub use loader::{load_asset, parse_asset};
pub use scanner::{is_metadata_file, scan_directory, AssetScanner, ScanOutcome};

/// Assets found in a library, keyed by canonical metadata path.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// The canonical library root.
    pub root: PathBuf,
    pub assets: HashMap<PathBuf, AssetRecord>,
    /// Metadata files without an `id`.
    pub skipped: usize,
    /// Files or directories that could not be read.
    pub failed: usize,
}

impl ScanResult {
    /// Number of assets found.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Record one scanner outcome, logging it.
    pub fn record(&mut self, outcome: ScanOutcome) {
        match outcome {
            ScanOutcome::Asset { path, record } => {
                debug!("got asset: {}", record.id);
                self.assets.insert(path, record);
            }
            ScanOutcome::NotAnAsset { path } => {
                debug!("skipping file [{}], not an asset", path.display());
                self.skipped += 1;
            }
            ScanOutcome::Failed { path, error } => {
                match &error {
                    Q2wcError::Walk { .. } => warn!("Skipping [{}]: {}", path.display(), error),
                    _ => error!("Failed to read file [{}]: {}", path.display(), error),
                }
                self.failed += 1;
            }
        }
    }
}

/// Scan a library recursively for asset metadata.
///
/// Fails only when `root` cannot be resolved.
pub fn scan_library(root: impl AsRef<Path>, config: &ConverterConfig) -> Result<ScanResult> {
    let root = root.as_ref();
    let root = fs::canonicalize(root).map_err(|e| Q2wcError::Io {
        path: root.to_path_buf(),
        message: format!("Invalid library path: {}", e),
    })?;

    debug!("Scanning {}", root.display());

    let mut result = ScanResult {
        root: root.clone(),
        ..Default::default()
    };

    for outcome in AssetScanner::new(&root, config) {
        result.record(outcome);
    }

    Ok(result)
}

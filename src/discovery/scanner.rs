//! File system scanner for discovering asset metadata.
//!
//! Recursively walks a library directory and classifies every metadata file
//! it meets. The walk is lazy: each call to `next` parses at most one file.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::config::ConverterConfig;
use crate::error::{Q2wcError, Result};
use crate::types::AssetRecord;

use super::loader::load_asset;

/// What the scanner found at one path.
#[derive(Debug)]
pub enum ScanOutcome {
    /// A metadata file with a usable `id`.
    Asset { path: PathBuf, record: AssetRecord },
    /// Parsed fine, but has no `id`.
    NotAnAsset { path: PathBuf },
    /// Unreadable or malformed file, or a directory that could not be walked.
    Failed { path: PathBuf, error: Q2wcError },
}

impl ScanOutcome {
    pub fn path(&self) -> &Path {
        match self {
            ScanOutcome::Asset { path, .. }
            | ScanOutcome::NotAnAsset { path }
            | ScanOutcome::Failed { path, .. } => path,
        }
    }

    pub fn is_asset(&self) -> bool {
        matches!(self, ScanOutcome::Asset { .. })
    }
}

/// Lazy iterator over the metadata files below a root directory.
pub struct AssetScanner {
    walker: walkdir::IntoIter,
    extension: String,
}

impl AssetScanner {
    /// Start scanning `root`. Nothing is read until the iterator is polled.
    pub fn new(root: &Path, config: &ConverterConfig) -> Self {
        Self {
            walker: WalkDir::new(root).follow_links(config.follow_links).into_iter(),
            extension: config.metadata_extension.clone(),
        }
    }

    fn classify(path: &Path) -> ScanOutcome {
        let path = match fs::canonicalize(path) {
            Ok(path) => path,
            Err(e) => {
                return ScanOutcome::Failed {
                    path: path.to_path_buf(),
                    error: Q2wcError::Io {
                        path: path.to_path_buf(),
                        message: format!("Failed to resolve path: {}", e),
                    },
                }
            }
        };

        debug!("parsing {}", path.display());

        match load_asset(&path) {
            Ok(Some(record)) => ScanOutcome::Asset { path, record },
            Ok(None) => ScanOutcome::NotAnAsset { path },
            Err(error) => ScanOutcome::Failed { path, error },
        }
    }
}

impl Iterator for AssetScanner {
    type Item = ScanOutcome;

    fn next(&mut self) -> Option<ScanOutcome> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    return Some(ScanOutcome::Failed {
                        path: e.path().map(Path::to_path_buf).unwrap_or_default(),
                        error: Q2wcError::Walk {
                            message: e.to_string(),
                        },
                    })
                }
            };

            let path = entry.path();

            // Skip directories (and links to them when not following)
            if !path.is_file() {
                continue;
            }

            if is_metadata_file(path, &self.extension) {
                return Some(Self::classify(path));
            }
        }
    }
}

/// Check whether a file name ends with `.<extension>`.
pub fn is_metadata_file(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with(&format!(".{}", extension)))
        .unwrap_or(false)
}

/// Collect every outcome below `root` (mostly useful for tests and tooling).
pub fn scan_directory(root: &Path, config: &ConverterConfig) -> Result<Vec<ScanOutcome>> {
    if !root.is_dir() {
        return Err(Q2wcError::Io {
            path: root.to_path_buf(),
            message: "Not a directory".to_string(),
        });
    }

    Ok(AssetScanner::new(root, config).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const ASSET: &str =
        r#"{"id": "X1", "name": "Foo", "tags": [], "categories": [], "maps": []}"#;

    #[test]
    fn test_is_metadata_file() {
        assert!(is_metadata_file(Path::new("asset.json"), "json"));
        assert!(is_metadata_file(Path::new("/lib/surfaces/rock/rlsmz0p0.json"), "json"));
        assert!(!is_metadata_file(Path::new("asset.json.bak"), "json"));
        assert!(!is_metadata_file(Path::new("asset.JSON"), "json"));
        assert!(!is_metadata_file(Path::new("Foo_albedo.png"), "json"));
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();

        let outcomes = scan_directory(dir.path(), &ConverterConfig::default()).unwrap();

        assert!(outcomes.is_empty());
    }

    #[test]
    fn test_scan_classifies_files() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("asset.json"), ASSET).unwrap();
        fs::write(dir.path().join("other.json"), r#"{"version": 3}"#).unwrap();
        fs::write(dir.path().join("broken.json"), "{ nope").unwrap();
        fs::write(dir.path().join("readme.txt"), "not metadata").unwrap();

        let outcomes = scan_directory(dir.path(), &ConverterConfig::default()).unwrap();

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes.iter().filter(|o| o.is_asset()).count(), 1);
        assert_eq!(
            outcomes
                .iter()
                .filter(|o| matches!(o, ScanOutcome::NotAnAsset { .. }))
                .count(),
            1
        );
        let failed: Vec<_> = outcomes
            .iter()
            .filter(|o| matches!(o, ScanOutcome::Failed { .. }))
            .collect();
        assert_eq!(failed.len(), 1);
        assert!(failed[0].path().ends_with("broken.json"));
    }

    #[test]
    fn test_scan_recursive() {
        let dir = tempdir().unwrap();

        fs::create_dir_all(dir.path().join("surfaces/rock/cliff")).unwrap();
        fs::create_dir_all(dir.path().join("surfaces/soil")).unwrap();
        fs::write(dir.path().join("surfaces/rock/cliff/a.json"), ASSET).unwrap();
        fs::write(dir.path().join("surfaces/soil/b.json"), ASSET).unwrap();

        let outcomes = scan_directory(dir.path(), &ConverterConfig::default()).unwrap();

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(ScanOutcome::is_asset));
    }

    #[test]
    fn test_scan_paths_are_canonical() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("asset.json"), ASSET).unwrap();

        let outcomes = scan_directory(dir.path(), &ConverterConfig::default()).unwrap();
        let expected = fs::canonicalize(dir.path().join("asset.json")).unwrap();

        assert_eq!(outcomes[0].path(), expected.as_path());
    }

    #[test]
    fn test_scanner_is_lazy() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.json"), ASSET).unwrap();
        fs::write(dir.path().join("b.json"), ASSET).unwrap();

        let mut scanner = AssetScanner::new(dir.path(), &ConverterConfig::default());

        assert!(scanner.next().is_some());
        assert!(scanner.next().is_some());
        assert!(scanner.next().is_none());
    }

    #[test]
    fn test_scan_nonexistent_directory() {
        let result = scan_directory(Path::new("/nonexistent/path"), &ConverterConfig::default());

        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_follow_links_switch() {
        let library = tempdir().unwrap();
        let elsewhere = tempdir().unwrap();
        fs::write(elsewhere.path().join("linked.json"), ASSET).unwrap();
        std::os::unix::fs::symlink(elsewhere.path(), library.path().join("linked")).unwrap();

        let config = ConverterConfig::default();
        let outcomes = scan_directory(library.path(), &config).unwrap();
        assert!(outcomes.is_empty());

        let config = config.with_follow_links(true);
        let outcomes = scan_directory(library.path(), &config).unwrap();
        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].is_asset());
    }
}

//! Descriptor generation: transform each asset and write its XML.

mod descriptor;
mod xml;

use std::path::Path;

use log::error;

use crate::config::ConverterConfig;
use crate::discovery::ScanResult;
use crate::error::Result;
use crate::types::AssetRecord;

pub use descriptor::{asset_guid, describe_asset, ticks};
pub use xml::{render_xml, write_xml};

/// Outcome tallies of a descriptor run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub written: usize,
    pub failed: usize,
}

impl WriteSummary {
    pub fn total(&self) -> usize {
        self.written + self.failed
    }
}

/// Transform and write the descriptor for one asset, given its metadata path.
pub fn write_descriptor(metadata_path: &Path, record: &AssetRecord, config: &ConverterConfig) -> Result<()> {
    let dir = metadata_path.parent().unwrap_or_else(|| Path::new("."));
    let descriptor = describe_asset(record, dir, config);
    write_xml(dir, &descriptor, config)?;
    Ok(())
}

/// Write descriptors for every scanned asset.
///
/// A failing asset is logged and counted; the run always continues.
pub fn write_descriptors(scan: &ScanResult, config: &ConverterConfig) -> WriteSummary {
    let mut summary = WriteSummary::default();

    for (path, record) in &scan.assets {
        match write_descriptor(path, record, config) {
            Ok(()) => summary.written += 1,
            Err(e) => {
                error!("Failed to write descriptor for {} [{}]: {}", record.id, path.display(), e);
                summary.failed += 1;
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MapEntry;
    use std::fs;
    use tempfile::tempdir;

    fn record(id: &str) -> AssetRecord {
        AssetRecord {
            id: id.to_string(),
            name: "Foo".to_string(),
            tags: vec!["a".to_string()],
            categories: vec!["b".to_string()],
            maps: vec![
                MapEntry::new("albedo", "albedo.png"),
                MapEntry::new("normal", "normal.png"),
                MapEntry::new("displacement", "disp.png"),
            ],
        }
    }

    fn asset_dir(root: &Path, name: &str, files: &[&str]) -> std::path::PathBuf {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        for file in files {
            fs::write(dir.join(file), b"").unwrap();
        }
        dir.join("asset.json")
    }

    #[test]
    fn test_write_descriptor() {
        let root = tempdir().unwrap();
        let meta = asset_dir(root.path(), "foo", &["albedo.png", "normal.png", "disp.png"]);

        write_descriptor(&meta, &record("X1"), &ConverterConfig::default()).unwrap();

        let xml = fs::read_to_string(root.path().join("foo/Description.xml")).unwrap();
        assert!(xml.contains(r#"Tags="a b""#));
        assert!(xml.contains(r#"<Normal File="normal.png""#));
    }

    #[test]
    fn test_write_descriptors_counts_failures() {
        let root = tempdir().unwrap();
        let mut scan = ScanResult::default();

        let good = asset_dir(root.path(), "good", &["albedo.png", "normal.png", "disp.png"]);
        let no_normal = asset_dir(root.path(), "no_normal", &["albedo.png", "disp.png"]);
        let also_good = asset_dir(root.path(), "also_good", &["albedo.png", "normal.png", "disp.png"]);
        scan.assets.insert(good, record("G1"));
        scan.assets.insert(no_normal, record("N1"));
        scan.assets.insert(also_good, record("G2"));

        let summary = write_descriptors(&scan, &ConverterConfig::default());

        assert_eq!(summary, WriteSummary { written: 2, failed: 1 });
        assert_eq!(summary.total(), 3);
        assert!(root.path().join("good/Description.xml").exists());
        assert!(root.path().join("also_good/Description.xml").exists());
        assert!(!root.path().join("no_normal/Description.xml").exists());
    }

    #[test]
    fn test_write_descriptors_empty() {
        let summary = write_descriptors(&ScanResult::default(), &ConverterConfig::default());
        assert_eq!(summary, WriteSummary::default());
    }
}

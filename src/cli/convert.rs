//! Conversion run: scan the library, then write every descriptor.

use std::path::Path;

use log::info;

use crate::config::ConverterConfig;
use crate::discovery::scan_library;
use crate::error::Result;
use crate::render::{write_descriptors, WriteSummary};

use super::Cli;

/// Run the conversion described by the command line.
pub fn run(cli: &Cli) -> Result<WriteSummary> {
    convert_library(&cli.basedir, &ConverterConfig::new())
}

/// Scan `root` and write descriptors for everything found.
///
/// Per-asset failures only show up in the returned summary; an unusable
/// root is the only error.
pub fn convert_library(root: &Path, config: &ConverterConfig) -> Result<WriteSummary> {
    info!("Scanning library...");
    let scan = scan_library(root, config)?;

    info!("Found {} assets", scan.len());
    info!("Writing XML descriptors...");
    let summary = write_descriptors(&scan, config);

    info!("Wrote {} files, {} failed", summary.written, summary.failed);
    info!("Complete.");

    Ok(summary)
}

//! Asset record to descriptor field transform.
//!
//! Resolves which of the record's maps exist next to the metadata file and
//! derives the remaining descriptor fields from the record itself.

use std::path::Path;

use chrono::{DateTime, Utc};
use log::debug;
use uuid::Uuid;

use crate::config::ConverterConfig;
use crate::types::{AssetRecord, MapEntry, OutputDescriptor};

/// Build the descriptor fields for an asset living in `dir`.
///
/// The timestamp is sampled on every call.
pub fn describe_asset(record: &AssetRecord, dir: &Path, config: &ConverterConfig) -> OutputDescriptor {
    let mut descriptor = OutputDescriptor::new(
        record.taglist(),
        record.description(),
        asset_guid(&config.namespace, &record.id),
        ticks(Utc::now()),
        record.preview(),
    );

    for map in &record.maps {
        if !dir.join(&map.uri).exists() {
            continue;
        }
        if is_skipped_format(map, config) {
            debug!("skipping {} map {} for {}", map.map_type, map.uri, record.id);
            continue;
        }
        descriptor.insert_map(&map.map_type, &map.uri);
    }

    descriptor
}

/// Derive an asset guid from its id under the run namespace.
pub fn asset_guid(namespace: &Uuid, id: &str) -> String {
    Uuid::new_v5(namespace, id.as_bytes()).to_string()
}

/// Seconds since the Unix epoch times 10^8.
pub fn ticks(now: DateTime<Utc>) -> i64 {
    now.timestamp() * 100_000_000 + i64::from(now.timestamp_subsec_nanos() / 10)
}

fn is_skipped_format(map: &MapEntry, config: &ConverterConfig) -> bool {
    config.skips_map_format(&map.map_type)
        || map
            .mime_type
            .as_deref()
            .is_some_and(|mime| config.skips_map_format(mime))
}

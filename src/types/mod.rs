//! Core domain types for q2wc.
//!
//! - `AssetRecord` / `MapEntry` - parsed library metadata
//! - `MapRole` - the map slots a descriptor requires
//! - `OutputDescriptor` - flat fields a descriptor is written from

mod asset;
mod descriptor;

pub use asset::{AssetRecord, MapEntry, MapRole};
pub use descriptor::{OutputDescriptor, MAP_FIELD_PREFIX};

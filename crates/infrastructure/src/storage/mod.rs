pub mod fs_zone_store;

pub use fs_zone_store::{to_pretty_json, FsZoneStore};

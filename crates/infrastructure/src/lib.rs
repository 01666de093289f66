//! zonecrawl infrastructure: process and file-system adapters
pub mod storage;
pub mod system;

pub use storage::FsZoneStore;
pub use system::DigResolver;

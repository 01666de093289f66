mod zone_store;
mod zone_transfer_resolver;

pub use zone_store::ZoneStore;
pub use zone_transfer_resolver::{ResolverOutput, ZoneTransferResolver};

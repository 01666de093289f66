mod context;
mod run_recon;
mod traversal;

pub use context::ReconContext;
pub use run_recon::{RunReconUseCase, RunReport};
pub use traversal::{DiscoveryOutcome, TransferOutcome, ZoneTraversal};

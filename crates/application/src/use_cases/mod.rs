pub mod recon;

pub use recon::{
    DiscoveryOutcome, ReconContext, RunReconUseCase, RunReport, TransferOutcome, ZoneTraversal,
};

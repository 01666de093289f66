use std::path::Path;
use std::sync::Arc;
use zonecrawl_application::use_cases::RunReconUseCase;
use zonecrawl_domain::{Config, DomainError};
use zonecrawl_infrastructure::{DigResolver, FsZoneStore};

pub struct Adapters {
    pub resolver: Arc<DigResolver>,
    pub store: Arc<FsZoneStore>,
}

impl Adapters {
    /// Output directory is created here so a bad path fails before any
    /// resolver runs.
    pub async fn new(config: &Config, output_dir: &Path) -> Result<Self, DomainError> {
        let store = FsZoneStore::new(output_dir, config.output.metadata_file.clone());
        store.prepare().await?;

        Ok(Self {
            resolver: Arc::new(DigResolver::from_config(&config.resolver)),
            store: Arc::new(store),
        })
    }
}

pub struct UseCases {
    pub run_recon: RunReconUseCase,
}

impl UseCases {
    pub fn new(adapters: &Adapters) -> Self {
        Self {
            run_recon: RunReconUseCase::new(adapters.resolver.clone(), adapters.store.clone()),
        }
    }
}

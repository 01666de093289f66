use async_trait::async_trait;
use zonecrawl_domain::{DomainError, RunMetadata, ZoneDump};

#[async_trait]
pub trait ZoneStore: Send + Sync {
    async fn save_zone(&self, dump: &ZoneDump) -> Result<(), DomainError>;

    /// Persists the run summary and returns where it was written.
    async fn save_metadata(&self, metadata: &RunMetadata) -> Result<String, DomainError>;
}

use super::context::ReconContext;
use super::traversal::{DiscoveryOutcome, ZoneTraversal};
use crate::ports::{ZoneStore, ZoneTransferResolver};
use std::sync::Arc;
use tracing::{info, warn};
use zonecrawl_domain::{DomainError, MetadataWarning, RunMetadata};

#[derive(Debug, Clone)]
pub struct RunReport {
    pub domain: String,
    pub outcome: DiscoveryOutcome,
    pub metadata: RunMetadata,
    pub metadata_location: String,
    pub transfers_attempted: usize,
    pub lookups_performed: usize,
    pub max_depth: usize,
    pub warnings: Vec<MetadataWarning>,
}

impl RunReport {
    pub fn zone_file_count(&self) -> usize {
        self.metadata.zone_files.len()
    }

    pub fn top_name_server_count(&self) -> usize {
        self.metadata.top_name_servers.len()
    }
}

/// One top-level reconnaissance run: discover the root domain, walk
/// everything reachable from it, then write the accumulated metadata.
pub struct RunReconUseCase {
    traversal: ZoneTraversal,
    store: Arc<dyn ZoneStore>,
}

impl RunReconUseCase {
    pub fn new(resolver: Arc<dyn ZoneTransferResolver>, store: Arc<dyn ZoneStore>) -> Self {
        Self {
            traversal: ZoneTraversal::new(resolver, store.clone()),
            store,
        }
    }

    pub async fn execute(&self, domain: &str) -> Result<RunReport, DomainError> {
        let domain = match validate_domain(domain) {
            Ok(domain) => domain,
            Err(e) => {
                // Nothing was crawled, but the output directory still gets
                // its (empty) metadata file.
                warn!(error = %e, "Rejected domain, writing empty metadata");
                self.store.save_metadata(&RunMetadata::new()).await?;
                return Err(e);
            }
        };
        let mut ctx = ReconContext::new();

        info!(domain = %domain, "Starting zone reconnaissance");
        let outcome = self.traversal.discover(&mut ctx, domain, true).await;

        let warnings = ctx.metadata().sanity_check();
        for warning in &warnings {
            warn!(domain = %domain, "Metadata check: {}", warning);
        }

        let metadata_location = self.store.save_metadata(ctx.metadata()).await?;

        info!(
            domain = %domain,
            zone_files = ctx.metadata().zone_files.len(),
            transfers = ctx.transfers_attempted(),
            lookups = ctx.lookups_performed(),
            "Zone reconnaissance finished"
        );

        Ok(RunReport {
            domain: domain.to_string(),
            outcome,
            transfers_attempted: ctx.transfers_attempted(),
            lookups_performed: ctx.lookups_performed(),
            max_depth: ctx.max_depth(),
            metadata: ctx.into_metadata(),
            metadata_location,
            warnings,
        })
    }
}

/// Trims and rejects names the resolver would read as options.
fn validate_domain(domain: &str) -> Result<&str, DomainError> {
    let domain = domain.trim();

    if domain.is_empty() {
        return Err(DomainError::InvalidDomainName(
            "domain cannot be empty".to_string(),
        ));
    }

    if domain.starts_with('-') || domain.starts_with('+') || domain.starts_with('@') {
        return Err(DomainError::InvalidDomainName(domain.to_string()));
    }

    if domain.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidDomainName(domain.to_string()));
    }

    Ok(domain)
}

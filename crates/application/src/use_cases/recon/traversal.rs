use super::context::ReconContext;
use crate::ports::{ZoneStore, ZoneTransferResolver};
use futures::future::BoxFuture;
use std::sync::Arc;
use tracing::{debug, error, info};
use zonecrawl_domain::{parse_name_server_list, parse_zone, RecordType, ZoneDump};

/// What happened to one (domain, name server) transfer attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    /// Server already attempted in this run; nothing was sent.
    Skipped,
    /// Resolver could not run, wrote to stderr, or the dump was not written.
    Failed,
    /// Transfer ran but produced no records.
    Empty,
    /// SOA master is a domain this run already looked up.
    AlreadyCaptured,
    Dumped { file_name: String },
}

impl TransferOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TransferOutcome::Dumped { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryOutcome {
    AlreadyVisited,
    LookupFailed,
    /// Every candidate server refused or failed the transfer.
    NoZone,
    Captured { name_server: String },
}

/// Depth-first walk over domains and name servers.
///
/// `discover` looks up the NS set of a domain and tries each server until
/// one transfer succeeds. `attempt_transfer` pulls the zone, stores it,
/// then follows every NS record (same domain, next counter) and every
/// CNAME target (fresh discovery). Both are boxed so they can recurse into
/// each other.
pub struct ZoneTraversal {
    resolver: Arc<dyn ZoneTransferResolver>,
    store: Arc<dyn ZoneStore>,
}

impl ZoneTraversal {
    pub fn new(resolver: Arc<dyn ZoneTransferResolver>, store: Arc<dyn ZoneStore>) -> Self {
        Self { resolver, store }
    }

    pub fn discover<'a>(
        &'a self,
        ctx: &'a mut ReconContext,
        domain: &'a str,
        top_level: bool,
    ) -> BoxFuture<'a, DiscoveryOutcome> {
        Box::pin(async move {
            if !ctx.visit_domain(domain) {
                debug!(domain = %domain, "Domain already looked up");
                return DiscoveryOutcome::AlreadyVisited;
            }

            info!(domain = %domain, "dig +short ns {}", domain);
            ctx.record_lookup();

            let stdout = match self
                .resolver
                .lookup_name_servers(domain)
                .await
                .and_then(|output| output.into_stdout())
            {
                Ok(stdout) => stdout,
                Err(e) => {
                    error!(domain = %domain, error = %e, "NS lookup failed");
                    return DiscoveryOutcome::LookupFailed;
                }
            };

            for name_server in parse_name_server_list(&stdout) {
                info!(domain = %domain, name_server = %name_server, "Trying zone transfer");

                let outcome = self
                    .attempt_transfer(ctx, domain, &name_server, 0, top_level)
                    .await;

                if outcome.is_success() {
                    info!(
                        domain = %domain,
                        name_server = %name_server,
                        "Zone transfer successful"
                    );
                    return DiscoveryOutcome::Captured { name_server };
                }

                info!(
                    domain = %domain,
                    name_server = %name_server,
                    outcome = ?outcome,
                    "Zone transfer failed"
                );
            }

            DiscoveryOutcome::NoZone
        })
    }

    pub fn attempt_transfer<'a>(
        &'a self,
        ctx: &'a mut ReconContext,
        domain: &'a str,
        name_server: &'a str,
        counter: u32,
        top_level: bool,
    ) -> BoxFuture<'a, TransferOutcome> {
        Box::pin(async move {
            if !ctx.visit_name_server(name_server) {
                debug!(name_server = %name_server, "Name server already attempted");
                return TransferOutcome::Skipped;
            }

            ctx.enter();
            let outcome = self
                .transfer_and_follow(ctx, domain, name_server, counter, top_level)
                .await;
            ctx.exit();
            outcome
        })
    }

    async fn transfer_and_follow(
        &self,
        ctx: &mut ReconContext,
        domain: &str,
        name_server: &str,
        counter: u32,
        top_level: bool,
    ) -> TransferOutcome {
        info!(
            domain = %domain,
            name_server = %name_server,
            "dig axfr {} @{}",
            domain,
            name_server
        );
        ctx.record_transfer();

        let stdout = match self
            .resolver
            .transfer_zone(domain, name_server)
            .await
            .and_then(|output| output.into_stdout())
        {
            Ok(stdout) => stdout,
            Err(e) => {
                error!(
                    domain = %domain,
                    name_server = %name_server,
                    error = %e,
                    "Zone transfer errored"
                );
                return TransferOutcome::Failed;
            }
        };

        let parsed = parse_zone(&stdout);
        for rejected in &parsed.rejected {
            debug!(
                domain = %domain,
                name_server = %name_server,
                error = %rejected,
                "Skipping malformed record"
            );
        }

        if parsed.is_empty() {
            debug!(
                domain = %domain,
                name_server = %name_server,
                "Zone transfer returned no records"
            );
            return TransferOutcome::Empty;
        }

        let zone_master = parsed.soa_master().map(str::to_string);
        if let Some(master) = &zone_master {
            if top_level && ctx.metadata_mut().add_top_name_server(master) {
                info!(domain = %domain, zone_master = %master, "Top name server recorded");
            }

            if ctx.is_domain_visited(master) {
                debug!(zone_master = %master, "Zone master already looked up as a domain");
                return TransferOutcome::AlreadyCaptured;
            }

            ctx.visit_name_server(master);
        }

        let index = ctx.claim_dump_index(domain, counter);
        let dump = ZoneDump::new(domain, index, stdout);
        let file_name = dump.file_name();

        if let Err(e) = self.store.save_zone(&dump).await {
            error!(file_name = %file_name, error = %e, "Failed to write zone dump");
            return TransferOutcome::Failed;
        }

        let credited = zone_master.as_deref().unwrap_or(name_server);
        ctx.metadata_mut().add_zone_file(file_name.clone(), credited);
        debug!(file_name = %file_name, name_server = %credited, "Zone dumped");

        let follow_ups: Vec<(RecordType, String)> = parsed
            .records
            .iter()
            .filter(|r| r.is(&RecordType::NS) || r.is(&RecordType::CNAME))
            .filter_map(|r| r.value().map(|v| (r.record_type.clone(), v.to_string())))
            .collect();

        for (record_type, target) in &follow_ups {
            if *record_type == RecordType::NS {
                self.attempt_transfer(ctx, domain, target, counter + 1, false)
                    .await;
            } else {
                self.discover(ctx, target, false).await;
            }
        }

        TransferOutcome::Dumped { file_name }
    }
}

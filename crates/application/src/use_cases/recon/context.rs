use std::collections::{HashMap, HashSet};
use zonecrawl_domain::RunMetadata;

/// Mutable state of one reconnaissance run.
///
/// Owned by the run and handed down every recursive call by `&mut`. The
/// visited sets only grow: a name server is asked for a transfer at most
/// once per run and a domain is looked up at most once per run, which is
/// what makes the walk terminate on cyclic delegations.
#[derive(Debug, Default)]
pub struct ReconContext {
    visited_name_servers: HashSet<String>,
    visited_domains: HashSet<String>,
    metadata: RunMetadata,
    next_dump_index: HashMap<String, u32>,
    transfers_attempted: usize,
    lookups_performed: usize,
    depth: usize,
    max_depth: usize,
}

impl ReconContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the server visited. Returns false if it already was.
    pub fn visit_name_server(&mut self, name_server: &str) -> bool {
        self.visited_name_servers.insert(name_server.to_string())
    }

    pub fn is_name_server_visited(&self, name_server: &str) -> bool {
        self.visited_name_servers.contains(name_server)
    }

    /// Marks the domain visited. Returns false if it already was.
    pub fn visit_domain(&mut self, domain: &str) -> bool {
        self.visited_domains.insert(domain.to_string())
    }

    pub fn is_domain_visited(&self, domain: &str) -> bool {
        self.visited_domains.contains(domain)
    }

    pub fn visited_name_server_count(&self) -> usize {
        self.visited_name_servers.len()
    }

    pub fn visited_domain_count(&self) -> usize {
        self.visited_domains.len()
    }

    pub fn metadata(&self) -> &RunMetadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut RunMetadata {
        &mut self.metadata
    }

    pub fn into_metadata(self) -> RunMetadata {
        self.metadata
    }

    /// Next free dump index for `domain`, never below `floor`.
    ///
    /// Indices handed out for one domain strictly increase, so sibling
    /// delegations that reach the same counter still get distinct files.
    pub fn claim_dump_index(&mut self, domain: &str, floor: u32) -> u32 {
        let next = self.next_dump_index.entry(domain.to_string()).or_insert(0);
        let index = (*next).max(floor);
        *next = index + 1;
        index
    }

    pub(crate) fn record_transfer(&mut self) {
        self.transfers_attempted += 1;
    }

    pub(crate) fn record_lookup(&mut self) {
        self.lookups_performed += 1;
    }

    pub fn transfers_attempted(&self) -> usize {
        self.transfers_attempted
    }

    pub fn lookups_performed(&self) -> usize {
        self.lookups_performed
    }

    pub(crate) fn enter(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
    }

    pub(crate) fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Deepest nesting of transfer attempts seen so far.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

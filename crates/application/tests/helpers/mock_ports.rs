#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use zonecrawl_application::ports::{ResolverOutput, ZoneStore, ZoneTransferResolver};
use zonecrawl_domain::{DomainError, RunMetadata, ZoneDump};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverCall {
    Transfer { domain: String, name_server: String },
    Lookup { domain: String },
}

/// Scripted resolver that panics when a name server is asked for a
/// transfer twice or a domain is looked up twice.
pub struct MockZoneResolver {
    transfers: Mutex<HashMap<String, ResolverOutput>>,
    lookups: Mutex<HashMap<String, ResolverOutput>>,
    invocation_errors: Mutex<HashSet<String>>,
    calls: Mutex<Vec<ResolverCall>>,
}

impl MockZoneResolver {
    pub fn new() -> Self {
        Self {
            transfers: Mutex::new(HashMap::new()),
            lookups: Mutex::new(HashMap::new()),
            invocation_errors: Mutex::new(HashSet::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_transfer(self, name_server: &str, zone_text: &str) -> Self {
        self.transfers
            .lock()
            .unwrap()
            .insert(name_server.to_string(), ResolverOutput::success(zone_text));
        self
    }

    pub fn with_transfer_error(self, name_server: &str, stderr: &str) -> Self {
        self.transfers
            .lock()
            .unwrap()
            .insert(name_server.to_string(), ResolverOutput::new("", stderr));
        self
    }

    /// The resolver process itself fails to run for this key.
    pub fn with_invocation_error(self, key: &str) -> Self {
        self.invocation_errors
            .lock()
            .unwrap()
            .insert(key.to_string());
        self
    }

    pub fn with_name_servers(self, domain: &str, name_servers: &[&str]) -> Self {
        let mut stdout = name_servers.join("\n");
        stdout.push('\n');
        self.lookups
            .lock()
            .unwrap()
            .insert(domain.to_string(), ResolverOutput::success(stdout));
        self
    }

    pub fn with_lookup_error(self, domain: &str, stderr: &str) -> Self {
        self.lookups
            .lock()
            .unwrap()
            .insert(domain.to_string(), ResolverOutput::new("", stderr));
        self
    }

    pub fn calls(&self) -> Vec<ResolverCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn transferred_servers(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ResolverCall::Transfer { name_server, .. } => Some(name_server),
                ResolverCall::Lookup { .. } => None,
            })
            .collect()
    }

    pub fn looked_up_domains(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ResolverCall::Lookup { domain } => Some(domain),
                ResolverCall::Transfer { .. } => None,
            })
            .collect()
    }

    fn record(&self, call: ResolverCall) {
        let mut calls = self.calls.lock().unwrap();
        assert!(!calls.contains(&call), "resolver queried twice: {:?}", call);
        calls.push(call);
    }
}

impl Default for MockZoneResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ZoneTransferResolver for MockZoneResolver {
    async fn transfer_zone(
        &self,
        domain: &str,
        name_server: &str,
    ) -> Result<ResolverOutput, DomainError> {
        let previous = self.transferred_servers();
        assert!(
            !previous.iter().any(|s| s == name_server),
            "name server {} queried twice",
            name_server
        );
        self.record(ResolverCall::Transfer {
            domain: domain.to_string(),
            name_server: name_server.to_string(),
        });

        if self.invocation_errors.lock().unwrap().contains(name_server) {
            return Err(DomainError::ResolverInvocation {
                program: "dig".to_string(),
                reason: "mock failure".to_string(),
            });
        }

        Ok(self
            .transfers
            .lock()
            .unwrap()
            .get(name_server)
            .cloned()
            .unwrap_or_else(|| ResolverOutput::success("; Transfer failed.\n")))
    }

    async fn lookup_name_servers(&self, domain: &str) -> Result<ResolverOutput, DomainError> {
        self.record(ResolverCall::Lookup {
            domain: domain.to_string(),
        });

        if self.invocation_errors.lock().unwrap().contains(domain) {
            return Err(DomainError::ResolverInvocation {
                program: "dig".to_string(),
                reason: "mock failure".to_string(),
            });
        }

        Ok(self
            .lookups
            .lock()
            .unwrap()
            .get(domain)
            .cloned()
            .unwrap_or_default())
    }
}

/// In-memory store; can be told to refuse specific dump file names.
pub struct MockZoneStore {
    dumps: Mutex<Vec<ZoneDump>>,
    metadata: Mutex<Option<RunMetadata>>,
    failing_files: Mutex<HashSet<String>>,
    fail_metadata: Mutex<bool>,
}

impl MockZoneStore {
    pub fn new() -> Self {
        Self {
            dumps: Mutex::new(Vec::new()),
            metadata: Mutex::new(None),
            failing_files: Mutex::new(HashSet::new()),
            fail_metadata: Mutex::new(false),
        }
    }

    pub fn failing_on(self, file_name: &str) -> Self {
        self.failing_files
            .lock()
            .unwrap()
            .insert(file_name.to_string());
        self
    }

    pub fn failing_metadata(self) -> Self {
        *self.fail_metadata.lock().unwrap() = true;
        self
    }

    pub fn dumps(&self) -> Vec<ZoneDump> {
        self.dumps.lock().unwrap().clone()
    }

    pub fn file_names(&self) -> Vec<String> {
        self.dumps().iter().map(ZoneDump::file_name).collect()
    }

    pub fn saved_metadata(&self) -> Option<RunMetadata> {
        self.metadata.lock().unwrap().clone()
    }
}

impl Default for MockZoneStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ZoneStore for MockZoneStore {
    async fn save_zone(&self, dump: &ZoneDump) -> Result<(), DomainError> {
        if self.failing_files.lock().unwrap().contains(&dump.file_name()) {
            return Err(DomainError::IoError("disk full".to_string()));
        }
        self.dumps.lock().unwrap().push(dump.clone());
        Ok(())
    }

    async fn save_metadata(&self, metadata: &RunMetadata) -> Result<String, DomainError> {
        if *self.fail_metadata.lock().unwrap() {
            return Err(DomainError::IoError("read-only file system".to_string()));
        }
        *self.metadata.lock().unwrap() = Some(metadata.clone());
        Ok("memory://metadata.json".to_string())
    }
}

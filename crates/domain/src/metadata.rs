use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

pub const DEFAULT_METADATA_FILE: &str = "metadata.json";

/// One successfully dumped zone and the server credited for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneFileEntry {
    #[serde(rename = "FileName")]
    pub file_name: String,

    #[serde(rename = "NameServer")]
    pub name_server: String,
}

/// Summary of a crawl, serialized as `metadata.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetadata {
    #[serde(rename = "TopNameServers")]
    pub top_name_servers: Vec<String>,

    #[serde(rename = "ZoneFiles")]
    pub zone_files: Vec<ZoneFileEntry>,
}

impl RunMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the server was already listed.
    pub fn add_top_name_server(&mut self, name_server: &str) -> bool {
        if self.top_name_servers.iter().any(|s| s == name_server) {
            return false;
        }
        self.top_name_servers.push(name_server.to_string());
        true
    }

    pub fn add_zone_file(&mut self, file_name: impl Into<String>, name_server: impl Into<String>) {
        self.zone_files.push(ZoneFileEntry {
            file_name: file_name.into(),
            name_server: name_server.into(),
        });
    }

    /// Consistency problems a consumer of `metadata.json` would reject.
    pub fn sanity_check(&self) -> Vec<MetadataWarning> {
        let mut warnings = Vec::new();

        if !self.top_name_servers.is_empty() {
            let credited: HashSet<String> = self
                .zone_files
                .iter()
                .map(|z| z.name_server.to_lowercase())
                .collect();
            let any_credited = self
                .top_name_servers
                .iter()
                .any(|s| credited.contains(&s.to_lowercase()));
            if !any_credited {
                warnings.push(MetadataWarning::TopNameServerNotCredited);
            }
        }

        let mut seen = HashSet::new();
        for entry in &self.zone_files {
            if !seen.insert(entry.file_name.as_str()) {
                warnings.push(MetadataWarning::DuplicateFileName(entry.file_name.clone()));
            }
        }

        warnings
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataWarning {
    /// No zone file names any of the top name servers as its server.
    TopNameServerNotCredited,

    DuplicateFileName(String),
}

impl fmt::Display for MetadataWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataWarning::TopNameServerNotCredited => {
                write!(f, "no top name server is credited as name server of a zone file")
            }
            MetadataWarning::DuplicateFileName(name) => {
                write!(f, "zone file {} is listed more than once", name)
            }
        }
    }
}

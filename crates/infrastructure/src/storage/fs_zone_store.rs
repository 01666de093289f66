use async_trait::async_trait;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};
use zonecrawl_application::ports::ZoneStore;
use zonecrawl_domain::{DomainError, RunMetadata, ZoneDump};

/// Writes zone dumps and the metadata file into one output directory.
pub struct FsZoneStore {
    directory: PathBuf,
    metadata_file: String,
}

impl FsZoneStore {
    pub fn new(directory: impl Into<PathBuf>, metadata_file: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            metadata_file: metadata_file.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Creates the output directory if needed and checks it is one.
    pub async fn prepare(&self) -> Result<(), DomainError> {
        let invalid = |reason: String| DomainError::InvalidOutputDirectory {
            path: self.directory.display().to_string(),
            reason,
        };

        fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| invalid(e.to_string()))?;

        let meta = fs::metadata(&self.directory)
            .await
            .map_err(|e| invalid(e.to_string()))?;
        if !meta.is_dir() {
            return Err(invalid("not a directory".to_string()));
        }

        info!(directory = %self.directory.display(), "Output directory ready");
        Ok(())
    }

    /// File names come from zone data; they must stay inside the directory.
    fn path_for(&self, file_name: &str) -> Result<PathBuf, DomainError> {
        if file_name.is_empty()
            || file_name.contains(&['/', '\\'][..])
            || file_name == "."
            || file_name == ".."
        {
            return Err(DomainError::IoError(format!(
                "refusing to write outside {}: {}",
                self.directory.display(),
                file_name
            )));
        }
        Ok(self.directory.join(file_name))
    }
}

/// Pretty JSON with a 4-space indent.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, DomainError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| DomainError::SerializationError(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| DomainError::SerializationError(e.to_string()))
}

#[async_trait]
impl ZoneStore for FsZoneStore {
    async fn save_zone(&self, dump: &ZoneDump) -> Result<(), DomainError> {
        let path = self.path_for(&dump.file_name())?;

        fs::write(&path, dump.contents.as_bytes())
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", path.display(), e)))?;

        debug!(path = %path.display(), bytes = dump.contents.len(), "Zone dump written");
        Ok(())
    }

    async fn save_metadata(&self, metadata: &RunMetadata) -> Result<String, DomainError> {
        let path = self.path_for(&self.metadata_file)?;
        let json = to_pretty_json(metadata)?;

        fs::write(&path, json.as_bytes())
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", path.display(), e)))?;

        info!(
            path = %path.display(),
            zone_files = metadata.zone_files.len(),
            "Metadata written"
        );
        Ok(path.display().to_string())
    }
}

use crate::metadata::DEFAULT_METADATA_FILE;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_metadata_file")]
    pub metadata_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            metadata_file: default_metadata_file(),
        }
    }
}

fn default_metadata_file() -> String {
    DEFAULT_METADATA_FILE.to_string()
}

use serde::{Deserialize, Serialize};

/// How the external resolver utility is invoked.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Program name or path, looked up on `PATH` when bare.
    #[serde(default = "default_program")]
    pub program: String,

    /// Kill an invocation that runs longer than this. Unset waits forever.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            timeout_secs: None,
        }
    }
}

fn default_program() -> String {
    "dig".to_string()
}

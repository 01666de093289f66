use async_trait::async_trait;
use zonecrawl_domain::DomainError;

/// Captured output channels of one external resolver invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverOutput {
    pub stdout: String,
    pub stderr: String,
}

impl ResolverOutput {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn success(stdout: impl Into<String>) -> Self {
        Self::new(stdout, "")
    }

    /// Anything on the error channel fails the call, whatever stdout holds.
    pub fn into_stdout(self) -> Result<String, DomainError> {
        if self.stderr.is_empty() {
            Ok(self.stdout)
        } else {
            Err(DomainError::ResolverStderr(self.stderr.trim_end().to_string()))
        }
    }
}

#[async_trait]
pub trait ZoneTransferResolver: Send + Sync {
    /// Full zone transfer of `domain` from `name_server`.
    async fn transfer_zone(
        &self,
        domain: &str,
        name_server: &str,
    ) -> Result<ResolverOutput, DomainError>;

    /// Short-form NS lookup: newline separated server names on stdout.
    async fn lookup_name_servers(&self, domain: &str) -> Result<ResolverOutput, DomainError>;
}

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;
use zonecrawl_application::ports::{ResolverOutput, ZoneTransferResolver};
use zonecrawl_domain::config::ResolverConfig;
use zonecrawl_domain::DomainError;

/// Runs the `dig` utility as a child process.
///
/// `dig axfr <domain> @<server>` for transfers, `dig +short ns <domain>`
/// for NS lookups. Both channels are captured; interpreting them is left
/// to the caller.
pub struct DigResolver {
    program: String,
    timeout: Option<Duration>,
}

impl DigResolver {
    pub fn new(program: impl Into<String>, timeout_secs: Option<u64>) -> Self {
        Self {
            program: program.into(),
            timeout: timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.program.clone(), config.timeout_secs)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Names coming out of zone data end up on the command line; anything
    /// dig would parse as an option is refused.
    fn check_operand(&self, operand: &str) -> Result<(), DomainError> {
        if operand.is_empty() || operand.starts_with(&['-', '+', '@'][..]) {
            return Err(DomainError::ResolverInvocation {
                program: self.program.clone(),
                reason: format!("refusing operand '{}'", operand),
            });
        }
        Ok(())
    }

    async fn run(&self, args: &[String]) -> Result<ResolverOutput, DomainError> {
        let invocation_error = |reason: String| DomainError::ResolverInvocation {
            program: self.program.clone(),
            reason,
        };

        let child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| invocation_error(e.to_string()))?;

        let output = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, child.wait_with_output())
                .await
                .map_err(|_| DomainError::ResolverTimeout(timeout.as_secs()))?,
            None => child.wait_with_output().await,
        }
        .map_err(|e| invocation_error(e.to_string()))?;

        debug!(
            program = %self.program,
            args = ?args,
            status = %output.status,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "Resolver exited"
        );

        Ok(ResolverOutput::new(
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        ))
    }
}

#[async_trait]
impl ZoneTransferResolver for DigResolver {
    async fn transfer_zone(
        &self,
        domain: &str,
        name_server: &str,
    ) -> Result<ResolverOutput, DomainError> {
        self.check_operand(domain)?;
        self.check_operand(name_server)?;

        let args = vec![
            "axfr".to_string(),
            domain.to_string(),
            format!("@{}", name_server),
        ];
        self.run(&args).await
    }

    async fn lookup_name_servers(&self, domain: &str) -> Result<ResolverOutput, DomainError> {
        self.check_operand(domain)?;

        let args = vec!["+short".to_string(), "ns".to_string(), domain.to_string()];
        self.run(&args).await
    }
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid output directory {path}: {reason}")]
    InvalidOutputDirectory { path: String, reason: String },

    #[error("Failed to run resolver `{program}`: {reason}")]
    ResolverInvocation { program: String, reason: String },

    #[error("Resolver reported an error: {0}")]
    ResolverStderr(String),

    #[error("Resolver timed out after {0}s")]
    ResolverTimeout(u64),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// A zone-transfer line that could not be turned into a resource record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordParseError {
    #[error("line {line}: expected at least 4 fields, found {found}: {raw}")]
    TooFewFields {
        line: usize,
        found: usize,
        raw: String,
    },

    #[error("line {line}: {record_type} record without a value: {raw}")]
    MissingValue {
        line: usize,
        record_type: String,
        raw: String,
    },
}

impl RecordParseError {
    pub fn line(&self) -> usize {
        match self {
            RecordParseError::TooFewFields { line, .. }
            | RecordParseError::MissingValue { line, .. } => *line,
        }
    }
}

use super::RecordType;

/// One line of zone-transfer output split into its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub owner: String,

    /// Raw TTL token; dig may print it with units (`1h`, `5m`).
    pub ttl: String,

    pub class: String,

    pub record_type: RecordType,

    /// Remaining fields; the first one is the primary value.
    pub data: Vec<String>,
}

impl ResourceRecord {
    pub fn new(
        owner: impl Into<String>,
        ttl: impl Into<String>,
        class: impl Into<String>,
        record_type: RecordType,
        data: Vec<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            ttl: ttl.into(),
            class: class.into(),
            record_type,
            data,
        }
    }

    /// Name-server name for NS, canonical name for CNAME, mname for SOA.
    pub fn value(&self) -> Option<&str> {
        self.data.first().map(String::as_str)
    }

    pub fn is(&self, record_type: &RecordType) -> bool {
        &self.record_type == record_type
    }
}

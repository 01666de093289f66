use std::fmt;
use std::str::FromStr;

/// Record type mnemonic as it appears in the fourth column of a zone transfer.
///
/// Mnemonics outside the known set are kept verbatim in [`RecordType::Other`]
/// so that no line of a transfer is lost to an unfamiliar type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
    PTR,

    SRV,
    SOA,
    NS,
    NAPTR,
    DNAME,

    DS,
    DNSKEY,
    RRSIG,
    NSEC,
    NSEC3,
    NSEC3PARAM,

    CAA,
    TLSA,
    SSHFP,

    HINFO,
    RP,
    LOC,
    AFSDB,
    SPF,

    Other(String),
}

impl RecordType {
    pub fn as_str(&self) -> &str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::PTR => "PTR",
            RecordType::SRV => "SRV",
            RecordType::SOA => "SOA",
            RecordType::NS => "NS",
            RecordType::NAPTR => "NAPTR",
            RecordType::DNAME => "DNAME",
            RecordType::DS => "DS",
            RecordType::DNSKEY => "DNSKEY",
            RecordType::RRSIG => "RRSIG",
            RecordType::NSEC => "NSEC",
            RecordType::NSEC3 => "NSEC3",
            RecordType::NSEC3PARAM => "NSEC3PARAM",
            RecordType::CAA => "CAA",
            RecordType::TLSA => "TLSA",
            RecordType::SSHFP => "SSHFP",
            RecordType::HINFO => "HINFO",
            RecordType::RP => "RP",
            RecordType::LOC => "LOC",
            RecordType::AFSDB => "AFSDB",
            RecordType::SPF => "SPF",
            RecordType::Other(mnemonic) => mnemonic,
        }
    }

    /// Types whose first data field names another host the crawl follows
    /// or credits. A record of such a type without data is malformed.
    pub fn requires_value(&self) -> bool {
        matches!(self, RecordType::SOA | RecordType::NS | RecordType::CNAME)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for RecordType {
    fn from(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "A" => RecordType::A,
            "AAAA" => RecordType::AAAA,
            "CNAME" => RecordType::CNAME,
            "MX" => RecordType::MX,
            "TXT" => RecordType::TXT,
            "PTR" => RecordType::PTR,
            "SRV" => RecordType::SRV,
            "SOA" => RecordType::SOA,
            "NS" => RecordType::NS,
            "NAPTR" => RecordType::NAPTR,
            "DNAME" => RecordType::DNAME,
            "DS" => RecordType::DS,
            "DNSKEY" => RecordType::DNSKEY,
            "RRSIG" => RecordType::RRSIG,
            "NSEC" => RecordType::NSEC,
            "NSEC3" => RecordType::NSEC3,
            "NSEC3PARAM" => RecordType::NSEC3PARAM,
            "CAA" => RecordType::CAA,
            "TLSA" => RecordType::TLSA,
            "SSHFP" => RecordType::SSHFP,
            "HINFO" => RecordType::HINFO,
            "RP" => RecordType::RP,
            "LOC" => RecordType::LOC,
            "AFSDB" => RecordType::AFSDB,
            "SPF" => RecordType::SPF,
            _ => RecordType::Other(s.to_string()),
        }
    }
}

impl FromStr for RecordType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RecordType::from(s))
    }
}

//! Zone-transfer text to resource records.
//!
//! The input is the presentation format printed by an AXFR client: one
//! record per line, `;` comment lines, blank separators. Parsing is a pure
//! function of the text. Lines that cannot form a record are returned as
//! [`RecordParseError`]s next to the records instead of aborting.

use crate::errors::RecordParseError;
use crate::zone_record::{RecordType, ResourceRecord};

const MIN_FIELDS: usize = 4;

/// Result of parsing one zone transfer. Both lists keep input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedZone {
    pub records: Vec<ResourceRecord>,
    pub rejected: Vec<RecordParseError>,
}

impl ParsedZone {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Value of the first SOA record, the zone master name server.
    pub fn soa_master(&self) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.is(&RecordType::SOA))
            .and_then(ResourceRecord::value)
    }
}

pub fn parse_zone(text: &str) -> ParsedZone {
    let mut parsed = ParsedZone::default();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim_end();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }

        match parse_record(index + 1, line) {
            Ok(record) => parsed.records.push(record),
            Err(e) => parsed.rejected.push(e),
        }
    }

    parsed
}

pub fn parse_record(line_number: usize, line: &str) -> Result<ResourceRecord, RecordParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        return Err(RecordParseError::TooFewFields {
            line: line_number,
            found: fields.len(),
            raw: line.to_string(),
        });
    }

    let record_type = RecordType::from(fields[3]);

    if record_type.requires_value() && fields.len() == MIN_FIELDS {
        return Err(RecordParseError::MissingValue {
            line: line_number,
            record_type: record_type.to_string(),
            raw: line.to_string(),
        });
    }

    let data = fields[MIN_FIELDS..].iter().map(|f| f.to_string()).collect();

    Ok(ResourceRecord::new(
        fields[0],
        fields[1],
        fields[2],
        record_type,
        data,
    ))
}

/// Host names from a short-form NS lookup, one per line.
pub fn parse_name_server_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(';'))
        .map(str::to_string)
        .collect()
}

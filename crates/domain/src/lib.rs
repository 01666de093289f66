//! zonecrawl domain layer
pub mod config;
pub mod errors;
pub mod metadata;
pub mod zone_dump;
pub mod zone_parser;
pub mod zone_record;

pub use config::{Config, ConfigError};
pub use errors::{DomainError, RecordParseError};
pub use metadata::{MetadataWarning, RunMetadata, ZoneFileEntry, DEFAULT_METADATA_FILE};
pub use zone_dump::{dump_file_name, ZoneDump};
pub use zone_parser::{parse_name_server_list, parse_zone, ParsedZone};
pub use zone_record::{RecordType, ResourceRecord};

//! zonecrawl application layer: ports and the reconnaissance use case
pub mod ports;
pub mod use_cases;

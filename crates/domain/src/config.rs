pub mod errors;
pub mod logging;
pub mod output;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use output::OutputConfig;
pub use resolver::ResolverConfig;
pub use root::{Config, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};

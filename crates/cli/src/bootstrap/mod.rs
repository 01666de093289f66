use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use zonecrawl_domain::config::{LogFormat, CONFIG_ENV_VAR};
use zonecrawl_domain::Config;

/// Config file comes from `ZONECRAWL_CONFIG` when set, otherwise the
/// usual lookup in the working directory.
pub fn load_config() -> anyhow::Result<Config> {
    let path = std::env::var(CONFIG_ENV_VAR)
        .ok()
        .filter(|p| !p.trim().is_empty());

    Ok(Config::load(path.as_deref())?)
}

/// Logs go to stderr; stdout carries only the run summary.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }
}

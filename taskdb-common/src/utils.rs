use {
    std::env::var,
    tracing::Level,
    tracing_subscriber::{
        prelude::*,
        filter::filter_fn,
        EnvFilter,
    },
    config::{Config, ConfigError, Environment, File},
};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Logs go to stderr, stdout is reserved for the operator report.
pub fn init_logging() {
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .finish()
        .with(filter_fn(|metadata| {
            if metadata.target().starts_with("hyper") || metadata.target().starts_with("reqwest") {
                metadata.level() <= &Level::WARN
            } else {
                true
            }
        }))
        .init();
}

pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&var("TASKDB_CONFIG_PATH").unwrap_or("./taskdb.toml".to_owned()))
}

pub fn load_config_from(path: &str) -> Result<Config, ConfigError> {
    Config::builder()
        .set_default("host", DEFAULT_HOST)?
        .set_default("port", DEFAULT_PORT as i64)?
        .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
        .add_source(File::with_name(path).required(false))
        .add_source(Environment::with_prefix("TASKDB"))
        .build()
}

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log level/filter '{value}'")]
    Filter { value: String, source: ParseError },
    #[error("logging already initialised: {0}")]
    Subscriber(String),
}

/// Installs the stderr subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init(level: &str) -> Result<(), LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|source| LoggingError::Filter {
            value: level.to_string(),
            source,
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| LoggingError::Subscriber(e.to_string()))
}

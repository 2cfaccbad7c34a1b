use thiserror::Error;

use crate::input::InputError;
use crate::logging::LoggingError;
use crate::model::table::TableError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("invalid lookup table: {0}")]
    Table(#[from] TableError),
    #[error("failed to write reports: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Logging(#[from] LoggingError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

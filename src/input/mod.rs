use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod reader;
pub mod scaling;
pub mod subjects;
pub mod table;

pub use scaling::load_scaling;
pub use subjects::load_subjects;
pub use table::load_table;

use crate::model::table::TableError;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error in {} line {line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid lookup table: {0}")]
    Table(#[from] TableError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Tsv,
    Json,
}

/// `.json` (optionally `.json.gz`) is JSON, anything else is TSV.
pub fn detect_format(path: &Path) -> InputFormat {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let name = name.strip_suffix(".gz").unwrap_or(&name);
    if name.ends_with(".json") {
        InputFormat::Json
    } else {
        InputFormat::Tsv
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;

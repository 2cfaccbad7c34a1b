use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use serde::de::DeserializeOwned;

use crate::input::InputError;

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let reader = open_maybe_gz(path)?;
    serde_json::from_reader(reader).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// A tab-separated file with a header row.
#[derive(Debug, Clone)]
pub struct TsvTable {
    pub columns: Vec<String>,
    /// (1-based line number, fields)
    pub rows: Vec<(usize, Vec<String>)>,
}

impl TsvTable {
    /// Index of the first column matching any of `names`, case-insensitively.
    pub fn column(&self, names: &[&str]) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| names.iter().any(|n| c.eq_ignore_ascii_case(n)))
    }
}

pub fn read_tsv(path: &Path) -> Result<TsvTable, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();

    let read = reader.read_line(&mut buf)?;
    if read == 0 || buf.trim().is_empty() {
        return Err(InputError::Parse {
            path: path.to_path_buf(),
            line: 1,
            message: "missing header row".to_string(),
        });
    }
    let columns: Vec<String> = buf
        .trim_end()
        .split('\t')
        .map(|s| s.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    let mut line_no = 1usize;
    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end();
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let fields = line.split('\t').map(|s| s.trim().to_string()).collect();
        rows.push((line_no, fields));
    }

    Ok(TsvTable { columns, rows })
}

pub fn require_column(table: &TsvTable, path: &Path, names: &[&str]) -> Result<usize, InputError> {
    table.column(names).ok_or_else(|| InputError::Parse {
        path: path.to_path_buf(),
        line: 1,
        message: format!("missing column '{}'", names[0]),
    })
}

pub fn field<'a>(
    fields: &'a [String],
    idx: usize,
    path: &Path,
    line: usize,
) -> Result<&'a str, InputError> {
    fields
        .get(idx)
        .map(|s| s.as_str())
        .ok_or_else(|| InputError::Parse {
            path: path.to_path_buf(),
            line,
            message: format!("expected at least {} fields, found {}", idx + 1, fields.len()),
        })
}

pub fn number_field(
    fields: &[String],
    idx: usize,
    path: &Path,
    line: usize,
) -> Result<f64, InputError> {
    let raw = field(fields, idx, path, line)?;
    raw.parse::<f64>().map_err(|_| InputError::Parse {
        path: path.to_path_buf(),
        line,
        message: format!("'{raw}' is not a number"),
    })
}

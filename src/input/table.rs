use std::path::Path;

use crate::input::reader::{number_field, read_json, read_tsv, require_column};
use crate::input::{InputError, InputFormat, detect_format};
use crate::model::table::{AtarTable, Checkpoint};

/// Loads a percentile-to-aggregate table (`rank`, `min_aggregate`).
pub fn load_table(path: &Path) -> Result<AtarTable, InputError> {
    let pairs: Vec<(f64, f64)> = match detect_format(path) {
        InputFormat::Json => read_json::<Vec<Checkpoint>>(path)?
            .into_iter()
            .map(|cp| (cp.rank, cp.min_aggregate))
            .collect(),
        InputFormat::Tsv => {
            let table = read_tsv(path)?;
            let rank_col = require_column(&table, path, &["rank", "atar", "percentile"])?;
            let agg_col = require_column(&table, path, &["min_aggregate", "aggregate"])?;
            let mut pairs = Vec::with_capacity(table.rows.len());
            for (line, fields) in &table.rows {
                pairs.push((
                    number_field(fields, rank_col, path, *line)?,
                    number_field(fields, agg_col, path, *line)?,
                ));
            }
            pairs
        }
    };

    let table = AtarTable::from_pairs(pairs)?;
    tracing::info!(
        checkpoints = table.len(),
        "loaded lookup table from {}",
        path.display()
    );
    Ok(table)
}

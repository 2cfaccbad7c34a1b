use std::path::Path;

use serde::Deserialize;

use crate::input::reader::{field, number_field, read_json, read_tsv, require_column};
use crate::input::{InputError, InputFormat, detect_format};
use crate::model::ScalingLookup;
use crate::model::subject::SubjectScalingParameters;

#[derive(Debug, Deserialize)]
struct ScalingRecord {
    subject_id: String,
    #[serde(alias = "historical_mean")]
    mean: f64,
    #[serde(alias = "historical_std_dev")]
    std_dev: f64,
}

pub fn load_scaling(path: &Path) -> Result<ScalingLookup, InputError> {
    let records = match detect_format(path) {
        InputFormat::Json => read_json::<Vec<ScalingRecord>>(path)?,
        InputFormat::Tsv => parse_scaling_tsv(path)?,
    };

    let mut lookup = ScalingLookup::new();
    for rec in records {
        let params = SubjectScalingParameters::new(rec.mean, rec.std_dev);
        if !params.has_usable_std_dev() {
            tracing::warn!(
                "subject {} has std dev {}; default will be used when scoring",
                rec.subject_id,
                rec.std_dev
            );
        }
        if lookup.contains_key(&rec.subject_id) {
            tracing::warn!(
                "duplicate scaling entry; keeping first (subject {})",
                rec.subject_id
            );
            continue;
        }
        lookup.insert(rec.subject_id, params);
    }
    tracing::info!(count = lookup.len(), "loaded scaling parameters");
    Ok(lookup)
}

fn parse_scaling_tsv(path: &Path) -> Result<Vec<ScalingRecord>, InputError> {
    let table = read_tsv(path)?;
    let id_col = require_column(&table, path, &["subject_id", "subject", "code"])?;
    let mean_col = require_column(&table, path, &["mean", "historical_mean"])?;
    let sd_col = require_column(&table, path, &["std_dev", "historical_std_dev", "sd"])?;

    let mut out = Vec::with_capacity(table.rows.len());
    for (line, fields) in &table.rows {
        out.push(ScalingRecord {
            subject_id: field(fields, id_col, path, *line)?.to_string(),
            mean: number_field(fields, mean_col, path, *line)?,
            std_dev: number_field(fields, sd_col, path, *line)?,
        });
    }
    Ok(out)
}

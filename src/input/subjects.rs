use std::collections::BTreeSet;
use std::path::Path;

use crate::input::reader::{field, number_field, read_json, read_tsv, require_column};
use crate::input::{InputError, InputFormat, detect_format};
use crate::model::subject::SubjectScoreInput;

const SUBJECT_COLUMNS: &[&str] = &["subject_id", "subject", "code"];
const ASSESSMENT_COLUMNS: &[&str] = &[
    "ca_average",
    "continuous_assessment_average",
    "sac_average",
];
const EXAM_COLUMNS: &[&str] = &["exam_percentage", "predicted_exam_percentage", "exam"];
const RANK_COLUMNS: &[&str] = &["rank_percentile", "cohort_rank_percentile", "rank"];

/// Loads a student's subject entries, keeping input order. Subject ids are
/// unique per student; later duplicates and entries without an id are
/// dropped with a warning.
pub fn load_subjects(path: &Path) -> Result<Vec<SubjectScoreInput>, InputError> {
    let entries = match detect_format(path) {
        InputFormat::Json => read_json::<Vec<SubjectScoreInput>>(path)?,
        InputFormat::Tsv => parse_subjects_tsv(path)?,
    };
    let entries = dedup_subjects(entries);
    if entries.is_empty() {
        return Err(InputError::InvalidInput(format!(
            "no subjects in {}",
            path.display()
        )));
    }
    tracing::info!(count = entries.len(), "loaded subject scores");
    Ok(entries)
}

fn parse_subjects_tsv(path: &Path) -> Result<Vec<SubjectScoreInput>, InputError> {
    let table = read_tsv(path)?;
    let id_col = require_column(&table, path, SUBJECT_COLUMNS)?;
    let ca_col = require_column(&table, path, ASSESSMENT_COLUMNS)?;
    let exam_col = require_column(&table, path, EXAM_COLUMNS)?;
    let rank_col = require_column(&table, path, RANK_COLUMNS)?;

    let mut out = Vec::with_capacity(table.rows.len());
    for (line, fields) in &table.rows {
        let subject_id = field(fields, id_col, path, *line)?;
        if subject_id.is_empty() {
            tracing::warn!("subject row has empty id; skipping (line {})", line);
            continue;
        }
        out.push(SubjectScoreInput::new(
            subject_id,
            number_field(fields, ca_col, path, *line)?,
            number_field(fields, exam_col, path, *line)?,
            number_field(fields, rank_col, path, *line)?,
        ));
    }
    Ok(out)
}

pub fn dedup_subjects(entries: Vec<SubjectScoreInput>) -> Vec<SubjectScoreInput> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.subject_id.trim().is_empty() {
            tracing::warn!("subject entry has empty id; skipping");
            continue;
        }
        if !seen.insert(entry.subject_id.clone()) {
            tracing::warn!(
                "duplicate subject id; keeping first (subject {})",
                entry.subject_id
            );
            continue;
        }
        out.push(entry);
    }
    out
}

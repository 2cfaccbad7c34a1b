use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::MandatorySubjects;
use crate::model::policy::round2;
use crate::model::results::{Prediction, ScenarioSet};
use crate::model::table::AtarTable;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{InputMeta, SummaryData, TargetSummary, ToolMeta, format_f64_1, format_f64_2};

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub subjects_path: String,
    pub scaling_source: String,
    pub table_source: String,
    pub n_scaled_subjects: usize,
    pub mandatory: &'a MandatorySubjects,

    pub prediction: &'a Prediction,
    pub scenarios: Option<&'a ScenarioSet>,
    pub target: Option<TargetSummary>,

    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &Stage5Input<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    write_contributions_tsv(input.prediction, &out_dir.join("contributions.tsv"))?;

    let summary = build_summary(input);
    let json = render_summary_json(&summary)?;
    write_text(&out_dir.join("summary.json"), &json)?;

    let report = render_report_text(&summary);
    write_text(&out_dir.join("report.txt"), &report)?;

    tracing::info!("reports written to {}", out_dir.display());
    Ok(())
}

pub fn build_target(rank: f64, table: &AtarTable, current_aggregate: f64) -> TargetSummary {
    let required_aggregate = table.aggregate_for_rank(rank);
    TargetSummary {
        rank,
        required_aggregate,
        aggregate_gap: round2((required_aggregate - current_aggregate).max(0.0)),
    }
}

pub fn build_summary(input: &Stage5Input<'_>) -> SummaryData {
    let prediction = input.prediction;
    let counted = &prediction.composition.contributing_subjects;
    let excluded_subjects = prediction
        .scored
        .iter()
        .filter(|s| !counted.iter().any(|c| c.subject_id == s.subject_id))
        .map(|s| s.subject_id.clone())
        .collect();

    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        input: InputMeta {
            subjects_path: input.subjects_path.clone(),
            scaling_source: input.scaling_source.clone(),
            table_source: input.table_source.clone(),
            n_subjects: prediction.scored.len(),
            n_scaled_subjects: input.n_scaled_subjects,
            mandatory_subjects: input.mandatory.iter().cloned().collect(),
        },
        computable: prediction.result.is_computable(),
        prediction: prediction.result,
        contributing_subjects: counted.clone(),
        excluded_subjects,
        scenarios: input.scenarios.copied(),
        target: input.target,
    }
}

fn write_contributions_tsv(prediction: &Prediction, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "order",
        "subject_id",
        "raw_percentage",
        "scaled_score",
        "weight",
        "weighted_score",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    for (i, c) in prediction.composition.contributing_subjects.iter().enumerate() {
        let row = [
            (i + 1).to_string(),
            c.subject_id.clone(),
            format_f64_1(c.raw_percentage),
            format_f64_1(c.scaled_score),
            format_f64_1(c.weight),
            format_f64_2(c.weighted_score()),
        ];
        writeln!(w, "{}", row.join("\t"))?;
    }
    w.flush()
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;

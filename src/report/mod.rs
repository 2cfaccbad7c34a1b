pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::results::{ContributingSubject, PredictionResult, ScenarioSet};

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputMeta {
    pub subjects_path: String,
    pub scaling_source: String,
    pub table_source: String,
    pub n_subjects: usize,
    pub n_scaled_subjects: usize,
    pub mandatory_subjects: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TargetSummary {
    pub rank: f64,
    pub required_aggregate: f64,
    /// Positive when the current aggregate falls short of the target.
    pub aggregate_gap: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub input: InputMeta,
    pub computable: bool,
    pub prediction: PredictionResult,
    pub contributing_subjects: Vec<ContributingSubject>,
    pub excluded_subjects: Vec<String>,
    pub scenarios: Option<ScenarioSet>,
    pub target: Option<TargetSummary>,
}

pub fn format_f64_1(v: f64) -> String {
    format!("{:.1}", v)
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;

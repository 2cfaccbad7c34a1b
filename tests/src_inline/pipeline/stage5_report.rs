use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::model::ScalingLookup;
use crate::model::reference::{default_mandatory_subjects, reference_table};
use crate::model::subject::SubjectScoreInput;
use crate::pipeline::stage4_scenarios::project;
use crate::pipeline::{PredictionContext, predict};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("atar_predictor_report_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn sample_subjects() -> Vec<SubjectScoreInput> {
    vec![
        SubjectScoreInput::new("ENGLISH", 80.0, 76.0, 30.0),
        SubjectScoreInput::new("MATHS_METHODS", 88.0, 84.0, 10.0),
        SubjectScoreInput::new("CHEMISTRY", 75.0, 70.0, 35.0),
        SubjectScoreInput::new("BIOLOGY", 72.0, 74.0, 40.0),
        SubjectScoreInput::new("PSYCHOLOGY", 70.0, 68.0, 45.0),
        SubjectScoreInput::new("MUSIC", 65.0, 60.0, 60.0),
        SubjectScoreInput::new("DRAMA", 50.0, 45.0, 80.0),
    ]
}

#[test]
fn test_build_target() {
    let table = reference_table().unwrap();
    let short = build_target(90.0, &table, 120.0);
    assert_eq!(short.required_aggregate, 127.4);
    assert!((short.aggregate_gap - 7.4).abs() < 1e-9);

    let met = build_target(90.0, &table, 140.0);
    assert_eq!(met.aggregate_gap, 0.0);
}

#[test]
fn test_summary_lists_excluded_subjects() {
    let subjects = sample_subjects();
    let scaling = ScalingLookup::new();
    let mandatory = default_mandatory_subjects();
    let table = reference_table().unwrap();
    let ctx = PredictionContext {
        scaling: &scaling,
        mandatory: &mandatory,
        table: &table,
    };
    let prediction = predict(&subjects, &ctx);
    let input = Stage5Input {
        subjects_path: "subjects.tsv".to_string(),
        scaling_source: "none".to_string(),
        table_source: "built-in reference".to_string(),
        n_scaled_subjects: 0,
        mandatory: &mandatory,
        prediction: &prediction,
        scenarios: None,
        target: None,
        tool_name: "atar-predictor".to_string(),
        tool_version: "test".to_string(),
    };
    let summary = build_summary(&input);
    assert!(summary.computable);
    assert_eq!(summary.input.n_subjects, 7);
    assert_eq!(summary.contributing_subjects.len(), 6);
    assert_eq!(summary.excluded_subjects, vec!["DRAMA".to_string()]);
}

#[test]
fn test_write_reports_creates_outputs() {
    let dir = make_temp_dir();
    let subjects = sample_subjects();
    let scaling = ScalingLookup::new();
    let mandatory = default_mandatory_subjects();
    let table = reference_table().unwrap();
    let ctx = PredictionContext {
        scaling: &scaling,
        mandatory: &mandatory,
        table: &table,
    };
    let prediction = predict(&subjects, &ctx);
    let scenarios = project(&subjects, &ctx);
    let input = Stage5Input {
        subjects_path: "subjects.tsv".to_string(),
        scaling_source: "none".to_string(),
        table_source: "built-in reference".to_string(),
        n_scaled_subjects: 0,
        mandatory: &mandatory,
        prediction: &prediction,
        scenarios: Some(&scenarios),
        target: Some(build_target(95.0, &table, prediction.result.aggregate)),
        tool_name: "atar-predictor".to_string(),
        tool_version: "test".to_string(),
    };

    let out = dir.join("out");
    write_reports(&input, &out).unwrap();

    let tsv = fs::read_to_string(out.join("contributions.tsv")).unwrap();
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[0].starts_with("order\tsubject_id"));
    assert!(lines[1].starts_with("1\tENGLISH\t"));

    let json = fs::read_to_string(out.join("summary.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["computable"], serde_json::Value::Bool(true));
    assert_eq!(
        value["prediction"]["aggregate"].as_f64().unwrap(),
        prediction.result.aggregate
    );
    assert!(value["scenarios"]["best_case"]["percentile_rank"].is_number());
    assert_eq!(value["target"]["rank"].as_f64().unwrap(), 95.0);

    let report = fs::read_to_string(out.join("report.txt")).unwrap();
    assert!(report.contains("Predicted ATAR"));
    assert!(report.contains("Not counted: DRAMA"));
}

use super::*;
use crate::model::results::{ContributingSubject, PredictionResult};
use crate::report::{InputMeta, TargetSummary, ToolMeta};

fn summary(computable: bool) -> SummaryData {
    let contributing = if computable {
        vec![
            ContributingSubject {
                subject_id: "ENGLISH".to_string(),
                raw_percentage: 80.0,
                scaled_score: 40.0,
                weight: 1.0,
            },
            ContributingSubject {
                subject_id: "ART".to_string(),
                raw_percentage: 60.0,
                scaled_score: 30.0,
                weight: 0.1,
            },
        ]
    } else {
        Vec::new()
    };
    SummaryData {
        tool: ToolMeta {
            name: "atar-predictor".to_string(),
            version: "test".to_string(),
        },
        input: InputMeta {
            subjects_path: "subjects.tsv".to_string(),
            scaling_source: "none".to_string(),
            table_source: "built-in reference".to_string(),
            n_subjects: 2,
            n_scaled_subjects: 0,
            mandatory_subjects: vec!["EAL".to_string(), "ENGLISH".to_string()],
        },
        computable,
        prediction: if computable {
            PredictionResult {
                percentile_rank: 30.0,
                aggregate: 43.0,
            }
        } else {
            PredictionResult {
                percentile_rank: 0.0,
                aggregate: 0.0,
            }
        },
        contributing_subjects: contributing,
        excluded_subjects: Vec::new(),
        scenarios: None,
        target: None,
    }
}

#[test]
fn test_report_lists_contributions() {
    let text = render_report_text(&summary(true));
    assert!(text.contains("Aggregate: 43.0"));
    assert!(text.contains("Predicted ATAR: 30.00"));
    assert!(text.contains("1. ENGLISH: raw 80.0%, scaled 40.0, weight full, counts 40.00"));
    assert!(text.contains("2. ART: raw 60.0%, scaled 30.0, weight 10%, counts 3.00"));
    assert!(!text.contains("Scenarios"));
}

#[test]
fn test_report_explains_missing_mandatory_subject() {
    let text = render_report_text(&summary(false));
    assert!(text.contains("Cannot compute: no mandatory subject entered (one of EAL, ENGLISH)."));
    assert!(!text.contains("Predicted ATAR"));
}

#[test]
fn test_report_zero_aggregate_with_mandatory_subject() {
    let mut data = summary(false);
    data.contributing_subjects = vec![ContributingSubject {
        subject_id: "ENGLISH".to_string(),
        raw_percentage: 0.0,
        scaled_score: 0.0,
        weight: 1.0,
    }];
    let text = render_report_text(&data);
    assert!(text.contains("Cannot compute: counted subjects total an aggregate of 0.0."));
    assert!(!text.contains("no mandatory subject entered"));
    assert!(text.contains("1. ENGLISH: raw 0.0%, scaled 0.0, weight full, counts 0.00"));
    assert!(!text.contains("Predicted ATAR"));
}

#[test]
fn test_report_target_section() {
    let mut data = summary(true);
    data.target = Some(TargetSummary {
        rank: 80.0,
        required_aggregate: 108.4,
        aggregate_gap: 65.4,
    });
    let text = render_report_text(&data);
    assert!(text.contains("Target ATAR 80.00 needs aggregate 108.40"));
    assert!(text.contains("Short by 65.40 aggregate points."));
}

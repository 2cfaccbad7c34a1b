use super::*;
use crate::model::policy::MAX_CONTRIBUTORS;

fn scored(id: &str, score: f64) -> ScoredSubject {
    ScoredSubject {
        subject_id: id.to_string(),
        raw_percentage: score * 2.0,
        predicted_scaled_score: score,
    }
}

fn english_only() -> MandatorySubjects {
    ["ENGLISH".to_string()].into_iter().collect()
}

fn ids(result: &AggregateResult) -> Vec<&str> {
    result
        .contributing_subjects
        .iter()
        .map(|c| c.subject_id.as_str())
        .collect()
}

#[test]
fn test_no_mandatory_subject_is_sentinel() {
    let subjects = vec![scored("MATHS", 45.0), scored("PHYSICS", 40.0)];
    let result = compose(&subjects, &english_only());
    assert_eq!(result, AggregateResult::empty());
    assert_eq!(result.aggregate, 0.0);
    assert!(result.contributing_subjects.is_empty());
}

#[test]
fn test_empty_input_is_sentinel() {
    assert_eq!(compose(&[], &english_only()), AggregateResult::empty());
}

#[test]
fn test_mandatory_only() {
    let result = compose(&[scored("ENGLISH", 40.0)], &english_only());
    assert_eq!(result.aggregate, 40.0);
    assert_eq!(ids(&result), vec!["ENGLISH"]);
}

#[test]
fn test_selection_cap_and_weights() {
    let subjects = vec![
        scored("D", 30.0),
        scored("A", 40.0),
        scored("ENGLISH", 35.0),
        scored("F", 20.0),
        scored("B", 38.0),
        scored("E", 28.0),
        scored("C", 36.0),
    ];
    let result = compose(&subjects, &english_only());

    assert_eq!(result.contributing_subjects.len(), MAX_CONTRIBUTORS);
    assert_eq!(ids(&result), vec!["ENGLISH", "A", "B", "C", "D", "E"]);
    let weights: Vec<f64> = result
        .contributing_subjects
        .iter()
        .map(|c| c.weight)
        .collect();
    assert_eq!(weights, vec![1.0, 1.0, 1.0, 1.0, 0.1, 0.1]);
    // 35 + 40 + 38 + 36 + 0.1 * (30 + 28)
    assert_eq!(result.aggregate, 154.8);
    assert_eq!(result.contributing_subjects[0].raw_percentage, 70.0);
}

#[test]
fn test_partial_weight_applies_only_past_third() {
    let subjects = vec![
        scored("ENGLISH", 30.0),
        scored("A", 30.0),
        scored("B", 30.0),
        scored("C", 30.0),
        scored("D", 30.0),
    ];
    let result = compose(&subjects, &english_only());
    assert_eq!(result.contributing_subjects.len(), 5);
    assert_eq!(result.contributing_subjects[4].weight, 0.1);
    assert_eq!(result.aggregate, 123.0);
}

#[test]
fn test_ties_keep_input_order() {
    let subjects = vec![
        scored("ENGLISH", 30.0),
        scored("X", 25.0),
        scored("Y", 32.0),
        scored("Z", 25.0),
        scored("W", 25.0),
        scored("V", 25.0),
        scored("U", 25.0),
    ];
    let result = compose(&subjects, &english_only());
    assert_eq!(ids(&result), vec!["ENGLISH", "Y", "X", "Z", "W", "V"]);
}

#[test]
fn test_first_mandatory_in_input_order_wins() {
    let mandatory: MandatorySubjects = ["ENGLISH".to_string(), "LITERATURE".to_string()]
        .into_iter()
        .collect();
    let subjects = vec![
        scored("MATHS", 45.0),
        scored("LITERATURE", 30.0),
        scored("ENGLISH", 40.0),
    ];
    let result = compose(&subjects, &mandatory);
    assert_eq!(ids(&result), vec!["LITERATURE", "MATHS"]);
    assert_eq!(result.aggregate, 75.0);
}

#[test]
fn test_extra_mandatory_entries_do_not_count() {
    let mandatory: MandatorySubjects = ["ENGLISH".to_string(), "LITERATURE".to_string()]
        .into_iter()
        .collect();
    let subjects = vec![
        scored("ENGLISH", 30.0),
        scored("LITERATURE", 45.0),
        scored("MATHS", 20.0),
    ];
    let result = compose(&subjects, &mandatory);
    assert_eq!(ids(&result), vec!["ENGLISH", "MATHS"]);
    assert_eq!(result.aggregate, 50.0);
}

#[test]
fn test_aggregate_rounded_to_one_decimal() {
    let subjects = vec![
        scored("ENGLISH", 33.3),
        scored("A", 31.1),
        scored("B", 29.9),
        scored("C", 27.7),
        scored("D", 26.6),
        scored("E", 21.3),
    ];
    let result = compose(&subjects, &english_only());
    assert_eq!(result.aggregate, (result.aggregate * 10.0).round() / 10.0);
    assert!((result.aggregate - 126.8).abs() < 1e-9);
}

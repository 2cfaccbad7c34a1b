use serde::Serialize;

use crate::model::subject::ScoredSubject;

/// One subject included in the aggregate, in application order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributingSubject {
    pub subject_id: String,
    pub raw_percentage: f64,
    pub scaled_score: f64,
    pub weight: f64,
}

impl ContributingSubject {
    pub fn weighted_score(&self) -> f64 {
        self.scaled_score * self.weight
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub aggregate: f64,
    pub contributing_subjects: Vec<ContributingSubject>,
}

impl AggregateResult {
    /// The "cannot compute" result returned when no mandatory subject is present.
    pub fn empty() -> Self {
        Self {
            aggregate: 0.0,
            contributing_subjects: Vec::new(),
        }
    }
}

/// `percentile_rank == 0` is a sentinel for "no prediction possible", not a
/// predicted rank of zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub percentile_rank: f64,
    pub aggregate: f64,
}

impl PredictionResult {
    pub fn is_computable(&self) -> bool {
        self.aggregate > 0.0
    }
}

/// Full output of one pipeline run, with the per-subject detail the
/// reports need.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub result: PredictionResult,
    pub composition: AggregateResult,
    /// Every estimated subject in input order, counted or not.
    pub scored: Vec<ScoredSubject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioSet {
    pub current: PredictionResult,
    pub best_case: PredictionResult,
    pub worst_case: PredictionResult,
}

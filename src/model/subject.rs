use serde::Deserialize;

use crate::model::policy::{DEFAULT_STD_DEV, SCALING_BASELINE_MEAN};

/// Raw per-subject inputs as entered by the student.
///
/// Percentages are expected in `[0, 100]` and the rank percentile in
/// `[1, 100]` (1 = top of cohort). Nothing here clamps them; callers
/// pre-validate user-entered values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubjectScoreInput {
    pub subject_id: String,
    #[serde(alias = "ca_average")]
    pub continuous_assessment_average: f64,
    #[serde(alias = "exam_percentage")]
    pub predicted_exam_percentage: f64,
    #[serde(alias = "rank_percentile")]
    pub cohort_rank_percentile: f64,
}

impl SubjectScoreInput {
    pub fn new(
        subject_id: impl Into<String>,
        continuous_assessment_average: f64,
        predicted_exam_percentage: f64,
        cohort_rank_percentile: f64,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            continuous_assessment_average,
            predicted_exam_percentage,
            cohort_rank_percentile,
        }
    }

    /// Copy of this input with the exam percentage moved by `delta` and
    /// clamped to `[0, 100]`.
    pub fn with_exam_shift(&self, delta: f64) -> Self {
        Self {
            predicted_exam_percentage: (self.predicted_exam_percentage + delta).clamp(0.0, 100.0),
            ..self.clone()
        }
    }
}

/// A subject after score estimation. Produced wholesale by stage 1; a new
/// estimate replaces the value rather than editing it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSubject {
    pub subject_id: String,
    pub raw_percentage: f64,
    pub predicted_scaled_score: f64,
}

/// Historical scaling reference for one subject.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectScalingParameters {
    pub historical_mean: f64,
    pub historical_std_dev: f64,
}

impl SubjectScalingParameters {
    pub fn new(historical_mean: f64, historical_std_dev: f64) -> Self {
        Self {
            historical_mean,
            historical_std_dev,
        }
    }

    pub fn has_usable_std_dev(&self) -> bool {
        self.historical_std_dev.is_finite() && self.historical_std_dev > 0.0
    }
}

impl Default for SubjectScalingParameters {
    fn default() -> Self {
        Self {
            historical_mean: SCALING_BASELINE_MEAN,
            historical_std_dev: DEFAULT_STD_DEV,
        }
    }
}

use crate::model::ScalingLookup;
use crate::model::policy::{
    ASSESSMENT_WEIGHT, DEFAULT_STD_DEV, EXAM_WEIGHT, MAX_SCALED_SCORE, RANK_ADJUSTMENT_LIMIT,
    SCALING_BASELINE_MEAN, SCALING_SHARE, round1,
};
use crate::model::subject::{ScoredSubject, SubjectScalingParameters, SubjectScoreInput};

/// Estimates a scaled score for every subject, in input order. Subjects
/// without scaling parameters use the neutral defaults.
pub fn run_stage1(inputs: &[SubjectScoreInput], scaling: &ScalingLookup) -> Vec<ScoredSubject> {
    let mut out = Vec::with_capacity(inputs.len());
    for input in inputs {
        let params = match scaling.get(&input.subject_id) {
            Some(p) => *p,
            None => {
                tracing::debug!(
                    subject = %input.subject_id,
                    "no scaling parameters; using defaults"
                );
                SubjectScalingParameters::default()
            }
        };
        out.push(estimate_subject(input, &params));
    }
    out
}

pub fn estimate_subject(
    input: &SubjectScoreInput,
    params: &SubjectScalingParameters,
) -> ScoredSubject {
    ScoredSubject {
        subject_id: input.subject_id.clone(),
        raw_percentage: raw_percentage(
            input.continuous_assessment_average,
            input.predicted_exam_percentage,
        ),
        predicted_scaled_score: estimate(
            input.continuous_assessment_average,
            input.predicted_exam_percentage,
            input.cohort_rank_percentile,
            params,
        ),
    }
}

/// Predicted scaled score in `[0, 50]`, rounded to one decimal place.
pub fn estimate(
    continuous_assessment_average: f64,
    predicted_exam_percentage: f64,
    cohort_rank_percentile: f64,
    params: &SubjectScalingParameters,
) -> f64 {
    let raw = raw_percentage(continuous_assessment_average, predicted_exam_percentage);
    let base = raw / 100.0 * MAX_SCALED_SCORE;
    let score = base + rank_adjustment(cohort_rank_percentile) + scaling_adjustment(params);
    if score.is_nan() {
        return 0.0;
    }
    round1(score.clamp(0.0, MAX_SCALED_SCORE))
}

pub fn raw_percentage(continuous_assessment_average: f64, predicted_exam_percentage: f64) -> f64 {
    ASSESSMENT_WEIGHT * continuous_assessment_average + EXAM_WEIGHT * predicted_exam_percentage
}

/// Linear in `(100 - percentile) / 100`: +2 at the top of the cohort, 0 at
/// the median, -2 at the bottom.
pub fn rank_adjustment(cohort_rank_percentile: f64) -> f64 {
    let strength = (100.0 - cohort_rank_percentile) / 100.0;
    let adj = (strength - 0.5) * 2.0 * RANK_ADJUSTMENT_LIMIT;
    adj.clamp(-RANK_ADJUSTMENT_LIMIT, RANK_ADJUSTMENT_LIMIT)
}

pub fn scaling_adjustment(params: &SubjectScalingParameters) -> f64 {
    let std_dev = if params.has_usable_std_dev() {
        params.historical_std_dev
    } else {
        tracing::debug!(
            std_dev = params.historical_std_dev,
            "unusable historical std dev; substituting {}",
            DEFAULT_STD_DEV
        );
        DEFAULT_STD_DEV
    };
    let scaling_factor = (params.historical_mean - SCALING_BASELINE_MEAN) / std_dev;
    scaling_factor * std_dev * SCALING_SHARE
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_estimate.rs"]
mod tests;

//! Fixed domain policy of the admission scheme. These are literal rules of the
//! scheme, not tuning knobs.

/// Upper bound of a scaled study score.
pub const MAX_SCALED_SCORE: f64 = 50.0;

/// Historical mean that receives no scaling adjustment.
pub const SCALING_BASELINE_MEAN: f64 = 30.0;
pub const DEFAULT_STD_DEV: f64 = 7.0;
/// Share of the historical deviation applied to a subject score.
pub const SCALING_SHARE: f64 = 0.5;

/// Cohort rank moves a score by at most this many points either way.
pub const RANK_ADJUSTMENT_LIMIT: f64 = 2.0;

/// Blend weights for continuous assessment and exam.
pub const ASSESSMENT_WEIGHT: f64 = 0.5;
pub const EXAM_WEIGHT: f64 = 0.5;

pub const FULL_WEIGHT_COUNT: usize = 3;
pub const PARTIAL_WEIGHT_COUNT: usize = 2;
pub const FULL_WEIGHT: f64 = 1.0;
pub const PARTIAL_WEIGHT: f64 = 0.1;
/// 1 mandatory + best 3 + next 2.
pub const MAX_CONTRIBUTORS: usize = 1 + FULL_WEIGHT_COUNT + PARTIAL_WEIGHT_COUNT;

/// Lowest rank reported when extrapolating below the table.
pub const EXTRAPOLATION_FLOOR: f64 = 30.0;

/// Exam shift used for best/worst case projections.
pub const SCENARIO_EXAM_DELTA: f64 = 10.0;

pub fn round_dp(x: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (x * factor).round() / factor
}

pub fn round1(x: f64) -> f64 {
    round_dp(x, 1)
}

pub fn round2(x: f64) -> f64 {
    round_dp(x, 2)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/policy.rs"]
mod tests;

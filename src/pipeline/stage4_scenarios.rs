use crate::model::policy::SCENARIO_EXAM_DELTA;
use crate::model::results::ScenarioSet;
use crate::model::subject::SubjectScoreInput;
use crate::pipeline::{PredictionContext, predict};

/// Runs the full pipeline on the unmodified inputs and again with every exam
/// percentage moved up and down by 10 points.
pub fn project(inputs: &[SubjectScoreInput], ctx: &PredictionContext<'_>) -> ScenarioSet {
    let current = predict(inputs, ctx).result;
    let best_case = predict(&shift_exams(inputs, SCENARIO_EXAM_DELTA), ctx).result;
    let worst_case = predict(&shift_exams(inputs, -SCENARIO_EXAM_DELTA), ctx).result;

    ScenarioSet {
        current,
        best_case,
        worst_case,
    }
}

pub fn shift_exams(inputs: &[SubjectScoreInput], delta: f64) -> Vec<SubjectScoreInput> {
    inputs.iter().map(|s| s.with_exam_shift(delta)).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_scenarios.rs"]
mod tests;

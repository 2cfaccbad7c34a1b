pub mod stage1_estimate;
pub mod stage2_compose;
pub mod stage3_convert;
pub mod stage4_scenarios;
pub mod stage5_report;

use crate::model::results::{Prediction, PredictionResult};
use crate::model::subject::SubjectScoreInput;
use crate::model::table::AtarTable;
use crate::model::{MandatorySubjects, ScalingLookup};
use crate::pipeline::stage1_estimate::run_stage1;
use crate::pipeline::stage2_compose::compose;
use crate::pipeline::stage3_convert::convert;

/// Read-only reference data shared by every run.
#[derive(Debug, Clone, Copy)]
pub struct PredictionContext<'a> {
    pub scaling: &'a ScalingLookup,
    pub mandatory: &'a MandatorySubjects,
    pub table: &'a AtarTable,
}

/// Estimate, compose, convert.
pub fn predict(inputs: &[SubjectScoreInput], ctx: &PredictionContext<'_>) -> Prediction {
    let scored = run_stage1(inputs, ctx.scaling);
    let composition = compose(&scored, ctx.mandatory);
    let percentile_rank = if composition.contributing_subjects.is_empty() {
        0.0
    } else {
        convert(composition.aggregate, ctx.table)
    };

    Prediction {
        result: PredictionResult {
            percentile_rank,
            aggregate: composition.aggregate,
        },
        composition,
        scored,
    }
}

use crate::model::policy::{EXTRAPOLATION_FLOOR, round2};
use crate::model::table::AtarTable;

/// Percentile rank for an aggregate, rounded to two decimal places.
///
/// Walks the checkpoints from the highest rank down and interpolates
/// linearly against the next-higher checkpoint. Nothing is reported above
/// the top checkpoint. Below the lowest checkpoint the rank is extrapolated
/// through the origin and floored at 30. A non-positive aggregate returns 0.
pub fn convert(aggregate: f64, table: &AtarTable) -> f64 {
    if aggregate.is_nan() || aggregate <= 0.0 {
        return 0.0;
    }

    let checkpoints = table.checkpoints();
    for (idx, cp) in checkpoints.iter().enumerate() {
        if cp.min_aggregate > aggregate {
            continue;
        }
        if idx == 0 {
            return round2(cp.rank);
        }
        let upper = checkpoints[idx - 1];
        let span = upper.min_aggregate - cp.min_aggregate;
        if span <= 0.0 {
            return round2(cp.rank);
        }
        let ratio = (aggregate - cp.min_aggregate) / span;
        return round2(cp.rank + ratio * (upper.rank - cp.rank));
    }

    let lowest = table.lowest();
    let extrapolated = aggregate / lowest.min_aggregate * lowest.rank;
    round2(extrapolated.max(EXTRAPOLATION_FLOOR))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_convert.rs"]
mod tests;

use crate::model::policy::FULL_WEIGHT;
use crate::report::{SummaryData, format_f64_1, format_f64_2};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("ATAR Prediction Report\n");
    out.push_str("======================\n\n");

    out.push_str("1. Prediction\n");
    if data.computable {
        out.push_str(&format!(
            "Aggregate: {}\nPredicted ATAR: {}\n",
            format_f64_1(data.prediction.aggregate),
            format_f64_2(data.prediction.percentile_rank)
        ));
        out.push_str(&format!(
            "{}\n\n",
            standing_statement(data.prediction.percentile_rank)
        ));
    } else if data.contributing_subjects.is_empty() {
        out.push_str(&format!(
            "Cannot compute: no mandatory subject entered (one of {}).\n\n",
            data.input.mandatory_subjects.join(", ")
        ));
    } else {
        out.push_str("Cannot compute: counted subjects total an aggregate of 0.0.\n\n");
    }

    out.push_str("2. Contributing subjects\n");
    if data.contributing_subjects.is_empty() {
        out.push_str("None.\n");
    }
    for (i, c) in data.contributing_subjects.iter().enumerate() {
        let weight = if c.weight == FULL_WEIGHT {
            "full".to_string()
        } else {
            format!("{:.0}%", c.weight * 100.0)
        };
        out.push_str(&format!(
            "{}. {}: raw {}%, scaled {}, weight {}, counts {}\n",
            i + 1,
            c.subject_id,
            format_f64_1(c.raw_percentage),
            format_f64_1(c.scaled_score),
            weight,
            format_f64_2(c.weighted_score())
        ));
    }
    if !data.excluded_subjects.is_empty() {
        out.push_str(&format!(
            "Not counted: {}\n",
            data.excluded_subjects.join(", ")
        ));
    }
    out.push('\n');

    if let Some(s) = &data.scenarios {
        out.push_str("3. Scenarios (exam results +/-10 points)\n");
        out.push_str(&format!(
            "Best case: {} (aggregate {})\nCurrent: {} (aggregate {})\nWorst case: {} (aggregate {})\n\n",
            format_f64_2(s.best_case.percentile_rank),
            format_f64_1(s.best_case.aggregate),
            format_f64_2(s.current.percentile_rank),
            format_f64_1(s.current.aggregate),
            format_f64_2(s.worst_case.percentile_rank),
            format_f64_1(s.worst_case.aggregate)
        ));
    }

    if let Some(t) = &data.target {
        out.push_str("4. Target\n");
        out.push_str(&format!(
            "Target ATAR {} needs aggregate {}\n",
            format_f64_2(t.rank),
            format_f64_2(t.required_aggregate)
        ));
        if t.aggregate_gap > 0.0 {
            out.push_str(&format!(
                "Short by {} aggregate points.\n",
                format_f64_2(t.aggregate_gap)
            ));
        } else {
            out.push_str("Current prediction meets the target.\n");
        }
    }

    out
}

fn standing_statement(rank: f64) -> &'static str {
    if rank >= 99.0 {
        "Standing: top 1% of the cohort."
    } else if rank >= 90.0 {
        "Standing: top 10% of the cohort."
    } else if rank >= 70.0 {
        "Standing: above the median of the cohort."
    } else if rank >= 50.0 {
        "Standing: around the median of the cohort."
    } else {
        "Standing: below the median of the cohort."
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;

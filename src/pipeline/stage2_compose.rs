use std::cmp::Ordering;

use crate::model::MandatorySubjects;
use crate::model::policy::{
    FULL_WEIGHT, FULL_WEIGHT_COUNT, MAX_CONTRIBUTORS, PARTIAL_WEIGHT, PARTIAL_WEIGHT_COUNT,
    round1,
};
use crate::model::results::{AggregateResult, ContributingSubject};
use crate::model::subject::ScoredSubject;

/// Builds the aggregate: the first mandatory subject in input order, the
/// best three non-mandatory subjects at full weight, and the next two at 10%.
/// Further mandatory entries and anything past the best five are left out.
pub fn compose(scored: &[ScoredSubject], mandatory: &MandatorySubjects) -> AggregateResult {
    let Some(mandatory_idx) = scored
        .iter()
        .position(|s| mandatory.contains(&s.subject_id))
    else {
        tracing::debug!("no mandatory subject present; aggregate cannot be computed");
        return AggregateResult::empty();
    };

    let mut others: Vec<&ScoredSubject> = scored
        .iter()
        .filter(|s| !mandatory.contains(&s.subject_id))
        .collect();
    // stable: ties keep input order
    others.sort_by(|a, b| {
        b.predicted_scaled_score
            .partial_cmp(&a.predicted_scaled_score)
            .unwrap_or(Ordering::Equal)
    });

    let mut contributing = Vec::with_capacity(MAX_CONTRIBUTORS);
    contributing.push(contribution(&scored[mandatory_idx], FULL_WEIGHT));
    for (rank, subject) in others
        .iter()
        .take(FULL_WEIGHT_COUNT + PARTIAL_WEIGHT_COUNT)
        .enumerate()
    {
        let weight = if rank < FULL_WEIGHT_COUNT {
            FULL_WEIGHT
        } else {
            PARTIAL_WEIGHT
        };
        contributing.push(contribution(subject, weight));
    }

    if others.len() > FULL_WEIGHT_COUNT + PARTIAL_WEIGHT_COUNT {
        tracing::debug!(
            excluded = others.len() - FULL_WEIGHT_COUNT - PARTIAL_WEIGHT_COUNT,
            "subjects beyond the best five do not count"
        );
    }

    let aggregate = round1(contributing.iter().map(|c| c.weighted_score()).sum());
    AggregateResult {
        aggregate,
        contributing_subjects: contributing,
    }
}

fn contribution(subject: &ScoredSubject, weight: f64) -> ContributingSubject {
    ContributingSubject {
        subject_id: subject.subject_id.clone(),
        raw_percentage: subject.raw_percentage,
        scaled_score: subject.predicted_scaled_score,
        weight,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_compose.rs"]
mod tests;

use std::cmp::Ordering;

use serde::Deserialize;
use thiserror::Error;

use crate::model::policy::round2;

/// Minimum aggregate needed to reach a percentile rank.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Checkpoint {
    pub rank: f64,
    pub min_aggregate: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("lookup table has no checkpoints")]
    Empty,
    #[error("lookup table entry is not finite: rank={rank}, min_aggregate={min_aggregate}")]
    NonFinite { rank: f64, min_aggregate: f64 },
    #[error("lookup table lists rank {0} more than once")]
    DuplicateRank(f64),
}

/// Percentile-to-aggregate lookup table for one admission year.
///
/// Checkpoints are held sorted by rank, highest first. The table is plain
/// reference data: build it from a file or from `model::reference` and pass
/// it to the converter by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct AtarTable {
    checkpoints: Vec<Checkpoint>,
}

impl AtarTable {
    pub fn from_pairs<I>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut checkpoints = Vec::new();
        for (rank, min_aggregate) in pairs {
            if !rank.is_finite() || !min_aggregate.is_finite() {
                return Err(TableError::NonFinite {
                    rank,
                    min_aggregate,
                });
            }
            checkpoints.push(Checkpoint {
                rank,
                min_aggregate,
            });
        }
        if checkpoints.is_empty() {
            return Err(TableError::Empty);
        }

        checkpoints.sort_by(|a, b| b.rank.partial_cmp(&a.rank).unwrap_or(Ordering::Equal));
        for w in checkpoints.windows(2) {
            if w[0].rank == w[1].rank {
                return Err(TableError::DuplicateRank(w[0].rank));
            }
            if w[1].min_aggregate > w[0].min_aggregate {
                tracing::warn!(
                    "lookup table is not monotone: rank {} needs {} but higher rank {} needs {}",
                    w[1].rank,
                    w[1].min_aggregate,
                    w[0].rank,
                    w[0].min_aggregate
                );
            }
        }

        Ok(Self { checkpoints })
    }

    /// Checkpoints, highest rank first.
    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn highest(&self) -> Checkpoint {
        self.checkpoints[0]
    }

    pub fn lowest(&self) -> Checkpoint {
        self.checkpoints[self.checkpoints.len() - 1]
    }

    /// Aggregate needed to reach `rank`; the inverse of the rank conversion.
    ///
    /// Ranks above the top checkpoint need the top checkpoint's aggregate.
    /// Below the lowest checkpoint the line through the origin is used.
    pub fn aggregate_for_rank(&self, rank: f64) -> f64 {
        if rank <= 0.0 {
            return 0.0;
        }
        let top = self.highest();
        if rank >= top.rank {
            return top.min_aggregate;
        }

        for (idx, cp) in self.checkpoints.iter().enumerate().skip(1) {
            if cp.rank > rank {
                continue;
            }
            let upper = self.checkpoints[idx - 1];
            let span = upper.rank - cp.rank;
            let ratio = (rank - cp.rank) / span;
            return round2(cp.min_aggregate + ratio * (upper.min_aggregate - cp.min_aggregate));
        }

        let lowest = self.lowest();
        round2(rank / lowest.rank * lowest.min_aggregate)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/table.rs"]
mod tests;

//! Scoring of a selection against the rubric
//!
//! The total is the plain sum of the chosen levels' point values; the
//! rubric's weighting is entirely expressed through each criterion's level
//! points, with no separate multipliers and no rounding.
//!
//! An authoritative total requires a complete selection. A provisional
//! breakdown (unset criteria counted as 0) is available for live chart
//! previews, but it is flagged non-final so a partial score is never
//! presented as a result.

use tracing::debug;

use crate::error::{GacsError, Result};
use crate::rubric::{total_max_points, Criterion, CRITERION_COUNT};
use crate::selection::SelectionState;

/// Result of scoring one selection
///
/// Created fresh on every scoring call; `per_criterion` is aligned with
/// [`Criterion::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    /// Sum of the chosen levels' point values
    pub total: u32,
    /// Sum of all criteria's maximum points (100 under the current rubric)
    pub total_max: u32,
    /// Chosen points per criterion, 0 where unset in a preview
    pub per_criterion: [u32; CRITERION_COUNT],
    /// False for previews built from an incomplete selection
    pub is_final: bool,
}

impl ScoreBreakdown {
    /// Chosen points for a criterion
    pub fn points(&self, criterion: Criterion) -> u32 {
        self.per_criterion[criterion.index()]
    }

    /// Performance ratio for a criterion in [0, 1]
    ///
    /// A criterion with a zero maximum cannot produce a meaningful ratio;
    /// the worst-case sentinel 0.0 is returned instead of dividing.
    pub fn ratio(&self, criterion: Criterion) -> f64 {
        let max = criterion.max_points();
        if max == 0 {
            return 0.0;
        }
        f64::from(self.points(criterion)) / f64::from(max)
    }

    /// Aggregate ratio `total / total_max` in [0, 1]
    pub fn total_ratio(&self) -> f64 {
        if self.total_max == 0 {
            return 0.0;
        }
        f64::from(self.total) / f64::from(self.total_max)
    }
}

/// Computes score breakdowns from selection states
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score a complete selection
    ///
    /// Fails with [`GacsError::IncompleteSelection`] when any criterion is
    /// unset; the total is never silently computed from partial data.
    pub fn score(&self, selection: &SelectionState) -> Result<ScoreBreakdown> {
        if !selection.is_complete() {
            let missing = selection.missing();
            debug!(missing = missing.len(), "scoring rejected: selection incomplete");
            return Err(GacsError::IncompleteSelection { missing });
        }

        let mut breakdown = self.preview(selection);
        breakdown.is_final = true;
        debug!(total = breakdown.total, "selection scored");
        Ok(breakdown)
    }

    /// Provisional breakdown for live preview
    ///
    /// Unset criteria count as 0. The returned total is not authoritative
    /// (`is_final == false`).
    pub fn preview(&self, selection: &SelectionState) -> ScoreBreakdown {
        let mut per_criterion = [0u32; CRITERION_COUNT];
        for (slot, points) in per_criterion.iter_mut().zip(selection.selected_points()) {
            *slot = points.unwrap_or(0);
        }

        ScoreBreakdown {
            total: per_criterion.iter().sum(),
            total_max: total_max_points(),
            per_criterion,
            is_final: false,
        }
    }
}

//! Selection state for a single assessment
//!
//! Holds, per criterion, either "unselected" or one chosen quality level.
//! The state is owned by the caller (typically a form); the scoring and
//! rendering code only reads it.
//!
//! Every accessor that returns a sequence is aligned positionally with
//! [`Criterion::ALL`] — downstream code zips against that order, so the
//! alignment is load-bearing, not cosmetic.

use crate::error::{GacsError, Result};
use crate::rubric::{Criterion, Level, CRITERION_COUNT};

/// Per-criterion chosen levels for one assessment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionState {
    // Level indices into Criterion::levels(), aligned with Criterion::ALL
    chosen: [Option<usize>; CRITERION_COUNT],
}

impl SelectionState {
    /// New state with every criterion unselected
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a level for a criterion by its index into `criterion.levels()`
    ///
    /// Replaces any previous choice; at most one level per criterion.
    pub fn select(&mut self, criterion: Criterion, level_index: usize) -> Result<()> {
        if level_index >= criterion.levels().len() {
            return Err(GacsError::UnknownLevel {
                criterion,
                index: level_index,
            });
        }
        self.chosen[criterion.index()] = Some(level_index);
        Ok(())
    }

    /// Choose a level by its display label
    pub fn select_by_label(&mut self, criterion: Criterion, label: &str) -> Result<()> {
        match criterion.level_index_by_label(label) {
            Some(index) => self.select(criterion, index),
            None => Err(GacsError::UnknownLabel {
                criterion,
                label: label.to_string(),
            }),
        }
    }

    /// Clear the choice for a criterion
    pub fn clear(&mut self, criterion: Criterion) {
        self.chosen[criterion.index()] = None;
    }

    /// The chosen level for a criterion, if any
    pub fn get(&self, criterion: Criterion) -> Option<&'static Level> {
        self.chosen[criterion.index()].map(|i| &criterion.levels()[i])
    }

    /// True iff every criterion has a chosen level
    pub fn is_complete(&self) -> bool {
        self.chosen.iter().all(Option::is_some)
    }

    /// Criteria without a chosen level, in canonical order
    pub fn missing(&self) -> Vec<Criterion> {
        Criterion::ALL
            .iter()
            .copied()
            .filter(|c| self.chosen[c.index()].is_none())
            .collect()
    }

    /// Chosen point values aligned with [`Criterion::ALL`], `None` where unset
    pub fn selected_points(&self) -> [Option<u32>; CRITERION_COUNT] {
        let mut points = [None; CRITERION_COUNT];
        for (i, criterion) in Criterion::ALL.iter().enumerate() {
            points[i] = self.chosen[i].map(|idx| criterion.levels()[idx].points);
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let state = SelectionState::new();
        assert!(!state.is_complete());
        assert_eq!(state.missing().len(), CRITERION_COUNT);
        assert!(state.selected_points().iter().all(Option::is_none));
    }

    #[test]
    fn select_and_replace() {
        let mut state = SelectionState::new();
        state.select(Criterion::SolventGreenness, 0).unwrap();
        assert_eq!(state.get(Criterion::SolventGreenness).unwrap().points, 10);

        // Re-selecting replaces, never accumulates
        state.select(Criterion::SolventGreenness, 4).unwrap();
        assert_eq!(state.get(Criterion::SolventGreenness).unwrap().points, 0);
    }

    #[test]
    fn out_of_range_level_rejected() {
        let mut state = SelectionState::new();
        let err = state.select(Criterion::SynthesisTime, 99).unwrap_err();
        assert!(matches!(err, GacsError::UnknownLevel { .. }));
        assert!(state.get(Criterion::SynthesisTime).is_none());
    }

    #[test]
    fn select_by_label() {
        let mut state = SelectionState::new();
        state
            .select_by_label(Criterion::EnergyInput, "Not specified")
            .unwrap();
        assert_eq!(state.get(Criterion::EnergyInput).unwrap().points, 0);
        assert!(state
            .select_by_label(Criterion::EnergyInput, "Fusion reactor")
            .is_err());
    }

    #[test]
    fn points_aligned_with_canonical_order() {
        let mut state = SelectionState::new();
        state.select(Criterion::PrecursorOrigin, 0).unwrap(); // 12 points
        state.select(Criterion::SynthesisTime, 0).unwrap(); // 5 points

        let points = state.selected_points();
        assert_eq!(points[Criterion::PrecursorOrigin.index()], Some(12));
        assert_eq!(points[Criterion::SynthesisTime.index()], Some(5));
        assert_eq!(points[Criterion::QuantumYield.index()], None);
    }

    #[test]
    fn clear_removes_choice() {
        let mut state = SelectionState::new();
        state.select(Criterion::QuantumYield, 0).unwrap();
        state.clear(Criterion::QuantumYield);
        assert!(state.get(Criterion::QuantumYield).is_none());
    }
}

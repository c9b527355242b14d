//! Error types for GACS scoring and chart export

use thiserror::Error;

use crate::rubric::Criterion;

/// Errors that can occur when scoring a selection or exporting a chart
#[derive(Error, Debug)]
pub enum GacsError {
    /// Scoring was attempted before every criterion had a chosen level.
    ///
    /// The total score is never computed from a partial selection; callers
    /// should prompt for the missing criteria and retry.
    #[error("selection incomplete: {} criteria unset ({})", .missing.len(), format_missing(.missing))]
    IncompleteSelection {
        /// Criteria that have no chosen level, in canonical order
        missing: Vec<Criterion>,
    },

    /// A level index outside the criterion's level table was selected
    #[error("criterion {criterion:?} has no level at index {index}")]
    UnknownLevel { criterion: Criterion, index: usize },

    /// No level of the criterion carries the given display label
    #[error("criterion {criterion:?} has no level labeled {label:?}")]
    UnknownLabel { criterion: Criterion, label: String },

    /// Export was requested before any chart had been rendered
    #[error("nothing to export: no chart has been rendered yet")]
    NothingRendered,

    /// The export surface could not be rasterized
    #[error("rasterization failed: {0}")]
    Raster(String),

    /// The rasterized image could not be encoded
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// The paginated document could not be assembled
    #[error("PDF generation failed: {0}")]
    Pdf(#[from] lopdf::Error),

    /// The target file could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_missing(missing: &[Criterion]) -> String {
    missing
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, GacsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_selection_lists_criteria() {
        let err = GacsError::IncompleteSelection {
            missing: vec![Criterion::SolventGreenness, Criterion::EnergyInput],
        };
        let msg = err.to_string();
        assert!(msg.contains("2 criteria unset"));
        assert!(msg.contains("Solvent Greenness"));
        assert!(msg.contains("Energy Input"));
    }
}

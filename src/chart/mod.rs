//! Chart data generation and SVG rendering for the GACS radial chart
//!
//! The chart is a full circle partitioned into 11 proportional slices, one
//! per rubric criterion. Slice geometry comes from the fixed angle table,
//! slice color from the criterion's performance ratio on a green→yellow→red
//! ramp, and the aggregate score is shown as a glossy shaded indicator disc.
//!
//! Rendering targets a plain SVG surface; rasterization and file output
//! live in [`crate::export`].
//!
//! # Example
//!
//! ```rust
//! use gacs::{ChartRenderer, ChartStyle, ScoringEngine, SelectionState};
//! use gacs::rubric::Criterion;
//!
//! let mut selection = SelectionState::new();
//! for criterion in Criterion::ALL {
//!     selection.select(criterion, 0).unwrap();
//! }
//! let breakdown = ScoringEngine::new().score(&selection).unwrap();
//!
//! let renderer = ChartRenderer::new(ChartStyle::default());
//! let chart = renderer.render(&breakdown, 600.0, 600.0);
//! assert!(chart.svg.starts_with("<svg"));
//! ```

mod color;
mod geometry;
mod render;

pub use color::{Color, ColorRamp, IndicatorShades};
pub use geometry::{compute_arcs, SliceArc};
pub use render::{ChartRenderer, ChartStyle, RenderedChart};

/// Common 2D point used across chart types
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

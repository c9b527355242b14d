//! # gacs
//!
//! A Rust library implementing the **GACS** (Greenness Assessment of
//! Chemical Synthesis) rubric for nanomaterial synthesis procedures:
//! scoring, radial chart generation, and print-resolution export.
//!
//! ## About GACS
//!
//! GACS scores a synthesis procedure against 11 independent greenness
//! criteria grouped around resource sustainability, synthesis efficiency,
//! and product quality. Each criterion offers 5–6 discrete quality levels
//! carrying fixed point values; the criterion maxima range from 5 to 10
//! points (12 for precursor origin) and sum to 100, so the aggregate score
//! reads directly as a percentage.
//!
//! The result is visualized as a proportionally sliced radial ("pizza")
//! chart: one slice per criterion, sized by a fixed angle table and colored
//! along a green→yellow→red ramp by the criterion's achieved-to-maximum
//! ratio, with a glossy indicator disc encoding the aggregate ratio.
//!
//! ## Features
//!
//! - **Rubric catalog** - the full 11-criterion level tables with display
//!   labels and point values
//! - **Scoring** - authoritative totals from complete selections, plus
//!   provisional previews for live feedback
//! - **Chart generation** - slice geometry, ratio→color mapping, and SVG
//!   rendering with optional icons and center emblem
//! - **Export** - PNG, JPEG (quality 95), or single-page PDF at 288 DPI,
//!   re-rasterized at ≥2× with a score caption overlay
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gacs::{ExportFormat, GacsChart, SelectionState};
//! use gacs::rubric::Criterion;
//!
//! // Record one chosen level per criterion (normally driven by a form)
//! let mut selection = SelectionState::new();
//! selection.select_by_label(Criterion::SolventGreenness, "Water only")?;
//! selection.select(Criterion::PrecursorOrigin, 0)?;
//! for criterion in Criterion::ALL {
//!     if selection.get(criterion).is_none() {
//!         selection.select(criterion, 0)?;
//!     }
//! }
//!
//! // Score, render, export
//! let mut chart = GacsChart::new();
//! let rendered = chart.score_and_render(&selection, 600.0, 600.0)?;
//! println!("Total: {}/{}", rendered.total, rendered.total_max);
//!
//! let filename = chart.suggested_filename(ExportFormat::Pdf)?;
//! chart.export(ExportFormat::Pdf, filename)?;
//! # Ok::<(), gacs::GacsError>(())
//! ```
//!
//! ## Lower-level use
//!
//! Each stage is usable on its own: [`ScoringEngine`] turns a
//! [`SelectionState`] into a [`ScoreBreakdown`], [`ChartRenderer`] turns a
//! breakdown into an SVG surface, and [`Exporter`] turns that surface into
//! encoded bytes or a file. All stages are synchronous, stateless between
//! calls, and safe to share across threads; the rubric catalog and color
//! stops are process-wide immutable constants.

pub mod chart;
mod error;
mod export;
pub mod rubric;
mod score;
mod selection;

pub use chart::{ChartRenderer, ChartStyle, Color, ColorRamp, IndicatorShades, RenderedChart};
pub use error::{GacsError, Result};
pub use export::{ExportFormat, Exporter, GacsChart};
pub use rubric::{Criterion, Level};
pub use score::{ScoreBreakdown, ScoringEngine};
pub use selection::SelectionState;

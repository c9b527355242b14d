//! The GACS rubric catalog
//!
//! Static definition of the 11 greenness criteria used to assess a
//! nanomaterial synthesis procedure. Each criterion carries an ordered list
//! of discrete quality levels (display label + point value), a derived
//! maximum point value, and a fixed chart slice angle.
//!
//! The level tables are in *display* order, not point order: a
//! "Not specified" level can legitimately outscore the worst explicit level
//! (precursor origin scores 3 for unspecified vs 1 for known high toxicity).
//!
//! Slice angles are fixed design constants summing to 360°. They track the
//! per-criterion maxima closely but are not derived from them; see the
//! rubric table below.
//!
//! | Criterion | Max points | Slice angle |
//! |-----------|-----------:|------------:|
//! | Precursor Origin | 12 | 43° |
//! | Solvent Greenness | 10 | 36° |
//! | Energy Input | 8 | 29° |
//! | E-Factor / Waste Generation | 10 | 36° |
//! | Synthesis Time | 5 | 18° |
//! | Simplicity & Scalability | 10 | 36° |
//! | Purification Simplicity | 5 | 18° |
//! | Reaction Mass Efficiency | 10 | 36° |
//! | Quantum Yield | 10 | 36° |
//! | Morphology & Uniformity | 10 | 36° |
//! | Performance & Applicability | 10 | 36° |

/// One discrete, mutually exclusive quality tier within a criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    /// Human-readable description shown to the assessor
    pub label: &'static str,
    /// Points awarded when this level is chosen
    pub points: u32,
}

impl Level {
    const fn new(label: &'static str, points: u32) -> Self {
        Self { label, points }
    }
}

/// One independently scored rubric dimension
///
/// The variant order is the canonical slice order: every positional sequence
/// in this crate (selections, breakdowns, slice angles, colors) is aligned
/// with [`Criterion::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Criterion {
    PrecursorOrigin,
    SolventGreenness,
    EnergyInput,
    EFactorWaste,
    SynthesisTime,
    SimplicityScalability,
    PurificationSimplicity,
    ReactionMassEfficiency,
    QuantumYield,
    MorphologyUniformity,
    PerformanceApplicability,
}

/// Number of criteria in the rubric
pub const CRITERION_COUNT: usize = 11;

const PRECURSOR_ORIGIN_LEVELS: &[Level] = &[
    Level::new("Waste biomass or agri-food waste", 12),
    Level::new("Abundant non-waste natural materials", 9),
    Level::new("Purified bio-based molecules", 6),
    Level::new("Common synthetic chemicals", 3),
    Level::new("Chemicals with known high toxicity", 1),
    Level::new("Not specified or highly hazardous", 3),
];

const SOLVENT_GREENNESS_LEVELS: &[Level] = &[
    Level::new("Water only", 10),
    Level::new("Green solvents", 7),
    Level::new("Low-toxicity solvents", 4),
    Level::new("Problematic solvents", 2),
    Level::new("Highly hazardous solvents", 0),
];

const ENERGY_INPUT_LEVELS: &[Level] = &[
    Level::new("Room temperature, Sunlight or Ambient processes", 8),
    Level::new("Microwave or Ultrasound assisted (efficient heating)", 6),
    Level::new("Hydrothermal or Solvothermal (<200\u{b0}C)", 4),
    Level::new("Pyrolysis, Calcination or Hydrothermal (>200\u{b0}C)", 2),
    Level::new("High-energy methods", 1),
    Level::new("Not specified", 0),
];

const E_FACTOR_WASTE_LEVELS: &[Level] = &[
    Level::new("E-Factor < 10 (Minimal waste)", 10),
    Level::new("E-Factor 10 - 50", 7),
    Level::new("E-Factor 50 - 100", 4),
    Level::new("E-Factor 100 - 500", 2),
    Level::new("E-Factor > 500 or Not Specified", 0),
];

const SYNTHESIS_TIME_LEVELS: &[Level] = &[
    Level::new("\u{2264} 1 hour", 5),
    Level::new("1 - 3 hours", 4),
    Level::new("3 - 6 hours", 3),
    Level::new("6 - 12 hours", 2),
    Level::new("12 - 24 hours", 1),
    Level::new("> 24 hours", 0),
];

const SIMPLICITY_SCALABILITY_LEVELS: &[Level] = &[
    Level::new("One-pot, room temperature, no specialized equipment", 10),
    Level::new("One-pot with simple, common lab equipment", 8),
    Level::new("One-pot with single specialized reactor", 5),
    Level::new("Multi-step synthesis or complex instrumentation", 2),
    Level::new("Highly complex, dangerous, or poorly described process", 0),
];

const PURIFICATION_SIMPLICITY_LEVELS: &[Level] = &[
    Level::new("None or trivial", 5),
    Level::new("Single simple step", 4),
    Level::new("Single complex step or two simple steps", 3),
    Level::new("Multiple complex steps", 1),
    Level::new("Highly complex, multi-day purification", 0),
];

const REACTION_MASS_EFFICIENCY_LEVELS: &[Level] = &[
    Level::new("Yield \u{2265} 50% or RME > 80%", 10),
    Level::new("Yield 25 - 50% or RME 50 - 80%", 7),
    Level::new("Yield 10 - 25%", 4),
    Level::new("Yield 1 - 10%", 2),
    Level::new("Yield < 1% or Not Specified", 0),
];

const QUANTUM_YIELD_LEVELS: &[Level] = &[
    Level::new("\u{2265} 50%", 10),
    Level::new("25 \u{2013} 50%", 8),
    Level::new("10 \u{2013} 25%", 6),
    Level::new("5 \u{2013} 10%", 4),
    Level::new("1 \u{2013} 5%", 2),
    Level::new("< 1% or Not Specified", 0),
];

const MORPHOLOGY_UNIFORMITY_LEVELS: &[Level] = &[
    Level::new("Size < 3 nm and SD < 0.5 nm (or PDI < 0.1)", 10),
    Level::new("Size 3\u{2013}5 nm and SD 0.5\u{2013}1.5 nm (or PDI 0.1\u{2013}0.2)", 8),
    Level::new("Size 5\u{2013}7 nm and SD 1.5\u{2013}2.5 nm (or PDI 0.2\u{2013}0.3)", 6),
    Level::new("Defined size but broad distribution (SD > 2.5 nm)", 4),
    Level::new("No characterization or very poor uniformity", 0),
];

const PERFORMANCE_APPLICABILITY_LEVELS: &[Level] = &[
    Level::new(
        "High-performance in demanding application (e.g., in vivo bioimaging, electrocatalysis) with data",
        10,
    ),
    Level::new(
        "Good performance in standard application (e.g., sensing, in vitro imaging) with data",
        7,
    ),
    Level::new("Application demonstrated but with mediocre performance", 4),
    Level::new("Application claimed but with minimal or no supporting data", 2),
    Level::new("No application investigated or mentioned", 0),
];

impl Criterion {
    /// All criteria in canonical slice order
    pub const ALL: [Criterion; CRITERION_COUNT] = [
        Criterion::PrecursorOrigin,
        Criterion::SolventGreenness,
        Criterion::EnergyInput,
        Criterion::EFactorWaste,
        Criterion::SynthesisTime,
        Criterion::SimplicityScalability,
        Criterion::PurificationSimplicity,
        Criterion::ReactionMassEfficiency,
        Criterion::QuantumYield,
        Criterion::MorphologyUniformity,
        Criterion::PerformanceApplicability,
    ];

    /// Position of this criterion in [`Criterion::ALL`]
    pub fn index(&self) -> usize {
        Criterion::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or_default()
    }

    /// Human-readable criterion name
    pub fn name(&self) -> &'static str {
        match self {
            Criterion::PrecursorOrigin => "Precursor Origin",
            Criterion::SolventGreenness => "Solvent Greenness",
            Criterion::EnergyInput => "Energy Input",
            Criterion::EFactorWaste => "E-Factor / Waste Generation",
            Criterion::SynthesisTime => "Synthesis Time",
            Criterion::SimplicityScalability => "Simplicity & Scalability",
            Criterion::PurificationSimplicity => "Purification Simplicity",
            Criterion::ReactionMassEfficiency => "Reaction Mass Efficiency",
            Criterion::QuantumYield => "Quantum Yield",
            Criterion::MorphologyUniformity => "Morphology & Uniformity",
            Criterion::PerformanceApplicability => "Performance & Applicability",
        }
    }

    /// Short glyph used for the optional per-slice icon
    pub fn glyph(&self) -> &'static str {
        match self {
            Criterion::PrecursorOrigin => "P",
            Criterion::SolventGreenness => "S",
            Criterion::EnergyInput => "E",
            Criterion::EFactorWaste => "W",
            Criterion::SynthesisTime => "T",
            Criterion::SimplicityScalability => "Sc",
            Criterion::PurificationSimplicity => "Pu",
            Criterion::ReactionMassEfficiency => "R",
            Criterion::QuantumYield => "Q",
            Criterion::MorphologyUniformity => "M",
            Criterion::PerformanceApplicability => "A",
        }
    }

    /// Quality levels in display order
    pub fn levels(&self) -> &'static [Level] {
        match self {
            Criterion::PrecursorOrigin => PRECURSOR_ORIGIN_LEVELS,
            Criterion::SolventGreenness => SOLVENT_GREENNESS_LEVELS,
            Criterion::EnergyInput => ENERGY_INPUT_LEVELS,
            Criterion::EFactorWaste => E_FACTOR_WASTE_LEVELS,
            Criterion::SynthesisTime => SYNTHESIS_TIME_LEVELS,
            Criterion::SimplicityScalability => SIMPLICITY_SCALABILITY_LEVELS,
            Criterion::PurificationSimplicity => PURIFICATION_SIMPLICITY_LEVELS,
            Criterion::ReactionMassEfficiency => REACTION_MASS_EFFICIENCY_LEVELS,
            Criterion::QuantumYield => QUANTUM_YIELD_LEVELS,
            Criterion::MorphologyUniformity => MORPHOLOGY_UNIFORMITY_LEVELS,
            Criterion::PerformanceApplicability => PERFORMANCE_APPLICABILITY_LEVELS,
        }
    }

    /// Maximum achievable points for this criterion
    pub fn max_points(&self) -> u32 {
        self.levels().iter().map(|l| l.points).max().unwrap_or(0)
    }

    /// Fixed chart slice angle in degrees
    ///
    /// Design constants from the published chart layout; they sum to 360 but
    /// are not derived from the point maxima.
    pub fn slice_angle(&self) -> f64 {
        match self {
            Criterion::PrecursorOrigin => 43.0,
            Criterion::SolventGreenness => 36.0,
            Criterion::EnergyInput => 29.0,
            Criterion::EFactorWaste => 36.0,
            Criterion::SynthesisTime => 18.0,
            Criterion::SimplicityScalability => 36.0,
            Criterion::PurificationSimplicity => 18.0,
            Criterion::ReactionMassEfficiency => 36.0,
            Criterion::QuantumYield => 36.0,
            Criterion::MorphologyUniformity => 36.0,
            Criterion::PerformanceApplicability => 36.0,
        }
    }

    /// Find a level index by its display label
    ///
    /// Intended for callers wiring the level tables into selection lists;
    /// comparison is exact.
    pub fn level_index_by_label(&self, label: &str) -> Option<usize> {
        self.levels().iter().position(|l| l.label == label)
    }
}

/// Slice angles for all criteria, in canonical order
pub fn slice_angles() -> [f64; CRITERION_COUNT] {
    let mut angles = [0.0; CRITERION_COUNT];
    for (i, criterion) in Criterion::ALL.iter().enumerate() {
        angles[i] = criterion.slice_angle();
    }
    angles
}

/// Sum of all criteria's maximum points (100 under the current rubric)
pub fn total_max_points() -> u32 {
    Criterion::ALL.iter().map(|c| c.max_points()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eleven_criteria() {
        assert_eq!(Criterion::ALL.len(), CRITERION_COUNT);
    }

    #[test]
    fn slice_angles_sum_to_360() {
        let sum: f64 = slice_angles().iter().sum();
        assert!((sum - 360.0).abs() < 1e-9);
    }

    #[test]
    fn total_max_is_100() {
        assert_eq!(total_max_points(), 100);
    }

    #[test]
    fn max_points_per_criterion() {
        assert_eq!(Criterion::PrecursorOrigin.max_points(), 12);
        assert_eq!(Criterion::EnergyInput.max_points(), 8);
        assert_eq!(Criterion::SynthesisTime.max_points(), 5);
        assert_eq!(Criterion::PurificationSimplicity.max_points(), 5);
        assert_eq!(Criterion::QuantumYield.max_points(), 10);
    }

    #[test]
    fn display_order_is_not_point_order() {
        // "Not specified" outscores the explicit worst level
        let levels = Criterion::PrecursorOrigin.levels();
        let last = levels[levels.len() - 1].points;
        let second_last = levels[levels.len() - 2].points;
        assert!(last > second_last);
    }

    #[test]
    fn index_matches_canonical_order() {
        for (i, criterion) in Criterion::ALL.iter().enumerate() {
            assert_eq!(criterion.index(), i);
        }
    }

    #[test]
    fn level_lookup_by_label() {
        assert_eq!(
            Criterion::SolventGreenness.level_index_by_label("Water only"),
            Some(0)
        );
        assert_eq!(
            Criterion::SolventGreenness.level_index_by_label("Mercury"),
            None
        );
    }
}

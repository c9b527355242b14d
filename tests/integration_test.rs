//! Integration tests for the gacs crate.

use gacs::rubric::{self, Criterion};
use gacs::{
    ChartRenderer, ChartStyle, ColorRamp, ExportFormat, Exporter, GacsChart, GacsError,
    ScoringEngine, SelectionState,
};

fn complete_selection() -> SelectionState {
    let mut selection = SelectionState::new();
    for criterion in Criterion::ALL {
        selection.select(criterion, 0).unwrap();
    }
    selection
}

/// A realistic mixed assessment: a hydrothermal carbon-dot synthesis from
/// citric acid with decent but not outstanding characterization.
fn mixed_selection() -> SelectionState {
    let mut selection = SelectionState::new();
    let choices = [
        (Criterion::PrecursorOrigin, "Purified bio-based molecules"),
        (Criterion::SolventGreenness, "Water only"),
        (
            Criterion::EnergyInput,
            "Hydrothermal or Solvothermal (<200\u{b0}C)",
        ),
        (Criterion::EFactorWaste, "E-Factor 10 - 50"),
        (Criterion::SynthesisTime, "3 - 6 hours"),
        (
            Criterion::SimplicityScalability,
            "One-pot with single specialized reactor",
        ),
        (Criterion::PurificationSimplicity, "Single simple step"),
        (
            Criterion::ReactionMassEfficiency,
            "Yield 25 - 50% or RME 50 - 80%",
        ),
        (Criterion::QuantumYield, "10 \u{2013} 25%"),
        (
            Criterion::MorphologyUniformity,
            "Size 3\u{2013}5 nm and SD 0.5\u{2013}1.5 nm (or PDI 0.1\u{2013}0.2)",
        ),
        (
            Criterion::PerformanceApplicability,
            "Good performance in standard application (e.g., sensing, in vitro imaging) with data",
        ),
    ];
    for (criterion, label) in choices {
        selection.select_by_label(criterion, label).unwrap();
    }
    selection
}

#[test]
fn rubric_geometry_and_maxima_are_consistent() {
    let angle_sum: f64 = rubric::slice_angles().iter().sum();
    assert!((angle_sum - 360.0).abs() < 1e-9);
    assert_eq!(rubric::total_max_points(), 100);

    for criterion in Criterion::ALL {
        assert!(!criterion.levels().is_empty());
        assert!(criterion.slice_angle() > 0.0);
        assert!(criterion.max_points() >= 5);
    }
}

#[test]
fn mixed_selection_scores_the_expected_total() {
    let breakdown = ScoringEngine::new().score(&mixed_selection()).unwrap();
    // 6 + 10 + 4 + 7 + 3 + 5 + 4 + 7 + 6 + 8 + 7
    assert_eq!(breakdown.total, 67);
    assert!(breakdown.is_final);
    assert_eq!(breakdown.points(Criterion::SolventGreenness), 10);
    assert!((breakdown.ratio(Criterion::SolventGreenness) - 1.0).abs() < 1e-12);
    assert!((breakdown.total_ratio() - 0.67).abs() < 1e-12);
}

#[test]
fn scoring_never_totals_a_partial_selection() {
    let engine = ScoringEngine::new();
    let mut selection = mixed_selection();
    selection.clear(Criterion::QuantumYield);

    match engine.score(&selection) {
        Err(GacsError::IncompleteSelection { missing }) => {
            assert_eq!(missing, vec![Criterion::QuantumYield]);
        }
        other => panic!("expected IncompleteSelection, got {other:?}"),
    }

    // The preview still gives per-criterion data for live display
    let preview = engine.preview(&selection);
    assert!(!preview.is_final);
    assert_eq!(preview.points(Criterion::QuantumYield), 0);
    assert_eq!(preview.total, 61);
}

#[test]
fn slice_colors_track_ratios_not_slice_order() {
    let ramp = ColorRamp::new();
    let breakdown = ScoringEngine::new().score(&mixed_selection()).unwrap();

    let perfect = ramp.color_continuous(breakdown.ratio(Criterion::SolventGreenness));
    let weak = ramp.color_continuous(breakdown.ratio(Criterion::SynthesisTime));
    assert_eq!(perfect, ramp.color_continuous(1.0));
    assert_ne!(perfect, weak);
}

#[test]
fn chart_svg_contains_every_slice_and_the_caption_data() {
    let breakdown = ScoringEngine::new().score(&mixed_selection()).unwrap();
    let chart = ChartRenderer::new(ChartStyle::default()).render(&breakdown, 600.0, 600.0);

    assert_eq!(chart.svg.matches("<path d=\"M ").count(), 11);
    assert_eq!(chart.total, 67);
    assert_eq!(chart.indicator.base, ColorRamp::new().color_for(0.67));
}

#[test]
fn full_pipeline_renders_and_exports_non_blank_rasters() {
    let mut chart = GacsChart::new();
    chart
        .score_and_render(&mixed_selection(), 500.0, 500.0)
        .unwrap();

    let png = chart.export_to_vec(ExportFormat::Png).unwrap();
    let jpeg = chart.export_to_vec(ExportFormat::Jpeg).unwrap();
    let pdf = chart.export_to_vec(ExportFormat::Pdf).unwrap();

    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    assert_eq!(&jpeg[..2], b"\xff\xd8");
    assert_eq!(&pdf[..5], b"%PDF-");

    // Non-blank: the decoded PNG must contain more than one distinct color
    let decoded = image::load_from_memory(&png).unwrap().to_rgb8();
    let first = *decoded.get_pixel(0, 0);
    assert!(decoded.pixels().any(|p| *p != first));
}

#[test]
fn export_before_render_is_an_error_not_a_blank_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.png");

    let chart = GacsChart::new();
    let err = chart.export(ExportFormat::Png, &path).unwrap_err();
    assert!(matches!(err, GacsError::NothingRendered));
    assert!(!path.exists());
}

#[test]
fn export_to_unwritable_path_leaves_no_file() {
    let mut chart = GacsChart::new();
    chart
        .score_and_render(&complete_selection(), 300.0, 300.0)
        .unwrap();

    let err = chart
        .export(ExportFormat::Png, "/nonexistent-dir/chart.png")
        .unwrap_err();
    assert!(matches!(err, GacsError::Io(_)));
}

#[test]
fn exporter_jpeg_quality_and_pdf_page_count() {
    let mut chart = GacsChart::new();
    chart
        .score_and_render(&complete_selection(), 300.0, 300.0)
        .unwrap();

    let exporter = Exporter::default();
    assert_eq!(exporter.jpeg_quality, 95);
    assert!((exporter.pdf_dpi - 288.0).abs() < f64::EPSILON);
    assert!((exporter.margin_fraction - 0.10).abs() < f64::EPSILON);

    let pdf = chart.export_to_vec(ExportFormat::Pdf).unwrap();
    let doc = lopdf::Document::load_mem(&pdf).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

//! SVG rendering of the GACS radial chart
//!
//! Draws one filled arc-sector per criterion, colored by its performance
//! ratio, plus the glossy aggregate score indicator and the optional icon
//! glyphs and center emblem. Each call is a full redraw from the given
//! breakdown; the renderer holds no state between calls and performs no I/O.

use tracing::debug;

use super::color::ColorRamp;
use super::geometry::{compute_arcs, point_at};
use super::{IndicatorShades, Point2D};
use crate::rubric::{slice_angles, Criterion};
use crate::score::ScoreBreakdown;

/// Visual configuration for the radial chart
#[derive(Debug, Clone)]
pub struct ChartStyle {
    /// Background color (use "transparent" to skip the backdrop)
    pub background: String,
    /// Separator stroke between slices
    pub stroke_color: String,
    /// Separator stroke width
    pub stroke_width: f64,
    /// Rotation offset in degrees; -90 starts the first slice at 12 o'clock
    pub rotation_offset: f64,
    /// Chart radius as a fraction of the smaller surface dimension
    pub radius_fraction: f64,
    /// Whether to place an icon glyph beyond each slice
    pub show_icons: bool,
    /// Radial offset of icon centers, as a multiple of the chart radius
    pub icon_offset: f64,
    /// Whether to draw the aggregate indicator disc in the corner
    pub show_indicator: bool,
    /// Whether to draw the circular center emblem over the slices
    pub show_emblem: bool,
    /// Emblem radius as a fraction of the chart radius
    pub emblem_fraction: f64,
    /// Font family for glyphs and emblem text
    pub font_family: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            stroke_color: "#FFFFFF".to_string(),
            stroke_width: 1.5,
            rotation_offset: -90.0,
            radius_fraction: 0.4,
            show_icons: true,
            icon_offset: 1.12,
            show_indicator: true,
            show_emblem: true,
            emblem_fraction: 0.28,
            font_family: "system-ui, -apple-system, sans-serif".to_string(),
        }
    }
}

impl ChartStyle {
    /// Bare chart: slices only, no icons, emblem, or indicator
    pub fn plain() -> Self {
        Self {
            show_icons: false,
            show_indicator: false,
            show_emblem: false,
            ..Default::default()
        }
    }
}

/// A fully drawn chart surface plus the data needed to caption it
#[derive(Debug, Clone)]
pub struct RenderedChart {
    /// The SVG surface
    pub svg: String,
    /// Surface width in user units
    pub width: f64,
    /// Surface height in user units
    pub height: f64,
    /// Total score the chart was drawn from
    pub total: u32,
    /// Maximum achievable total
    pub total_max: u32,
    /// Shades of the aggregate indicator, for callers overlaying it again
    pub indicator: IndicatorShades,
}

/// Renders score breakdowns onto an SVG surface
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    style: ChartStyle,
    ramp: ColorRamp,
}

impl ChartRenderer {
    pub fn new(style: ChartStyle) -> Self {
        Self {
            style,
            ramp: ColorRamp::new(),
        }
    }

    /// Draw the full chart for a breakdown
    ///
    /// Works for both final and preview breakdowns; unset criteria in a
    /// preview render as worst-ratio slices.
    pub fn render(&self, breakdown: &ScoreBreakdown, width: f64, height: f64) -> RenderedChart {
        let style = &self.style;
        let center = Point2D::new(width / 2.0, height / 2.0);
        let radius = width.min(height) * style.radius_fraction;
        let arcs = compute_arcs(center, radius, &slice_angles(), style.rotation_offset);
        let indicator = self.ramp.indicator_shades(breakdown.total_ratio());

        debug!(
            total = breakdown.total,
            width, height, "rendering radial chart"
        );

        let mut svg = String::new();
        svg.push_str(&format!(
            r#"<svg viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg">"#
        ));

        svg.push_str(&format!(
            r#"<defs><radialGradient id="indicatorShine" cx="35%" cy="30%" r="75%"><stop offset="0%" stop-color="{}"/><stop offset="55%" stop-color="{}"/><stop offset="100%" stop-color="{}"/></radialGradient><clipPath id="emblemClip"><circle cx="{:.1}" cy="{:.1}" r="{:.1}"/></clipPath></defs>"#,
            indicator.highlight.to_hex_string(),
            indicator.base.to_hex_string(),
            indicator.shadow.to_hex_string(),
            center.x,
            center.y,
            radius * style.emblem_fraction,
        ));

        if style.background != "transparent" {
            svg.push_str(&format!(
                r#"<rect width="{width}" height="{height}" fill="{}"/>"#,
                style.background
            ));
        }

        // One sector per criterion: center -> arc start, the arc, back to center
        for (criterion, arc) in Criterion::ALL.iter().zip(&arcs) {
            let fill = self.ramp.color_continuous(breakdown.ratio(*criterion));
            let large_arc = if arc.is_large_arc() { 1 } else { 0 };
            svg.push_str(&format!(
                r#"<path d="M {:.2} {:.2} L {:.2} {:.2} A {radius:.2} {radius:.2} 0 {large_arc} 1 {:.2} {:.2} Z" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                center.x,
                center.y,
                arc.start_point.x,
                arc.start_point.y,
                arc.end_point.x,
                arc.end_point.y,
                fill.to_hex_string(),
                style.stroke_color,
                style.stroke_width,
            ));
        }

        if style.show_icons {
            for (criterion, arc) in Criterion::ALL.iter().zip(&arcs) {
                let pos = point_at(center, radius * style.icon_offset, arc.mid_angle());
                let icon_r = radius * 0.055;
                let fill = self.ramp.color_continuous(breakdown.ratio(*criterion));
                svg.push_str(&format!(
                    r##"<circle cx="{:.1}" cy="{:.1}" r="{icon_r:.1}" fill="#FFFFFF" stroke="{}" stroke-width="1.2"/>"##,
                    pos.x,
                    pos.y,
                    fill.to_hex_string(),
                ));
                svg.push_str(&format!(
                    r##"<text x="{:.1}" y="{:.1}" font-family="{}" font-size="{:.1}" fill="#333333" text-anchor="middle" dominant-baseline="central">{}</text>"##,
                    pos.x,
                    pos.y,
                    style.font_family,
                    icon_r * 1.1,
                    criterion.glyph(),
                ));
            }
        }

        // Emblem last so it overlays the slice tips at the center
        if style.show_emblem {
            let emblem_r = radius * style.emblem_fraction;
            svg.push_str(&format!(
                r##"<g clip-path="url(#emblemClip)"><circle cx="{:.1}" cy="{:.1}" r="{emblem_r:.1}" fill="#FFFFFF"/><circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="none" stroke="{}" stroke-width="{:.1}"/><text x="{:.1}" y="{:.1}" font-family="{}" font-size="{:.1}" font-weight="bold" fill="#2F4F2F" text-anchor="middle" dominant-baseline="central">GACS</text></g>"##,
                center.x,
                center.y,
                center.x,
                center.y,
                emblem_r * 0.9,
                indicator.base.to_hex_string(),
                emblem_r * 0.12,
                center.x,
                center.y,
                style.font_family,
                emblem_r * 0.5,
            ));
        }

        if style.show_indicator {
            let ind_r = radius * 0.18;
            let ind = Point2D::new(width - ind_r * 1.6, ind_r * 1.6);
            svg.push_str(&self.indicator_disc_svg(ind, ind_r));
        }

        svg.push_str("</svg>");

        RenderedChart {
            svg,
            width,
            height,
            total: breakdown.total,
            total_max: breakdown.total_max,
            indicator,
        }
    }

    /// The glossy indicator disc as an SVG fragment
    ///
    /// Relies on the `indicatorShine` gradient defined by [`render`];
    /// exposed so the export overlay can repaint the disc at its own scale.
    ///
    /// [`render`]: ChartRenderer::render
    pub(crate) fn indicator_disc_svg(&self, center: Point2D, radius: f64) -> String {
        format!(
            r##"<circle cx="{:.1}" cy="{:.1}" r="{radius:.1}" fill="url(#indicatorShine)" stroke="#00000033" stroke-width="0.8"/>"##,
            center.x, center.y,
        )
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }
}

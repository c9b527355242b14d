//! Print-resolution export of a rendered chart
//!
//! Re-rasterizes the rendered SVG surface at an integer scale factor above
//! native resolution, composites a white background with a "Total Score: N"
//! caption and a second copy of the aggregate indicator disc beneath the
//! chart, and encodes the result as PNG, JPEG, or a single-page PDF
//! embedding the raster at high DPI.
//!
//! Output is always encoded fully into a memory buffer first and written in
//! one step, so a failed export never leaves a partial file behind.
//!
//! # Example
//!
//! ```rust,no_run
//! use gacs::{ExportFormat, GacsChart, SelectionState};
//! use gacs::rubric::Criterion;
//!
//! let mut selection = SelectionState::new();
//! for criterion in Criterion::ALL {
//!     selection.select(criterion, 0)?;
//! }
//!
//! let mut chart = GacsChart::new();
//! chart.score_and_render(&selection, 600.0, 600.0)?;
//! chart.export(ExportFormat::Png, "chart.png")?;
//! # Ok::<(), gacs::GacsError>(())
//! ```

use std::path::Path;

use image::ImageEncoder;
use resvg::{tiny_skia, usvg};
use tracing::{debug, info};

use crate::chart::{ChartRenderer, ChartStyle, RenderedChart};
use crate::error::{GacsError, Result};
use crate::score::ScoringEngine;
use crate::selection::SelectionState;

/// Output encodings supported by the exporter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExportFormat {
    Png,
    Jpeg,
    /// Single-page PDF embedding the raster at the configured DPI
    Pdf,
}

impl ExportFormat {
    /// Conventional file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Height of the caption band appended beneath the chart, in chart units
const CAPTION_BAND: f64 = 90.0;

/// Re-rasterizes and encodes rendered charts
#[derive(Debug, Clone)]
pub struct Exporter {
    /// Integer rasterization scale above native resolution, at least 2
    pub scale: u32,
    /// JPEG quality (also used for the raster embedded in PDFs)
    pub jpeg_quality: u8,
    /// Pixel density the PDF page geometry is computed against
    pub pdf_dpi: f64,
    /// PDF margin per side as a fraction of the raster size
    pub margin_fraction: f64,
}

impl Default for Exporter {
    fn default() -> Self {
        Self {
            scale: 2,
            jpeg_quality: 95,
            pdf_dpi: 288.0,
            margin_fraction: 0.10,
        }
    }
}

impl Exporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode the chart into a memory buffer
    pub fn export_to_vec(&self, chart: &RenderedChart, format: ExportFormat) -> Result<Vec<u8>> {
        let scale = self.scale.max(2);
        let (svg, width, height) = self.compose_overlay(chart);
        let pixmap = rasterize(&svg, width, height, scale)?;
        debug!(
            width = pixmap.width(),
            height = pixmap.height(),
            ?format,
            "chart rasterized"
        );

        let rgb = pixmap_to_rgb(&pixmap);
        match format {
            ExportFormat::Png => encode_png(&rgb, pixmap.width(), pixmap.height()),
            ExportFormat::Jpeg => {
                encode_jpeg(&rgb, pixmap.width(), pixmap.height(), self.jpeg_quality)
            }
            ExportFormat::Pdf => {
                let jpeg = encode_jpeg(&rgb, pixmap.width(), pixmap.height(), self.jpeg_quality)?;
                self.build_pdf(&jpeg, pixmap.width(), pixmap.height())
            }
        }
    }

    /// Encode the chart and write exactly one file
    pub fn export(
        &self,
        chart: &RenderedChart,
        format: ExportFormat,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let bytes = self.export_to_vec(chart, format)?;
        std::fs::write(path.as_ref(), &bytes)?;
        info!(path = %path.as_ref().display(), bytes = bytes.len(), "chart exported");
        Ok(())
    }

    /// Conventional export filename: `GACS_TotalScore_<total>_<timestamp>.<ext>`
    pub fn suggested_filename(&self, total: u32, format: ExportFormat) -> String {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        format!(
            "GACS_TotalScore_{total}_{timestamp}.{}",
            format.extension()
        )
    }

    /// White backdrop + chart + caption + a second indicator disc
    fn compose_overlay(&self, chart: &RenderedChart) -> (String, f64, f64) {
        let width = chart.width;
        let height = chart.height + CAPTION_BAND;
        let caption_y = chart.height + CAPTION_BAND * 0.55;
        let disc_r = CAPTION_BAND * 0.30;

        // Strip the chart's own <svg> envelope and embed its content so the
        // overlay shares its defs (the indicator gradient in particular)
        let chart_prefix = format!(
            r#"<svg viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg">"#,
            chart.width, chart.height
        );
        let inner = chart
            .svg
            .strip_prefix(&chart_prefix)
            .unwrap_or(&chart.svg)
            .strip_suffix("</svg>")
            .unwrap_or(&chart.svg);

        let svg = format!(
            concat!(
                r#"<svg viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#,
                r##"<rect width="{w}" height="{h}" fill="#FFFFFF"/>"##,
                "{inner}",
                r##"<circle cx="{disc_x:.1}" cy="{caption_y:.1}" r="{disc_r:.1}" fill="url(#indicatorShine)" stroke="#00000033" stroke-width="0.8"/>"##,
                r##"<text x="{text_x:.1}" y="{caption_y:.1}" font-family="sans-serif" font-size="{font:.1}" font-weight="bold" fill="#1E293B" text-anchor="middle" dominant-baseline="central">Total Score: {total}</text>"##,
                "</svg>"
            ),
            w = width,
            h = height,
            inner = inner,
            disc_x = width / 2.0 - CAPTION_BAND * 1.6,
            caption_y = caption_y,
            disc_r = disc_r,
            text_x = width / 2.0 + disc_r,
            font = CAPTION_BAND * 0.38,
            total = chart.total,
        );
        (svg, width, height)
    }

    /// Single-page PDF with the JPEG raster centered inside the margins
    fn build_pdf(&self, jpeg: &[u8], px_width: u32, px_height: u32) -> Result<Vec<u8>> {
        use lopdf::content::{Content, Operation};
        use lopdf::{dictionary, Document, Object, Stream};

        let points_per_px = 72.0 / self.pdf_dpi;
        let img_w = f64::from(px_width) * points_per_px;
        let img_h = f64::from(px_height) * points_per_px;
        let margin_x = img_w * self.margin_fraction;
        let margin_y = img_h * self.margin_fraction;
        let page_w = img_w + 2.0 * margin_x;
        let page_h = img_h + 2.0 * margin_y;

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let image_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(px_width),
                "Height" => i64::from(px_height),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            },
            jpeg.to_vec(),
        ));

        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        Object::Real(img_w as f32),
                        Object::Real(0.0),
                        Object::Real(0.0),
                        Object::Real(img_h as f32),
                        Object::Real(margin_x as f32),
                        Object::Real(margin_y as f32),
                    ],
                ),
                Operation::new("Do", vec!["Im0".into()]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let resources_id = doc.add_object(dictionary! {
            "XObject" => dictionary! { "Im0" => image_id },
        });

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Real(0.0),
                Object::Real(0.0),
                Object::Real(page_w as f32),
                Object::Real(page_h as f32),
            ],
        });

        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;
        Ok(buffer)
    }
}

/// Rasterize an SVG surface at an integer scale above its native size
fn rasterize(svg: &str, width: f64, height: f64, scale: u32) -> Result<tiny_skia::Pixmap> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree =
        usvg::Tree::from_str(svg, &options).map_err(|e| GacsError::Raster(e.to_string()))?;

    let px_width = (width * f64::from(scale)).ceil() as u32;
    let px_height = (height * f64::from(scale)).ceil() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(px_width, px_height)
        .ok_or_else(|| GacsError::Raster("pixmap allocation failed".to_string()))?;

    let transform = tiny_skia::Transform::from_scale(scale as f32, scale as f32);
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Ok(pixmap)
}

/// Flatten premultiplied RGBA pixels onto a white background
fn pixmap_to_rgb(pixmap: &tiny_skia::Pixmap) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(pixmap.pixels().len() * 3);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        let a = u16::from(c.alpha());
        let blend = |channel: u8| ((u16::from(channel) * a + 255 * (255 - a)) / 255) as u8;
        rgb.push(blend(c.red()));
        rgb.push(blend(c.green()));
        rgb.push(blend(c.blue()));
    }
    rgb
}

fn encode_png(rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    image::codecs::png::PngEncoder::new(&mut buffer).write_image(
        rgb,
        width,
        height,
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(buffer)
}

fn encode_jpeg(rgb: &[u8], width: u32, height: u32, quality: u8) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality).write_image(
        rgb,
        width,
        height,
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(buffer)
}

/// One assessment's score → chart → export lifecycle
///
/// Owns the rendered surface so exporting before any render is a reportable
/// error rather than a blank file.
#[derive(Debug, Clone, Default)]
pub struct GacsChart {
    engine: ScoringEngine,
    renderer: ChartRenderer,
    exporter: Exporter,
    rendered: Option<RenderedChart>,
}

impl GacsChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: ChartStyle) -> Self {
        Self {
            renderer: ChartRenderer::new(style),
            ..Self::default()
        }
    }

    /// Score a complete selection and redraw the chart from it
    pub fn score_and_render(
        &mut self,
        selection: &SelectionState,
        width: f64,
        height: f64,
    ) -> Result<&RenderedChart> {
        let breakdown = self.engine.score(selection)?;
        Ok(self
            .rendered
            .insert(self.renderer.render(&breakdown, width, height)))
    }

    /// Redraw from a possibly incomplete selection (unset counts as 0)
    pub fn preview_render(
        &mut self,
        selection: &SelectionState,
        width: f64,
        height: f64,
    ) -> &RenderedChart {
        let breakdown = self.engine.preview(selection);
        self.rendered
            .insert(self.renderer.render(&breakdown, width, height))
    }

    /// The last rendered surface, if any
    pub fn rendered(&self) -> Option<&RenderedChart> {
        self.rendered.as_ref()
    }

    /// Export the last rendered chart to a file
    pub fn export(&self, format: ExportFormat, path: impl AsRef<Path>) -> Result<()> {
        let chart = self.rendered.as_ref().ok_or(GacsError::NothingRendered)?;
        self.exporter.export(chart, format, path)
    }

    /// Export the last rendered chart into a memory buffer
    pub fn export_to_vec(&self, format: ExportFormat) -> Result<Vec<u8>> {
        let chart = self.rendered.as_ref().ok_or(GacsError::NothingRendered)?;
        self.exporter.export_to_vec(chart, format)
    }

    /// Conventional filename for the last rendered chart
    pub fn suggested_filename(&self, format: ExportFormat) -> Result<String> {
        let chart = self.rendered.as_ref().ok_or(GacsError::NothingRendered)?;
        Ok(self.exporter.suggested_filename(chart.total, format))
    }
}

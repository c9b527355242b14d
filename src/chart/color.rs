//! Ratio-to-color mapping along the green→yellow→red ramp
//!
//! One shared stop list drives both slice fills and the aggregate score
//! indicator. Two lookups are provided: a continuous linear interpolation
//! (used for slice fills) and a discrete bucket lookup that returns a stop
//! verbatim (used for the stepped indicator shading). Ratio 1.0 is best and
//! maps to the first, greenest stop; 0.0 maps to the last, reddest.

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to CSS rgb() string
    pub fn to_rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Convert to hex string (e.g., "#FF5500")
    pub fn to_hex_string(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Lighten the color by a factor (0.0 = no change, 1.0 = white)
    pub fn lighten(&self, factor: f64) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        Self {
            r: (self.r as f64 + (255.0 - self.r as f64) * factor) as u8,
            g: (self.g as f64 + (255.0 - self.g as f64) * factor) as u8,
            b: (self.b as f64 + (255.0 - self.b as f64) * factor) as u8,
        }
    }

    /// Darken the color by a factor (0.0 = no change, 1.0 = black)
    pub fn darken(&self, factor: f64) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        Self {
            r: (self.r as f64 * (1.0 - factor)) as u8,
            g: (self.g as f64 * (1.0 - factor)) as u8,
            b: (self.b as f64 * (1.0 - factor)) as u8,
        }
    }

    fn lerp(a: Color, b: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: (a.r as f64 + (b.r as f64 - a.r as f64) * t) as u8,
            g: (a.g as f64 + (b.g as f64 - a.g as f64) * t) as u8,
            b: (a.b as f64 + (b.b as f64 - a.b as f64) * t) as u8,
        }
    }
}

/// Reference stops, green first, red last
///
/// Process-wide constants; not configurable at runtime.
const RAMP_STOPS: [Color; 5] = [
    Color::new(0, 200, 0),    // green
    Color::new(128, 228, 0),  // yellow-green
    Color::new(255, 255, 0),  // yellow
    Color::new(255, 140, 0),  // orange
    Color::new(255, 0, 0),    // red
];

/// Shades for the glossy aggregate indicator sphere
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorShades {
    /// Ramp bucket color for the ratio
    pub base: Color,
    /// Lightened shade for the specular highlight
    pub highlight: Color,
    /// Darkened shade for the sphere edge
    pub shadow: Color,
}

/// Maps performance ratios to ramp colors
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorRamp;

impl ColorRamp {
    const HIGHLIGHT_LIGHTEN: f64 = 0.55;
    const SHADOW_DARKEN: f64 = 0.35;

    pub fn new() -> Self {
        Self
    }

    /// Number of reference stops
    pub fn stop_count(&self) -> usize {
        RAMP_STOPS.len()
    }

    /// Nearest-bucket lookup; returns a reference stop verbatim
    ///
    /// Ratio is clamped to [0, 1] before lookup; 1.0 maps to the first
    /// (greenest) stop, 0.0 to the last (reddest).
    pub fn color_for(&self, ratio: f64) -> Color {
        RAMP_STOPS[self.bucket_index(ratio)]
    }

    /// Linear interpolation between adjacent stops
    pub fn color_continuous(&self, ratio: f64) -> Color {
        let ratio = ratio.clamp(0.0, 1.0);
        let position = (1.0 - ratio) * (RAMP_STOPS.len() - 1) as f64;
        let lower = (position.floor() as usize).min(RAMP_STOPS.len() - 1);
        let upper = (lower + 1).min(RAMP_STOPS.len() - 1);
        Color::lerp(RAMP_STOPS[lower], RAMP_STOPS[upper], position - lower as f64)
    }

    /// Bucket index for a ratio, 0 = greenest stop
    pub fn bucket_index(&self, ratio: f64) -> usize {
        let ratio = ratio.clamp(0.0, 1.0);
        let index = ((1.0 - ratio) * (RAMP_STOPS.len() - 1) as f64).round() as usize;
        index.min(RAMP_STOPS.len() - 1)
    }

    /// Highlight/base/shadow shades for the glossy indicator disc
    pub fn indicator_shades(&self, ratio: f64) -> IndicatorShades {
        let base = self.color_for(ratio);
        IndicatorShades {
            base,
            highlight: base.lighten(Self::HIGHLIGHT_LIGHTEN),
            shadow: base.darken(Self::SHADOW_DARKEN),
        }
    }
}

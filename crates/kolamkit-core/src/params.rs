//! Generation parameters and style normalization.
//!
//! The parameter normalizer validates caller-supplied knobs, clamps
//! the 0-100 controls, and resolves region/style into an immutable
//! [`EffectiveStyle`]. Unknown region or style strings are never an
//! error; they resolve silently to the documented defaults.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParameterError;

/// Regional kolam tradition, each with its own base drawing constants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Region {
    /// The default tradition; also the fallback for unknown names.
    #[default]
    TamilNadu,
    Karnataka,
    AndhraPradesh,
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

// Unknown names resolve to the default rather than failing; the
// boundary contract treats region as a hint, not an enum.
impl<'de> Deserialize<'de> for Region {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Region::from_name(&name))
    }
}

/// Per-region drawing constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionStyle {
    /// Base magnitude for curve control-point jitter, in world units.
    pub curve_offset_base: f64,
    /// Dot radius in output pixels.
    pub dot_size: f64,
    /// Base stroke width in output pixels.
    pub line_width_base: f64,
}

impl Region {
    /// Resolve a region name, falling back to Tamil Nadu for
    /// anything unrecognized.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Karnataka" => Region::Karnataka,
            "Andhra Pradesh" => Region::AndhraPradesh,
            _ => Region::TamilNadu,
        }
    }

    /// The display name used at the service boundary.
    pub fn name(self) -> &'static str {
        match self {
            Region::TamilNadu => "Tamil Nadu",
            Region::Karnataka => "Karnataka",
            Region::AndhraPradesh => "Andhra Pradesh",
        }
    }

    /// Fixed drawing constants for this region.
    pub fn style_constants(self) -> RegionStyle {
        match self {
            Region::TamilNadu => RegionStyle {
                curve_offset_base: 0.25,
                dot_size: 5.0,
                line_width_base: 1.5,
            },
            Region::Karnataka => RegionStyle {
                curve_offset_base: 0.15,
                dot_size: 4.0,
                line_width_base: 1.3,
            },
            Region::AndhraPradesh => RegionStyle {
                curve_offset_base: 0.20,
                dot_size: 5.0,
                line_width_base: 1.4,
            },
        }
    }
}

/// Drawing style variant. Applied as a multiplier after the base
/// derivation; Pulli (and anything unrecognized) is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    #[default]
    Pulli,
    Freehand,
    Rangoli,
    Symmetry,
}

impl Style {
    /// Resolve a style name case-insensitively, falling back to Pulli.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "freehand" => Style::Freehand,
            "rangoli" => Style::Rangoli,
            "symmetry" => Style::Symmetry,
            _ => Style::Pulli,
        }
    }

    /// The display name used at the service boundary.
    pub fn name(self) -> &'static str {
        match self {
            Style::Pulli => "Pulli",
            Style::Freehand => "Freehand",
            Style::Rangoli => "Rangoli",
            Style::Symmetry => "Symmetry",
        }
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Style::from_name(&name))
    }
}

fn default_color() -> i32 {
    50
}

fn default_size() -> i32 {
    32
}

fn default_complexity() -> i32 {
    75
}

/// A single generation request as received from the service boundary,
/// already parsed and typed. `color`, `size` and `complexity` are
/// semantically 0-100; out-of-range values are clamped, not rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Grid radius-index count (rows). Must be positive.
    pub m: i32,
    /// Angular division count (columns). Must be positive.
    pub n: i32,
    #[serde(default)]
    pub region: Region,
    #[serde(default)]
    pub style: Style,
    /// Grayscale intensity of the curve strokes, 0 (black) to 100.
    #[serde(default = "default_color")]
    pub color: i32,
    /// Stroke width scaling, 0-100.
    #[serde(default = "default_size")]
    pub size: i32,
    /// Curve randomness scaling, 0-100.
    #[serde(default = "default_complexity")]
    pub complexity: i32,
}

impl GenerationRequest {
    /// Create a request with the documented defaults for every knob.
    pub fn new(m: i32, n: i32) -> Self {
        Self {
            m,
            n,
            region: Region::default(),
            style: Style::default(),
            color: default_color(),
            size: default_size(),
            complexity: default_complexity(),
        }
    }
}

/// The resolved drawing style for one generation call. Immutable
/// once derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectiveStyle {
    /// Grayscale stroke color as a `#rrggbb` string.
    pub line_color: String,
    /// Stroke width in output pixels.
    pub line_width: f64,
    /// Control-point jitter magnitude in world units.
    pub curve_offset: f64,
    /// Dot radius in output pixels.
    pub dot_size: f64,
}

impl EffectiveStyle {
    /// Validate the request and derive the effective style.
    ///
    /// Fails with [`ParameterError::NonPositiveDimensions`] when `m`
    /// or `n` is not positive; this is the only validation error the
    /// pipeline can produce, and it fires before any geometry work.
    pub fn derive(req: &GenerationRequest) -> Result<Self, ParameterError> {
        if req.m <= 0 || req.n <= 0 {
            return Err(ParameterError::NonPositiveDimensions { m: req.m, n: req.n });
        }

        let color = req.color.clamp(0, 100);
        let size = req.size.clamp(0, 100);
        let complexity = req.complexity.clamp(0, 100);

        // 0 -> black, 100 -> light gray
        let shade = (255.0 * f64::from(color) / 100.0).round() as u8;
        let line_color = format!("#{shade:02x}{shade:02x}{shade:02x}");

        let base = req.region.style_constants();
        let mut line_width = base.line_width_base * (0.5 + f64::from(size) / 50.0);
        let mut curve_offset = base.curve_offset_base * (0.3 + f64::from(complexity) / 70.0);

        match req.style {
            Style::Freehand => curve_offset *= 1.4,
            Style::Rangoli => line_width *= 1.2,
            Style::Symmetry => curve_offset *= 0.8,
            Style::Pulli => {}
        }

        Ok(Self {
            line_color,
            line_width,
            curve_offset,
            dot_size: base.dot_size,
        })
    }
}

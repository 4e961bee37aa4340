//! Render configuration.
//!
//! Canvas defaults live here rather than in the encoders so callers
//! embedding the generator can size the output without touching the
//! drawing code.

use serde::{Deserialize, Serialize};

/// Output canvas settings shared by both encoders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Side length of the square canvas in pixels.
    pub canvas_px: u32,
    /// Blank border kept around the fitted content, in pixels.
    pub margin_px: f64,
    /// Fill color for lattice dots.
    pub dot_color: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas_px: 960,
            margin_px: 40.0,
            dot_color: "#000000".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas_is_square_with_margin() {
        let config = RenderConfig::default();
        assert_eq!(config.canvas_px, 960);
        assert!(config.margin_px > 0.0);
        assert_eq!(config.dot_color, "#000000");
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = RenderConfig {
            canvas_px: 480,
            margin_px: 16.0,
            dot_color: "#111111".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: RenderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}

//! World-to-pixel transformation for the output canvas.
//!
//! Unlike an interactive viewport there is no zoom or pan state: the
//! transform is fitted once per generation so the scene's bounding
//! box fills the square canvas inside a fixed margin, with the Y axis
//! flipped (screen Y grows downward).

use crate::scene::Bounds;

/// A fitted transform from world coordinates to canvas pixels.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    scale: f64,
    center_x: f64,
    center_y: f64,
    half_side: f64,
}

impl Viewport {
    /// Fit `bounds` into a `side` x `side` canvas with `margin`
    /// pixels of padding on every edge. Degenerate content (a single
    /// dot) maps to the canvas center.
    pub fn fit(bounds: Bounds, side: u32, margin: f64) -> Self {
        let (min_x, min_y, max_x, max_y) = bounds;
        let extent = (max_x - min_x).max(max_y - min_y).max(1e-9);
        let usable = (f64::from(side) - 2.0 * margin).max(1.0);
        Self {
            scale: usable / extent,
            center_x: (min_x + max_x) / 2.0,
            center_y: (min_y + max_y) / 2.0,
            half_side: f64::from(side) / 2.0,
        }
    }

    /// The uniform world-to-pixel scale factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Converts world coordinates to canvas pixel coordinates.
    ///
    /// ```text
    /// pixel_x = (world_x - content_center_x) * scale + side/2
    /// pixel_y = side/2 - (world_y - content_center_y) * scale   // Flip Y-axis
    /// ```
    pub fn world_to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.center_x) * self.scale + self.half_side,
            self.half_side - (y - self.center_y) * self.scale,
        )
    }
}

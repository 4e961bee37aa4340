//! Immutable scene description consumed by both encoders.
//!
//! Geometry is resolved once: the lattice dots stay as points and the
//! curve edges become a single lyon [`Path`] of quadratic segments.
//! Raster and vector encoders iterate the same path events, so the
//! two outputs depict the same geometry by construction.

use lyon::math::point;
use lyon::path::Path;

use kolamkit_core::{CurveEdge, DotLattice, EffectiveStyle, Point};

/// World-space bounding box as (min_x, min_y, max_x, max_y).
pub type Bounds = (f64, f64, f64, f64);

/// One generation call's drawable content: dots, the resolved curve
/// path, the effective style, and the content bounding box.
#[derive(Debug, Clone)]
pub struct PatternScene {
    dots: Vec<Point>,
    path: Path,
    style: EffectiveStyle,
    bounds: Bounds,
}

impl PatternScene {
    /// Assemble the scene from traced geometry. The bounding box
    /// covers dots, edge endpoints, and control points so jittered
    /// curves never clip at the canvas edge.
    pub fn assemble(lattice: &DotLattice, edges: &[CurveEdge], style: EffectiveStyle) -> Self {
        let mut builder = Path::builder();
        for edge in edges {
            builder.begin(point(edge.start.x as f32, edge.start.y as f32));
            builder.quadratic_bezier_to(
                point(edge.control.x as f32, edge.control.y as f32),
                point(edge.end.x as f32, edge.end.y as f32),
            );
            builder.end(false);
        }
        let path = builder.build();

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        let mut grow = |p: &Point| {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        };
        for dot in lattice.points() {
            grow(dot);
        }
        for edge in edges {
            grow(&edge.start);
            grow(&edge.control);
            grow(&edge.end);
        }
        if min_x > max_x {
            // Empty content; pin the box to the origin.
            min_x = 0.0;
            min_y = 0.0;
            max_x = 0.0;
            max_y = 0.0;
        }

        Self {
            dots: lattice.points().to_vec(),
            path,
            style,
            bounds: (min_x, min_y, max_x, max_y),
        }
    }

    /// Lattice dots in row-major order.
    pub fn dots(&self) -> &[Point] {
        &self.dots
    }

    /// The curve geometry as one lyon path of quadratic segments.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The resolved drawing style.
    pub fn style(&self) -> &EffectiveStyle {
        &self.style
    }

    /// World-space content bounding box.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

//! Randomized curve tracing over the dot lattice.
//!
//! Every cell is joined to its toroidal successor by one quadratic
//! curve whose control point is the jittered midpoint of the two
//! endpoints. The randomness source is injected per call; nothing
//! here touches a process-wide generator, so concurrent generations
//! cannot interfere and tests can fix the seed.

use rand::Rng;

use crate::lattice::{DotLattice, Point};

/// One quadratic curve between two lattice dots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveEdge {
    pub start: Point,
    pub control: Point,
    pub end: Point,
}

impl CurveEdge {
    /// The unperturbed midpoint of the edge's endpoints.
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(&self.end)
    }
}

/// Trace one edge per lattice cell, in row-major order.
///
/// Cell (i, j) connects to cell ((i+1) mod m, (j+1) mod n); small
/// lattices may produce geometrically coincident edges, which is
/// expected and not deduplicated. The control point of each edge is
/// the midpoint perturbed independently on x and y by a value drawn
/// uniformly from [-curve_offset, curve_offset].
pub fn trace_curves(lattice: &DotLattice, curve_offset: f64, rng: &mut impl Rng) -> Vec<CurveEdge> {
    let m = lattice.rows();
    let n = lattice.cols();
    let mut edges = Vec::with_capacity(m * n);

    for i in 0..m {
        for j in 0..n {
            let start = lattice.point(i, j);
            let end = lattice.point((i + 1) % m, (j + 1) % n);
            let mid = start.midpoint(&end);
            let control = if curve_offset > 0.0 {
                Point::new(
                    mid.x + rng.gen_range(-curve_offset..=curve_offset),
                    mid.y + rng.gen_range(-curve_offset..=curve_offset),
                )
            } else {
                mid
            };
            edges.push(CurveEdge {
                start,
                control,
                end,
            });
        }
    }

    edges
}

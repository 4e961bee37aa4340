//! Deterministic dot lattice construction.
//!
//! The lattice places m x n dots in polar form: each row has a fixed
//! radius drawn from a modular sequence of (m, n), each column a fixed
//! angle evenly spaced over a full turn. Construction involves no
//! randomness; identical dimensions always produce bit-identical
//! coordinates.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A point in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Midpoint between this point and another.
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// The m x n grid of dots in Cartesian coordinates, row-major.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DotLattice {
    rows: usize,
    cols: usize,
    points: Vec<Point>,
}

/// Row radius sequence for an m x n lattice.
///
/// `seq[0] = m`; for k >= 1, `seq[k] = (k * n) mod m`, with a zero
/// remainder substituted by `m`. Radii therefore lie in [1, m]; no
/// row ever collapses onto the origin. The zero-to-m substitution
/// decides which rows reach the outer ring and is load-bearing for
/// the pattern's visual density.
pub fn radius_sequence(m: usize, n: usize) -> Vec<usize> {
    (0..m)
        .map(|k| {
            if k == 0 {
                m
            } else {
                let r = (k * n) % m;
                if r == 0 {
                    m
                } else {
                    r
                }
            }
        })
        .collect()
}

impl DotLattice {
    /// Build the lattice for validated positive dimensions.
    ///
    /// `point(i, j) = (r_i * cos(theta_j), r_i * sin(theta_j))` with
    /// `r_i` from [`radius_sequence`] and `theta_j = 2*pi*j/n`.
    pub fn build(rows: usize, cols: usize) -> Self {
        let radii = radius_sequence(rows, cols);
        let mut points = Vec::with_capacity(rows * cols);
        for &r in &radii {
            let radius = r as f64;
            for j in 0..cols {
                let theta = 2.0 * PI * j as f64 / cols as f64;
                points.push(Point::new(radius * theta.cos(), radius * theta.sin()));
            }
        }
        Self { rows, cols, points }
    }

    /// Number of rows (m).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (n).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total dot count, always exactly m * n.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The dot at cell (i, j).
    pub fn point(&self, i: usize, j: usize) -> Point {
        self.points[i * self.cols + j]
    }

    /// All dots in row-major order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

//! Symmetry analysis of the pattern dimensions.
//!
//! A pure function of (m, n): no dependency on style, randomness, or
//! the rendering path. A non-coprime pair is not an error; it only
//! changes the reported flag and the wording of the description.

use serde::{Deserialize, Serialize};

/// Greatest common divisor by Euclid's algorithm.
pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Descriptive symmetry metadata reported alongside the rendered
/// pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymmetryInsights {
    /// Whether gcd(m, n) == 1.
    pub coprime: bool,
    /// n-fold rotational symmetry of the angle layout.
    pub rotational_order: i32,
    /// 2 when n is odd, 4 when n is even.
    pub reflection_axes: i32,
    /// Formatted sentence embedding the three values above.
    pub description: String,
}

impl SymmetryInsights {
    /// Analyze validated positive dimensions.
    pub fn analyze(m: i32, n: i32) -> Self {
        let coprime = gcd(m.unsigned_abs() as u64, n.unsigned_abs() as u64) == 1;
        let rotational_order = n;
        let reflection_axes = if n % 2 == 1 { 2 } else { 4 };
        let description = format!(
            "Kolam with rotational symmetry of order {} and approx {} reflection axes. m and n are{}coprime.",
            rotational_order,
            reflection_axes,
            if coprime { " " } else { " not " },
        );
        Self {
            coprime,
            rotational_order,
            reflection_axes,
            description,
        }
    }
}

//! # KolamKit Core
//!
//! Core types and geometry for the kolam pattern generator:
//!
//! 1. **params** - request validation, clamping, and style resolution
//! 2. **lattice** - the deterministic polar dot grid
//! 3. **tracer** - randomized quadratic curves with toroidal connectivity
//! 4. **symmetry** - descriptive symmetry metadata
//! 5. **error** - the shared error taxonomy
//!
//! Every generation call is a single synchronous, stateless
//! computation over its own inputs. The only injected dependency is
//! the randomness source consumed by the tracer.

pub mod error;
pub mod lattice;
pub mod params;
pub mod symmetry;
pub mod tracer;

pub use error::{Error, ParameterError, RenderError, Result};
pub use lattice::{radius_sequence, DotLattice, Point};
pub use params::{EffectiveStyle, GenerationRequest, Region, RegionStyle, Style};
pub use symmetry::{gcd, SymmetryInsights};
pub use tracer::{trace_curves, CurveEdge};

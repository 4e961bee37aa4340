//! # KolamKit
//!
//! A procedural kolam pattern generator. Two integers and a handful
//! of style knobs produce a symmetric dot lattice joined by
//! randomized quadratic curves, rendered to both a PNG (base64) and
//! an SVG document from one shared scene, with symmetry metadata
//! reported alongside.
//!
//! ## Architecture
//!
//! KolamKit is organized as a workspace with two member crates:
//!
//! 1. **kolamkit-core** - parameters, dot lattice, curve tracing,
//!    symmetry analysis, error taxonomy
//! 2. **kolamkit-render** - scene assembly, viewport fitting, the
//!    raster and vector encoders, the generation facade
//!
//! The root crate re-exports the public surface and provides logging
//! setup plus a small demo binary.

pub use kolamkit_core::{
    gcd, radius_sequence, trace_curves, CurveEdge, DotLattice, EffectiveStyle, Error,
    GenerationRequest, ParameterError, Point, Region, RegionStyle, RenderError, Result, Style,
    SymmetryInsights,
};

pub use kolamkit_render::{
    generate, generate_seeded, generate_with, GenerationResult, PatternScene, RenderConfig,
    Viewport,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output, RUST_LOG
/// environment variable support, and an INFO default level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}

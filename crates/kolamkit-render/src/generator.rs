//! The generation facade: normalize, build, trace, render, analyze.
//!
//! One synchronous pass per call. The randomness source is created or
//! injected per call and handed to the tracer; symmetry analysis has
//! no data dependency on the rendering path.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use kolamkit_core::{
    trace_curves, DotLattice, EffectiveStyle, GenerationRequest, Result, SymmetryInsights,
};

use crate::config::RenderConfig;
use crate::raster;
use crate::scene::PatternScene;
use crate::svg;

/// The boundary response for one generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    /// PNG bytes of the rendered pattern, base64-encoded.
    pub image_base64: String,
    /// The same pattern as an SVG document.
    pub svg: String,
    /// The resolved region name.
    pub region: String,
    /// Symmetry metadata for (m, n).
    pub insights: SymmetryInsights,
}

impl GenerationResult {
    /// Decode the base64 payload back into raw PNG bytes.
    pub fn image_bytes(&self) -> Result<Vec<u8>> {
        use base64::engine::general_purpose::STANDARD;
        use base64::Engine as _;
        STANDARD
            .decode(&self.image_base64)
            .map_err(|e| kolamkit_core::Error::other(e.to_string()))
    }
}

/// Generate a pattern with a fresh entropy-seeded generator.
pub fn generate(req: &GenerationRequest) -> Result<GenerationResult> {
    generate_with(req, &RenderConfig::default(), &mut StdRng::from_entropy())
}

/// Generate a pattern reproducibly from an explicit seed.
pub fn generate_seeded(req: &GenerationRequest, seed: u64) -> Result<GenerationResult> {
    generate_with(req, &RenderConfig::default(), &mut StdRng::seed_from_u64(seed))
}

/// Generate with full control over render configuration and the
/// randomness source.
pub fn generate_with(
    req: &GenerationRequest,
    config: &RenderConfig,
    rng: &mut impl Rng,
) -> Result<GenerationResult> {
    // All validation happens here; everything downstream assumes
    // valid input.
    let style = EffectiveStyle::derive(req)?;
    let insights = SymmetryInsights::analyze(req.m, req.n);

    let lattice = DotLattice::build(req.m as usize, req.n as usize);
    let edges = trace_curves(&lattice, style.curve_offset, rng);
    debug!(
        m = req.m,
        n = req.n,
        region = req.region.name(),
        dots = lattice.len(),
        edges = edges.len(),
        "tracing complete"
    );

    let scene = PatternScene::assemble(&lattice, &edges, style);
    let image_base64 = raster::encode_png_base64(&scene, config)?;
    let svg = svg::encode_svg(&scene, config)?;

    Ok(GenerationResult {
        image_base64,
        svg,
        region: req.region.name().to_string(),
        insights,
    })
}

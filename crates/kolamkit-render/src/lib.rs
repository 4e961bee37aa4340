//! # KolamKit Render
//!
//! Scene assembly and output encoding for kolam patterns:
//!
//! 1. **scene** - immutable points + curves + style, resolved once
//! 2. **viewport** - world-to-pixel fitting for the square canvas
//! 3. **raster** - tiny-skia drawing, PNG encoding, base64 payload
//! 4. **svg** - the same geometry as a vector document
//! 5. **generator** - the end-to-end generation facade
//!
//! Both encoders consume the identical scene, so the raster and
//! vector outputs cannot drift apart. Drawing surfaces are call-local
//! and released on every exit path.

pub mod config;
pub mod generator;
pub mod raster;
pub mod scene;
pub mod svg;
pub mod viewport;

pub use config::RenderConfig;
pub use generator::{generate, generate_seeded, generate_with, GenerationResult};
pub use scene::{Bounds, PatternScene};
pub use viewport::Viewport;

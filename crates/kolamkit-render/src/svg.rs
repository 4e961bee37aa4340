//! Vector encoder: scene to an SVG document string.
//!
//! Emits the same geometry as the raster encoder - one `<circle>` per
//! lattice dot and one quadratic `Q` segment per curve edge - fitted
//! through the same viewport, so the two outputs always agree.

use std::fmt::Write as _;

use kolamkit_core::RenderError;

use crate::config::RenderConfig;
use crate::raster::parse_hex_color;
use crate::scene::PatternScene;
use crate::viewport::Viewport;

/// Render the scene as a standalone SVG document.
pub fn encode_svg(scene: &PatternScene, config: &RenderConfig) -> Result<String, RenderError> {
    // Validate colors up front so both encoders fail identically on a
    // malformed style.
    parse_hex_color(&scene.style().line_color)?;
    parse_hex_color(&config.dot_color)?;

    let side = config.canvas_px;
    let viewport = Viewport::fit(scene.bounds(), side, config.margin_px);

    let mut dots = String::new();
    for dot in scene.dots() {
        let (px, py) = viewport.world_to_pixel(dot.x, dot.y);
        let _ = writeln!(
            dots,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
            px,
            py,
            scene.style().dot_size,
            config.dot_color,
        );
    }

    let mut d = String::new();
    for event in scene.path().iter() {
        match event {
            lyon::path::Event::Begin { at } => {
                let (px, py) = viewport.world_to_pixel(at.x as f64, at.y as f64);
                let _ = write!(d, "M {px:.2} {py:.2} ");
            }
            lyon::path::Event::Line { to, .. } => {
                let (px, py) = viewport.world_to_pixel(to.x as f64, to.y as f64);
                let _ = write!(d, "L {px:.2} {py:.2} ");
            }
            lyon::path::Event::Quadratic { ctrl, to, .. } => {
                let (cx, cy) = viewport.world_to_pixel(ctrl.x as f64, ctrl.y as f64);
                let (px, py) = viewport.world_to_pixel(to.x as f64, to.y as f64);
                let _ = write!(d, "Q {cx:.2} {cy:.2} {px:.2} {py:.2} ");
            }
            lyon::path::Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => {
                let (c1x, c1y) = viewport.world_to_pixel(ctrl1.x as f64, ctrl1.y as f64);
                let (c2x, c2y) = viewport.world_to_pixel(ctrl2.x as f64, ctrl2.y as f64);
                let (px, py) = viewport.world_to_pixel(to.x as f64, to.y as f64);
                let _ = write!(
                    d,
                    "C {c1x:.2} {c1y:.2} {c2x:.2} {c2y:.2} {px:.2} {py:.2} "
                );
            }
            lyon::path::Event::End { close, .. } => {
                if close {
                    let _ = write!(d, "Z ");
                }
            }
        }
    }

    Ok(format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {side} {side}" width="{side}" height="{side}">
  <rect width="100%" height="100%" fill="white"/>
{dots}  <path d="{d}" fill="none" stroke="{stroke}" stroke-width="{width:.2}" stroke-linecap="round"/>
</svg>"#,
        side = side,
        dots = dots,
        d = d.trim_end(),
        stroke = scene.style().line_color,
        width = scene.style().line_width,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kolamkit_core::{trace_curves, DotLattice, EffectiveStyle, GenerationRequest};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scene_for(m: usize, n: usize) -> PatternScene {
        let lattice = DotLattice::build(m, n);
        let style = EffectiveStyle::derive(&GenerationRequest::new(m as i32, n as i32)).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let edges = trace_curves(&lattice, style.curve_offset, &mut rng);
        PatternScene::assemble(&lattice, &edges, style)
    }

    #[test]
    fn test_svg_contains_one_circle_per_dot() {
        let svg = encode_svg(&scene_for(3, 5), &RenderConfig::default()).unwrap();
        assert_eq!(svg.matches("<circle").count(), 15);
    }

    #[test]
    fn test_svg_contains_one_quadratic_per_edge() {
        let svg = encode_svg(&scene_for(4, 4), &RenderConfig::default()).unwrap();
        assert_eq!(svg.matches("Q ").count(), 16);
    }

    #[test]
    fn test_svg_document_shape() {
        let svg = encode_svg(&scene_for(2, 3), &RenderConfig::default()).unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"viewBox="0 0 960 960""#));
        assert!(svg.contains(r#"fill="white""#));
        assert!(svg.contains(r##"stroke="#808080""##));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}

//! Raster encoder: scene to PNG bytes, returned as base64 text.
//!
//! Uses tiny-skia for anti-aliased 2D drawing and the `image` crate
//! for PNG encoding. The pixmap is a call-local value; it is dropped
//! on every exit path, so concurrent generations never share a
//! surface.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{ImageFormat, Rgb, RgbImage};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use kolamkit_core::RenderError;

use crate::config::RenderConfig;
use crate::scene::PatternScene;
use crate::viewport::Viewport;

/// Parse a `#rrggbb` color string.
pub(crate) fn parse_hex_color(color: &str) -> Result<(u8, u8, u8), RenderError> {
    let invalid = || RenderError::InvalidColor {
        color: color.to_string(),
    };
    let hex = color.strip_prefix('#').ok_or_else(invalid)?;
    // Exactly six ASCII hex digits; this also keeps the slices below
    // on char boundaries and rejects signs that from_str_radix would
    // otherwise accept.
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
    Ok((r, g, b))
}

/// Render the scene to a PNG and encode it as base64 text.
pub fn encode_png_base64(
    scene: &PatternScene,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let side = config.canvas_px;
    let mut pixmap = Pixmap::new(side, side).ok_or(RenderError::SurfaceAllocation {
        width: side,
        height: side,
    })?;
    pixmap.fill(Color::from_rgba8(255, 255, 255, 255));

    let viewport = Viewport::fit(scene.bounds(), side, config.margin_px);

    // Dots
    let (dr, dg, db) = parse_hex_color(&config.dot_color)?;
    let mut dot_paint = Paint::default();
    dot_paint.set_color_rgba8(dr, dg, db, 255);
    dot_paint.anti_alias = true;
    for dot in scene.dots() {
        let (px, py) = viewport.world_to_pixel(dot.x, dot.y);
        if let Some(circle) =
            PathBuilder::from_circle(px as f32, py as f32, scene.style().dot_size as f32)
        {
            pixmap.fill_path(
                &circle,
                &dot_paint,
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    // Curves: convert the shared lyon path into pixel space.
    let mut pb = PathBuilder::new();
    for event in scene.path().iter() {
        match event {
            lyon::path::Event::Begin { at } => {
                let (px, py) = viewport.world_to_pixel(at.x as f64, at.y as f64);
                pb.move_to(px as f32, py as f32);
            }
            lyon::path::Event::Line { to, .. } => {
                let (px, py) = viewport.world_to_pixel(to.x as f64, to.y as f64);
                pb.line_to(px as f32, py as f32);
            }
            lyon::path::Event::Quadratic { ctrl, to, .. } => {
                let (cx, cy) = viewport.world_to_pixel(ctrl.x as f64, ctrl.y as f64);
                let (px, py) = viewport.world_to_pixel(to.x as f64, to.y as f64);
                pb.quad_to(cx as f32, cy as f32, px as f32, py as f32);
            }
            lyon::path::Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => {
                let (c1x, c1y) = viewport.world_to_pixel(ctrl1.x as f64, ctrl1.y as f64);
                let (c2x, c2y) = viewport.world_to_pixel(ctrl2.x as f64, ctrl2.y as f64);
                let (px, py) = viewport.world_to_pixel(to.x as f64, to.y as f64);
                pb.cubic_to(
                    c1x as f32, c1y as f32, c2x as f32, c2y as f32, px as f32, py as f32,
                );
            }
            lyon::path::Event::End { close, .. } => {
                if close {
                    pb.close();
                }
            }
        }
    }

    if let Some(path) = pb.finish() {
        let (r, g, b) = parse_hex_color(&scene.style().line_color)?;
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, 255);
        paint.anti_alias = true;
        let stroke = Stroke {
            width: scene.style().line_width as f32,
            ..Default::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    // Convert Pixmap to RgbImage and encode.
    let data = pixmap.data();
    let img = RgbImage::from_fn(side, side, |x, y| {
        let idx = ((y * side + x) * 4) as usize;
        Rgb([data[idx], data[idx + 1], data[idx + 2]])
    });

    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| RenderError::PngEncode {
            reason: e.to_string(),
        })?;

    Ok(STANDARD.encode(buf.into_inner()))
}

// End-to-end generation tests: scenario coverage for the full
// normalize -> lattice -> trace -> render pipeline and the symmetry
// analyzer running alongside it.

use kolamkit_core::{GenerationRequest, Region, Style};
use kolamkit_render::{generate_seeded, generate_with, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

#[test]
fn scenario_coprime_3x5() {
    let req = GenerationRequest::new(3, 5);
    let result = generate_seeded(&req, 7).unwrap();

    assert!(result.insights.coprime);
    assert_eq!(result.insights.rotational_order, 5);
    assert_eq!(result.insights.reflection_axes, 2);
    assert_eq!(result.region, "Tamil Nadu");

    // 15 dots and 15 quadratic curve segments in the vector output.
    assert_eq!(result.svg.matches("<circle").count(), 15);
    assert_eq!(result.svg.matches("Q ").count(), 15);
}

#[test]
fn scenario_non_coprime_4x4() {
    let req = GenerationRequest::new(4, 4);
    let result = generate_seeded(&req, 7).unwrap();

    assert!(!result.insights.coprime);
    assert_eq!(result.insights.rotational_order, 4);
    assert_eq!(result.insights.reflection_axes, 4);
    assert_eq!(result.svg.matches("<circle").count(), 16);
    assert_eq!(result.svg.matches("Q ").count(), 16);
}

#[test]
fn scenario_zero_m_is_a_client_error() {
    let req = GenerationRequest::new(0, 5);
    let err = generate_seeded(&req, 7).unwrap_err();
    assert!(err.is_client_error());
    assert_eq!(err.to_string(), "m and n must be positive integers");
}

#[test]
fn png_payload_decodes_to_the_configured_square() {
    let req = GenerationRequest::new(3, 5);
    let result = generate_seeded(&req, 3).unwrap();
    let bytes = result.image_bytes().unwrap();
    let img = image::load_from_memory(&bytes).unwrap();
    assert_eq!(img.width(), 960);
    assert_eq!(img.height(), 960);
}

#[test]
fn custom_canvas_size_is_honored_by_both_encoders() {
    let req = GenerationRequest::new(3, 4);
    let config = RenderConfig {
        canvas_px: 480,
        margin_px: 20.0,
        dot_color: "#000000".to_string(),
    };
    let mut rng = StdRng::seed_from_u64(21);
    let result = generate_with(&req, &config, &mut rng).unwrap();

    let img = image::load_from_memory(&result.image_bytes().unwrap()).unwrap();
    assert_eq!(img.width(), 480);
    assert!(result.svg.contains(r#"viewBox="0 0 480 480""#));
}

#[test]
fn non_ascii_dot_color_is_a_render_error_not_a_panic() {
    // The euro sign is three bytes, so "#€€" passes a naive byte
    // length check while slicing it would split a char.
    let config = RenderConfig {
        canvas_px: 240,
        margin_px: 10.0,
        dot_color: "#€€".to_string(),
    };
    let mut rng = StdRng::seed_from_u64(3);
    let err = generate_with(&GenerationRequest::new(3, 5), &config, &mut rng).unwrap_err();
    assert!(err.is_render_error());
    assert!(err.to_string().contains("€€"));
}

#[test]
fn outputs_round_trip_through_the_filesystem() {
    let dir = TempDir::new().unwrap();
    let result = generate_seeded(&GenerationRequest::new(4, 4), 13).unwrap();

    let png = dir.path().join("kolam.png");
    let svg = dir.path().join("kolam.svg");
    std::fs::write(&png, result.image_bytes().unwrap()).unwrap();
    std::fs::write(&svg, &result.svg).unwrap();

    assert!(png.metadata().unwrap().len() > 0);
    let written = std::fs::read_to_string(&svg).unwrap();
    assert!(written.contains("</svg>"));
}

#[test]
fn non_default_region_and_style_flow_through_to_the_result() {
    let mut req = GenerationRequest::new(3, 5);
    req.region = Region::Karnataka;
    req.style = Style::Rangoli;

    let result = generate_seeded(&req, 9).unwrap();
    assert_eq!(result.region, "Karnataka");
    assert!(result.insights.coprime);
    assert!(!result.svg.is_empty());
}

#[test]
fn identical_seeds_reproduce_both_outputs() {
    let req = GenerationRequest::new(5, 7);
    let a = generate_seeded(&req, 1234).unwrap();
    let b = generate_seeded(&req, 1234).unwrap();
    assert_eq!(a.image_base64, b.image_base64);
    assert_eq!(a.svg, b.svg);
    assert_eq!(a.insights, b.insights);
}

#[test]
fn differing_seeds_change_curves_but_not_structure() {
    let req = GenerationRequest::new(4, 6);
    let a = generate_seeded(&req, 1).unwrap();
    let b = generate_seeded(&req, 2).unwrap();

    // Same dot and edge counts, different jitter.
    assert_eq!(a.svg.matches("<circle").count(), 24);
    assert_eq!(b.svg.matches("<circle").count(), 24);
    assert_eq!(a.svg.matches("Q ").count(), 24);
    assert_eq!(b.svg.matches("Q ").count(), 24);
    assert_ne!(a.svg, b.svg);
}

#[test]
fn unknown_region_string_renders_like_tamil_nadu() {
    let parsed: GenerationRequest =
        serde_json::from_str(r#"{"m": 3, "n": 5, "region": "Mystery Land"}"#).unwrap();
    assert_eq!(parsed.region, Region::TamilNadu);

    let fallback = generate_seeded(&parsed, 55).unwrap();
    let explicit = generate_seeded(&GenerationRequest::new(3, 5), 55).unwrap();
    assert_eq!(fallback.svg, explicit.svg);
    assert_eq!(fallback.region, "Tamil Nadu");
}

#[test]
fn freehand_style_widens_the_jitter_band() {
    // Same seed, same knobs; only the style multiplier differs. The
    // freehand output must stay inside its own wider offset band and
    // differ from the pulli output.
    let mut pulli = GenerationRequest::new(3, 5);
    pulli.complexity = 100;
    let mut freehand = pulli.clone();
    freehand.style = Style::Freehand;

    let a = generate_seeded(&pulli, 77).unwrap();
    let b = generate_seeded(&freehand, 77).unwrap();
    assert_ne!(a.svg, b.svg);
}

#[test]
fn insights_do_not_depend_on_style_or_seed() {
    let mut req = GenerationRequest::new(6, 9);
    req.style = Style::Rangoli;
    req.complexity = 10;
    let a = generate_seeded(&req, 0).unwrap();

    let mut req2 = GenerationRequest::new(6, 9);
    req2.style = Style::Symmetry;
    req2.complexity = 90;
    let b = generate_seeded(&req2, 424242).unwrap();

    assert_eq!(a.insights, b.insights);
    assert!(!a.insights.coprime);
    assert_eq!(a.insights.rotational_order, 9);
    assert_eq!(a.insights.reflection_axes, 2);
}

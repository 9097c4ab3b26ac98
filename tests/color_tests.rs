// Host-side tests for CSS color parsing and background contrast resolution.

use pointer_fx::core::constants::*;
use pointer_fx::core::*;

/// Gray with the given HSL lightness percent.
fn gray(lightness_pct: f32) -> Rgba {
    let v = (lightness_pct / 100.0 * 255.0).round() as u8;
    Rgba::rgb(v, v, v)
}

#[test]
fn parses_comma_rgb_and_rgba() {
    assert_eq!(parse_css_color("rgb(12, 34, 56)"), Ok(Rgba::rgb(12, 34, 56)));
    let c = parse_css_color("rgba(255, 0, 10, 0.5)").unwrap();
    assert_eq!((c.r, c.g, c.b), (255, 0, 10));
    assert!((c.a - 0.5).abs() < 1e-6);
}

#[test]
fn parses_space_syntax_with_slash_alpha() {
    let c = parse_css_color("rgb(10 20 30 / 25%)").unwrap();
    assert_eq!((c.r, c.g, c.b), (10, 20, 30));
    assert!((c.a - 0.25).abs() < 1e-6);
}

#[test]
fn parses_hex_and_transparent() {
    assert_eq!(parse_css_color("#fff"), Ok(Rgba::rgb(255, 255, 255)));
    assert_eq!(parse_css_color("#1A2b3C"), Ok(Rgba::rgb(0x1a, 0x2b, 0x3c)));
    assert!(parse_css_color("transparent").unwrap().is_transparent());
    assert!(parse_css_color("rgba(0, 0, 0, 0)").unwrap().is_transparent());
}

#[test]
fn rejects_garbage() {
    assert_eq!(parse_css_color(""), Err(ColorParseError::Empty));
    assert!(matches!(
        parse_css_color("hsl(10, 20%, 30%)"),
        Err(ColorParseError::Unsupported(_))
    ));
    assert_eq!(
        parse_css_color("rgb(1, 2)"),
        Err(ColorParseError::ComponentCount(2))
    );
    assert!(matches!(
        parse_css_color("rgb(a, b, c)"),
        Err(ColorParseError::Component(_))
    ));
    assert!(parse_css_color("#12").is_err());
    assert!(parse_css_color("#zzzzzz").is_err());
}

#[test]
fn rgb_to_hsl_primaries() {
    let red = Rgba::rgb(255, 0, 0).to_hsl();
    assert!((red.hue - 0.0).abs() < 0.01);
    assert!((red.saturation - 100.0).abs() < 0.01);
    assert!((red.lightness - 50.0).abs() < 0.01);

    let green = Rgba::rgb(0, 255, 0).to_hsl();
    assert!((green.hue - 120.0).abs() < 0.01);

    let blue = Rgba::rgb(0, 0, 255).to_hsl();
    assert!((blue.hue - 240.0).abs() < 0.01);

    let g = gray(50.0).to_hsl();
    assert_eq!(g.saturation, 0.0);
    assert!((g.lightness - 50.0).abs() < 0.5);
}

#[test]
fn dark_background_maps_to_dark_contrast() {
    let c = contrast_for_background(Some(gray(10.0)));
    assert_eq!(c, Hsl::from_array(DARK_BG_HSL));
}

#[test]
fn dim_background_maps_to_dim_contrast() {
    let c = contrast_for_background(Some(gray(30.0)));
    assert_eq!(c, Hsl::from_array(DIM_BG_HSL));
}

#[test]
fn light_background_maps_to_light_contrast() {
    let c = contrast_for_background(Some(gray(85.0)));
    assert_eq!(c, Hsl::from_array(LIGHT_BG_HSL));
}

#[test]
fn midtone_background_gets_rotated_hue() {
    // Pure red sits at 50% lightness with hue 0
    let c = contrast_for_background(Some(Rgba::rgb(255, 0, 0)));
    assert!((c.hue - 180.0).abs() < 0.01);
    assert_eq!(c.saturation, MIDTONE_SATURATION);
    assert_eq!(c.lightness, MIDTONE_LIGHTNESS);

    // Blue (240) wraps around to 60
    let c = contrast_for_background(Some(Rgba::rgb(0, 0, 255)));
    assert!((c.hue - 60.0).abs() < 0.01);
}

#[test]
fn missing_or_transparent_background_uses_default() {
    assert_eq!(contrast_for_background(None), Hsl::DEFAULT);
    assert_eq!(contrast_for_background(Some(Rgba::TRANSPARENT)), Hsl::DEFAULT);
    assert_eq!(contrast_for_css(Some("not a color")), Hsl::DEFAULT);
    assert_eq!(contrast_for_css(None), Hsl::DEFAULT);
}

#[test]
fn resolver_always_returns_a_valid_color() {
    for r in (0..=255).step_by(15) {
        for g in (0..=255).step_by(15) {
            for b in (0..=255).step_by(15) {
                let c = contrast_for_background(Some(Rgba::rgb(r as u8, g as u8, b as u8)));
                assert!(c.is_valid(), "invalid {:?} for rgb({}, {}, {})", c, r, g, b);
            }
        }
    }
}

#[test]
fn hsla_formats_as_css() {
    let s = Hsl::new(190.0, 85.0, 55.0).with_alpha(0.5).to_string();
    assert_eq!(s, "hsla(190.0, 85.0%, 55.0%, 0.500)");
}

#[test]
fn transparent_sample_resolves_to_default() {
    let sample = sampled_background("rgba(0, 0, 0, 0)");
    assert_eq!(sample, Some(Rgba::TRANSPARENT));
    assert_eq!(contrast_for_background(sample), Hsl::DEFAULT);

    let sample = sampled_background("rgb(10, 10, 10)");
    assert_eq!(contrast_for_background(sample), Hsl::from_array(DARK_BG_HSL));

    assert_eq!(sampled_background("var(--bg)"), None);
    assert_eq!(contrast_for_background(sampled_background("")), Hsl::DEFAULT);
}

// Host-side tests for tuning constants and their relationships.

use pointer_fx::constants::*;
use pointer_fx::core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_fractions() {
    for f in [
        DOT_FOLLOW_FACTOR,
        RING_FOLLOW_FACTOR,
        GLOW_FOLLOW_FACTOR,
        STYLE_FACTOR,
        COLOR_FACTOR,
        PRESS_SCALE_FACTOR,
    ] {
        assert!(f > 0.0 && f <= 1.0, "factor {} out of (0, 1]", f);
    }
    assert!(POSITION_SNAP_EPSILON > 0.0);
    assert!(STYLE_SNAP_EPSILON > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn lag_hierarchy_is_preserved() {
    // Dot reacts fastest; ring trails; style and color are slower still
    assert!(DOT_FOLLOW_FACTOR > RING_FOLLOW_FACTOR);
    assert!(RING_FOLLOW_FACTOR > STYLE_FACTOR);
    assert!(STYLE_FACTOR > COLOR_FACTOR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn field_radii_are_nested() {
    assert!(REPULSION_RADIUS > 0.0);
    assert!(INFLUENCE_RADIUS > REPULSION_RADIUS);
    assert!(CONNECTION_DISTANCE > 0.0);
    assert!(FIELD_FRICTION > 0.0 && FIELD_FRICTION < 1.0);
    assert!(RETURN_STRENGTH > 0.0 && RETURN_STRENGTH < 1.0);
    assert!(PARTICLE_CLASS_B_PROBABILITY > 0.0 && PARTICLE_CLASS_B_PROBABILITY < 1.0);
    assert!(FIELD_PARTICLE_COUNT > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn lightness_bands_are_ordered() {
    assert!(DARK_BG_MAX_LIGHTNESS < DIM_BG_MAX_LIGHTNESS);
    assert!(DIM_BG_MAX_LIGHTNESS < LIGHT_BG_MIN_LIGHTNESS);
    assert!(LIGHT_BG_MIN_LIGHTNESS < 100.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sentinels_are_off_screen() {
    assert!(CURSOR_SENTINEL[0] < 0.0 && CURSOR_SENTINEL[1] < 0.0);
    // The field sentinel must sit outside the influence radius of any
    // on-screen particle
    assert!(-FIELD_SENTINEL[0] > INFLUENCE_RADIUS);
    assert!(-FIELD_SENTINEL[1] > INFLUENCE_RADIUS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn effect_caps_hold_at_least_one_burst() {
    assert!(MAX_BURST_PARTICLES >= BURST_PARTICLE_COUNT);
    assert!(MAX_RIPPLES > 0);
    assert!(RIPPLE_DURATION_MS > 0.0);
    assert!(BURST_LIFE_DECAY_PER_SEC > 0.0);
    assert!(MAX_FRAME_DT_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn render_alphas_are_fractions() {
    for a in [
        PARTICLE_GLOW_ALPHA,
        CONNECTION_ALPHA,
        RING_OPACITY,
        RING_BORDER_ALPHA,
        GLOW_CENTER_ALPHA,
        GLOW_OPACITY_SCALE,
        SPINNER_OPACITY,
        SPINNER_LEAD_ALPHA,
        SPINNER_TRAIL_ALPHA,
    ] {
        assert!((0.0..=1.0).contains(&a), "alpha {} out of [0, 1]", a);
    }
    assert!(CURSOR_CANVAS_Z_INDEX > FIELD_CANVAS_Z_INDEX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_cap_admits_the_default_field() {
    assert!(MAX_FIELD_PARTICLES >= FIELD_PARTICLE_COUNT);
}

#[test]
fn native_cursor_rule_covers_every_element() {
    assert!(HIDE_NATIVE_CURSOR_CSS.starts_with("*, *::before, *::after"));
    assert!(HIDE_NATIVE_CURSOR_CSS.contains("cursor: none !important"));
    assert!(!NATIVE_CURSOR_STYLE_ID.is_empty());
}

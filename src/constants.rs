// Page integration and drawing constants shared by the renderers and the
// browser front-end.

// Overlay canvases
pub const FIELD_CANVAS_ID: &str = "fx-field"; // under page content
pub const CURSOR_CANVAS_ID: &str = "fx-cursor"; // above everything
pub const FIELD_CANVAS_Z_INDEX: i32 = 1;
pub const CURSOR_CANVAS_Z_INDEX: i32 = 9999;

// Name of the global loading toggle installed on `window`
pub const LOADING_TOGGLE_NAME: &str = "setCursorLoading";

// Mounted-lifetime stylesheet hiding the native pointer
pub const NATIVE_CURSOR_STYLE_ID: &str = "fx-hide-native-cursor";
pub const HIDE_NATIVE_CURSOR_CSS: &str = "*, *::before, *::after { cursor: none !important; }";

// Hover capability query; the engine stays off without it
pub const HOVER_MEDIA_QUERY: &str = "(hover: hover)";

// Element classification
pub const INPUT_SELECTOR: &str = "input, textarea, select, [contenteditable=\"true\"]";
pub const INTERACTIVE_SELECTOR: &str =
    "button, a, [role=\"button\"], .glass-button, .glass-card, [data-magnetic]";
pub const TEXT_SELECTOR: &str = "p, span, h1, h2, h3, h4, h5, h6, li, label";
pub const LINK_SELECTOR: &str = "button, a";

// Magnetized element transitions
pub const MAGNET_PULL_TRANSITION: &str = "transform 0.15s ease-out";
pub const MAGNET_RELEASE_TRANSITION: &str = "transform 0.2s ease-out";

// Field palette (HSL)
pub const FIELD_HUE_A: f32 = 186.0;
pub const FIELD_SATURATION_A: f32 = 100.0;
pub const FIELD_HUE_B: f32 = 280.0;
pub const FIELD_SATURATION_B: f32 = 80.0;
pub const FIELD_HUE_MIXED: f32 = 233.0; // lines between A and B
pub const PARTICLE_CORE_LIGHTNESS: f32 = 70.0;
pub const PARTICLE_GLOW_LIGHTNESS: f32 = 60.0;
pub const PARTICLE_GLOW_RADIUS_MULT: f32 = 5.0;
pub const PARTICLE_GLOW_ALPHA: f32 = 0.35;
pub const CONNECTION_SATURATION: f32 = 90.0;
pub const CONNECTION_LIGHTNESS: f32 = 65.0;
pub const CONNECTION_ALPHA: f32 = 0.4;
pub const CONNECTION_LINE_WIDTH: f32 = 0.5;

// Cursor layers
pub const RING_OPACITY: f32 = 0.6;
pub const RING_BORDER_ALPHA: f32 = 0.25;
pub const RING_LINE_WIDTH: f32 = 1.5;
pub const GLOW_CENTER_ALPHA: f32 = 0.15;
pub const GLOW_OPACITY_SCALE: f32 = 0.4;
pub const SPINNER_GAP: f32 = 3.0; // px outside the ring
pub const SPINNER_LINE_WIDTH: f32 = 2.0;
pub const SPINNER_OPACITY: f32 = 0.8;
pub const SPINNER_LEAD_ALPHA: f32 = 0.5;
pub const SPINNER_TRAIL_ALPHA: f32 = 0.15;

// Click effects
pub const BURST_SATURATION: f32 = 75.0;
pub const BURST_LIGHTNESS: f32 = 55.0;
pub const RIPPLE_LINE_WIDTH: f32 = 2.0;

/// Frame smoothing and simulation tuning constants.
///
/// Force and velocity constants are expressed per frame, not per second:
/// the field and burst integrators assume a roughly constant frame interval.
/// Quantities that decay with time (burst life, ripple age, spinner angle)
/// use the measured, clamped frame interval instead.

// Largest frame interval fed to the simulation (seconds). Larger gaps, e.g.
// after the tab was backgrounded, are clamped to this.
pub const MAX_FRAME_DT_SEC: f32 = 0.033;

// Off-screen sentinel for the cursor anchors before the first sample
pub const CURSOR_SENTINEL: [f32; 2] = [-100.0, -100.0];
// Off-screen sentinel for the field pointer when the pointer is absent
pub const FIELD_SENTINEL: [f32; 2] = [-1000.0, -1000.0];

// Position smoothing (fraction of remaining distance per frame)
pub const DOT_FOLLOW_FACTOR: f32 = 0.35; // dot chases the raw pointer
pub const RING_FOLLOW_FACTOR: f32 = 0.25; // ring chases the dot
pub const GLOW_FOLLOW_FACTOR: f32 = 0.35; // glow chases the dot
pub const POSITION_SNAP_EPSILON: f32 = 0.5; // px

// Style and color smoothing
pub const STYLE_FACTOR: f32 = 0.2;
pub const COLOR_FACTOR: f32 = 0.15;
pub const STYLE_SNAP_EPSILON: f32 = 0.01;

// Press feedback
pub const PRESS_SCALE_DOWN: f32 = 0.85;
pub const PRESS_SCALE_FACTOR: f32 = 0.3;

// Loading spinner rotation speed
pub const LOADING_DEG_PER_SEC: f32 = 270.0;

// Magnetic pull of interactive elements toward the pointer
pub const MAGNET_RADIUS: f32 = 100.0;
pub const MAGNET_STRENGTH: f32 = 0.015;

// Default cursor color (HSL, degrees / percent / percent)
pub const DEFAULT_HSL: [f32; 3] = [190.0, 85.0, 55.0];

// Background lightness bands (percent) and the contrast colors they map to
pub const DARK_BG_MAX_LIGHTNESS: f32 = 20.0;
pub const DIM_BG_MAX_LIGHTNESS: f32 = 40.0;
pub const LIGHT_BG_MIN_LIGHTNESS: f32 = 70.0;
pub const DARK_BG_HSL: [f32; 3] = [190.0, 75.0, 55.0];
pub const DIM_BG_HSL: [f32; 3] = [210.0, 70.0, 58.0];
pub const LIGHT_BG_HSL: [f32; 3] = [190.0, 80.0, 35.0];
pub const MIDTONE_HUE_ROTATION: f32 = 180.0;
pub const MIDTONE_SATURATION: f32 = 65.0;
pub const MIDTONE_LIGHTNESS: f32 = 50.0;

// Magnetic particle field
pub const FIELD_PARTICLE_COUNT: usize = 140;
pub const MAX_FIELD_PARTICLES: usize = 1000; // connections are quadratic in this
pub const INFLUENCE_RADIUS: f32 = 200.0;
pub const REPULSION_RADIUS: f32 = 50.0;
pub const CONNECTION_DISTANCE: f32 = 120.0;
pub const ATTRACTION_STRENGTH: f32 = 0.06;
pub const REPULSION_STRENGTH: f32 = 0.15;
pub const TANGENTIAL_STRENGTH: f32 = 0.03; // orbit-like deflection inside the repulsion radius
pub const RETURN_STRENGTH: f32 = 0.025; // spring toward the rest position
pub const FIELD_FRICTION: f32 = 0.94;
pub const PULSE_TIME_STEP: f32 = 0.02; // pulse clock advance per frame
pub const PARTICLE_CLASS_B_PROBABILITY: f32 = 0.45;

// Click bursts
pub const BURST_PARTICLE_COUNT: usize = 6;
pub const BURST_ANGLE_JITTER: f32 = 0.3; // radians
pub const BURST_SPEED_MIN: f32 = 2.0;
pub const BURST_SPEED_SPAN: f32 = 2.0;
pub const BURST_SIZE_MIN: f32 = 2.0;
pub const BURST_SIZE_SPAN: f32 = 1.5;
pub const BURST_FRICTION: f32 = 0.94;
pub const BURST_GRAVITY: f32 = 0.03;
pub const BURST_LIFE_DECAY_PER_SEC: f32 = 2.0;
pub const MAX_BURST_PARTICLES: usize = 256;

// Click ripples
pub const RIPPLE_DURATION_MS: f32 = 500.0;
pub const RIPPLE_MAX_RADIUS: f32 = 40.0;
pub const RIPPLE_START_OPACITY: f32 = 0.35;
pub const MAX_RIPPLES: usize = 32;

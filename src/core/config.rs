use crate::core::constants::*;
use crate::core::smoothing::FollowFactors;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldParams {
    pub count: usize,
    pub influence_radius: f32,
    pub repulsion_radius: f32,
    pub connection_distance: f32,
    pub attraction_strength: f32,
    pub repulsion_strength: f32,
    pub tangential_strength: f32,
    pub return_strength: f32,
    pub friction: f32,
    /// Influence above which a particle gets a glow halo.
    pub glow_influence_min: f32,
    /// Influence both ends of a connection line must exceed.
    pub connection_influence_min: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: FIELD_PARTICLE_COUNT,
            influence_radius: INFLUENCE_RADIUS,
            repulsion_radius: REPULSION_RADIUS,
            connection_distance: CONNECTION_DISTANCE,
            attraction_strength: ATTRACTION_STRENGTH,
            repulsion_strength: REPULSION_STRENGTH,
            tangential_strength: TANGENTIAL_STRENGTH,
            return_strength: RETURN_STRENGTH,
            friction: FIELD_FRICTION,
            glow_influence_min: 0.1,
            connection_influence_min: 0.05,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorParams {
    pub dot_factor: f32,
    pub ring_factor: f32,
    pub glow_factor: f32,
    pub position_epsilon: f32,
    pub style_factor: f32,
    pub color_factor: f32,
    pub press_scale: f32,
    pub press_factor: f32,
}

impl CursorParams {
    pub fn follow_factors(&self) -> FollowFactors {
        FollowFactors {
            dot: self.dot_factor,
            ring: self.ring_factor,
            glow: self.glow_factor,
            epsilon: self.position_epsilon,
        }
    }
}

impl Default for CursorParams {
    fn default() -> Self {
        Self {
            dot_factor: DOT_FOLLOW_FACTOR,
            ring_factor: RING_FOLLOW_FACTOR,
            glow_factor: GLOW_FOLLOW_FACTOR,
            position_epsilon: POSITION_SNAP_EPSILON,
            style_factor: STYLE_FACTOR,
            color_factor: COLOR_FACTOR,
            press_scale: PRESS_SCALE_DOWN,
            press_factor: PRESS_SCALE_FACTOR,
        }
    }
}

/// Everything needed to build a [`Scene`](crate::core::Scene).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FxConfig {
    pub cursor: CursorParams,
    pub field: FieldParams,
    pub seed: u64,
    pub show_cursor: bool,
    pub show_field: bool,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            cursor: CursorParams::default(),
            field: FieldParams::default(),
            seed: 42,
            show_cursor: true,
            show_field: true,
        }
    }
}

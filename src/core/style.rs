use crate::core::constants::{MAGNET_RADIUS, MAGNET_STRENGTH, STYLE_SNAP_EPSILON};
use crate::core::smoothing::approach;
use glam::Vec2;

/// What kind of element sits under the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverTarget {
    /// Buttons, links and anything else that reacts to clicks.
    Interactive,
    /// Running text outside interactive controls.
    Text,
    /// Inputs, text areas, selects and editable regions.
    InputField,
    #[default]
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Default,
    Hover,
    TextHover,
    Hidden,
    Loading,
}

impl InteractionState {
    /// Hover resolution: the state follows the element under the pointer,
    /// with no history.
    pub fn from_target(target: HoverTarget) -> Self {
        match target {
            HoverTarget::Interactive => InteractionState::Hover,
            HoverTarget::Text => InteractionState::TextHover,
            HoverTarget::InputField => InteractionState::Hidden,
            HoverTarget::None => InteractionState::Default,
        }
    }
}

/// Sizes (px) and glow opacity for one interaction state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleProfile {
    pub dot_size: f32,
    pub ring_size: f32,
    pub glow_opacity: f32,
    pub glow_size: f32,
}

const DEFAULT_PROFILE: StyleProfile = StyleProfile::new(8.0, 32.0, 0.15, 6.0);
const HOVER_PROFILE: StyleProfile = StyleProfile::new(12.0, 48.0, 0.2, 10.0);
const TEXT_PROFILE: StyleProfile = StyleProfile::new(2.0, 20.0, 0.1, 3.0);
const HIDDEN_PROFILE: StyleProfile = StyleProfile::new(0.0, 0.0, 0.0, 0.0);
const LOADING_PROFILE: StyleProfile = StyleProfile::new(8.0, 40.0, 0.2, 8.0);

impl StyleProfile {
    pub const fn new(dot_size: f32, ring_size: f32, glow_opacity: f32, glow_size: f32) -> Self {
        Self {
            dot_size,
            ring_size,
            glow_opacity,
            glow_size,
        }
    }

    #[inline]
    pub fn for_state(state: InteractionState) -> StyleProfile {
        match state {
            InteractionState::Default => DEFAULT_PROFILE,
            InteractionState::Hover => HOVER_PROFILE,
            InteractionState::TextHover => TEXT_PROFILE,
            InteractionState::Hidden => HIDDEN_PROFILE,
            InteractionState::Loading => LOADING_PROFILE,
        }
    }

    pub fn approach(self, target: StyleProfile, factor: f32) -> StyleProfile {
        let step = |c: f32, t: f32| approach(c, t, factor, STYLE_SNAP_EPSILON);
        StyleProfile {
            dot_size: step(self.dot_size, target.dot_size),
            ring_size: step(self.ring_size, target.ring_size),
            glow_opacity: step(self.glow_opacity, target.glow_opacity),
            glow_size: step(self.glow_size, target.glow_size),
        }
    }
}

impl Default for StyleProfile {
    fn default() -> Self {
        DEFAULT_PROFILE
    }
}

/// Translation to apply to an interactive element so it leans toward the
/// pointer. `None` once the pointer is beyond [`MAGNET_RADIUS`] of the
/// element's centre.
pub fn magnetic_offset(pointer: Vec2, element_center: Vec2) -> Option<Vec2> {
    let delta = pointer - element_center;
    let distance = delta.length();
    if distance >= MAGNET_RADIUS {
        return None;
    }
    let strength = (1.0 - distance / MAGNET_RADIUS) * MAGNET_STRENGTH;
    Some(delta * strength)
}

use crate::core::color::{contrast_for_background, Hsl};
use crate::core::config::CursorParams;
use crate::core::constants::{CURSOR_SENTINEL, LOADING_DEG_PER_SEC, STYLE_SNAP_EPSILON};
use crate::core::effects::EffectSet;
use crate::core::input::InputEvent;
use crate::core::smoothing::{approach, AnchorChain};
use crate::core::style::{HoverTarget, InteractionState, StyleProfile};
use glam::Vec2;

/// Custom cursor: three trailing anchors, a smoothed style and color, and
/// the click effects spawned around it.
#[derive(Debug)]
pub struct CursorEngine {
    params: CursorParams,
    pointer: Option<Vec2>,
    anchors: AnchorChain,
    hover_state: InteractionState,
    loading: bool,
    style: StyleProfile,
    color: Hsl,
    target_color: Hsl,
    pressed: bool,
    press_scale: f32,
    visible: bool,
    visibility: f32,
    loading_rotation_deg: f32,
    effects: EffectSet,
}

impl CursorEngine {
    pub fn new(params: CursorParams, seed: u64) -> Self {
        Self {
            params,
            pointer: None,
            anchors: AnchorChain::at(Vec2::from_array(CURSOR_SENTINEL)),
            hover_state: InteractionState::Default,
            loading: false,
            style: StyleProfile::for_state(InteractionState::Default),
            color: Hsl::DEFAULT,
            target_color: Hsl::DEFAULT,
            pressed: false,
            press_scale: 1.0,
            visible: false,
            visibility: 0.0,
            loading_rotation_deg: 0.0,
            effects: EffectSet::new(seed),
        }
    }

    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Moved(sample) => {
                self.pointer = Some(sample.position());
                self.visible = true;
            }
            InputEvent::Entered => self.visible = true,
            InputEvent::Left => self.visible = false,
            InputEvent::Hovered(target) => self.set_hover(target),
            InputEvent::BackgroundSampled(bg) => self.target_color = contrast_for_background(bg),
            InputEvent::Pressed => self.pressed = true,
            InputEvent::Released => self.pressed = false,
            InputEvent::Clicked {
                position,
                interactive,
            } => {
                if interactive {
                    self.effects.spawn_ripple(position);
                    self.effects.spawn_burst(position, self.color.hue);
                }
            }
            InputEvent::LoadingChanged(loading) => self.set_loading(loading),
            InputEvent::Resized { .. } => {}
        }
    }

    pub fn set_hover(&mut self, target: HoverTarget) {
        self.hover_state = InteractionState::from_target(target);
    }

    /// While loading, the cursor stays in [`InteractionState::Loading`]
    /// whatever is hovered; clearing it falls back to the last hover state.
    pub fn set_loading(&mut self, loading: bool) {
        if self.loading != loading {
            log::debug!("[cursor] loading={}", loading);
        }
        self.loading = loading;
    }

    /// Advance every smoothed channel by one frame.
    pub fn step(&mut self, dt_sec: f32) {
        let p = self.params;
        let target = self
            .pointer
            .unwrap_or_else(|| Vec2::from_array(CURSOR_SENTINEL));
        self.anchors.step(target, &p.follow_factors());

        self.style = self.style.approach(self.target_style(), p.style_factor);
        self.color = self.color.approach(self.target_color, p.color_factor);

        let press_target = if self.pressed { p.press_scale } else { 1.0 };
        self.press_scale = approach(
            self.press_scale,
            press_target,
            p.press_factor,
            STYLE_SNAP_EPSILON,
        );

        let state = self.state();
        let shown = if self.visible && state != InteractionState::Hidden {
            1.0
        } else {
            0.0
        };
        self.visibility = approach(self.visibility, shown, p.style_factor, STYLE_SNAP_EPSILON);

        if state == InteractionState::Loading {
            self.loading_rotation_deg =
                (self.loading_rotation_deg + dt_sec * LOADING_DEG_PER_SEC) % 360.0;
        }

        self.effects.step(dt_sec);
    }

    pub fn state(&self) -> InteractionState {
        if self.loading {
            InteractionState::Loading
        } else {
            self.hover_state
        }
    }

    pub fn target_style(&self) -> StyleProfile {
        StyleProfile::for_state(self.state())
    }

    pub fn style(&self) -> StyleProfile {
        self.style
    }

    pub fn color(&self) -> Hsl {
        self.color
    }

    pub fn target_color(&self) -> Hsl {
        self.target_color
    }

    pub fn anchors(&self) -> &AnchorChain {
        &self.anchors
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn press_scale(&self) -> f32 {
        self.press_scale
    }

    /// Smoothed layer visibility in `[0, 1]`.
    pub fn visibility(&self) -> f32 {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn loading_rotation_deg(&self) -> f32 {
        self.loading_rotation_deg
    }

    pub fn effects(&self) -> &EffectSet {
        &self.effects
    }
}

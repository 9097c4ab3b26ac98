use crate::core::config::FxConfig;
use crate::core::constants::MAX_FRAME_DT_SEC;
use crate::core::cursor::CursorEngine;
use crate::core::draw::{render_cursor, render_field, DrawSurface};
use crate::core::field::ParticleField;
use crate::core::input::{InputEvent, InputQueue};

/// The whole engine state, owned in one place and advanced by [`tick`].
///
/// [`tick`]: Scene::tick
#[derive(Debug)]
pub struct Scene {
    config: FxConfig,
    cursor: CursorEngine,
    field: ParticleField,
    frames: u64,
}

impl Scene {
    pub fn new(config: FxConfig, width: f32, height: f32) -> Self {
        // Derive the effect RNG from the base seed so the two streams differ
        let effect_seed = config.seed ^ 0x9E37_79B9_7F4A_7C15;
        Self {
            cursor: CursorEngine::new(config.cursor, effect_seed),
            field: ParticleField::new(config.field, width, height, config.seed),
            config,
            frames: 0,
        }
    }

    pub fn config(&self) -> &FxConfig {
        &self.config
    }

    pub fn cursor(&self) -> &CursorEngine {
        &self.cursor
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Route one event to the cursor and the field.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Moved(sample) => self.field.set_pointer(sample.position()),
            InputEvent::Left => self.field.clear_pointer(),
            InputEvent::Resized { width, height } => self.field.reseed(width, height),
            _ => {}
        }
        self.cursor.apply(event);
    }

    /// Drain pending input, then advance the simulation by one frame.
    ///
    /// `dt_sec` is the measured time since the previous frame; it is clamped
    /// to `[0, MAX_FRAME_DT_SEC]`.
    pub fn tick(&mut self, queue: &mut InputQueue, dt_sec: f32) {
        for event in queue.drain() {
            self.apply(&event);
        }
        let dt = if dt_sec.is_finite() {
            dt_sec.clamp(0.0, MAX_FRAME_DT_SEC)
        } else {
            0.0
        };
        self.cursor.step(dt);
        self.field.step();
        self.frames += 1;
    }

    /// Draw the current state. Layers without a surface are skipped.
    pub fn render<F, C>(&self, field_surface: Option<&mut F>, cursor_surface: Option<&mut C>)
    where
        F: DrawSurface + ?Sized,
        C: DrawSurface + ?Sized,
    {
        if self.config.show_field {
            if let Some(surface) = field_surface {
                render_field(&self.field, surface);
            }
        }
        if self.config.show_cursor {
            if let Some(surface) = cursor_surface {
                render_cursor(&self.cursor, surface);
            }
        }
    }
}

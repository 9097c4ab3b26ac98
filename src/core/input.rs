use crate::core::color::Rgba;
use crate::core::style::HoverTarget;
use glam::Vec2;
use smallvec::SmallVec;

/// Raw pointer position in viewport (CSS px) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub timestamp_ms: f64,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, timestamp_ms: f64) -> Self {
        Self { x, y, timestamp_ms }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Everything the host can report between two frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Moved(PointerSample),
    /// Pointer entered the viewport.
    Entered,
    /// Pointer left the viewport.
    Left,
    Hovered(HoverTarget),
    /// Effective background color under the pointer; `None` when nothing
    /// was found there.
    BackgroundSampled(Option<Rgba>),
    Pressed,
    Released,
    Clicked {
        position: Vec2,
        interactive: bool,
    },
    Resized {
        width: f32,
        height: f32,
    },
    LoadingChanged(bool),
}

/// Pending input, appended by event handlers and drained once per frame.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: SmallVec<[InputEvent; 16]>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every pending event in arrival order, leaving the queue empty.
    pub fn drain(&mut self) -> SmallVec<[InputEvent; 16]> {
        std::mem::take(&mut self.pending)
    }
}

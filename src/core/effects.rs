use crate::core::constants::*;
use glam::Vec2;
use rand::prelude::*;

/// Expanding ring left behind by a click on an interactive element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub position: Vec2,
    pub age_ms: f32,
    /// Eased progress in `[0, 1]`; the drawn radius is this times
    /// [`RIPPLE_MAX_RADIUS`].
    pub scale: f32,
    pub opacity: f32,
}

impl Ripple {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            age_ms: 0.0,
            scale: 0.0,
            opacity: RIPPLE_START_OPACITY,
        }
    }

    /// Returns `false` once the ripple has run its course.
    fn advance(&mut self, dt_ms: f32) -> bool {
        self.age_ms += dt_ms;
        let t = (self.age_ms / RIPPLE_DURATION_MS).clamp(0.0, 1.0);
        // ease-out cubic
        self.scale = 1.0 - (1.0 - t).powi(3);
        self.opacity = RIPPLE_START_OPACITY * (1.0 - t);
        self.age_ms < RIPPLE_DURATION_MS
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.scale * RIPPLE_MAX_RADIUS
    }
}

/// Short-lived spark thrown out by a click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Remaining life in `(0, 1]`.
    pub life: f32,
    pub size: f32,
    pub hue: f32,
}

impl BurstParticle {
    /// Returns `false` once life is spent.
    fn advance(&mut self, dt_sec: f32) -> bool {
        self.position += self.velocity;
        self.velocity *= BURST_FRICTION;
        self.velocity.y += BURST_GRAVITY;
        self.life -= dt_sec * BURST_LIFE_DECAY_PER_SEC;
        self.life > 0.0
    }
}

/// Ripples and bursts currently alive. Both sets are capped; when a cap is
/// reached the oldest entries go first.
#[derive(Debug)]
pub struct EffectSet {
    ripples: Vec<Ripple>,
    bursts: Vec<BurstParticle>,
    rng: StdRng,
}

impl EffectSet {
    pub fn new(seed: u64) -> Self {
        Self {
            ripples: Vec::new(),
            bursts: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn bursts(&self) -> &[BurstParticle] {
        &self.bursts
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty() && self.bursts.is_empty()
    }

    pub fn spawn_ripple(&mut self, position: Vec2) {
        if self.ripples.len() >= MAX_RIPPLES {
            self.ripples.remove(0);
        }
        self.ripples.push(Ripple::new(position));
    }

    /// Throw [`BURST_PARTICLE_COUNT`] sparks out of `position` at evenly
    /// spaced, slightly jittered angles.
    pub fn spawn_burst(&mut self, position: Vec2, hue: f32) {
        let n = BURST_PARTICLE_COUNT;
        for i in 0..n {
            let angle = std::f32::consts::TAU * i as f32 / n as f32
                + self.rng.gen::<f32>() * BURST_ANGLE_JITTER;
            let speed = BURST_SPEED_MIN + self.rng.gen::<f32>() * BURST_SPEED_SPAN;
            self.bursts.push(BurstParticle {
                position,
                velocity: Vec2::from_angle(angle) * speed,
                life: 1.0,
                size: BURST_SIZE_MIN + self.rng.gen::<f32>() * BURST_SIZE_SPAN,
                hue,
            });
        }
        if self.bursts.len() > MAX_BURST_PARTICLES {
            let excess = self.bursts.len() - MAX_BURST_PARTICLES;
            self.bursts.drain(..excess);
        }
    }

    /// Advance every effect and purge the spent ones.
    pub fn step(&mut self, dt_sec: f32) {
        let dt_ms = dt_sec * 1000.0;
        self.ripples.retain_mut(|r| r.advance(dt_ms));
        self.bursts.retain_mut(|p| p.advance(dt_sec));
    }
}

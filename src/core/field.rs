use crate::core::config::FieldParams;
use crate::core::constants::{
    FIELD_SENTINEL, MAX_FIELD_PARTICLES, PARTICLE_CLASS_B_PROBABILITY, PULSE_TIME_STEP,
};
use glam::Vec2;
use rand::prelude::*;

/// Two visual families of field particles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleClass {
    A,
    B,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Rest position; the restoring spring always pulls toward it.
    pub origin: Vec2,
    pub velocity: Vec2,
    pub base_size: f32,
    /// Drawn size, derived from `base_size`, influence and pulse each step.
    pub size: f32,
    pub alpha: f32,
    pub class: ParticleClass,
    pub pulse_offset: f32,
    /// Proximity to the pointer in `[0, 1]`; render-only.
    pub influence: f32,
}

impl Particle {
    /// Current pulse multiplier in `[0.7, 1.3]`.
    #[inline]
    pub fn pulse(&self, time: f32) -> f32 {
        (time * 2.0 + self.pulse_offset).sin() * 0.3 + 1.0
    }
}

/// Fixed-size population of particles that lean toward, and dodge, the
/// pointer and spring back to their rest positions.
#[derive(Debug)]
pub struct ParticleField {
    params: FieldParams,
    particles: Vec<Particle>,
    pointer: Vec2,
    bounds: Vec2,
    time: f32,
    rng: StdRng,
}

impl ParticleField {
    /// `params.count` is capped at [`MAX_FIELD_PARTICLES`].
    pub fn new(mut params: FieldParams, width: f32, height: f32, seed: u64) -> Self {
        if params.count > MAX_FIELD_PARTICLES {
            log::warn!(
                "[field] {} particles requested, capping at {}",
                params.count,
                MAX_FIELD_PARTICLES
            );
            params.count = MAX_FIELD_PARTICLES;
        }
        let mut field = Self {
            params,
            particles: Vec::with_capacity(params.count),
            pointer: Vec2::from_array(FIELD_SENTINEL),
            bounds: Vec2::ZERO,
            time: 0.0,
            rng: StdRng::seed_from_u64(seed),
        };
        field.reseed(width, height);
        field
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Pulse clock, advanced once per step.
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn set_pointer(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    /// Park the pointer far off-screen so nothing is influenced.
    pub fn clear_pointer(&mut self) {
        self.pointer = Vec2::from_array(FIELD_SENTINEL);
    }

    /// Replace the whole population with fresh particles inside
    /// `[0, width) x [0, height)`.
    pub fn reseed(&mut self, width: f32, height: f32) {
        let width = width.max(0.0);
        let height = height.max(0.0);
        self.bounds = Vec2::new(width, height);
        self.particles.clear();
        for _ in 0..self.params.count {
            let position = Vec2::new(
                self.rng.gen::<f32>() * width,
                self.rng.gen::<f32>() * height,
            );
            let base_size = 1.2 + self.rng.gen::<f32>() * 1.8;
            let class = if self.rng.gen::<f32>() < PARTICLE_CLASS_B_PROBABILITY {
                ParticleClass::B
            } else {
                ParticleClass::A
            };
            self.particles.push(Particle {
                position,
                origin: position,
                velocity: Vec2::ZERO,
                base_size,
                size: base_size,
                alpha: 0.25 + self.rng.gen::<f32>() * 0.35,
                class,
                pulse_offset: self.rng.gen::<f32>() * std::f32::consts::TAU,
                influence: 0.0,
            });
        }
        log::debug!(
            "[field] reseeded {} particles in {:.0}x{:.0}",
            self.particles.len(),
            width,
            height
        );
    }

    /// One simulation frame. Forces are per-frame constants; the step does
    /// not scale by elapsed time.
    pub fn step(&mut self) {
        self.time += PULSE_TIME_STEP;
        let p = self.params;
        let pointer = self.pointer;
        let time = self.time;
        for particle in &mut self.particles {
            let to_pointer = pointer - particle.position;
            let distance = to_pointer.length();

            if distance < p.repulsion_radius && distance > 0.0 {
                let dir = to_pointer / distance;
                let closeness = (p.repulsion_radius - distance) / p.repulsion_radius;
                particle.velocity -= dir * closeness * p.repulsion_strength;
                particle.velocity += dir.perp() * closeness * p.tangential_strength;
            } else if distance < p.influence_radius && distance > p.repulsion_radius {
                let dir = to_pointer / distance;
                let band = p.influence_radius - p.repulsion_radius;
                let normalized = (distance - p.repulsion_radius) / band;
                particle.velocity += dir * (1.0 - normalized) * p.attraction_strength;
            }

            particle.velocity += (particle.origin - particle.position) * p.return_strength;
            particle.velocity *= p.friction;
            particle.position += particle.velocity;

            particle.influence = (1.0 - distance / p.influence_radius).max(0.0);
            particle.size =
                particle.base_size * (1.0 + particle.influence * 0.3) * particle.pulse(time);
        }
    }

    /// Index pairs close enough to link, where both ends are influenced by
    /// the pointer. Only influenced particles are paired, so the work
    /// follows the cluster around the pointer rather than the whole field.
    pub fn connections(&self) -> Vec<(usize, usize)> {
        let p = &self.params;
        let influenced: Vec<usize> = self
            .particles
            .iter()
            .enumerate()
            .filter(|(_, q)| q.influence > p.connection_influence_min)
            .map(|(i, _)| i)
            .collect();
        let mut pairs = Vec::new();
        for (k, &i) in influenced.iter().enumerate() {
            let a = self.particles[i].position;
            for &j in &influenced[k + 1..] {
                if a.distance(self.particles[j].position) < p.connection_distance {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}

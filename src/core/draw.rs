use crate::constants::*;
use crate::core::color::Hsla;
use crate::core::cursor::CursorEngine;
use crate::core::field::{ParticleClass, ParticleField};
use crate::core::style::InteractionState;
use glam::Vec2;

/// Minimal set of draw primitives the renderers need.
///
/// Coordinates are viewport CSS pixels; angles are radians.
pub trait DrawSurface {
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Hsla);
    /// Filled disc fading from `color` at the centre to transparent at
    /// `radius`.
    fn radial_glow(&mut self, center: Vec2, radius: f32, color: Hsla);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Hsla);
    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, width: f32, color: Hsla);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Hsla,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        width: f32,
        color: Hsla,
    },
    RadialGlow {
        center: Vec2,
        radius: f32,
        color: Hsla,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Hsla,
    },
    Arc {
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        width: f32,
        color: Hsla,
    },
}

/// Surface that records what would be drawn. `clear` discards everything
/// recorded so far, so the list always holds the current frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl DrawSurface for DrawList {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Hsla) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            width,
            color,
        });
    }

    fn radial_glow(&mut self, center: Vec2, radius: f32, color: Hsla) {
        self.commands.push(DrawCommand::RadialGlow {
            center,
            radius,
            color,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Hsla) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, width: f32, color: Hsla) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start,
            end,
            width,
            color,
        });
    }
}

#[inline]
fn class_hue_saturation(class: ParticleClass) -> (f32, f32) {
    match class {
        ParticleClass::A => (FIELD_HUE_A, FIELD_SATURATION_A),
        ParticleClass::B => (FIELD_HUE_B, FIELD_SATURATION_B),
    }
}

#[inline]
fn connection_hue(a: ParticleClass, b: ParticleClass) -> f32 {
    match (a, b) {
        (ParticleClass::A, ParticleClass::A) => FIELD_HUE_A,
        (ParticleClass::B, ParticleClass::B) => FIELD_HUE_B,
        _ => FIELD_HUE_MIXED,
    }
}

/// Paint the particle field: connection lines first, then halos and cores.
pub fn render_field<S: DrawSurface + ?Sized>(field: &ParticleField, surface: &mut S) {
    surface.clear();
    let params = field.params();
    let particles = field.particles();
    let time = field.time();

    for (i, j) in field.connections() {
        let a = &particles[i];
        let b = &particles[j];
        let d = a.position.distance(b.position);
        let alpha = a.influence.min(b.influence)
            * (1.0 - d / params.connection_distance)
            * CONNECTION_ALPHA;
        let color = Hsla::new(
            connection_hue(a.class, b.class),
            CONNECTION_SATURATION,
            CONNECTION_LIGHTNESS,
            alpha,
        );
        surface.line(a.position, b.position, CONNECTION_LINE_WIDTH, color);
    }

    for particle in particles {
        let (hue, saturation) = class_hue_saturation(particle.class);
        if particle.influence > params.glow_influence_min {
            surface.radial_glow(
                particle.position,
                particle.size * PARTICLE_GLOW_RADIUS_MULT,
                Hsla::new(
                    hue,
                    saturation,
                    PARTICLE_GLOW_LIGHTNESS,
                    particle.influence * PARTICLE_GLOW_ALPHA,
                ),
            );
        }
        let pulse = particle.pulse(time);
        let alpha = (particle.alpha + particle.influence * 0.5) * (0.8 + pulse * 0.2);
        surface.fill_circle(
            particle.position,
            particle.size,
            Hsla::new(hue, saturation, PARTICLE_CORE_LIGHTNESS, alpha),
        );
    }
}

/// Paint the cursor layer: click effects, then glow, spinner, ring and dot.
pub fn render_cursor<S: DrawSurface + ?Sized>(cursor: &CursorEngine, surface: &mut S) {
    surface.clear();

    for p in cursor.effects().bursts() {
        surface.fill_circle(
            p.position,
            p.size * (0.5 + p.life * 0.5),
            Hsla::new(p.hue, BURST_SATURATION, BURST_LIGHTNESS, p.life * 0.5),
        );
    }

    let color = cursor.color();
    for r in cursor.effects().ripples() {
        surface.stroke_circle(
            r.position,
            r.radius(),
            RIPPLE_LINE_WIDTH,
            color.with_alpha(r.opacity),
        );
    }

    let visibility = cursor.visibility();
    if visibility <= 0.0 {
        return;
    }
    let style = cursor.style();
    let anchors = cursor.anchors();
    let press = cursor.press_scale();
    let dot_radius = style.dot_size * press * 0.5;
    let ring_radius = style.ring_size * press * 0.5;

    if style.glow_size > 0.0 {
        surface.radial_glow(
            anchors.glow.current,
            style.glow_size * 2.0,
            color.with_alpha(
                GLOW_CENTER_ALPHA * style.glow_opacity * GLOW_OPACITY_SCALE * visibility,
            ),
        );
    }

    if cursor.state() == InteractionState::Loading {
        let radius = ring_radius + SPINNER_GAP;
        let base = cursor.loading_rotation_deg().to_radians();
        let quarter = std::f32::consts::FRAC_PI_4;
        let top = -std::f32::consts::FRAC_PI_2 + base;
        let bottom = std::f32::consts::FRAC_PI_2 + base;
        surface.arc(
            anchors.ring.current,
            radius,
            top - quarter,
            top + quarter,
            SPINNER_LINE_WIDTH,
            color.with_alpha(SPINNER_LEAD_ALPHA * SPINNER_OPACITY * visibility),
        );
        surface.arc(
            anchors.ring.current,
            radius,
            bottom - quarter,
            bottom + quarter,
            SPINNER_LINE_WIDTH,
            color.with_alpha(SPINNER_TRAIL_ALPHA * SPINNER_OPACITY * visibility),
        );
    }

    if ring_radius > 0.0 {
        surface.stroke_circle(
            anchors.ring.current,
            ring_radius,
            RING_LINE_WIDTH,
            color.with_alpha(RING_BORDER_ALPHA * RING_OPACITY * visibility),
        );
    }

    if dot_radius > 0.0 {
        if style.glow_size > 0.0 {
            surface.radial_glow(
                anchors.dot.current,
                dot_radius + style.glow_size,
                color.with_alpha(style.glow_opacity * visibility),
            );
        }
        surface.fill_circle(anchors.dot.current, dot_radius, color.with_alpha(visibility));
    }
}

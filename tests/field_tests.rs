// Host-side tests for the magnetic particle field.

use glam::Vec2;
use pointer_fx::core::constants::*;
use pointer_fx::core::*;
use rand::prelude::*;

fn field(width: f32, height: f32) -> ParticleField {
    ParticleField::new(FieldParams::default(), width, height, 3)
}

fn max_displacement(f: &ParticleField) -> f32 {
    f.particles()
        .iter()
        .map(|p| p.position.distance(p.origin))
        .fold(0.0, f32::max)
}

#[test]
fn seeds_configured_population_inside_bounds() {
    let f = field(800.0, 600.0);
    assert_eq!(f.len(), FIELD_PARTICLE_COUNT);
    for p in f.particles() {
        assert!(p.position.x >= 0.0 && p.position.x < 800.0);
        assert!(p.position.y >= 0.0 && p.position.y < 600.0);
        assert_eq!(p.position, p.origin);
        assert_eq!(p.velocity, Vec2::ZERO);
    }
    assert_eq!(f.pointer(), Vec2::from_array(FIELD_SENTINEL));
}

#[test]
fn both_classes_are_present() {
    let f = field(800.0, 600.0);
    let b = f
        .particles()
        .iter()
        .filter(|p| p.class == ParticleClass::B)
        .count();
    assert!(b > 0 && b < f.len());
}

#[test]
fn population_is_constant_across_steps() {
    let mut f = field(800.0, 600.0);
    f.set_pointer(Vec2::new(400.0, 300.0));
    for _ in 0..200 {
        f.step();
        assert_eq!(f.len(), FIELD_PARTICLE_COUNT);
    }
}

#[test]
fn reseed_replaces_population_in_new_bounds() {
    let mut f = field(800.0, 600.0);
    f.reseed(200.0, 100.0);
    assert_eq!(f.len(), FIELD_PARTICLE_COUNT);
    assert_eq!(f.bounds(), Vec2::new(200.0, 100.0));
    for p in f.particles() {
        assert!(p.position.x < 200.0 && p.position.y < 100.0);
    }
}

#[test]
fn zero_sized_viewport_does_not_blow_up() {
    let mut f = field(0.0, 0.0);
    assert_eq!(f.len(), FIELD_PARTICLE_COUNT);
    f.set_pointer(Vec2::ZERO);
    for _ in 0..10 {
        f.step();
    }
    for p in f.particles() {
        assert!(p.position.is_finite());
        assert!(p.velocity.is_finite());
    }
}

#[test]
fn without_pointer_nothing_moves() {
    let mut f = field(800.0, 600.0);
    for _ in 0..100 {
        f.step();
    }
    assert_eq!(max_displacement(&f), 0.0);
    assert!(f.particles().iter().all(|p| p.influence == 0.0));
}

#[test]
fn particles_return_to_rest_after_pointer_leaves() {
    let mut f = field(800.0, 600.0);
    f.set_pointer(Vec2::new(400.0, 300.0));
    for _ in 0..60 {
        f.step();
    }
    assert!(max_displacement(&f) > 0.5, "pointer should have disturbed the field");

    f.clear_pointer();
    for _ in 0..600 {
        f.step();
    }
    assert!(max_displacement(&f) < 0.5);
}

#[test]
fn nearby_particles_are_pushed_away() {
    let mut f = ParticleField::new(
        FieldParams {
            count: 1,
            ..FieldParams::default()
        },
        800.0,
        600.0,
        9,
    );
    let origin = f.particles()[0].origin;
    let pointer = origin + Vec2::new(REPULSION_RADIUS * 0.5, 0.0);
    f.set_pointer(pointer);
    f.step();
    let p = f.particles()[0];
    assert!(p.position.x < origin.x, "particle moved toward the pointer");
}

#[test]
fn velocity_and_influence_stay_bounded_under_random_motion() {
    let mut f = field(800.0, 600.0);
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..2000 {
        f.set_pointer(Vec2::new(
            rng.gen_range(0.0..800.0),
            rng.gen_range(0.0..600.0),
        ));
        f.step();
        for p in f.particles() {
            assert!(p.velocity.length() < 20.0, "runaway velocity {:?}", p.velocity);
            assert!((0.0..=1.0).contains(&p.influence));
            assert!(p.size > 0.0);
        }
    }
}

#[test]
fn connections_only_link_influenced_neighbours() {
    let mut f = field(400.0, 400.0);
    f.set_pointer(Vec2::new(200.0, 200.0));
    for _ in 0..5 {
        f.step();
    }
    let params = *f.params();
    let pairs = f.connections();
    assert!(!pairs.is_empty());
    for (i, j) in pairs {
        assert!(i < j);
        let a = &f.particles()[i];
        let b = &f.particles()[j];
        assert!(a.influence > params.connection_influence_min);
        assert!(b.influence > params.connection_influence_min);
        assert!(a.position.distance(b.position) < params.connection_distance);
    }

    f.clear_pointer();
    f.step();
    assert!(f.connections().is_empty());
}

#[test]
fn pulse_stays_in_range() {
    let f = field(100.0, 100.0);
    let p = f.particles()[0];
    for i in 0..100 {
        let v = p.pulse(i as f32 * 0.1);
        assert!((0.7 - 1e-5..=1.3 + 1e-5).contains(&v));
    }
}

#[test]
fn oversized_population_is_capped() {
    let f = ParticleField::new(
        FieldParams {
            count: usize::MAX,
            ..FieldParams::default()
        },
        800.0,
        600.0,
        5,
    );
    assert_eq!(f.len(), MAX_FIELD_PARTICLES);
    assert_eq!(f.params().count, MAX_FIELD_PARTICLES);
}

#[test]
fn shrinking_resize_mid_simulation_starts_fresh_inside_new_bounds() {
    let mut f = field(1200.0, 900.0);
    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..120 {
        f.set_pointer(Vec2::new(
            rng.gen_range(0.0..1200.0),
            rng.gen_range(0.0..900.0),
        ));
        f.step();
    }
    assert!(f.particles().iter().any(|p| p.velocity != Vec2::ZERO));

    f.reseed(320.0, 240.0);
    assert_eq!(f.len(), FIELD_PARTICLE_COUNT);
    for p in f.particles() {
        assert!(p.position.x >= 0.0 && p.position.x < 320.0);
        assert!(p.position.y >= 0.0 && p.position.y < 240.0);
        assert_eq!(p.velocity, Vec2::ZERO);
        assert_eq!(p.origin, p.position);
    }

    // The pointer survives the resize and keeps acting on the new population
    f.set_pointer(Vec2::new(160.0, 120.0));
    for _ in 0..30 {
        f.step();
    }
    assert!(f.particles().iter().all(|p| p.position.is_finite()));
}

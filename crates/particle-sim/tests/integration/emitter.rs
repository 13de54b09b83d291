//! Integration tests for emitter spawning, aging and painting

use glam::{Mat4, Vec2};
use particle_sim::particle::SPAWN_COLOR_SEQUENCE;
use particle_sim::{CorrectedBehavior, EmitterConfig, ParticleEmitter};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn seeded(config: EmitterConfig, behavior: CorrectedBehavior) -> ParticleEmitter {
    ParticleEmitter::with_seed(config, behavior, 2015)
}

#[test_case(0.01, 100, 0 ; "below one period")]
#[test_case(0.03, 100, 1 ; "one period")]
#[test_case(0.07, 100, 3 ; "three periods")]
#[test_case(0.115, 100, 5 ; "five periods")]
#[test_case(0.115, 3, 3 ; "clamped to capacity")]
fn test_first_update_spawn_count(dt: f32, max_particles: usize, expected: usize) {
    let mut emitter = seeded(
        EmitterConfig {
            max_particles,
            ..Default::default()
        },
        CorrectedBehavior::FAITHFUL,
    );

    emitter.update(dt);
    assert_eq!(emitter.particle_count(), expected);
    assert_eq!(emitter.emitted_particles(), expected);
}

#[test_case(1 ; "single")]
#[test_case(2 ; "pair")]
#[test_case(4 ; "four")]
fn test_first_update_clamped_to_budget(budget: usize) {
    let mut emitter = seeded(
        EmitterConfig {
            particles_to_emit: budget,
            ..Default::default()
        },
        CorrectedBehavior::FAITHFUL,
    );

    emitter.update(0.115);
    assert_eq!(emitter.particle_count(), budget);
}

#[test]
fn test_reference_cadence() {
    let mut emitter = seeded(EmitterConfig::default(), CorrectedBehavior::FAITHFUL);
    let dt = 1.0 / 60.0;

    let counts: Vec<usize> = (0..5)
        .map(|_| {
            emitter.update(dt);
            emitter.particle_count()
        })
        .collect();

    // 50 per second at 60 frames per second
    assert_eq!(counts, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_steady_state_population() {
    let mut emitter = seeded(EmitterConfig::default(), CorrectedBehavior::FAITHFUL);
    for _ in 0..600 {
        emitter.update(1.0 / 60.0);
    }

    // 50 per second living 1.5 seconds
    let count = emitter.particle_count();
    assert!((73..=76).contains(&count), "unexpected population {count}");
}

#[test]
fn test_spawned_particle_state() {
    let mut emitter = seeded(
        EmitterConfig {
            start_size_variance: 0.0,
            ..Default::default()
        },
        CorrectedBehavior::FAITHFUL,
    );
    assert!(emitter.spawn_particle());

    let particle = &emitter.particles()[0];
    assert_eq!(particle.position, Vec2::ZERO);
    assert_eq!(particle.time_to_live, 1.5);
    assert_eq!(particle.size, 2.5);
    assert!((particle.size_delta + 1.666_666_7).abs() < 1e-5);
    assert_eq!(particle.color_sequence, SPAWN_COLOR_SEQUENCE);
    assert_eq!(particle.transform, Mat4::IDENTITY);
}

#[test]
fn test_gravity_pulls_every_particle() {
    let mut emitter = seeded(
        EmitterConfig {
            speed: 0.0,
            speed_variance: 0.0,
            gravity: Vec2::new(0.0, -60.0),
            ..Default::default()
        },
        CorrectedBehavior::FAITHFUL,
    );
    for _ in 0..30 {
        emitter.update(1.0 / 60.0);
    }

    assert!(emitter.particle_count() > 0);
    for particle in emitter.particles() {
        assert!(particle.direction.y < 0.0);
        assert!(particle.position.y < 0.0);
        assert!(particle.position.x.abs() < 1e-6);
    }
}

#[test]
fn test_radial_acceleration_pushes_outward() {
    let mut emitter = seeded(
        EmitterConfig {
            position_variance: Vec2::new(5.0, 5.0),
            radial_acceleration: 200.0,
            ..Default::default()
        },
        CorrectedBehavior::FAITHFUL,
    );
    emitter.spawn_particle();
    let start = emitter.particles()[0].position;

    emitter.update(0.01);
    let end = emitter.particles()[0].position;
    assert!(end.length() > start.length());
}

#[test]
fn test_corrected_paint_tracks_position() {
    let mut emitter = seeded(EmitterConfig::default(), CorrectedBehavior::CORRECTED);
    for _ in 0..30 {
        emitter.update(1.0 / 60.0);
    }
    for _ in 0..10 {
        emitter.paint();
    }

    for particle in emitter.particles() {
        let w = particle.transform.w_axis;
        assert!((w.x - particle.position.x).abs() < 1e-4);
        assert!((w.y - particle.position.y).abs() < 1e-4);
        assert_eq!(w.w, 1.0);
    }
}

#[test]
fn test_faithful_paint_accumulates() {
    let mut emitter = seeded(
        EmitterConfig {
            position_variance: Vec2::new(1.0, 1.0),
            ..Default::default()
        },
        CorrectedBehavior::FAITHFUL,
    );
    emitter.spawn_particle();

    emitter.paint();
    let once = emitter.particles()[0].transform;
    emitter.paint();
    let twice = emitter.particles()[0].transform;

    assert_ne!(once, twice);
    assert_ne!(once, Mat4::IDENTITY);
}

#[test]
fn test_same_seed_same_simulation() {
    let run = || {
        let mut emitter = seeded(EmitterConfig::default(), CorrectedBehavior::FAITHFUL);
        for _ in 0..90 {
            emitter.update(1.0 / 60.0);
        }
        emitter.paint();
        emitter.particles().to_vec()
    };

    assert_eq!(run(), run());
}

//! Property tests for the emitter invariants

use glam::Vec2;
use particle_sim::math::radial_unit;
use particle_sim::{CorrectedBehavior, EmitterConfig, ParticleEmitter};
use proptest::prelude::*;

fn behavior_strategy() -> impl Strategy<Value = CorrectedBehavior> {
    (0u8..8).prop_map(CorrectedBehavior::from_bits_truncate)
}

proptest! {
    #[test]
    fn count_never_exceeds_capacity(
        max_particles in 1usize..40,
        emission_rate in 0.0f32..500.0,
        lifetime in 0.0f32..3.0,
        steps in prop::collection::vec(0.0f32..0.5, 1..60),
        behavior in behavior_strategy(),
        seed in any::<u64>(),
    ) {
        let config = EmitterConfig {
            max_particles,
            emission_rate,
            lifetime,
            ..Default::default()
        };
        let mut emitter = ParticleEmitter::with_seed(config, behavior, seed);

        for dt in steps {
            emitter.update(dt);
            prop_assert!(emitter.particle_count() <= max_particles);
            prop_assert!(emitter.particles().iter().all(|p| p.time_to_live > 0.0));
        }
    }

    #[test]
    fn budget_never_exceeded(
        budget in 1usize..20,
        steps in prop::collection::vec(0.0f32..1.0, 1..30),
        seed in any::<u64>(),
    ) {
        let config = EmitterConfig {
            particles_to_emit: budget,
            ..Default::default()
        };
        let mut emitter = ParticleEmitter::with_seed(config, CorrectedBehavior::FAITHFUL, seed);

        for dt in steps {
            emitter.update(dt);
            prop_assert!(emitter.emitted_particles() <= budget);
        }
    }

    #[test]
    fn single_step_ages_by_dt(dt in 0.001f32..0.2, seed in any::<u64>()) {
        let mut emitter = ParticleEmitter::with_seed(
            EmitterConfig {
                emission_rate: 0.0,
                lifetime: 1.0,
                ..Default::default()
            },
            CorrectedBehavior::FAITHFUL,
            seed,
        );
        emitter.spawn_particle();
        let before = emitter.particles()[0].time_to_live;

        emitter.update(dt);
        prop_assert_eq!(emitter.particle_count(), 1);
        prop_assert_eq!(emitter.particles()[0].time_to_live, before - dt);
    }

    #[test]
    fn expired_particles_are_removed(extra in 0.0f32..1.0, seed in any::<u64>()) {
        let mut emitter = ParticleEmitter::with_seed(
            EmitterConfig {
                emission_rate: 0.0,
                lifetime: 0.5,
                ..Default::default()
            },
            CorrectedBehavior::FAITHFUL,
            seed,
        );
        emitter.spawn_particle();

        emitter.update(0.5 + extra);
        prop_assert_eq!(emitter.particle_count(), 0);
    }

    #[test]
    fn radial_unit_is_unit_or_zero(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0) {
        let r = radial_unit(Vec2::new(x, y));
        prop_assert!(!r.is_nan());
        let len = r.length();
        prop_assert!(len == 0.0 || (len - 1.0).abs() < 1e-4);
    }
}

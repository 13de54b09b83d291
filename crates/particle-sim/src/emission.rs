//! Initial particle state from an emitter configuration

use glam::{Mat4, Vec2};

use super::behavior::CorrectedBehavior;
use super::config::EmitterConfig;
use super::math::{rate_over, unit_from_degrees};
use super::particle::{Particle, SPAWN_COLOR_SEQUENCE};
use super::rng::ParticleRng;

/// Create a particle at the emitter origin
///
/// Every variance is an independent draw, taken in field order: lifetime,
/// position, start and end size, start and end rotation, direction, speed,
/// radial acceleration, then tangential acceleration when
/// `TANGENTIAL_VARIANCE` is set.
pub fn create_particle(
    config: &EmitterConfig,
    rng: &mut ParticleRng,
    behavior: CorrectedBehavior,
) -> Particle {
    let time_to_live = rng.vary(config.lifetime, config.lifetime_variance).max(0.0);

    let position = Vec2::new(
        config.position_variance.x * rng.minus_one_to_one(),
        config.position_variance.y * rng.minus_one_to_one(),
    );

    let size = rng
        .vary(config.start_size, config.start_size_variance)
        .max(0.0);
    let end_size = rng.vary(config.end_size, config.end_size_variance).max(0.0);
    let size_delta = rate_over(end_size - size, time_to_live);

    let rotation = rng.vary(config.start_rotation, config.start_rotation_variance);
    let end_rotation = rng.vary(config.end_rotation, config.end_rotation_variance);
    let rotation_delta = rate_over(end_rotation - rotation, time_to_live);

    let heading = rng.vary(config.direction, config.direction_variance);
    let speed = rng.vary(config.speed, config.speed_variance);
    let direction = unit_from_degrees(heading) * speed;

    let radial_accel = rng.vary(
        config.radial_acceleration,
        config.radial_acceleration_variance,
    );
    let tangential_accel = if behavior.contains(CorrectedBehavior::TANGENTIAL_VARIANCE) {
        rng.vary(
            config.tangential_acceleration,
            config.tangential_acceleration_variance,
        )
    } else {
        config.tangential_acceleration + config.tangential_acceleration_variance
    };

    Particle {
        position,
        direction,
        size,
        size_delta,
        rotation,
        rotation_delta,
        time_to_live,
        radial_accel,
        tangential_accel,
        color_sequence: SPAWN_COLOR_SEQUENCE,
        transform: Mat4::IDENTITY,
    }
}

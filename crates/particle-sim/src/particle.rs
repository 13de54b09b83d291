//! Individual particle representation

use glam::{Mat4, Vec2};

use crate::behavior::CorrectedBehavior;
use crate::math::{perpendicular, radial_unit, similarity_transform};

/// Color at spawn followed by its per-second delta
pub const SPAWN_COLOR_SEQUENCE: [f32; 8] = [255.0, 255.0, 255.0, 255.0, 255.0, 0.0, 0.0, 0.0];

/// A single particle in the system
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position relative to the emitter origin
    pub position: Vec2,
    /// Velocity-like direction vector, accumulates acceleration every step
    pub direction: Vec2,
    /// Current size
    pub size: f32,
    /// Size change per second
    pub size_delta: f32,
    /// Current rotation in degrees
    pub rotation: f32,
    /// Rotation change per second
    pub rotation_delta: f32,
    /// Seconds remaining
    pub time_to_live: f32,
    /// Radial acceleration coefficient
    pub radial_accel: f32,
    /// Tangential acceleration coefficient
    pub tangential_accel: f32,
    /// Current RGBA in `[0..4]`, per-second RGBA deltas in `[4..8]`
    pub color_sequence: [f32; 8],
    /// Transform built by paint
    pub transform: Mat4,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            direction: Vec2::ZERO,
            size: 0.0,
            size_delta: 0.0,
            rotation: 0.0,
            rotation_delta: 0.0,
            time_to_live: 0.0,
            radial_accel: 0.0,
            tangential_accel: 0.0,
            color_sequence: SPAWN_COLOR_SEQUENCE,
            transform: Mat4::IDENTITY,
        }
    }
}

impl Particle {
    /// Check if the particle is still alive
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.time_to_live > 0.0
    }

    /// Current RGBA
    #[inline]
    pub fn color(&self) -> [f32; 4] {
        [
            self.color_sequence[0],
            self.color_sequence[1],
            self.color_sequence[2],
            self.color_sequence[3],
        ]
    }

    /// Consume `dt` seconds of lifetime, returning whether the particle survives
    #[inline]
    pub fn age(&mut self, dt: f32) -> bool {
        self.time_to_live -= dt;
        self.is_alive()
    }

    /// Integrate one simulation step
    ///
    /// The acceleration is scaled by `dt` before it is added to `direction`
    /// and scaled by `dt` a second time before it is added to `position`.
    /// Position therefore moves by the acceleration alone, not by `direction`.
    ///
    /// # Arguments
    /// * `dt` - Delta time in seconds
    /// * `gravity` - Emitter-wide constant acceleration
    /// * `behavior` - Selects the rotation formula
    pub fn integrate(&mut self, dt: f32, gravity: Vec2, behavior: CorrectedBehavior) {
        let radial = radial_unit(self.position);
        let tangential = perpendicular(radial) * self.tangential_accel;
        let radial = radial * self.radial_accel;

        let mut accel = (radial + tangential + gravity) * dt;
        self.direction += accel;
        accel *= dt;
        self.position += accel;

        self.size = (self.size + self.size_delta * dt).max(0.0);

        if behavior.contains(CorrectedBehavior::ROTATION_DELTA) {
            self.rotation += self.rotation_delta * dt;
        } else {
            self.rotation += self.rotation * dt;
        }

        for i in 0..4 {
            self.color_sequence[i] += self.color_sequence[i + 4] * dt;
        }
    }

    /// Rebuild the transform after applying a rotation jitter in degrees
    pub fn paint(&mut self, jitter: f32, behavior: CorrectedBehavior) {
        self.rotation += jitter;

        let frame = similarity_transform(self.rotation, self.size, self.position);
        if behavior.contains(CorrectedBehavior::RECOMPUTE_TRANSFORM) {
            self.transform = frame;
        } else {
            self.transform *= frame;
        }
    }
}

//! Emission parameter set

use glam::Vec2;

use crate::error::{ParticleError, Result};

/// Parameters an emitter spawns particles from
///
/// Angles are in degrees, times in seconds. Each `*_variance` field is the
/// half-width of a symmetric random spread around its base value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmitterConfig {
    /// Particle lifetime
    pub lifetime: f32,
    /// Lifetime variance
    pub lifetime_variance: f32,
    /// Spawn position spread around the origin, per axis
    pub position_variance: Vec2,
    /// Size at spawn
    pub start_size: f32,
    /// Start size variance
    pub start_size_variance: f32,
    /// Size at end of life
    pub end_size: f32,
    /// End size variance
    pub end_size_variance: f32,
    /// Rotation at spawn
    pub start_rotation: f32,
    /// Start rotation variance
    pub start_rotation_variance: f32,
    /// Rotation at end of life
    pub end_rotation: f32,
    /// End rotation variance
    pub end_rotation_variance: f32,
    /// Emission direction
    pub direction: f32,
    /// Emission direction variance
    pub direction_variance: f32,
    /// Initial speed along the emission direction
    pub speed: f32,
    /// Speed variance
    pub speed_variance: f32,
    /// Acceleration away from the origin
    pub radial_acceleration: f32,
    /// Radial acceleration variance
    pub radial_acceleration_variance: f32,
    /// Acceleration perpendicular to the radial direction
    pub tangential_acceleration: f32,
    /// Tangential acceleration variance
    pub tangential_acceleration_variance: f32,
    /// Constant acceleration applied to every particle
    pub gravity: Vec2,
    /// Maximum number of live particles
    pub max_particles: usize,
    /// Particles spawned per second
    pub emission_rate: f32,
    /// Lifetime spawn budget, 0 for unlimited
    pub particles_to_emit: usize,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            lifetime: 1.5,
            lifetime_variance: 0.0,
            position_variance: Vec2::ZERO,
            start_size: 2.5,
            start_size_variance: 0.5,
            end_size: 0.0,
            end_size_variance: 0.0,
            start_rotation: 0.0,
            start_rotation_variance: 0.0,
            end_rotation: 0.0,
            end_rotation_variance: 0.0,
            direction: 0.0,
            direction_variance: 360.0,
            speed: 100.0,
            speed_variance: 50.0,
            radial_acceleration: 0.0,
            radial_acceleration_variance: 0.0,
            tangential_acceleration: 0.0,
            tangential_acceleration_variance: 0.0,
            gravity: Vec2::ZERO,
            max_particles: 100,
            emission_rate: 50.0,
            particles_to_emit: 0,
        }
    }
}

impl EmitterConfig {
    /// Whether the spawn budget is unlimited
    #[inline]
    pub fn is_unlimited(&self) -> bool {
        self.particles_to_emit == 0
    }

    /// Check the parameter set for values the simulation only tolerates
    ///
    /// Emitters accept any configuration; this is for callers that want to
    /// reject nonsense before running.
    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("lifetime", self.lifetime),
            ("lifetime_variance", self.lifetime_variance),
            ("start_size", self.start_size),
            ("start_size_variance", self.start_size_variance),
            ("end_size", self.end_size),
            ("end_size_variance", self.end_size_variance),
            ("start_rotation", self.start_rotation),
            ("start_rotation_variance", self.start_rotation_variance),
            ("end_rotation", self.end_rotation),
            ("end_rotation_variance", self.end_rotation_variance),
            ("direction", self.direction),
            ("direction_variance", self.direction_variance),
            ("speed", self.speed),
            ("speed_variance", self.speed_variance),
            ("radial_acceleration", self.radial_acceleration),
            (
                "radial_acceleration_variance",
                self.radial_acceleration_variance,
            ),
            ("tangential_acceleration", self.tangential_acceleration),
            (
                "tangential_acceleration_variance",
                self.tangential_acceleration_variance,
            ),
            ("emission_rate", self.emission_rate),
        ];

        if let Some((name, value)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ParticleError::InvalidConfig(format!(
                "{name} must be finite, got {value}"
            )));
        }

        if !self.position_variance.is_finite() || !self.gravity.is_finite() {
            return Err(ParticleError::InvalidConfig(
                "position_variance and gravity must be finite".to_string(),
            ));
        }

        if self.lifetime < 0.0 {
            return Err(ParticleError::InvalidConfig(format!(
                "lifetime must not be negative, got {}",
                self.lifetime
            )));
        }

        if self.emission_rate < 0.0 {
            return Err(ParticleError::InvalidConfig(format!(
                "emission_rate must not be negative, got {}",
                self.emission_rate
            )));
        }

        if self.max_particles == 0 {
            return Err(ParticleError::InvalidConfig(
                "max_particles must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

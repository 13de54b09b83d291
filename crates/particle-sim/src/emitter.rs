//! Particle emitter runtime state

use super::behavior::CorrectedBehavior;
use super::config::EmitterConfig;
use super::emission::create_particle;
use super::math::emission_period;
use super::particle::Particle;
use super::rng::ParticleRng;

/// Runtime particle emitter
///
/// Owns a bounded collection of particles and advances it once per frame.
/// Call [`update`](Self::update) to simulate and [`paint`](Self::paint) to
/// rebuild transforms.
#[derive(Debug, Clone)]
pub struct ParticleEmitter {
    /// Emission parameters
    config: EmitterConfig,
    /// Formula selection
    behavior: CorrectedBehavior,
    /// Live particles, in spawn order
    particles: Vec<Particle>,
    /// Random number generator
    rng: ParticleRng,
    /// Seconds accumulated toward the next spawn
    emit_counter: f32,
    /// Particles spawned over the emitter's lifetime
    emitted_particles: usize,
}

impl Default for ParticleEmitter {
    fn default() -> Self {
        Self::create()
    }
}

impl ParticleEmitter {
    /// Create an emitter with the default parameter set
    pub fn create() -> Self {
        Self::new(
            EmitterConfig::default(),
            CorrectedBehavior::FAITHFUL,
            ParticleRng::from_entropy(),
        )
    }

    /// Create an emitter from explicit parts
    pub fn new(config: EmitterConfig, behavior: CorrectedBehavior, rng: ParticleRng) -> Self {
        let particles = Vec::with_capacity(config.max_particles);
        Self {
            config,
            behavior,
            particles,
            rng,
            emit_counter: 0.0,
            emitted_particles: 0,
        }
    }

    /// Create an emitter with a deterministic generator
    pub fn with_seed(config: EmitterConfig, behavior: CorrectedBehavior, seed: u64) -> Self {
        Self::new(config, behavior, ParticleRng::new(seed))
    }

    /// Get the emission parameters
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Get the formula selection
    pub fn behavior(&self) -> CorrectedBehavior {
        self.behavior
    }

    /// Get the live particles in spawn order
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Get the current number of particles
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Get the maximum number of particles
    pub fn max_particles(&self) -> usize {
        self.config.max_particles
    }

    /// Seconds accumulated toward the next spawn
    pub fn emit_counter(&self) -> f32 {
        self.emit_counter
    }

    /// Particles spawned over the emitter's lifetime
    pub fn emitted_particles(&self) -> usize {
        self.emitted_particles
    }

    /// Whether the collection is at capacity
    #[inline]
    pub fn is_full(&self) -> bool {
        self.particles.len() >= self.config.max_particles
    }

    /// Whether a finite spawn budget has been used up
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        !self.config.is_unlimited() && self.emitted_particles >= self.config.particles_to_emit
    }

    /// Drop all particles and the pending spawn time
    ///
    /// The lifetime emission count is kept, so a spent budget stays spent.
    pub fn reset(&mut self) {
        self.particles.clear();
        self.emit_counter = 0.0;
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// Spawns from the accumulated emit time, then ages every particle in
    /// reverse order, removing the expired ones and integrating the rest.
    pub fn update(&mut self, dt: f32) {
        self.emit(dt);

        let gravity = self.config.gravity;
        let behavior = self.behavior;

        // Reverse order keeps unvisited indices stable across removal
        for i in (0..self.particles.len()).rev() {
            let particle = &mut self.particles[i];
            if !particle.age(dt) {
                self.particles.remove(i);
                continue;
            }

            particle.integrate(dt, gravity, behavior);
        }

        debug_assert!(self.particles.len() <= self.config.max_particles);
    }

    /// Rebuild every particle transform
    ///
    /// Each particle first receives a rotation jitter drawn from `[-1, 1]`.
    pub fn paint(&mut self) {
        let behavior = self.behavior;
        for particle in self.particles.iter_mut().rev() {
            let jitter = self.rng.minus_one_to_one();
            particle.paint(jitter, behavior);
        }
    }

    /// Spawn one particle
    ///
    /// Returns `false` without spawning when the collection is full.
    pub fn spawn_particle(&mut self) -> bool {
        if self.is_full() {
            debug_assert!(self.particles.len() == self.config.max_particles);
            return false;
        }

        let particle = create_particle(&self.config, &mut self.rng, self.behavior);
        self.particles.push(particle);
        self.emitted_particles += 1;
        true
    }

    /// Leaky-bucket spawning from accumulated time
    fn emit(&mut self, dt: f32) {
        let Some(period) = emission_period(self.config.emission_rate) else {
            return;
        };

        if self.is_full() {
            return;
        }
        self.emit_counter += dt;

        let mut spawned = 0usize;
        while !self.is_full() && self.emit_counter > period && !self.is_exhausted() {
            self.spawn_particle();
            self.emit_counter -= period;
            spawned += 1;
        }

        if spawned > 0 {
            log::trace!(
                "Spawned {} particles ({} live, {:.4}s carried)",
                spawned,
                self.particles.len(),
                self.emit_counter
            );
        }
    }
}

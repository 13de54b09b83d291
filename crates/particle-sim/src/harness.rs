//! Timed create / update / paint benchmark over many emitters
//!
//! The run has three phases, each timed separately:
//!
//! 1. **creation**: build `systems` default emitters
//! 2. **updates**: `frames` passes of `update(dt)` over every emitter
//! 3. **matrices**: `frames` passes of `paint()` over every emitter
//!
//! Every update frame completes before the first paint frame starts, and
//! within a phase every emitter finishes frame *k* before any starts *k + 1*.
//!
//! # Usage
//!
//! ```rust
//! use particle_sim::harness::{BenchConfig, run};
//!
//! let config = BenchConfig {
//!     systems: 10,
//!     frames: 5,
//!     ..Default::default()
//! };
//! let report = run(&config).unwrap();
//! assert_eq!(report.systems, 10);
//! ```

use std::time::{Duration, Instant};

use crate::behavior::CorrectedBehavior;
use crate::config::EmitterConfig;
use crate::emitter::ParticleEmitter;
use crate::error::{ParticleError, Result};

/// Reference emitter count
pub const DEFAULT_SYSTEMS: usize = 1000;

/// Reference frame count per phase
pub const DEFAULT_FRAMES: usize = 1000;

/// Reference frame step in seconds
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Benchmark run settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchConfig {
    /// Number of emitters
    pub systems: usize,
    /// Frames per phase
    pub frames: usize,
    /// Frame step in seconds
    pub dt: f32,
    /// Base seed; emitter `i` uses `seed + i`. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Formula selection for every emitter
    pub behavior: CorrectedBehavior,
    /// Spread each frame across emitters with rayon
    pub parallel: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            systems: DEFAULT_SYSTEMS,
            frames: DEFAULT_FRAMES,
            dt: DEFAULT_DT,
            seed: None,
            behavior: CorrectedBehavior::FAITHFUL,
            parallel: false,
        }
    }
}

impl BenchConfig {
    /// Check the settings before a run
    pub fn validate(&self) -> Result<()> {
        if self.systems == 0 {
            return Err(ParticleError::InvalidBench(
                "systems must be at least 1".to_string(),
            ));
        }

        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ParticleError::InvalidBench(format!(
                "dt must be a positive number of seconds, got {}",
                self.dt
            )));
        }

        if self.parallel && !cfg!(feature = "parallel") {
            return Err(ParticleError::InvalidBench(
                "parallel runs require the `parallel` feature".to_string(),
            ));
        }

        Ok(())
    }
}

/// Timings and final state of a run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchReport {
    /// Time spent building emitters
    pub creation: Duration,
    /// Time spent in update passes
    pub updates: Duration,
    /// Time spent in paint passes
    pub matrices: Duration,
    /// Number of emitters
    pub systems: usize,
    /// Frames per phase
    pub frames: usize,
    /// Live particles across all emitters after the run
    pub live_particles: usize,
    /// Particles spawned across all emitters during the run
    pub emitted_particles: usize,
}

impl BenchReport {
    /// Sum of all phase timings
    pub fn total(&self) -> Duration {
        self.creation + self.updates + self.matrices
    }

    /// Mean time of one update pass over every emitter
    pub fn update_frame(&self) -> Duration {
        per_frame(self.updates, self.frames)
    }

    /// Mean time of one paint pass over every emitter
    pub fn paint_frame(&self) -> Duration {
        per_frame(self.matrices, self.frames)
    }
}

fn per_frame(total: Duration, frames: usize) -> Duration {
    match u32::try_from(frames) {
        Ok(0) => Duration::ZERO,
        Ok(frames) => total / frames,
        Err(_) => Duration::from_secs_f64(total.as_secs_f64() / frames as f64),
    }
}

/// Build the emitters for a run
pub fn create_systems(config: &BenchConfig) -> Vec<ParticleEmitter> {
    (0..config.systems)
        .map(|i| match config.seed {
            Some(seed) => ParticleEmitter::with_seed(
                EmitterConfig::default(),
                config.behavior,
                seed.wrapping_add(i as u64),
            ),
            None => ParticleEmitter::new(
                EmitterConfig::default(),
                config.behavior,
                crate::rng::ParticleRng::from_entropy(),
            ),
        })
        .collect()
}

/// Run one update pass over every emitter
pub fn update_all(systems: &mut [ParticleEmitter], dt: f32, parallel: bool) {
    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        systems.par_iter_mut().for_each(|system| system.update(dt));
        return;
    }

    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for system in systems.iter_mut() {
        system.update(dt);
    }
}

/// Run one paint pass over every emitter
pub fn paint_all(systems: &mut [ParticleEmitter], parallel: bool) {
    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        systems.par_iter_mut().for_each(ParticleEmitter::paint);
        return;
    }

    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for system in systems.iter_mut() {
        system.paint();
    }
}

/// Run the full benchmark
pub fn run(config: &BenchConfig) -> Result<BenchReport> {
    config.validate()?;

    log::debug!(
        "Running {} systems for {} frames (dt {:.6}s, {} behavior{})",
        config.systems,
        config.frames,
        config.dt,
        config.behavior.label(),
        if config.parallel { ", parallel" } else { "" }
    );

    let start = Instant::now();
    let mut systems = create_systems(config);
    let creation = start.elapsed();
    log::info!("TIME creation {:.6}", creation.as_secs_f64());

    let start = Instant::now();
    for _ in 0..config.frames {
        update_all(&mut systems, config.dt, config.parallel);
    }
    let updates = start.elapsed();
    log::info!("TIME updates {:.6}", updates.as_secs_f64());

    let start = Instant::now();
    for _ in 0..config.frames {
        paint_all(&mut systems, config.parallel);
    }
    let matrices = start.elapsed();
    log::info!("TIME matrices {:.6}", matrices.as_secs_f64());

    let live_particles = systems.iter().map(ParticleEmitter::particle_count).sum();
    let emitted_particles = systems
        .iter()
        .map(ParticleEmitter::emitted_particles)
        .sum();

    Ok(BenchReport {
        creation,
        updates,
        matrices,
        systems: config.systems,
        frames: config.frames,
        live_particles,
        emitted_particles,
    })
}

//! CPU particle emitter simulation
//!
//! This crate provides a 2D particle emitter with leaky-bucket spawning,
//! radial and tangential acceleration, linear size and color interpolation,
//! and a per-frame transform pass. It is built to be driven in bulk by the
//! [`harness`] module, which times creating, updating and painting many
//! emitters.
//!
//! # Architecture
//!
//! - `EmitterConfig`: emission parameters with their random variances
//! - `ParticleEmitter`: runtime state for a single emitter
//! - `Particle`: position, direction, size, rotation, color and transform
//! - `CorrectedBehavior`: switches between the reference formulas and the
//!   conventional ones
//!
//! # Usage
//!
//! ```rust
//! use particle_sim::ParticleEmitter;
//!
//! let mut emitter = ParticleEmitter::create();
//! for _ in 0..60 {
//!     emitter.update(1.0 / 60.0);
//! }
//! emitter.paint();
//! assert!(emitter.particle_count() <= emitter.max_particles());
//! ```

pub mod behavior;
pub mod config;
pub mod emission;
pub mod emitter;
pub mod error;
pub mod harness;
pub mod math;
pub mod particle;
pub mod rng;

// Re-export common types
pub use behavior::CorrectedBehavior;
pub use config::EmitterConfig;
pub use emitter::ParticleEmitter;
pub use error::{ParticleError, Result};
pub use harness::{BenchConfig, BenchReport};
pub use particle::Particle;
pub use rng::ParticleRng;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

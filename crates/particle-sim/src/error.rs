use thiserror::Error;

/// Error types for emitter configuration and benchmark setup
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParticleError {
    /// Emitter parameter set failed validation
    #[error("Invalid emitter configuration: {0}")]
    InvalidConfig(String),

    /// Benchmark harness settings failed validation
    #[error("Invalid benchmark configuration: {0}")]
    InvalidBench(String),
}

/// Result type using ParticleError
pub type Result<T> = std::result::Result<T, ParticleError>;

//! Integration tests for the benchmark harness

use particle_sim::harness::{self, BenchConfig};
use particle_sim::{CorrectedBehavior, ParticleError};
use pretty_assertions::assert_eq;

#[test]
fn test_run_reports_phases() {
    let config = BenchConfig {
        systems: 20,
        frames: 200,
        seed: Some(7),
        ..Default::default()
    };
    let report = harness::run(&config).unwrap();

    assert_eq!(report.systems, 20);
    assert_eq!(report.frames, 200);
    assert_eq!(
        report.total(),
        report.creation + report.updates + report.matrices
    );
    assert!(report.live_particles <= 20 * 100);
    assert!(report.live_particles > 0);
}

#[test]
fn test_corrected_run_is_bounded() {
    let config = BenchConfig {
        systems: 10,
        frames: 300,
        seed: Some(3),
        behavior: CorrectedBehavior::CORRECTED,
        ..Default::default()
    };
    let report = harness::run(&config).unwrap();
    assert!(report.live_particles <= 10 * 100);
}

#[test]
fn test_update_then_paint_passes() {
    let config = BenchConfig {
        systems: 5,
        seed: Some(11),
        behavior: CorrectedBehavior::CORRECTED,
        ..Default::default()
    };
    let mut systems = harness::create_systems(&config);
    assert_eq!(systems.len(), 5);

    for _ in 0..120 {
        harness::update_all(&mut systems, config.dt, false);
    }
    harness::paint_all(&mut systems, false);

    for system in &systems {
        assert!(system.particle_count() <= system.max_particles());
        for particle in system.particles() {
            assert!(particle.transform.is_finite());
        }
    }
}

#[test]
fn test_invalid_config_rejected() {
    let config = BenchConfig {
        dt: -1.0,
        ..Default::default()
    };
    let err = harness::run(&config).unwrap_err();
    assert!(matches!(err, ParticleError::InvalidBench(_)));
}

#[cfg(not(feature = "parallel"))]
#[test]
fn test_parallel_requires_feature() {
    let config = BenchConfig {
        systems: 1,
        parallel: true,
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_matches_sequential() {
    let sequential = BenchConfig {
        systems: 16,
        frames: 150,
        seed: Some(5),
        ..Default::default()
    };
    let parallel = BenchConfig {
        parallel: true,
        ..sequential.clone()
    };

    let a = harness::run(&sequential).unwrap();
    let b = harness::run(&parallel).unwrap();
    assert_eq!(a.live_particles, b.live_particles);
    assert_eq!(a.emitted_particles, b.emitted_particles);
}

/// The reference workload: 1000 emitters, 1000 update frames, 1000 paint frames
#[test]
#[ignore = "reference workload, run with --release --ignored"]
fn test_reference_workload_bounded() {
    let config = BenchConfig {
        seed: Some(1),
        ..Default::default()
    };
    let report = harness::run(&config).unwrap();
    assert!(report.live_particles <= 1000 * 100);
}

//! Default emitter parameter display

use anyhow::{Context, Result};
use particle_sim::EmitterConfig;

use crate::cli::OutputFormat;
use crate::utils::field_table;

pub fn execute(format: OutputFormat) -> Result<()> {
    let config = EmitterConfig::default();

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&config).context("Failed to serialize parameters")?
        ),
        OutputFormat::Table => {
            println!("Default Emitter Parameters");
            println!("==========================");
            println!();
            field_table(["Parameter", "Value"], fields(&config)).printstd();
        }
    }

    Ok(())
}

fn fields(config: &EmitterConfig) -> Vec<(&'static str, String)> {
    let spread = |base: f32, variance: f32| format!("{base} ± {variance}");

    vec![
        ("lifetime", spread(config.lifetime, config.lifetime_variance)),
        (
            "position_variance",
            format!("({}, {})", config.position_variance.x, config.position_variance.y),
        ),
        ("start_size", spread(config.start_size, config.start_size_variance)),
        ("end_size", spread(config.end_size, config.end_size_variance)),
        (
            "start_rotation",
            spread(config.start_rotation, config.start_rotation_variance),
        ),
        (
            "end_rotation",
            spread(config.end_rotation, config.end_rotation_variance),
        ),
        ("direction", spread(config.direction, config.direction_variance)),
        ("speed", spread(config.speed, config.speed_variance)),
        (
            "radial_acceleration",
            spread(
                config.radial_acceleration,
                config.radial_acceleration_variance,
            ),
        ),
        (
            "tangential_acceleration",
            spread(
                config.tangential_acceleration,
                config.tangential_acceleration_variance,
            ),
        ),
        (
            "gravity",
            format!("({}, {})", config.gravity.x, config.gravity.y),
        ),
        ("max_particles", config.max_particles.to_string()),
        ("emission_rate", config.emission_rate.to_string()),
        (
            "particles_to_emit",
            if config.is_unlimited() {
                "unlimited".to_string()
            } else {
                config.particles_to_emit.to_string()
            },
        ),
    ]
}

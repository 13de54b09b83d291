//! Benchmark run command

use anyhow::{Context, Result};
use clap::Args;
use prettytable::{Cell, Row};
use serde::Serialize;

use particle_sim::harness::{self, DEFAULT_DT, DEFAULT_FRAMES, DEFAULT_SYSTEMS};
use particle_sim::{BenchConfig, BenchReport, CorrectedBehavior};

use crate::cli::OutputFormat;
use crate::utils::{create_spinner, create_table, field_table, format_duration, format_rate, format_seconds};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Number of emitters
    #[arg(short, long, default_value_t = DEFAULT_SYSTEMS)]
    pub systems: usize,

    /// Frames per phase
    #[arg(short, long, default_value_t = DEFAULT_FRAMES)]
    pub frames: usize,

    /// Frame step in seconds
    #[arg(long, default_value_t = DEFAULT_DT)]
    pub dt: f32,

    /// Seed for reproducible runs (emitter i uses seed + i)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use the conventional particle formulas instead of the reference ones
    #[arg(long)]
    pub corrected: bool,

    /// Spread each frame across emitters on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl RunArgs {
    fn bench_config(&self) -> BenchConfig {
        BenchConfig {
            systems: self.systems,
            frames: self.frames,
            dt: self.dt,
            seed: self.seed,
            behavior: if self.corrected {
                CorrectedBehavior::CORRECTED
            } else {
                CorrectedBehavior::FAITHFUL
            },
            parallel: self.parallel,
        }
    }
}

#[derive(Serialize)]
struct RunOutput<'a> {
    config: &'a BenchConfig,
    report: &'a BenchReport,
    seconds: PhaseSeconds,
}

#[derive(Serialize)]
struct PhaseSeconds {
    creation: f64,
    updates: f64,
    matrices: f64,
    total: f64,
}

impl From<&BenchReport> for PhaseSeconds {
    fn from(report: &BenchReport) -> Self {
        Self {
            creation: report.creation.as_secs_f64(),
            updates: report.updates.as_secs_f64(),
            matrices: report.matrices.as_secs_f64(),
            total: report.total().as_secs_f64(),
        }
    }
}

pub fn execute(args: &RunArgs, quiet: bool) -> Result<()> {
    let config = args.bench_config();
    config.validate().context("Invalid benchmark settings")?;

    let spinner = create_spinner(
        &format!(
            "Running {} systems x {} frames...",
            config.systems, config.frames
        ),
        quiet || args.format == OutputFormat::Json,
    );
    let report = harness::run(&config).context("Benchmark run failed")?;
    spinner.finish_and_clear();

    match args.format {
        OutputFormat::Json => {
            let output = RunOutput {
                config: &config,
                report: &report,
                seconds: PhaseSeconds::from(&report),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&output).context("Failed to serialize report")?
            );
        }
        OutputFormat::Table => print_report(&config, &report),
    }

    Ok(())
}

fn print_report(config: &BenchConfig, report: &BenchReport) {
    println!("Particle Benchmark");
    println!("==================");
    println!();

    field_table(
        ["Setting", "Value"],
        [
            ("Systems", config.systems.to_string()),
            ("Frames", config.frames.to_string()),
            ("Frame step", format!("{:.6} s", config.dt)),
            ("Behavior", config.behavior.label().to_string()),
            (
                "Seed",
                config
                    .seed
                    .map_or_else(|| "random".to_string(), |s| s.to_string()),
            ),
            ("Parallel", config.parallel.to_string()),
        ],
    )
    .printstd();
    println!();

    let emitter_frames = (report.systems as u64).saturating_mul(report.frames as u64);
    let mut phases = create_table(&["Phase", "Time", "Per frame", "Emitter frames"]);
    phases.add_row(Row::new(vec![
        Cell::new("creation"),
        Cell::new(&format_seconds(report.creation)),
        Cell::new("-"),
        Cell::new("-"),
    ]));
    phases.add_row(Row::new(vec![
        Cell::new("updates"),
        Cell::new(&format_seconds(report.updates)),
        Cell::new(&format_duration(report.update_frame())),
        Cell::new(&format_rate(emitter_frames, report.updates)),
    ]));
    phases.add_row(Row::new(vec![
        Cell::new("matrices"),
        Cell::new(&format_seconds(report.matrices)),
        Cell::new(&format_duration(report.paint_frame())),
        Cell::new(&format_rate(emitter_frames, report.matrices)),
    ]));
    phases.add_row(Row::new(vec![
        Cell::new("total").style_spec("b"),
        Cell::new(&format_seconds(report.total())),
        Cell::new("-"),
        Cell::new("-"),
    ]));
    phases.printstd();
    println!();

    println!("Live particles:    {}", report.live_particles);
    println!("Emitted particles: {}", report.emitted_particles);
}

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use warren_core::{init_logging, AppConfig, HistoryLogger, Metrics, World};
use warren_io::{ObservationRecorder, RunManifest};
use warren_lib::runner;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Override the configured random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the configured run length, in ticks
    #[arg(long)]
    ticks: Option<u64>,

    /// Directory for observation, event, and manifest output
    #[arg(short, long, default_value = "out")]
    output: String,

    /// Write plain JSONL observations instead of gzip
    #[arg(long)]
    no_compress: bool,
}

fn load_config(path: &str) -> Result<AppConfig> {
    if Path::new(path).exists() {
        let content = std::fs::read_to_string(path)?;
        AppConfig::from_toml(&content)
    } else {
        tracing::warn!(path = path, "Config file not found, using defaults");
        Ok(AppConfig::default())
    }
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = load_config(&args.config)?;
    if let Some(seed) = args.seed {
        config.world.seed = Some(seed);
    }
    if let Some(ticks) = args.ticks {
        config.world.duration_ticks = ticks;
    }

    let seed = config.world.seed.unwrap_or(0);
    let fingerprint = config.fingerprint();
    let duration_ticks = config.world.duration_ticks;
    let started_at = chrono::Utc::now().to_rfc3339();

    std::fs::create_dir_all(&args.output)?;
    let mut world = World::new(config)?;
    world.attach_logger(HistoryLogger::new_at(&args.output)?);

    let out_dir = Path::new(&args.output);
    let mut recorder = if args.no_compress {
        ObservationRecorder::create(out_dir.join("observations.jsonl"))?
    } else {
        ObservationRecorder::create_gz(out_dir.join("observations.jsonl.gz"))?
    };

    tracing::info!(
        seed = seed,
        population = world.population(),
        ticks = duration_ticks,
        "Starting run"
    );

    let metrics = Metrics::new();
    let outcome = runner::run(&mut world, Some(&mut recorder), &metrics)?;
    recorder.finish()?;

    let manifest = RunManifest {
        seed,
        config_fingerprint: fingerprint,
        duration_ticks,
        final_tick: outcome.final_tick,
        final_population: outcome.final_population,
        total_births: outcome.stats.births,
        total_deaths: outcome.stats.deaths,
        total_kills: outcome.stats.kills,
        started_at,
        finished_at: chrono::Utc::now().to_rfc3339(),
    };
    manifest.write(out_dir.join("run.json"))?;

    tracing::info!(
        final_tick = outcome.final_tick,
        population = outcome.final_population,
        births = outcome.stats.births,
        deaths = outcome.stats.deaths,
        kills = outcome.stats.kills,
        elapsed_ms = metrics.elapsed().as_millis() as u64,
        "Run finished"
    );

    Ok(())
}

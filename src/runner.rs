//! Headless run loop.
//!
//! Drives a world for the configured number of ticks, streams
//! observation rows to the recorder, and stops early the moment the
//! arena empties.

use std::time::Instant;

use warren_core::{Metrics, World};
use warren_data::PopulationStats;
use warren_io::ObservationRecorder;

/// Summary of one finished run.
#[derive(Debug, Clone, Copy)]
pub struct RunOutcome {
    pub final_tick: u64,
    pub final_population: usize,
    pub stats: PopulationStats,
}

/// Runs the world to its configured duration, or until extinction.
pub fn run(
    world: &mut World,
    mut recorder: Option<&mut ObservationRecorder>,
    metrics: &Metrics,
) -> anyhow::Result<RunOutcome> {
    let duration = world.config.world.duration_ticks;
    for _ in 0..duration {
        let started = Instant::now();
        let report = world.update()?;
        metrics.record_tick(started.elapsed(), world.population());

        if let Some(recorder) = recorder.as_deref_mut() {
            recorder.record_all(report.observations.iter())?;
        }

        if world.population() == 0 {
            tracing::info!(tick = world.tick, "Arena empty, stopping run");
            break;
        }
    }

    Ok(RunOutcome {
        final_tick: world.tick,
        final_population: world.population(),
        stats: world.stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use warren_core::AppConfig;

    #[test]
    fn run_honors_the_configured_duration() {
        let mut config = AppConfig::default();
        config.world.initial_prey_per_sex = 3;
        config.world.initial_predators_per_sex = 3;
        config.world.duration_ticks = 25;
        let mut world = World::new(config).unwrap();
        let metrics = Metrics::new();
        let outcome = run(&mut world, None, &metrics).unwrap();
        assert_eq!(outcome.final_tick, 25);
        assert_eq!(metrics.tick_count(), 25);
    }

    #[test]
    fn run_stops_at_extinction() {
        let mut config = AppConfig::default();
        config.world.initial_prey_per_sex = 1;
        config.world.initial_predators_per_sex = 0;
        config.prey.lifespan = 5;
        config.world.duration_ticks = 1000;
        let mut world = World::new(config).unwrap();
        let metrics = Metrics::new();
        let outcome = run(&mut world, None, &metrics).unwrap();
        assert_eq!(outcome.final_population, 0);
        assert!(outcome.final_tick <= 10);
    }
}

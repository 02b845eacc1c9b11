//! Event history: structured records of births, deaths, and population
//! snapshots, appended to a JSONL log for later aggregation.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use warren_data::{PopulationStats, SpeciesRole};

/// Why an agent left the population.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// Life depleted to zero.
    OldAge,
    /// Removed by a predator.
    Predation,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "event")]
pub enum LiveEvent {
    Birth {
        id: Uuid,
        parent_id: Option<Uuid>,
        role: SpeciesRole,
        tick: u64,
        timestamp: String,
    },
    Death {
        id: Uuid,
        role: SpeciesRole,
        cause: DeathCause,
        tick: u64,
        timestamp: String,
    },
    Extinction {
        tick: u64,
        timestamp: String,
    },
    Snapshot {
        tick: u64,
        stats: PopulationStats,
        timestamp: String,
    },
}

/// Append-only JSONL event log.
///
/// The dummy variant drops events; tests and library embedders use it to
/// run worlds without touching the filesystem.
pub struct HistoryLogger {
    live_file: Option<BufWriter<File>>,
    log_dir: String,
}

impl HistoryLogger {
    pub fn new_at(dir: &str) -> anyhow::Result<Self> {
        if !std::path::Path::new(dir).exists() {
            std::fs::create_dir_all(dir)?;
        }
        let file_path = format!("{dir}/live.jsonl");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;
        Ok(Self {
            live_file: Some(BufWriter::new(file)),
            log_dir: dir.to_string(),
        })
    }

    #[must_use]
    pub fn new_dummy() -> Self {
        Self {
            live_file: None,
            log_dir: String::new(),
        }
    }

    pub fn log_event(&mut self, event: &LiveEvent) -> anyhow::Result<()> {
        if let Some(ref mut file) = self.live_file {
            let json = serde_json::to_string(event)?;
            writeln!(file, "{json}")?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> anyhow::Result<()> {
        if let Some(ref mut file) = self.live_file {
            file.flush()?;
        }
        Ok(())
    }

    /// Reads back the population snapshots recorded so far.
    pub fn get_snapshots(&self) -> anyhow::Result<Vec<(u64, PopulationStats)>> {
        let file_path = format!("{}/live.jsonl", self.log_dir);
        let file = match File::open(file_path) {
            Ok(f) => f,
            Err(_) => return Ok(vec![]),
        };
        let reader = BufReader::new(file);
        let mut snapshots = Vec::new();
        for line in reader.lines().map_while(Result::ok) {
            if let Ok(LiveEvent::Snapshot { tick, stats, .. }) =
                serde_json::from_str::<LiveEvent>(&line)
            {
                snapshots.push((tick, stats));
            }
        }
        Ok(snapshots)
    }
}

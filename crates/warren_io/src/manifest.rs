//! Run manifest: the parameter echo written alongside result files so a
//! recorded run can always be matched to the configuration and seed
//! that produced it.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub seed: u64,
    pub config_fingerprint: String,
    pub duration_ticks: u64,
    pub final_tick: u64,
    pub final_population: usize,
    pub total_births: u64,
    pub total_deaths: u64,
    pub total_kills: u64,
    pub started_at: String,
    pub finished_at: String,
}

impl RunManifest {
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}

//! Observation recording.
//!
//! Streams per-tick per-agent rows to a JSONL file, optionally gzip
//! compressed. Long runs produce one row per agent per tick, so the
//! compressed form is the default for full experiments.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use warren_data::ObservationRow;

use crate::error::Result;

enum Sink {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl Sink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        match self {
            Sink::Plain(w) => writeln!(w, "{line}")?,
            Sink::Gzip(w) => writeln!(w, "{line}")?,
        }
        Ok(())
    }
}

/// Append-only writer for observation rows.
pub struct ObservationRecorder {
    sink: Sink,
    rows_written: u64,
}

impl ObservationRecorder {
    /// Creates a recorder writing plain JSONL.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            sink: Sink::Plain(BufWriter::new(file)),
            rows_written: 0,
        })
    }

    /// Creates a recorder writing gzip-compressed JSONL.
    pub fn create_gz<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            sink: Sink::Gzip(GzEncoder::new(BufWriter::new(file), Compression::default())),
            rows_written: 0,
        })
    }

    pub fn record(&mut self, row: &ObservationRow) -> Result<()> {
        let json = serde_json::to_string(row)?;
        self.sink.write_line(&json)?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn record_all<'a, I: IntoIterator<Item = &'a ObservationRow>>(
        &mut self,
        rows: I,
    ) -> Result<()> {
        for row in rows {
            self.record(row)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Flushes and closes the underlying file. Dropping without calling
    /// this can truncate the gzip trailer.
    pub fn finish(self) -> Result<()> {
        match self.sink {
            Sink::Plain(mut w) => w.flush()?,
            Sink::Gzip(w) => {
                w.finish()?.flush()?;
            }
        }
        Ok(())
    }
}

//! File output for warren runs: observation streams and run manifests.

pub mod error;
pub mod manifest;
pub mod recorder;

pub use error::{IoError, Result};
pub use manifest::RunManifest;
pub use recorder::ObservationRecorder;

//! Warren: a predator-prey arena simulation.
//!
//! The engine lives in `warren_core`; this crate wires configuration,
//! logging, and file output into a headless experiment runner.

pub mod runner;

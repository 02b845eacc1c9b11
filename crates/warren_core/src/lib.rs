//! # Warren Core
//!
//! The simulation engine for warren - a predator-prey arena simulation.
//!
//! This crate contains the deterministic simulation logic, including:
//! - Agent lifecycle management (birth, aging, death)
//! - Lifespan-driven kinematics and territorial homing
//! - Walkability-constrained movement with bounded retry
//! - Site effects (nests and forage patches)
//! - Predation and reproduction resolved from spatial proximity
//! - Spatial indexing, metrics collection, and structured logging
//!
//! ## Architecture
//!
//! The simulation is single-threaded and tick-driven:
//! - **Flat population**: agents live in a `Vec` updated in stable order
//! - **Deferred mutation**: interaction passes emit commands applied at
//!   tick boundaries, never mid-iteration
//! - **Deterministic simulation**: one seeded ChaCha8 stream per world,
//!   so replaying a seed reproduces identical outcomes
//!
//! ## Example
//!
//! ```
//! use warren_core::config::AppConfig;
//! use warren_core::world::World;
//!
//! let mut config = AppConfig::default();
//! config.world.initial_prey_per_sex = 2;
//! config.world.initial_predators_per_sex = 2;
//!
//! let mut world = World::new(config).unwrap();
//! let report = world.update().unwrap();
//! assert_eq!(report.observations.len(), 8);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Event history logging (births, deaths, snapshots)
pub mod history;
/// Deferred interaction commands applied at tick boundaries
pub mod interaction;
/// Lifespan-driven speed and heading model
pub mod kinematics;
/// Corridor arena construction
pub mod layout;
/// Agent creation and species parameters
pub mod lifecycle;
/// Performance metrics collection and logging
pub mod metrics;
/// Walkability grid and validated movement
pub mod nav;
/// Site registry (nests and forage patches)
pub mod sites;
/// Spatial hashing for proximity queries
pub mod spatial_hash;
/// Per-tick behavior systems (movement, sites, predation, reproduction)
pub mod systems;
/// World container and tick driver
pub mod world;

pub use config::AppConfig;
pub use history::{DeathCause, HistoryLogger, LiveEvent};
pub use metrics::{init_logging, Metrics};
pub use world::{TickReport, World};

//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration structures that map to the `config.toml`
//! file. All simulation parameters can be customized through this
//! configuration system.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! grid_cells = 30
//! seed = 13
//! duration_ticks = 6000
//!
//! [prey]
//! lifespan = 2000
//! food_gain = 20
//! ```

use serde::{Deserialize, Serialize};

/// World-level simulation configuration: arena dimensions, seeding, and
/// run length.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WorldConfig {
    /// Arena side length in grid cells.
    pub grid_cells: u16,
    /// Side length of one cell in world units.
    pub cell_size: f64,
    pub seed: Option<u64>,
    pub duration_ticks: u64,
    pub initial_prey_per_sex: usize,
    pub initial_predators_per_sex: usize,
    /// Radius of the proximity queries feeding the interaction rules,
    /// in world units.
    pub sensing_radius: f64,
    /// Interval between population snapshot events in the history log.
    pub snapshot_interval: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            grid_cells: 30,
            cell_size: 24.0,
            seed: Some(13),
            duration_ticks: 6000,
            initial_prey_per_sex: 20,
            initial_predators_per_sex: 20,
            sensing_radius: 10.0,
            snapshot_interval: 60,
        }
    }
}

/// Movement model parameters shared by both species.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct KinematicsConfig {
    pub v_min: f64,
    pub v_max: f64,
    /// Per-tick probability of a random wander turn while not homing.
    pub turn_chance: f64,
    /// Half-width of the wander turn, in degrees.
    pub turn_arc_degrees: f64,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            v_min: 1.0,
            v_max: 3.0,
            turn_chance: 0.05,
            turn_arc_degrees: 45.0,
        }
    }
}

/// Per-species lifespan and feeding parameters.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SpeciesConfig {
    /// Initial and maximum life, in ticks.
    pub lifespan: i64,
    /// Life granted per feed event (forage tick or kill).
    pub food_gain: i64,
}

/// Territorial homing thresholds, in grid-cell units.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HomingConfig {
    /// Life budget required per cell of distance before homing triggers.
    pub home_factor: f64,
    /// Distance at which homing triggers regardless of remaining life.
    pub far_cells: f64,
}

impl Default for HomingConfig {
    fn default() -> Self {
        Self {
            home_factor: 25.0,
            far_cells: 15.0,
        }
    }
}

/// Site geometry for the generated layout.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SitesConfig {
    pub nest_radius: f64,
    pub forage_radius: f64,
}

impl Default for SitesConfig {
    fn default() -> Self {
        Self {
            nest_radius: 96.0,
            forage_radius: 24.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub kinematics: KinematicsConfig,
    pub prey: SpeciesConfig,
    pub predator: SpeciesConfig,
    pub homing: HomingConfig,
    pub sites: SitesConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            kinematics: KinematicsConfig::default(),
            prey: SpeciesConfig {
                lifespan: 2000,
                food_gain: 20,
            },
            predator: SpeciesConfig {
                lifespan: 1000,
                food_gain: 50,
            },
            homing: HomingConfig::default(),
            sites: SitesConfig::default(),
        }
    }
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a
    /// description of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.world.grid_cells > 0, "Grid size must be positive");
        anyhow::ensure!(
            self.world.grid_cells <= 1000,
            "Grid size too large (max 1000)"
        );
        anyhow::ensure!(self.world.cell_size > 0.0, "Cell size must be positive");
        anyhow::ensure!(
            self.world.duration_ticks > 0,
            "Duration must be at least one tick"
        );
        anyhow::ensure!(
            self.world.initial_prey_per_sex <= 10000,
            "Initial prey count too large (max 10000 per sex)"
        );
        anyhow::ensure!(
            self.world.initial_predators_per_sex <= 10000,
            "Initial predator count too large (max 10000 per sex)"
        );
        anyhow::ensure!(
            self.world.sensing_radius > 0.0,
            "Sensing radius must be positive"
        );
        anyhow::ensure!(
            self.world.snapshot_interval > 0,
            "Snapshot interval must be positive"
        );

        anyhow::ensure!(self.kinematics.v_min > 0.0, "v_min must be positive");
        anyhow::ensure!(
            self.kinematics.v_max >= self.kinematics.v_min,
            "v_max must be at least v_min"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.kinematics.turn_chance),
            "Turn chance must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.kinematics.turn_arc_degrees >= 0.0,
            "Turn arc must be non-negative"
        );

        for (name, species) in [("prey", &self.prey), ("predator", &self.predator)] {
            anyhow::ensure!(species.lifespan > 0, "{name} lifespan must be positive");
            anyhow::ensure!(
                species.food_gain >= 0,
                "{name} food gain must be non-negative"
            );
        }

        anyhow::ensure!(
            self.homing.home_factor > 0.0,
            "Home factor must be positive"
        );
        anyhow::ensure!(self.homing.far_cells > 0.0, "Far distance must be positive");

        anyhow::ensure!(self.sites.nest_radius > 0.0, "Nest radius must be positive");
        anyhow::ensure!(
            self.sites.forage_radius > 0.0,
            "Forage radius must be positive"
        );

        Ok(())
    }

    /// Loads and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Stable digest of the behavior-relevant parameters, recorded into
    /// the run manifest so result files can be matched to the exact
    /// parameter set that produced them.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.kinematics).as_bytes());
        hasher.update(format!("{:?}", self.prey).as_bytes());
        hasher.update(format!("{:?}", self.predator).as_bytes());
        hasher.update(format!("{:?}", self.homing).as_bytes());
        hasher.update(format!("{:?}", self.sites).as_bytes());
        hex::encode(hasher.finalize())
    }
}

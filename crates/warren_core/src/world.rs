//! World container and tick driver.
//!
//! Owns the population, arena, and the one deterministic random stream.
//! Each update runs the behavior passes in a stable iteration order and
//! applies birth and removal only at the tick boundary, so the
//! population is never mutated while being iterated.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use warren_data::{Agent, ObservationRow, PopulationStats, Sex, SpeciesRole};

use crate::config::AppConfig;
use crate::history::{DeathCause, HistoryLogger, LiveEvent};
use crate::interaction::{self, InteractionContext};
use crate::layout::{self, Layout};
use crate::lifecycle;
use crate::spatial_hash::SpatialHash;
use crate::systems::movement::{self, MovementContext};
use crate::systems::reproduction::{self, ReproductionContext};
use crate::systems::{predation, site_effects};

/// Everything one tick produced: events for the history log and one
/// observation row per agent that was alive when the tick began.
pub struct TickReport {
    pub events: Vec<LiveEvent>,
    pub observations: Vec<ObservationRow>,
}

pub struct World {
    pub config: AppConfig,
    pub layout: Layout,
    pub agents: Vec<Agent>,
    pub tick: u64,
    pub stats: PopulationStats,
    logger: HistoryLogger,
    rng: ChaCha8Rng,
    spatial: SpatialHash,
    positions: Vec<(f64, f64)>,
    neighbor_buffer: Vec<(usize, f64)>,
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

impl World {
    /// Builds the arena and seeds the initial population from the
    /// sex-partitioned spawn pools.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let layout = layout::build_corridor(&config.world, &config.sites)?;
        let world_size = layout.nav.world_size();
        let mut world = Self {
            rng: ChaCha8Rng::seed_from_u64(config.world.seed.unwrap_or(0)),
            spatial: SpatialHash::new(config.world.cell_size, world_size, world_size),
            layout,
            agents: Vec::new(),
            tick: 0,
            stats: PopulationStats::default(),
            logger: HistoryLogger::new_dummy(),
            positions: Vec::new(),
            neighbor_buffer: Vec::new(),
            config,
        };

        let seeding = [
            (SpeciesRole::Prey, Sex::Female),
            (SpeciesRole::Prey, Sex::Male),
            (SpeciesRole::Predator, Sex::Male),
            (SpeciesRole::Predator, Sex::Female),
        ];
        for (role, sex) in seeding {
            let count = match role {
                SpeciesRole::Prey => world.config.world.initial_prey_per_sex,
                SpeciesRole::Predator => world.config.world.initial_predators_per_sex,
            };
            for _ in 0..count {
                world.spawn_seeded(role, sex);
            }
        }
        world.refresh_counts();
        Ok(world)
    }

    /// Routes history events to a real log instead of the default
    /// discarding logger.
    pub fn attach_logger(&mut self, logger: HistoryLogger) {
        self.logger = logger;
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.agents.len()
    }

    /// Spawns one agent at a random cell of its spawn pool.
    pub fn spawn_seeded(&mut self, role: SpeciesRole, sex: Sex) {
        let pool = self.layout.spawn_pool(role, sex);
        let (row, col) = pool[self.rng.gen_range(0..pool.len())];
        let position = self.layout.cell_origin(row, col);
        let home = self.layout.home_for(role, sex);
        let agent = lifecycle::spawn_agent(role, sex, position, home, None, &self.config, &mut self.rng);
        self.agents.push(agent);
    }

    /// Inserts an externally built agent; tests use this to stage exact
    /// scenarios.
    pub fn insert_agent(&mut self, agent: Agent) {
        self.agents.push(agent);
    }

    fn refresh_counts(&mut self) {
        let mut prey = 0;
        let mut predators = 0;
        for agent in &self.agents {
            match agent.role {
                SpeciesRole::Prey => prey += 1,
                SpeciesRole::Predator => predators += 1,
            }
        }
        self.stats.prey = prey;
        self.stats.predators = predators;
    }

    /// Advances the simulation by one tick.
    ///
    /// Pass order per agent: age decrement and death check, movement
    /// (homing decision, steering, speed, validated step), site effects,
    /// then the read-only predation and reproduction scans over the
    /// rebuilt spatial index. Commands collected by the scans are
    /// applied at the end, and dead agents leave the population before
    /// the tick returns.
    pub fn update(&mut self) -> anyhow::Result<TickReport> {
        self.tick += 1;
        let tick = self.tick;
        let mut events = Vec::new();

        // Aging, movement, and site effects: one mutable pass in stable
        // population order. Agents whose life hits zero run nothing
        // further this tick.
        let mut on_nest = vec![false; self.agents.len()];
        {
            let layout = &self.layout;
            let config = &self.config;
            let rng = &mut self.rng;
            for (idx, agent) in self.agents.iter_mut().enumerate() {
                agent.vitality.life -= 1;
                if agent.vitality.life <= 0 {
                    continue;
                }
                let mut ctx = MovementContext {
                    nav: &layout.nav,
                    prey_nest_cells: &layout.prey_nest_cells,
                    kinematics: &config.kinematics,
                    homing: &config.homing,
                    rng: &mut *rng,
                };
                movement::movement_system(agent, &mut ctx);
                let outcome = site_effects::site_effects_system(agent, &layout.sites, config);
                on_nest[idx] = outcome.on_own_nest;
            }
        }

        // Proximity interactions: read-only over post-move positions,
        // emitting deferred commands.
        self.positions.clear();
        self.positions
            .extend(self.agents.iter().map(|a| (a.position.x, a.position.y)));
        self.spatial.build(&self.positions);

        let mut commands = Vec::new();
        {
            let agents = &self.agents;
            let layout = &self.layout;
            let config = &self.config;
            let spatial = &self.spatial;
            let positions = &self.positions;
            let rng = &mut self.rng;
            let mut neighbors = std::mem::take(&mut self.neighbor_buffer);

            for (idx, agent) in agents.iter().enumerate() {
                if agent.vitality.life <= 0 {
                    continue;
                }
                neighbors.clear();
                spatial.query_exact(
                    agent.position.x,
                    agent.position.y,
                    config.world.sensing_radius,
                    positions,
                    &mut neighbors,
                );
                if let Some(cmd) = predation::predation_system(idx, agents, &neighbors) {
                    commands.push(cmd);
                }
                let mut ctx = ReproductionContext {
                    config,
                    layout,
                    rng: &mut *rng,
                };
                if let Some(cmd) =
                    reproduction::reproduction_system(idx, agents, &neighbors, &mut ctx)
                {
                    commands.push(cmd);
                }
            }
            self.neighbor_buffer = neighbors;
        }

        // Tick boundary: apply kills and births.
        let result = interaction::process_interaction_commands(
            &mut self.agents,
            commands,
            &InteractionContext {
                config: &self.config,
                tick,
            },
        );
        events.extend(result.events);

        for agent in &self.agents {
            if agent.vitality.life <= 0 {
                events.push(LiveEvent::Death {
                    id: agent.identity.id,
                    role: agent.role,
                    cause: DeathCause::OldAge,
                    tick,
                    timestamp: now(),
                });
            }
        }

        // One observation row per agent that started the tick, with the
        // interaction flags resolved after command processing.
        let observations = self
            .agents
            .iter()
            .enumerate()
            .map(|(idx, agent)| ObservationRow {
                tick,
                id: agent.identity.id,
                kind: agent.role,
                sex: agent.sex,
                life_left: agent.vitality.life.max(0),
                x: agent.position.x,
                y: agent.position.y,
                on_nest: on_nest[idx],
                kill: result.killer_ids.contains(&agent.identity.id),
                mated: result.parent_ids.contains(&agent.identity.id),
            })
            .collect();

        let before = self.agents.len();
        let killed = &result.killed_ids;
        self.agents
            .retain(|a| a.vitality.life > 0 && !killed.contains(&a.identity.id));
        let removed = before - self.agents.len();
        let births = result.newborn.len();
        self.agents.extend(result.newborn);

        self.refresh_counts();
        self.stats.births += births as u64;
        self.stats.deaths += removed as u64;
        self.stats.kills += result.killed_ids.len() as u64;

        if tick % self.config.world.snapshot_interval == 0 {
            events.push(LiveEvent::Snapshot {
                tick,
                stats: self.stats,
                timestamp: now(),
            });
        }
        if self.agents.is_empty() && removed > 0 {
            events.push(LiveEvent::Extinction {
                tick,
                timestamp: now(),
            });
        }

        for event in &events {
            self.logger.log_event(event)?;
        }

        Ok(TickReport {
            events,
            observations,
        })
    }
}

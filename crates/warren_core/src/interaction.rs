//! Deferred interaction commands.
//!
//! The read-only interaction passes emit commands; the tick driver
//! applies them here at the tick boundary so the population is never
//! mutated while it is being iterated. Kills are first-wins: a target
//! already claimed this tick cannot be claimed again, and the losing
//! attacker gains nothing.

use std::collections::HashSet;

use uuid::Uuid;
use warren_data::{Agent, SpeciesRole};

use crate::config::AppConfig;
use crate::history::{DeathCause, LiveEvent};

#[derive(Debug)]
pub enum InteractionCommand {
    Kill {
        target_idx: usize,
        attacker_idx: usize,
    },
    Birth {
        parent_idx: usize,
        child: Box<Agent>,
    },
}

pub struct InteractionContext<'a> {
    pub config: &'a AppConfig,
    pub tick: u64,
}

#[derive(Default)]
pub struct InteractionResult {
    pub events: Vec<LiveEvent>,
    /// Agents removed by predation this tick.
    pub killed_ids: HashSet<Uuid>,
    /// Attackers whose kill landed, for the tick's observation rows.
    pub killer_ids: HashSet<Uuid>,
    /// Parents whose mating succeeded, for the tick's observation rows.
    pub parent_ids: HashSet<Uuid>,
    pub newborn: Vec<Agent>,
}

pub fn process_interaction_commands(
    agents: &mut [Agent],
    commands: Vec<InteractionCommand>,
    ctx: &InteractionContext<'_>,
) -> InteractionResult {
    let mut result = InteractionResult::default();

    for cmd in commands {
        match cmd {
            InteractionCommand::Kill {
                target_idx,
                attacker_idx,
            } => {
                let target_id = agents[target_idx].identity.id;
                if result.killed_ids.contains(&target_id) {
                    continue;
                }
                result.killed_ids.insert(target_id);
                result.events.push(LiveEvent::Death {
                    id: target_id,
                    role: agents[target_idx].role,
                    cause: DeathCause::Predation,
                    tick: ctx.tick,
                    timestamp: chrono::Utc::now().to_rfc3339(),
                });

                let attacker = &mut agents[attacker_idx];
                let gain = match attacker.role {
                    SpeciesRole::Prey => ctx.config.prey.food_gain,
                    SpeciesRole::Predator => ctx.config.predator.food_gain,
                };
                attacker.vitality.feed(gain);
                result.killer_ids.insert(attacker.identity.id);
            }
            InteractionCommand::Birth { parent_idx, child } => {
                result.events.push(LiveEvent::Birth {
                    id: child.identity.id,
                    parent_id: child.identity.parent_id,
                    role: child.role,
                    tick: ctx.tick,
                    timestamp: chrono::Utc::now().to_rfc3339(),
                });
                result.parent_ids.insert(agents[parent_idx].identity.id);
                result.newborn.push(*child);
            }
        }
    }

    result
}

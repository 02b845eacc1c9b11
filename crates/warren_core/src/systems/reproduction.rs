//! Reproduction under life-scarcity pressure.
//!
//! One attempt per agent per tick: the first same-species, opposite-sex
//! partner at contact distance is evaluated, and the spawn fires with
//! probability `urgency^2` drawn from the shared stream. Mating
//! approaches certainty as the agent nears death and never fires at full
//! life. Prey do not mate while standing on their own nest.

use rand::Rng;
use warren_data::{Agent, SpeciesRole};

use crate::config::AppConfig;
use crate::interaction::InteractionCommand;
use crate::layout::Layout;
use crate::lifecycle;
use crate::systems::CONTACT_EPS;

pub struct ReproductionContext<'a, R: Rng> {
    pub config: &'a AppConfig,
    pub layout: &'a Layout,
    pub rng: &'a mut R,
}

/// Evaluates the acting agent's single mating attempt for this tick.
#[must_use]
pub fn reproduction_system<R: Rng>(
    actor_idx: usize,
    agents: &[Agent],
    neighbors: &[(usize, f64)],
    ctx: &mut ReproductionContext<'_, R>,
) -> Option<InteractionCommand> {
    let actor = &agents[actor_idx];

    // Nests are safe breeding ground only in the sense that no breeding
    // happens on them.
    if actor.role == SpeciesRole::Prey
        && ctx.layout.sites.on_nest_of(&actor.position, SpeciesRole::Prey)
    {
        return None;
    }

    neighbors.iter().find(|&&(other_idx, distance)| {
        if other_idx == actor_idx || distance > CONTACT_EPS {
            return false;
        }
        let other = &agents[other_idx];
        other.role == actor.role && other.sex != actor.sex && other.vitality.life > 0
    })?;

    let urgency = actor.vitality.urgency();
    if ctx.rng.gen::<f64>() < urgency * urgency {
        let child = lifecycle::spawn_child(actor, ctx.config, ctx.layout, ctx.rng);
        return Some(InteractionCommand::Birth {
            parent_idx: actor_idx,
            child: Box::new(child),
        });
    }
    None
}

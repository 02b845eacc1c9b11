//! Predation resolution.
//!
//! A predator scans its proximity set for the first prey at contact
//! distance and claims one kill at most per tick. The kill itself and
//! the attacker's life bonus are applied later by the command processor;
//! finding no target is a normal no-op.

use warren_data::{Agent, SpeciesRole};

use crate::interaction::InteractionCommand;
use crate::systems::CONTACT_EPS;

/// First-match kill claim for the acting predator, or `None`.
///
/// `neighbors` are `(index, distance)` pairs from the accuracy-tier
/// proximity query; ordering beyond first-match-wins is not relied on.
#[must_use]
pub fn predation_system(
    actor_idx: usize,
    agents: &[Agent],
    neighbors: &[(usize, f64)],
) -> Option<InteractionCommand> {
    if agents[actor_idx].role != SpeciesRole::Predator {
        return None;
    }
    for &(other_idx, distance) in neighbors {
        if other_idx == actor_idx || distance > CONTACT_EPS {
            continue;
        }
        let other = &agents[other_idx];
        if other.role == SpeciesRole::Prey && other.vitality.life > 0 {
            return Some(InteractionCommand::Kill {
                target_idx: other_idx,
                attacker_idx: actor_idx,
            });
        }
    }
    None
}

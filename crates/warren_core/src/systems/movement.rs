//! Steering and validated movement for one agent.
//!
//! Order within the pass: homing decision, steering (homing blend,
//! predator nest avoidance, or wander turn), speed renormalization, then
//! the walkability-checked step.

use std::collections::HashSet;

use rand::Rng;
use warren_data::{Agent, Heading, Position, SpeciesRole};

use crate::config::{HomingConfig, KinematicsConfig};
use crate::kinematics;
use crate::nav::NavGrid;

pub struct MovementContext<'a, R: Rng> {
    pub nav: &'a NavGrid,
    pub prey_nest_cells: &'a HashSet<(u16, u16)>,
    pub kinematics: &'a KinematicsConfig,
    pub homing: &'a HomingConfig,
    pub rng: &'a mut R,
}

/// Homing decision, evaluated once per tick before movement: commit to
/// returning home when the life budget still covers the trip back, or
/// when the agent has strayed too far regardless.
pub fn evaluate_homing(agent: &mut Agent, nav: &NavGrid, homing: &HomingConfig) {
    if agent.role != SpeciesRole::Prey {
        return;
    }
    let d = agent.position.distance_to(&agent.home) / nav.cell_size();
    if agent.vitality.life as f64 > d * homing.home_factor || d >= homing.far_cells {
        agent.returning_home = true;
    }
}

fn steer_home(agent: &mut Agent) {
    let to_home = Heading {
        dx: agent.home.x - agent.position.x,
        dy: agent.home.y - agent.position.y,
    };
    if to_home.is_zero() {
        return;
    }
    // Blend toward home but keep some of the previous heading, damping
    // abrupt direction reversals.
    let unit = to_home.scaled_to(1.0);
    agent.heading = Heading {
        dx: 0.7 * unit.dx + 0.3 * agent.heading.dx,
        dy: 0.7 * unit.dy + 0.3 * agent.heading.dy,
    };
}

fn avoid_prey_nests<R: Rng>(agent: &mut Agent, ctx: &MovementContext<'_, R>) {
    let next = Position {
        x: agent.position.x + agent.heading.dx,
        y: agent.position.y + agent.heading.dy,
    };
    let touches_nest = |pos: &Position| {
        ctx.nav
            .cell_of(pos)
            .is_some_and(|cell| ctx.prey_nest_cells.contains(&cell))
    };
    if touches_nest(&agent.position) || touches_nest(&next) {
        agent.heading = agent.heading.rotated(180.0);
    }
}

/// Full movement pass for one agent: decide homing, steer, renormalize
/// to the lifespan-driven speed, and commit a validated step.
pub fn movement_system<R: Rng>(agent: &mut Agent, ctx: &mut MovementContext<'_, R>) {
    evaluate_homing(agent, ctx.nav, ctx.homing);

    match agent.role {
        SpeciesRole::Prey => {
            if agent.returning_home {
                steer_home(agent);
            } else {
                kinematics::wander_turn(&mut agent.heading, ctx.kinematics, ctx.rng);
            }
        }
        SpeciesRole::Predator => {
            avoid_prey_nests(agent, ctx);
            kinematics::wander_turn(&mut agent.heading, ctx.kinematics, ctx.rng);
        }
    }

    kinematics::renormalize(&mut agent.heading, &agent.vitality, ctx.kinematics, ctx.rng);
    ctx.nav
        .attempt_move(&mut agent.position, &mut agent.heading, ctx.rng);
}

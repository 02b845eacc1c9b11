//! Agent creation and species parameter lookup.
//!
//! Birth initialization: sex and home territory come from the
//! sex-partitioned spawn rule, life starts at the species maximum, and
//! the initial heading is a uniform random direction. Identities are
//! drawn from the shared deterministic stream so replays reproduce the
//! same ids.

use rand::Rng;
use uuid::Uuid;
use warren_data::{Agent, Identity, Position, Sex, SpeciesRole, Vitality};

use crate::config::AppConfig;
use crate::kinematics;
use crate::layout::Layout;

#[must_use]
pub fn lifespan_for(role: SpeciesRole, config: &AppConfig) -> i64 {
    match role {
        SpeciesRole::Prey => config.prey.lifespan,
        SpeciesRole::Predator => config.predator.lifespan,
    }
}

#[must_use]
pub fn food_gain_for(role: SpeciesRole, config: &AppConfig) -> i64 {
    match role {
        SpeciesRole::Prey => config.prey.food_gain,
        SpeciesRole::Predator => config.predator.food_gain,
    }
}

/// Creates an agent at the given position with a full life budget and a
/// random heading.
pub fn spawn_agent<R: Rng>(
    role: SpeciesRole,
    sex: Sex,
    position: Position,
    home: Position,
    parent_id: Option<Uuid>,
    config: &AppConfig,
    rng: &mut R,
) -> Agent {
    let max_life = lifespan_for(role, config);
    Agent {
        identity: Identity {
            id: Uuid::from_u128(rng.gen()),
            parent_id,
        },
        position,
        heading: kinematics::random_heading(rng),
        vitality: Vitality {
            life: max_life,
            max_life,
        },
        sex,
        role,
        home,
        returning_home: false,
    }
}

/// Child spawn: at the parent's position, same species, random sex, and
/// the home territory the spawn rule assigns that sex.
pub fn spawn_child<R: Rng>(
    parent: &Agent,
    config: &AppConfig,
    layout: &Layout,
    rng: &mut R,
) -> Agent {
    let sex = if rng.gen_bool(0.5) {
        Sex::Female
    } else {
        Sex::Male
    };
    spawn_agent(
        parent.role,
        sex,
        parent.position,
        layout.home_for(parent.role, sex),
        Some(parent.identity.id),
        config,
        rng,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::build_corridor;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn spawned_agent_starts_at_full_life() {
        let config = AppConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let agent = spawn_agent(
            SpeciesRole::Prey,
            Sex::Female,
            Position { x: 48.0, y: 48.0 },
            Position { x: 120.0, y: 120.0 },
            None,
            &config,
            &mut rng,
        );
        assert_eq!(agent.vitality.life, config.prey.lifespan);
        assert_eq!(agent.vitality.life, agent.vitality.max_life);
        assert!(!agent.returning_home);
        assert!((agent.heading.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn species_parameters_resolve_by_role() {
        let config = AppConfig::default();
        assert_eq!(lifespan_for(SpeciesRole::Prey, &config), 2000);
        assert_eq!(lifespan_for(SpeciesRole::Predator, &config), 1000);
        assert_eq!(food_gain_for(SpeciesRole::Predator, &config), 50);
    }

    #[test]
    fn child_inherits_species_and_spawns_at_parent() {
        let config = AppConfig::default();
        let layout = build_corridor(&config.world, &config.sites).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let parent = spawn_agent(
            SpeciesRole::Predator,
            Sex::Male,
            Position { x: 300.0, y: 300.0 },
            layout.home_for(SpeciesRole::Predator, Sex::Male),
            None,
            &config,
            &mut rng,
        );
        let child = spawn_child(&parent, &config, &layout, &mut rng);
        assert_eq!(child.role, SpeciesRole::Predator);
        assert_eq!(child.position.x, 300.0);
        assert_eq!(child.identity.parent_id, Some(parent.identity.id));
        assert_eq!(child.vitality.life, config.predator.lifespan);
        assert_eq!(child.home, layout.home_for(SpeciesRole::Predator, child.sex));
    }

    #[test]
    fn identities_are_deterministic_under_a_fixed_seed() {
        let config = AppConfig::default();
        let spawn = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            spawn_agent(
                SpeciesRole::Prey,
                Sex::Male,
                Position { x: 0.0, y: 0.0 },
                Position { x: 0.0, y: 0.0 },
                None,
                &config,
                &mut rng,
            )
        };
        assert_eq!(spawn(7).identity.id, spawn(7).identity.id);
        assert_ne!(spawn(7).identity.id, spawn(8).identity.id);
    }
}

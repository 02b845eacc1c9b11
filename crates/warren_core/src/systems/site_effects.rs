//! Zone effects applied after movement.
//!
//! Membership is a single first-match lookup per tick: a forage patch
//! replenishes life every tick the agent stays inside (clamped to
//! `max_life`), and a prey standing on its species' nest has its homing
//! flag cleared.

use warren_data::{Agent, SiteId, SiteKind};

use crate::config::AppConfig;
use crate::sites::SiteRegistry;

/// Outcome of the site pass for one agent, kept for the tick's
/// observation row.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteOutcome {
    pub site: Option<SiteId>,
    pub on_own_nest: bool,
}

pub fn site_effects_system(
    agent: &mut Agent,
    sites: &SiteRegistry,
    config: &AppConfig,
) -> SiteOutcome {
    let Some(site_id) = sites.on_site(&agent.position) else {
        return SiteOutcome::default();
    };
    let Some(site) = sites.get(site_id) else {
        return SiteOutcome::default();
    };

    let mut outcome = SiteOutcome {
        site: Some(site_id),
        on_own_nest: false,
    };
    match site.kind {
        SiteKind::Forage => {
            let gain = match agent.role {
                warren_data::SpeciesRole::Prey => config.prey.food_gain,
                warren_data::SpeciesRole::Predator => config.predator.food_gain,
            };
            agent.vitality.feed(gain);
        }
        SiteKind::Nest { species } => {
            if species == agent.role {
                outcome.on_own_nest = true;
                agent.returning_home = false;
            }
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites::Site;
    use uuid::Uuid;
    use warren_data::{Heading, Identity, Position, Sex, SpeciesRole, Vitality};

    fn agent(role: SpeciesRole, life: i64) -> Agent {
        Agent {
            identity: Identity {
                id: Uuid::from_u128(2),
                parent_id: None,
            },
            position: Position { x: 100.0, y: 100.0 },
            heading: Heading { dx: 1.0, dy: 0.0 },
            vitality: Vitality {
                life,
                max_life: 2000,
            },
            sex: Sex::Male,
            role,
            home: Position { x: 100.0, y: 100.0 },
            returning_home: true,
        }
    }

    fn forage_registry() -> SiteRegistry {
        SiteRegistry::new(vec![Site {
            kind: SiteKind::Forage,
            center: Position { x: 100.0, y: 100.0 },
            radius: 30.0,
        }])
    }

    fn nest_registry(species: SpeciesRole) -> SiteRegistry {
        SiteRegistry::new(vec![Site {
            kind: SiteKind::Nest { species },
            center: Position { x: 100.0, y: 100.0 },
            radius: 30.0,
        }])
    }

    #[test]
    fn forage_feeds_every_tick_inside() {
        let sites = forage_registry();
        let config = AppConfig::default();
        let mut a = agent(SpeciesRole::Prey, 100);
        site_effects_system(&mut a, &sites, &config);
        assert_eq!(a.vitality.life, 120);
        site_effects_system(&mut a, &sites, &config);
        assert_eq!(a.vitality.life, 140);
    }

    #[test]
    fn forage_gain_clamps_at_max_life() {
        let sites = forage_registry();
        let config = AppConfig::default();
        let mut a = agent(SpeciesRole::Prey, 1995);
        site_effects_system(&mut a, &sites, &config);
        assert_eq!(a.vitality.life, 2000);
    }

    #[test]
    fn own_nest_clears_homing_flag() {
        let sites = nest_registry(SpeciesRole::Prey);
        let config = AppConfig::default();
        let mut a = agent(SpeciesRole::Prey, 100);
        let outcome = site_effects_system(&mut a, &sites, &config);
        assert!(outcome.on_own_nest);
        assert!(!a.returning_home);
    }

    #[test]
    fn foreign_nest_has_no_effect() {
        let sites = nest_registry(SpeciesRole::Prey);
        let config = AppConfig::default();
        let mut a = agent(SpeciesRole::Predator, 100);
        let outcome = site_effects_system(&mut a, &sites, &config);
        assert!(!outcome.on_own_nest);
        assert!(a.returning_home);
        assert_eq!(a.vitality.life, 100);
    }

    #[test]
    fn off_site_is_a_no_op() {
        let sites = forage_registry();
        let config = AppConfig::default();
        let mut a = agent(SpeciesRole::Prey, 100);
        a.position = Position { x: 500.0, y: 500.0 };
        let outcome = site_effects_system(&mut a, &sites, &config);
        assert!(outcome.site.is_none());
        assert_eq!(a.vitality.life, 100);
    }
}

use serde::{Deserialize, Serialize};

use super::agent::SpeciesRole;

/// Index of a site within the registry's construction order.
pub type SiteId = usize;

/// Category of a zone with positional effects on agents inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiteKind {
    /// Breeding territory of one species; clears the homing flag for its
    /// own prey and repels predators.
    Nest { species: SpeciesRole },
    /// Foraging patch granting life regeneration every tick inside.
    Forage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nest_kind_carries_species() {
        let kind = SiteKind::Nest {
            species: SpeciesRole::Prey,
        };
        assert_ne!(kind, SiteKind::Forage);
        assert_eq!(
            kind,
            SiteKind::Nest {
                species: SpeciesRole::Prey
            }
        );
    }
}

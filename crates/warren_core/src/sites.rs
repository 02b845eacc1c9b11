//! Site registry: nests and forage patches.
//!
//! An explicit immutable collection built at construction time and
//! queried read-only during simulation. Membership is a first-match scan
//! in registry order, so construction order decides ties between
//! overlapping zones.

use warren_data::{Position, SiteId, SiteKind, SpeciesRole};

/// A named zone with a center point and radius.
#[derive(Debug, Clone)]
pub struct Site {
    pub kind: SiteKind,
    pub center: Position,
    pub radius: f64,
}

impl Site {
    #[must_use]
    pub fn contains(&self, position: &Position) -> bool {
        self.center.distance_to(position) < self.radius
    }
}

/// Ordered, read-only collection of sites.
#[derive(Debug, Clone, Default)]
pub struct SiteRegistry {
    sites: Vec<Site>,
}

impl SiteRegistry {
    #[must_use]
    pub fn new(sites: Vec<Site>) -> Self {
        Self { sites }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: SiteId) -> Option<&Site> {
        self.sites.get(id)
    }

    /// First site containing the position, in registry order.
    #[must_use]
    pub fn on_site(&self, position: &Position) -> Option<SiteId> {
        self.sites.iter().position(|site| site.contains(position))
    }

    /// Whether the position lies inside any nest of the given species.
    #[must_use]
    pub fn on_nest_of(&self, position: &Position, species: SpeciesRole) -> bool {
        self.sites
            .iter()
            .any(|site| site.kind == SiteKind::Nest { species } && site.contains(position))
    }

    pub fn iter(&self) -> impl Iterator<Item = (SiteId, &Site)> {
        self.sites.iter().enumerate()
    }
}

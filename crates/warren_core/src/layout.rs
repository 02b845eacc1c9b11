//! Corridor arena builder.
//!
//! Four square nests in the corners, a centered hub, and 3-cell
//! corridors joining them; every other cell is wall. Built once at
//! construction; the resulting grid, site registry, and spawn pools are
//! read-only afterwards.

use std::collections::HashSet;

use warren_data::{Position, Sex, SiteKind, SpeciesRole};

use crate::config::{SitesConfig, WorldConfig};
use crate::nav::NavGrid;
use crate::sites::{Site, SiteRegistry};

/// Side length of a nest block, in cells.
pub const NEST: u16 = 8;
/// Side length of the central hub, in cells.
pub const HUB: u16 = 12;
/// Width of the connecting corridors, in cells.
pub const CORR: u16 = 3;

/// Static arena geometry: walkability, sites, spawn pools, and home
/// territories.
#[derive(Debug, Clone)]
pub struct Layout {
    pub nav: NavGrid,
    pub sites: SiteRegistry,
    /// Cells belonging to a prey nest block; predators reverse heading
    /// on contact with these.
    pub prey_nest_cells: HashSet<(u16, u16)>,
    prey_female_pool: Vec<(u16, u16)>,
    prey_male_pool: Vec<(u16, u16)>,
    predator_female_pool: Vec<(u16, u16)>,
    predator_male_pool: Vec<(u16, u16)>,
    prey_female_home: Position,
    prey_male_home: Position,
    predator_female_home: Position,
    predator_male_home: Position,
}

impl Layout {
    /// Sex-partitioned spawn pool for the given species.
    #[must_use]
    pub fn spawn_pool(&self, role: SpeciesRole, sex: Sex) -> &[(u16, u16)] {
        match (role, sex) {
            (SpeciesRole::Prey, Sex::Female) => &self.prey_female_pool,
            (SpeciesRole::Prey, Sex::Male) => &self.prey_male_pool,
            (SpeciesRole::Predator, Sex::Female) => &self.predator_female_pool,
            (SpeciesRole::Predator, Sex::Male) => &self.predator_male_pool,
        }
    }

    /// Home-territory center assigned at birth for the given species and
    /// sex.
    #[must_use]
    pub fn home_for(&self, role: SpeciesRole, sex: Sex) -> Position {
        match (role, sex) {
            (SpeciesRole::Prey, Sex::Female) => self.prey_female_home,
            (SpeciesRole::Prey, Sex::Male) => self.prey_male_home,
            (SpeciesRole::Predator, Sex::Female) => self.predator_female_home,
            (SpeciesRole::Predator, Sex::Male) => self.predator_male_home,
        }
    }

    /// Continuous position at the origin corner of a cell.
    #[must_use]
    pub fn cell_origin(&self, row: u16, col: u16) -> Position {
        Position {
            x: f64::from(col) * self.nav.cell_size(),
            y: f64::from(row) * self.nav.cell_size(),
        }
    }
}

/// Builds the corridor arena for the configured grid size.
///
/// The geometry only stays connected for grid sizes where the corridors
/// reach the nest blocks, hence the bounds check.
pub fn build_corridor(world: &WorldConfig, sites_cfg: &SitesConfig) -> anyhow::Result<Layout> {
    let grid = world.grid_cells;
    anyhow::ensure!(
        grid >= 2 * (NEST + 1),
        "corridor layout needs at least {} cells, got {grid}",
        2 * (NEST + 1)
    );
    anyhow::ensure!(
        grid <= HUB + 2 * (CORR + NEST + 1),
        "corridor layout disconnects beyond {} cells, got {grid}",
        HUB + 2 * (CORR + NEST + 1)
    );

    let cell = world.cell_size;
    let tl = 1u16;
    let br = grid - NEST - 1;
    let hub0 = (grid - HUB) / 2;
    let hub1 = hub0 + HUB - 1;

    let in_nest = |r: u16, c: u16, nr: u16, nc: u16| {
        r >= nr && r < nr + NEST && c >= nc && c < nc + NEST
    };

    let mut nav = NavGrid::new(grid, cell);
    let mut prey_nest_cells = HashSet::new();
    for r in 0..grid {
        for c in 0..grid {
            let in_tl = in_nest(r, c, tl, tl);
            let in_tr = in_nest(r, c, tl, br);
            let in_bl = in_nest(r, c, br, tl);
            let in_br = in_nest(r, c, br, br);
            let in_hub = r >= hub0 && r <= hub1 && c >= hub0 && c <= hub1;
            let in_top = r >= hub0 - CORR && r < hub0 && c >= hub0 && c <= hub1;
            let in_bottom = r > hub1 && r <= hub1 + CORR && c >= hub0 && c <= hub1;
            let in_left = c >= hub0 - CORR && c < hub0 && r >= hub0 && r <= hub1;
            let in_right = c > hub1 && c <= hub1 + CORR && r >= hub0 && r <= hub1;

            let walkable =
                in_tl || in_tr || in_bl || in_br || in_hub || in_top || in_bottom || in_left
                    || in_right;
            nav.set_walkable(r, c, walkable);

            // Prey nest in the top-left and bottom-right corners.
            if in_tl || in_br {
                prey_nest_cells.insert((r, c));
            }
        }
    }

    // Inner cores of the nests seed the sex-partitioned spawn pools.
    let core = |n0: u16| (n0 + 1)..(n0 + 1 + NEST - 2);
    let pool = |rows: std::ops::Range<u16>, cols: std::ops::Range<u16>| {
        let mut cells = Vec::new();
        for r in rows {
            for c in cols.clone() {
                cells.push((r, c));
            }
        }
        cells
    };

    let half = f64::from(NEST) / 2.0;
    let nest_center = |n0: u16| (f64::from(n0) + half) * cell;
    let tl_center = Position {
        x: nest_center(tl),
        y: nest_center(tl),
    };
    let br_center = Position {
        x: nest_center(br),
        y: nest_center(br),
    };
    let bl_center = Position {
        x: nest_center(tl),
        y: nest_center(br),
    };
    let tr_center = Position {
        x: nest_center(br),
        y: nest_center(tl),
    };

    // Prey nests first, then forage: registry order decides first-match
    // ties where a forage patch overlaps a nest.
    let mut sites = vec![
        Site {
            kind: SiteKind::Nest {
                species: SpeciesRole::Prey,
            },
            center: tl_center,
            radius: sites_cfg.nest_radius,
        },
        Site {
            kind: SiteKind::Nest {
                species: SpeciesRole::Prey,
            },
            center: br_center,
            radius: sites_cfg.nest_radius,
        },
        Site {
            kind: SiteKind::Forage,
            center: tl_center,
            radius: sites_cfg.forage_radius,
        },
        Site {
            kind: SiteKind::Forage,
            center: br_center,
            radius: sites_cfg.forage_radius,
        },
    ];
    let mid = grid / 2;
    for dc in [0i32, -1] {
        for dr in [0i32, -1] {
            sites.push(Site {
                kind: SiteKind::Forage,
                center: Position {
                    x: f64::from(i32::from(mid) + dc) * cell,
                    y: f64::from(i32::from(mid) + dr) * cell,
                },
                radius: sites_cfg.forage_radius,
            });
        }
    }

    Ok(Layout {
        nav,
        sites: SiteRegistry::new(sites),
        prey_nest_cells,
        prey_female_pool: pool(core(tl), core(tl)),
        prey_male_pool: pool(core(br), core(br)),
        predator_male_pool: pool(core(br), core(tl)),
        predator_female_pool: pool(core(tl), core(br)),
        prey_female_home: tl_center,
        prey_male_home: br_center,
        predator_male_home: bl_center,
        predator_female_home: tr_center,
    })
}

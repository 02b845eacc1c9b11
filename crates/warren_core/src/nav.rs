//! Walkability grid and validated movement.
//!
//! A fixed boolean matrix over discretized cells, built once at layout
//! time and read-only during simulation. Attempted moves either commit,
//! retry with a fresh random direction, or stall the agent for a tick.

use rand::Rng;
use warren_data::{Heading, Position};

use crate::kinematics;

/// Retry bound for repairing a blocked step. Bounded so a move attempt
/// never blocks indefinitely in locally dense obstacle configurations.
pub const MAX_RETRIES: usize = 5;

/// Boolean walkability matrix over square cells.
#[derive(Debug, Clone)]
pub struct NavGrid {
    walkable: Vec<bool>,
    grid_cells: u16,
    cell_size: f64,
}

impl NavGrid {
    /// Builds a grid with every cell initially unwalkable.
    #[must_use]
    pub fn new(grid_cells: u16, cell_size: f64) -> Self {
        Self {
            walkable: vec![false; grid_cells as usize * grid_cells as usize],
            grid_cells,
            cell_size,
        }
    }

    #[must_use]
    pub fn grid_cells(&self) -> u16 {
        self.grid_cells
    }

    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// World-unit side length of the arena.
    #[must_use]
    pub fn world_size(&self) -> f64 {
        f64::from(self.grid_cells) * self.cell_size
    }

    pub fn set_walkable(&mut self, row: u16, col: u16, value: bool) {
        let idx = row as usize * self.grid_cells as usize + col as usize;
        self.walkable[idx] = value;
    }

    /// Discretizes a continuous position into `(row, col)`, or `None`
    /// outside the arena.
    #[must_use]
    pub fn cell_of(&self, position: &Position) -> Option<(u16, u16)> {
        if !position.x.is_finite() || !position.y.is_finite() {
            return None;
        }
        if position.x < 0.0 || position.y < 0.0 {
            return None;
        }
        let col = (position.x / self.cell_size) as i64;
        let row = (position.y / self.cell_size) as i64;
        if col >= i64::from(self.grid_cells) || row >= i64::from(self.grid_cells) {
            return None;
        }
        Some((row as u16, col as u16))
    }

    /// O(1) walkability lookup; positions outside the grid bounds are
    /// not walkable.
    #[must_use]
    pub fn is_walkable(&self, position: &Position) -> bool {
        match self.cell_of(position) {
            Some((row, col)) => {
                self.walkable[row as usize * self.grid_cells as usize + col as usize]
            }
            None => false,
        }
    }

    /// Validates and commits one step.
    ///
    /// The candidate `position + heading` commits if walkable. Otherwise
    /// up to [`MAX_RETRIES`] fresh random directions are tried at the
    /// same speed, and the first walkable candidate commits. If all
    /// retries fail the heading resets to zero and the position is left
    /// unchanged: the agent stalls this tick and resumes normally once a
    /// later tick samples a valid direction.
    pub fn attempt_move<R: Rng>(&self, position: &mut Position, heading: &mut Heading, rng: &mut R) {
        if heading.is_zero() {
            return;
        }
        let speed = heading.length();

        let candidate = Position {
            x: position.x + heading.dx,
            y: position.y + heading.dy,
        };
        if self.is_walkable(&candidate) {
            *position = candidate;
            return;
        }

        for _ in 0..MAX_RETRIES {
            let retry = kinematics::random_heading(rng).scaled_to(speed);
            let candidate = Position {
                x: position.x + retry.dx,
                y: position.y + retry.dy,
            };
            if self.is_walkable(&candidate) {
                *heading = retry;
                *position = candidate;
                return;
            }
        }

        *heading = Heading::ZERO;
    }
}

use serde::{Deserialize, Serialize};

/// Aggregate population counters for one tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PopulationStats {
    pub prey: usize,
    pub predators: usize,
    pub births: u64,
    pub deaths: u64,
    pub kills: u64,
}

impl PopulationStats {
    #[must_use]
    pub fn total(&self) -> usize {
        self.prey + self.predators
    }
}

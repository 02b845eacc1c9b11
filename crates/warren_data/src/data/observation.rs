use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::agent::{Sex, SpeciesRole};

/// One per-agent record emitted every tick for later aggregation into
/// population-over-time series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationRow {
    pub tick: u64,
    pub id: Uuid,
    pub kind: SpeciesRole,
    pub sex: Sex,
    pub life_left: i64,
    pub x: f64,
    pub y: f64,
    pub on_nest: bool,
    pub kill: bool,
    pub mated: bool,
}

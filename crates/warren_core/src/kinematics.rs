//! Lifespan-driven movement model.
//!
//! Agents speed up as their remaining life depletes: speed follows
//! `v_min + urgency^2 * (v_max - v_min)`, so the increase is biased
//! toward the end of life rather than linear. A zero-length heading is
//! not an error; it is recovered by sampling a fresh random direction.

use rand::Rng;
use warren_data::{Heading, Vitality};

use crate::config::KinematicsConfig;

/// Instantaneous speed for the given remaining-lifespan fraction.
///
/// Monotonically non-decreasing as `life` drops toward 0 for any fixed
/// `v_min <= v_max`.
#[must_use]
pub fn speed_for(vitality: &Vitality, kinematics: &KinematicsConfig) -> f64 {
    let urgency = vitality.urgency();
    kinematics.v_min + urgency * urgency * (kinematics.v_max - kinematics.v_min)
}

/// Uniform random unit heading over [0deg, 360deg).
pub fn random_heading<R: Rng>(rng: &mut R) -> Heading {
    Heading::from_angle(rng.gen_range(0.0..360.0))
}

/// Rescales the heading to the agent's current speed, resampling a
/// random direction first if the heading has degenerated to zero.
pub fn renormalize<R: Rng>(
    heading: &mut Heading,
    vitality: &Vitality,
    kinematics: &KinematicsConfig,
    rng: &mut R,
) {
    if heading.is_zero() {
        *heading = random_heading(rng);
    }
    *heading = heading.scaled_to(speed_for(vitality, kinematics));
}

/// Random wander turn: with probability `turn_chance`, rotate the
/// heading by a uniform angle within +/- `turn_arc_degrees`.
pub fn wander_turn<R: Rng>(heading: &mut Heading, kinematics: &KinematicsConfig, rng: &mut R) {
    if heading.is_zero() || kinematics.turn_arc_degrees == 0.0 {
        return;
    }
    if rng.gen::<f64>() < kinematics.turn_chance {
        let arc = kinematics.turn_arc_degrees;
        *heading = heading.rotated(rng.gen_range(-arc..arc));
    }
}

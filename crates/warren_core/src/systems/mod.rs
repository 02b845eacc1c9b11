//! Per-tick behavior systems.
//!
//! The movement and site passes mutate one agent at a time; the
//! predation and reproduction passes only read the population and emit
//! [`crate::interaction::InteractionCommand`]s, which the tick driver
//! applies at the tick boundary.

pub mod movement;
pub mod predation;
pub mod reproduction;
pub mod site_effects;

/// Distance at or below which two agents count as touching. Interaction
/// rules (predation, mating) only fire at contact.
pub const CONTACT_EPS: f64 = 1e-9;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// World position of an agent, in continuous coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Movement direction with speed encoded in the vector length.
///
/// A zero-length heading means the agent is stalled this tick; the
/// kinematics pass resamples a fresh direction on the next tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Heading {
    pub dx: f64,
    pub dy: f64,
}

impl Heading {
    pub const ZERO: Heading = Heading { dx: 0.0, dy: 0.0 };

    #[must_use]
    pub fn length(&self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }

    /// Returns this heading rescaled to the given length.
    ///
    /// The zero vector has no direction and is returned unchanged.
    #[must_use]
    pub fn scaled_to(&self, speed: f64) -> Heading {
        let len = self.length();
        if len == 0.0 {
            return *self;
        }
        Heading {
            dx: self.dx / len * speed,
            dy: self.dy / len * speed,
        }
    }

    /// Returns this heading rotated counter-clockwise by `degrees`.
    #[must_use]
    pub fn rotated(&self, degrees: f64) -> Heading {
        let rad = degrees.to_radians();
        let (sin, cos) = rad.sin_cos();
        Heading {
            dx: self.dx * cos - self.dy * sin,
            dy: self.dx * sin + self.dy * cos,
        }
    }

    /// Unit heading pointing at `angle_degrees` from the positive x axis.
    #[must_use]
    pub fn from_angle(angle_degrees: f64) -> Heading {
        let rad = angle_degrees.to_radians();
        Heading {
            dx: rad.cos(),
            dy: rad.sin(),
        }
    }
}

/// Biological sex, fixed at birth; used only for mating eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
}

/// Species role tag deciding which interaction rules apply.
///
/// Compared directly; neighbor species are never inferred from types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeciesRole {
    Prey,
    Predator,
}

/// Remaining and maximum lifespan, in ticks.
///
/// `life` only decreases except for explicit feed events, which clamp to
/// `max_life`. An agent with `life <= 0` is dead and removed this tick.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vitality {
    pub life: i64,
    pub max_life: i64,
}

impl Vitality {
    /// `1 - life/max_life`, clamped to [0, 1]. Rises toward 1 as the
    /// agent nears death; drives both speed and mating probability.
    #[must_use]
    pub fn urgency(&self) -> f64 {
        (1.0 - self.life as f64 / self.max_life as f64).clamp(0.0, 1.0)
    }

    /// Feed event: gain `amount` of life, capped at `max_life`.
    pub fn feed(&mut self, amount: i64) {
        self.life = (self.life + amount).min(self.max_life);
    }
}

/// Unique identification of an agent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
}

/// One living individual, prey or predator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub identity: Identity,
    pub position: Position,
    pub heading: Heading,
    pub vitality: Vitality,
    pub sex: Sex,
    pub role: SpeciesRole,
    /// Nest-center territory assigned at birth; immutable afterwards.
    pub home: Position,
    pub returning_home: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_scaled_to_preserves_direction() {
        let h = Heading { dx: 3.0, dy: 4.0 }.scaled_to(10.0);
        assert!((h.length() - 10.0).abs() < 1e-12);
        assert!((h.dx / h.dy - 0.75).abs() < 1e-12);
    }

    #[test]
    fn zero_heading_stays_zero_when_scaled() {
        let h = Heading::ZERO.scaled_to(5.0);
        assert!(h.is_zero());
    }

    #[test]
    fn rotated_half_turn_reverses() {
        let h = Heading { dx: 1.0, dy: 0.0 }.rotated(180.0);
        assert!((h.dx + 1.0).abs() < 1e-12);
        assert!(h.dy.abs() < 1e-12);
    }

    #[test]
    fn urgency_spans_unit_interval() {
        let full = Vitality {
            life: 100,
            max_life: 100,
        };
        let spent = Vitality {
            life: 0,
            max_life: 100,
        };
        assert_eq!(full.urgency(), 0.0);
        assert_eq!(spent.urgency(), 1.0);
    }

    #[test]
    fn feed_clamps_at_max_life() {
        let mut v = Vitality {
            life: 90,
            max_life: 100,
        };
        v.feed(50);
        assert_eq!(v.life, 100);
    }

    #[test]
    fn agent_round_trips_through_json() {
        let agent = Agent {
            identity: Identity {
                id: Uuid::from_u128(7),
                parent_id: None,
            },
            position: Position { x: 48.0, y: 48.0 },
            heading: Heading { dx: 1.0, dy: 0.0 },
            vitality: Vitality {
                life: 2000,
                max_life: 2000,
            },
            sex: Sex::Female,
            role: SpeciesRole::Prey,
            home: Position { x: 120.0, y: 120.0 },
            returning_home: false,
        };
        let json = serde_json::to_string(&agent).unwrap();
        let back: Agent = serde_json::from_str(&json).unwrap();
        assert_eq!(back.identity.id, agent.identity.id);
        assert_eq!(back.role, SpeciesRole::Prey);
    }
}

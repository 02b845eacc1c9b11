use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;
use warren_core::config::AppConfig;
use warren_core::world::World;
use warren_data::{Agent, Heading, Identity, Position, Sex, SpeciesRole, Vitality};

#[allow(dead_code)]
pub struct WorldBuilder {
    config: AppConfig,
    agents: Vec<Agent>,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.initial_prey_per_sex = 0;
        config.world.initial_predators_per_sex = 0;
        Self {
            config,
            agents: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn build(self) -> World {
        let mut world = World::new(self.config).expect("Failed to create world in test builder");
        for agent in self.agents {
            world.insert_agent(agent);
        }
        world
    }
}

#[allow(dead_code)]
pub struct AgentBuilder {
    id: Option<Uuid>,
    x: f64,
    y: f64,
    life: i64,
    max_life: i64,
    sex: Sex,
    role: SpeciesRole,
    home: Option<Position>,
    heading: Heading,
    returning_home: bool,
}

#[allow(dead_code)]
impl AgentBuilder {
    pub fn prey() -> Self {
        Self {
            id: None,
            // Hub center of the default layout: walkable, off-nest.
            x: 360.0,
            y: 360.0,
            life: 2000,
            max_life: 2000,
            sex: Sex::Female,
            role: SpeciesRole::Prey,
            home: None,
            heading: Heading { dx: 1.0, dy: 0.0 },
            returning_home: false,
        }
    }

    pub fn predator() -> Self {
        Self {
            life: 1000,
            max_life: 1000,
            sex: Sex::Male,
            role: SpeciesRole::Predator,
            ..Self::prey()
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn life(mut self, life: i64) -> Self {
        self.life = life;
        self
    }

    pub fn max_life(mut self, max_life: i64) -> Self {
        self.max_life = max_life;
        self
    }

    pub fn sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    pub fn home(mut self, x: f64, y: f64) -> Self {
        self.home = Some(Position { x, y });
        self
    }

    pub fn heading(mut self, dx: f64, dy: f64) -> Self {
        self.heading = Heading { dx, dy };
        self
    }

    pub fn returning_home(mut self) -> Self {
        self.returning_home = true;
        self
    }

    pub fn build(self) -> Agent {
        // Deterministic fallback id derived from the coordinates so
        // staged scenarios stay reproducible.
        let id = self.id.unwrap_or_else(|| {
            let seed = (self.x.to_bits() ^ self.y.to_bits().rotate_left(17))
                .wrapping_mul(0x517CC1B727220A95);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            Uuid::from_u128(rand::Rng::gen(&mut rng))
        });
        let position = Position {
            x: self.x,
            y: self.y,
        };
        Agent {
            identity: Identity {
                id,
                parent_id: None,
            },
            position,
            heading: self.heading,
            vitality: Vitality {
                life: self.life,
                max_life: self.max_life,
            },
            sex: self.sex,
            role: self.role,
            home: self.home.unwrap_or(position),
            returning_home: self.returning_home,
        }
    }
}

use std::fmt;

use anyhow::Result;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::camera::Camera;
use crate::config::GameConfig;
use crate::constants::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::core::passengers::{self, Delivery};
use crate::core::{integrate, Fuel};
use crate::geometry::Position;
use crate::input::InputState;
use crate::statistics::SessionStats;
use crate::vehicle::Vehicle;
use crate::world::World;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    OutOfFuel,
    OutOfTime,
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverReason::OutOfFuel => write!(f, "out of fuel"),
            GameOverReason::OutOfTime => write!(f, "out of time"),
        }
    }
}

/// Everything that happened during one tick, for the caller to react to.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickEvents {
    pub picked_up: Option<usize>,
    pub delivered: Option<Delivery>,
    pub respawned: usize,
    pub off_road: bool,
    pub hit_obstacle: bool,
    pub game_over: Option<GameOverReason>,
}

/// Read-only view handed to the presentation layer once per frame.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub world: &'a World,
    pub vehicle: &'a Vehicle,
    pub camera: Camera,
    pub score: u32,
    pub fuel: f32,
    pub time_left: u32,
    pub level: u32,
    pub picked: bool,
    pub game_over: bool,
}

impl Snapshot<'_> {
    /// Destination of the passenger currently on board, if any.
    pub fn carried_destination(&self) -> Option<Position> {
        let carried = self.world.carried_passenger()?;
        self.world.stops.get(carried.destination).map(|stop| stop.position)
    }
}

/// One play-through: owns the world, the taxi and the scoreboard.
pub struct Session {
    config: GameConfig,
    world: World,
    vehicle: Vehicle,
    camera: Camera,
    fuel: Fuel,
    score: u32,
    time_left: u32,
    level: u32,
    phase: Phase,
    end_reason: Option<GameOverReason>,
    stats: SessionStats,
    rng: ChaCha8Rng,
}

impl Session {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let world = World::init(config.starting_level, &mut rng);
        let vehicle = Vehicle::new(config.spawn, config.tuning);
        let camera = Camera::follow(&vehicle.position, world.bounds(), (VIEWPORT_WIDTH, VIEWPORT_HEIGHT));
        let mut stats = SessionStats::new();
        stats.record_spawned(world.passengers.len());

        info!(
            "New session: {}s on the clock, level {}, seed {:?}",
            config.time_limit_secs, config.starting_level, config.seed
        );

        Ok(Session {
            time_left: config.time_limit_secs,
            level: config.starting_level,
            config,
            world,
            vehicle,
            camera,
            fuel: Fuel::full(),
            score: 0,
            phase: Phase::Running,
            end_reason: None,
            stats,
            rng,
        })
    }

    /// Runs one simulation step. Does nothing once the game is over.
    pub fn tick(&mut self, input: &InputState) -> TickEvents {
        let mut events = TickEvents::default();
        if self.phase == Phase::GameOver {
            return events;
        }
        if self.fuel.is_empty() {
            events.game_over = Some(self.end(GameOverReason::OutOfFuel));
            return events;
        }

        let motion = integrate(&mut self.vehicle, input, &self.world, &mut self.fuel);
        self.stats.record_motion(&motion, self.vehicle.speed);
        events.off_road = motion.off_road;
        events.hit_obstacle = motion.hit_obstacle;

        let position = self.vehicle.position;
        if passengers::is_carrying(&self.world.passengers) {
            events.delivered = passengers::try_drop(
                &position,
                &mut self.world.passengers,
                &self.world.stops,
                input.action,
                &mut self.score,
                &mut self.fuel,
            );
            if events.delivered.is_some() {
                self.stats.record_delivery();
            }
        } else {
            events.picked_up = passengers::try_pickup(&position, &mut self.world.passengers, input.action);
            if events.picked_up.is_some() {
                self.stats.record_pickup();
            }
        }
        passengers::carry(&position, &mut self.world.passengers);

        events.respawned = passengers::reconcile(&mut self.world.passengers, &self.world.stops, &mut self.rng);
        self.stats.record_spawned(events.respawned);

        self.follow_vehicle();

        if self.fuel.is_empty() {
            events.game_over = Some(self.end(GameOverReason::OutOfFuel));
        }
        events
    }

    /// Consumes one countdown second. Returns the reason if this ended the game.
    pub fn on_second_elapsed(&mut self) -> Option<GameOverReason> {
        if self.phase == Phase::GameOver {
            return None;
        }

        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            return Some(self.end(GameOverReason::OutOfTime));
        }
        None
    }

    /// Starts a fresh play-through from level one with a new passenger set.
    pub fn restart(&mut self) {
        self.level = self.config.starting_level;
        self.world = World::init(self.level, &mut self.rng);
        self.vehicle.reset(self.config.spawn);
        self.fuel = Fuel::full();
        self.score = 0;
        self.time_left = self.config.time_limit_secs;
        self.phase = Phase::Running;
        self.end_reason = None;
        self.stats = SessionStats::new();
        self.stats.record_spawned(self.world.passengers.len());
        self.follow_vehicle();
        info!("Session restarted at level {}", self.level);
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            world: &self.world,
            vehicle: &self.vehicle,
            camera: self.camera,
            score: self.score,
            fuel: self.fuel.level(),
            time_left: self.time_left,
            level: self.level,
            picked: self.is_carrying(),
            game_over: self.is_game_over(),
        }
    }

    fn end(&mut self, reason: GameOverReason) -> GameOverReason {
        self.phase = Phase::GameOver;
        self.end_reason = Some(reason);
        info!("Game over ({}): final score {}", reason, self.score);
        self.stats.display(self.score);
        reason
    }

    fn follow_vehicle(&mut self) {
        self.camera = Camera::follow(
            &self.vehicle.position,
            self.world.bounds(),
            (VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
        );
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn end_reason(&self) -> Option<GameOverReason> {
        self.end_reason
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn fuel(&self) -> f32 {
        self.fuel.level()
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_carrying(&self) -> bool {
        passengers::is_carrying(&self.world.passengers)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    // Direct state access for scripted setups (tests, demos).

    pub fn vehicle_mut(&mut self) -> &mut Vehicle {
        &mut self.vehicle
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn set_fuel(&mut self, level: f32) {
        self.fuel = Fuel::new(level);
    }
}

use log::info;
use rand::Rng;

use crate::constants::*;
use crate::core::passengers::{spawn_passengers, Passenger};
use crate::geometry::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop {
    pub position: Position,
    pub radius: f32,
}

impl Stop {
    pub const fn new(x: f32, y: f32) -> Self {
        Stop {
            position: Position::new(x, y),
            radius: STOP_RADIUS,
        }
    }
}

const ROADS: [Rect; 6] = [
    Rect::new(60.0, 80.0, 780.0, 80.0),
    Rect::new(60.0, 260.0, 780.0, 80.0),
    Rect::new(60.0, 440.0, 780.0, 80.0),
    Rect::new(60.0, 80.0, 80.0, 440.0),
    Rect::new(380.0, 80.0, 80.0, 440.0),
    Rect::new(760.0, 80.0, 80.0, 440.0),
];

const OBSTACLES: [Rect; 3] = [
    Rect::new(240.0, 160.0, 80.0, 60.0),
    Rect::new(560.0, 340.0, 80.0, 60.0),
    Rect::new(240.0, 420.0, 80.0, 60.0),
];

const STOPS: [Stop; 6] = [
    Stop::new(110.0, 110.0),
    Stop::new(430.0, 150.0),
    Stop::new(790.0, 300.0),
    Stop::new(430.0, 470.0),
    Stop::new(110.0, 300.0),
    Stop::new(790.0, 110.0),
];

/// Static level geometry plus the live passenger set.
#[derive(Debug, Clone)]
pub struct World {
    pub width: f32,
    pub height: f32,
    pub roads: Vec<Rect>,
    pub obstacles: Vec<Rect>,
    pub stops: Vec<Stop>,
    pub passengers: Vec<Passenger>,
}

impl World {
    /// Fixed road/obstacle/stop layout with no passengers.
    pub fn layout() -> Self {
        World {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            roads: ROADS.to_vec(),
            obstacles: OBSTACLES.to_vec(),
            stops: STOPS.to_vec(),
            passengers: Vec::new(),
        }
    }

    /// Builds the level layout and seeds it with `3 + level` passengers.
    pub fn init<R: Rng + ?Sized>(level: u32, rng: &mut R) -> Self {
        let mut world = Self::layout();
        let count = BASE_PASSENGERS + level as usize;
        world.passengers = spawn_passengers(&world.stops, count, rng);
        info!(
            "World initialised for level {}: {} roads, {} obstacles, {} stops, {} passengers",
            level,
            world.roads.len(),
            world.obstacles.len(),
            world.stops.len(),
            world.passengers.len()
        );
        world
    }

    pub fn is_on_road(&self, rect: &Rect) -> bool {
        self.roads.iter().any(|road| rect.intersects(road))
    }

    pub fn hits_obstacle(&self, rect: &Rect) -> bool {
        self.obstacles.iter().any(|obstacle| rect.intersects(obstacle))
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn carried_passenger(&self) -> Option<&Passenger> {
        self.passengers.iter().find(|p| p.picked)
    }
}

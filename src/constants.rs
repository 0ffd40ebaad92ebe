use std::time::Duration;

use crate::geometry::Position;

pub const WORLD_WIDTH: f32 = 900.0;
pub const WORLD_HEIGHT: f32 = 520.0;
pub const VIEWPORT_WIDTH: f32 = 900.0;
pub const VIEWPORT_HEIGHT: f32 = 520.0;

pub const FRAMES_PER_SECOND: u32 = 60;
pub const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);

// Session limits
pub const TIME_LIMIT_SECS: u32 = 120;
pub const MAX_FUEL: f32 = 100.0;
pub const STARTING_LEVEL: u32 = 1;

// Vehicle spawn pose and tuning
pub const SPAWN_POSITION: Position = Position { x: 120.0, y: 120.0 };
pub const SPAWN_ANGLE: f32 = 0.0;
pub const VEHICLE_WIDTH: f32 = 28.0;
pub const VEHICLE_HEIGHT: f32 = 18.0;
pub const MAX_SPEED: f32 = 3.2;
pub const ACCELERATION: f32 = 0.12;
pub const FRICTION: f32 = 0.06;
pub const TURN_RATE: f32 = 0.05;

pub const BRAKE_FACTOR: f32 = 0.9;
pub const REVERSE_LIMIT: f32 = 0.6;
pub const TURN_SPEED_SCALE: f32 = 0.2;

// Collision penalties
pub const OFF_ROAD_BOUNCE: f32 = -0.2;
pub const OFF_ROAD_FUEL_COST: f32 = 1.0;
pub const OBSTACLE_DAMPING: f32 = 0.6;
pub const OBSTACLE_FUEL_COST: f32 = 0.4;
pub const FUEL_PER_SPEED: f32 = 0.01;

// Passengers
pub const STOP_RADIUS: f32 = 18.0;
pub const PASSENGER_RADIUS: f32 = 8.0;
pub const SPAWN_JITTER: f32 = 12.0;
pub const PICKUP_RADIUS: f32 = 24.0;
pub const DROP_RADIUS: f32 = 26.0;
pub const DELIVERY_SCORE: u32 = 10;
pub const DELIVERY_FUEL_BONUS: f32 = 8.0;
pub const BASE_PASSENGERS: usize = 3;
pub const MIN_ACTIVE_PASSENGERS: usize = 2;
pub const RESPAWN_BATCH: usize = 2;

use crate::constants::*;
use crate::geometry::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleTuning {
    pub max_speed: f32,
    pub acceleration: f32,
    pub friction: f32,
    pub turn_rate: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for VehicleTuning {
    fn default() -> Self {
        VehicleTuning {
            max_speed: MAX_SPEED,
            acceleration: ACCELERATION,
            friction: FRICTION,
            turn_rate: TURN_RATE,
            width: VEHICLE_WIDTH,
            height: VEHICLE_HEIGHT,
        }
    }
}

/// Where a fresh or restarted vehicle is placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPose {
    pub position: Position,
    pub angle: f32,
}

impl Default for SpawnPose {
    fn default() -> Self {
        SpawnPose {
            position: SPAWN_POSITION,
            angle: SPAWN_ANGLE,
        }
    }
}

/// The player's taxi. Positive speed drives along `angle`, negative reverses.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub position: Position,
    pub angle: f32,
    pub speed: f32,
    pub tuning: VehicleTuning,
}

impl Vehicle {
    pub fn new(pose: SpawnPose, tuning: VehicleTuning) -> Self {
        Vehicle {
            position: pose.position,
            angle: pose.angle,
            speed: 0.0,
            tuning,
        }
    }

    pub fn reset(&mut self, pose: SpawnPose) {
        self.position = pose.position;
        self.angle = pose.angle;
        self.speed = 0.0;
    }

    pub fn bounding_box(&self) -> Rect {
        self.bounding_box_at(self.position)
    }

    pub fn bounding_box_at(&self, position: Position) -> Rect {
        Rect::centered(position, self.tuning.width, self.tuning.height)
    }

    pub fn is_moving(&self) -> bool {
        self.speed != 0.0
    }

    pub fn reverse_limit(&self) -> f32 {
        -self.tuning.max_speed * REVERSE_LIMIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vehicle_is_parked_at_spawn() {
        let vehicle = Vehicle::new(SpawnPose::default(), VehicleTuning::default());
        assert_eq!(vehicle.position, Position::new(120.0, 120.0));
        assert_eq!(vehicle.angle, 0.0);
        assert_eq!(vehicle.speed, 0.0);
        assert!(!vehicle.is_moving());
    }

    #[test]
    fn test_reset_restores_pose() {
        let mut vehicle = Vehicle::new(SpawnPose::default(), VehicleTuning::default());
        vehicle.position = Position::new(500.0, 300.0);
        vehicle.angle = 1.3;
        vehicle.speed = 2.0;
        vehicle.reset(SpawnPose::default());
        assert_eq!(vehicle, Vehicle::new(SpawnPose::default(), VehicleTuning::default()));
    }

    #[test]
    fn test_bounding_box_is_centred() {
        let vehicle = Vehicle::new(SpawnPose::default(), VehicleTuning::default());
        assert_eq!(vehicle.bounding_box(), Rect::new(106.0, 111.0, 28.0, 18.0));
    }

    #[test]
    fn test_reverse_limit_is_sixty_percent() {
        let vehicle = Vehicle::new(SpawnPose::default(), VehicleTuning::default());
        assert!((vehicle.reverse_limit() + 1.92).abs() < 1e-5);
    }
}

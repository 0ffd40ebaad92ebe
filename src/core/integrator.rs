use crate::constants::*;
use crate::core::collision::{resolve_obstacle_contact, resolve_road_contact};
use crate::core::fuel::Fuel;
use crate::input::InputState;
use crate::vehicle::Vehicle;
use crate::world::World;

/// What happened to the vehicle during one integration step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionReport {
    pub off_road: bool,
    pub hit_obstacle: bool,
    pub distance: f32,
    pub fuel_burned: f32,
}

/// Advances the vehicle by one tick: throttle, steering, movement,
/// collision penalties and the continuous fuel drain, in that order.
pub fn integrate(vehicle: &mut Vehicle, input: &InputState, world: &World, fuel: &mut Fuel) -> MotionReport {
    let fuel_before = fuel.level();

    apply_throttle(vehicle, input);
    apply_steering(vehicle, input);

    let start = vehicle.position;
    let candidate = vehicle.position.advance(vehicle.angle, vehicle.speed);
    let committed = resolve_road_contact(vehicle, candidate, world, fuel);
    let hit_obstacle = resolve_obstacle_contact(vehicle, world, fuel);

    fuel.consume(FUEL_PER_SPEED * vehicle.speed.abs());

    MotionReport {
        off_road: !committed,
        hit_obstacle,
        distance: start.distance_to(&vehicle.position),
        fuel_burned: fuel_before - fuel.level(),
    }
}

fn apply_throttle(vehicle: &mut Vehicle, input: &InputState) {
    let tuning = vehicle.tuning;

    if input.accelerate {
        vehicle.speed = (vehicle.speed + tuning.acceleration).clamp(-tuning.max_speed, tuning.max_speed);
    } else if input.brake {
        vehicle.speed = (vehicle.speed - tuning.acceleration * BRAKE_FACTOR)
            .clamp(vehicle.reverse_limit(), tuning.max_speed);
    } else if vehicle.speed.abs() < tuning.friction {
        vehicle.speed = 0.0;
    } else {
        vehicle.speed -= tuning.friction * vehicle.speed.signum();
    }
}

// Faster vehicles turn harder.
fn apply_steering(vehicle: &mut Vehicle, input: &InputState) {
    let turn = vehicle.tuning.turn_rate * (1.0 + TURN_SPEED_SCALE * vehicle.speed.abs());
    if input.turn_left {
        vehicle.angle -= turn;
    }
    if input.turn_right {
        vehicle.angle += turn;
    }
}

use log::trace;

use crate::constants::*;
use crate::core::fuel::Fuel;
use crate::geometry::Position;
use crate::vehicle::Vehicle;
use crate::world::World;

/// Commits `candidate` if the vehicle box there still touches a road.
///
/// Otherwise the move is rejected, the vehicle bounces back at a fifth of its
/// speed and the off-road penalty is burned. Returns whether the move stuck.
pub fn resolve_road_contact(vehicle: &mut Vehicle, candidate: Position, world: &World, fuel: &mut Fuel) -> bool {
    if world.is_on_road(&vehicle.bounding_box_at(candidate)) {
        vehicle.position = candidate;
        return true;
    }

    vehicle.speed *= OFF_ROAD_BOUNCE;
    fuel.consume(OFF_ROAD_FUEL_COST);
    trace!(
        "Off-road bounce at ({:.1}, {:.1}), speed now {:.2}, fuel {:.1}",
        vehicle.position.x,
        vehicle.position.y,
        vehicle.speed,
        fuel.level()
    );
    false
}

/// Slows the vehicle and burns fuel while its box overlaps an obstacle.
/// Returns whether a hit happened.
pub fn resolve_obstacle_contact(vehicle: &mut Vehicle, world: &World, fuel: &mut Fuel) -> bool {
    if !world.hits_obstacle(&vehicle.bounding_box()) {
        return false;
    }

    vehicle.speed *= OBSTACLE_DAMPING;
    fuel.consume(OBSTACLE_FUEL_COST);
    trace!(
        "Obstacle hit at ({:.1}, {:.1}), speed now {:.2}, fuel {:.1}",
        vehicle.position.x,
        vehicle.position.y,
        vehicle.speed,
        fuel.level()
    );
    true
}

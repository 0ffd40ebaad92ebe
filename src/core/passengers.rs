use log::{debug, warn};
use rand::Rng;

use crate::constants::*;
use crate::core::fuel::Fuel;
use crate::geometry::spawn::{jittered, pick_stop_pair};
use crate::geometry::Position;
use crate::world::Stop;

#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    pub position: Position,
    pub radius: f32,
    pub picked: bool,
    pub done: bool,
    /// Index of the stop the passenger spawned at.
    pub origin: usize,
    /// Index of the stop the passenger wants to reach; never `origin`.
    pub destination: usize,
}

/// A completed delivery, reported back to the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Delivery {
    pub passenger: usize,
    pub destination: usize,
}

pub fn spawn_passengers<R: Rng + ?Sized>(stops: &[Stop], count: usize, rng: &mut R) -> Vec<Passenger> {
    let mut spawned = Vec::with_capacity(count);

    for _ in 0..count {
        let Some((origin, destination)) = pick_stop_pair(rng, stops.len()) else {
            warn!("Cannot spawn passengers with only {} stop(s)", stops.len());
            break;
        };

        spawned.push(Passenger {
            position: jittered(rng, stops[origin].position, SPAWN_JITTER),
            radius: PASSENGER_RADIUS,
            picked: false,
            done: false,
            origin,
            destination,
        });
    }

    spawned
}

pub fn is_carrying(passengers: &[Passenger]) -> bool {
    passengers.iter().any(|p| p.picked)
}

/// Boards the first waiting passenger (list order, not distance) within
/// pickup range, provided the seat is free and the action key is held.
pub fn try_pickup(vehicle: &Position, passengers: &mut [Passenger], action: bool) -> Option<usize> {
    if !action || is_carrying(passengers) {
        return None;
    }

    let index = passengers
        .iter()
        .position(|p| !p.picked && !p.done && vehicle.is_within(&p.position, PICKUP_RADIUS))?;

    passengers[index].picked = true;
    debug!(
        "Picked up passenger {} bound for stop {}",
        index, passengers[index].destination
    );
    Some(index)
}

/// Drops the carried passenger when the vehicle is at its destination stop.
/// A delivery scores points and tops up the tank.
pub fn try_drop(
    vehicle: &Position,
    passengers: &mut [Passenger],
    stops: &[Stop],
    action: bool,
    score: &mut u32,
    fuel: &mut Fuel,
) -> Option<Delivery> {
    if !action {
        return None;
    }

    let index = passengers.iter().position(|p| p.picked)?;
    let destination = passengers[index].destination;
    let stop = stops.get(destination)?;
    if !vehicle.is_within(&stop.position, DROP_RADIUS) {
        return None;
    }

    let passenger = &mut passengers[index];
    passenger.picked = false;
    passenger.done = true;
    passenger.position = stop.position;
    *score = score.saturating_add(DELIVERY_SCORE);
    fuel.refill(DELIVERY_FUEL_BONUS);

    debug!(
        "Delivered passenger {} to stop {}, score {}, fuel {:.1}",
        index,
        destination,
        score,
        fuel.level()
    );
    Some(Delivery {
        passenger: index,
        destination,
    })
}

/// Keeps a carried passenger on board with the vehicle.
pub fn carry(vehicle: &Position, passengers: &mut [Passenger]) {
    for passenger in passengers.iter_mut().filter(|p| p.picked) {
        passenger.position = *vehicle;
    }
}

/// Removes finished passengers and tops the set back up when it runs low.
/// Returns how many passengers were spawned.
pub fn reconcile<R: Rng + ?Sized>(passengers: &mut Vec<Passenger>, stops: &[Stop], rng: &mut R) -> usize {
    passengers.retain(|p| !p.done);

    if passengers.len() >= MIN_ACTIVE_PASSENGERS {
        return 0;
    }

    let extra = spawn_passengers(stops, RESPAWN_BATCH, rng);
    let spawned = extra.len();
    passengers.extend(extra);
    debug!("Respawned {} passengers, {} active", spawned, passengers.len());
    spawned
}

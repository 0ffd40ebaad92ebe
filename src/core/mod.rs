pub mod collision;
pub mod fuel;
pub mod integrator;
pub mod passengers;

pub use fuel::Fuel;
pub use integrator::{integrate, MotionReport};
pub use passengers::{Delivery, Passenger};

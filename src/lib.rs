//! Pragia Taxi: a top-down taxi arcade game.
//!
//! Drive a tricycle taxi around a fixed town map, pick passengers up at
//! stops and drop them at their destinations before the clock or the fuel
//! runs out. The simulation core is independent of any windowing library;
//! the SDL2 front end lives behind the `frontend` feature.

pub mod camera;
pub mod config;
pub mod constants;
pub mod core;
pub mod game;
pub mod geometry;
pub mod input;
#[cfg(feature = "frontend")]
pub mod rendering;
pub mod session;
pub mod statistics;
pub mod vehicle;
pub mod world;

pub use config::GameConfig;
pub use game::GameLoop;
pub use input::{InputAction, InputState};
pub use session::{GameOverReason, Phase, Session, Snapshot, TickEvents};

//! rogue-core: Core game logic for a room-and-door dungeon crawler
//!
//! This crate contains all game logic with no terminal I/O.
//! Rooms are linked into a graph by doors, doorless rooms are repaired at
//! load, and the player walks one tile per key press, picking up items and
//! crossing into neighbouring rooms.

pub mod action;
pub mod data;
pub mod dungeon;
pub mod object;
pub mod player;
pub mod world;

mod gameloop;
mod rng;

pub use gameloop::{OUTRO, Rogue};
pub use rng::GameRng;

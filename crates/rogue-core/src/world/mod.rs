//! World configuration
//!
//! Engine options and the error types shared by the rest of the crate.

pub mod errors;
pub mod options;

pub use errors::{DungeonError, LoadError, MoveError, PlacementError};
pub use options::{EngineOptions, OptionsError};

//! Error types for loading, repairing and playing a dungeon

use std::path::PathBuf;

use thiserror::Error;

use crate::action::Direction;
use crate::dungeon::{Position, RoomId};
use crate::object::ItemId;

/// Fatal problems found while building or verifying the dungeon graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DungeonError {
    #[error("no room is marked as the start room")]
    NoStartRoom,

    #[error("room id {id} is declared more than once")]
    DuplicateRoom { id: RoomId },

    #[error("room {id} is {width}x{height}, both sides must be at least 3")]
    InvalidRoomSize { id: RoomId, width: i32, height: i32 },

    #[error("room {room} has no free interior tile left")]
    NoFreeTile { room: RoomId },

    #[error("item {item} could not be placed in room {room} after {attempts} attempts")]
    PlacementExhausted {
        item: ItemId,
        room: RoomId,
        attempts: usize,
    },

    #[error("dungeon is unrecoverable at room {room}: {reason}")]
    Unrecoverable { room: RoomId, reason: String },
}

/// Why an item could not be put into a room.
///
/// Consumed by the placement retry loop; never escapes the builder.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    #[error("tile {0} is outside the interior or already occupied")]
    ImpossiblePosition(Position),

    #[error("item id {0} is not in the catalog")]
    NoSuchItem(ItemId),
}

/// A rejected move; the caller should prompt for another key
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("There's a wall in the way")]
    Wall,

    #[error("The {wall} door of room {room} leads nowhere")]
    DanglingDoor { room: RoomId, wall: Direction },

    #[error("Room {room} has no door on its {wall} wall to come through")]
    NoReturnDoor { room: RoomId, wall: Direction },
}

impl MoveError {
    /// Every move error means the same thing to the input loop: nothing
    /// happened, ask again
    pub const fn is_illegal_move(&self) -> bool {
        true
    }
}

/// I/O and format failures while reading dungeon or symbol files
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not open file '{path}': {source}")]
    CouldNotOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid symbol for {key}: {value:?} must be a single character")]
    BadSymbol { key: String, value: String },
}

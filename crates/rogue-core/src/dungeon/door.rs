//! Doors between rooms

use serde::{Deserialize, Serialize};

use super::{Position, RoomId};
use crate::action::Direction;

/// A door on one wall of its owning room.
///
/// `target` is the declared destination id. `connected` is the arena index
/// of that room once the graph has been linked; it stays `None` when the
/// target names no room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    wall: Direction,
    offset: i32,
    target: RoomId,
    #[serde(skip)]
    connected: Option<usize>,
}

impl Door {
    pub const fn new(wall: Direction, offset: i32, target: RoomId) -> Self {
        Self {
            wall,
            offset,
            target,
            connected: None,
        }
    }

    pub const fn wall(&self) -> Direction {
        self.wall
    }

    /// Distance along the wall from its north or west end
    pub const fn offset(&self) -> i32 {
        self.offset
    }

    pub const fn target(&self) -> RoomId {
        self.target
    }

    pub const fn connected(&self) -> Option<usize> {
        self.connected
    }

    pub(crate) fn connect(&mut self, index: usize) {
        self.connected = Some(index);
    }

    /// Tile the door occupies in a `width` x `height` room
    pub const fn position(&self, width: i32, height: i32) -> Position {
        match self.wall {
            Direction::North => Position::new(self.offset, 0),
            Direction::South => Position::new(self.offset, height - 1),
            Direction::West => Position::new(0, self.offset),
            Direction::East => Position::new(width - 1, self.offset),
        }
    }

    /// First interior tile inside the door
    pub const fn inside(&self, width: i32, height: i32) -> Position {
        self.position(width, height).step(self.wall.opposite())
    }
}

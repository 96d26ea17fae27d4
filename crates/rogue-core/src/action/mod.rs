//! Player action system
//!
//! Commands the player can issue, the compass directions they refer to, and
//! the movement/pickup handlers that execute them.

pub mod keybindings;
pub mod movement;
pub mod pickup;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

pub use keybindings::KeyBindings;
pub use movement::{MoveOutcome, TileKind, execute_move};
pub use pickup::{EMPTY_INVENTORY_MSG, inventory_listing};

/// Every command, in help/config order
pub const ALL_COMMANDS: [Command; 6] = [
    Command::Move(Direction::North),
    Command::Move(Direction::South),
    Command::Move(Direction::West),
    Command::Move(Direction::East),
    Command::Inventory,
    Command::RoomId,
];

/// Player command types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Step one tile
    Move(Direction),
    /// List the inventory
    Inventory,
    /// Report the current room id
    RoomId,
}

impl Command {
    /// Information requests never change player or room state
    pub const fn is_query(&self) -> bool {
        matches!(self, Command::Inventory | Command::RoomId)
    }

    /// Name used in key binding configuration
    pub const fn name(&self) -> &'static str {
        match self {
            Command::Move(Direction::North) => "north",
            Command::Move(Direction::South) => "south",
            Command::Move(Direction::East) => "east",
            Command::Move(Direction::West) => "west",
            Command::Inventory => "inventory",
            Command::RoomId => "room",
        }
    }

    /// Parse a command from its configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "north" => Some(Command::Move(Direction::North)),
            "south" => Some(Command::Move(Direction::South)),
            "east" => Some(Command::Move(Direction::East)),
            "west" => Some(Command::Move(Direction::West)),
            "inventory" => Some(Command::Inventory),
            "room" | "roomid" => Some(Command::RoomId),
            _ => None,
        }
    }
}

/// Compass directions, used both for movement and for the wall a door sits on
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum Direction {
    #[serde(rename = "N", alias = "north")]
    North,
    #[serde(rename = "S", alias = "south")]
    South,
    #[serde(rename = "E", alias = "east")]
    East,
    #[serde(rename = "W", alias = "west")]
    West,
}

impl Direction {
    /// Order in which walls are searched for a free door slot
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Get the delta (dx, dy) for this direction
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// The mirrored direction (N<->S, E<->W)
    pub const fn opposite(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// North and south walls run along the x axis
    pub const fn is_horizontal_wall(&self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    /// Slot index for fixed-size per-wall storage
    pub(crate) const fn index(&self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }
}

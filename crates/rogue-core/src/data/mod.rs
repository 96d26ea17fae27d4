//! Dungeon definitions and the render legend

pub mod records;
pub mod tile;

pub use records::{DoorRecord, DungeonFile, ItemRecord, MemorySource, RecordSource, RoomRecord};
pub use tile::{SymbolTable, Tile};

//! The player character

use crate::dungeon::{Position, RoomId};
use crate::object::Item;

/// The adventurer: a position inside the current room plus an inventory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pos: Position,
    room: RoomId,
    /// Arena index of `room`
    room_index: usize,
    /// Items in pickup order
    inventory: Vec<Item>,
}

impl Player {
    pub fn new(name: impl Into<String>, room: RoomId, room_index: usize, pos: Position) -> Self {
        Self {
            name: name.into(),
            pos,
            room,
            room_index,
            inventory: Vec::new(),
        }
    }

    pub const fn position(&self) -> Position {
        self.pos
    }

    pub(crate) fn set_position(&mut self, pos: Position) {
        self.pos = pos;
    }

    /// Id of the room the player stands in
    pub const fn room(&self) -> RoomId {
        self.room
    }

    pub(crate) const fn room_index(&self) -> usize {
        self.room_index
    }

    /// Switch to another room at `pos`
    pub(crate) fn enter(&mut self, room: RoomId, room_index: usize, pos: Position) {
        self.room = room;
        self.room_index = room_index;
        self.pos = pos;
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    pub(crate) fn pick_up(&mut self, item: Item) {
        self.inventory.push(item);
    }

    /// Item names in pickup order
    pub fn inventory_names(&self) -> Vec<&str> {
        self.inventory.iter().map(|item| item.name.as_str()).collect()
    }
}

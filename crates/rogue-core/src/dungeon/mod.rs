//! Dungeon graph
//!
//! Rooms live in an arena owned by [`DungeonGraph`]; doors refer to their
//! destination by arena index once the graph is linked.

pub mod builder;
mod door;
mod position;
pub mod repair;
mod room;

use hashbrown::HashMap;

pub use crate::action::Direction;
pub use builder::{BuiltDungeon, build_dungeon};
pub use door::Door;
pub use position::Position;
pub use repair::{link_rooms, reachable_from, verify_and_repair};
pub use room::{MIN_ROOM_SIDE, Room, RoomFault, RoomId, TileKind};

/// All rooms of one dungeon, in load order
#[derive(Debug, Clone, Default)]
pub struct DungeonGraph {
    rooms: Vec<Room>,
    index: HashMap<RoomId, usize>,
}

impl DungeonGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a room; returns its arena index, or `None` if the id is taken
    pub fn push(&mut self, room: Room) -> Option<usize> {
        if self.index.contains_key(&room.id()) {
            return None;
        }
        let idx = self.rooms.len();
        self.index.insert(room.id(), idx);
        self.rooms.push(room);
        Some(idx)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, idx: usize) -> &Room {
        &self.rooms[idx]
    }

    pub fn room_mut(&mut self, idx: usize) -> &mut Room {
        &mut self.rooms[idx]
    }

    pub fn index_of(&self, id: RoomId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn room_by_id(&self, id: RoomId) -> Option<&Room> {
        self.index_of(id).map(|idx| &self.rooms[idx])
    }

    /// Resolve every door's target id to an arena index.
    ///
    /// Returns the doors left dangling as `(room id, wall, target id)`.
    pub fn resolve_doors(&mut self) -> Vec<(RoomId, Direction, RoomId)> {
        let mut dangling = Vec::new();
        for room in &mut self.rooms {
            let id = room.id();
            for wall in Direction::ALL {
                if let Some(door) = room.door_mut(wall) {
                    match self.index.get(&door.target()) {
                        Some(&target) => door.connect(target),
                        None => dangling.push((id, wall, door.target())),
                    }
                }
            }
        }
        dangling
    }

    /// Room reached by walking through the `wall` door of room `idx`.
    ///
    /// `None` unless the door is linked and the far room has the mirrored door.
    pub fn traverse(&self, idx: usize, wall: Direction) -> Option<usize> {
        let target = self.rooms[idx].door(wall)?.connected()?;
        self.rooms[target]
            .has_door(wall.opposite())
            .then_some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: RoomId) -> Room {
        Room::new(id, 5, 5).unwrap()
    }

    #[test]
    fn test_push_rejects_duplicate_ids() {
        let mut graph = DungeonGraph::new();
        assert_eq!(graph.push(room(4)), Some(0));
        assert_eq!(graph.push(room(7)), Some(1));
        assert_eq!(graph.push(room(4)), None);
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.index_of(7), Some(1));
        assert!(graph.room_by_id(5).is_none());
    }

    #[test]
    fn test_resolve_forward_references() {
        let mut graph = DungeonGraph::new();
        let mut first = room(1);
        first.set_door(Door::new(Direction::East, 2, 2));
        first.set_door(Door::new(Direction::West, 2, 42));
        graph.push(first);
        let mut second = room(2);
        second.set_door(Door::new(Direction::West, 1, 1));
        graph.push(second);

        let dangling = graph.resolve_doors();
        assert_eq!(dangling, vec![(1, Direction::West, 42)]);
        assert_eq!(graph.room(0).door(Direction::East).unwrap().connected(), Some(1));
        assert_eq!(graph.room(1).door(Direction::West).unwrap().connected(), Some(0));
        assert_eq!(graph.traverse(0, Direction::East), Some(1));
        assert_eq!(graph.traverse(0, Direction::West), None);
    }
}

//! Rooms
//!
//! A room is a rectangle whose outer ring of tiles is wall. Each of its four
//! walls carries at most one door; items lie on interior tiles.

use thiserror::Error;

use super::{Door, Position};
use crate::action::Direction;
use crate::data::tile::{SymbolTable, Tile};
use crate::object::{Item, ItemCatalog, ItemId};
use crate::rng::GameRng;
use crate::world::{DungeonError, PlacementError};

/// Room identifier, as listed in the dungeon definition
pub type RoomId = u32;

/// Smallest legal width or height; leaves a single interior tile
pub const MIN_ROOM_SIDE: i32 = 3;

/// What a tile means to a player stepping onto it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    /// The door on the given wall
    Door(Direction),
    Item,
    Wall,
    Floor,
}

/// A problem found by [`Room::verify`]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomFault {
    #[error("item {0} lies outside the interior")]
    ItemOutOfBounds(ItemId),
    #[error("item {0} shares a tile with another item or the player")]
    ItemCollision(ItemId),
    #[error("player position {0} lies outside the interior")]
    PlayerOutOfBounds(Position),
    #[error("room has no doors")]
    NoDoors,
}

impl RoomFault {
    /// Only a missing door can be repaired
    pub const fn is_repairable(&self) -> bool {
        matches!(self, RoomFault::NoDoors)
    }
}

/// A rectangular room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    id: RoomId,
    width: i32,
    height: i32,
    /// Indexed by `Direction::index`
    doors: [Option<Door>; 4],
    items: Vec<Item>,
    player_present: bool,
    start: bool,
}

impl Room {
    /// Create an empty room
    pub fn new(id: RoomId, width: i32, height: i32) -> Result<Self, DungeonError> {
        if width < MIN_ROOM_SIDE || height < MIN_ROOM_SIDE {
            return Err(DungeonError::InvalidRoomSize { id, width, height });
        }
        Ok(Self {
            id,
            width,
            height,
            doors: [None; 4],
            items: Vec::new(),
            player_present: false,
            start: false,
        })
    }

    pub const fn id(&self) -> RoomId {
        self.id
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    pub const fn is_start(&self) -> bool {
        self.start
    }

    pub(crate) fn set_start(&mut self, start: bool) {
        self.start = start;
    }

    pub const fn has_player(&self) -> bool {
        self.player_present
    }

    pub(crate) fn set_player_present(&mut self, present: bool) {
        self.player_present = present;
    }

    // ========================================================================
    // Doors
    // ========================================================================

    /// Length of a wall, corners included
    pub const fn wall_length(&self, wall: Direction) -> i32 {
        if wall.is_horizontal_wall() {
            self.width
        } else {
            self.height
        }
    }

    /// Doors may not sit on a corner
    pub const fn is_valid_door_offset(&self, wall: Direction, offset: i32) -> bool {
        offset >= 1 && offset <= self.wall_length(wall) - 2
    }

    pub fn door(&self, wall: Direction) -> Option<&Door> {
        self.doors[wall.index()].as_ref()
    }

    pub(crate) fn door_mut(&mut self, wall: Direction) -> Option<&mut Door> {
        self.doors[wall.index()].as_mut()
    }

    pub fn has_door(&self, wall: Direction) -> bool {
        self.door(wall).is_some()
    }

    /// Attach a door. Fails without changing anything when the wall is taken
    /// or the offset is a corner or out of range.
    pub(crate) fn set_door(&mut self, door: Door) -> bool {
        let wall = door.wall();
        if self.has_door(wall) || !self.is_valid_door_offset(wall, door.offset()) {
            return false;
        }
        self.doors[wall.index()] = Some(door);
        true
    }

    /// Doors in N, S, E, W order
    pub fn doors(&self) -> impl Iterator<Item = &Door> {
        self.doors.iter().flatten()
    }

    pub fn door_count(&self) -> usize {
        self.doors().count()
    }

    /// Walls without a door, in N, S, E, W order
    pub fn free_walls(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|wall| !self.has_door(*wall))
    }

    pub fn door_position(&self, wall: Direction) -> Option<Position> {
        self.door(wall)
            .map(|door| door.position(self.width, self.height))
    }

    /// Interior tile a player lands on when coming in through `wall`
    pub fn arrival_position(&self, wall: Direction) -> Option<Position> {
        self.door(wall).map(|door| door.inside(self.width, self.height))
    }

    /// Wall whose door occupies `pos`, if any
    pub fn door_at(&self, pos: Position) -> Option<Direction> {
        self.doors()
            .find(|door| door.position(self.width, self.height) == pos)
            .map(Door::wall)
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    pub const fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    pub const fn is_interior(&self, pos: Position) -> bool {
        pos.x >= 1 && pos.x <= self.width - 2 && pos.y >= 1 && pos.y <= self.height - 2
    }

    pub const fn is_border(&self, pos: Position) -> bool {
        self.in_bounds(pos) && !self.is_interior(pos)
    }

    /// Classify a tile, door before item before wall before floor.
    ///
    /// Anything outside the room counts as wall.
    pub fn classify(&self, pos: Position) -> TileKind {
        if let Some(wall) = self.door_at(pos) {
            TileKind::Door(wall)
        } else if self.item_at(pos).is_some() {
            TileKind::Item
        } else if !self.is_interior(pos) {
            TileKind::Wall
        } else {
            TileKind::Floor
        }
    }

    // ========================================================================
    // Items
    // ========================================================================

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_at(&self, pos: Position) -> Option<&Item> {
        self.items.iter().find(|item| item.pos == pos)
    }

    /// Remove and return the item at `pos`
    pub fn take_item_at(&mut self, pos: Position) -> Option<Item> {
        let idx = self.items.iter().position(|item| item.pos == pos)?;
        Some(self.items.remove(idx))
    }

    /// An item may go on an interior tile that holds no item and no player
    pub fn check_item_location(&self, pos: Position, player: Option<Position>) -> bool {
        self.is_interior(pos) && self.item_at(pos).is_none() && player != Some(pos)
    }

    /// Add an item at its own position
    pub fn add_item(
        &mut self,
        item: Item,
        catalog: &ItemCatalog,
        player: Option<Position>,
    ) -> Result<(), PlacementError> {
        if !catalog.contains(item.id) {
            return Err(PlacementError::NoSuchItem(item.id));
        }
        if !self.check_item_location(item.pos, player) {
            return Err(PlacementError::ImpossiblePosition(item.pos));
        }
        self.items.push(item);
        Ok(())
    }

    /// Interior tiles with neither an item nor the player, row by row
    pub fn free_tiles(&self, player: Option<Position>) -> Vec<Position> {
        (1..self.height - 1)
            .flat_map(|y| (1..self.width - 1).map(move |x| Position::new(x, y)))
            .filter(|pos| self.check_item_location(*pos, player))
            .collect()
    }

    /// A uniformly chosen free interior tile
    pub fn empty_tile(&self, rng: &mut GameRng, player: Option<Position>) -> Option<Position> {
        rng.choose(&self.free_tiles(player)).copied()
    }

    // ========================================================================
    // Verification and rendering
    // ========================================================================

    /// Check placements first, then doors
    pub fn verify(&self, player: Option<Position>) -> Result<(), RoomFault> {
        if let Some(pos) = player
            && !self.is_interior(pos)
        {
            return Err(RoomFault::PlayerOutOfBounds(pos));
        }

        for (i, item) in self.items.iter().enumerate() {
            if !self.is_interior(item.pos) {
                return Err(RoomFault::ItemOutOfBounds(item.id));
            }
            let clash = player == Some(item.pos)
                || self.items[..i].iter().any(|other| other.pos == item.pos);
            if clash {
                return Err(RoomFault::ItemCollision(item.id));
            }
        }

        if self.door_count() == 0 {
            return Err(RoomFault::NoDoors);
        }
        Ok(())
    }

    /// Draw the room, one `\n`-terminated line per row
    pub fn render(&self, symbols: &SymbolTable, player: Option<Position>) -> String {
        let mut out = String::with_capacity(((self.width + 1) * self.height) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(symbols.symbol(self.tile_at(Position::new(x, y), player)));
            }
            out.push('\n');
        }
        out
    }

    fn tile_at(&self, pos: Position, player: Option<Position>) -> Tile {
        if self.is_border(pos) {
            if self.door_at(pos).is_some() {
                Tile::Door
            } else if pos.y == 0 || pos.y == self.height - 1 {
                Tile::NsWall
            } else {
                Tile::EwWall
            }
        } else if player == Some(pos) {
            Tile::Player
        } else if let Some(item) = self.item_at(pos) {
            item.item_type.tile()
        } else {
            Tile::Floor
        }
    }
}

//! Dungeon definition records
//!
//! The builder consumes rooms and items one record at a time through the
//! [`RecordSource`] trait. [`DungeonFile`] is the JSON-backed source used by
//! the front-end; [`MemorySource`] serves records already in memory.

use std::collections::{BTreeMap, VecDeque};
use std::path::Path;

use hashbrown::HashMap;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

use crate::action::Direction;
use crate::data::tile::SymbolTable;
use crate::dungeon::RoomId;
use crate::object::{ItemCatalog, ItemId};
use crate::world::LoadError;

/// One door declared on a room wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorRecord {
    pub wall: Direction,
    /// Distance along the wall from its west/north corner
    pub offset: i32,
    pub target: RoomId,
}

/// One room as declared in the dungeon definition
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoomRecord {
    pub id: RoomId,
    pub width: i32,
    pub height: i32,
    pub start: bool,
    pub doors: Vec<DoorRecord>,
}

impl RoomRecord {
    pub fn new(id: RoomId, width: i32, height: i32) -> Self {
        Self {
            id,
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_start(mut self) -> Self {
        self.start = true;
        self
    }

    pub fn with_door(mut self, wall: Direction, offset: i32, target: RoomId) -> Self {
        self.doors.push(DoorRecord {
            wall,
            offset,
            target,
        });
        self
    }
}

/// One item as declared in the dungeon definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    pub id: ItemId,
    pub name: String,
    pub type_name: String,
    /// `None` when the item is not placed in any room
    pub room: Option<RoomId>,
    pub x: i32,
    pub y: i32,
}

impl ItemRecord {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        type_name: impl Into<String>,
        room: Option<RoomId>,
        x: i32,
        y: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            type_name: type_name.into(),
            room,
            x,
            y,
        }
    }
}

/// A stream of dungeon records, `None`-terminated
pub trait RecordSource {
    fn next_room(&mut self) -> Option<RoomRecord>;
    fn next_item(&mut self) -> Option<ItemRecord>;
}

/// Records held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    rooms: VecDeque<RoomRecord>,
    items: VecDeque<ItemRecord>,
}

impl MemorySource {
    pub fn new(rooms: Vec<RoomRecord>, items: Vec<ItemRecord>) -> Self {
        Self {
            rooms: rooms.into(),
            items: items.into(),
        }
    }
}

impl RecordSource for MemorySource {
    fn next_room(&mut self) -> Option<RoomRecord> {
        self.rooms.pop_front()
    }

    fn next_item(&mut self) -> Option<ItemRecord> {
        self.items.pop_front()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct JsonDoor {
    offset: i32,
    #[serde(default = "no_room")]
    target: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct JsonRoom {
    id: RoomId,
    width: i32,
    height: i32,
    #[serde(default)]
    start: bool,
    #[serde(default)]
    doors: BTreeMap<Direction, JsonDoor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct JsonItem {
    id: ItemId,
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default, deserialize_with = "sentinel_room")]
    room: Option<RoomId>,
    #[serde(default)]
    x: i32,
    #[serde(default)]
    y: i32,
}

fn no_room() -> i64 {
    -1
}

/// Negative room ids are the "no room" sentinel
fn sentinel_room<'de, D>(deserializer: D) -> Result<Option<RoomId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.and_then(|id| RoomId::try_from(id).ok()))
}

/// A dungeon definition read from JSON.
///
/// ```json
/// {
///   "rooms": [{"id": 1, "width": 5, "height": 5, "start": true,
///              "doors": {"N": {"offset": 2, "target": 2}}}],
///   "items": [{"id": 1, "name": "Potion", "type": "potion", "room": 1, "x": 2, "y": 2}]
/// }
/// ```
///
/// A door offset or target of `-1` means "no door"; an item room of `-1`
/// (or no room at all) means the item is not placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonFile {
    rooms: Vec<JsonRoom>,
    #[serde(default)]
    items: Vec<JsonItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    catalog: Option<Vec<ItemId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    symbols: Option<HashMap<String, String>>,
    #[serde(skip)]
    room_cursor: usize,
    #[serde(skip)]
    item_cursor: usize,
}

impl DungeonFile {
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::CouldNotOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Item ids this dungeon knows about: the explicit `catalog` list when
    /// present, otherwise every declared item
    pub fn catalog(&self) -> ItemCatalog {
        match &self.catalog {
            Some(ids) => ids.iter().copied().collect(),
            None => self.items.iter().map(|item| item.id).collect(),
        }
    }

    /// The embedded symbol legend, defaults when absent
    pub fn symbols(&self) -> Result<SymbolTable, LoadError> {
        match &self.symbols {
            Some(entries) => SymbolTable::from_entries(entries),
            None => Ok(SymbolTable::default()),
        }
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Restart record iteration from the first room and item
    pub fn rewind(&mut self) {
        self.room_cursor = 0;
        self.item_cursor = 0;
    }
}

impl RecordSource for DungeonFile {
    fn next_room(&mut self) -> Option<RoomRecord> {
        let room = self.rooms.get(self.room_cursor)?;
        self.room_cursor += 1;

        let doors = room
            .doors
            .iter()
            .filter_map(|(wall, door)| {
                if door.offset == -1 {
                    return None;
                }
                match RoomId::try_from(door.target) {
                    Ok(target) => Some(DoorRecord {
                        wall: *wall,
                        offset: door.offset,
                        target,
                    }),
                    Err(_) => {
                        warn!(
                            "room {} {wall} door at offset {} has no target room, discarding",
                            room.id, door.offset
                        );
                        None
                    }
                }
            })
            .collect();

        Some(RoomRecord {
            id: room.id,
            width: room.width,
            height: room.height,
            start: room.start,
            doors,
        })
    }

    fn next_item(&mut self) -> Option<ItemRecord> {
        let item = self.items.get(self.item_cursor)?;
        self.item_cursor += 1;
        Some(ItemRecord {
            id: item.id,
            name: item.name.clone(),
            type_name: item.type_name.clone(),
            room: item.room,
            x: item.x,
            y: item.y,
        })
    }
}

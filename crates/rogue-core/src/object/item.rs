//! Item instances

use strum::{Display, EnumIter};

use crate::data::tile::Tile;
use crate::dungeon::Position;

/// Item identifier, as listed in the dungeon definition
pub type ItemId = u32;

/// Broad item category; decides the render symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ItemType {
    Potion,
    Scroll,
    Armour,
    Food,
    Gold,
    /// Any type name the renderer has no dedicated symbol for
    Other,
}

impl ItemType {
    /// Parse a record's type name. Unknown names map to `Other`.
    pub fn from_type_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "potion" => ItemType::Potion,
            "scroll" => ItemType::Scroll,
            "armour" | "armor" => ItemType::Armour,
            "food" => ItemType::Food,
            "gold" => ItemType::Gold,
            _ => ItemType::Other,
        }
    }

    /// Render tile for this category
    pub const fn tile(self) -> Tile {
        match self {
            ItemType::Potion => Tile::Potion,
            ItemType::Scroll => Tile::Scroll,
            ItemType::Armour => Tile::Armor,
            ItemType::Food => Tile::Food,
            ItemType::Gold => Tile::Gold,
            ItemType::Other => Tile::Item,
        }
    }
}

/// An item placed at a tile of one room, or carried by the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub item_type: ItemType,
    /// Type name as written in the dungeon definition
    pub type_name: String,
    pub pos: Position,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, type_name: impl Into<String>, pos: Position) -> Self {
        let type_name = type_name.into();
        Self {
            id,
            name: name.into(),
            item_type: ItemType::from_type_name(&type_name),
            type_name,
            pos,
        }
    }
}

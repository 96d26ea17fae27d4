//! Render legend
//!
//! A `Tile` names what a character cell shows; the `SymbolTable` decides
//! which character that is.

use std::path::Path;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::world::LoadError;

/// Categories of things a room render can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Tile {
    /// North and south wall segments
    NsWall,
    /// East and west wall segments
    EwWall,
    Door,
    Floor,
    Player,
    Potion,
    Scroll,
    Armor,
    Food,
    Gold,
    /// Items of a type with no dedicated symbol
    Item,
}

impl Tile {
    /// Returns the classic ASCII representation of the tile.
    pub const fn to_ascii(self) -> char {
        match self {
            Tile::NsWall => '-',
            Tile::EwWall => '|',
            Tile::Door => '+',
            Tile::Floor => '.',
            Tile::Player => '@',
            Tile::Potion => '!',
            Tile::Scroll => '?',
            Tile::Armor => ']',
            Tile::Food => ':',
            Tile::Gold => '$',
            Tile::Item => '*',
        }
    }

    /// Key used for this tile in symbol files
    pub fn key(self) -> String {
        self.to_string()
    }
}

/// Mapping from tile to display character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: HashMap<Tile, char>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self {
            symbols: Tile::iter().map(|tile| (tile, tile.to_ascii())).collect(),
        }
    }
}

impl SymbolTable {
    pub fn symbol(&self, tile: Tile) -> char {
        self.symbols
            .get(&tile)
            .copied()
            .unwrap_or_else(|| tile.to_ascii())
    }

    pub fn set(&mut self, tile: Tile, symbol: char) {
        self.symbols.insert(tile, symbol);
    }

    /// Build a table from `{"NS_WALL": "-", ...}` entries.
    ///
    /// Missing keys keep their default; unknown keys are ignored.
    pub fn from_entries(entries: &HashMap<String, String>) -> Result<Self, LoadError> {
        let mut table = Self::default();
        for tile in Tile::iter() {
            let key = tile.key();
            if let Some(value) = entries.get(&key) {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => table.set(tile, c),
                    _ => {
                        return Err(LoadError::BadSymbol {
                            key,
                            value: value.clone(),
                        });
                    }
                }
            }
        }
        Ok(table)
    }

    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let entries: HashMap<String, String> = serde_json::from_str(json)?;
        Self::from_entries(&entries)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::CouldNotOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_legend() {
        let table = SymbolTable::default();
        let legend: String = Tile::iter().map(|t| table.symbol(t)).collect();
        assert_eq!(legend, "-|+.@!?]:$*");
    }

    #[test]
    fn test_keys() {
        assert_eq!(Tile::NsWall.key(), "NS_WALL");
        assert_eq!(Tile::EwWall.key(), "EW_WALL");
        assert_eq!(Tile::Player.key(), "PLAYER");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let table = SymbolTable::from_json_str(r##"{"DOOR": "#", "PLAYER": "P", "BOGUS": "x"}"##)
            .unwrap();
        assert_eq!(table.symbol(Tile::Door), '#');
        assert_eq!(table.symbol(Tile::Player), 'P');
        assert_eq!(table.symbol(Tile::Floor), '.');
    }

    #[test]
    fn test_multi_char_symbol_rejected() {
        let err = SymbolTable::from_json_str(r#"{"FLOOR": ".."}"#).unwrap_err();
        assert!(matches!(err, LoadError::BadSymbol { .. }));
        assert!(SymbolTable::from_json_str("not json").is_err());
    }
}

//! Loading dungeons from JSON

use rogue_core::Rogue;
use rogue_core::data::{DungeonFile, SymbolTable, Tile};
use rogue_core::world::{DungeonError, EngineOptions};

const SAMPLE: &str = r#"{
    "rooms": [
        {"id": 1, "width": 6, "height": 5, "start": true,
         "doors": {"E": {"offset": 2, "target": 2}, "S": {"offset": -1, "target": -1}}},
        {"id": 2, "width": 5, "height": 5,
         "doors": {"W": {"offset": 1, "target": 1}, "N": {"offset": 0, "target": 3}}},
        {"id": 3, "width": 7, "height": 4}
    ],
    "items": [
        {"id": 1, "name": "Healing Potion", "type": "potion", "room": 1, "x": 3, "y": 2},
        {"id": 2, "name": "Old Map", "type": "scroll", "room": -1},
        {"id": 3, "name": "Wand", "type": "wand", "room": 2, "x": 2, "y": 2}
    ],
    "symbols": {"FLOOR": " ", "PLAYER": "P"}
}"#;

#[test]
fn test_load_sample_dungeon() {
    let mut file = DungeonFile::from_json_str(SAMPLE).unwrap();
    let rogue = Rogue::from_file(&mut file, EngineOptions::seeded(11)).unwrap();

    assert_eq!(rogue.room_count(), 3);
    assert_eq!(rogue.unplaced_items().len(), 1);
    assert_eq!(rogue.unplaced_items()[0].name, "Old Map");

    // the corner door on room 2 was dropped; room 3 was doorless and got linked
    for room in rogue.rooms() {
        assert!(room.door_count() >= 1);
        for door in room.doors() {
            assert!(room.is_valid_door_offset(door.wall(), door.offset()));
        }
    }
    assert_eq!(rogue.reachable_rooms(), vec![1, 2, 3]);
}

#[test]
fn test_embedded_symbols() {
    let mut file = DungeonFile::from_json_str(SAMPLE).unwrap();
    let symbols = file.symbols().unwrap();
    assert_eq!(symbols.symbol(Tile::Floor), ' ');
    assert_eq!(symbols.symbol(Tile::Door), '+');

    let rogue = Rogue::from_file(&mut file, EngineOptions::seeded(11)).unwrap();
    let text = rogue.render(&symbols);
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|row| row.chars().count() == 6));
    assert_eq!(rows[1], "|P   |");
    assert_eq!(rows[2], "|  ! +");
}

#[test]
fn test_other_item_type_renders_generic_symbol() {
    let mut file = DungeonFile::from_json_str(SAMPLE).unwrap();
    let rogue = Rogue::from_file(&mut file, EngineOptions::seeded(11)).unwrap();
    let all = rogue.render_all(&SymbolTable::default());
    assert!(all.contains('*'));
    assert!(all.contains('!'));
}

#[test]
fn test_missing_start_room() {
    let json = r#"{"rooms": [{"id": 1, "width": 5, "height": 5}]}"#;
    let mut file = DungeonFile::from_json_str(json).unwrap();
    let err = Rogue::from_file(&mut file, EngineOptions::default()).unwrap_err();
    assert_eq!(err, DungeonError::NoStartRoom);
}

#[test]
fn test_malformed_json() {
    assert!(DungeonFile::from_json_str(r#"{"rooms": 3}"#).is_err());
}

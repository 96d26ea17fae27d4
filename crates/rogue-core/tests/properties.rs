//! Property tests for dungeon verification and movement

use proptest::prelude::*;
use rogue_core::Rogue;
use rogue_core::action::Direction;
use rogue_core::data::{ItemRecord, MemorySource, RoomRecord};
use rogue_core::dungeon::Position;
use rogue_core::object::ItemCatalog;
use rogue_core::world::{DungeonError, EngineOptions};

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::North),
        Just(Direction::South),
        Just(Direction::East),
        Just(Direction::West),
    ]
}

/// Rooms with arbitrary sizes and door declarations, some of them invalid
fn rooms() -> impl Strategy<Value = Vec<RoomRecord>> {
    prop::collection::vec(
        (
            3..9i32,
            3..9i32,
            prop::collection::vec((direction(), 0..9i32, 1..8u32), 0..4),
        ),
        1..7,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (width, height, doors))| {
                let mut room = RoomRecord::new(i as u32 + 1, width, height);
                room.start = i == 0;
                for (wall, offset, target) in doors {
                    room = room.with_door(wall, offset, target);
                }
                room
            })
            .collect()
    })
}

fn items() -> impl Strategy<Value = Vec<ItemRecord>> {
    prop::collection::vec((1..7u32, 0..9i32, 0..9i32), 0..6).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (room, x, y))| {
                ItemRecord::new(i as u32 + 1, format!("item {i}"), "gold", Some(room), x, y)
            })
            .collect()
    })
}

fn load(
    rooms: Vec<RoomRecord>,
    items: Vec<ItemRecord>,
    seed: u64,
) -> Result<Rogue, DungeonError> {
    let catalog: ItemCatalog = items.iter().map(|item| item.id).collect();
    let mut source = MemorySource::new(rooms, items);
    Rogue::load(&mut source, &catalog, EngineOptions::seeded(seed))
}

fn key() -> impl Strategy<Value = char> {
    prop_oneof![
        Just('h'),
        Just('j'),
        Just('k'),
        Just('l'),
        Just('i'),
        Just('r'),
        Just('x'),
    ]
}

proptest! {
    #[test]
    fn verified_dungeons_are_consistent(rooms in rooms(), items in items(), seed in any::<u64>()) {
        match load(rooms, items, seed) {
            Ok(rogue) => {
                let player = rogue.player().position();
                for room in rogue.rooms() {
                    prop_assert!(room.door_count() >= 1);
                    for door in room.doors() {
                        prop_assert!(room.is_valid_door_offset(door.wall(), door.offset()));
                    }

                    let here = room.has_player().then_some(player);
                    let mut seen = Vec::new();
                    for item in room.items() {
                        prop_assert!(room.is_interior(item.pos));
                        prop_assert!(Some(item.pos) != here);
                        prop_assert!(!seen.contains(&item.pos));
                        seen.push(item.pos);
                    }
                }
            }
            Err(err) => {
                prop_assert!(
                    matches!(err, DungeonError::Unrecoverable { .. } | DungeonError::NoFreeTile { .. }),
                    "unexpected error {err:?}"
                );
            }
        }
    }

    #[test]
    fn queries_never_change_state(keys in prop::collection::vec(key(), 0..30), seed in any::<u64>()) {
        let rooms = vec![
            RoomRecord::new(1, 6, 6).with_start().with_door(Direction::East, 3, 2),
            RoomRecord::new(2, 4, 7).with_door(Direction::West, 2, 1),
        ];
        let mut rogue = load(rooms, vec![], seed).unwrap();

        for key in keys {
            let _ = rogue.make_move(key);
            let before = (rogue.player().room(), rogue.player().position());
            rogue.make_move('i').unwrap();
            rogue.make_move('r').unwrap();
            prop_assert_eq!((rogue.player().room(), rogue.player().position()), before);
        }
        prop_assert_eq!(rogue.verify(), Ok(()));
    }

    #[test]
    fn door_round_trip_returns_to_start(
        wall in direction(),
        w1 in 3..10i32, h1 in 3..10i32,
        w2 in 3..10i32, h2 in 3..10i32,
        off1 in 1..8i32, off2 in 1..8i32,
    ) {
        let mut first = RoomRecord::new(1, w1, h1).with_start();
        let second = RoomRecord::new(2, w2, h2);
        let len1 = if wall == Direction::North || wall == Direction::South { w1 } else { h1 };
        let len2 = if wall == Direction::North || wall == Direction::South { w2 } else { h2 };
        let off1 = 1 + off1 % (len1 - 2);
        let off2 = 1 + off2 % (len2 - 2);
        first = first.with_door(wall, off1, 2);
        let second = second.with_door(wall.opposite(), off2, 1);

        // stand just inside the first room's door
        let start = match wall {
            Direction::North => Position::new(off1, 1),
            Direction::South => Position::new(off1, h1 - 2),
            Direction::West => Position::new(1, off1),
            Direction::East => Position::new(w1 - 2, off1),
        };
        let mut options = EngineOptions::seeded(5);
        options.start_position = start;
        let mut source = MemorySource::new(vec![first, second], vec![]);
        let mut rogue = Rogue::load(&mut source, &ItemCatalog::new(), options).unwrap();

        let there = rogue.execute(rogue_core::action::Command::Move(wall)).unwrap();
        prop_assert_eq!(there, "You have entered room 2");
        let back = rogue.execute(rogue_core::action::Command::Move(wall.opposite())).unwrap();
        prop_assert_eq!(back, "You have entered room 1");
        prop_assert_eq!(rogue.player().position(), start);
    }
}

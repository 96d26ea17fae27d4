//! Dungeon graph construction
//!
//! Rooms are read first, then door targets are linked (so a door may point
//! at a room declared later), then items are placed. Colliding items are
//! moved to a random free tile.

use log::{debug, info, warn};

use super::{Door, DungeonGraph, Position, Room};
use crate::data::records::{ItemRecord, RecordSource, RoomRecord};
use crate::object::{Item, ItemCatalog};
use crate::rng::GameRng;
use crate::world::{DungeonError, EngineOptions, PlacementError};

/// A linked dungeon, ready for verification
#[derive(Debug, Clone)]
pub struct BuiltDungeon {
    pub graph: DungeonGraph,
    /// Arena index of the start room
    pub start: usize,
    /// Items that are not in any room
    pub unplaced: Vec<Item>,
}

/// Build the room graph and place items from a record source
pub fn build_dungeon<S: RecordSource + ?Sized>(
    source: &mut S,
    catalog: &ItemCatalog,
    options: &EngineOptions,
    rng: &mut GameRng,
) -> Result<BuiltDungeon, DungeonError> {
    let (mut graph, start) = build_rooms(source)?;

    for (room, wall, target) in graph.resolve_doors() {
        warn!("room {room}: {wall} door leads to unknown room {target}");
    }

    let start_room = graph.room_mut(start);
    start_room.set_start(true);
    start_room.set_player_present(true);

    let unplaced = place_items(
        &mut graph,
        source,
        catalog,
        start,
        options.start_position,
        options.placement_attempts,
        rng,
    )?;

    info!(
        "loaded {} rooms, {} placed items, {} unplaced items",
        graph.len(),
        graph.rooms().iter().map(|r| r.items().len()).sum::<usize>(),
        unplaced.len()
    );

    Ok(BuiltDungeon {
        graph,
        start,
        unplaced,
    })
}

/// Instantiate every room record, returning the graph and start room index
fn build_rooms<S: RecordSource + ?Sized>(
    source: &mut S,
) -> Result<(DungeonGraph, usize), DungeonError> {
    let mut graph = DungeonGraph::new();
    let mut start = None;

    while let Some(record) = source.next_room() {
        let room = room_from_record(&record)?;
        let idx = graph
            .push(room)
            .ok_or(DungeonError::DuplicateRoom { id: record.id })?;

        if record.start {
            if start.is_none() {
                start = Some(idx);
            } else {
                warn!("room {} is also marked as start, ignoring", record.id);
            }
        }
    }

    let start = start.ok_or(DungeonError::NoStartRoom)?;
    Ok((graph, start))
}

fn room_from_record(record: &RoomRecord) -> Result<Room, DungeonError> {
    let mut room = Room::new(record.id, record.width, record.height)?;
    for door in &record.doors {
        if !room.set_door(Door::new(door.wall, door.offset, door.target)) {
            warn!(
                "room {}: discarding {} door at offset {}",
                record.id, door.wall, door.offset
            );
        }
    }
    Ok(room)
}

fn place_items<S: RecordSource + ?Sized>(
    graph: &mut DungeonGraph,
    source: &mut S,
    catalog: &ItemCatalog,
    start: usize,
    start_position: Position,
    max_attempts: usize,
    rng: &mut GameRng,
) -> Result<Vec<Item>, DungeonError> {
    let mut unplaced = Vec::new();

    while let Some(record) = source.next_item() {
        let item = item_from_record(&record);
        let Some(room_id) = record.room else {
            unplaced.push(item);
            continue;
        };
        let Some(idx) = graph.index_of(room_id) else {
            warn!("item {} names unknown room {room_id}", record.id);
            unplaced.push(item);
            continue;
        };

        let player = (idx == start).then_some(start_position);
        place_item(graph.room_mut(idx), item, catalog, player, max_attempts, rng)?;
    }

    Ok(unplaced)
}

fn item_from_record(record: &ItemRecord) -> Item {
    Item::new(
        record.id,
        record.name.clone(),
        record.type_name.clone(),
        Position::new(record.x, record.y),
    )
}

/// Add one item, relocating it while its tile is taken
fn place_item(
    room: &mut Room,
    mut item: Item,
    catalog: &ItemCatalog,
    player: Option<Position>,
    max_attempts: usize,
    rng: &mut GameRng,
) -> Result<(), DungeonError> {
    let mut attempts = 0;
    loop {
        match room.add_item(item.clone(), catalog, player) {
            Ok(()) => return Ok(()),
            Err(PlacementError::NoSuchItem(id)) => {
                debug!("item {id} is not in the catalog, discarding");
                return Ok(());
            }
            Err(PlacementError::ImpossiblePosition(pos)) => {
                if attempts >= max_attempts {
                    return Err(DungeonError::PlacementExhausted {
                        item: item.id,
                        room: room.id(),
                        attempts,
                    });
                }
                attempts += 1;
                let tile = room
                    .empty_tile(rng, player)
                    .ok_or(DungeonError::NoFreeTile { room: room.id() })?;
                debug!(
                    "room {}: moving item {} from {pos} to {tile}",
                    room.id(),
                    item.id
                );
                item.pos = tile;
            }
        }
    }
}

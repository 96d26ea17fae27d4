//! Movement
//!
//! One step of the player: classify the target tile, reject walls, pick up
//! items, and carry the player through doors into the next room's
//! coordinates. All checks happen before anything is changed.

use super::Direction;
use super::pickup::pick_up_at;
use crate::dungeon::{DungeonGraph, RoomId};
use crate::player::Player;
use crate::world::MoveError;

pub use crate::dungeon::TileKind;

/// What a successful step did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Plain step onto floor
    Headed(Direction),
    /// Stepped onto an item and took it
    PickedUp(String),
    /// Crossed a door into another room, taking any item on the arrival tile
    Entered(RoomId, Option<String>),
}

impl MoveOutcome {
    /// Narration shown to the player
    pub fn message(&self) -> String {
        match self {
            MoveOutcome::Headed(dir) => format!("You are headed {dir}"),
            MoveOutcome::PickedUp(name) => format!("You picked up {name}!"),
            MoveOutcome::Entered(id, None) => format!("You have entered room {id}"),
            MoveOutcome::Entered(id, Some(name)) => {
                format!("You have entered room {id}. You picked up {name}!")
            }
        }
    }
}

/// Move the player one tile in `dir`
pub fn execute_move(
    graph: &mut DungeonGraph,
    player: &mut Player,
    dir: Direction,
) -> Result<MoveOutcome, MoveError> {
    let here = player.room_index();
    let target = player.position().step(dir);

    match graph.room(here).classify(target) {
        TileKind::Wall => Err(MoveError::Wall),
        TileKind::Floor => {
            player.set_position(target);
            Ok(MoveOutcome::Headed(dir))
        }
        TileKind::Item => {
            let picked = pick_up_at(graph.room_mut(here), player, target);
            player.set_position(target);
            Ok(picked.map_or(MoveOutcome::Headed(dir), MoveOutcome::PickedUp))
        }
        TileKind::Door(wall) => cross_door(graph, player, here, wall),
    }
}

fn cross_door(
    graph: &mut DungeonGraph,
    player: &mut Player,
    here: usize,
    wall: Direction,
) -> Result<MoveOutcome, MoveError> {
    let room = graph.room(here);
    let next = room
        .door(wall)
        .and_then(|door| door.connected())
        .ok_or(MoveError::DanglingDoor {
            room: room.id(),
            wall,
        })?;

    let entry = wall.opposite();
    let dest = graph.room(next);
    let arrival = dest.arrival_position(entry).ok_or(MoveError::NoReturnDoor {
        room: dest.id(),
        wall: entry,
    })?;
    let dest_id = dest.id();

    graph.room_mut(here).set_player_present(false);
    let dest = graph.room_mut(next);
    dest.set_player_present(true);
    let picked = pick_up_at(dest, player, arrival);
    player.enter(dest_id, next, arrival);
    Ok(MoveOutcome::Entered(dest_id, picked))
}

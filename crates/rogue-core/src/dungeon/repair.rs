//! Graph verification and repair
//!
//! Every room must end up with at least one door. A doorless room is paired
//! with another room through mirrored walls (N/S, E/W) and the full scan
//! starts over, until nothing is left to fix or the repair budget runs out.

use std::collections::VecDeque;

use log::{debug, warn};

use super::{Door, DungeonGraph, Position, RoomFault};
use crate::action::Direction;
use crate::rng::GameRng;
use crate::world::DungeonError;

/// Run the verify/repair fixed point, then try to connect unreachable rooms.
///
/// `player` is the arena index of the room holding the player and the
/// player's position in it; reachability is always rooted at `start`.
/// Returns the number of door pairs created by the fixed point.
pub fn verify_and_repair(
    graph: &mut DungeonGraph,
    start: usize,
    player: (usize, Position),
    budget: usize,
    rng: &mut GameRng,
) -> Result<usize, DungeonError> {
    let mut repairs = 0;

    while let Some(idx) = first_doorless(graph, player)? {
        let room_id = graph.room(idx).id();
        if repairs >= budget {
            return Err(DungeonError::Unrecoverable {
                room: room_id,
                reason: format!("repair budget of {budget} exhausted"),
            });
        }

        let partners: Vec<usize> = (0..graph.len()).filter(|&other| other != idx).collect();
        if link_rooms(graph, idx, &partners, rng).is_none() {
            return Err(DungeonError::Unrecoverable {
                room: room_id,
                reason: "no room can take a door on a mirrored wall".to_string(),
            });
        }
        repairs += 1;
    }

    connect_unreachable(graph, start, rng);
    Ok(repairs)
}

/// Scan rooms in load order; placement faults are fatal, the first doorless
/// room is returned for repair
fn first_doorless(
    graph: &DungeonGraph,
    (player_room, player): (usize, Position),
) -> Result<Option<usize>, DungeonError> {
    for (idx, room) in graph.rooms().iter().enumerate() {
        let player = (idx == player_room).then_some(player);
        match room.verify(player) {
            Ok(()) => {}
            Err(RoomFault::NoDoors) => return Ok(Some(idx)),
            Err(fault) => {
                return Err(DungeonError::Unrecoverable {
                    room: room.id(),
                    reason: fault.to_string(),
                });
            }
        }
    }
    Ok(None)
}

/// Give room `idx` a door pair with the first usable partner.
///
/// Walls of `idx` are tried in N, S, E, W order and, for each, partners in
/// the order given. Both doors get a random non-corner offset and are linked
/// at once. Returns the wall used on `idx` and the partner index.
pub fn link_rooms(
    graph: &mut DungeonGraph,
    idx: usize,
    partners: &[usize],
    rng: &mut GameRng,
) -> Option<(Direction, usize)> {
    let (wall, partner) = graph.room(idx).free_walls().find_map(|wall| {
        partners
            .iter()
            .copied()
            .find(|&other| other != idx && !graph.room(other).has_door(wall.opposite()))
            .map(|other| (wall, other))
    })?;

    let here_id = graph.room(idx).id();
    let there_id = graph.room(partner).id();
    let mut here = Door::new(wall, random_offset(graph, idx, wall, rng), there_id);
    let mut there = Door::new(
        wall.opposite(),
        random_offset(graph, partner, wall.opposite(), rng),
        here_id,
    );
    here.connect(partner);
    there.connect(idx);

    graph.room_mut(idx).set_door(here);
    graph.room_mut(partner).set_door(there);
    debug!(
        "linked room {here_id} {wall} door at {} with room {there_id} {} door at {}",
        here.offset(),
        wall.opposite(),
        there.offset()
    );
    Some((wall, partner))
}

fn random_offset(graph: &DungeonGraph, idx: usize, wall: Direction, rng: &mut GameRng) -> i32 {
    let len = graph.room(idx).wall_length(wall);
    rng.between(1, len - 2)
}

/// Arena indices reachable from `start`, flagged per room
pub fn reachable_from(graph: &DungeonGraph, start: usize) -> Vec<bool> {
    let mut seen = vec![false; graph.len()];
    if start >= graph.len() {
        return seen;
    }
    let mut queue = VecDeque::from([start]);
    seen[start] = true;

    while let Some(idx) = queue.pop_front() {
        for wall in Direction::ALL {
            if let Some(next) = graph.traverse(idx, wall)
                && !seen[next]
            {
                seen[next] = true;
                queue.push_back(next);
            }
        }
    }
    seen
}

/// Pair each unreachable room with a reachable one where walls allow
fn connect_unreachable(graph: &mut DungeonGraph, start: usize, rng: &mut GameRng) {
    let mut reachable = reachable_from(graph, start);

    for idx in 0..graph.len() {
        if reachable[idx] {
            continue;
        }
        let partners: Vec<usize> = (0..graph.len()).filter(|&i| reachable[i]).collect();
        if link_rooms(graph, idx, &partners, rng).is_some() {
            reachable = reachable_from(graph, start);
        }
    }

    for (idx, ok) in reachable.iter().enumerate() {
        if !ok {
            warn!("room {} cannot be reached from the start room", graph.room(idx).id());
        }
    }
}

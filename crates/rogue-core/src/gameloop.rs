//! The game engine
//!
//! [`Rogue`] owns the room arena, the player and the RNG. It is built from a
//! record source, verified (repairing doorless rooms), and then driven one
//! key at a time through [`Rogue::make_move`].

use log::{debug, info};

use crate::action::{self, Command, KeyBindings, MoveOutcome};
use crate::data::records::{DungeonFile, RecordSource};
use crate::data::tile::SymbolTable;
use crate::dungeon::{self, BuiltDungeon, DungeonGraph, Room, RoomId};
use crate::object::{Item, ItemCatalog};
use crate::player::Player;
use crate::rng::GameRng;
use crate::world::{DungeonError, EngineOptions, MoveError};

/// Goodbye line printed when the player quits
pub const OUTRO: &str = "Thank you for playing Rogue!";

/// A loaded dungeon and the player exploring it
#[derive(Debug, Clone)]
pub struct Rogue {
    graph: DungeonGraph,
    start: usize,
    player: Player,
    unplaced: Vec<Item>,
    keybindings: KeyBindings,
    repair_budget: usize,
    rng: GameRng,
}

impl Rogue {
    /// Build the dungeon graph and place items. The result is not verified;
    /// call [`Rogue::verify`] before play.
    pub fn new<S: RecordSource + ?Sized>(
        source: &mut S,
        catalog: &ItemCatalog,
        options: EngineOptions,
    ) -> Result<Self, DungeonError> {
        let mut rng = match options.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        debug!("dungeon rng seed {}", rng.seed());

        let BuiltDungeon {
            graph,
            start,
            unplaced,
        } = dungeon::build_dungeon(source, catalog, &options, &mut rng)?;

        let start_room = graph.room(start);
        let player = Player::new(
            options.name.clone(),
            start_room.id(),
            start,
            options.start_position,
        );

        Ok(Self {
            repair_budget: options.effective_repair_budget(graph.len()),
            graph,
            start,
            player,
            unplaced,
            keybindings: options.keybindings,
            rng,
        })
    }

    /// Build and verify in one go
    pub fn load<S: RecordSource + ?Sized>(
        source: &mut S,
        catalog: &ItemCatalog,
        options: EngineOptions,
    ) -> Result<Self, DungeonError> {
        let mut rogue = Self::new(source, catalog, options)?;
        rogue.verify()?;
        Ok(rogue)
    }

    /// Load a JSON dungeon, using its own item catalog
    pub fn from_file(file: &mut DungeonFile, options: EngineOptions) -> Result<Self, DungeonError> {
        let catalog = file.catalog();
        file.rewind();
        Self::load(file, &catalog, options)
    }

    /// Check every room and repair doorless ones until the graph is playable
    pub fn verify(&mut self) -> Result<(), DungeonError> {
        let repairs = dungeon::verify_and_repair(
            &mut self.graph,
            self.start,
            (self.player.room_index(), self.player.position()),
            self.repair_budget,
            &mut self.rng,
        )?;
        info!(
            "dungeon verified with {repairs} repairs, {} of {} rooms reachable",
            self.reachable_rooms().len(),
            self.graph.len()
        );
        Ok(())
    }

    /// Handle one input character and return the narration
    pub fn make_move(&mut self, key: char) -> Result<String, MoveError> {
        match self.keybindings.get_command(key) {
            Some(command) => self.execute(command),
            None => Ok(format!("You pressed {key}")),
        }
    }

    /// Run a command directly
    pub fn execute(&mut self, command: Command) -> Result<String, MoveError> {
        if !command.is_query() {
            debug!("executing {} in room {}", command.name(), self.player.room());
        }
        match command {
            Command::Move(dir) => {
                let outcome = action::execute_move(&mut self.graph, &mut self.player, dir)
                    .inspect_err(|err| debug!("illegal move: {err}"))?;
                if let MoveOutcome::Entered(id, _) = outcome {
                    info!("player entered room {id}");
                }
                Ok(outcome.message())
            }
            Command::Inventory => Ok(action::inventory_listing(&self.player)),
            Command::RoomId => Ok(format!(
                "You are in Room {} (total rooms: {})",
                self.player.room(),
                self.graph.len()
            )),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn rooms(&self) -> &[Room] {
        self.graph.rooms()
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.graph.room_by_id(id)
    }

    pub fn room_count(&self) -> usize {
        self.graph.len()
    }

    pub fn current_room(&self) -> &Room {
        self.graph.room(self.player.room_index())
    }

    pub fn start_room(&self) -> &Room {
        self.graph.room(self.start)
    }

    /// Items that were declared outside every room
    pub fn unplaced_items(&self) -> &[Item] {
        &self.unplaced
    }

    pub fn keybindings(&self) -> &KeyBindings {
        &self.keybindings
    }

    /// Ids of the rooms reachable from the start room, in load order
    pub fn reachable_rooms(&self) -> Vec<RoomId> {
        dungeon::reachable_from(&self.graph, self.start)
            .into_iter()
            .zip(self.graph.rooms())
            .filter_map(|(reachable, room)| reachable.then_some(room.id()))
            .collect()
    }

    /// Draw the current room with the player in it
    pub fn render(&self, symbols: &SymbolTable) -> String {
        self.current_room()
            .render(symbols, Some(self.player.position()))
    }

    /// Draw every room in load order
    pub fn render_all(&self, symbols: &SymbolTable) -> String {
        let here = self.player.room_index();
        self.graph
            .rooms()
            .iter()
            .enumerate()
            .map(|(idx, room)| {
                let player = (idx == here).then_some(self.player.position());
                room.render(symbols, player)
            })
            .collect()
    }
}

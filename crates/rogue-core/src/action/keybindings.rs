//! Key binding management
//!
//! Maps single input characters to commands. The default layout is the
//! classic one for this game: `h`/`l` north/south, `j`/`k` west/east,
//! `i` inventory and `r` room number.

use hashbrown::HashMap;

use super::{ALL_COMMANDS, Command, Direction};

/// Default key for moving north
pub const UP: char = 'h';
/// Default key for moving south
pub const DOWN: char = 'l';
/// Default key for moving west
pub const LEFT: char = 'j';
/// Default key for moving east
pub const RIGHT: char = 'k';
/// Default key for the inventory listing
pub const INVENTORY: char = 'i';
/// Default key for the room number query
pub const ROOM_ID: char = 'r';

/// Custom key binding configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: HashMap<char, Command>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(UP, Command::Move(Direction::North));
        bindings.insert(DOWN, Command::Move(Direction::South));
        bindings.insert(LEFT, Command::Move(Direction::West));
        bindings.insert(RIGHT, Command::Move(Direction::East));
        bindings.insert(INVENTORY, Command::Inventory);
        bindings.insert(ROOM_ID, Command::RoomId);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Create a key map with no bindings at all
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind a command to a key, replacing whatever key the command had before
    pub fn bind_key(&mut self, command: Command, key: char) -> Result<(), String> {
        if is_illegal_key(key) {
            return Err(format!("Cannot bind key '{}' - illegal key", key.escape_default()));
        }

        self.bindings.retain(|_, bound| *bound != command);
        self.bindings.insert(key, command);
        Ok(())
    }

    /// Get command for a key
    pub fn get_command(&self, key: char) -> Option<Command> {
        self.bindings.get(&key).copied()
    }

    /// Get the key currently bound to a command
    pub fn get_key(&self, command: Command) -> Option<char> {
        let mut keys: Vec<char> = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == command)
            .map(|(key, _)| *key)
            .collect();
        keys.sort_unstable();
        keys.first().copied()
    }

    /// Remove a key binding
    pub fn unbind_key(&mut self, key: char) -> Option<Command> {
        self.bindings.remove(&key)
    }

    /// Number of bound keys
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// One-line help text listing the bound keys
    pub fn help_line(&self) -> String {
        ALL_COMMANDS
            .iter()
            .filter_map(|cmd| self.get_key(*cmd).map(|key| format!("{key}: {}", cmd.name())))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

/// Keys that cannot carry a binding
fn is_illegal_key(key: char) -> bool {
    key.is_control() || key.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let keys = KeyBindings::default();
        assert_eq!(keys.get_command('h'), Some(Command::Move(Direction::North)));
        assert_eq!(keys.get_command('l'), Some(Command::Move(Direction::South)));
        assert_eq!(keys.get_command('j'), Some(Command::Move(Direction::West)));
        assert_eq!(keys.get_command('k'), Some(Command::Move(Direction::East)));
        assert_eq!(keys.get_command('i'), Some(Command::Inventory));
        assert_eq!(keys.get_command('r'), Some(Command::RoomId));
        assert_eq!(keys.get_command('x'), None);
        assert_eq!(keys.len(), 6);
    }

    #[test]
    fn test_rebind_moves_command() {
        let mut keys = KeyBindings::default();
        keys.bind_key(Command::Move(Direction::North), 'w').unwrap();
        assert_eq!(keys.get_command('w'), Some(Command::Move(Direction::North)));
        assert_eq!(keys.get_command('h'), None);
        assert_eq!(keys.get_key(Command::Move(Direction::North)), Some('w'));
    }

    #[test]
    fn test_rebind_steals_key() {
        let mut keys = KeyBindings::default();
        keys.bind_key(Command::Inventory, 'h').unwrap();
        assert_eq!(keys.get_command('h'), Some(Command::Inventory));
        assert_eq!(keys.get_key(Command::Move(Direction::North)), None);
    }

    #[test]
    fn test_illegal_keys_rejected() {
        let mut keys = KeyBindings::empty();
        assert!(keys.bind_key(Command::Inventory, ' ').is_err());
        assert!(keys.bind_key(Command::Inventory, '\n').is_err());
        assert!(keys.is_empty());
    }

    #[test]
    fn test_unbind() {
        let mut keys = KeyBindings::default();
        assert_eq!(keys.unbind_key('r'), Some(Command::RoomId));
        assert_eq!(keys.unbind_key('r'), None);
    }

    #[test]
    fn test_help_line_lists_defaults() {
        let line = KeyBindings::default().help_line();
        assert!(line.starts_with("h: north"));
        assert!(line.contains("r: room"));
    }
}

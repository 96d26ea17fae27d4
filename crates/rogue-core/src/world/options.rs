//! Engine options and configuration
//!
//! Handles seeding, repair/placement limits, the player's start tile and
//! key bindings, plus loading them from a small rc file.

use std::path::Path;

use thiserror::Error;

use crate::action::{Command, KeyBindings};
use crate::dungeon::Position;

/// Default cap on replacement tiles tried for one colliding item
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 64;

/// User-configurable engine options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Player name shown by the front-end
    pub name: String,
    /// RNG seed; entropy when absent
    pub seed: Option<u64>,
    /// Maximum repairs before giving up; `rooms²` when absent
    pub repair_budget: Option<usize>,
    /// Maximum replacement tiles tried per colliding item
    pub placement_attempts: usize,
    /// Player tile in the start room
    pub start_position: Position,
    pub keybindings: KeyBindings,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            name: "Rogue".to_string(),
            seed: None,
            repair_budget: None,
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
            start_position: Position::new(1, 1),
            keybindings: KeyBindings::default(),
        }
    }
}

impl EngineOptions {
    /// Options with a fixed seed, everything else default
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Repair budget for a dungeon of `rooms` rooms
    pub fn effective_repair_budget(&self, rooms: usize) -> usize {
        self.repair_budget
            .unwrap_or_else(|| rooms.saturating_mul(rooms))
            .max(1)
    }

    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| OptionsError::IoError(e.to_string()))?;

        Self::parse_config(&contents)
    }

    /// Parse options from a config string (`key=value` per line)
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| OptionsError::ParseError(line.to_string()))?;
            options.set_option(key.trim(), value.trim())?;
        }

        Ok(options)
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionsError> {
        if value.is_empty() {
            return Err(OptionsError::MissingValue(name.to_string()));
        }
        let invalid = || OptionsError::InvalidValue(name.to_string(), value.to_string());

        match name {
            "name" => self.name = value.to_string(),
            "seed" => self.seed = Some(value.parse().map_err(|_| invalid())?),
            "repair_budget" => self.repair_budget = Some(value.parse().map_err(|_| invalid())?),
            "placement_attempts" => {
                let attempts: usize = value.parse().map_err(|_| invalid())?;
                if attempts == 0 {
                    return Err(invalid());
                }
                self.placement_attempts = attempts;
            }
            "start" => {
                let (x, y) = value.split_once(',').ok_or_else(invalid)?;
                let x: i32 = x.trim().parse().map_err(|_| invalid())?;
                let y: i32 = y.trim().parse().map_err(|_| invalid())?;
                self.start_position = Position::new(x, y);
            }
            "bind" => {
                let (cmd, key) = value.split_once(':').ok_or_else(invalid)?;
                let command = Command::from_name(cmd).ok_or_else(invalid)?;
                let mut chars = key.trim().chars();
                let key = match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => return Err(invalid()),
                };
                self.keybindings
                    .bind_key(command, key)
                    .map_err(|_| invalid())?;
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Convert options to config file format
    pub fn to_config_string(&self) -> String {
        let mut lines = vec!["# rogue configuration file".to_string()];
        lines.push(format!("name={}", self.name));
        if let Some(seed) = self.seed {
            lines.push(format!("seed={seed}"));
        }
        if let Some(budget) = self.repair_budget {
            lines.push(format!("repair_budget={budget}"));
        }
        lines.push(format!("placement_attempts={}", self.placement_attempts));
        lines.push(format!(
            "start={},{}",
            self.start_position.x, self.start_position.y
        ));
        for command in crate::action::ALL_COMMANDS {
            if let Some(key) = self.keybindings.get_key(command) {
                lines.push(format!("bind={}:{key}", command.name()));
            }
        }
        lines.join("\n")
    }
}

/// Options parsing error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),
    #[error("Missing value for option '{0}'")]
    MissingValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Direction;

    #[test]
    fn test_default_options() {
        let opts = EngineOptions::default();
        assert_eq!(opts.seed, None);
        assert_eq!(opts.placement_attempts, 64);
        assert_eq!(opts.start_position, Position::new(1, 1));
        assert_eq!(opts.keybindings, KeyBindings::default());
    }

    #[test]
    fn test_repair_budget_defaults_to_rooms_squared() {
        let mut opts = EngineOptions::default();
        assert_eq!(opts.effective_repair_budget(4), 16);
        assert_eq!(opts.effective_repair_budget(0), 1);
        opts.repair_budget = Some(3);
        assert_eq!(opts.effective_repair_budget(10), 3);
    }

    #[test]
    fn test_parse_values() {
        let config = "\
# comment
seed=42
repair_budget = 16
placement_attempts=10
start=2,3
";
        let opts = EngineOptions::parse_config(config).unwrap();
        assert_eq!(opts.seed, Some(42));
        assert_eq!(opts.repair_budget, Some(16));
        assert_eq!(opts.placement_attempts, 10);
        assert_eq!(opts.start_position, Position::new(2, 3));
    }

    #[test]
    fn test_parse_keybinding() {
        let opts = EngineOptions::parse_config("bind=north:w").unwrap();
        assert_eq!(
            opts.keybindings.get_command('w'),
            Some(Command::Move(Direction::North))
        );
        assert_eq!(opts.keybindings.get_command('h'), None);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            EngineOptions::parse_config("colour=red"),
            Err(OptionsError::UnknownOption("colour".into()))
        );
        assert_eq!(
            EngineOptions::parse_config("seed=abc"),
            Err(OptionsError::InvalidValue("seed".into(), "abc".into()))
        );
        assert_eq!(
            EngineOptions::parse_config("seed="),
            Err(OptionsError::MissingValue("seed".into()))
        );
        assert!(matches!(
            EngineOptions::parse_config("just words"),
            Err(OptionsError::ParseError(_))
        ));
        assert!(EngineOptions::parse_config("bind=north:ww").is_err());
        assert!(EngineOptions::parse_config("bind=jump:x").is_err());
        assert!(EngineOptions::parse_config("placement_attempts=0").is_err());
    }

    #[test]
    fn test_roundtrip() {
        let mut opts = EngineOptions::seeded(7);
        opts.name = "Tester".to_string();
        opts.start_position = Position::new(3, 2);
        opts.keybindings
            .bind_key(Command::Inventory, 'x')
            .unwrap();

        let parsed = EngineOptions::parse_config(&opts.to_config_string()).unwrap();
        assert_eq!(parsed, opts);
    }

    #[test]
    fn test_load_missing_file() {
        let err = EngineOptions::load_from_file(Path::new("/nonexistent/roguerc")).unwrap_err();
        assert!(matches!(err, OptionsError::IoError(_)));
    }
}

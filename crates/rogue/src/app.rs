//! Application state and main UI controller

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use rogue_core::Rogue;
use rogue_core::data::SymbolTable;

/// Application state
pub struct App {
    rogue: Rogue,
    symbols: SymbolTable,
    /// Last narration or error line
    message: String,
    /// Shown below the message line
    help: String,
    should_quit: bool,
}

impl App {
    pub fn new(rogue: Rogue, symbols: SymbolTable) -> Self {
        let help = format!("{}  Esc: quit", rogue.keybindings().help_line());
        let message = format!("Welcome, {}!", rogue.player().name);
        Self {
            rogue,
            symbols,
            message,
            help,
            should_quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => self.handle_char(c),
            _ => {}
        }
    }

    /// Feed one character to the engine; illegal moves only update the message
    fn handle_char(&mut self, c: char) {
        if c == 'q' && self.rogue.keybindings().get_command(c).is_none() {
            self.should_quit = true;
            return;
        }
        self.message = match self.rogue.make_move(c) {
            Ok(narration) => narration,
            Err(err) => err.to_string(),
        };
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let room = self.rogue.render(&self.symbols);
        let room_height = room.lines().count() as u16;

        // Layout: room at top, message line, key help at bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(room_height + 2),
                Constraint::Length(3),
                Constraint::Min(1),
            ])
            .split(frame.area());

        let title = format!(
            " Room {} of {} ",
            self.rogue.current_room().id(),
            self.rogue.room_count()
        );
        let map = Paragraph::new(room).block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(map, chunks[0]);

        let message = Paragraph::new(self.message.as_str())
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(message, chunks[1]);

        let help = Paragraph::new(self.help.as_str()).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use rogue_core::action::Direction as Compass;
    use rogue_core::data::{MemorySource, RoomRecord};
    use rogue_core::object::ItemCatalog;
    use rogue_core::world::EngineOptions;

    fn new_app() -> App {
        let mut source = MemorySource::new(
            vec![
                RoomRecord::new(1, 5, 5)
                    .with_start()
                    .with_door(Compass::East, 2, 2),
                RoomRecord::new(2, 5, 5).with_door(Compass::West, 2, 1),
            ],
            vec![],
        );
        let rogue =
            Rogue::load(&mut source, &ItemCatalog::new(), EngineOptions::seeded(1)).unwrap();
        App::new(rogue, SymbolTable::default())
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_move_updates_message() {
        let mut app = new_app();
        app.handle_event(key(KeyCode::Char('k')));
        assert_eq!(app.message, "You are headed East");
        app.handle_event(key(KeyCode::Char('j')));
        app.handle_event(key(KeyCode::Char('j')));
        assert_eq!(app.message, "There's a wall in the way");
        assert!(!app.should_quit());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.should_quit());

        let mut app = new_app();
        app.handle_event(key(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn test_help_line_lists_keys() {
        let app = new_app();
        assert!(app.help.contains("h: north"));
        assert!(app.help.ends_with("Esc: quit"));
    }
}

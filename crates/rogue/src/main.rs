//! Rogue dungeon crawler
//!
//! Main entry point for the game.

mod app;

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use rogue_core::data::{DungeonFile, SymbolTable};
use rogue_core::world::EngineOptions;
use rogue_core::{OUTRO, Rogue};

use crate::app::App;

#[derive(Parser)]
#[command(name = "rogue")]
#[command(about = "Walk a dungeon of rooms and doors, one key at a time")]
#[command(version)]
struct Cli {
    /// Dungeon definition (JSON)
    #[arg(default_value = "assets/sample_dungeon.json")]
    dungeon: PathBuf,

    /// Symbol legend (JSON); overrides symbols embedded in the dungeon
    #[arg(short, long)]
    symbols: Option<PathBuf>,

    /// Options file (`key=value` lines)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed for repairs and item relocation
    #[arg(long)]
    seed: Option<u64>,

    /// Print every room and exit instead of playing
    #[arg(long)]
    dump: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_ref())?;

    let mut options = match &cli.config {
        Some(path) => EngineOptions::load_from_file(path).map_err(io::Error::other)?,
        None => EngineOptions::default(),
    };
    if cli.seed.is_some() {
        options.seed = cli.seed;
    }

    let mut file = DungeonFile::load_from_file(&cli.dungeon).map_err(io::Error::other)?;
    let symbols = match &cli.symbols {
        Some(path) => SymbolTable::load_from_file(path),
        None => file.symbols(),
    }
    .map_err(io::Error::other)?;
    let rogue = Rogue::from_file(&mut file, options).map_err(io::Error::other)?;
    info!("starting in room {}", rogue.current_room().id());

    if cli.dump {
        print!("{}", rogue.render_all(&symbols));
        return Ok(());
    }

    run(App::new(rogue, symbols))?;
    println!("{OUTRO}");
    Ok(())
}

fn run(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = loop {
        if let Err(err) = terminal.draw(|frame| app.render(frame)) {
            break Err(err);
        }

        match event::poll(Duration::from_millis(100)) {
            Ok(true) => match event::read() {
                Ok(event) => app.handle_event(event),
                Err(err) => break Err(err),
            },
            Ok(false) => {}
            Err(err) => break Err(err),
        }

        if app.should_quit() {
            break Ok(());
        }
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn init_logging(verbosity: u8, log_file: Option<&PathBuf>) -> io::Result<()> {
    let mut builder = env_logger::Builder::new();
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);
    builder.parse_default_env();
    if let Some(path) = log_file {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

mod build_info;
mod config;
mod constants;
mod core;
mod input;
mod ui;

use crate::config::GameConfig;
use crate::constants::{EVENT_LOG_CAPACITY, INPUT_POLL_MS, TICK_INTERVAL_MS};
use crate::core::session::{GameSession, Status, TickEvent};
use crate::input::GameInput;
use crate::ui::Theme;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "skyward {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Skyward - Terminal Reflex Game\n");
                println!("Usage: skyward\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                println!("\nControls: Space jumps, R restarts after a crash, Q quits.");
                println!(
                    "Settings: optional config.json and theme.json under ~/.skyward/"
                );
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'skyward --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let config = load_config();
    let theme = load_theme();

    // Invalid configuration values fail fast, before the terminal is taken over
    let mut rng = rand::thread_rng();
    let mut session = GameSession::new(config, &mut rng)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut event_log: Vec<String> = Vec::new();
    let mut last_tick = Instant::now();

    // Main loop: draw, poll input, tick at a fixed rate
    loop {
        let snapshot = session.snapshot();
        terminal.draw(|frame| ui::draw_ui(frame, &snapshot, &theme, &event_log))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                match input::map_key(key_event.code) {
                    GameInput::Quit => break,
                    GameInput::Restart if session.status == Status::Lost => {
                        input::process_input(&mut session, GameInput::Restart, &mut rng);
                        event_log.clear();
                        push_message(&mut event_log, "Back in the air!".to_string());
                    }
                    other => input::process_input(&mut session, other, &mut rng),
                }
            }
        }

        if last_tick.elapsed() >= Duration::from_millis(TICK_INTERVAL_MS) {
            let result = session.tick(&mut rng);
            for tick_event in &result.events {
                push_message(&mut event_log, describe_event(tick_event));
            }
            last_tick = Instant::now();
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    println!("Final score: {}", session.score);

    Ok(())
}

/// Loads the optional config file; unreadable files warn and fall back to
/// defaults. Invalid *values* are rejected later, at session creation.
fn load_config() -> GameConfig {
    match config::config_path() {
        Ok(path) if path.exists() => match GameConfig::load_from(&path) {
            Ok(loaded) => loaded,
            Err(e) => {
                println!("Warning: could not read {}: {}", path.display(), e);
                println!("Falling back to default settings.");
                GameConfig::default()
            }
        },
        _ => GameConfig::default(),
    }
}

/// Loads the optional theme file; any failure warns and falls back to the
/// built-in glyphs. Never fatal.
fn load_theme() -> Theme {
    match ui::theme::theme_path() {
        Ok(path) if path.exists() => match Theme::load_from(&path) {
            Ok(loaded) => loaded,
            Err(e) => {
                println!("Warning: could not read {}: {}", path.display(), e);
                println!("Falling back to built-in glyphs.");
                Theme::default()
            }
        },
        _ => Theme::default(),
    }
}

fn describe_event(tick_event: &TickEvent) -> String {
    match tick_event {
        TickEvent::PairPassed { score } => format!("Passed a pair ({})", score),
        TickEvent::Collided => "Smacked into an obstacle.".to_string(),
        TickEvent::BottomedOut => "Fell out of the sky.".to_string(),
    }
}

/// Newest first, capped.
fn push_message(event_log: &mut Vec<String>, message: String) {
    event_log.insert(0, message);
    event_log.truncate(EVENT_LOG_CAPACITY);
}

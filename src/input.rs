//! Key-event mapping and input application.
//!
//! The simulation sees only the discrete [`GameInput`] commands; everything
//! about the keyboard stays here.

use crate::core::session::{GameSession, Status};
use crossterm::event::KeyCode;
use rand::Rng;

/// Input commands for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Jump (Space or Up).
    Jump,
    /// Restart after a crash (R).
    Restart,
    /// Quit (Q or Esc).
    Quit,
    /// Any other key.
    Other,
}

/// Translates a key press into a game command.
pub fn map_key(code: KeyCode) -> GameInput {
    match code {
        KeyCode::Char(' ') | KeyCode::Up => GameInput::Jump,
        KeyCode::Char('r') | KeyCode::Char('R') => GameInput::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameInput::Quit,
        _ => GameInput::Other,
    }
}

/// Applies a command to the session. Jump requests are queued for the next
/// tick boundary; restart is honored only after a crash. `Quit` is the
/// shell's concern and ignored here.
pub fn process_input<R: Rng>(session: &mut GameSession, input: GameInput, rng: &mut R) {
    match input {
        GameInput::Jump => session.request_jump(),
        GameInput::Restart => {
            if session.status == Status::Lost {
                session.reset(rng);
            }
        }
        GameInput::Quit | GameInput::Other => {}
    }
}

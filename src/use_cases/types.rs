// Use-case level inputs/outputs for the game loop.

use crate::domain::{InputState, Session, SessionStatus, WorldSnapshot};

#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Start a session, or restart after game over.
    Start,
    /// Latest input snapshot; replaces the previous one.
    Input(InputState),
    /// Fire toward the current aim target, subject to cooldown.
    Fire,
}

#[derive(Debug, Clone)]
pub struct WorldUpdate {
    pub tick: u64,
    pub snapshot: WorldSnapshot,
}

/// Session fields observers care about, published on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub status: SessionStatus,
    pub score: u32,
    pub round: u64,
    pub message: Option<String>,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            status: session.status(),
            score: session.score(),
            round: session.round(),
            message: session.display_message().map(str::to_string),
        }
    }
}

impl Default for SessionView {
    fn default() -> Self {
        Self::from(&Session::default())
    }
}

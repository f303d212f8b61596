//! Run lifecycle types shared by both games
//!
//! Each game owns its entities; the phase and the event queue are the
//! common surface the session driver reads after every step.

use serde::{Deserialize, Serialize};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, waiting for a restart
    GameOver,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// Snake head left the board
    Wall,
    /// Snake head ran into its own body
    SelfCollision,
    /// No free cell left for food
    BoardFull,
    /// Player dropped below the visible area
    Fell,
}

impl GameOverReason {
    pub fn describe(&self) -> &'static str {
        match self {
            GameOverReason::Wall => "hit the wall",
            GameOverReason::SelfCollision => "ran into itself",
            GameOverReason::BoardFull => "filled the board",
            GameOverReason::Fell => "fell off the screen",
        }
    }
}

/// Notifications for the score / speed / status display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ScoreChanged(u32),
    /// Snake step interval changed (ms)
    SpeedChanged(u32),
    GameOver { score: u32, reason: GameOverReason },
}

/// Result of a single simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub terminated: bool,
    pub reason: Option<GameOverReason>,
}

impl TickOutcome {
    pub fn running() -> Self {
        Self {
            terminated: false,
            reason: None,
        }
    }

    pub fn ended(reason: GameOverReason) -> Self {
        Self {
            terminated: true,
            reason: Some(reason),
        }
    }
}

//! Canvas Arcade - Snake and a Doodle-Jump-style platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, spawning, game state)
//! - `input`: Keyboard name mapping for both games
//! - `clock`: Fixed-interval step scheduling on top of display frames
//! - `arcade`: Session driver (start, restart, game over, HUD notifications)
//! - `renderer`: Drawing onto a 2D surface (Canvas 2D in the browser)
//! - `settings`: Persisted configuration

pub mod arcade;
pub mod clock;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use arcade::{Arcade, Hud};
pub use settings::Settings;

use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Snake board size in pixels (must be a multiple of the cell size)
    pub const SNAKE_WIDTH: i32 = 400;
    pub const SNAKE_HEIGHT: i32 = 400;
    /// Size of each grid cell in pixels
    pub const GRID_SIZE: i32 = 20;
    /// Starting snake length (head included)
    pub const SNAKE_START_LENGTH: usize = 3;
    /// Step interval at the start of a run (ms)
    pub const SNAKE_START_SPEED_MS: u32 = 150;
    /// Fastest step interval (ms)
    pub const SNAKE_MIN_SPEED_MS: u32 = 50;
    /// Interval reduction per speed-up (ms)
    pub const SNAKE_SPEED_STEP_MS: u32 = 10;
    /// Points per food eaten
    pub const FOOD_SCORE: u32 = 10;
    /// Speed up every time the score crosses a multiple of this
    pub const SPEED_UP_EVERY: u32 = 50;
    /// First segment index checked for self-collision. Tied to the
    /// starting length: the head can never reach indices 1..=3.
    pub const SELF_COLLISION_SKIP: usize = 4;
    /// Random draws before falling back to scanning free cells
    pub const FOOD_SPAWN_ATTEMPTS: u32 = 64;

    /// Doodle Jump canvas size in pixels
    pub const JUMP_WIDTH: f32 = 400.0;
    pub const JUMP_HEIGHT: f32 = 600.0;
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Upward velocity set on bounce (negative is up)
    pub const JUMP_IMPULSE: f32 = -10.0;
    /// Downward acceleration per step
    pub const GRAVITY: f32 = 0.4;
    /// Horizontal speed while a direction is held
    pub const MOVE_SPEED: f32 = 5.0;
    pub const PLATFORM_WIDTH: f32 = 60.0;
    pub const PLATFORM_HEIGHT: f32 = 12.0;
    /// Minimum vertical distance between spawned platforms
    pub const PLATFORM_MIN_GAP: f32 = 50.0;
    /// Extra random spacing added to the minimum gap
    pub const PLATFORM_GAP_JITTER: f32 = 40.0;
    /// Distance from the bottom edge of the seed platform
    pub const SEED_PLATFORM_OFFSET: f32 = 50.0;
    /// Platforms are generated until this far above the top edge
    pub const SPAWN_AHEAD: f32 = 100.0;
    /// Scroll distance per score point
    pub const SCROLL_PER_POINT: f32 = 10.0;

    /// Longest frame delta fed into the step clock (ms)
    pub const MAX_FRAME_MS: f64 = 100.0;
    /// Maximum steps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}

/// Which game a session runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    #[default]
    Snake,
    Jump,
}

impl GameKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Snake => "snake",
            GameKind::Jump => "jump",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "snake" => Some(GameKind::Snake),
            "jump" | "doodle" | "doodle-jump" => Some(GameKind::Jump),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_kind_parse() {
        assert_eq!(GameKind::from_str("Snake"), Some(GameKind::Snake));
        assert_eq!(GameKind::from_str(" doodle-jump "), Some(GameKind::Jump));
        assert_eq!(GameKind::from_str("pong"), None);
        assert_eq!(GameKind::from_str(GameKind::Jump.as_str()), Some(GameKind::Jump));
    }

    #[test]
    fn test_apex_clears_largest_gap() {
        use consts::*;
        let apex = JUMP_IMPULSE * JUMP_IMPULSE / (2.0 * GRAVITY);
        assert!(PLATFORM_MIN_GAP + PLATFORM_GAP_JITTER < apex);
    }
}

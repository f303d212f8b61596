//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per call, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod jump;
pub mod snake;
pub mod state;

pub use collision::{Rect, hits_segments, lands_on, out_of_bounds};
pub use jump::{JumpConfig, JumpInput, JumpState, Platform, Player};
pub use snake::{Direction, SnakeConfig, SnakeState};
pub use state::{GameEvent, GameOverReason, GamePhase, TickOutcome};

//! Game settings
//!
//! Persisted in LocalStorage as JSON. Every field has a default, so a
//! partial or older document still loads.

use serde::{Deserialize, Serialize};

use crate::GameKind;
use crate::consts::SNAKE_START_LENGTH;
use crate::sim::{JumpConfig, SnakeConfig};

/// Largest board side accepted from stored settings (pixels)
pub const MAX_BOARD_SIDE: i32 = 4096;

/// True for a finite value in `(0, max]`
fn in_range(value: f32, max: f32) -> bool {
    value.is_finite() && value > 0.0 && value <= max
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}

/// Selected game and per-game tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Game loaded when the page opens
    pub game: GameKind,
    pub snake: SnakeConfig,
    pub jump: JumpConfig,
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "canvas_arcade_settings";

    /// Parse a JSON settings document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Clamp values that would break the simulation
    pub fn sanitize(&mut self) {
        let defaults = SnakeConfig::default();
        let snake = &mut self.snake;
        let start_len = SNAKE_START_LENGTH as i32;
        if snake.grid_size <= 0 || snake.grid_size > MAX_BOARD_SIDE / start_len {
            snake.grid_size = defaults.grid_size;
        }
        // Board must hold the starting snake and be grid-aligned
        let grid = snake.grid_size;
        snake.width = snake.width.clamp(grid * start_len, MAX_BOARD_SIDE) / grid * grid;
        snake.height = snake.height.clamp(grid, MAX_BOARD_SIDE) / grid * grid;
        snake.min_speed_ms = snake.min_speed_ms.max(1);
        snake.start_speed_ms = snake.start_speed_ms.max(snake.min_speed_ms);

        let defaults = JumpConfig::default();
        let jump = &mut self.jump;
        let max_side = MAX_BOARD_SIDE as f32;
        if !in_range(jump.width, max_side) || !in_range(jump.height, max_side) {
            jump.width = defaults.width;
            jump.height = defaults.height;
        }
        let (width, height) = (jump.width, jump.height);
        if !in_range(jump.player_size, width.min(height)) {
            jump.player_size = defaults.player_size.min(width).min(height);
        }
        if !in_range(jump.platform_width, width) {
            jump.platform_width = defaults.platform_width.min(width);
        }
        if !in_range(jump.platform_height, height) {
            jump.platform_height = defaults.platform_height.min(height);
        }
        // Platform generation walks from the seed platform up to `spawn_ahead`
        // in steps of at least `min_gap`
        if !in_range(jump.min_gap, height) || jump.min_gap < 1.0 {
            jump.min_gap = defaults.min_gap.min(height);
        }
        jump.gap_jitter = finite_or(jump.gap_jitter, 0.0).clamp(0.0, height);
        jump.spawn_ahead = finite_or(jump.spawn_ahead, defaults.spawn_ahead).clamp(0.0, height);
        jump.seed_offset = finite_or(jump.seed_offset, defaults.seed_offset).clamp(0.0, height);
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{JUMP_HEIGHT, PLATFORM_MIN_GAP};
    use crate::sim::JumpState;

    #[test]
    fn test_partial_document_uses_defaults() {
        let settings = Settings::from_json(r#"{"game":"jump","snake":{"start_speed_ms":200}}"#)
            .unwrap();
        assert_eq!(settings.game, GameKind::Jump);
        assert_eq!(settings.snake.start_speed_ms, 200);
        assert_eq!(settings.snake.grid_size, 20);
        assert_eq!(settings.jump, JumpConfig::default());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("{not json").is_err());
        assert!(Settings::from_json(r#"{"game":"pong"}"#).is_err());
    }

    #[test]
    fn test_sanitize_aligns_board() {
        let settings =
            Settings::from_json(r#"{"snake":{"width":415,"height":0,"grid_size":20}}"#).unwrap();
        assert_eq!(settings.snake.width, 400);
        assert_eq!(settings.snake.height, 20);
    }

    #[test]
    fn test_oversized_grid_falls_back() {
        let settings = Settings::from_json(r#"{"snake":{"grid_size":1000000000}}"#).unwrap();
        assert_eq!(settings.snake.grid_size, 20);
        assert_eq!(settings.snake.width, 400);

        let settings =
            Settings::from_json(r#"{"snake":{"width":1000000000,"height":-5}}"#).unwrap();
        assert_eq!(settings.snake.width, MAX_BOARD_SIDE / 20 * 20);
        assert_eq!(settings.snake.height, 20);
    }

    #[test]
    fn test_spawn_ahead_bounded_by_height() {
        let settings = Settings::from_json(r#"{"jump":{"spawn_ahead":1e12}}"#).unwrap();
        assert_eq!(settings.jump.spawn_ahead, JUMP_HEIGHT);

        // Generation finishes with a bounded number of platforms
        let state = JumpState::new(settings.jump.clone(), 1);
        let limit = ((JUMP_HEIGHT * 2.0) / PLATFORM_MIN_GAP) as usize + 2;
        assert!(state.platforms.len() <= limit);
    }

    #[test]
    fn test_bad_jump_sizes_reset() {
        let settings = Settings::from_json(
            r#"{"jump":{"player_size":-1,"platform_width":0,"platform_height":9000,"min_gap":0.001,"gap_jitter":-3}}"#,
        )
        .unwrap();
        let defaults = JumpConfig::default();
        assert_eq!(settings.jump.player_size, defaults.player_size);
        assert_eq!(settings.jump.platform_width, defaults.platform_width);
        assert_eq!(settings.jump.platform_height, defaults.platform_height);
        assert_eq!(settings.jump.min_gap, defaults.min_gap);
        assert_eq!(settings.jump.gap_jitter, 0.0);

        let settings = Settings::from_json(r#"{"jump":{"width":1e9}}"#).unwrap();
        assert_eq!(settings.jump.width, defaults.width);
        assert_eq!(settings.jump.height, defaults.height);
    }

    #[test]
    fn test_round_trip_defaults() {
        let json = Settings::default().to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), Settings::default());
    }
}

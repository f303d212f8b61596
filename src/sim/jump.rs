//! Doodle-Jump-style platformer simulation
//!
//! One step per display frame, velocities in pixels per step. The camera
//! never moves; instead the world (platforms and player) is shifted down
//! while the player climbs above the midpoint.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, lands_on};
use super::state::{GameEvent, GameOverReason, GamePhase, TickOutcome};
use crate::consts::*;

/// World and physics parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpConfig {
    pub width: f32,
    pub height: f32,
    pub player_size: f32,
    /// Vertical velocity set on bounce (negative is up)
    pub jump_impulse: f32,
    /// Downward acceleration per step
    pub gravity: f32,
    /// Horizontal speed while a direction is held
    pub move_speed: f32,
    pub platform_width: f32,
    pub platform_height: f32,
    /// Minimum spacing between generated platforms
    pub min_gap: f32,
    /// Random spacing on top of `min_gap`
    pub gap_jitter: f32,
    /// Generate platforms until this far above the top edge
    pub spawn_ahead: f32,
    /// Seed platform distance from the bottom edge
    pub seed_offset: f32,
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            width: JUMP_WIDTH,
            height: JUMP_HEIGHT,
            player_size: PLAYER_SIZE,
            jump_impulse: JUMP_IMPULSE,
            gravity: GRAVITY,
            move_speed: MOVE_SPEED,
            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            min_gap: PLATFORM_MIN_GAP,
            gap_jitter: PLATFORM_GAP_JITTER,
            spawn_ahead: SPAWN_AHEAD,
            seed_offset: SEED_PLATFORM_OFFSET,
        }
    }
}

/// Held movement keys for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JumpInput {
    pub left: bool,
    pub right: bool,
}

/// The player's body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub vel: Vec2,
}

/// A platform entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    pub rect: Rect,
}

/// Complete platformer state for one run
#[derive(Debug, Clone)]
pub struct JumpState {
    pub config: JumpConfig,
    pub player: Player,
    /// Active platforms in spawn order
    pub platforms: Vec<Platform>,
    /// Total distance the world has scrolled down
    pub scroll_offset: f32,
    pub score: u32,
    pub phase: GamePhase,
    pub steps: u64,
    rng: Pcg32,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl JumpState {
    /// Start-of-game state: platforms generated from the seed platform,
    /// player standing on the seed platform with a fresh jump
    pub fn new(config: JumpConfig, seed: u64) -> Self {
        let size = config.player_size;
        let mut state = Self {
            player: Player {
                rect: Rect::new(0.0, 0.0, size, size),
                vel: Vec2::ZERO,
            },
            config,
            platforms: Vec::new(),
            scroll_offset: 0.0,
            score: 0,
            phase: GamePhase::Playing,
            steps: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            next_id: 1,
        };

        state.maintain_platforms();
        if let Some(seed_platform) = state.platforms.first() {
            let top = seed_platform.rect.top();
            let center = seed_platform.rect.left() + seed_platform.rect.size.x / 2.0;
            state.player.rect.pos = Vec2::new(center - size / 2.0, top - size);
        }
        state.player.vel.y = state.config.jump_impulse;
        state
    }

    /// Allocate a new platform ID
    fn next_platform_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Advance the world by one frame
    pub fn tick(&mut self, input: &JumpInput) -> TickOutcome {
        if self.phase == GamePhase::GameOver {
            return TickOutcome::ended(GameOverReason::Fell);
        }

        self.move_horizontal(input);

        // Semi-implicit Euler: velocity first, then position
        self.player.vel.y += self.config.gravity;
        self.player.rect.pos.y += self.player.vel.y;

        if self.player.rect.top() < self.config.height / 2.0 && self.player.vel.y < 0.0 {
            self.scroll(-self.player.vel.y);
        }

        self.bounce();
        self.maintain_platforms();
        self.steps += 1;

        if self.player.rect.top() > self.config.height {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver {
                score: self.score,
                reason: GameOverReason::Fell,
            });
            return TickOutcome::ended(GameOverReason::Fell);
        }

        TickOutcome::running()
    }

    pub fn end_reason(&self) -> Option<GameOverReason> {
        (self.phase == GamePhase::GameOver).then_some(GameOverReason::Fell)
    }

    /// Take queued HUD notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn move_horizontal(&mut self, input: &JumpInput) {
        let speed = self.config.move_speed;
        self.player.vel.x = if input.right {
            speed
        } else if input.left {
            -speed
        } else {
            0.0
        };

        let body = &mut self.player.rect;
        body.pos.x += self.player.vel.x;

        // Wrap around the side edges
        if body.left() > self.config.width {
            body.pos.x = -body.size.x;
        } else if body.right() < 0.0 {
            body.pos.x = self.config.width;
        }
    }

    /// Shift the world down by `amount` and update the score
    fn scroll(&mut self, amount: f32) {
        self.scroll_offset += amount;
        for platform in &mut self.platforms {
            platform.rect.pos.y += amount;
        }
        self.player.rect.pos.y += amount;

        let score = (self.scroll_offset / SCROLL_PER_POINT).floor() as u32;
        if score != self.score {
            self.score = score;
            self.events.push(GameEvent::ScoreChanged(score));
        }
    }

    /// Bounce off any platform under the descending edge.
    /// Several hits in one step all set the same impulse.
    fn bounce(&mut self) {
        if self.player.vel.y <= 0.0 {
            return;
        }
        for platform in &self.platforms {
            if lands_on(&self.player.rect, &platform.rect) {
                self.player.vel.y = self.config.jump_impulse;
            }
        }
    }

    /// Drop platforms below the screen and generate new ones above
    pub fn maintain_platforms(&mut self) {
        let height = self.config.height;
        self.platforms.retain(|p| p.rect.top() < height);

        let (pw, ph) = (self.config.platform_width, self.config.platform_height);
        if self.platforms.is_empty() {
            let id = self.next_platform_id();
            let x = self.config.width / 2.0 - pw / 2.0;
            let y = height - self.config.seed_offset;
            self.platforms.push(Platform {
                id,
                rect: Rect::new(x, y, pw, ph),
            });
        }

        let mut frontier = self
            .platforms
            .iter()
            .map(|p| p.rect.top())
            .fold(f32::INFINITY, f32::min);
        let max_x = (self.config.width - pw).max(0.0);
        let min_gap = self.config.min_gap.max(1.0);

        while frontier > -self.config.spawn_ahead {
            let jitter = if self.config.gap_jitter > 0.0 {
                self.rng.random_range(0.0..self.config.gap_jitter)
            } else {
                0.0
            };
            frontier -= min_gap + jitter;
            let x = self.rng.random_range(0.0..=max_x);
            let id = self.next_platform_id();
            self.platforms.push(Platform {
                id,
                rect: Rect::new(x, frontier, pw, ph),
            });
        }
    }
}

//! Snake simulation
//!
//! Grid-aligned positions are stored in pixels (multiples of the cell size)
//! so the renderer can draw segments without any conversion.

use std::collections::VecDeque;

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{hits_segments, out_of_bounds};
use super::state::{GameEvent, GameOverReason, GamePhase, TickOutcome};
use crate::consts::*;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Unit step in screen coordinates (+y is down)
    pub fn delta(&self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }
}

/// Board and pacing parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Board width in pixels
    pub width: i32,
    /// Board height in pixels
    pub height: i32,
    /// Cell size in pixels
    pub grid_size: i32,
    /// Step interval at the start of a run (ms)
    pub start_speed_ms: u32,
    /// Step interval floor (ms)
    pub min_speed_ms: u32,
    /// Interval reduction per speed-up (ms)
    pub speed_step_ms: u32,
    /// Points per food
    pub food_score: u32,
    /// Speed up when the score hits a multiple of this
    pub speed_up_every: u32,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            width: SNAKE_WIDTH,
            height: SNAKE_HEIGHT,
            grid_size: GRID_SIZE,
            start_speed_ms: SNAKE_START_SPEED_MS,
            min_speed_ms: SNAKE_MIN_SPEED_MS,
            speed_step_ms: SNAKE_SPEED_STEP_MS,
            food_score: FOOD_SCORE,
            speed_up_every: SPEED_UP_EVERY,
        }
    }
}

impl SnakeConfig {
    pub fn cols(&self) -> i32 {
        self.width / self.grid_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.grid_size
    }
}

/// Complete Snake state for one run
#[derive(Debug, Clone)]
pub struct SnakeState {
    pub config: SnakeConfig,
    /// Body segments, head first
    pub segments: VecDeque<IVec2>,
    /// Current direction of travel
    pub direction: Direction,
    /// None only once the board is full
    pub food: Option<IVec2>,
    pub score: u32,
    /// Current step interval (ms)
    pub speed_ms: u32,
    pub phase: GamePhase,
    /// Completed steps this run
    pub steps: u64,
    /// Set once a direction key was taken this step
    direction_locked: bool,
    end_reason: Option<GameOverReason>,
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl SnakeState {
    /// Start-of-game state: three segments in the top-left corner moving right
    pub fn new(config: SnakeConfig, seed: u64) -> Self {
        let grid = config.grid_size;
        let segments = (0..SNAKE_START_LENGTH as i32)
            .rev()
            .map(|i| IVec2::new(i * grid, 0))
            .collect();

        let mut state = Self {
            speed_ms: config.start_speed_ms,
            config,
            segments,
            direction: Direction::Right,
            food: None,
            score: 0,
            phase: GamePhase::Playing,
            steps: 0,
            direction_locked: false,
            end_reason: None,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        };
        state.food = state.spawn_food();
        state
    }

    pub fn head(&self) -> IVec2 {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Velocity in pixels per step
    pub fn velocity(&self) -> IVec2 {
        self.direction.delta() * self.config.grid_size
    }

    pub fn end_reason(&self) -> Option<GameOverReason> {
        self.end_reason
    }

    /// Request a turn. Only the first request per step is considered, and
    /// a reversal of the current axis is rejected. Returns true if the
    /// direction changed.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.phase == GamePhase::GameOver || self.direction_locked {
            return false;
        }
        self.direction_locked = true;

        if self.direction.is_opposite(direction) || self.direction == direction {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Check the current head against walls and the body
    pub fn check_collision(&self) -> Option<GameOverReason> {
        let head = self.head();
        if out_of_bounds(head, self.config.width, self.config.height) {
            return Some(GameOverReason::Wall);
        }
        if hits_segments(head, &self.segments, SELF_COLLISION_SKIP) {
            return Some(GameOverReason::SelfCollision);
        }
        None
    }

    /// Advance the snake by one step
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase == GamePhase::GameOver {
            return TickOutcome {
                terminated: true,
                reason: self.end_reason,
            };
        }

        // Collisions are judged on the head before it moves
        if let Some(reason) = self.check_collision() {
            self.end(reason);
            return TickOutcome::ended(reason);
        }

        let new_head = self.head() + self.velocity();
        self.segments.push_front(new_head);

        if self.food == Some(new_head) {
            self.eat();
            self.food = self.spawn_food();
            if self.food.is_none() {
                self.finish_step();
                self.end(GameOverReason::BoardFull);
                return TickOutcome::ended(GameOverReason::BoardFull);
            }
        } else {
            self.segments.pop_back();
        }

        self.finish_step();
        TickOutcome::running()
    }

    /// Take queued HUD notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Pick a free grid cell uniformly at random.
    ///
    /// Tries a bounded number of random draws, then picks among the free
    /// cells directly. Returns None when the snake covers the board.
    pub fn spawn_food(&mut self) -> Option<IVec2> {
        let cols = self.config.cols();
        let rows = self.config.rows();
        if cols <= 0 || rows <= 0 {
            return None;
        }
        let grid = self.config.grid_size;

        for _ in 0..FOOD_SPAWN_ATTEMPTS {
            let cell = IVec2::new(
                self.rng.random_range(0..cols) * grid,
                self.rng.random_range(0..rows) * grid,
            );
            if !self.segments.contains(&cell) {
                return Some(cell);
            }
        }

        let free: Vec<IVec2> = (0..rows)
            .flat_map(|y| (0..cols).map(move |x| IVec2::new(x * grid, y * grid)))
            .filter(|cell| !self.segments.contains(cell))
            .collect();
        if free.is_empty() {
            return None;
        }
        let pick = self.rng.random_range(0..free.len());
        Some(free[pick])
    }

    fn eat(&mut self) {
        self.score += self.config.food_score;
        self.events.push(GameEvent::ScoreChanged(self.score));

        let every = self.config.speed_up_every.max(1);
        if self.score % every == 0 && self.speed_ms > self.config.min_speed_ms {
            self.speed_ms = self
                .speed_ms
                .saturating_sub(self.config.speed_step_ms)
                .max(self.config.min_speed_ms);
            log::debug!("Snake speed now {}ms", self.speed_ms);
            self.events.push(GameEvent::SpeedChanged(self.speed_ms));
        }
    }

    fn finish_step(&mut self) {
        self.direction_locked = false;
        self.steps += 1;
    }

    fn end(&mut self, reason: GameOverReason) {
        self.phase = GamePhase::GameOver;
        self.end_reason = Some(reason);
        self.events.push(GameEvent::GameOver {
            score: self.score,
            reason,
        });
    }
}

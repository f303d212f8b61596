//! Session driver
//!
//! Owns the running game, routes keyboard input, decides how many
//! simulation steps each display frame gets, and reports score / speed /
//! game over to whatever displays them.

use crate::clock::StepClock;
use crate::consts::MAX_SUBSTEPS;
use crate::input::{HeldKeys, MoveKey};
use crate::renderer::{Surface, draw_jump, draw_snake};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameOverReason, JumpState, SnakeState, TickOutcome};
use crate::GameKind;

/// Receiver for display updates
pub trait Hud {
    fn score_changed(&mut self, score: u32);
    fn speed_changed(&mut self, speed_ms: u32);
    fn game_over(&mut self, score: u32, reason: GameOverReason);
}

/// The state of whichever game is loaded
#[derive(Debug, Clone)]
pub enum Game {
    Snake(SnakeState),
    Jump(JumpState),
}

impl Game {
    pub fn new(kind: GameKind, settings: &Settings, seed: u64) -> Self {
        match kind {
            GameKind::Snake => Game::Snake(SnakeState::new(settings.snake.clone(), seed)),
            GameKind::Jump => Game::Jump(JumpState::new(settings.jump.clone(), seed)),
        }
    }

    pub fn kind(&self) -> GameKind {
        match self {
            Game::Snake(_) => GameKind::Snake,
            Game::Jump(_) => GameKind::Jump,
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            Game::Snake(s) => s.score,
            Game::Jump(s) => s.score,
        }
    }

    /// Why the run ended, if it has
    pub fn end_reason(&self) -> Option<GameOverReason> {
        match self {
            Game::Snake(s) => s.end_reason(),
            Game::Jump(s) => s.end_reason(),
        }
    }
}

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for the first start
    Ready,
    Running,
    /// Stepping halted until restart
    GameOver,
}

/// One player's session
pub struct Arcade {
    settings: Settings,
    kind: GameKind,
    game: Option<Game>,
    phase: SessionPhase,
    clock: StepClock,
    held: HeldKeys,
    events: Vec<GameEvent>,
}

impl Arcade {
    pub fn new(settings: Settings) -> Self {
        Self {
            kind: settings.game,
            settings,
            game: None,
            phase: SessionPhase::Ready,
            clock: StepClock::new(),
            held: HeldKeys::default(),
            events: Vec::new(),
        }
    }

    pub fn kind(&self) -> GameKind {
        self.kind
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn game_mut(&mut self) -> Option<&mut Game> {
        self.game.as_mut()
    }

    pub fn score(&self) -> u32 {
        self.game.as_ref().map(Game::score).unwrap_or(0)
    }

    /// Only Snake has a step interval worth displaying
    pub fn shows_speed(&self) -> bool {
        self.kind == GameKind::Snake
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Switch games. Any run in progress is dropped.
    pub fn select(&mut self, kind: GameKind) {
        if kind != self.kind {
            self.kind = kind;
            self.game = None;
            self.phase = SessionPhase::Ready;
            self.events.clear();
        }
    }

    /// Start or restart: fresh state from config, stepping resumed
    pub fn start(&mut self, seed: u64) {
        let game = Game::new(self.kind, &self.settings, seed);

        self.events.clear();
        self.events.push(GameEvent::ScoreChanged(0));
        if let Game::Snake(snake) = &game {
            self.events.push(GameEvent::SpeedChanged(snake.speed_ms));
        }

        self.game = Some(game);
        self.phase = SessionPhase::Running;
        self.clock.reset();
        self.held.clear();
        log::info!("{} started with seed {}", self.kind.as_str(), seed);
    }

    /// Key pressed. Returns true if the key was used.
    pub fn key_down(&mut self, key: &str) -> bool {
        if self.phase != SessionPhase::Running {
            return false;
        }
        match &mut self.game {
            Some(Game::Snake(snake)) => match MoveKey::parse(key) {
                Some(mv) => {
                    snake.steer(mv.direction());
                    true
                }
                None => false,
            },
            Some(Game::Jump(_)) => self.held.key_down(key),
            None => false,
        }
    }

    /// Key released. Only the platformer tracks releases.
    pub fn key_up(&mut self, key: &str) -> bool {
        match self.game {
            Some(Game::Jump(_)) => self.held.key_up(key),
            _ => false,
        }
    }

    /// Drive the simulation from a display frame timestamp.
    /// Returns the number of steps taken.
    pub fn frame(&mut self, now_ms: f64) -> u32 {
        self.clock.frame(now_ms);
        if self.phase != SessionPhase::Running {
            return 0;
        }

        let mut steps = 0;
        match self.game.as_ref().map(Game::kind) {
            Some(GameKind::Snake) => {
                while steps < MAX_SUBSTEPS {
                    let interval = match &self.game {
                        Some(Game::Snake(snake)) => snake.speed_ms as f64,
                        _ => break,
                    };
                    if !self.clock.take_step(interval) {
                        break;
                    }
                    steps += 1;
                    if self.step().terminated {
                        break;
                    }
                }
            }
            // Once per display refresh
            Some(GameKind::Jump) => {
                self.step();
                steps = 1;
            }
            None => {}
        }
        steps
    }

    /// Run exactly one simulation step, ignoring the clock
    pub fn step(&mut self) -> TickOutcome {
        match self.phase {
            SessionPhase::Running => {}
            SessionPhase::Ready => return TickOutcome::running(),
            SessionPhase::GameOver => {
                return TickOutcome {
                    terminated: true,
                    reason: self.game.as_ref().and_then(Game::end_reason),
                };
            }
        }
        let input = self.held.input();
        let (outcome, events) = match &mut self.game {
            Some(Game::Snake(snake)) => (snake.tick(), snake.drain_events()),
            Some(Game::Jump(jump)) => (jump.tick(&input), jump.drain_events()),
            None => return TickOutcome::running(),
        };
        self.events.extend(events);

        if outcome.terminated {
            self.phase = SessionPhase::GameOver;
            self.clock.reset();
            log::info!(
                "{} over: {} (score {})",
                self.kind.as_str(),
                outcome.reason.map(|r| r.describe()).unwrap_or("ended"),
                self.score()
            );
        }
        outcome
    }

    /// Take queued display updates
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Forward queued display updates to `hud`
    pub fn notify(&mut self, hud: &mut impl Hud) {
        for event in self.drain_events() {
            match event {
                GameEvent::ScoreChanged(score) => hud.score_changed(score),
                GameEvent::SpeedChanged(speed) => hud.speed_changed(speed),
                GameEvent::GameOver { score, reason } => hud.game_over(score, reason),
            }
        }
    }

    /// Paint the current frame
    pub fn render(&self, surface: &mut impl Surface) {
        match &self.game {
            Some(Game::Snake(snake)) => draw_snake(surface, snake),
            Some(Game::Jump(jump)) => draw_jump(surface, jump),
            None => {}
        }
    }
}

//! Game state and the session aggregate
//!
//! A `Session` owns everything one play-through mutates: score, lives, the
//! current `GameState`, the levels and both moving bodies. The frame driver
//! passes it by `&mut` into each step.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::MovingBody;
use super::level::{Brick, Level};
use crate::consts::*;
use crate::error::LevelError;
use crate::settings::Settings;
use crate::{ball_spawn, ghost_spawn};

/// Current mode of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameState {
    /// Title screen, waiting for confirm
    #[default]
    Menu,
    /// Active gameplay
    Active,
    /// All required bricks destroyed
    Win,
    /// Out of lives
    Lose,
}

impl GameState {
    /// Win and Lose are never left
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Win | GameState::Lose)
    }

    /// Overlay text for the renderer (headline, hint)
    pub fn banner(self) -> Option<(&'static str, &'static str)> {
        match self {
            GameState::Menu => Some(("Press ENTER to start", "Use WASD to move the ball")),
            GameState::Active => None,
            GameState::Win => Some(("YOU WIN!", "Press ESC to quit")),
            GameState::Lose => Some(("YOU LOSE!", "Press ESC to quit")),
        }
    }
}

/// Something the renderer or audio layer may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Menu -> Active
    Started,
    /// A destructible brick was destroyed (index into the active level)
    BrickDestroyed { index: usize },
    /// Score reached the win threshold
    Won { score: u32 },
    /// Ghost caught the ball; ball respawned
    LifeLost { lives_left: u32 },
    /// Ghost caught the ball on the last life
    Lost,
}

/// Read-only view of a session for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: GameState,
    pub score: u32,
    pub lives: u32,
    pub level: usize,
    pub ball: Vec2,
    pub ghost: Vec2,
    pub bricks: Vec<Brick>,
}

/// One play-through
#[derive(Debug, Clone)]
pub struct Session {
    pub settings: Settings,
    /// Loaded levels
    pub levels: Vec<Level>,
    /// Index of the active level
    pub level: usize,
    /// Destroyed bricks so far
    pub score: u32,
    pub lives: u32,
    pub state: GameState,
    pub ball: MovingBody,
    pub ghost: MovingBody,
    /// Frames simulated
    pub frame: u64,
    /// Seeded once per session; drives the ghost's walk
    rng: Pcg32,
}

impl Session {
    /// Start a session on the first level
    ///
    /// `settings` must already be validated.
    pub fn new(settings: Settings, levels: Vec<Level>) -> Result<Self, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::NoSuchLevel { index: 0, count: 0 });
        }

        let mut ball = MovingBody::new(
            ball_spawn(settings.width, settings.height),
            BALL_RADIUS,
            INITIAL_BALL_VELOCITY,
        );
        ball.stuck = !settings.ball_drifts;
        let ghost = MovingBody::new(
            ghost_spawn(settings.width, settings.height),
            BALL_RADIUS,
            INITIAL_BALL_VELOCITY,
        );
        if ball.touches_solid(&levels[0].bricks) {
            log::warn!("Ball spawn overlaps a solid brick; it will not be able to move");
        }

        log::info!(
            "New session: {}x{}, {} level(s), seed {}",
            settings.width,
            settings.height,
            levels.len(),
            settings.seed
        );

        Ok(Self {
            rng: Pcg32::seed_from_u64(settings.seed),
            lives: settings.initial_lives,
            settings,
            levels,
            level: 0,
            score: 0,
            state: GameState::Menu,
            ball,
            ghost,
            frame: 0,
        })
    }

    /// Play-area width
    #[inline]
    pub fn width(&self) -> f32 {
        self.settings.width
    }

    /// Play-area height
    #[inline]
    pub fn height(&self) -> f32 {
        self.settings.height
    }

    /// Where the ball respawns after losing a life
    pub fn ball_spawn(&self) -> Vec2 {
        ball_spawn(self.width(), self.height())
    }

    pub fn active_level(&self) -> &Level {
        &self.levels[self.level]
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.levels[self.level].bricks
    }

    /// Switch to another loaded level, bringing all its bricks back
    pub fn load_level(&mut self, index: usize) -> Result<(), LevelError> {
        let count = self.levels.len();
        let level = self
            .levels
            .get_mut(index)
            .ok_or(LevelError::NoSuchLevel { index, count })?;
        level.reset();
        self.level = index;
        log::info!("Loaded level {index}");
        Ok(())
    }

    /// Menu -> Active. Returns false if not in the menu.
    pub fn start(&mut self) -> bool {
        if self.state != GameState::Menu {
            return false;
        }
        self.state = GameState::Active;
        log::info!("Game started");
        true
    }

    /// Award one destroyed brick. Returns true if this reached the win
    /// threshold and moved the game to Win.
    pub fn add_score(&mut self) -> bool {
        self.score += 1;
        if !self.state.is_terminal() && self.score >= self.settings.win_score {
            self.state = GameState::Win;
            log::info!("Won with score {}", self.score);
            return true;
        }
        false
    }

    /// Apply a ghost contact. Terminal states are left untouched.
    ///
    /// On the last life the game moves to Lose and lives stay at 1. Otherwise
    /// one life is spent, the game is (re)set to Active and the ball goes back
    /// to its spawn point.
    pub fn lose_life(&mut self) -> Option<GameEvent> {
        if self.state.is_terminal() {
            return None;
        }
        if self.lives <= 1 {
            self.state = GameState::Lose;
            log::info!("Lost with score {}", self.score);
            return Some(GameEvent::Lost);
        }

        self.lives -= 1;
        self.state = GameState::Active;
        let spawn = self.ball_spawn();
        self.ball.reset(spawn);
        log::info!("Life lost, {} left", self.lives);
        Some(GameEvent::LifeLost {
            lives_left: self.lives,
        })
    }

    /// Draw the ghost's horizontal step for this frame
    ///
    /// Odd rolls step left, even rolls step right.
    pub fn roll_ghost_step(&mut self) -> f32 {
        let roll: u32 = self.rng.random_range(0..GHOST_ROLL_RANGE);
        if roll % 2 == 1 { -GHOST_STEP } else { GHOST_STEP }
    }

    /// Everything the renderer needs for one frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            score: self.score,
            lives: self.lives,
            level: self.level,
            ball: self.ball.pos,
            ghost: self.ghost.pos,
            bricks: self.bricks().to_vec(),
        }
    }
}

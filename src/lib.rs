//! Ghost Breakout - a paddle-less brick breaker
//!
//! The player steers the ball directly through a grid of bricks while a
//! ghost wanders the board. Touching a destructible brick scores it; touching
//! the ghost costs a life.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (collisions, scoring, game state)
//! - `settings`: Session configuration
//! - `error`: Error types for configuration and level building

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{LevelError, SettingsError};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Destroyed bricks needed to win
    pub const WIN_SCORE: u32 = 73;
    /// Lives at session start
    pub const INITIAL_LIVES: u32 = 3;

    /// Ball defaults (also used for the ghost)
    pub const BALL_RADIUS: f32 = 12.5;
    pub const INITIAL_BALL_VELOCITY: Vec2 = Vec2::new(100.0, -350.0);
    /// Input-driven movement speed (units/s)
    pub const PLAYER_VELOCITY: f32 = 500.0;

    /// Ball spawn: x offset left of center, y offset up from the bottom edge
    pub const SPAWN_OFFSET_X: f32 = 15.0;
    pub const SPAWN_OFFSET_Y: f32 = 112.0;
    /// Ghost spawn: y offset up from the vertical center
    pub const GHOST_OFFSET_Y: f32 = 24.0;

    /// Ghost horizontal step per frame
    pub const GHOST_STEP: f32 = 1.0;
    /// Exclusive upper bound of the ghost's per-frame random draw
    pub const GHOST_ROLL_RANGE: u32 = 600;

    /// Default play area
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;
}

/// Ball spawn point (top-left of its bounding box) for a play area
#[inline]
pub fn ball_spawn(width: f32, height: f32) -> Vec2 {
    Vec2::new(
        width / 2.0 - consts::SPAWN_OFFSET_X,
        height - consts::SPAWN_OFFSET_Y,
    )
}

/// Ghost spawn point (top-left of its bounding box) for a play area
#[inline]
pub fn ghost_spawn(width: f32, height: f32) -> Vec2 {
    Vec2::new(width / 2.0, height / 2.0 - consts::GHOST_OFFSET_Y)
}

//! Per-frame simulation step
//!
//! Frame order: move the ball, run the collision pass, then apply input.

use glam::Vec2;

use super::resolve::do_collisions;
use super::state::{GameEvent, GameState, Session};

/// Keys the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Confirm,
}

impl Key {
    pub const COUNT: usize = 5;

    /// Movement keys in the order they are applied, with their direction
    pub const MOVEMENT: [(Key, Vec2); 4] = [
        (Key::Left, Vec2::NEG_X),
        (Key::Right, Vec2::X),
        (Key::Up, Vec2::NEG_Y),
        (Key::Down, Vec2::Y),
    ];
}

/// Key-down state for a single frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    keys: [bool; Key::COUNT],
}

impl FrameInput {
    /// Input with the given keys held
    pub fn with(keys: &[Key]) -> Self {
        let mut input = Self::default();
        for &key in keys {
            input.set(key, true);
        }
        input
    }

    pub fn set(&mut self, key: Key, down: bool) {
        self.keys[key as usize] = down;
    }

    #[inline]
    pub fn is_down(&self, key: Key) -> bool {
        self.keys[key as usize]
    }
}

/// Move the ball on its own velocity, then resolve collisions
pub fn update(session: &mut Session, dt: f32) -> Vec<GameEvent> {
    let width = session.width();
    session.ball.advance(dt, width);
    do_collisions(session)
}

/// Apply held keys
///
/// While Active, each held direction key shifts the ball by `speed * dt` on
/// its axis and is undone by any solid brick it runs into. Every key sweeps
/// the whole brick list. Outside Active only the confirm key is read, and it
/// only starts the game from the menu.
pub fn process_input(session: &mut Session, input: &FrameInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if session.state == GameState::Active {
        let step = session.settings.player_speed * dt;
        for (key, dir) in Key::MOVEMENT {
            if !input.is_down(key) {
                continue;
            }
            let bricks = &session.levels[session.level].bricks;
            if session.ball.try_shift(dir * step, bricks) {
                log::trace!("Ball blocked moving {key:?}");
            }
        }
    } else if input.is_down(Key::Confirm) && session.start() {
        events.push(GameEvent::Started);
    }

    events
}

/// Advance the session by one frame
pub fn tick(session: &mut Session, input: &FrameInput, dt: f32) -> Vec<GameEvent> {
    session.frame += 1;
    let mut events = update(session, dt);
    events.extend(process_input(session, input, dt));
    events
}

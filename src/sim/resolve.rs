//! Collision resolution
//!
//! Runs once per frame after the ball has moved:
//! 1. Ball vs bricks: destroy and score every touched destructible brick
//! 2. Ghost wander: one random unit step along x, undone by solid bricks
//! 3. Ghost vs ball: spend a life or end the game

use glam::Vec2;

use super::state::{GameEvent, Session};

/// Destroy every destructible brick the ball overlaps
///
/// Does not stop at the first hit. Returns the number of bricks destroyed.
/// Nothing happens once the game is won or lost.
pub fn resolve_bricks(session: &mut Session, events: &mut Vec<GameEvent>) -> u32 {
    if session.state.is_terminal() {
        return 0;
    }

    let mut destroyed = 0;
    for index in 0..session.levels[session.level].bricks.len() {
        let brick = &mut session.levels[session.level].bricks[index];
        if brick.destroyed || brick.solid {
            continue;
        }
        if !session.ball.overlaps_rect(brick.pos, brick.size) {
            continue;
        }

        brick.destroyed = true;
        destroyed += 1;
        events.push(GameEvent::BrickDestroyed { index });
        log::debug!("Brick {index} destroyed");

        if session.add_score() {
            events.push(GameEvent::Won {
                score: session.score,
            });
        }
    }
    destroyed
}

/// Step the ghost one unit left or right; solid bricks undo the step
///
/// Returns the displacement actually applied.
pub fn wander_ghost(session: &mut Session) -> Vec2 {
    let step = Vec2::new(session.roll_ghost_step(), 0.0);
    let start = session.ghost.pos;
    let bricks = &session.levels[session.level].bricks;
    session.ghost.try_shift(step, bricks);
    session.ghost.pos - start
}

/// Check the ghost against the ball and apply the life loss
///
/// The check runs in every state. Once the game is over a contact is
/// reported but changes nothing. Returns true on contact.
pub fn resolve_ghost_contact(session: &mut Session, events: &mut Vec<GameEvent>) -> bool {
    if !session.ghost.overlaps_body(&session.ball) {
        return false;
    }

    log::debug!(
        "Ghost caught ball at ({:.1}, {:.1}) in {:?}",
        session.ball.pos.x,
        session.ball.pos.y,
        session.state
    );
    if let Some(event) = session.lose_life() {
        events.push(event);
    }
    true
}

/// Full collision pass for one frame, in order
pub fn do_collisions(session: &mut Session) -> Vec<GameEvent> {
    let mut events = Vec::new();
    resolve_bricks(session, &mut events);
    wander_ghost(session);
    resolve_ghost_contact(session, &mut events);
    events
}

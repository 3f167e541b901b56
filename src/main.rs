//! Ghost Breakout entry point
//!
//! Headless driver: builds a session on the built-in level and plays a
//! scripted run at a fixed timestep, logging what happens. A renderer would
//! replace the script with polled keys and draw `Session::snapshot()` after
//! each tick.
//!
//! Usage: `ghost-breakout [settings.json]`

use ghost_breakout::Settings;
use ghost_breakout::consts::SIM_DT;
use ghost_breakout::sim::{FrameInput, GameEvent, GameState, Key, Level, Session, tick};

/// Built-in level: 1 = solid, 2..=5 = destructible colors
const LEVEL_ONE: &[&[u8]] = &[
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    &[2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2],
    &[2, 0, 1, 0, 0, 0, 0, 2, 0, 0, 0, 0, 1, 0, 2],
    &[2, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 2],
    &[2, 0, 1, 1, 0, 3, 3, 3, 3, 3, 0, 1, 1, 0, 2],
    &[2, 0, 0, 1, 3, 3, 3, 3, 3, 3, 3, 1, 0, 0, 2],
    &[2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 2],
];

/// Frames to simulate before giving up
const MAX_FRAMES: u64 = 60 * 120;

fn main() {
    env_logger::init();
    log::info!("Ghost Breakout (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    if let Err(err) = settings.validate() {
        log::error!("{err}");
        std::process::exit(1);
    }

    let tiles: Vec<Vec<u8>> = LEVEL_ONE.iter().map(|row| row.to_vec()).collect();
    let level = match Level::from_grid(&tiles, settings.width, settings.height / 2.0) {
        Ok(level) => level,
        Err(err) => {
            log::error!("Failed to build level: {err}");
            std::process::exit(1);
        }
    };
    let mut session = match Session::new(settings, vec![level]) {
        Ok(session) => session,
        Err(err) => {
            log::error!("Failed to start session: {err}");
            std::process::exit(1);
        }
    };

    while session.frame < MAX_FRAMES && !session.state.is_terminal() {
        let input = scripted_input(session.frame);
        for event in tick(&mut session, &input, SIM_DT) {
            match event {
                GameEvent::BrickDestroyed { .. } => {
                    log::debug!("Score: {}", session.score);
                }
                other => log::info!("Frame {}: {:?}", session.frame, other),
            }
        }
    }

    let (headline, hint) = session.state.banner().unwrap_or(("Time up", ""));
    println!("{headline} {hint}");
    println!(
        "Frames: {}  Score: {}  Lives: {}  Bricks left: {}",
        session.frame,
        session.score,
        session.lives,
        session.active_level().remaining_destructible()
    );
    if session.state == GameState::Active {
        log::info!("Run ended without a result");
    }
}

/// Confirm on the first frame, then wander in slow loops through the board
fn scripted_input(frame: u64) -> FrameInput {
    if frame == 0 {
        return FrameInput::with(&[Key::Confirm]);
    }
    let keys: &[Key] = match (frame / 90) % 4 {
        0 => &[Key::Up],
        1 => &[Key::Left, Key::Up],
        2 => &[Key::Down],
        _ => &[Key::Right, Key::Up],
    };
    FrameInput::with(keys)
}

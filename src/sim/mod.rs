//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only, seeded once per session
//! - Stable iteration order (brick insertion order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod level;
pub mod resolve;
pub mod state;
pub mod tick;

pub use body::MovingBody;
pub use collision::{closest_point, overlaps};
pub use level::{Brick, BrickDescriptor, Level, TILE_EMPTY, TILE_SOLID};
pub use resolve::{do_collisions, resolve_bricks, resolve_ghost_contact, wander_ghost};
pub use state::{GameEvent, GameState, Session, Snapshot};
pub use tick::{FrameInput, Key, process_input, tick, update};

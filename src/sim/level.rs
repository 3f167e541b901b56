//! Bricks and levels
//!
//! A level is an ordered list of bricks. Iteration order is draw order and
//! collision order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::LevelError;

/// Tile value for an empty cell
pub const TILE_EMPTY: u8 = 0;
/// Tile value for a solid (indestructible) brick
pub const TILE_SOLID: u8 = 1;

/// A rectangular brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Solid bricks block movement and can't be destroyed
    pub solid: bool,
    /// Set once on the first ball contact; only a reload clears it
    pub destroyed: bool,
    /// Tile value from the level grid (renderer picks a color from it)
    #[serde(default)]
    pub color: u8,
}

impl Brick {
    pub fn new(pos: Vec2, size: Vec2, solid: bool) -> Self {
        Self {
            pos,
            size,
            solid,
            destroyed: false,
            color: if solid { TILE_SOLID } else { TILE_SOLID + 1 },
        }
    }

    /// True if the brick still counts toward clearing the level
    #[inline]
    pub fn is_destructible(&self) -> bool {
        !self.solid && !self.destroyed
    }
}

/// Brick description handed over by an external level loader
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickDescriptor {
    pub pos: Vec2,
    pub size: Vec2,
    pub solid: bool,
}

/// An ordered collection of bricks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub bricks: Vec<Brick>,
}

impl Level {
    /// Build from explicit brick descriptors, keeping their order
    pub fn from_descriptors(descriptors: &[BrickDescriptor]) -> Self {
        Self {
            bricks: descriptors
                .iter()
                .map(|d| Brick::new(d.pos, d.size, d.solid))
                .collect(),
        }
    }

    /// Lay a tile grid out over a `level_width` x `level_height` area
    ///
    /// Tile 0 is empty, 1 is a solid brick, anything higher is a destructible
    /// brick whose value is kept as its color. Bricks are emitted row by row.
    pub fn from_grid(
        tiles: &[Vec<u8>],
        level_width: f32,
        level_height: f32,
    ) -> Result<Self, LevelError> {
        if !(level_width > 0.0) || !(level_height > 0.0) {
            return Err(LevelError::InvalidArea {
                width: level_width,
                height: level_height,
            });
        }
        let columns = tiles.first().map(Vec::len).unwrap_or(0);
        if columns == 0 {
            return Err(LevelError::EmptyGrid);
        }
        if let Some((row, ragged)) = tiles.iter().enumerate().find(|(_, r)| r.len() != columns) {
            return Err(LevelError::RaggedRow {
                row,
                expected: columns,
                actual: ragged.len(),
            });
        }

        let unit = Vec2::new(
            level_width / columns as f32,
            level_height / tiles.len() as f32,
        );
        let mut bricks = Vec::new();
        for (y, row) in tiles.iter().enumerate() {
            for (x, &tile) in row.iter().enumerate() {
                if tile == TILE_EMPTY {
                    continue;
                }
                let pos = Vec2::new(unit.x * x as f32, unit.y * y as f32);
                let mut brick = Brick::new(pos, unit, tile == TILE_SOLID);
                brick.color = tile;
                bricks.push(brick);
            }
        }

        log::info!(
            "Level built: {}x{} grid, {} bricks ({} destructible)",
            columns,
            tiles.len(),
            bricks.len(),
            bricks.iter().filter(|b| !b.solid).count()
        );
        Ok(Self { bricks })
    }

    /// Bring every brick back
    pub fn reset(&mut self) {
        for brick in &mut self.bricks {
            brick.destroyed = false;
        }
    }

    /// Destructible bricks not yet destroyed
    pub fn remaining_destructible(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_destructible()).count()
    }

    /// True once every destructible brick is gone
    pub fn is_completed(&self) -> bool {
        self.remaining_destructible() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_grid_layout() {
        let tiles = vec![vec![1, 0, 2], vec![3, 3, 0]];
        let level = Level::from_grid(&tiles, 300.0, 100.0).unwrap();

        assert_eq!(level.bricks.len(), 4);
        let first = &level.bricks[0];
        assert!(first.solid);
        assert_eq!(first.pos, Vec2::ZERO);
        assert_eq!(first.size, Vec2::new(100.0, 50.0));

        let second = &level.bricks[1];
        assert!(!second.solid);
        assert_eq!(second.color, 2);
        assert_eq!(second.pos, Vec2::new(200.0, 0.0));

        assert_eq!(level.bricks[3].pos, Vec2::new(100.0, 50.0));
        assert_eq!(level.remaining_destructible(), 3);
    }

    #[test]
    fn test_from_grid_rejects_bad_input() {
        assert_eq!(
            Level::from_grid(&[], 100.0, 100.0),
            Err(LevelError::EmptyGrid)
        );
        assert_eq!(
            Level::from_grid(&[vec![1, 2], vec![1]], 100.0, 100.0),
            Err(LevelError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1
            })
        );
        assert!(matches!(
            Level::from_grid(&[vec![1]], 0.0, 100.0),
            Err(LevelError::InvalidArea { .. })
        ));
    }

    #[test]
    fn test_completion_and_reset() {
        let mut level = Level::from_descriptors(&[
            BrickDescriptor {
                pos: Vec2::ZERO,
                size: Vec2::new(60.0, 20.0),
                solid: true,
            },
            BrickDescriptor {
                pos: Vec2::new(60.0, 0.0),
                size: Vec2::new(60.0, 20.0),
                solid: false,
            },
        ]);
        assert!(!level.is_completed());

        level.bricks[1].destroyed = true;
        assert!(level.is_completed());

        level.reset();
        assert!(!level.bricks[1].destroyed);
        assert_eq!(level.remaining_destructible(), 1);
    }

    #[test]
    fn test_descriptors_from_json() {
        let json = r#"[{ "pos": [0.0, 0.0], "size": [60.0, 20.0], "solid": false }]"#;
        let descriptors: Vec<BrickDescriptor> = serde_json::from_str(json).unwrap();
        let level = Level::from_descriptors(&descriptors);
        assert_eq!(level.bricks[0].size, Vec2::new(60.0, 20.0));
        assert!(!level.bricks[0].destroyed);
    }
}

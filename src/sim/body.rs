//! Moving bodies: the ball and the ghost
//!
//! A body is a circle stored by the top-left corner of its bounding box,
//! the same way bricks are stored, so it can act as either the circle or the
//! box in an overlap test.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::overlaps;
use super::level::Brick;

/// A circular body with a fixed radius and launch velocity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingBody {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    pub radius: f32,
    pub vel: Vec2,
    /// A stuck body ignores its velocity
    pub stuck: bool,
}

impl MovingBody {
    pub fn new(pos: Vec2, radius: f32, vel: Vec2) -> Self {
        Self {
            pos,
            radius,
            vel,
            stuck: true,
        }
    }

    /// Circle center
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.radius
    }

    /// Bounding-box size (diameter on both axes)
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::splat(self.radius * 2.0)
    }

    /// Check overlap between this body's circle and a box
    #[inline]
    pub fn overlaps_rect(&self, rect_pos: Vec2, rect_size: Vec2) -> bool {
        overlaps(self.center(), self.radius, rect_pos, rect_size)
    }

    /// Check overlap between this body's circle and another body's bounding box
    #[inline]
    pub fn overlaps_body(&self, other: &MovingBody) -> bool {
        self.overlaps_rect(other.pos, other.size())
    }

    /// True if any solid brick overlaps this body
    pub fn touches_solid(&self, bricks: &[Brick]) -> bool {
        bricks
            .iter()
            .any(|brick| brick.solid && self.overlaps_rect(brick.pos, brick.size))
    }

    /// Shift by `delta`, then sweep the bricks in order and undo the shift
    /// for each solid brick the body overlaps at its current position
    ///
    /// Returns true if any brick undid the shift.
    pub fn try_shift(&mut self, delta: Vec2, bricks: &[Brick]) -> bool {
        self.pos += delta;
        let mut blocked = false;
        for brick in bricks {
            if brick.solid && self.overlaps_rect(brick.pos, brick.size) {
                self.pos -= delta;
                blocked = true;
            }
        }
        blocked
    }

    /// Advance by velocity, bouncing off the left, right and top edges
    pub fn advance(&mut self, dt: f32, width: f32) -> Vec2 {
        if self.stuck {
            return self.pos;
        }

        self.pos += self.vel * dt;
        let diameter = self.radius * 2.0;
        if self.pos.x <= 0.0 {
            self.vel.x = -self.vel.x;
            self.pos.x = 0.0;
        } else if self.pos.x + diameter >= width {
            self.vel.x = -self.vel.x;
            self.pos.x = width - diameter;
        }
        if self.pos.y <= 0.0 {
            self.vel.y = -self.vel.y;
            self.pos.y = 0.0;
        }
        self.pos
    }

    /// Move back to `pos`, keeping radius and velocity
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_at(x: f32, y: f32) -> MovingBody {
        MovingBody::new(Vec2::new(x, y), 10.0, Vec2::new(100.0, -50.0))
    }

    #[test]
    fn test_center_and_size() {
        let body = body_at(5.0, 7.0);
        assert_eq!(body.center(), Vec2::new(15.0, 17.0));
        assert_eq!(body.size(), Vec2::new(20.0, 20.0));
    }

    #[test]
    fn test_stuck_body_does_not_move() {
        let mut body = body_at(50.0, 50.0);
        body.advance(1.0, 800.0);
        assert_eq!(body.pos, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_advance_moves_by_velocity() {
        let mut body = body_at(50.0, 100.0);
        body.stuck = false;
        body.advance(0.1, 800.0);
        assert!((body.pos - Vec2::new(60.0, 95.0)).length() < 1e-4);
    }

    #[test]
    fn test_advance_bounces_off_right_edge() {
        let mut body = body_at(775.0, 100.0);
        body.stuck = false;
        body.advance(0.1, 800.0);
        assert_eq!(body.pos.x, 780.0);
        assert_eq!(body.vel.x, -100.0);
    }

    #[test]
    fn test_advance_bounces_off_left_and_top() {
        let mut body = MovingBody::new(Vec2::new(2.0, 2.0), 10.0, Vec2::new(-100.0, -100.0));
        body.stuck = false;
        body.advance(0.1, 800.0);
        assert_eq!(body.pos, Vec2::ZERO);
        assert_eq!(body.vel, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_overlaps_body_uses_bounding_box() {
        let ghost = body_at(0.0, 0.0);
        // Ball box spans 25..45; ghost center at 10 with radius 10
        let ball = body_at(25.0, 0.0);
        assert!(!ghost.overlaps_body(&ball));
        let ball = body_at(19.0, 0.0);
        assert!(ghost.overlaps_body(&ball));
    }

    #[test]
    fn test_try_shift_reverts_on_solid() {
        let bricks = vec![Brick::new(Vec2::ZERO, Vec2::new(60.0, 20.0), true)];
        let mut body = body_at(60.0, 0.0);
        assert!(body.try_shift(Vec2::new(-5.0, 0.0), &bricks));
        assert_eq!(body.pos, Vec2::new(60.0, 0.0));
    }

    #[test]
    fn test_touches_solid_skips_destructible() {
        let mut bricks = vec![Brick::new(Vec2::ZERO, Vec2::new(60.0, 20.0), false)];
        let body = body_at(50.0, 0.0);
        assert!(!body.touches_solid(&bricks));
        bricks[0].solid = true;
        assert!(body.touches_solid(&bricks));
    }

    #[test]
    fn test_try_shift_ignores_destructible() {
        let bricks = vec![Brick::new(Vec2::ZERO, Vec2::new(60.0, 20.0), false)];
        let mut body = body_at(60.0, 0.0);
        assert!(!body.try_shift(Vec2::new(-5.0, 0.0), &bricks));
        assert_eq!(body.pos, Vec2::new(55.0, 0.0));
    }

    #[test]
    fn test_try_shift_checks_later_bricks_after_revert() {
        // The second brick only touches the shifted position, which the
        // first brick already undid.
        let bricks = vec![
            Brick::new(Vec2::new(0.0, 0.0), Vec2::new(60.0, 10.0), true),
            Brick::new(Vec2::new(0.0, 10.0), Vec2::new(60.0, 10.0), true),
        ];
        let mut body = body_at(62.0, 0.0);
        body.try_shift(Vec2::new(-4.0, 0.0), &bricks);
        assert_eq!(body.pos, Vec2::new(62.0, 0.0));
    }
}

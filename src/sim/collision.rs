//! Circle vs axis-aligned box overlap
//!
//! Every collision in the game goes through one test: clamp the offset
//! between the circle center and the box center to the box half-extents,
//! and compare the distance to that closest point with the radius.

use glam::Vec2;

/// Point on (or inside) the box closest to `center`
///
/// `rect_pos` is the box's top-left corner.
#[inline]
pub fn closest_point(center: Vec2, rect_pos: Vec2, rect_size: Vec2) -> Vec2 {
    let half_extents = rect_size / 2.0;
    let rect_center = rect_pos + half_extents;
    let offset = (center - rect_center).clamp(-half_extents, half_extents);
    rect_center + offset
}

/// Check whether a circle overlaps an axis-aligned box
///
/// The boundary is exclusive: a circle exactly `radius` away from the
/// nearest box point does not overlap.
#[inline]
pub fn overlaps(center: Vec2, radius: f32, rect_pos: Vec2, rect_size: Vec2) -> bool {
    closest_point(center, rect_pos, rect_size).distance(center) < radius
}

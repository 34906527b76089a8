//! Active pointer tracking.
//!
//! One pointer is tracked at a time; its displacement since selection is
//! clamped per axis so an item never moves in a direction its flags disallow.

use crate::direction::{Direction, DirectionFlags};

pub type PointerId = u64;

/// The pointer currently driving an interaction, with its reference origin and
/// the accumulated, clamped displacement.
///
/// The origin is the touch-down point for swipes and the long-press point for
/// drags; re-grabbing a settling item re-bases it by the item's in-flight
/// offset so the item does not jump under the finger.
#[derive(Clone, Copy, Debug)]
pub struct PointerTrack {
    pub pointer: PointerId,
    pub initial_x: f32,
    pub initial_y: f32,
    pub dx: f32,
    pub dy: f32,
}

impl PointerTrack {
    pub fn new(pointer: PointerId, x: f32, y: f32) -> Self {
        Self {
            pointer,
            initial_x: x,
            initial_y: y,
            dx: 0.0,
            dy: 0.0,
        }
    }

    /// Re-bases the origin at the given point and zeroes the displacement.
    pub fn rebase(&mut self, x: f32, y: f32) {
        self.initial_x = x;
        self.initial_y = y;
        self.dx = 0.0;
        self.dy = 0.0;
    }

    /// Updates dx/dy from the latest pointer position, clamping each axis to
    /// zero movement in directions the flags disallow.
    pub fn update(&mut self, x: f32, y: f32, flags: DirectionFlags) {
        self.dx = x - self.initial_x;
        self.dy = y - self.initial_y;
        if !flags.allows(Direction::Left) {
            self.dx = self.dx.max(0.0);
        }
        if !flags.allows(Direction::Right) {
            self.dx = self.dx.min(0.0);
        }
        if !flags.allows(Direction::Up) {
            self.dy = self.dy.max(0.0);
        }
        if !flags.allows(Direction::Down) {
            self.dy = self.dy.min(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_movement_with_all_directions_allowed() {
        let mut track = PointerTrack::new(1, 100.0, 100.0);
        let all = DirectionFlags::of(&[
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]);
        track.update(130.0, 60.0, all);
        assert_eq!(track.dx, 30.0);
        assert_eq!(track.dy, -40.0);
    }

    #[test]
    fn up_only_clamps_dy_negative_and_dx_to_zero() {
        let mut track = PointerTrack::new(1, 100.0, 100.0);
        let up_only = DirectionFlags::of(&[Direction::Up]);

        track.update(150.0, 180.0, up_only);
        assert_eq!(track.dx, 0.0);
        assert_eq!(track.dy, 0.0);

        track.update(40.0, 30.0, up_only);
        assert_eq!(track.dx, 0.0);
        assert_eq!(track.dy, -70.0);
    }

    #[test]
    fn rebase_zeroes_displacement() {
        let mut track = PointerTrack::new(1, 0.0, 0.0);
        let all = DirectionFlags::of(&[Direction::Left, Direction::Right]);
        track.update(50.0, 0.0, all);
        assert_eq!(track.dx, 50.0);
        track.rebase(50.0, 0.0);
        assert_eq!(track.dx, 0.0);
        track.update(30.0, 0.0, all);
        assert_eq!(track.dx, -20.0);
    }
}

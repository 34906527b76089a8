//! Settle ("recover") animations for released items.
//!
//! When an item is deselected while still attached, it animates from its last
//! interactive offset to a resting offset: zero for a drag release or a
//! cancelled swipe, a full container extent for a committed swipe. All live
//! animations are driven together by the controller's per-frame pass; this
//! module only models a single animation's interpolation and lifecycle flags.

use crate::container::ItemId;
use crate::direction::{ActionState, Direction};
use itemtouch_animation::{Easing, Lerp, Tween};

/// What kind of settle an animation performs; decides its default duration and
/// its completion side effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationCategory {
    /// Item returns to its layout position after a drag.
    Drag,
    /// Swipe did not commit; item returns to its layout position.
    SwipeCancel,
    /// Swipe committed; item leaves the viewport and a dismissal notification
    /// follows once the host is not mid-animation.
    SwipeSuccess,
}

/// One in-flight settle animation.
///
/// `overridden` marks an animation whose item the user re-grabbed before it
/// finished; an overridden animation is removed immediately and must not fire
/// its completion side effects. `pending_cleanup` keeps a finished
/// swipe-success animation alive until the host detaches the item, at which
/// point the policy's `clear_view` runs.
#[derive(Debug)]
pub struct RecoverAnimation {
    pub item: ItemId,
    pub category: AnimationCategory,
    /// Action state the item was released from.
    pub action_state: ActionState,
    /// Committed swipe direction, if this settle dismisses the item.
    pub swipe_direction: Option<Direction>,
    pub start_dx: f32,
    pub start_dy: f32,
    pub target_dx: f32,
    pub target_dy: f32,
    /// Current interpolated offsets, refreshed once per frame.
    pub x: f32,
    pub y: f32,
    pub overridden: bool,
    pub ended: bool,
    pub pending_cleanup: bool,
    tween: Tween,
    fraction: f32,
}

impl RecoverAnimation {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        item: ItemId,
        category: AnimationCategory,
        action_state: ActionState,
        swipe_direction: Option<Direction>,
        start_dx: f32,
        start_dy: f32,
        target_dx: f32,
        target_dy: f32,
        duration_ms: u64,
    ) -> Self {
        Self {
            item,
            category,
            action_state,
            swipe_direction,
            start_dx,
            start_dy,
            target_dx,
            target_dy,
            x: start_dx,
            y: start_dy,
            overridden: false,
            ended: false,
            pending_cleanup: false,
            tween: Tween::new(duration_ms, Easing::EaseInOut),
            fraction: 0.0,
        }
    }

    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Advances the interpolated offsets to the given frame time.
    pub fn update(&mut self, now_ms: u64) {
        self.fraction = self.tween.fraction_at(now_ms);
        self.x = self.start_dx.lerp(&self.target_dx, self.fraction);
        self.y = self.start_dy.lerp(&self.target_dy, self.fraction);
    }

    /// Whether the animation's duration has fully elapsed.
    pub fn is_time_up(&self, now_ms: u64) -> bool {
        self.tween.is_finished(now_ms)
    }

    /// Snaps the offsets to the target, used when ending an animation early
    /// for an item that is going away.
    pub fn finish(&mut self) {
        self.fraction = 1.0;
        self.x = self.target_dx;
        self.y = self.target_dy;
        self.ended = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag_return(start_dx: f32, start_dy: f32) -> RecoverAnimation {
        RecoverAnimation::new(
            ItemId(1),
            AnimationCategory::Drag,
            ActionState::Drag,
            None,
            start_dx,
            start_dy,
            0.0,
            0.0,
            200,
        )
    }

    #[test]
    fn interpolates_from_start_to_target() {
        let mut anim = drag_return(100.0, -40.0);
        anim.update(0);
        assert_eq!(anim.x, 100.0);
        assert_eq!(anim.y, -40.0);
        anim.update(100);
        assert!(anim.x > 0.0 && anim.x < 100.0);
        assert!(anim.y < 0.0 && anim.y > -40.0);
        anim.update(200);
        assert_eq!(anim.x, 0.0);
        assert_eq!(anim.y, 0.0);
        assert!(anim.is_time_up(200));
    }

    #[test]
    fn start_time_latches_on_first_update() {
        let mut anim = drag_return(50.0, 0.0);
        assert!(!anim.is_time_up(1_000));
        anim.update(1_000);
        assert!(!anim.is_time_up(1_199));
        assert!(anim.is_time_up(1_200));
    }

    #[test]
    fn finish_snaps_to_target() {
        let mut anim = drag_return(80.0, 80.0);
        anim.update(0);
        anim.finish();
        assert_eq!(anim.fraction(), 1.0);
        assert_eq!((anim.x, anim.y), (0.0, 0.0));
        assert!(anim.ended);
    }
}

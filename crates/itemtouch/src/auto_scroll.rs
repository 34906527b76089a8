//! Edge auto-scroll interpolation for drags.
//!
//! When a dragged item protrudes past the scrollable edge of its container,
//! the container scrolls a little every frame. The per-frame amount grows with
//! how far the item protrudes (quintic ease-out over the item's own extent)
//! and with how long the scroll has been running (quintic ease-in over a fixed
//! acceleration ramp), and never rounds down to a standstill.

use crate::constants::{DRAG_SCROLL_ACCELERATION_LIMIT_MS, MAX_DRAG_SCROLL_PER_FRAME};
use itemtouch_animation::Easing;

/// Default out-of-bounds scroll amount for one frame, in px.
///
/// `out_of_bounds` is how far the dragged item protrudes past the edge, signed
/// towards the edge; the result carries the same sign. The magnitude is capped
/// at [`MAX_DRAG_SCROLL_PER_FRAME`] and floored at one pixel so an engaged
/// auto-scroll always makes progress.
pub fn default_interpolate_out_of_bounds_scroll(
    item_extent: f32,
    out_of_bounds: f32,
    _container_extent: f32,
    ms_since_scroll_start: u64,
) -> f32 {
    if out_of_bounds == 0.0 || item_extent <= 0.0 {
        return 0.0;
    }
    let direction = out_of_bounds.signum();
    let overlap_ratio = (out_of_bounds.abs() / item_extent).min(1.0);
    let capped = direction * MAX_DRAG_SCROLL_PER_FRAME * Easing::QuinticOut.transform(overlap_ratio);
    let time_ratio = if ms_since_scroll_start >= DRAG_SCROLL_ACCELERATION_LIMIT_MS {
        1.0
    } else {
        ms_since_scroll_start as f32 / DRAG_SCROLL_ACCELERATION_LIMIT_MS as f32
    };
    let value = capped * Easing::QuinticIn.transform(time_ratio);
    if value.abs() < 1.0 {
        direction
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAMP: u64 = DRAG_SCROLL_ACCELERATION_LIMIT_MS;

    #[test]
    fn zero_protrusion_scrolls_nothing() {
        assert_eq!(default_interpolate_out_of_bounds_scroll(100.0, 0.0, 500.0, RAMP), 0.0);
    }

    #[test]
    fn engaged_scroll_never_stalls() {
        // barely protruding at the very start of the ramp would interpolate to
        // a fraction of a pixel; floored to one full pixel instead
        let value = default_interpolate_out_of_bounds_scroll(100.0, 0.5, 500.0, 1);
        assert_eq!(value, 1.0);
        let value = default_interpolate_out_of_bounds_scroll(100.0, -0.5, 500.0, 1);
        assert_eq!(value, -1.0);
    }

    #[test]
    fn sign_follows_protrusion() {
        let up = default_interpolate_out_of_bounds_scroll(100.0, -80.0, 500.0, RAMP);
        let down = default_interpolate_out_of_bounds_scroll(100.0, 80.0, 500.0, RAMP);
        assert!(up < 0.0);
        assert!(down > 0.0);
        assert_eq!(up, -down);
    }

    #[test]
    fn fully_ramped_full_overlap_hits_the_cap() {
        let value = default_interpolate_out_of_bounds_scroll(100.0, 150.0, 500.0, RAMP * 2);
        assert_eq!(value, MAX_DRAG_SCROLL_PER_FRAME);
    }

    #[test]
    fn scroll_accelerates_over_the_ramp() {
        let early = default_interpolate_out_of_bounds_scroll(100.0, 100.0, 500.0, RAMP / 4);
        let late = default_interpolate_out_of_bounds_scroll(100.0, 100.0, 500.0, RAMP);
        assert!(early < late, "{early} should be below {late}");
    }

    #[test]
    fn larger_protrusion_scrolls_faster() {
        let shallow = default_interpolate_out_of_bounds_scroll(100.0, 20.0, 500.0, RAMP);
        let deep = default_interpolate_out_of_bounds_scroll(100.0, 90.0, 500.0, RAMP);
        assert!(shallow < deep);
    }
}

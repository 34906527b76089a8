//! Easing curves and tween math for itemtouch.
//!
//! Time never flows implicitly here: callers feed explicit frame timestamps and
//! read back interpolated fractions, so everything in this crate is
//! deterministic and directly testable. The easing vocabulary follows the
//! Android animation framework the original controller was built against
//! (AccelerateDecelerate for settle animations, quintic curves for the
//! out-of-bounds drag scroll).

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

/// Easing functions for settle animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Ease in using cubic curve.
    EaseIn,
    /// Ease out using cubic curve.
    EaseOut,
    /// Ease in and out using cubic curve. Matches the Android framework's
    /// AccelerateDecelerateInterpolator closely enough for recover animations.
    EaseInOut,
    /// Quintic acceleration, `t^5`. Drag-scroll ramp-up curve.
    QuinticIn,
    /// Quintic deceleration, `(t-1)^5 + 1`. Drag-scroll cap curve.
    QuinticOut,
}

impl Easing {
    /// Apply the easing function to a linear fraction in `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::QuinticIn => fraction * fraction * fraction * fraction * fraction,
            Easing::QuinticOut => {
                let t = fraction - 1.0;
                t * t * t * t * t + 1.0
            }
        }
    }
}

/// Cubic bezier curve approximation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric `t` matching the x fraction, clamped
    // to [0, 1] to keep the solution in bounds.
    let mut t = fraction;
    let mut newton_success = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            newton_success = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !newton_success {
        // Binary subdivision fallback when Newton-Raphson did not converge.
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let x = sample_curve(ax, bx, cx, t);
            let delta = x - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// A duration-bound tween driven by explicit frame timestamps.
///
/// The start time latches on the first `fraction_at` call, so a tween created
/// mid-frame starts counting from the first frame that actually observes it.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    duration_ms: u64,
    easing: Easing,
    start_time_ms: Option<u64>,
}

impl Tween {
    pub fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
            start_time_ms: None,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Eased fraction in `[0, 1]` at the given frame time. Latches the start
    /// time on first call.
    pub fn fraction_at(&mut self, now_ms: u64) -> f32 {
        let start = *self.start_time_ms.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(start);
        if self.duration_ms == 0 {
            return 1.0;
        }
        let linear = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        self.easing.transform(linear)
    }

    /// Whether the linear (un-eased) fraction has reached 1.0.
    pub fn is_finished(&self, now_ms: u64) -> bool {
        match self.start_time_ms {
            Some(start) => now_ms.saturating_sub(start) >= self.duration_ms,
            None => self.duration_ms == 0,
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;

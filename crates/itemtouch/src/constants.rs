//! Shared gesture and animation constants.
//!
//! Values are in logical pixels (or px/sec for velocities) at baseline density.
//! They mirror the Android `ViewConfiguration` / RecyclerView dimen defaults the
//! original ItemTouchHelper reads at attach time; hosts on very high-density
//! touch screens may want to scale them through the `TouchCallback` hooks.

/// Touch slop in logical pixels.
///
/// Pointer movement below this distance is treated as jitter: it neither
/// selects an item for swiping nor cancels a pending long press. 8.0 matches
/// Android's ~8dp `ViewConfiguration.TOUCH_SLOP` convention.
pub const TOUCH_SLOP: f32 = 8.0;

/// How long a pointer must stay within slop before a long press fires.
pub const LONG_PRESS_TIMEOUT_MS: u64 = 500;

/// Minimum axis velocity (px/sec) for a fling to commit a swipe.
pub const SWIPE_ESCAPE_VELOCITY: f32 = 120.0;

/// Cap applied to computed pointer velocities (px/sec). If both axes saturate
/// the cap the gesture is ambiguous and velocity no longer decides the swipe.
pub const MAX_SWIPE_VELOCITY: f32 = 800.0;

/// Largest scroll delta auto-scroll may apply in a single frame.
pub const MAX_DRAG_SCROLL_PER_FRAME: f32 = 20.0;

/// Drag scroll speed keeps accelerating until this many milliseconds after the
/// dragged item first went out of bounds.
pub const DRAG_SCROLL_ACCELERATION_LIMIT_MS: u64 = 2000;

/// Settle duration for an item released from a drag.
pub const DEFAULT_DRAG_ANIMATION_DURATION_MS: u64 = 200;

/// Settle duration for a swiped item (committed or cancelled).
pub const DEFAULT_SWIPE_ANIMATION_DURATION_MS: u64 = 250;

//! Pointer-driven drag & swipe interactions for scrollable list containers.
//!
//! A port of the interaction model behind RecyclerView's ItemTouchHelper:
//! long-press (or programmatic) drag with live reordering and edge
//! auto-scroll, and horizontal/vertical swipe-to-dismiss committed by distance
//! or by fling velocity. The controller is UI-toolkit agnostic; the host list
//! implements [`ItemContainer`], the application implements [`TouchCallback`],
//! and [`ItemTouchHelper`] runs the state machine in between.
//!
//! All timing is explicit: pointer events carry millisecond timestamps and
//! animations advance through [`ItemTouchHelper::advance_frame`], so the same
//! code runs under a real frame loop or a deterministic test clock.

pub mod auto_scroll;
pub mod callback;
pub mod constants;
pub mod container;
pub mod direction;
pub mod helper;
pub mod long_press;
pub mod pointer;
pub mod recover;
pub mod swap;
pub mod velocity_tracker;

pub use callback::TouchCallback;
pub use constants::{
    DEFAULT_DRAG_ANIMATION_DURATION_MS, DEFAULT_SWIPE_ANIMATION_DURATION_MS,
    DRAG_SCROLL_ACCELERATION_LIMIT_MS, LONG_PRESS_TIMEOUT_MS, MAX_DRAG_SCROLL_PER_FRAME,
    MAX_SWIPE_VELOCITY, SWIPE_ESCAPE_VELOCITY, TOUCH_SLOP,
};
pub use container::{ItemContainer, ItemId, LayoutDirection};
pub use itemtouch_geometry::{EdgeInsets, Point, Rect, Size};
pub use direction::{ActionState, Direction, DirectionFlags, MovementFlags};
pub use helper::ItemTouchHelper;
pub use pointer::PointerId;
pub use recover::AnimationCategory;
pub use velocity_tracker::VelocityTracker;

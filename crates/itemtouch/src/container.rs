//! The host container capability interface.
//!
//! The controller never owns list items or their layout; it consumes the host
//! through this trait: geometry queries, offset/scroll mutation, and identity
//! mapping between screen points, item handles, and adapter positions. A
//! RecyclerView-like widget, a lazy-list state, or a test mock all fit behind
//! it.

use itemtouch_geometry::{EdgeInsets, Point, Rect, Size};

/// Opaque, stable handle to one list item currently known to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

/// Reading direction of the container, used to resolve `Start`/`End` flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Capabilities the controller needs from the hosting list container.
///
/// Query methods answer about the current layout pass; item handles returned
/// from them may stop being valid after any mutation (`scroll_by`,
/// `on_move` accepted by the policy, ...), so the controller re-queries rather
/// than caching. All methods are called on the UI thread.
pub trait ItemContainer {
    /// Number of currently laid-out children.
    fn child_count(&self) -> usize;

    /// The laid-out child at `index` (layout order, not adapter order).
    fn child_at(&self, index: usize) -> Option<ItemId>;

    /// Layout bounds of an item, excluding any render-time translation.
    fn item_bounds(&self, item: ItemId) -> Option<Rect>;

    /// Decoration offsets (dividers, margins) around an item's bounds.
    fn decorated_insets(&self, item: ItemId) -> EdgeInsets {
        let _ = item;
        EdgeInsets::default()
    }

    /// Current render-time translation of an item.
    fn translation(&self, item: ItemId) -> Point;

    /// Sets an item's render-time translation on top of its layout position.
    fn set_translation(&mut self, item: ItemId, translation: Point);

    /// Viewport size of the container.
    fn size(&self) -> Size;

    /// Inner padding of the container.
    fn padding(&self) -> EdgeInsets {
        EdgeInsets::default()
    }

    fn layout_direction(&self) -> LayoutDirection {
        LayoutDirection::Ltr
    }

    fn can_scroll_horizontally(&self) -> bool;

    fn can_scroll_vertically(&self) -> bool;

    /// Scrolls the content by the given deltas.
    fn scroll_by(&mut self, dx: f32, dy: f32);

    /// Brings the given adapter position (back) into the viewport.
    fn scroll_to_position(&mut self, position: usize);

    /// Topmost item whose laid-out bounds contain the point, ignoring
    /// render-time translations (the controller hit-tests translated items
    /// itself before falling back to this).
    fn item_under(&self, x: f32, y: f32) -> Option<ItemId>;

    /// Adapter position of an item, or `None` once it has been removed.
    fn adapter_position(&self, item: ItemId) -> Option<usize>;

    /// Whether the item is currently a laid-out child of this container.
    fn is_attached_child(&self, item: ItemId) -> bool;

    /// True while a layout pass has been requested but not yet performed.
    fn is_layout_requested(&self) -> bool {
        false
    }

    /// True while the user is scrolling the container itself (as opposed to
    /// dragging an item).
    fn is_user_scroll_in_progress(&self) -> bool {
        false
    }

    /// True while the host is running its own add/remove/move item animations.
    fn has_running_item_animation(&self) -> bool {
        false
    }

    /// Draws the given item above its siblings for the duration of an
    /// interaction; `None` restores normal draw order.
    fn set_draw_order_override(&mut self, item: Option<ItemId>) {
        let _ = item;
    }

    /// Tells enclosing scrollables to leave the gesture to this controller.
    fn request_disallow_intercept(&mut self, disallow: bool) {
        let _ = disallow;
    }

    /// Haptic/selection feedback hook, fired when a drag starts.
    fn perform_haptic_feedback(&mut self, item: ItemId) {
        let _ = item;
    }

    /// Requests a relayout so items settle into their post-interaction spots.
    fn request_relayout(&mut self) {}
}

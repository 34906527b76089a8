//! The interaction policy trait.
//!
//! One trait carries everything app code decides: which items may move and in
//! which directions, what happens when a drop target is reached or a swipe
//! commits, and the tunables (thresholds, velocities, durations). Every method
//! except the three core decisions has a sensible default, so a minimal policy
//! is `movement_flags` + `on_move` + `on_swiped`.

use crate::auto_scroll;
use crate::constants::{
    DEFAULT_DRAG_ANIMATION_DURATION_MS, DEFAULT_SWIPE_ANIMATION_DURATION_MS,
};
use crate::container::{ItemContainer, ItemId};
use crate::direction::{ActionState, Direction, MovementFlags};
use crate::recover::AnimationCategory;
use crate::swap;

/// Application policy consulted by [`crate::ItemTouchHelper`].
///
/// Directions returned from [`movement_flags`](Self::movement_flags) may be
/// expressed with `Start`/`End`; the controller resolves them against the
/// container's layout direction before acting, and converts a committed swipe
/// direction back to relative form when the policy asked in relative terms.
pub trait TouchCallback {
    /// Allowed drag and swipe directions for an item, packed per action state.
    /// Return [`MovementFlags::EMPTY`] for items that must not move.
    fn movement_flags(&self, container: &dyn ItemContainer, item: ItemId) -> MovementFlags;

    /// A drop target has been chosen; reorder `dragged` to `target`'s position
    /// in the backing data and return `true`, or refuse with `false`.
    fn on_move(
        &mut self,
        container: &mut dyn ItemContainer,
        dragged: ItemId,
        target: ItemId,
    ) -> bool;

    /// A swipe committed and its settle animation finished; remove the item
    /// from the backing data.
    fn on_swiped(&mut self, container: &mut dyn ItemContainer, item: ItemId, direction: Direction);

    /// Whether `dragged` may be dropped over `candidate`. Filtering here keeps
    /// undroppable items out of the candidate list entirely.
    fn can_drop_over(
        &self,
        container: &dyn ItemContainer,
        dragged: ItemId,
        candidate: ItemId,
    ) -> bool {
        let _ = (container, dragged, candidate);
        true
    }

    /// Selection changed: `Some(item)` entering a drag or swipe, `None` with
    /// [`ActionState::Idle`] on release.
    fn on_selected_changed(
        &mut self,
        container: &mut dyn ItemContainer,
        item: Option<ItemId>,
        action_state: ActionState,
    ) {
        let _ = (container, item, action_state);
    }

    /// An item is fully done with its interaction, including any settle
    /// animation; undo every visual side effect applied while it was active.
    fn clear_view(&mut self, container: &mut dyn ItemContainer, item: ItemId) {
        container.set_translation(item, itemtouch_geometry::Point::ZERO);
    }

    /// Whether holding an item down starts a drag. Disable to only start drags
    /// programmatically via [`crate::ItemTouchHelper::start_drag`].
    fn is_long_press_drag_enabled(&self) -> bool {
        true
    }

    /// Whether pointer movement over an item may start a swipe.
    fn is_item_view_swipe_enabled(&self) -> bool {
        true
    }

    /// Extra margin (px) grown around the dragged item's bounds when searching
    /// for swap candidates.
    fn bounding_box_margin(&self) -> f32 {
        0.0
    }

    /// Fraction of the item's extent the pointer must travel for a swipe to
    /// commit by distance.
    fn swipe_threshold(&self, item: ItemId) -> f32 {
        let _ = item;
        0.5
    }

    /// Fraction of the item's extent the dragged item must move before swap
    /// candidates are searched.
    fn move_threshold(&self, item: ItemId) -> f32 {
        let _ = item;
        0.5
    }

    /// Minimum release velocity (px/sec) for a swipe to commit as a fling.
    /// Receives the controller default and may scale or replace it.
    fn swipe_escape_velocity(&self, default_value: f32) -> f32 {
        default_value
    }

    /// Upper velocity cap (px/sec) applied before the escape comparison, so a
    /// wild fling on a jittery axis cannot dominate.
    fn swipe_velocity_threshold(&self, default_value: f32) -> f32 {
        default_value
    }

    /// Duration of a settle animation. `dx`/`dy` are the remaining offsets the
    /// animation must cover.
    fn animation_duration(
        &self,
        container: &dyn ItemContainer,
        category: AnimationCategory,
        dx: f32,
        dy: f32,
    ) -> u64 {
        let _ = (container, dx, dy);
        match category {
            AnimationCategory::Drag => DEFAULT_DRAG_ANIMATION_DURATION_MS,
            AnimationCategory::SwipeCancel | AnimationCategory::SwipeSuccess => {
                DEFAULT_SWIPE_ANIMATION_DURATION_MS
            }
        }
    }

    /// Picks the drop target among distance-sorted candidates, or `None` to
    /// defer the swap. `cur_x`/`cur_y` are the dragged item's provisional
    /// top-left.
    fn choose_drop_target(
        &self,
        container: &dyn ItemContainer,
        selected: ItemId,
        targets: &[ItemId],
        cur_x: f32,
        cur_y: f32,
    ) -> Option<ItemId> {
        swap::default_choose_drop_target(container, selected, targets, cur_x, cur_y)
    }

    /// A swap was applied. The default keeps the moved item visible by
    /// scrolling to its new position when it landed against a container edge.
    #[allow(clippy::too_many_arguments)]
    fn on_moved(
        &mut self,
        container: &mut dyn ItemContainer,
        dragged: ItemId,
        from_position: usize,
        target: ItemId,
        to_position: usize,
        x: f32,
        y: f32,
    ) {
        let _ = (dragged, from_position, x, y);
        let Some(bounds) = container.item_bounds(target) else {
            return;
        };
        let insets = container.decorated_insets(target);
        let padding = container.padding();
        let size = container.size();
        if container.can_scroll_horizontally() {
            if bounds.left() - insets.left <= padding.left
                || bounds.right() + insets.right >= size.width - padding.right
            {
                container.scroll_to_position(to_position);
                return;
            }
        }
        if container.can_scroll_vertically()
            && (bounds.top() - insets.top <= padding.top
                || bounds.bottom() + insets.bottom >= size.height - padding.bottom)
        {
            container.scroll_to_position(to_position);
        }
    }

    /// Per-frame auto-scroll amount while the dragged item protrudes past a
    /// scrollable edge. See
    /// [`auto_scroll::default_interpolate_out_of_bounds_scroll`].
    fn interpolate_out_of_bounds_scroll(
        &self,
        item_extent: f32,
        out_of_bounds: f32,
        container_extent: f32,
        ms_since_scroll_start: u64,
    ) -> f32 {
        auto_scroll::default_interpolate_out_of_bounds_scroll(
            item_extent,
            out_of_bounds,
            container_extent,
            ms_since_scroll_start,
        )
    }
}

/// Policy that allows nothing and refuses every move; handy for exercising
/// the default trait methods in isolation.
#[cfg(test)]
pub(crate) struct DefaultsOnly;

#[cfg(test)]
impl TouchCallback for DefaultsOnly {
    fn movement_flags(&self, _container: &dyn ItemContainer, _item: ItemId) -> MovementFlags {
        MovementFlags::EMPTY
    }

    fn on_move(
        &mut self,
        _container: &mut dyn ItemContainer,
        _dragged: ItemId,
        _target: ItemId,
    ) -> bool {
        false
    }

    fn on_swiped(
        &mut self,
        _container: &mut dyn ItemContainer,
        _item: ItemId,
        _direction: Direction,
    ) {
    }
}

//! The drag & swipe interaction controller.
//!
//! [`ItemTouchHelper`] owns the full interaction state machine: classification
//! of raw pointer events into drags and swipes, per-axis displacement
//! clamping, drop-target swaps, edge auto-scroll, and the settle animations
//! that run after release. The host container is passed into every call as a
//! `&mut dyn ItemContainer`; the controller holds no reference to it between
//! calls and drives all time-based behavior from the explicit millisecond
//! timestamps the host supplies, so a frame loop, an event loop, or a test can
//! advance it deterministically.

use crate::callback::TouchCallback;
use crate::constants::{MAX_SWIPE_VELOCITY, SWIPE_ESCAPE_VELOCITY, TOUCH_SLOP};
use crate::container::{ItemContainer, ItemId};
use crate::direction::{ActionState, Direction, DirectionFlags};
use crate::long_press::LongPressGesture;
use crate::pointer::{PointerId, PointerTrack};
use crate::recover::{AnimationCategory, RecoverAnimation};
use crate::swap;
use crate::velocity_tracker::VelocityTracker;
use itemtouch_geometry::{Point, Rect};
use smallvec::SmallVec;

/// A committed swipe whose `on_swiped` dispatch is deferred until the host is
/// not mid-animation.
#[derive(Clone, Copy, Debug)]
struct PendingSwipe {
    item: ItemId,
    direction: Direction,
}

#[derive(Default)]
struct ControllerState {
    selected: Option<ItemId>,
    action_state: ActionState,
    /// Allowed directions for the current selection, already resolved to
    /// absolute and unmasked for the current action state.
    selected_flags: DirectionFlags,
    /// Layout origin of the selected item at selection time.
    selected_start_x: f32,
    selected_start_y: f32,
    track: Option<PointerTrack>,
    recover_animations: Vec<RecoverAnimation>,
    /// Items whose swipe committed; `clear_view` runs when the host detaches
    /// them.
    pending_cleanup: Vec<ItemId>,
    pending_swipes: Vec<PendingSwipe>,
    /// When the current edge auto-scroll engaged; feeds the acceleration ramp.
    drag_scroll_start_ms: Option<u64>,
    overdraw_item: Option<ItemId>,
    attached: bool,
}

/// Pointer-driven drag & swipe controller for a scrollable list container.
///
/// Feed it raw pointer events plus a frame pulse and it consults the
/// [`TouchCallback`] policy for every decision. At most one item is selected
/// at any time; selecting a new item while another is settling overrides that
/// settle first.
pub struct ItemTouchHelper {
    callback: Box<dyn TouchCallback>,
    state: ControllerState,
    long_press: LongPressGesture,
    velocity: VelocityTracker,
}

impl ItemTouchHelper {
    pub fn new(callback: Box<dyn TouchCallback>) -> Self {
        Self {
            callback,
            state: ControllerState::default(),
            long_press: LongPressGesture::new(),
            velocity: VelocityTracker::new(),
        }
    }

    /// Starts tracking a container. Events and frames are ignored until this
    /// is called, and again after [`Self::detach`].
    pub fn attach(&mut self) {
        if self.state.attached {
            return;
        }
        self.state.attached = true;
        self.long_press.reset();
    }

    /// Stops tracking: every in-flight settle animation is ended with its
    /// item's `clear_view`, pending dispatches are dropped, and an armed long
    /// press is revoked so it cannot fire afterwards.
    pub fn detach(&mut self, container: &mut dyn ItemContainer) {
        if !self.state.attached {
            return;
        }
        self.state.attached = false;
        self.select(container, None, ActionState::Idle);
        while let Some(anim) = self.state.recover_animations.pop() {
            self.callback.clear_view(container, anim.item);
        }
        self.state.pending_cleanup.clear();
        self.state.pending_swipes.clear();
        if self.state.overdraw_item.take().is_some() {
            container.set_draw_order_override(None);
        }
        self.state.track = None;
        self.velocity.reset();
        self.long_press.do_not_react_to_long_press();
    }

    pub fn is_attached(&self) -> bool {
        self.state.attached
    }

    pub fn selected_item(&self) -> Option<ItemId> {
        self.state.selected
    }

    pub fn action_state(&self) -> ActionState {
        self.state.action_state
    }

    /// Number of settle animations still interpolating.
    pub fn running_recover_animations(&self) -> usize {
        self.state
            .recover_animations
            .iter()
            .filter(|a| !a.ended)
            .count()
    }

    /// Total settle animations tracked, including finished swipes awaiting
    /// their item's detach.
    pub fn tracked_recover_animations(&self) -> usize {
        self.state.recover_animations.len()
    }

    /// Programmatically starts dragging `item`, as if a long press selected
    /// it. The policy must allow dragging it and it must currently be a
    /// laid-out child; otherwise the call logs an error and does nothing.
    pub fn start_drag(&mut self, container: &mut dyn ItemContainer, item: ItemId) {
        if !self.state.attached {
            log::warn!("start_drag ignored: controller is not attached");
            return;
        }
        let flags = self
            .callback
            .movement_flags(&*container, item)
            .to_absolute(container.layout_direction());
        if !flags.has_drag_flags() {
            log::error!("start_drag called for an item the policy does not allow to drag");
            return;
        }
        if !container.is_attached_child(item) {
            log::error!("start_drag called for an item that is not a child of the container");
            return;
        }
        self.velocity.reset();
        if let Some(track) = self.state.track.as_mut() {
            track.dx = 0.0;
            track.dy = 0.0;
        }
        self.select(container, Some(item), ActionState::Drag);
    }

    /// Programmatically starts swiping `item`. Same preconditions as
    /// [`Self::start_drag`], with swipe flags instead of drag flags.
    pub fn start_swipe(&mut self, container: &mut dyn ItemContainer, item: ItemId) {
        if !self.state.attached {
            log::warn!("start_swipe ignored: controller is not attached");
            return;
        }
        let flags = self
            .callback
            .movement_flags(&*container, item)
            .to_absolute(container.layout_direction());
        if !flags.has_swipe_flags() {
            log::error!("start_swipe called for an item the policy does not allow to swipe");
            return;
        }
        if !container.is_attached_child(item) {
            log::error!("start_swipe called for an item that is not a child of the container");
            return;
        }
        self.velocity.reset();
        if let Some(track) = self.state.track.as_mut() {
            track.dx = 0.0;
            track.dy = 0.0;
        }
        self.select(container, Some(item), ActionState::Swipe);
    }

    /// The host must call this when an item leaves the laid-out children
    /// (recycled, removed). Finishes any interaction or settle animation the
    /// item is part of and runs its deferred cleanup.
    pub fn on_item_detached(&mut self, container: &mut dyn ItemContainer, item: ItemId) {
        if !self.state.attached {
            return;
        }
        self.clear_overdraw_if(container, item);
        if self.state.selected == Some(item) {
            self.select(container, None, ActionState::Idle);
        } else {
            self.end_recover_animation(container, item, false);
            if let Some(pos) = self.state.pending_cleanup.iter().position(|&i| i == item) {
                self.state.pending_cleanup.remove(pos);
                self.callback.clear_view(container, item);
            }
        }
    }

    pub fn on_pointer_down(
        &mut self,
        container: &mut dyn ItemContainer,
        pointer: PointerId,
        x: f32,
        y: f32,
        time_ms: u64,
    ) {
        if !self.state.attached {
            return;
        }
        self.long_press.on_down(pointer, x, y, time_ms);
        self.velocity.reset();
        self.velocity.add_movement(time_ms, x, y);
        self.state.track = Some(PointerTrack::new(pointer, x, y));

        if self.state.selected.is_none() {
            if let Some((item, action_state, anim_x, anim_y)) =
                self.find_animation_under(&*container, x, y)
            {
                // Re-grab of a settling item: shift the gesture origin by the
                // item's in-flight offset so it stays under the finger, then
                // resume the interaction it was released from.
                if let Some(track) = self.state.track.as_mut() {
                    track.initial_x -= anim_x;
                    track.initial_y -= anim_y;
                }
                self.end_recover_animation(container, item, true);
                if let Some(pos) = self.state.pending_cleanup.iter().position(|&i| i == item) {
                    self.state.pending_cleanup.remove(pos);
                    self.callback.clear_view(container, item);
                }
                self.select(container, Some(item), action_state);
                self.update_dx_dy(x, y);
                self.apply_selected_translation(container);
            }
        }
    }

    pub fn on_pointer_move(
        &mut self,
        container: &mut dyn ItemContainer,
        pointer: PointerId,
        x: f32,
        y: f32,
        time_ms: u64,
    ) {
        if !self.state.attached {
            return;
        }
        self.long_press.on_move(pointer, x, y);
        self.velocity.add_movement(time_ms, x, y);
        let Some(tracked) = self.state.track.map(|t| t.pointer) else {
            return;
        };
        if tracked != pointer {
            return;
        }
        self.check_long_press(container, time_ms);
        self.check_select_for_swipe(container, x, y);
        if let Some(item) = self.state.selected {
            self.update_dx_dy(x, y);
            if self.state.action_state == ActionState::Drag {
                self.move_if_necessary(container, item);
                if self.scroll_if_necessary(container, time_ms) {
                    if let Some(item) = self.state.selected {
                        self.move_if_necessary(container, item);
                    }
                }
            }
            self.apply_selected_translation(container);
        }
    }

    pub fn on_pointer_up(
        &mut self,
        container: &mut dyn ItemContainer,
        pointer: PointerId,
        x: f32,
        y: f32,
        time_ms: u64,
    ) {
        if !self.state.attached {
            return;
        }
        self.long_press.on_up(pointer);
        self.velocity.add_movement(time_ms, x, y);
        if self.state.track.map(|t| t.pointer) == Some(pointer) {
            self.select(container, None, ActionState::Idle);
            self.state.track = None;
        }
    }

    /// Gesture aborted by the system; like a release but the velocity is
    /// discarded, so a committed-looking fling never dismisses.
    pub fn on_pointer_cancel(&mut self, container: &mut dyn ItemContainer, pointer: PointerId) {
        if !self.state.attached {
            return;
        }
        self.long_press.on_cancel();
        self.velocity.reset();
        if self.state.track.map(|t| t.pointer) == Some(pointer) {
            self.select(container, None, ActionState::Idle);
            self.state.track = None;
        }
    }

    /// Advances all time-driven behavior to `now_ms`: pending long presses,
    /// edge auto-scroll, settle animations, and deferred swipe dispatches.
    ///
    /// Returns `true` while anything still needs future frames; once it
    /// returns `false` the host may stop pulsing until the next pointer event.
    pub fn advance_frame(&mut self, container: &mut dyn ItemContainer, now_ms: u64) -> bool {
        if !self.state.attached {
            return false;
        }
        self.check_long_press(container, now_ms);

        if self.state.action_state == ActionState::Drag
            && self.state.selected.is_some()
            && self.scroll_if_necessary(container, now_ms)
        {
            if let Some(item) = self.state.selected {
                self.move_if_necessary(container, item);
            }
            self.apply_selected_translation(container);
        }

        for anim in &mut self.state.recover_animations {
            if !anim.ended {
                anim.update(now_ms);
                container.set_translation(anim.item, Point::new(anim.x, anim.y));
            }
        }

        let mut completed: SmallVec<[(ItemId, Option<Direction>, bool); 4]> = SmallVec::new();
        for anim in &mut self.state.recover_animations {
            if !anim.ended && anim.is_time_up(now_ms) {
                anim.ended = true;
                if anim.swipe_direction.is_some() && !anim.overridden {
                    anim.pending_cleanup = true;
                }
                completed.push((anim.item, anim.swipe_direction, anim.overridden));
            }
        }
        for (item, swipe_direction, overridden) in completed {
            if overridden {
                continue;
            }
            match swipe_direction {
                None => {
                    self.clear_overdraw_if(container, item);
                    self.callback.clear_view(container, item);
                }
                Some(direction) => {
                    self.clear_overdraw_if(container, item);
                    self.state.pending_cleanup.push(item);
                    self.state.pending_swipes.push(PendingSwipe { item, direction });
                }
            }
        }

        self.dispatch_pending_swipes(container);

        self.state
            .recover_animations
            .retain(|a| !(a.ended && !a.pending_cleanup));

        let animations_running = self.state.recover_animations.iter().any(|a| !a.ended);
        let auto_scrolling = self.state.action_state == ActionState::Drag
            && self.state.selected.is_some()
            && self.state.drag_scroll_start_ms.is_some();
        animations_running
            || auto_scrolling
            || !self.state.pending_swipes.is_empty()
            || self.long_press.is_armed()
    }

    fn dispatch_pending_swipes(&mut self, container: &mut dyn ItemContainer) {
        let mut index = 0;
        while index < self.state.pending_swipes.len() {
            let pending = self.state.pending_swipes[index];
            if container.adapter_position(pending.item).is_none() {
                // item already gone from the data; nothing left to report
                self.state.pending_swipes.remove(index);
                continue;
            }
            let recover_running = self.state.recover_animations.iter().any(|a| !a.ended);
            if container.has_running_item_animation() || recover_running {
                // retry on a later frame
                index += 1;
                continue;
            }
            self.state.pending_swipes.remove(index);
            self.callback
                .on_swiped(container, pending.item, pending.direction);
        }
    }

    /// Core selection transition. `item == None` with `Idle` deselects; a
    /// deselected item that is still attached gets a settle animation.
    fn select(
        &mut self,
        container: &mut dyn ItemContainer,
        item: Option<ItemId>,
        action_state: ActionState,
    ) {
        if item == self.state.selected && action_state == self.state.action_state {
            return;
        }
        self.state.drag_scroll_start_ms = None;
        let prev_action_state = self.state.action_state;
        if let Some(item) = item {
            // no duplicate animations for the item we are about to grab
            self.end_recover_animation(container, item, true);
        }
        self.state.action_state = action_state;

        let mut prevent_layout = false;
        if let Some(prev) = self.state.selected.take() {
            if container.is_attached_child(prev) {
                let swipe_direction = if prev_action_state == ActionState::Swipe {
                    self.swipe_if_necessary(&*container, prev)
                } else {
                    None
                };
                self.velocity.reset();
                let size = container.size();
                let (target_dx, target_dy) = match swipe_direction
                    .map(|d| d.resolve_relative(container.layout_direction()))
                {
                    Some(Direction::Left) => (-size.width, 0.0),
                    Some(Direction::Right) => (size.width, 0.0),
                    Some(Direction::Up) => (0.0, -size.height),
                    Some(Direction::Down) => (0.0, size.height),
                    _ => (0.0, 0.0),
                };
                let category = if prev_action_state == ActionState::Drag {
                    AnimationCategory::Drag
                } else if swipe_direction.is_some() {
                    AnimationCategory::SwipeSuccess
                } else {
                    AnimationCategory::SwipeCancel
                };
                let (current_dx, current_dy) = self.selected_offsets(&*container, prev);
                let duration = self.callback.animation_duration(
                    &*container,
                    category,
                    target_dx - current_dx,
                    target_dy - current_dy,
                );
                self.state.recover_animations.push(RecoverAnimation::new(
                    prev,
                    category,
                    prev_action_state,
                    swipe_direction,
                    current_dx,
                    current_dy,
                    target_dx,
                    target_dy,
                    duration,
                ));
                prevent_layout = true;
            } else {
                self.clear_overdraw_if(container, prev);
                self.callback.clear_view(container, prev);
            }
        }

        if let Some(item) = item {
            self.state.selected_flags = self
                .callback
                .movement_flags(&*container, item)
                .to_absolute(container.layout_direction())
                .flags_for(action_state);
            let bounds = container.item_bounds(item).unwrap_or_default();
            self.state.selected_start_x = bounds.left();
            self.state.selected_start_y = bounds.top();
            self.state.selected = Some(item);
            if action_state == ActionState::Drag {
                self.state.overdraw_item = Some(item);
                container.set_draw_order_override(Some(item));
                container.perform_haptic_feedback(item);
            }
        }

        container.request_disallow_intercept(self.state.selected.is_some());
        if !prevent_layout {
            container.request_relayout();
        }
        self.callback
            .on_selected_changed(container, self.state.selected, self.state.action_state);
    }

    /// Removes the item's settle animation, if any. With `overridden` the
    /// animation's completion side effects (and any queued swipe dispatch for
    /// the item) are cancelled; without, the offsets snap to their target and
    /// the completion side effects run as if the animation had played out.
    fn end_recover_animation(
        &mut self,
        container: &mut dyn ItemContainer,
        item: ItemId,
        overridden: bool,
    ) {
        for index in (0..self.state.recover_animations.len()).rev() {
            if self.state.recover_animations[index].item != item {
                continue;
            }
            let mut anim = self.state.recover_animations.remove(index);
            anim.overridden |= overridden;
            let cut_short = !anim.ended;
            if cut_short {
                anim.finish();
            }
            if overridden {
                self.state.pending_swipes.retain(|p| p.item != item);
                return;
            }
            if cut_short {
                self.clear_overdraw_if(container, item);
                match anim.swipe_direction {
                    None => self.callback.clear_view(container, item),
                    Some(direction) => {
                        self.state.pending_cleanup.push(item);
                        self.state
                            .pending_swipes
                            .push(PendingSwipe { item, direction });
                    }
                }
            }
            return;
        }
    }

    fn check_long_press(&mut self, container: &mut dyn ItemContainer, now_ms: u64) {
        let Some(press) = self.long_press.poll(now_ms) else {
            return;
        };
        if self.state.selected.is_some() {
            return;
        }
        if !self.callback.is_long_press_drag_enabled() {
            return;
        }
        let Some(track) = self.state.track else {
            return;
        };
        if track.pointer != press.pointer {
            return;
        }
        let Some(item) = self.find_item_under(&*container, press.x, press.y) else {
            return;
        };
        let flags = self
            .callback
            .movement_flags(&*container, item)
            .to_absolute(container.layout_direction());
        if !flags.has_drag_flags() {
            return;
        }
        if let Some(track) = self.state.track.as_mut() {
            track.rebase(press.x, press.y);
        }
        self.select(container, Some(item), ActionState::Drag);
    }

    /// Starts a swipe once the pointer leaves slop along a swipeable axis the
    /// container itself does not scroll on.
    fn check_select_for_swipe(&mut self, container: &mut dyn ItemContainer, x: f32, y: f32) {
        if self.state.selected.is_some()
            || self.state.action_state == ActionState::Drag
            || !self.callback.is_item_view_swipe_enabled()
        {
            return;
        }
        if container.is_user_scroll_in_progress() {
            return;
        }
        let Some(track) = self.state.track else {
            return;
        };
        let dx = x - track.initial_x;
        let dy = y - track.initial_y;
        let (abs_dx, abs_dy) = (dx.abs(), dy.abs());
        if abs_dx < TOUCH_SLOP && abs_dy < TOUCH_SLOP {
            return;
        }
        // the dominant axis must not be one the container scrolls on,
        // otherwise the gesture is a list scroll
        if abs_dx > abs_dy && container.can_scroll_horizontally() {
            return;
        }
        if abs_dy > abs_dx && container.can_scroll_vertically() {
            return;
        }
        let Some(item) = self.find_item_under(&*container, x, y) else {
            return;
        };
        let flags = self
            .callback
            .movement_flags(&*container, item)
            .to_absolute(container.layout_direction())
            .flags_for(ActionState::Swipe);
        if flags.is_empty() {
            return;
        }
        if abs_dx > abs_dy {
            if !flags.allows(Direction::horizontal_from_sign(dx)) {
                return;
            }
        } else if !flags.allows(Direction::vertical_from_sign(dy)) {
            return;
        }
        if let Some(track) = self.state.track.as_mut() {
            track.dx = 0.0;
            track.dy = 0.0;
        }
        self.select(container, Some(item), ActionState::Swipe);
    }

    fn update_dx_dy(&mut self, x: f32, y: f32) {
        let flags = self.state.selected_flags;
        if let Some(track) = self.state.track.as_mut() {
            track.update(x, y, flags);
        }
    }

    fn displacement(&self) -> (f32, f32) {
        self.state
            .track
            .map(|t| (t.dx, t.dy))
            .unwrap_or((0.0, 0.0))
    }

    /// Effective render offsets for the selected item. Axes the selection's
    /// flags disallow keep whatever translation the item already has.
    fn selected_offsets(&self, container: &dyn ItemContainer, item: ItemId) -> (f32, f32) {
        let translation = container.translation(item);
        let Some(bounds) = container.item_bounds(item) else {
            return (translation.x, translation.y);
        };
        let (dx, dy) = self.displacement();
        let x = if self.state.selected_flags.allows_horizontal() {
            self.state.selected_start_x + dx - bounds.left()
        } else {
            translation.x
        };
        let y = if self.state.selected_flags.allows_vertical() {
            self.state.selected_start_y + dy - bounds.top()
        } else {
            translation.y
        };
        (x, y)
    }

    fn apply_selected_translation(&mut self, container: &mut dyn ItemContainer) {
        let Some(item) = self.state.selected else {
            return;
        };
        let (x, y) = self.selected_offsets(&*container, item);
        container.set_translation(item, Point::new(x, y));
    }

    fn clear_overdraw_if(&mut self, container: &mut dyn ItemContainer, item: ItemId) {
        if self.state.overdraw_item == Some(item) {
            self.state.overdraw_item = None;
            container.set_draw_order_override(None);
        }
    }

    /// Hit-test honoring interaction offsets: the selected item first, then
    /// settling items newest-first at their animated positions, then the
    /// host's static layout.
    fn find_item_under(&self, container: &dyn ItemContainer, x: f32, y: f32) -> Option<ItemId> {
        if let (Some(selected), Some(track)) = (self.state.selected, self.state.track) {
            if let Some(bounds) = container.item_bounds(selected) {
                let dragged = Rect::new(
                    self.state.selected_start_x + track.dx,
                    self.state.selected_start_y + track.dy,
                    bounds.width,
                    bounds.height,
                );
                if dragged.contains(x, y) {
                    return Some(selected);
                }
            }
        }
        for anim in self.state.recover_animations.iter().rev() {
            if let Some(bounds) = container.item_bounds(anim.item) {
                if bounds.translate(anim.x, anim.y).contains(x, y) {
                    return Some(anim.item);
                }
            }
        }
        container.item_under(x, y)
    }

    fn find_animation_under(
        &self,
        container: &dyn ItemContainer,
        x: f32,
        y: f32,
    ) -> Option<(ItemId, ActionState, f32, f32)> {
        for anim in self.state.recover_animations.iter().rev() {
            if anim.ended {
                continue;
            }
            if let Some(bounds) = container.item_bounds(anim.item) {
                if bounds.translate(anim.x, anim.y).contains(x, y) {
                    return Some((anim.item, anim.action_state, anim.x, anim.y));
                }
            }
        }
        None
    }

    /// Decides whether the released swipe commits, and in which direction.
    /// A fast enough fling along an allowed direction commits regardless of
    /// distance; otherwise the displacement must exceed the distance
    /// threshold. Returns the direction in the policy's own vocabulary
    /// (relative if the policy used `Start`/`End`).
    fn swipe_if_necessary(&self, container: &dyn ItemContainer, item: ItemId) -> Option<Direction> {
        if self.state.action_state == ActionState::Drag {
            return None;
        }
        let original_flags = self.callback.movement_flags(container, item);
        let layout_direction = container.layout_direction();
        let absolute_flags = original_flags
            .to_absolute(layout_direction)
            .flags_for(ActionState::Swipe);
        if absolute_flags.is_empty() {
            return None;
        }
        let original_swipe = original_flags.flags_for(ActionState::Swipe);
        let (dx, dy) = self.displacement();
        let horizontal_first = dx.abs() > dy.abs();

        let report = |direction: Direction| {
            // report in relative terms when the policy asked in relative terms
            if direction.is_horizontal() && !original_swipe.allows(direction) {
                direction.to_relative(layout_direction)
            } else {
                direction
            }
        };

        if horizontal_first {
            if let Some(direction) = self.check_horizontal_swipe(container, item, absolute_flags) {
                return Some(report(direction));
            }
            if let Some(direction) = self.check_vertical_swipe(container, item, absolute_flags) {
                return Some(direction);
            }
        } else {
            if let Some(direction) = self.check_vertical_swipe(container, item, absolute_flags) {
                return Some(direction);
            }
            if let Some(direction) = self.check_horizontal_swipe(container, item, absolute_flags) {
                return Some(report(direction));
            }
        }
        None
    }

    fn check_horizontal_swipe(
        &self,
        container: &dyn ItemContainer,
        item: ItemId,
        flags: DirectionFlags,
    ) -> Option<Direction> {
        if !flags.allows_horizontal() {
            return None;
        }
        let (dx, _) = self.displacement();

        let cap = self.callback.swipe_velocity_threshold(MAX_SWIPE_VELOCITY);
        let x_velocity = self.velocity.x_velocity(cap);
        let y_velocity = self.velocity.y_velocity(cap);
        let fling_direction = Direction::horizontal_from_sign(x_velocity);
        let escape = self.callback.swipe_escape_velocity(SWIPE_ESCAPE_VELOCITY);
        if flags.allows(fling_direction)
            && fling_direction == Direction::horizontal_from_sign(dx)
            && x_velocity.abs() >= escape
            && x_velocity.abs() > y_velocity.abs()
        {
            return Some(fling_direction);
        }

        let extent = container.item_bounds(item).map(|b| b.width).unwrap_or(0.0);
        let threshold = extent * self.callback.swipe_threshold(item);
        let direction = Direction::horizontal_from_sign(dx);
        if flags.allows(direction) && dx.abs() > threshold {
            return Some(direction);
        }
        None
    }

    fn check_vertical_swipe(
        &self,
        container: &dyn ItemContainer,
        item: ItemId,
        flags: DirectionFlags,
    ) -> Option<Direction> {
        if !flags.allows_vertical() {
            return None;
        }
        let (_, dy) = self.displacement();

        let cap = self.callback.swipe_velocity_threshold(MAX_SWIPE_VELOCITY);
        let x_velocity = self.velocity.x_velocity(cap);
        let y_velocity = self.velocity.y_velocity(cap);
        let fling_direction = Direction::vertical_from_sign(y_velocity);
        let escape = self.callback.swipe_escape_velocity(SWIPE_ESCAPE_VELOCITY);
        if flags.allows(fling_direction)
            && fling_direction == Direction::vertical_from_sign(dy)
            && y_velocity.abs() >= escape
            && y_velocity.abs() > x_velocity.abs()
        {
            return Some(fling_direction);
        }

        let extent = container.item_bounds(item).map(|b| b.height).unwrap_or(0.0);
        let threshold = extent * self.callback.swipe_threshold(item);
        let direction = Direction::vertical_from_sign(dy);
        if flags.allows(direction) && dy.abs() > threshold {
            return Some(direction);
        }
        None
    }

    /// Searches for a drop target once the dragged item has moved past the
    /// move threshold, and applies the swap if the policy accepts it.
    fn move_if_necessary(&mut self, container: &mut dyn ItemContainer, item: ItemId) {
        if container.is_layout_requested() {
            return;
        }
        if self.state.action_state != ActionState::Drag {
            return;
        }
        let (dx, dy) = self.displacement();
        let x = self.state.selected_start_x + dx;
        let y = self.state.selected_start_y + dy;
        let Some(bounds) = container.item_bounds(item) else {
            return;
        };
        let threshold = self.callback.move_threshold(item);
        if (y - bounds.top()).abs() < bounds.height * threshold
            && (x - bounds.left()).abs() < bounds.width * threshold
        {
            return;
        }
        let provisional = Rect::new(x, y, bounds.width, bounds.height)
            .inflate(self.callback.bounding_box_margin());
        let targets = swap::find_swap_targets(&*container, &*self.callback, item, provisional);
        if targets.is_empty() {
            return;
        }
        let Some(target) = self
            .callback
            .choose_drop_target(&*container, item, &targets, x, y)
        else {
            return;
        };
        let Some(to_position) = container.adapter_position(target) else {
            return;
        };
        let Some(from_position) = container.adapter_position(item) else {
            return;
        };
        if self.callback.on_move(container, item, target) {
            self.callback
                .on_moved(container, item, from_position, target, to_position, x, y);
        }
    }

    /// Scrolls the container when the dragged item protrudes past a
    /// scrollable edge. Returns `true` when a scroll was performed.
    fn scroll_if_necessary(&mut self, container: &mut dyn ItemContainer, now_ms: u64) -> bool {
        let Some(item) = self.state.selected else {
            self.state.drag_scroll_start_ms = None;
            return false;
        };
        if self.state.action_state != ActionState::Drag {
            return false;
        }
        let Some(track) = self.state.track else {
            return false;
        };
        let Some(bounds) = container.item_bounds(item) else {
            return false;
        };
        let scroll_duration = self
            .state
            .drag_scroll_start_ms
            .map(|start| now_ms.saturating_sub(start))
            .unwrap_or(0);
        let insets = container.decorated_insets(item);
        let padding = container.padding();
        let size = container.size();

        let mut scroll_x = 0.0;
        let mut scroll_y = 0.0;
        if container.can_scroll_horizontally() {
            let cur_x = self.state.selected_start_x + track.dx;
            if track.dx < 0.0 {
                let left_diff = cur_x - insets.left - padding.left;
                if left_diff < 0.0 {
                    scroll_x = left_diff;
                }
            } else if track.dx > 0.0 {
                let right_diff =
                    cur_x + bounds.width + insets.right - (size.width - padding.right);
                if right_diff > 0.0 {
                    scroll_x = right_diff;
                }
            }
        }
        if container.can_scroll_vertically() {
            let cur_y = self.state.selected_start_y + track.dy;
            if track.dy < 0.0 {
                let top_diff = cur_y - insets.top - padding.top;
                if top_diff < 0.0 {
                    scroll_y = top_diff;
                }
            } else if track.dy > 0.0 {
                let bottom_diff =
                    cur_y + bounds.height + insets.bottom - (size.height - padding.bottom);
                if bottom_diff > 0.0 {
                    scroll_y = bottom_diff;
                }
            }
        }

        if scroll_x != 0.0 {
            scroll_x = self.callback.interpolate_out_of_bounds_scroll(
                bounds.width,
                scroll_x,
                size.width,
                scroll_duration,
            );
        }
        if scroll_y != 0.0 {
            scroll_y = self.callback.interpolate_out_of_bounds_scroll(
                bounds.height,
                scroll_y,
                size.height,
                scroll_duration,
            );
        }
        if scroll_x != 0.0 || scroll_y != 0.0 {
            if self.state.drag_scroll_start_ms.is_none() {
                self.state.drag_scroll_start_ms = Some(now_ms);
            }
            container.scroll_by(scroll_x, scroll_y);
            return true;
        }
        self.state.drag_scroll_start_ms = None;
        false
    }
}

#[cfg(test)]
#[path = "tests/helper_tests.rs"]
mod tests;

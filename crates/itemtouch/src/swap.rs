//! Drop-target discovery for drags.
//!
//! While an item is dragged past the move threshold, every laid-out sibling
//! whose bounds overlap the dragged item's provisional bounds is a swap
//! candidate. Candidates are kept sorted by squared center distance so the
//! drop-target chooser sees closer items first.

use crate::callback::TouchCallback;
use crate::container::{ItemContainer, ItemId};
use itemtouch_geometry::Rect;
use smallvec::SmallVec;

/// Collects swap candidates for `selected` at its provisional (dragged)
/// bounds, sorted ascending by squared center distance. Ties keep the
/// earlier-scanned candidate first.
pub fn find_swap_targets(
    container: &dyn ItemContainer,
    callback: &dyn TouchCallback,
    selected: ItemId,
    provisional: Rect,
) -> SmallVec<[ItemId; 8]> {
    let mut targets: SmallVec<[ItemId; 8]> = SmallVec::new();
    let mut distances: SmallVec<[f32; 8]> = SmallVec::new();
    for index in 0..container.child_count() {
        let Some(other) = container.child_at(index) else {
            continue;
        };
        if other == selected {
            continue;
        }
        let Some(other_bounds) = container.item_bounds(other) else {
            continue;
        };
        if !provisional.intersects(&other_bounds) {
            continue;
        }
        if !callback.can_drop_over(container, selected, other) {
            continue;
        }
        let distance = provisional.center_distance_squared(&other_bounds);
        let mut pos = 0;
        while pos < distances.len() && distance >= distances[pos] {
            pos += 1;
        }
        targets.insert(pos, other);
        distances.insert(pos, distance);
    }
    targets
}

/// Default drop-target choice: among the candidates, pick the one whose far
/// edge the dragged item has overtaken by the largest amount, considering only
/// edges that lie ahead of the drag's current direction of travel.
///
/// Returns `None` when no candidate has been meaningfully overtaken, in which
/// case no swap happens this frame.
pub fn default_choose_drop_target(
    container: &dyn ItemContainer,
    selected: ItemId,
    targets: &[ItemId],
    cur_x: f32,
    cur_y: f32,
) -> Option<ItemId> {
    let bounds = container.item_bounds(selected)?;
    let right = cur_x + bounds.width;
    let bottom = cur_y + bounds.height;
    let dx = cur_x - bounds.left();
    let dy = cur_y - bounds.top();

    let mut winner = None;
    let mut winner_score = -1.0f32;
    for &target in targets {
        let Some(target_bounds) = container.item_bounds(target) else {
            continue;
        };
        if dx > 0.0 {
            let diff = target_bounds.right() - right;
            if diff < 0.0 && target_bounds.right() > bounds.right() {
                let score = diff.abs();
                if score > winner_score {
                    winner_score = score;
                    winner = Some(target);
                }
            }
        }
        if dx < 0.0 {
            let diff = target_bounds.left() - cur_x;
            if diff > 0.0 && target_bounds.left() < bounds.left() {
                let score = diff.abs();
                if score > winner_score {
                    winner_score = score;
                    winner = Some(target);
                }
            }
        }
        if dy < 0.0 {
            let diff = target_bounds.top() - cur_y;
            if diff > 0.0 && target_bounds.top() < bounds.top() {
                let score = diff.abs();
                if score > winner_score {
                    winner_score = score;
                    winner = Some(target);
                }
            }
        }
        if dy > 0.0 {
            let diff = target_bounds.bottom() - bottom;
            if diff < 0.0 && target_bounds.bottom() > bounds.bottom() {
                let score = diff.abs();
                if score > winner_score {
                    winner_score = score;
                    winner = Some(target);
                }
            }
        }
    }
    winner
}

//! Long-press classification for drag starts.
//!
//! Wraps down/move/up tracking and answers, frame by frame, whether a
//! qualifying long press has happened at the last known pointer position.
//! Reaction is revocable: the controller flips `do_not_react_to_long_press`
//! on detach, and the flag is checked at the moment the press would fire, so a
//! press armed before teardown can never select an item afterwards.

use crate::constants::{LONG_PRESS_TIMEOUT_MS, TOUCH_SLOP};
use crate::pointer::PointerId;

/// A long press that has fired, reported at the pointer's last position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LongPress {
    pub pointer: PointerId,
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug)]
struct Press {
    pointer: PointerId,
    down_x: f32,
    down_y: f32,
    down_time_ms: u64,
    last_x: f32,
    last_y: f32,
}

/// Detects a pointer held within slop for the long-press timeout.
#[derive(Debug)]
pub struct LongPressGesture {
    press: Option<Press>,
    react_to_long_press: bool,
    timeout_ms: u64,
    slop: f32,
}

impl Default for LongPressGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl LongPressGesture {
    pub fn new() -> Self {
        Self {
            press: None,
            react_to_long_press: true,
            timeout_ms: LONG_PRESS_TIMEOUT_MS,
            slop: TOUCH_SLOP,
        }
    }

    /// Revokes long-press reaction. Any armed press is dropped and no further
    /// press will fire until [`Self::reset`].
    pub fn do_not_react_to_long_press(&mut self) {
        self.react_to_long_press = false;
        self.press = None;
    }

    /// Re-enables detection, e.g. after re-attaching to a container.
    pub fn reset(&mut self) {
        self.react_to_long_press = true;
        self.press = None;
    }

    pub fn on_down(&mut self, pointer: PointerId, x: f32, y: f32, time_ms: u64) {
        self.press = Some(Press {
            pointer,
            down_x: x,
            down_y: y,
            down_time_ms: time_ms,
            last_x: x,
            last_y: y,
        });
    }

    /// Tracks movement; drifting past slop disqualifies the press.
    pub fn on_move(&mut self, pointer: PointerId, x: f32, y: f32) {
        let Some(press) = self.press.as_mut() else {
            return;
        };
        if press.pointer != pointer {
            return;
        }
        press.last_x = x;
        press.last_y = y;
        if (x - press.down_x).abs() > self.slop || (y - press.down_y).abs() > self.slop {
            self.press = None;
        }
    }

    pub fn on_up(&mut self, pointer: PointerId) {
        if self.press.map(|p| p.pointer) == Some(pointer) {
            self.press = None;
        }
    }

    pub fn on_cancel(&mut self) {
        self.press = None;
    }

    /// True while a press is armed and may still fire; the controller keeps
    /// requesting frames as long as this holds.
    pub fn is_armed(&self) -> bool {
        self.press.is_some() && self.react_to_long_press
    }

    /// Fires at most once per press: returns the long press if the pointer has
    /// been held past the timeout and reaction has not been revoked.
    pub fn poll(&mut self, now_ms: u64) -> Option<LongPress> {
        let press = self.press?;
        if now_ms.saturating_sub(press.down_time_ms) < self.timeout_ms {
            return None;
        }
        self.press = None;
        if !self.react_to_long_press {
            return None;
        }
        Some(LongPress {
            pointer: press.pointer,
            x: press.last_x,
            y: press.last_y,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_after_timeout_at_last_position() {
        let mut gesture = LongPressGesture::new();
        gesture.on_down(7, 100.0, 100.0, 1_000);
        gesture.on_move(7, 103.0, 98.0); // within slop
        assert_eq!(gesture.poll(1_400), None);
        let press = gesture.poll(1_500).expect("long press fires");
        assert_eq!(press.pointer, 7);
        assert_eq!(press.x, 103.0);
        assert_eq!(press.y, 98.0);
        // fires only once
        assert_eq!(gesture.poll(2_000), None);
    }

    #[test]
    fn movement_past_slop_disqualifies() {
        let mut gesture = LongPressGesture::new();
        gesture.on_down(1, 100.0, 100.0, 0);
        gesture.on_move(1, 120.0, 100.0);
        assert!(!gesture.is_armed());
        assert_eq!(gesture.poll(1_000), None);
    }

    #[test]
    fn up_before_timeout_disarms() {
        let mut gesture = LongPressGesture::new();
        gesture.on_down(1, 0.0, 0.0, 0);
        gesture.on_up(1);
        assert_eq!(gesture.poll(1_000), None);
    }

    #[test]
    fn revocation_wins_even_if_press_already_qualified() {
        let mut gesture = LongPressGesture::new();
        gesture.on_down(1, 0.0, 0.0, 0);
        gesture.do_not_react_to_long_press();
        assert_eq!(gesture.poll(10_000), None);

        // and stays revoked for new presses until reset
        gesture.on_down(2, 0.0, 0.0, 20_000);
        assert_eq!(gesture.poll(30_000), None);
        gesture.reset();
        gesture.on_down(3, 0.0, 0.0, 40_000);
        assert!(gesture.poll(40_500).is_some());
    }
}

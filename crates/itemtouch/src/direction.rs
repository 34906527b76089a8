//! Movement directions and the packed per-mode direction flag word.
//!
//! The wire format follows the original ItemTouchHelper bit layout so policies
//! can be expressed (and tested) the same way: one byte of direction bits per
//! action state, three states packed into a 24-bit word. `Direction` and
//! `DirectionFlags` give those bits named, typed operations.

use crate::container::LayoutDirection;

/// Number of direction bits reserved per action state in a [`MovementFlags`]
/// word.
pub const DIRECTION_FLAG_COUNT: u32 = 8;

/// A single movement direction.
///
/// `Start`/`End` are relative to the container's reading direction and are
/// resolved to `Left`/`Right` before the controller uses them.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 1,
    Down = 1 << 1,
    Left = 1 << 2,
    Right = 1 << 3,
    Start = 1 << 4,
    End = 1 << 5,
}

impl Direction {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// The horizontal direction matching the sign of a displacement/velocity.
    pub fn horizontal_from_sign(value: f32) -> Direction {
        if value > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    }

    /// The vertical direction matching the sign of a displacement/velocity.
    pub fn vertical_from_sign(value: f32) -> Direction {
        if value > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    /// Resolves a reading-relative direction to its absolute counterpart.
    /// Absolute directions pass through unchanged.
    pub fn resolve_relative(self, layout_direction: LayoutDirection) -> Direction {
        match (self, layout_direction) {
            (Direction::Start, LayoutDirection::Ltr) => Direction::Left,
            (Direction::End, LayoutDirection::Ltr) => Direction::Right,
            (Direction::Start, LayoutDirection::Rtl) => Direction::Right,
            (Direction::End, LayoutDirection::Rtl) => Direction::Left,
            (other, _) => other,
        }
    }

    /// Replaces an absolute horizontal direction with its reading-relative
    /// counterpart. Vertical directions pass through unchanged.
    pub fn to_relative(self, layout_direction: LayoutDirection) -> Direction {
        match (self, layout_direction) {
            (Direction::Left, LayoutDirection::Ltr) => Direction::Start,
            (Direction::Right, LayoutDirection::Ltr) => Direction::End,
            (Direction::Left, LayoutDirection::Rtl) => Direction::End,
            (Direction::Right, LayoutDirection::Rtl) => Direction::Start,
            (other, _) => other,
        }
    }
}

/// Interaction mode of the controller, also the per-byte slot index inside a
/// [`MovementFlags`] word.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActionState {
    #[default]
    Idle = 0,
    Swipe = 1,
    Drag = 2,
}

/// An 8-bit set of [`Direction`] bits for one action state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DirectionFlags(u8);

impl DirectionFlags {
    pub const EMPTY: DirectionFlags = DirectionFlags(0);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn of(directions: &[Direction]) -> Self {
        let mut flags = Self::EMPTY;
        for dir in directions {
            flags = flags.with(*dir);
        }
        flags
    }

    #[must_use]
    pub fn with(self, direction: Direction) -> Self {
        Self(self.0 | direction as u8)
    }

    pub fn allows(self, direction: Direction) -> bool {
        self.0 & direction as u8 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn allows_horizontal(self) -> bool {
        self.allows(Direction::Left) || self.allows(Direction::Right)
    }

    pub fn allows_vertical(self) -> bool {
        self.allows(Direction::Up) || self.allows(Direction::Down)
    }

    /// Resolves `Start`/`End` bits into absolute `Left`/`Right` bits for the
    /// given reading direction. The relative bits are cleared in the result.
    #[must_use]
    pub fn resolve_relative(self, layout_direction: LayoutDirection) -> Self {
        let relative = self.0 & (Direction::Start as u8 | Direction::End as u8);
        if relative == 0 {
            return self;
        }
        let mut bits = self.0 & !relative;
        match layout_direction {
            LayoutDirection::Ltr => {
                // START sits two bits above LEFT, END two bits above RIGHT.
                bits |= relative >> 2;
            }
            LayoutDirection::Rtl => {
                if self.allows(Direction::Start) {
                    bits |= Direction::Right as u8;
                }
                if self.allows(Direction::End) {
                    bits |= Direction::Left as u8;
                }
            }
        }
        Self(bits)
    }
}

/// Three [`DirectionFlags`] bytes packed into one word: bits 0-7 for idle,
/// 8-15 for swipe, 16-23 for drag.
///
/// The policy answers "what can this item do in any mode" with a single word;
/// the controller unmasks the byte for the current mode when selecting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MovementFlags(u32);

impl MovementFlags {
    pub const EMPTY: MovementFlags = MovementFlags(0);

    /// Builds the standard composite word: drag directions are also allowed in
    /// idle (so a long press can begin), swipe directions likewise.
    pub fn new(drag: DirectionFlags, swipe: DirectionFlags) -> Self {
        Self::make_flag(ActionState::Idle, DirectionFlags(drag.0 | swipe.0))
            | Self::make_flag(ActionState::Swipe, swipe)
            | Self::make_flag(ActionState::Drag, drag)
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Shifts direction bits into the byte slot of the given action state.
    pub fn make_flag(action_state: ActionState, directions: DirectionFlags) -> Self {
        Self((directions.0 as u32) << (action_state as u32 * DIRECTION_FLAG_COUNT))
    }

    /// Extracts the direction byte for one action state.
    pub fn flags_for(self, action_state: ActionState) -> DirectionFlags {
        DirectionFlags(((self.0 >> (action_state as u32 * DIRECTION_FLAG_COUNT)) & 0xFF) as u8)
    }

    /// Resolves relative directions in every byte slot.
    #[must_use]
    pub fn to_absolute(self, layout_direction: LayoutDirection) -> Self {
        let mut out = MovementFlags::EMPTY;
        for state in [ActionState::Idle, ActionState::Swipe, ActionState::Drag] {
            out = out
                | Self::make_flag(state, self.flags_for(state).resolve_relative(layout_direction));
        }
        out
    }

    pub fn has_drag_flags(self) -> bool {
        !self.flags_for(ActionState::Drag).is_empty()
    }

    pub fn has_swipe_flags(self) -> bool {
        !self.flags_for(ActionState::Swipe).is_empty()
    }
}

impl std::ops::BitOr for MovementFlags {
    type Output = MovementFlags;

    fn bitor(self, rhs: MovementFlags) -> MovementFlags {
        MovementFlags(self.0 | rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packing_matches_documented_bit_layout() {
        let drag = DirectionFlags::of(&[Direction::Up, Direction::Down]);
        let swipe = DirectionFlags::of(&[Direction::Left, Direction::Right]);
        let word = MovementFlags::new(drag, swipe);
        // idle byte = UP|DOWN|LEFT|RIGHT = 0x0F, swipe byte = 0x0C, drag = 0x03
        assert_eq!(word.bits(), 0x03_0C_0F);
        assert_eq!(word.flags_for(ActionState::Idle).bits(), 0x0F);
        assert_eq!(word.flags_for(ActionState::Swipe).bits(), 0x0C);
        assert_eq!(word.flags_for(ActionState::Drag).bits(), 0x03);
    }

    #[test]
    fn relative_flags_resolve_per_layout_direction() {
        let flags = DirectionFlags::of(&[Direction::Start]);
        assert!(flags
            .resolve_relative(LayoutDirection::Ltr)
            .allows(Direction::Left));
        assert!(flags
            .resolve_relative(LayoutDirection::Rtl)
            .allows(Direction::Right));

        let flags = DirectionFlags::of(&[Direction::End]);
        assert!(flags
            .resolve_relative(LayoutDirection::Ltr)
            .allows(Direction::Right));
        assert!(flags
            .resolve_relative(LayoutDirection::Rtl)
            .allows(Direction::Left));
    }

    #[test]
    fn resolve_relative_clears_relative_bits() {
        let resolved = DirectionFlags::of(&[Direction::Start, Direction::End, Direction::Up])
            .resolve_relative(LayoutDirection::Ltr);
        assert!(!resolved.allows(Direction::Start));
        assert!(!resolved.allows(Direction::End));
        assert!(resolved.allows(Direction::Up));
        assert!(resolved.allows(Direction::Left));
        assert!(resolved.allows(Direction::Right));
    }

    #[test]
    fn to_absolute_touches_every_byte_slot() {
        let word = MovementFlags::make_flag(ActionState::Swipe, DirectionFlags::of(&[Direction::Start]))
            | MovementFlags::make_flag(ActionState::Drag, DirectionFlags::of(&[Direction::End]));
        let absolute = word.to_absolute(LayoutDirection::Ltr);
        assert!(absolute.flags_for(ActionState::Swipe).allows(Direction::Left));
        assert!(absolute.flags_for(ActionState::Drag).allows(Direction::Right));
    }

    #[test]
    fn direction_to_relative_round_trips_through_resolve() {
        for layout in [LayoutDirection::Ltr, LayoutDirection::Rtl] {
            for dir in [Direction::Left, Direction::Right] {
                let relative = dir.to_relative(layout);
                let resolved = DirectionFlags::of(&[relative]).resolve_relative(layout);
                assert!(resolved.allows(dir), "{dir:?} via {layout:?}");
            }
        }
    }

    #[test]
    fn sign_helpers_pick_the_expected_direction() {
        assert_eq!(Direction::horizontal_from_sign(5.0), Direction::Right);
        assert_eq!(Direction::horizontal_from_sign(-5.0), Direction::Left);
        assert_eq!(Direction::vertical_from_sign(5.0), Direction::Down);
        assert_eq!(Direction::vertical_from_sign(-5.0), Direction::Up);
    }
}

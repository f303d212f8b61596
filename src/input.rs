//! Keyboard mapping
//!
//! Browser key names (`KeyboardEvent.key`) are matched case-insensitively
//! against the arrow keys and WASD. Anything else is ignored.

use crate::sim::{Direction, JumpInput};

/// A recognized movement key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    Left,
    Right,
    Up,
    Down,
}

impl MoveKey {
    /// Map a key name, e.g. "ArrowLeft" or "a"
    pub fn parse(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "arrowleft" | "a" => Some(MoveKey::Left),
            "arrowright" | "d" => Some(MoveKey::Right),
            "arrowup" | "w" => Some(MoveKey::Up),
            "arrowdown" | "s" => Some(MoveKey::Down),
            _ => None,
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            MoveKey::Left => Direction::Left,
            MoveKey::Right => Direction::Right,
            MoveKey::Up => Direction::Up,
            MoveKey::Down => Direction::Down,
        }
    }
}

/// Persistent pressed/released set for the platformer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    left: bool,
    right: bool,
}

impl HeldKeys {
    /// Returns true if the key is tracked
    pub fn key_down(&mut self, key: &str) -> bool {
        self.set(key, true)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.set(key, false)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn set(&mut self, key: &str, pressed: bool) -> bool {
        match MoveKey::parse(key) {
            Some(MoveKey::Left) => self.left = pressed,
            Some(MoveKey::Right) => self.right = pressed,
            _ => return false,
        }
        true
    }

    /// Snapshot for a simulation step
    pub fn input(&self) -> JumpInput {
        JumpInput {
            left: self.left,
            right: self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys() {
        assert_eq!(MoveKey::parse("ArrowLeft"), Some(MoveKey::Left));
        assert_eq!(MoveKey::parse("A"), Some(MoveKey::Left));
        assert_eq!(MoveKey::parse("d"), Some(MoveKey::Right));
        assert_eq!(MoveKey::parse("ARROWUP"), Some(MoveKey::Up));
        assert_eq!(MoveKey::parse("s"), Some(MoveKey::Down));
        assert_eq!(MoveKey::parse("Enter"), None);
        assert_eq!(MoveKey::parse(" "), None);
    }

    #[test]
    fn test_held_keys() {
        let mut held = HeldKeys::default();
        assert!(held.key_down("ArrowLeft"));
        assert!(held.key_down("D"));
        assert_eq!(
            held.input(),
            JumpInput {
                left: true,
                right: true
            }
        );

        assert!(held.key_up("a"));
        assert_eq!(
            held.input(),
            JumpInput {
                left: false,
                right: true
            }
        );

        // Vertical and unknown keys are not tracked
        assert!(!held.key_down("w"));
        assert!(!held.key_down("Shift"));

        held.clear();
        assert_eq!(held.input(), JumpInput::default());
    }
}

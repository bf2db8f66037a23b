//! Keyboard Input Module
//!
//! Pressed-key tracking with auto-repeat suppression. The OS delivers
//! repeated keydown events while a key is held; actions like the mode toggle
//! must fire exactly once per physical press.

use std::collections::HashSet;

use winit::keyboard::KeyCode;

/// Tracks which keys are currently held down.
///
/// [`KeyTracker::press`] returns `true` only for the first down event of a
/// key; further down events are ignored until the matching
/// [`KeyTracker::release`].
#[derive(Debug, Clone, Default)]
pub struct KeyTracker {
    held: HashSet<KeyCode>,
}

impl KeyTracker {
    /// Create a tracker with no keys held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a keydown event.
    ///
    /// Returns `true` if this is a fresh press, `false` for auto-repeat.
    pub fn press(&mut self, key: KeyCode) -> bool {
        self.held.insert(key)
    }

    /// Record a keyup event.
    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    /// Whether the key is currently held down.
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Number of keys currently held.
    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    /// Forget all held keys (e.g. on focus loss).
    pub fn reset(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_press_fires() {
        let mut keys = KeyTracker::new();
        assert!(keys.press(KeyCode::Space));
        assert!(keys.is_held(KeyCode::Space));
    }

    #[test]
    fn test_auto_repeat_suppressed() {
        let mut keys = KeyTracker::new();
        assert!(keys.press(KeyCode::Space));
        // OS auto-repeat: further downs without a release
        assert!(!keys.press(KeyCode::Space));
        assert!(!keys.press(KeyCode::Space));
    }

    #[test]
    fn test_release_rearms_press() {
        let mut keys = KeyTracker::new();
        assert!(keys.press(KeyCode::Space));
        keys.release(KeyCode::Space);
        assert!(!keys.is_held(KeyCode::Space));
        assert!(keys.press(KeyCode::Space));
    }

    #[test]
    fn test_keys_tracked_independently() {
        let mut keys = KeyTracker::new();
        assert!(keys.press(KeyCode::Space));
        assert!(keys.press(KeyCode::ArrowUp));
        keys.release(KeyCode::Space);
        assert!(keys.is_held(KeyCode::ArrowUp));
        assert_eq!(keys.held_count(), 1);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut keys = KeyTracker::new();
        keys.press(KeyCode::Space);
        keys.press(KeyCode::ArrowUp);
        keys.reset();
        assert_eq!(keys.held_count(), 0);
        assert!(keys.press(KeyCode::Space));
    }
}

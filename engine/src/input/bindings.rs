//! Input Bindings Module
//!
//! Maps physical keys to the demos' logical actions, centralizing the key
//! layout instead of scattering `match` arms across the binaries.

use winit::keyboard::KeyCode;

/// Logical actions a demo binary can respond to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoAction {
    /// Toggle every box between smooth-to-home and free physics fall
    ToggleMode,
    /// Kick all boxes with an upward impulse (impulse variant only)
    Impulse,
    /// Quit the demo
    Exit,
}

/// Key bindings for the demo actions.
///
/// `DemoBindings::default()` returns the layout shared by all three demo
/// iterations: Space toggles, ArrowUp kicks, Escape quits.
#[derive(Debug, Clone)]
pub struct DemoBindings {
    pub toggle_mode: KeyCode,
    pub impulse: KeyCode,
    pub exit: KeyCode,
}

impl Default for DemoBindings {
    fn default() -> Self {
        Self {
            toggle_mode: KeyCode::Space,
            impulse: KeyCode::ArrowUp,
            exit: KeyCode::Escape,
        }
    }
}

impl DemoBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a physical key to its bound action, if any.
    pub fn classify(&self, key: KeyCode) -> Option<DemoAction> {
        if key == self.toggle_mode {
            Some(DemoAction::ToggleMode)
        } else if key == self.impulse {
            Some(DemoAction::Impulse)
        } else if key == self.exit {
            Some(DemoAction::Exit)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = DemoBindings::default();
        assert_eq!(bindings.classify(KeyCode::Space), Some(DemoAction::ToggleMode));
        assert_eq!(bindings.classify(KeyCode::ArrowUp), Some(DemoAction::Impulse));
        assert_eq!(bindings.classify(KeyCode::Escape), Some(DemoAction::Exit));
    }

    #[test]
    fn test_unbound_key() {
        let bindings = DemoBindings::default();
        assert_eq!(bindings.classify(KeyCode::KeyW), None);
    }

    #[test]
    fn test_rebinding() {
        let bindings = DemoBindings {
            toggle_mode: KeyCode::KeyT,
            ..DemoBindings::default()
        };
        assert_eq!(bindings.classify(KeyCode::KeyT), Some(DemoAction::ToggleMode));
        assert_eq!(bindings.classify(KeyCode::Space), None);
    }
}

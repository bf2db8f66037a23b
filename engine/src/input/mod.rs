//! Input Module
//!
//! Keyboard handling for the box-drop demos: a pressed-key tracker that
//! suppresses OS key auto-repeat, and the mapping from physical keys to the
//! demos' logical actions.
//!
//! # Example
//!
//! ```rust,ignore
//! use box_rain_engine::input::{DemoAction, DemoBindings, KeyTracker};
//! use winit::keyboard::KeyCode;
//!
//! let bindings = DemoBindings::default();
//! let mut keys = KeyTracker::new();
//!
//! // First down event fires, auto-repeat events do not
//! if keys.press(KeyCode::Space) {
//!     assert_eq!(bindings.classify(KeyCode::Space), Some(DemoAction::ToggleMode));
//! }
//! assert!(!keys.press(KeyCode::Space));
//! keys.release(KeyCode::Space);
//! ```

pub mod bindings;
pub mod keyboard;

// Re-export commonly used types at module level
pub use bindings::{DemoAction, DemoBindings};
pub use keyboard::KeyTracker;

//! Keyboard Actions and Shortcuts

use gpui::{KeyBinding, actions};

actions!(smite, [Quit, ToggleSidebar]);

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", Quit, None),
        // Layout
        KeyBinding::new("secondary-b", ToggleSidebar, None),
    ]
}

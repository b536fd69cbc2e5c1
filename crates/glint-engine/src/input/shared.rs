use std::cell::RefCell;
use std::rc::Rc;

use super::frame::InputFrame;
use super::state::InputState;
use super::types::{InputEvent, Key, Modifiers, MouseButton};

/// Writer side of the process-wide input state.
///
/// Exactly one `SharedInput` exists per window; the runtime owns it and is the
/// only writer. Entities receive `InputReader` handles instead.
#[derive(Debug, Default)]
pub struct SharedInput {
    state: Rc<RefCell<InputState>>,
}

impl SharedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one platform event. Must not be called while an update step is running.
    pub fn apply_event(&self, frame: &mut InputFrame, ev: InputEvent) {
        self.state.borrow_mut().apply_event(frame, ev);
    }

    /// Returns a read-only handle observing this state.
    pub fn reader(&self) -> InputReader {
        InputReader {
            state: Rc::clone(&self.state),
        }
    }
}

/// Read-only handle onto the shared input state.
///
/// Cloning is cheap; every clone observes the same live state.
#[derive(Debug, Clone)]
pub struct InputReader {
    state: Rc<RefCell<InputState>>,
}

impl InputReader {
    pub fn is_down(&self, key: Key) -> bool {
        self.state.borrow().is_down(key)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.state.borrow().is_button_down(button)
    }

    /// Pointer position in logical pixels, `None` while outside the window.
    pub fn pointer_pos(&self) -> Option<(f32, f32)> {
        self.state.borrow().pointer_pos
    }

    pub fn is_toggled(&self, key: Key) -> bool {
        self.state.borrow().is_toggled(key)
    }

    pub fn modifiers(&self) -> Modifiers {
        self.state.borrow().modifiers
    }

    pub fn focused(&self) -> bool {
        self.state.borrow().focused
    }

    /// True when both handles observe the same underlying state.
    pub fn same_source(&self, other: &InputReader) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

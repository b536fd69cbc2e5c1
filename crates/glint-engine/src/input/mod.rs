//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! `platform::winit` translates window events into `InputEvent`s; the runtime
//! applies them through the single `SharedInput` writer, and game code reads
//! level state through `InputReader` handles.

mod frame;
pub mod platform;
mod shared;
mod state;
mod types;

pub use frame::InputFrame;
pub use shared::{InputReader, SharedInput};
pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

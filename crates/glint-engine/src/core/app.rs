use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::input::InputReader;

use super::ctx::{FrameCtx, WindowCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called once the window exists. `input` observes the window's live
    /// input state; clone it into every entity that needs it.
    fn on_window_ready(&mut self, window: &WindowCtx<'_>, input: InputReader);

    /// Called for raw window events, after input state has been updated.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once per frame. All input for the frame has been applied.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}

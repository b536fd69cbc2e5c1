//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single application window, feeds
//! platform input into `SharedInput`, and drives `core::App` once per frame.

mod runtime;

pub use runtime::{Runtime, WindowConfig};

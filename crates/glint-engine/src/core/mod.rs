//! Core engine-facing contracts.
//!
//! The interface between the runtime (platform loop) and the application
//! driver. Game code sees a ready window once, then a per-frame context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};

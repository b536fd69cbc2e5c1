use anyhow::{Context, Result, anyhow};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::input::platform::winit::translate_window_event;
use crate::input::{InputFrame, InputReader, SharedInput};
use crate::time::{FrameClock, FrameTime};

/// Window configuration, fixed at creation.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "glint".to_string(),
            width: 1280,
            height: 720,
            resizable: false,
        }
    }
}

impl WindowConfig {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            ..Self::default()
        }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and drives `app` until it exits or the window closes.
    ///
    /// Errors are fatal bootstrap failures (event loop or window creation).
    pub fn run<A>(config: WindowConfig, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        if config.width == 0 || config.height == 0 {
            return Err(anyhow!(
                "invalid window size {}x{}",
                config.width,
                config.height
            ));
        }

        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: WindowConfig,
    app: A,

    window: Option<Window>,
    input: SharedInput,
    reader: InputReader,
    input_frame: InputFrame,
    clock: FrameClock,

    exit_requested: bool,
    fatal: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: WindowConfig, app: A) -> Self {
        let input = SharedInput::new();
        let reader = input.reader();
        Self {
            config,
            app,
            window: None,
            input,
            reader,
            input_frame: InputFrame::default(),
            clock: FrameClock::default(),
            exit_requested: false,
            fatal: None,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<Window> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(
                self.config.width as f64,
                self.config.height as f64,
            ))
            .with_resizable(self.config.resizable);

        event_loop
            .create_window(attrs)
            .context("failed to create window")
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match self.create_window(event_loop) {
            Ok(w) => w,
            Err(e) => {
                log::error!("failed to create initial window: {e:#}");
                self.fatal = Some(e);
                self.request_exit(event_loop);
                return;
            }
        };

        log::debug!(
            "window ready: {}x{} \"{}\"",
            self.config.width,
            self.config.height,
            self.config.title
        );

        let ctx = WindowCtx {
            id: window.id(),
            window: &window,
        };
        self.app.on_window_ready(&ctx, self.input.reader());

        self.clock.reset();
        window.request_redraw();
        self.window = Some(window);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: one simulation frame per presented frame.
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Input is applied as events arrive; frames read it only in `on_frame`,
        // so a frame never sees a half-applied batch.
        let scale_factor = self.window.as_ref().map_or(1.0, |w| w.scale_factor());
        if let Some(ev) = translate_window_event(scale_factor, &self.reader, &event) {
            self.input.apply_event(&mut self.input_frame, ev);
        }

        if self.app.on_window_event(window_id, &event) == AppControl::Exit {
            self.request_exit(event_loop);
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                log::debug!("close requested");
                self.window = None;
                self.request_exit(event_loop);
            }

            WindowEvent::RedrawRequested => {
                let Some(window) = self.window.as_ref() else {
                    return;
                };

                let time: FrameTime = self.clock.tick();
                let mut ctx = FrameCtx {
                    window: WindowCtx {
                        id: window_id,
                        window,
                    },
                    input: &self.reader,
                    input_frame: &self.input_frame,
                    time,
                };

                let control = self.app.on_frame(&mut ctx);

                // Clear per-frame deltas after the frame is consumed.
                self.input_frame.clear();

                if control == AppControl::Exit {
                    self.request_exit(event_loop);
                }
            }

            _ => {}
        }
    }
}

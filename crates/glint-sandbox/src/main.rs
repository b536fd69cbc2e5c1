use std::time::Duration;

use glint_engine::core::{App, AppControl, FrameCtx, WindowCtx};
use glint_engine::input::{InputReader, Key, MouseButton};
use glint_engine::logging::{LoggingConfig, init_logging};
use glint_engine::movement::StepMode;
use glint_engine::time::FixedStep;
use glint_engine::window::{Runtime, WindowConfig};
use glint_engine::{EntityId, MovementConfig, Player, Scene, SpatialTransform};

const TITLE: &str = "glint sandbox";
const TICK: Duration = Duration::from_millis(50);

/// Two players on one keyboard: the primary steps one unit per tick, the
/// follower glides at four units per second. `P` pauses, `Esc` quits.
/// Left click reports where the primary is; right-drag logs cursor motion.
struct Sandbox {
    scene: Scene,
    primary: Option<EntityId>,
    step: FixedStep,
    shown: Option<SpatialTransform>,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            scene: Scene::new(),
            primary: None,
            step: FixedStep::new(TICK),
            shown: None,
        }
    }
}

impl App for Sandbox {
    fn on_window_ready(&mut self, window: &WindowCtx<'_>, input: InputReader) {
        let (w, h) = window.logical_size();
        log::info!("window ready ({w}x{h}); WASD to move, Shift to run, P to pause, Esc to quit");

        let mut primary = Player::new(0.0, 0.0, 0.0);
        let mut follower = Player::new(5.0, 3.0, 2.0).with_movement(MovementConfig {
            step: 4.0,
            step_mode: StepMode::PerSecond,
            ..MovementConfig::default()
        });

        for player in [&mut primary, &mut follower] {
            if let Err(e) = player.bind_input(input.clone()) {
                log::error!("failed to bind input: {e}");
            }
        }

        self.primary = Some(self.scene.spawn(primary));
        self.scene.spawn(follower);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if ctx.input_frame.pressed(Key::Escape) {
            log::info!("escape pressed, exiting");
            return AppControl::Exit;
        }

        if ctx.input_frame.button_pressed(MouseButton::Left) {
            let at = self.primary.and_then(|id| self.scene.transform(id));
            log::info!("click at {:?}, primary at {:?}", ctx.input.pointer_pos(), at.map(|t| t.to_vec3()));
        }
        if ctx.input_frame.pointer_moved && ctx.input.is_button_down(MouseButton::Right) {
            let (dx, dy) = ctx.input_frame.pointer_delta;
            log::debug!("drag ({dx:.1}, {dy:.1})");
        }

        let ticks = self.step.advance(ctx.time.dt);
        if ctx.input.is_toggled(Key::P) {
            return AppControl::Continue;
        }

        for _ in 0..ticks {
            let report = self.scene.tick(self.step.tick_secs());
            if !report.is_clean() {
                log::debug!("{} entities skipped this tick", report.skipped.len());
            }
        }

        let current = self.primary.and_then(|id| self.scene.transform(id));
        if let Some(t) = current.filter(|t| Some(*t) != self.shown) {
            ctx.window
                .set_title(&format!("{TITLE} - ({:.1}, {:.1}, {:.1})", t.x(), t.y(), t.z()));
            for (id, pos) in self.scene.transforms() {
                log::debug!("entity {} at {:?}", id.index(), pos.to_vec3());
            }
            self.shown = Some(t);
        }

        AppControl::Continue
    }
}

fn main() {
    init_logging(LoggingConfig::default());

    let config = WindowConfig::new(TITLE, 800, 600);
    if let Err(e) = Runtime::run(config, Sandbox::new()) {
        log::error!("fatal: {e:#}");
        std::process::exit(1);
    }
}

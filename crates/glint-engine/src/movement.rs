//! Input-driven movement.
//!
//! Each update is one complete step: read the current transform and the held
//! keys, compute a displacement, commit the new transform. Directional keys
//! combine additively, one axis each:
//!
//! | direction | axis | sign |
//! |-----------|------|------|
//! | left      | x    | -    |
//! | right     | x    | +    |
//! | up        | y    | +    |
//! | down      | y    | -    |
//!
//! Opposite keys held together cancel out.

use crate::entity::Entity;
use crate::error::EntityError;
use crate::input::{InputReader, Key};
use crate::transform::SpatialTransform;

/// Keys driving the four movement directions.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyBindings {
    pub left: Key,
    pub right: Key,
    pub up: Key,
    pub down: Key,
}

impl KeyBindings {
    pub const fn wasd() -> Self {
        Self {
            left: Key::A,
            right: Key::D,
            up: Key::W,
            down: Key::S,
        }
    }

    pub const fn arrows() -> Self {
        Self {
            left: Key::ArrowLeft,
            right: Key::ArrowRight,
            up: Key::ArrowUp,
            down: Key::ArrowDown,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::wasd()
    }
}

/// How `MovementConfig::step` relates to time.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum StepMode {
    /// `step` units per update call; `dt` is ignored.
    #[default]
    PerTick,
    /// `step` units per second, scaled by `dt`.
    PerSecond,
}

/// Movement tuning for a single movable entity.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MovementConfig {
    pub bindings: KeyBindings,
    pub step: f32,
    pub step_mode: StepMode,
    /// While held, `step` is multiplied by `run_multiplier`.
    pub run_key: Option<Key>,
    pub run_multiplier: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            bindings: KeyBindings::default(),
            step: 1.0,
            step_mode: StepMode::PerTick,
            run_key: Some(Key::Shift),
            run_multiplier: 2.0,
        }
    }
}

impl MovementConfig {
    /// Displacement along `(x, y, z)` for the keys currently held.
    ///
    /// Negative or NaN `dt` counts as zero elapsed time, so time never
    /// reverses a direction.
    pub fn displacement(&self, input: &InputReader, dt: f32) -> (f32, f32, f32) {
        let b = &self.bindings;
        let axis = |neg: Key, pos: Key| -> f32 {
            let mut v = 0.0;
            if input.is_down(neg) {
                v -= 1.0;
            }
            if input.is_down(pos) {
                v += 1.0;
            }
            v
        };

        let dx = axis(b.left, b.right);
        let dy = axis(b.down, b.up);
        if dx == 0.0 && dy == 0.0 {
            return (0.0, 0.0, 0.0);
        }

        let mut step = match self.step_mode {
            StepMode::PerTick => self.step,
            StepMode::PerSecond => self.step * dt.max(0.0),
        };
        if self.run_key.is_some_and(|k| input.is_down(k)) {
            step *= self.run_multiplier;
        }

        (dx * step, dy * step, 0.0)
    }
}

/// An entity with per-frame behavior.
///
/// `update` is called at most once per simulation tick and always runs to
/// completion. On error the entity's transform is left unchanged.
pub trait Movable {
    fn entity(&self) -> &Entity;

    fn entity_mut(&mut self) -> &mut Entity;

    /// Advances one tick and returns the committed transform.
    fn update(&mut self, dt: f32) -> Result<SpatialTransform, EntityError>;

    fn transform(&self) -> SpatialTransform {
        self.entity().transform()
    }
}

/// Keyboard-driven movable entity.
#[derive(Debug, Clone, Default)]
pub struct Player {
    entity: Entity,
    movement: MovementConfig,
}

impl Player {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self::from_entity(Entity::new(x, y, z))
    }

    pub fn from_entity(entity: Entity) -> Self {
        Self {
            entity,
            movement: MovementConfig::default(),
        }
    }

    pub fn with_movement(mut self, movement: MovementConfig) -> Self {
        self.movement = movement;
        self
    }

    pub fn movement(&self) -> &MovementConfig {
        &self.movement
    }

    pub fn bind_input(&mut self, input: InputReader) -> Result<(), EntityError> {
        self.entity.bind_input(input)
    }
}

impl Movable for Player {
    fn entity(&self) -> &Entity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    fn update(&mut self, dt: f32) -> Result<SpatialTransform, EntityError> {
        let input = self.entity.input()?;
        let current = self.entity.transform();

        let (dx, dy, dz) = self.movement.displacement(input, dt);
        if dx == 0.0 && dy == 0.0 && dz == 0.0 {
            return Ok(current);
        }

        let next = current.translated(dx, dy, dz);
        self.entity.set_transform(next)?;
        log::trace!("player moved {:?} -> {:?}", current.to_vec3(), next.to_vec3());
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, InputFrame, KeyState, SharedInput};

    struct Rig {
        input: SharedInput,
        frame: InputFrame,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                input: SharedInput::new(),
                frame: InputFrame::default(),
            }
        }

        fn press(&mut self, key: Key) {
            self.input
                .apply_event(&mut self.frame, InputEvent::key(key, KeyState::Pressed));
        }

        fn release(&mut self, key: Key) {
            self.input
                .apply_event(&mut self.frame, InputEvent::key(key, KeyState::Released));
        }

        fn player(&self, x: f32, y: f32, z: f32) -> Player {
            let mut p = Player::new(x, y, z);
            p.bind_input(self.input.reader()).unwrap();
            p
        }
    }

    #[test]
    fn no_keys_leaves_transform_unchanged() {
        let rig = Rig::new();
        let mut p = rig.player(5.0, 3.0, 2.0);
        for _ in 0..3 {
            p.update(0.016).unwrap();
        }
        assert_eq!(p.transform(), SpatialTransform::new(5.0, 3.0, 2.0));
    }

    #[test]
    fn a_key_steps_negative_x_and_keeps_y_z() {
        let mut rig = Rig::new();
        let mut p = rig.player(5.0, 3.0, 2.0);
        rig.press(Key::A);

        let t = p.update(0.016).unwrap();
        assert_eq!(t, SpatialTransform::new(4.0, 3.0, 2.0));
        assert_eq!(p.transform(), t);
    }

    #[test]
    fn each_direction_moves_one_axis() {
        let cases = [
            (Key::A, SpatialTransform::new(-1.0, 0.0, 0.0)),
            (Key::D, SpatialTransform::new(1.0, 0.0, 0.0)),
            (Key::W, SpatialTransform::new(0.0, 1.0, 0.0)),
            (Key::S, SpatialTransform::new(0.0, -1.0, 0.0)),
        ];
        for (key, expected) in cases {
            let mut rig = Rig::new();
            let mut p = rig.player(0.0, 0.0, 0.0);
            rig.press(key);
            assert_eq!(p.update(0.0).unwrap(), expected, "key {key}");
        }
    }

    #[test]
    fn simultaneous_keys_combine() {
        let mut rig = Rig::new();
        let mut p = rig.player(0.0, 0.0, 0.0);
        rig.press(Key::D);
        rig.press(Key::W);
        assert_eq!(p.update(0.0).unwrap(), SpatialTransform::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut rig = Rig::new();
        let mut p = rig.player(2.0, 2.0, 2.0);
        rig.press(Key::A);
        rig.press(Key::D);
        assert_eq!(p.update(0.0).unwrap(), SpatialTransform::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn releasing_stops_movement() {
        let mut rig = Rig::new();
        let mut p = rig.player(0.0, 0.0, 0.0);
        rig.press(Key::W);
        p.update(0.0).unwrap();
        rig.release(Key::W);
        p.update(0.0).unwrap();
        assert_eq!(p.transform(), SpatialTransform::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn update_before_bind_is_an_error() {
        let mut p = Player::new(5.0, 3.0, 2.0);
        assert_eq!(p.update(0.016), Err(EntityError::UnboundInputSource));
        assert_eq!(p.transform(), SpatialTransform::new(5.0, 3.0, 2.0));
    }

    #[test]
    fn shared_input_is_seen_by_every_player() {
        let mut rig = Rig::new();
        let mut a = rig.player(0.0, 0.0, 0.0);
        let mut b = rig.player(10.0, 10.0, 10.0);

        rig.press(Key::D);
        assert_eq!(a.update(0.0).unwrap(), SpatialTransform::new(1.0, 0.0, 0.0));
        assert_eq!(b.update(0.0).unwrap(), SpatialTransform::new(11.0, 10.0, 10.0));
    }

    #[test]
    fn per_second_mode_scales_with_dt() {
        let mut rig = Rig::new();
        let movement = MovementConfig {
            step: 4.0,
            step_mode: StepMode::PerSecond,
            ..MovementConfig::default()
        };
        let mut p = rig.player(0.0, 0.0, 0.0).with_movement(movement);
        rig.press(Key::D);
        assert_eq!(p.update(0.5).unwrap(), SpatialTransform::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn negative_dt_never_reverses_direction() {
        let mut rig = Rig::new();
        let movement = MovementConfig {
            step_mode: StepMode::PerSecond,
            ..MovementConfig::default()
        };
        let mut p = rig.player(0.0, 0.0, 0.0).with_movement(movement);
        rig.press(Key::D);

        assert_eq!(p.update(-1.0).unwrap(), SpatialTransform::ORIGIN);
        assert_eq!(p.update(f32::NAN).unwrap(), SpatialTransform::ORIGIN);
        assert_eq!(p.update(1.0).unwrap(), SpatialTransform::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn run_key_multiplies_step() {
        let mut rig = Rig::new();
        let mut p = rig.player(0.0, 0.0, 0.0);
        rig.press(Key::Shift);
        rig.press(Key::S);
        assert_eq!(p.update(0.0).unwrap(), SpatialTransform::new(0.0, -2.0, 0.0));
    }

    #[test]
    fn run_key_alone_does_not_move() {
        let mut rig = Rig::new();
        let mut p = rig.player(1.0, 1.0, 1.0);
        rig.press(Key::Shift);
        assert_eq!(p.update(0.0).unwrap(), SpatialTransform::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn arrow_bindings() {
        let mut rig = Rig::new();
        let movement = MovementConfig {
            bindings: KeyBindings::arrows(),
            ..MovementConfig::default()
        };
        let mut p = rig.player(0.0, 0.0, 0.0).with_movement(movement);
        rig.press(Key::A);
        rig.press(Key::ArrowLeft);
        assert_eq!(p.update(0.0).unwrap(), SpatialTransform::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn overflowing_step_is_rejected() {
        let mut rig = Rig::new();
        let movement = MovementConfig {
            step: f32::MAX,
            ..MovementConfig::default()
        };
        let mut p = rig.player(f32::MAX, 0.0, 0.0).with_movement(movement);
        rig.press(Key::D);
        assert!(matches!(p.update(0.0), Err(EntityError::InvalidTransform { .. })));
        assert_eq!(p.transform(), SpatialTransform::new(f32::MAX, 0.0, 0.0));
    }
}

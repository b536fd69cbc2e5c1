//! Scene objects with an owned position.
//!
//! An `Entity` owns its `SpatialTransform` by value, so no entity can observe
//! or alias another entity's position. Input is an explicit dependency bound
//! once through `bind_input`.

use crate::error::EntityError;
use crate::input::InputReader;
use crate::transform::SpatialTransform;

#[derive(Debug, Clone, Default)]
pub struct Entity {
    transform: SpatialTransform,
    input: Option<InputReader>,
}

impl Entity {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self::with_transform(SpatialTransform::new(x, y, z))
    }

    pub fn at_origin() -> Self {
        Self::default()
    }

    pub fn with_transform(transform: SpatialTransform) -> Self {
        Self {
            transform,
            input: None,
        }
    }

    /// Attaches the shared input source. Rebinding is rejected.
    pub fn bind_input(&mut self, input: InputReader) -> Result<(), EntityError> {
        if self.input.is_some() {
            return Err(EntityError::InputAlreadyBound);
        }
        self.input = Some(input);
        log::debug!("entity at {:?} bound to input source", self.transform.to_vec3());
        Ok(())
    }

    pub fn is_bound(&self) -> bool {
        self.input.is_some()
    }

    pub fn input(&self) -> Result<&InputReader, EntityError> {
        self.input.as_ref().ok_or(EntityError::UnboundInputSource)
    }

    #[inline]
    pub fn transform(&self) -> SpatialTransform {
        self.transform
    }

    /// Replaces the transform. Non-finite values are rejected and the
    /// current transform is kept.
    pub fn set_transform(&mut self, transform: SpatialTransform) -> Result<(), EntityError> {
        if !transform.is_finite() {
            return Err(EntityError::InvalidTransform {
                x: transform.x(),
                y: transform.y(),
                z: transform.z(),
            });
        }
        self.transform = transform;
        Ok(())
    }
}

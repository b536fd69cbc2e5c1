//! Glint engine crate.
//!
//! Entities with owned positions, a shared keyboard input source, and the
//! winit runtime that feeds one into the other once per frame.

pub mod core;
pub mod entity;
pub mod error;
pub mod input;
pub mod logging;
pub mod movement;
pub mod scene;
pub mod time;
pub mod transform;
pub mod window;

pub use entity::Entity;
pub use error::EntityError;
pub use movement::{Movable, MovementConfig, Player};
pub use scene::{EntityId, Scene};
pub use transform::SpatialTransform;

use std::fmt;

/// Errors raised by entity operations.
///
/// All variants are per-entity and non-fatal: the entity keeps its previous
/// transform and the caller decides whether to log, skip or abort.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityError {
    /// `update` ran before an input source was bound.
    UnboundInputSource,
    /// `bind_input` was called on an entity that already has an input source.
    InputAlreadyBound,
    /// A non-finite transform was offered to `set_transform`.
    InvalidTransform { x: f32, y: f32, z: f32 },
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::UnboundInputSource => write!(f, "entity has no bound input source"),
            EntityError::InputAlreadyBound => write!(f, "entity input source is already bound"),
            EntityError::InvalidTransform { x, y, z } => {
                write!(f, "rejected non-finite transform ({x}, {y}, {z})")
            }
        }
    }
}

impl std::error::Error for EntityError {}

//! Flat list of movable entities.
//!
//! No hierarchy: entities are updated in insertion order and never reference
//! each other.

use crate::error::EntityError;
use crate::movement::Movable;
use crate::transform::SpatialTransform;

/// Stable handle to an entity in a `Scene`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct EntityId(u32);

impl EntityId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Result of one `Scene::tick`.
#[derive(Debug, Default)]
pub struct TickReport {
    pub updated: usize,
    /// Entities whose update failed this tick; their transforms are unchanged.
    pub skipped: Vec<(EntityId, EntityError)>,
}

impl TickReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

#[derive(Default)]
pub struct Scene {
    entities: Vec<Box<dyn Movable>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn<M>(&mut self, entity: M) -> EntityId
    where
        M: Movable + 'static,
    {
        let id = EntityId(self.entities.len() as u32);
        self.entities.push(Box::new(entity));
        id
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&dyn Movable> {
        self.entities.get(id.index()).map(|e| e.as_ref())
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut (dyn Movable + 'static)> {
        self.entities.get_mut(id.index()).map(|e| e.as_mut())
    }

    pub fn transform(&self, id: EntityId) -> Option<SpatialTransform> {
        self.get(id).map(|e| e.transform())
    }

    /// Current transforms, for a renderer to draw from.
    pub fn transforms(&self) -> impl Iterator<Item = (EntityId, SpatialTransform)> + '_ {
        self.entities
            .iter()
            .enumerate()
            .map(|(i, e)| (EntityId(i as u32), e.transform()))
    }

    /// Runs one update on every entity. Failures skip that entity only.
    pub fn tick(&mut self, dt: f32) -> TickReport {
        let mut report = TickReport::default();

        for (i, entity) in self.entities.iter_mut().enumerate() {
            let id = EntityId(i as u32);
            match entity.update(dt) {
                Ok(_) => report.updated += 1,
                Err(err) => {
                    log::warn!("skipping update for entity {}: {err}", id.0);
                    report.skipped.push((id, err));
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, InputFrame, Key, KeyState, SharedInput};
    use crate::movement::Player;

    #[test]
    fn tick_updates_in_order_and_skips_unbound() {
        let input = SharedInput::new();
        let mut frame = InputFrame::default();
        let mut scene = Scene::new();

        let mut bound = Player::new(0.0, 0.0, 0.0);
        bound.bind_input(input.reader()).unwrap();
        let a = scene.spawn(bound);
        let b = scene.spawn(Player::new(3.0, 3.0, 3.0));

        input.apply_event(&mut frame, InputEvent::key(Key::W, KeyState::Pressed));
        let report = scene.tick(0.016);

        assert_eq!(report.updated, 1);
        assert_eq!(report.skipped, vec![(b, EntityError::UnboundInputSource)]);
        assert!(!report.is_clean());
        assert_eq!(scene.transform(a), Some(SpatialTransform::new(0.0, 1.0, 0.0)));
        assert_eq!(scene.transform(b), Some(SpatialTransform::new(3.0, 3.0, 3.0)));
    }

    #[test]
    fn transforms_lists_every_entity() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        scene.spawn(Player::new(1.0, 0.0, 0.0));
        scene.spawn(Player::new(2.0, 0.0, 0.0));

        let xs: Vec<f32> = scene.transforms().map(|(_, t)| t.x()).collect();
        assert_eq!(xs, vec![1.0, 2.0]);
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn get_mut_allows_late_binding() {
        let input = SharedInput::new();
        let mut scene = Scene::new();
        let id = scene.spawn(Player::default());

        assert!(!scene.tick(0.0).is_clean());
        scene
            .get_mut(id)
            .unwrap()
            .entity_mut()
            .bind_input(input.reader())
            .unwrap();
        assert!(scene.tick(0.0).is_clean());
    }

    #[test]
    fn unknown_id_is_none() {
        let mut other = Scene::new();
        let id = other.spawn(Player::default());
        assert!(Scene::new().transform(id).is_none());
    }
}

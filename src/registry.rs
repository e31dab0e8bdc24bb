//! Scene registry: every drawable body grouped by kind.
//!
//! The factory registers each top-level entity it spawns; the picking
//! controller uses the registry to resolve clicked sub-meshes to their
//! owning body, and the meteor respawn path is the only mutation after
//! startup (remove-then-add, keeping the population count stable).

use bevy::prelude::*;
use std::collections::HashMap;

/// Kind bucket for a registered body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Star,
    Planet,
    Moon,
    Satellite,
    Ship,
    Asteroid,
    Comet,
    Meteor,
    Ufo,
    Station,
    Nebula,
    Wormhole,
}

/// Resource mapping every registered entity to its kind bucket.
#[derive(Resource, Default)]
pub struct SceneRegistry {
    kinds: HashMap<Entity, BodyKind>,
    buckets: HashMap<BodyKind, Vec<Entity>>,
}

impl SceneRegistry {
    /// Register an entity under a kind bucket. An entity belongs to
    /// exactly one bucket; re-registering moves it.
    pub fn register(&mut self, entity: Entity, kind: BodyKind) {
        if let Some(previous) = self.kinds.insert(entity, kind) {
            if let Some(bucket) = self.buckets.get_mut(&previous) {
                bucket.retain(|e| *e != entity);
            }
        }
        self.buckets.entry(kind).or_default().push(entity);
    }

    /// Remove an entity from the registry, returning its kind if it was
    /// registered.
    pub fn remove(&mut self, entity: Entity) -> Option<BodyKind> {
        let kind = self.kinds.remove(&entity)?;
        if let Some(bucket) = self.buckets.get_mut(&kind) {
            bucket.retain(|e| *e != entity);
        }
        Some(kind)
    }

    pub fn kind_of(&self, entity: Entity) -> Option<BodyKind> {
        self.kinds.get(&entity).copied()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.kinds.contains_key(&entity)
    }

    pub fn count(&self, kind: BodyKind) -> usize {
        self.buckets.get(&kind).map_or(0, Vec::len)
    }

    pub fn total(&self) -> usize {
        self.kinds.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_lookup() {
        let mut registry = SceneRegistry::default();
        let e = Entity::from_raw(1);
        registry.register(e, BodyKind::Planet);

        assert_eq!(registry.kind_of(e), Some(BodyKind::Planet));
        assert!(registry.contains(e));
        assert_eq!(registry.count(BodyKind::Planet), 1);
        assert_eq!(registry.count(BodyKind::Moon), 0);
    }

    #[test]
    fn remove_clears_both_maps() {
        let mut registry = SceneRegistry::default();
        let e = Entity::from_raw(7);
        registry.register(e, BodyKind::Meteor);

        assert_eq!(registry.remove(e), Some(BodyKind::Meteor));
        assert!(!registry.contains(e));
        assert_eq!(registry.count(BodyKind::Meteor), 0);
        assert_eq!(registry.remove(e), None);
    }

    #[test]
    fn reregistering_moves_between_buckets() {
        let mut registry = SceneRegistry::default();
        let e = Entity::from_raw(3);
        registry.register(e, BodyKind::Asteroid);
        registry.register(e, BodyKind::Meteor);

        assert_eq!(registry.kind_of(e), Some(BodyKind::Meteor));
        assert_eq!(registry.count(BodyKind::Asteroid), 0);
        assert_eq!(registry.count(BodyKind::Meteor), 1);
        assert_eq!(registry.total(), 1);
    }

    #[test]
    fn meteor_respawn_keeps_population_stable() {
        let mut registry = SceneRegistry::default();
        for i in 0..10 {
            registry.register(Entity::from_raw(i), BodyKind::Meteor);
        }

        // Expire and replace a few, as the respawn system does.
        for i in 0..4 {
            registry.remove(Entity::from_raw(i));
            registry.register(Entity::from_raw(100 + i), BodyKind::Meteor);
        }

        assert_eq!(registry.count(BodyKind::Meteor), 10);
    }
}

//! # Membership Index
//!
//! One `u64` per entity id recording which component types it carries.
//! This is the single source of truth for "has component" queries; the
//! world keeps it in lock-step with the component stores.

use super::component::ComponentType;
use super::entity::EntityId;

/// Flat per-entity bitmask array, indexed by entity id.
pub struct MembershipIndex {
    masks: Box<[u64]>,
}

impl MembershipIndex {
    /// Creates an index covering ids `0..max_entities`, all empty.
    #[must_use]
    pub fn new(max_entities: usize) -> Self {
        Self {
            masks: vec![0u64; max_entities].into_boxed_slice(),
        }
    }

    /// Returns the number of ids covered.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    /// Returns true if the index covers no ids.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    /// Returns the full mask of an entity (0 for out-of-range ids).
    #[inline]
    #[must_use]
    pub fn mask(&self, entity: EntityId) -> u64 {
        self.masks.get(entity.index()).copied().unwrap_or(0)
    }

    /// Checks if `entity` currently has a component of type `ty`.
    #[inline]
    #[must_use]
    pub fn has(&self, entity: EntityId, ty: ComponentType) -> bool {
        self.mask(entity) & ty.mask() != 0
    }

    /// Records that `entity` has a component of type `ty`.
    #[inline]
    pub fn set(&mut self, entity: EntityId, ty: ComponentType) {
        if let Some(mask) = self.masks.get_mut(entity.index()) {
            *mask |= ty.mask();
        }
    }

    /// Records that `entity` no longer has a component of type `ty`.
    #[inline]
    pub fn clear(&mut self, entity: EntityId, ty: ComponentType) {
        if let Some(mask) = self.masks.get_mut(entity.index()) {
            *mask &= !ty.mask();
        }
    }

    /// Resets every bit of `entity`.
    #[inline]
    pub fn clear_all(&mut self, entity: EntityId) {
        if let Some(mask) = self.masks.get_mut(entity.index()) {
            *mask = 0;
        }
    }
}

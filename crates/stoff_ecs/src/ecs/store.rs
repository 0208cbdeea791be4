//! # Component Store
//!
//! One open-addressing hash table per component type, keyed by entity id.
//!
//! The physical slot array doubles as the iteration surface:
//!
//! ```text
//! slot:      0     1     2     3     4     5 ...
//! entity:   [ 0 ] [ 12] [ 2 ] [ 0†] [ 4 ] [ 0 ]
//!                               ^ tombstone: id reset to NO_ENTITY
//! ```
//!
//! Walking `0..capacity()` and skipping slots whose id is [`NO_ENTITY`]
//! visits every live component exactly once. Capacity only ever grows, and
//! deletion never moves a record, so deleting while walking is safe.
//!
//! ## Probing
//!
//! - Home slot is `entity % capacity` (ids are small sequential integers).
//! - Linear probing, wrapping at the end of the array.
//! - A never-written slot terminates a chain; a tombstone does not.
//! - New records reuse the first tombstone seen on their chain.
//!
//! ## Growth
//!
//! Live count never exceeds 3/4 of capacity. An insert that would break that
//! first doubles the array and rehashes live records only, which drops every
//! tombstone.

use std::any::Any;
use std::mem;

use super::component::Component;
use super::entity::{EntityId, NO_ENTITY};
use crate::error::{EcsError, EcsResult};

/// Capacity a store starts with unless configured otherwise.
pub const INITIAL_CAPACITY: usize = 11;

/// Maximum ratio of live records to capacity.
pub const MAX_LOAD_FACTOR: f32 = 0.75;

// MAX_LOAD_FACTOR as an exact fraction.
const LOAD_NUMERATOR: usize = 3;
const LOAD_DENOMINATOR: usize = 4;

/// One slot of a component store.
///
/// A slot is in one of three states:
/// - live: `occupied`, id is the owning entity
/// - tombstone: not `occupied`, `tombstoned`, id is [`NO_ENTITY`]
/// - never written: neither flag, id is [`NO_ENTITY`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComponentRecord<C> {
    entity: EntityId,
    payload: C,
    occupied: bool,
    tombstoned: bool,
}

impl<C: Default> ComponentRecord<C> {
    fn vacant() -> Self {
        Self {
            entity: NO_ENTITY,
            payload: C::default(),
            occupied: false,
            tombstoned: false,
        }
    }
}

impl<C> ComponentRecord<C> {
    /// Owning entity, or [`NO_ENTITY`] for an empty slot.
    #[inline]
    #[must_use]
    pub const fn entity(&self) -> EntityId {
        self.entity
    }

    /// The payload. Empty slots hold the default value.
    #[inline]
    #[must_use]
    pub const fn payload(&self) -> &C {
        &self.payload
    }

    /// True if the slot holds a live component.
    #[inline]
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// True if the slot held a component that has since been deleted.
    #[inline]
    #[must_use]
    pub const fn is_tombstoned(&self) -> bool {
        self.tombstoned
    }

    /// True if iteration should skip this slot.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entity.is_null()
    }
}

/// Mutable view of one slot, returned by slot-indexed access.
///
/// Only the payload can be written. The owning entity and the slot state
/// belong to the store.
pub struct RecordMut<'a, C> {
    record: &'a mut ComponentRecord<C>,
}

impl<'a, C> RecordMut<'a, C> {
    /// Owning entity, or [`NO_ENTITY`] for an empty slot.
    #[inline]
    #[must_use]
    pub fn entity(&self) -> EntityId {
        self.record.entity
    }

    /// True if iteration should skip this slot.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.record.entity.is_null()
    }

    /// The payload.
    #[inline]
    #[must_use]
    pub fn payload(&self) -> &C {
        &self.record.payload
    }

    /// Mutable payload.
    #[inline]
    pub fn payload_mut(&mut self) -> &mut C {
        &mut self.record.payload
    }

    /// Converts the view into a payload borrow for the full slot lifetime.
    #[inline]
    #[must_use]
    pub fn into_payload_mut(self) -> &'a mut C {
        &mut self.record.payload
    }
}

/// Result of walking a probe chain.
enum Probe {
    /// Live record of the key.
    Found(usize),
    /// Key absent; first reusable slot on its chain.
    Vacant(usize),
    /// Key absent and every slot live.
    Full,
}

/// Open-addressing hash table mapping entity id to a component of type `C`.
///
/// # Example
///
/// ```rust
/// use stoff_ecs::{Component, ComponentStore, EntityId};
///
/// #[derive(Clone, Copy, Debug, Default, PartialEq)]
/// struct DeathTimer {
///     time_left: f32,
/// }
///
/// impl Component for DeathTimer {
///     const NAME: &'static str = "DeathTimer";
/// }
///
/// let mut timers: ComponentStore<DeathTimer> = ComponentStore::new();
/// timers.put(EntityId::new(3), DeathTimer { time_left: 1.5 }).unwrap();
///
/// for index in 0..timers.capacity() {
///     let record = timers.record_at(index).unwrap();
///     if record.is_empty() {
///         continue;
///     }
///     assert_eq!(record.entity(), EntityId::new(3));
/// }
/// ```
pub struct ComponentStore<C: Component> {
    /// Backing slot array. Its length is the capacity.
    records: Box<[ComponentRecord<C>]>,
    /// Live records.
    len: usize,
    /// Tombstoned slots not yet reclaimed.
    tombstones: usize,
    /// Incremented every time the slot array is reallocated.
    epoch: u64,
}

impl<C: Component> ComponentStore<C> {
    /// Creates a store with [`INITIAL_CAPACITY`] slots.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates a store with `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if capacity is zero.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than zero");

        Self {
            records: empty_records(capacity),
            len: 0,
            tombstones: 0,
            epoch: 0,
        }
    }

    /// Returns the number of live components.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no component is live.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length of the slot array.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.records.len()
    }

    /// Returns the number of tombstoned slots.
    #[inline]
    #[must_use]
    pub const fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// Returns the layout epoch. It changes exactly when the store grows.
    #[inline]
    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Inserts or overwrites the component of `entity`.
    ///
    /// Returns the previous payload when an existing record was overwritten.
    /// Only a genuinely new record can trigger growth.
    ///
    /// # Errors
    ///
    /// [`EcsError::InvalidEntity`] for the [`NO_ENTITY`] sentinel, which
    /// could never be found or iterated again.
    pub fn put(&mut self, entity: EntityId, payload: C) -> EcsResult<Option<C>> {
        if entity.is_null() {
            return Err(EcsError::InvalidEntity(entity));
        }

        let slot = match self.probe(entity) {
            Probe::Found(index) => {
                let previous = mem::replace(&mut self.records[index].payload, payload);
                return Ok(Some(previous));
            }
            Probe::Vacant(index)
                if (self.len + 1) * LOAD_DENOMINATOR <= self.capacity() * LOAD_NUMERATOR =>
            {
                index
            }
            Probe::Vacant(_) | Probe::Full => {
                self.grow();
                self.first_free(entity)
            }
        };

        if self.records[slot].tombstoned {
            self.tombstones -= 1;
        }
        self.records[slot] = ComponentRecord {
            entity,
            payload,
            occupied: true,
            tombstoned: false,
        };
        self.len += 1;
        Ok(None)
    }

    /// Looks up the component of `entity`.
    #[inline]
    #[must_use]
    pub fn get(&self, entity: EntityId) -> Option<&C> {
        self.find(entity).map(|index| &self.records[index].payload)
    }

    /// Looks up the component of `entity` for mutation.
    #[inline]
    pub fn get_mut(&mut self, entity: EntityId) -> Option<&mut C> {
        self.find(entity)
            .map(move |index| &mut self.records[index].payload)
    }

    /// Checks if `entity` has a live record.
    #[inline]
    #[must_use]
    pub fn contains(&self, entity: EntityId) -> bool {
        self.find(entity).is_some()
    }

    /// Deletes the component of `entity`, leaving a tombstone.
    ///
    /// Never moves other records or changes capacity. Returns the removed
    /// payload, or `None` if `entity` had no record.
    pub fn delete(&mut self, entity: EntityId) -> Option<C> {
        let index = self.find(entity)?;
        let record = &mut self.records[index];

        record.entity = NO_ENTITY;
        record.occupied = false;
        record.tombstoned = true;
        let payload = mem::take(&mut record.payload);

        self.len -= 1;
        self.tombstones += 1;
        Some(payload)
    }

    /// Direct access to slot `index` of the backing array.
    ///
    /// # Errors
    ///
    /// [`EcsError::InvalidIndex`] if `index >= capacity()`.
    #[inline]
    pub fn record_at(&self, index: usize) -> EcsResult<&ComponentRecord<C>> {
        let capacity = self.capacity();
        self.records
            .get(index)
            .ok_or(EcsError::InvalidIndex { index, capacity })
    }

    /// Mutable access to the payload in slot `index` of the backing array.
    ///
    /// # Errors
    ///
    /// [`EcsError::InvalidIndex`] if `index >= capacity()`.
    #[inline]
    pub fn record_at_mut(&mut self, index: usize) -> EcsResult<RecordMut<'_, C>> {
        let capacity = self.capacity();
        self.records
            .get_mut(index)
            .map(|record| RecordMut { record })
            .ok_or(EcsError::InvalidIndex { index, capacity })
    }

    /// Iterates over live components in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &C)> {
        self.records
            .iter()
            .filter(|record| !record.is_empty())
            .map(|record| (record.entity, &record.payload))
    }

    /// Iterates mutably over live components in slot order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut C)> {
        self.records
            .iter_mut()
            .filter(|record| !record.is_empty())
            .map(|record| (record.entity, &mut record.payload))
    }

    #[inline]
    fn home(&self, entity: EntityId) -> usize {
        entity.index() % self.capacity()
    }

    /// Probes for the live record of `entity`.
    fn find(&self, entity: EntityId) -> Option<usize> {
        if entity.is_null() {
            return None;
        }
        match self.probe(entity) {
            Probe::Found(index) => Some(index),
            Probe::Vacant(_) | Probe::Full => None,
        }
    }

    /// Walks the chain of `entity` once, remembering the first tombstone so
    /// a new record reclaims it.
    fn probe(&self, entity: EntityId) -> Probe {
        let capacity = self.capacity();
        let mut index = self.home(entity);
        let mut first_tombstone = None;

        for _ in 0..capacity {
            let record = &self.records[index];
            if record.occupied {
                if record.entity == entity {
                    return Probe::Found(index);
                }
            } else if record.tombstoned {
                first_tombstone.get_or_insert(index);
            } else {
                return Probe::Vacant(first_tombstone.unwrap_or(index));
            }
            index = (index + 1) % capacity;
        }

        first_tombstone.map_or(Probe::Full, Probe::Vacant)
    }

    /// First non-live slot on the chain of a key known to be absent.
    /// The table must have at least one non-live slot.
    fn first_free(&self, entity: EntityId) -> usize {
        let capacity = self.capacity();
        let mut index = self.home(entity);
        while self.records[index].occupied {
            index = (index + 1) % capacity;
        }
        index
    }

    /// Doubles capacity and rehashes live records. Drops all tombstones.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity * 2;
        let old = mem::replace(&mut self.records, empty_records(new_capacity));

        for record in old.iter().filter(|record| record.occupied) {
            let index = self.first_free(record.entity);
            self.records[index] = *record;
        }

        self.tombstones = 0;
        self.epoch += 1;
        tracing::trace!(
            component = C::NAME,
            old_capacity,
            new_capacity,
            live = self.len,
            "component store grew"
        );
    }
}

impl<C: Component> Default for ComponentStore<C> {
    fn default() -> Self {
        Self::new()
    }
}

fn empty_records<C: Component>(capacity: usize) -> Box<[ComponentRecord<C>]> {
    vec![ComponentRecord::vacant(); capacity].into_boxed_slice()
}

/// Type-erased view of a store, so the world can hold every store in one
/// list and delete by entity without knowing payload types.
pub(crate) trait ErasedStore {
    fn name(&self) -> &'static str;
    fn len(&self) -> usize;
    fn capacity(&self) -> usize;
    fn tombstones(&self) -> usize;
    fn contains(&self, entity: EntityId) -> bool;
    fn delete_entity(&mut self, entity: EntityId) -> bool;
    fn trace_slots(&self);
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<C: Component> ErasedStore for ComponentStore<C> {
    fn name(&self) -> &'static str {
        C::NAME
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.records.len()
    }

    fn tombstones(&self) -> usize {
        self.tombstones
    }

    fn contains(&self, entity: EntityId) -> bool {
        self.find(entity).is_some()
    }

    fn delete_entity(&mut self, entity: EntityId) -> bool {
        self.delete(entity).is_some()
    }

    fn trace_slots(&self) {
        for (slot, record) in self.records.iter().enumerate() {
            tracing::trace!(
                component = C::NAME,
                slot,
                entity = record.entity.raw(),
                occupied = record.occupied,
                tombstoned = record.tombstoned,
            );
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

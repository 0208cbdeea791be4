//! # Entity Management
//!
//! Entities are plain integer identifiers with no data of their own.
//! An entity "exists" only through its membership bits and the component
//! stores that hold its id as a key.
//!
//! Identifiers are issued sequentially from 1 and recycled in LIFO order.

use std::fmt;

use crate::error::{EcsError, EcsResult};

/// Unique identifier for an entity.
///
/// Value `0` is reserved as [`NO_ENTITY`] and is never issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct EntityId(u32);

/// The "no entity" sentinel. Empty and tombstoned store slots carry it.
pub const NO_ENTITY: EntityId = EntityId(0);

impl EntityId {
    /// Null/invalid entity ID.
    pub const NULL: Self = NO_ENTITY;

    /// Creates an entity ID from its raw value.
    #[inline]
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the id as an array index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Checks if this entity ID is the null sentinel.
    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.0 == NO_ENTITY.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues and recycles entity identifiers.
///
/// The allocator never grows past `max_entities`: ids live in
/// `[1, max_entities)`, which is exactly the index range of the membership
/// array sized by the same constant.
pub struct EntityAllocator {
    /// Next never-issued id.
    next_fresh: u32,
    /// Released ids, reused LIFO before minting fresh ones.
    recycled: Vec<EntityId>,
    /// Liveness flag per id.
    alive: Box<[bool]>,
    /// Number of currently allocated ids.
    live_count: usize,
    /// Exclusive upper bound on ids.
    max_entities: u32,
}

impl EntityAllocator {
    /// Creates an allocator that can issue ids `1..max_entities`.
    ///
    /// # Panics
    ///
    /// Panics if `max_entities < 2` (id 0 is reserved, so nothing could be issued).
    #[must_use]
    pub fn new(max_entities: u32) -> Self {
        assert!(max_entities >= 2, "max_entities must leave room for id 1");

        Self {
            next_fresh: 1,
            recycled: Vec::with_capacity(max_entities as usize),
            alive: vec![false; max_entities as usize].into_boxed_slice(),
            live_count: 0,
            max_entities,
        }
    }

    /// Returns the exclusive upper bound on ids.
    #[inline]
    #[must_use]
    pub const fn max_entities(&self) -> u32 {
        self.max_entities
    }

    /// Returns the number of ids currently allocated.
    #[inline]
    #[must_use]
    pub const fn live_count(&self) -> usize {
        self.live_count
    }

    /// Returns true if `id` is inside the issuable range `[1, max_entities)`.
    #[inline]
    #[must_use]
    pub const fn in_range(&self, id: EntityId) -> bool {
        !id.is_null() && id.0 < self.max_entities
    }

    /// Checks if an id has been issued and not yet released.
    #[inline]
    #[must_use]
    pub fn is_alive(&self, id: EntityId) -> bool {
        self.in_range(id) && self.alive[id.index()]
    }

    /// Issues an id: the most recently released one if any, else a fresh one.
    ///
    /// # Errors
    ///
    /// [`EcsError::CapacityExceeded`] when nothing is recycled and every fresh
    /// id below `max_entities` has been issued.
    pub fn create(&mut self) -> EcsResult<EntityId> {
        let id = if let Some(id) = self.recycled.pop() {
            id
        } else if self.next_fresh >= self.max_entities {
            tracing::warn!(
                max_entities = self.max_entities,
                "entity capacity exceeded, consider raising max_entities"
            );
            return Err(EcsError::CapacityExceeded {
                max_entities: self.max_entities,
            });
        } else {
            let id = EntityId(self.next_fresh);
            self.next_fresh += 1;
            id
        };

        self.alive[id.index()] = true;
        self.live_count += 1;
        Ok(id)
    }

    /// Returns `id` to the recycle stack.
    ///
    /// # Errors
    ///
    /// [`EcsError::InvalidEntity`] if `id` is not currently allocated. The
    /// recycle stack is left untouched, so a double release cannot hand the
    /// same id to two callers.
    pub fn release(&mut self, id: EntityId) -> EcsResult<()> {
        if !self.is_alive(id) {
            tracing::warn!(entity = id.raw(), "release of an entity that is not alive");
            return Err(EcsError::InvalidEntity(id));
        }

        self.alive[id.index()] = false;
        self.live_count -= 1;
        self.recycled.push(id);
        Ok(())
    }
}

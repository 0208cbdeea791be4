//! # ECS World
//!
//! The central container for entities and components, and the only code
//! path that mutates both a component store and the membership index.
//!
//! Every world owns its own allocator, membership array and stores, so any
//! number of independent worlds can coexist.

use std::marker::PhantomData;

use super::component::{Component, ComponentRegistry, ComponentType};
use super::entity::{EntityAllocator, EntityId};
use super::membership::MembershipIndex;
use super::store::{ComponentRecord, ComponentStore, ErasedStore, RecordMut};
use crate::config::EcsConfig;
use crate::error::{EcsError, EcsResult};

/// Builds a [`World`] from a config and a closed list of component types.
///
/// Component types get their membership bit in the order they are declared.
///
/// # Example
///
/// ```rust
/// use stoff_ecs::{Component, EcsConfig, World};
///
/// #[derive(Clone, Copy, Debug, Default, PartialEq)]
/// struct Position {
///     x: f32,
///     y: f32,
/// }
///
/// impl Component for Position {
///     const NAME: &'static str = "Position";
/// }
///
/// let mut world = World::builder(EcsConfig::default())
///     .component::<Position>()
///     .build()
///     .unwrap();
///
/// let player = world.create_entity().unwrap();
/// world.add_component(player, Position { x: 1.0, y: 2.0 }).unwrap();
/// assert_eq!(world.get_component::<Position>(player), Some(&Position { x: 1.0, y: 2.0 }));
/// ```
pub struct WorldBuilder {
    config: EcsConfig,
    registry: ComponentRegistry,
    stores: Vec<Box<dyn ErasedStore>>,
    /// First error hit while building; reported by `build`.
    error: Option<EcsError>,
}

impl WorldBuilder {
    /// Starts a world with the given sizing.
    #[must_use]
    pub fn new(config: EcsConfig) -> Self {
        Self {
            config,
            registry: ComponentRegistry::new(),
            stores: Vec::new(),
            error: config.validate().err(),
        }
    }

    /// Declares a component type and allocates its store.
    #[must_use]
    pub fn component<C: Component>(mut self) -> Self {
        if self.error.is_some() {
            return self;
        }

        match self.registry.register::<C>() {
            Ok(_) => self.stores.push(Box::new(ComponentStore::<C>::with_capacity(
                self.config.initial_store_capacity,
            ))),
            Err(err) => self.error = Some(err),
        }
        self
    }

    /// Finishes initialisation.
    ///
    /// # Errors
    ///
    /// The first configuration or registration error encountered:
    /// [`EcsError::InvalidConfig`], [`EcsError::DuplicateComponentType`] or
    /// [`EcsError::TooManyComponentTypes`].
    pub fn build(self) -> EcsResult<World> {
        if let Some(err) = self.error {
            return Err(err);
        }

        let max_entities = self.config.max_entities;
        tracing::info!(
            max_entities,
            component_types = self.registry.len(),
            "ECS world initialised"
        );

        Ok(World {
            allocator: EntityAllocator::new(max_entities),
            membership: MembershipIndex::new(max_entities as usize),
            registry: self.registry,
            stores: self.stores,
            config: self.config,
        })
    }
}

/// Snapshot of a store's layout, for index-based bulk iteration.
///
/// A handle stays valid across component deletion and entity destruction,
/// which never move slots. It goes stale when its store grows; every access
/// through a stale handle fails with [`EcsError::StaleBucketHandle`].
pub struct BucketHandle<C: Component> {
    ty: ComponentType,
    epoch: u64,
    capacity: usize,
    _marker: PhantomData<fn() -> C>,
}

impl<C: Component> BucketHandle<C> {
    /// Slot count of the store when the handle was taken.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// The component type this handle iterates.
    #[inline]
    #[must_use]
    pub const fn component_type(&self) -> ComponentType {
        self.ty
    }
}

impl<C: Component> Clone for BucketHandle<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Component> Copy for BucketHandle<C> {}

/// The ECS World - container for all entity and component state.
///
/// # Reference lifetimes
///
/// References returned by [`get_component`](Self::get_component),
/// [`store`](Self::store) and the iterators borrow the world, so no entity
/// can be created, destroyed or given a component while one is held. Systems
/// that need to destroy entities mid-scan walk a [`BucketHandle`] by index
/// instead, re-borrowing for each slot.
pub struct World {
    allocator: EntityAllocator,
    membership: MembershipIndex,
    registry: ComponentRegistry,
    /// One store per registered type, indexed by ordinal.
    stores: Vec<Box<dyn ErasedStore>>,
    config: EcsConfig,
}

impl World {
    /// Starts building a world.
    #[must_use]
    pub fn builder(config: EcsConfig) -> WorldBuilder {
        WorldBuilder::new(config)
    }

    /// Tears the world down, releasing every backing array.
    pub fn shutdown(self) {
        tracing::info!(
            live_entities = self.allocator.live_count(),
            component_types = self.registry.len(),
            "ECS world shut down"
        );
    }

    /// Returns the config the world was built with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &EcsConfig {
        &self.config
    }

    /// Returns the exclusive upper bound on entity ids.
    #[inline]
    #[must_use]
    pub const fn max_entities(&self) -> u32 {
        self.allocator.max_entities()
    }

    /// Returns the number of live entities.
    #[inline]
    #[must_use]
    pub const fn live_count(&self) -> usize {
        self.allocator.live_count()
    }

    /// Checks if an entity id is currently allocated.
    #[inline]
    #[must_use]
    pub fn is_alive(&self, entity: EntityId) -> bool {
        self.allocator.is_alive(entity)
    }

    // =========================================================================
    // Entities
    // =========================================================================

    /// Creates an entity with no components.
    ///
    /// # Errors
    ///
    /// [`EcsError::CapacityExceeded`] when no id is available.
    pub fn create_entity(&mut self) -> EcsResult<EntityId> {
        let entity = self.allocator.create()?;
        debug_assert_eq!(self.membership.mask(entity), 0, "recycled id kept components");
        Ok(entity)
    }

    /// Removes every component of `entity` and recycles its id.
    ///
    /// # Errors
    ///
    /// [`EcsError::InvalidEntity`] if `entity` is not alive, including a
    /// second destroy of the same id before it is reissued.
    pub fn destroy_entity(&mut self, entity: EntityId) -> EcsResult<()> {
        self.check_alive(entity)?;

        let mut mask = self.membership.mask(entity);
        while mask != 0 {
            let ordinal = mask.trailing_zeros() as usize;
            if let Some(store) = self.stores.get_mut(ordinal) {
                store.delete_entity(entity);
            }
            mask &= mask - 1;
        }
        self.membership.clear_all(entity);
        debug_assert!(self.stores.iter().all(|store| !store.contains(entity)));

        self.allocator.release(entity)
    }

    // =========================================================================
    // Components
    // =========================================================================

    /// Attaches `component` to `entity`.
    ///
    /// Returns `Ok(false)` without touching anything if the entity already
    /// has a `C`; existing components are never overwritten through this path.
    ///
    /// # Errors
    ///
    /// - [`EcsError::UnregisteredComponent`] if `C` is not part of this world.
    /// - [`EcsError::InvalidEntity`] if `entity` is not alive.
    pub fn add_component<C: Component>(&mut self, entity: EntityId, component: C) -> EcsResult<bool> {
        let ty = self.registry.type_of::<C>()?;
        self.check_alive(entity)?;

        if self.membership.has(entity, ty) {
            tracing::debug!(
                entity = entity.raw(),
                component = C::NAME,
                "entity already has component, add ignored"
            );
            return Ok(false);
        }

        self.typed_mut::<C>(ty)?.put(entity, component)?;
        self.membership.set(entity, ty);
        Ok(true)
    }

    /// Detaches the `C` of `entity`, returning it. `None` if it had none.
    ///
    /// # Errors
    ///
    /// [`EcsError::UnregisteredComponent`] if `C` is not part of this world.
    pub fn remove_component<C: Component>(&mut self, entity: EntityId) -> EcsResult<Option<C>> {
        let ty = self.registry.type_of::<C>()?;
        if !self.membership.has(entity, ty) {
            return Ok(None);
        }

        let removed = self.typed_mut::<C>(ty)?.delete(entity);
        self.membership.clear(entity, ty);
        Ok(removed)
    }

    /// Detaches the component of type `ty` from `entity`.
    ///
    /// Returns true if a component was removed.
    pub fn remove_component_of(&mut self, entity: EntityId, ty: ComponentType) -> bool {
        if !self.membership.has(entity, ty) {
            return false;
        }
        let Some(store) = self.stores.get_mut(ty.ordinal()) else {
            return false;
        };

        store.delete_entity(entity);
        self.membership.clear(entity, ty);
        true
    }

    /// Looks up the `C` of `entity`.
    ///
    /// The membership bit is checked first, so the common "doesn't have it"
    /// case never probes the store.
    #[inline]
    #[must_use]
    pub fn get_component<C: Component>(&self, entity: EntityId) -> Option<&C> {
        let ty = self.registry.get::<C>()?;
        if !self.membership.has(entity, ty) {
            return None;
        }
        self.typed::<C>(ty).ok()?.get(entity)
    }

    /// Looks up the `C` of `entity` for in-place mutation.
    #[inline]
    pub fn get_component_mut<C: Component>(&mut self, entity: EntityId) -> Option<&mut C> {
        let ty = self.registry.get::<C>()?;
        if !self.membership.has(entity, ty) {
            return None;
        }
        self.typed_mut::<C>(ty).ok()?.get_mut(entity)
    }

    /// Checks if `entity` has a `C`. Pure membership query.
    #[inline]
    #[must_use]
    pub fn has_component<C: Component>(&self, entity: EntityId) -> bool {
        self.registry
            .get::<C>()
            .is_some_and(|ty| self.membership.has(entity, ty))
    }

    /// Checks if `entity` has a component of type `ty`.
    #[inline]
    #[must_use]
    pub fn has_component_of(&self, entity: EntityId, ty: ComponentType) -> bool {
        self.membership.has(entity, ty)
    }

    /// Returns the full membership mask of `entity`.
    #[inline]
    #[must_use]
    pub fn membership_of(&self, entity: EntityId) -> u64 {
        self.membership.mask(entity)
    }

    /// Returns the ordinal assigned to `C`, if registered.
    #[inline]
    #[must_use]
    pub fn component_type<C: Component>(&self) -> Option<ComponentType> {
        self.registry.get::<C>()
    }

    /// Iterates over the registered component types in declaration order.
    pub fn component_types(&self) -> impl Iterator<Item = ComponentType> + '_ {
        self.registry.types()
    }

    /// Returns the name `ty` was registered under.
    #[must_use]
    pub fn component_name(&self, ty: ComponentType) -> Option<&'static str> {
        self.registry.name(ty)
    }

    // =========================================================================
    // Bulk iteration
    // =========================================================================

    /// Returns the store of `C` for bulk scanning.
    ///
    /// # Errors
    ///
    /// [`EcsError::UnregisteredComponent`] if `C` is not part of this world.
    pub fn store<C: Component>(&self) -> EcsResult<&ComponentStore<C>> {
        let ty = self.registry.type_of::<C>()?;
        self.typed::<C>(ty)
    }

    /// Iterates over every live `C` with its entity.
    ///
    /// # Errors
    ///
    /// [`EcsError::UnregisteredComponent`] if `C` is not part of this world.
    pub fn iter<C: Component>(&self) -> EcsResult<impl Iterator<Item = (EntityId, &C)>> {
        Ok(self.store::<C>()?.iter())
    }

    /// Iterates mutably over every live `C` with its entity.
    ///
    /// # Errors
    ///
    /// [`EcsError::UnregisteredComponent`] if `C` is not part of this world.
    pub fn iter_mut<C: Component>(&mut self) -> EcsResult<impl Iterator<Item = (EntityId, &mut C)>> {
        let ty = self.registry.type_of::<C>()?;
        Ok(self.typed_mut::<C>(ty)?.iter_mut())
    }

    /// Takes a handle for index-based iteration over the `C` store.
    ///
    /// # Errors
    ///
    /// [`EcsError::UnregisteredComponent`] if `C` is not part of this world.
    pub fn bucket<C: Component>(&self) -> EcsResult<BucketHandle<C>> {
        let ty = self.registry.type_of::<C>()?;
        let store = self.typed::<C>(ty)?;
        Ok(BucketHandle {
            ty,
            epoch: store.epoch(),
            capacity: store.capacity(),
            _marker: PhantomData,
        })
    }

    /// Reads slot `index` of the store behind `bucket`.
    ///
    /// Callers skip records whose [`entity`](ComponentRecord::entity) is
    /// [`NO_ENTITY`](super::NO_ENTITY).
    ///
    /// # Errors
    ///
    /// - [`EcsError::StaleBucketHandle`] if the store grew since `bucket` was taken.
    /// - [`EcsError::InvalidIndex`] if `index` is outside `[0, capacity)`.
    pub fn record_at<C: Component>(
        &self,
        bucket: &BucketHandle<C>,
        index: usize,
    ) -> EcsResult<&ComponentRecord<C>> {
        let store = self.typed::<C>(bucket.ty)?;
        if store.epoch() != bucket.epoch {
            return Err(EcsError::StaleBucketHandle { component: C::NAME });
        }
        store.record_at(index)
    }

    /// Mutable variant of [`record_at`](Self::record_at). Only the payload
    /// is writable; the slot's entity and state stay under the world's control.
    ///
    /// # Errors
    ///
    /// Same as [`record_at`](Self::record_at).
    pub fn record_at_mut<C: Component>(
        &mut self,
        bucket: &BucketHandle<C>,
        index: usize,
    ) -> EcsResult<RecordMut<'_, C>> {
        let store = self.typed_mut::<C>(bucket.ty)?;
        if store.epoch() != bucket.epoch {
            return Err(EcsError::StaleBucketHandle { component: C::NAME });
        }
        store.record_at_mut(index)
    }

    // =========================================================================
    // Debug
    // =========================================================================

    /// Logs every store's size at `debug` and its slots at `trace`.
    pub fn dump_components(&self) {
        for store in &self.stores {
            tracing::debug!(
                component = store.name(),
                live = store.len(),
                capacity = store.capacity(),
                tombstones = store.tombstones(),
                "component store"
            );
            store.trace_slots();
        }
    }

    fn check_alive(&self, entity: EntityId) -> EcsResult<()> {
        if self.allocator.is_alive(entity) {
            Ok(())
        } else {
            Err(EcsError::InvalidEntity(entity))
        }
    }

    fn typed<C: Component>(&self, ty: ComponentType) -> EcsResult<&ComponentStore<C>> {
        self.stores
            .get(ty.ordinal())
            .and_then(|store| store.as_any().downcast_ref())
            .ok_or(EcsError::UnregisteredComponent(C::NAME))
    }

    fn typed_mut<C: Component>(&mut self, ty: ComponentType) -> EcsResult<&mut ComponentStore<C>> {
        self.stores
            .get_mut(ty.ordinal())
            .and_then(|store| store.as_any_mut().downcast_mut())
            .ok_or(EcsError::UnregisteredComponent(C::NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::NO_ENTITY;

    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    struct Position {
        x: f32,
        y: f32,
    }

    impl Component for Position {
        const NAME: &'static str = "Position";
    }

    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    struct Velocity {
        x: f32,
        y: f32,
    }

    impl Component for Velocity {
        const NAME: &'static str = "Velocity";
    }

    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    struct DeathTimer {
        time_left: f32,
    }

    impl Component for DeathTimer {
        const NAME: &'static str = "DeathTimer";
    }

    fn world(max_entities: u32) -> World {
        World::builder(EcsConfig::with_max_entities(max_entities))
            .component::<Position>()
            .component::<Velocity>()
            .component::<DeathTimer>()
            .build()
            .unwrap()
    }

    #[test]
    fn test_world_creation() {
        let world = world(100);
        assert_eq!(world.max_entities(), 100);
        assert_eq!(world.live_count(), 0);
        assert_eq!(world.component_types().count(), 3);
        assert_eq!(
            world.component_type::<Velocity>().map(ComponentType::mask),
            Some(0b10)
        );
    }

    #[test]
    fn test_builder_errors() {
        let err = World::builder(EcsConfig::default())
            .component::<Position>()
            .component::<Position>()
            .build()
            .err();
        assert_eq!(err, Some(EcsError::DuplicateComponentType("Position")));

        let err = World::builder(EcsConfig::with_max_entities(1))
            .component::<Position>()
            .build()
            .err();
        assert!(matches!(err, Some(EcsError::InvalidConfig(_))));
    }

    #[test]
    fn test_add_get_remove() {
        let mut world = world(100);
        let e = world.create_entity().unwrap();

        assert_eq!(world.add_component(e, Position { x: 1.0, y: 2.0 }), Ok(true));
        assert!(world.has_component::<Position>(e));
        assert!(!world.has_component::<Velocity>(e));
        assert_eq!(world.get_component::<Position>(e), Some(&Position { x: 1.0, y: 2.0 }));

        assert_eq!(
            world.remove_component::<Position>(e),
            Ok(Some(Position { x: 1.0, y: 2.0 }))
        );
        assert!(!world.has_component::<Position>(e));
        assert_eq!(world.remove_component::<Position>(e), Ok(None));
    }

    #[test]
    fn test_duplicate_add_keeps_first_payload() {
        let mut world = world(100);
        let e = world.create_entity().unwrap();

        assert_eq!(world.add_component(e, Velocity { x: 1.0, y: 0.0 }), Ok(true));
        assert_eq!(world.add_component(e, Velocity { x: 9.0, y: 9.0 }), Ok(false));
        assert_eq!(world.get_component::<Velocity>(e), Some(&Velocity { x: 1.0, y: 0.0 }));
        assert_eq!(world.store::<Velocity>().unwrap().len(), 1);
    }

    #[test]
    fn test_add_to_dead_entity_rejected() {
        let mut world = world(100);
        let e = EntityId::new(42);
        assert_eq!(
            world.add_component(e, Position::default()),
            Err(EcsError::InvalidEntity(e))
        );
        assert_eq!(
            world.add_component(NO_ENTITY, Position::default()),
            Err(EcsError::InvalidEntity(NO_ENTITY))
        );
    }

    #[test]
    fn test_destroy_clears_everything() {
        let mut world = world(100);
        let e = world.create_entity().unwrap();
        world.add_component(e, Position::default()).unwrap();
        world.add_component(e, DeathTimer { time_left: 1.0 }).unwrap();

        world.destroy_entity(e).unwrap();
        assert!(!world.is_alive(e));
        assert_eq!(world.membership_of(e), 0);
        assert!(world.store::<Position>().unwrap().is_empty());
        assert!(world.store::<DeathTimer>().unwrap().is_empty());

        assert_eq!(world.destroy_entity(e), Err(EcsError::InvalidEntity(e)));

        // The recycled id starts clean.
        let again = world.create_entity().unwrap();
        assert_eq!(again, e);
        assert!(!world.has_component::<Position>(again));
        assert!(world.get_component::<DeathTimer>(again).is_none());
    }

    #[test]
    fn test_remove_by_type_value() {
        let mut world = world(100);
        let e = world.create_entity().unwrap();
        world.add_component(e, Velocity::default()).unwrap();

        let ty = world.component_type::<Velocity>().unwrap();
        assert!(world.has_component_of(e, ty));
        assert!(world.remove_component_of(e, ty));
        assert!(!world.has_component_of(e, ty));
        assert!(!world.remove_component_of(e, ty));
        assert_eq!(world.component_name(ty), Some("Velocity"));
    }

    #[test]
    fn test_get_component_mut() {
        let mut world = world(100);
        let e = world.create_entity().unwrap();
        world.add_component(e, Position::default()).unwrap();

        if let Some(pos) = world.get_component_mut::<Position>(e) {
            pos.x = 5.0;
        }
        assert_eq!(world.get_component::<Position>(e).map(|p| p.x), Some(5.0));
    }

    #[test]
    fn test_destroy_inside_bucket_walk() {
        let mut world = world(100);
        for i in 0..10 {
            let e = world.create_entity().unwrap();
            let time_left = if i % 2 == 0 { 0.0 } else { 1.0 };
            world.add_component(e, DeathTimer { time_left }).unwrap();
            world.add_component(e, Position::default()).unwrap();
        }

        let bucket = world.bucket::<DeathTimer>().unwrap();
        for index in 0..bucket.capacity() {
            let record = world.record_at(&bucket, index).unwrap();
            let entity = record.entity();
            if entity.is_null() || record.payload().time_left > 0.0 {
                continue;
            }
            world.destroy_entity(entity).unwrap();
        }

        assert_eq!(world.live_count(), 5);
        assert_eq!(world.store::<DeathTimer>().unwrap().len(), 5);
        assert_eq!(world.store::<Position>().unwrap().len(), 5);
        // Deletion never resizes, so the handle is still good.
        assert!(world.record_at(&bucket, 0).is_ok());
    }

    #[test]
    fn test_growth_invalidates_bucket() {
        let mut world = world(100);
        let bucket = world.bucket::<Position>().unwrap();

        for _ in 0..20 {
            let e = world.create_entity().unwrap();
            world.add_component(e, Position::default()).unwrap();
        }

        assert_eq!(
            world.record_at(&bucket, 0).err(),
            Some(EcsError::StaleBucketHandle { component: "Position" })
        );

        let fresh = world.bucket::<Position>().unwrap();
        assert!(fresh.capacity() > bucket.capacity());
        assert_eq!(
            world.record_at(&fresh, fresh.capacity()).err(),
            Some(EcsError::InvalidIndex {
                index: fresh.capacity(),
                capacity: fresh.capacity(),
            })
        );
    }

    #[test]
    fn test_iter_mut_updates_payloads() {
        let mut world = world(100);
        for i in 0..4 {
            let e = world.create_entity().unwrap();
            world.add_component(e, Velocity { x: i as f32, y: 0.0 }).unwrap();
        }

        for (_, vel) in world.iter_mut::<Velocity>().unwrap() {
            vel.y = 1.0;
        }
        assert_eq!(world.iter::<Velocity>().unwrap().count(), 4);
        assert!(world.iter::<Velocity>().unwrap().all(|(_, v)| v.y == 1.0));
    }

    #[test]
    fn test_unregistered_component() {
        #[derive(Clone, Copy, Default)]
        struct Hitbox;

        impl Component for Hitbox {
            const NAME: &'static str = "Hitbox";
        }

        let mut world = world(100);
        let e = world.create_entity().unwrap();
        assert_eq!(
            world.add_component(e, Hitbox),
            Err(EcsError::UnregisteredComponent("Hitbox"))
        );
        assert!(!world.has_component::<Hitbox>(e));
        assert!(world.get_component::<Hitbox>(e).is_none());
        assert!(world.store::<Hitbox>().is_err());
    }

    #[test]
    fn test_dump_and_shutdown() {
        let mut world = world(16);
        let e = world.create_entity().unwrap();
        world.add_component(e, Position::default()).unwrap();
        world.dump_components();
        world.shutdown();
    }

    #[test]
    fn test_mutable_slot_walk_keeps_membership() {
        let mut world = world(100);
        let a = world.create_entity().unwrap();
        let b = world.create_entity().unwrap();
        world.add_component(a, Velocity { x: 1.0, y: 0.0 }).unwrap();
        world.add_component(b, Velocity { x: 2.0, y: 0.0 }).unwrap();

        let bucket = world.bucket::<Velocity>().unwrap();
        for index in 0..bucket.capacity() {
            let mut record = world.record_at_mut(&bucket, index).unwrap();
            if record.is_empty() {
                continue;
            }
            let entity = record.entity();
            record.payload_mut().y = entity.raw() as f32;
        }

        assert_eq!(world.store::<Velocity>().unwrap().len(), 2);
        assert_eq!(world.get_component::<Velocity>(a), Some(&Velocity { x: 1.0, y: 1.0 }));
        assert_eq!(world.get_component::<Velocity>(b), Some(&Velocity { x: 2.0, y: 2.0 }));
        let owners: Vec<EntityId> = world.iter::<Velocity>().unwrap().map(|(e, _)| e).collect();
        assert_eq!(owners.len(), 2);
        assert!(owners.contains(&a) && owners.contains(&b));
    }

    #[test]
    fn test_thread_local_component() {
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        struct FrameScratch {
            hits: u32,
            _local: PhantomData<*const ()>,
        }

        impl Component for FrameScratch {
            const NAME: &'static str = "FrameScratch";
        }

        let mut world = World::builder(EcsConfig::with_max_entities(8))
            .component::<FrameScratch>()
            .build()
            .unwrap();
        let e = world.create_entity().unwrap();
        let scratch = FrameScratch {
            hits: 3,
            _local: PhantomData,
        };
        world.add_component(e, scratch).unwrap();
        assert_eq!(world.get_component::<FrameScratch>(e).map(|s| s.hits), Some(3));
    }
}

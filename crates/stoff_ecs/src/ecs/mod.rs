//! # Entity Component System
//!
//! A data-oriented registry for a frame-stepped, single-threaded game loop.
//!
//! ## Design Philosophy
//!
//! - Entity ids are plain integers, recycled LIFO, with 0 reserved
//! - Each component type lives in its own open-addressing hash table
//! - A per-entity `u64` mask answers "has component" without a probe
//! - The hash table's slot array is the iteration surface; there is no
//!   separate dense array

mod component;
mod entity;
mod membership;
mod store;
mod world;

pub use component::{Component, ComponentRegistry, ComponentType, MAX_COMPONENT_TYPES};
pub use entity::{EntityAllocator, EntityId, NO_ENTITY};
pub use membership::MembershipIndex;
pub use store::{ComponentRecord, ComponentStore, RecordMut, INITIAL_CAPACITY, MAX_LOAD_FACTOR};
pub use world::{BucketHandle, World, WorldBuilder};

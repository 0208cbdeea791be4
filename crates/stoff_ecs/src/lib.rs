//! # STOFF ECS
//!
//! Entity/component storage core for the STOFF 2D engine, designed for:
//! - Create/destroy churn every frame (bullets, particles)
//! - Cheap per-type bulk iteration at 60+ Hz
//! - Stable identity: a recycled id never inherits old components
//!
//! ## Architecture Rules
//!
//! 1. **One store per component type** - strongly typed, no type tags
//! 2. **Membership first** - every component query checks a bitmask before probing
//! 3. **Capacity only grows** - deleting while iterating is always safe
//!
//! ## Example
//!
//! ```rust
//! use stoff_ecs::{Component, EcsConfig, World};
//!
//! #[derive(Clone, Copy, Debug, Default, PartialEq)]
//! struct Velocity {
//!     x: f32,
//!     y: f32,
//! }
//!
//! impl Component for Velocity {
//!     const NAME: &'static str = "Velocity";
//! }
//!
//! let mut world = World::builder(EcsConfig::default())
//!     .component::<Velocity>()
//!     .build()
//!     .unwrap();
//!
//! let bullet = world.create_entity().unwrap();
//! world.add_component(bullet, Velocity { x: 600.0, y: 0.0 }).unwrap();
//!
//! let bucket = world.bucket::<Velocity>().unwrap();
//! for index in 0..bucket.capacity() {
//!     let record = world.record_at(&bucket, index).unwrap();
//!     if record.is_empty() {
//!         continue;
//!     }
//!     assert_eq!(record.entity(), bullet);
//! }
//!
//! world.destroy_entity(bullet).unwrap();
//! world.shutdown();
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod ecs;
pub mod error;

pub use config::EcsConfig;
pub use ecs::{
    BucketHandle, Component, ComponentRecord, ComponentRegistry, ComponentStore, ComponentType,
    EntityAllocator, EntityId, MembershipIndex, RecordMut, World, WorldBuilder, INITIAL_CAPACITY,
    MAX_COMPONENT_TYPES, MAX_LOAD_FACTOR, NO_ENTITY,
};
pub use error::{EcsError, EcsResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

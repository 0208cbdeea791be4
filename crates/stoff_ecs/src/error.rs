//! # ECS Error Types
//!
//! All errors that can cross the world boundary.
//!
//! Lookup misses and duplicate adds are not errors: getters return `Option`
//! and `add_component` returns `Ok(false)`.

use thiserror::Error;

use crate::ecs::EntityId;

/// Errors that can occur in the entity/component storage core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EcsError {
    /// No recycled id is available and every fresh id has been issued.
    #[error("entity capacity exceeded: max_entities is {max_entities}")]
    CapacityExceeded {
        /// The configured maximum (exclusive upper bound on ids).
        max_entities: u32,
    },

    /// A raw slot index outside `[0, capacity)`.
    #[error("slot index {index} out of range for store of capacity {capacity}")]
    InvalidIndex {
        /// The requested index.
        index: usize,
        /// The store capacity at the time of the call.
        capacity: usize,
    },

    /// A bucket handle was used after its store grew.
    #[error("bucket handle for {component} is stale: the store was resized")]
    StaleBucketHandle {
        /// Name of the component type the handle was taken for.
        component: &'static str,
    },

    /// The entity id is the sentinel, out of range, or not allocated.
    #[error("invalid entity: {0}")]
    InvalidEntity(EntityId),

    /// The component type was never registered with this world.
    #[error("component type not registered: {0}")]
    UnregisteredComponent(&'static str),

    /// More component types than bits in the membership mask.
    #[error("too many component types: at most {max} are supported")]
    TooManyComponentTypes {
        /// The mask width.
        max: usize,
    },

    /// The same component type was registered twice.
    #[error("component type registered twice: {0}")]
    DuplicateComponentType(&'static str),

    /// Invalid configuration file or values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for ECS operations.
pub type EcsResult<T> = Result<T, EcsError>;

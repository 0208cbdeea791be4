//! # Component Types
//!
//! Components are pure data containers with no behavior. Each world knows a
//! small, closed set of them, fixed when the world is built.
//!
//! The registry hands every type a bit position in registration order, so a
//! single `u64` per entity can record which components it carries.

use std::any::TypeId;
use std::collections::HashMap;

use crate::error::{EcsError, EcsResult};

/// Number of distinct component types a world can hold (bits in a mask).
pub const MAX_COMPONENT_TYPES: usize = u64::BITS as usize;

/// Marker trait for ECS components.
///
/// Components must be:
/// - `Copy`: fixed-size, bitwise copyable payloads
/// - `Default`: empty store slots hold the default value
///
/// No thread-safety bounds: a world is owned by the single thread that runs
/// the frame loop.
///
/// # Example
///
/// ```rust
/// use stoff_ecs::Component;
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
/// ```
pub trait Component: Copy + Default + 'static {
    /// Human-readable name, used in diagnostics and errors.
    const NAME: &'static str;
}

/// Ordinal of a registered component type within one world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ComponentType(u8);

impl ComponentType {
    /// Returns the bit position assigned to this type.
    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self.0 as usize
    }

    /// Returns the membership mask, `1 << ordinal`.
    #[inline]
    #[must_use]
    pub const fn mask(self) -> u64 {
        1u64 << self.0
    }
}

/// Assigns bit positions to component types in declaration order.
#[derive(Default)]
pub struct ComponentRegistry {
    by_type: HashMap<TypeId, ComponentType>,
    names: Vec<&'static str>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `C`, assigning it the next free bit.
    ///
    /// # Errors
    ///
    /// - [`EcsError::DuplicateComponentType`] if `C` is already registered.
    /// - [`EcsError::TooManyComponentTypes`] if all 64 bits are taken.
    pub fn register<C: Component>(&mut self) -> EcsResult<ComponentType> {
        if self.by_type.contains_key(&TypeId::of::<C>()) {
            return Err(EcsError::DuplicateComponentType(C::NAME));
        }
        if self.names.len() >= MAX_COMPONENT_TYPES {
            return Err(EcsError::TooManyComponentTypes {
                max: MAX_COMPONENT_TYPES,
            });
        }

        // Bounded by MAX_COMPONENT_TYPES above, so it fits in a u8.
        let ty = ComponentType(self.names.len() as u8);
        self.by_type.insert(TypeId::of::<C>(), ty);
        self.names.push(C::NAME);
        Ok(ty)
    }

    /// Looks up the ordinal assigned to `C`.
    #[inline]
    #[must_use]
    pub fn get<C: Component>(&self) -> Option<ComponentType> {
        self.by_type.get(&TypeId::of::<C>()).copied()
    }

    /// Like [`get`](Self::get), but unregistered types are an error.
    ///
    /// # Errors
    ///
    /// [`EcsError::UnregisteredComponent`] if `C` was never registered.
    #[inline]
    pub fn type_of<C: Component>(&self) -> EcsResult<ComponentType> {
        self.get::<C>()
            .ok_or(EcsError::UnregisteredComponent(C::NAME))
    }

    /// Returns the mask of a registered type.
    #[inline]
    #[must_use]
    pub const fn mask_of(&self, ty: ComponentType) -> u64 {
        ty.mask()
    }

    /// Returns the name a type was registered under.
    #[must_use]
    pub fn name(&self, ty: ComponentType) -> Option<&'static str> {
        self.names.get(ty.ordinal()).copied()
    }

    /// Returns the number of registered types.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if nothing is registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over all registered types in declaration order.
    pub fn types(&self) -> impl Iterator<Item = ComponentType> {
        (0..self.names.len()).map(|ordinal| ComponentType(ordinal as u8))
    }

    /// Returns the type at `ordinal`, if one was registered there.
    #[must_use]
    pub fn at(&self, ordinal: usize) -> Option<ComponentType> {
        (ordinal < self.names.len()).then_some(ComponentType(ordinal as u8))
    }
}

//! Built-in type name sources

use std::any::{Any, TypeId};
use std::collections::HashMap;

use super::TypeNameSource;

/// Resolves every type to its Rust path, e.g. `my_game::hud::Label`
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeTypeNames;

impl TypeNameSource for NativeTypeNames {
    fn type_name_of<T: Any>(&self, obj: &T) -> Option<String> {
        Some(std::any::type_name_of_val(obj).to_string())
    }
}

/// Host-populated table of display names keyed by type
///
/// Lets a game expose stable names (`game.actors.Player`) that do not change
/// when modules are reorganised. Types that were never registered resolve to
/// `None` unless the native fallback is enabled.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    names: HashMap<TypeId, String>,
    native_fallback: bool,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve unregistered types through [`NativeTypeNames`]
    pub fn with_native_fallback(mut self) -> Self {
        self.native_fallback = true;
        self
    }

    /// Register `name` for `T`, returning the name it replaces
    pub fn register<T: Any>(&mut self, name: impl Into<String>) -> Option<String> {
        let name = name.into();
        tracing::trace!(
            type_name = std::any::type_name::<T>(),
            registered = %name,
            "Registering type name"
        );
        self.names.insert(TypeId::of::<T>(), name)
    }

    /// Builder form of [`register`](Self::register)
    pub fn with<T: Any>(mut self, name: impl Into<String>) -> Self {
        self.register::<T>(name);
        self
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.names.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl TypeNameSource for TypeRegistry {
    fn type_name_of<T: Any>(&self, obj: &T) -> Option<String> {
        match self.names.get(&TypeId::of::<T>()) {
            Some(name) => Some(name.clone()),
            None if self.native_fallback => NativeTypeNames.type_name_of(obj),
            None => None,
        }
    }
}

//! Registry of declared enum values.
//!
//! The registry maps each enum type to the values declared valid for it, kept
//! both in declaration order (for listings and messages) and in a hash set (for
//! validity checks). A single reader/writer lock guards the whole map:
//! declarations and clears take it exclusively, queries share it.
//!
//! ## Instances
//!
//! [`Registry::global`] is the process-wide instance used by the crate-level
//! functions, so that independent call sites can declare values without
//! passing a registry around. [`Registry::new`] builds an isolated instance,
//! for callers that inject their registry or tests that must not share state.
//!
//! ## Locking
//!
//! Every mutation is a single insert or remove, so a lock poisoned by a
//! panicking thread still guards consistent data and is recovered instead of
//! propagating the panic.

use std::{
    any::{Any, TypeId},
    collections::{HashMap, HashSet},
    fmt,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use once_cell::sync::Lazy;
#[cfg(feature = "enumdef_tracing")]
use tracing::{debug, trace};

use crate::{
    error::EnumError,
    value::{EnumType, Primitive},
};

static GLOBAL_REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// Declared values of a single enum type.
struct Group<T> {
    /// Declaration sequence, first-declared first.
    values: Vec<T>,
    /// Declaration set, same content as `values`.
    members: HashSet<T>,
}

impl<T: EnumType> Group<T> {
    fn new() -> Self {
        Self { values: Vec::new(), members: HashSet::new() }
    }

    /// Returns false if the value was already declared.
    fn insert(&mut self, value: &T) -> bool {
        if !self.members.insert(value.clone()) {
            return false;
        }
        self.values.push(value.clone());
        true
    }
}

/// Groups keyed by the `TypeId` of their enum type.
///
/// The entry stored under `TypeId::of::<T>()` is always a `Group<T>`.
#[derive(Default)]
struct Groups(HashMap<TypeId, Box<dyn Any + Send + Sync>>);

impl Groups {
    fn get<T: EnumType>(&self) -> Option<&Group<T>> {
        self.0.get(&TypeId::of::<T>()).and_then(|group| group.downcast_ref::<Group<T>>())
    }

    fn get_or_insert<T: EnumType>(&mut self) -> Option<&mut Group<T>> {
        self.0
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(Group::<T>::new()))
            .downcast_mut::<Group<T>>()
    }

    fn remove<T: EnumType>(&mut self) -> bool {
        self.0.remove(&TypeId::of::<T>()).is_some()
    }
}

/// Thread-safe registry of enum declarations.
#[derive(Default)]
pub struct Registry {
    groups: RwLock<Groups>,
}

impl Registry {
    /// Create an empty registry, independent from the global one.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry, created on first use.
    pub fn global() -> &'static Registry {
        &GLOBAL_REGISTRY
    }

    fn read(&self) -> RwLockReadGuard<'_, Groups> {
        self.groups.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Groups> {
        self.groups.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Declares `value` valid for its enum type and returns it unchanged.
    ///
    /// Declaring a value twice is a no-op: it keeps its first position in
    /// [`values_of`](Self::values_of).
    pub fn declare<T: EnumType>(&self, value: T) -> T {
        let mut groups = self.write();
        if let Some(group) = groups.get_or_insert::<T>()
            && group.insert(&value)
        {
            #[cfg(feature = "enumdef_tracing")]
            debug!("[registry] Declare {} for {}", value.repr().render(), T::type_name());
        }
        value
    }

    /// Declares every value of `values` under a single write lock.
    ///
    /// Returns the values as given, duplicates included.
    pub fn declare_all<T, I>(&self, values: I) -> Vec<T>
    where
        T: EnumType,
        I: IntoIterator<Item = T>,
    {
        // Collected before locking, the iterator may itself use the registry.
        let values: Vec<T> = values.into_iter().collect();
        if values.is_empty() {
            return values;
        }
        let mut groups = self.write();
        if let Some(group) = groups.get_or_insert::<T>() {
            for value in &values {
                if group.insert(value) {
                    #[cfg(feature = "enumdef_tracing")]
                    debug!("[registry] Declare {} for {}", value.repr().render(), T::type_name());
                }
            }
        }
        values
    }

    /// Reports whether `value` was declared for its enum type.
    pub fn is_valid<T: EnumType>(&self, value: &T) -> bool {
        self.read().get::<T>().is_some_and(|group| group.members.contains(value))
    }

    /// Checks that `value` was declared for its enum type.
    ///
    /// The error lists the allowed values in declaration order, or states that
    /// the enum type has no definition at all.
    pub fn validate<T: EnumType>(&self, value: &T) -> Result<(), EnumError> {
        let groups = self.read();
        let error = match groups.get::<T>() {
            Some(group) if group.members.contains(value) => return Ok(()),
            Some(group) => EnumError::InvalidChoice {
                type_name: T::type_name(),
                value: value.repr().render(),
                allowed: group.values.iter().map(|allowed| allowed.repr().render()).collect(),
            },
            None => EnumError::Undefined { type_name: T::type_name() },
        };
        #[cfg(feature = "enumdef_tracing")]
        trace!("[registry] Validate failed for {}: {}", T::type_name(), error);
        Err(error)
    }

    /// Declared values of `T` in declaration order.
    ///
    /// The returned vector is a copy, empty if `T` has no declaration.
    pub fn values_of<T: EnumType>(&self) -> Vec<T> {
        self.read().get::<T>().map(|group| group.values.clone()).unwrap_or_default()
    }

    /// Removes every declaration of `T`.
    pub fn clear<T: EnumType>(&self) {
        if self.write().remove::<T>() {
            #[cfg(feature = "enumdef_tracing")]
            debug!("[registry] Clear {}", T::type_name());
        }
    }

    /// Reports whether at least one value is declared for `T`.
    pub fn is_defined<T: EnumType>(&self) -> bool {
        self.read().get::<T>().is_some()
    }

    /// Number of enum types with at least one declared value.
    pub fn type_count(&self) -> usize {
        self.read().0.len()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry").field("type_count", &self.type_count()).finish()
    }
}

//! Render-scoped shared state.

use std::any::{Any, TypeId};
use std::collections::HashMap;

/// Typed state shared between directive handlers during one render.
///
/// The processor owns one scope and clears it at the start of every
/// [`process`](super::DirectiveProcessor::process) call, so nothing a handler
/// stores here survives into the next document. Each type has at most one
/// slot.
///
/// # Example
///
/// ```
/// use spdocs_renderer::directive::RenderScope;
///
/// #[derive(Default)]
/// struct Counter(usize);
///
/// let mut scope = RenderScope::new();
/// scope.get_or_default::<Counter>().0 += 1;
/// scope.get_or_default::<Counter>().0 += 1;
/// assert_eq!(scope.get::<Counter>().map(|c| c.0), Some(2));
///
/// scope.clear();
/// assert!(scope.get::<Counter>().is_none());
/// ```
#[derive(Default)]
pub struct RenderScope {
    slots: HashMap<TypeId, Box<dyn Any + Send>>,
}

impl RenderScope {
    /// Create an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a shared reference to the value of type `T`.
    #[must_use]
    pub fn get<T: Any + Send>(&self) -> Option<&T> {
        self.slots.get(&TypeId::of::<T>())?.downcast_ref::<T>()
    }

    /// Get a mutable reference to the value of type `T`.
    pub fn get_mut<T: Any + Send>(&mut self) -> Option<&mut T> {
        self.slots.get_mut(&TypeId::of::<T>())?.downcast_mut::<T>()
    }

    /// Get the value of type `T`, inserting `T::default()` first if absent.
    pub fn get_or_default<T: Any + Send + Default>(&mut self) -> &mut T {
        self.slots
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(T::default()))
            .downcast_mut::<T>()
            .expect("scope slot is keyed by its own TypeId")
    }

    /// Remove and return the value of type `T`.
    pub fn remove<T: Any + Send>(&mut self) -> Option<T> {
        self.slots
            .remove(&TypeId::of::<T>())?
            .downcast::<T>()
            .ok()
            .map(|value| *value)
    }

    /// Drop all stored values.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl std::fmt::Debug for RenderScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderScope")
            .field("slots", &self.slots.len())
            .finish()
    }
}

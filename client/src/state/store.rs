//! Access seam between controllers and wherever their state lives.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers never hold a borrow across an `.await`; they read or mutate
//! state in short synchronous closures through [`Store`]. In the browser the
//! store is an `RwSignal`, so every mutation notifies the views bound to it.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update, WithUntracked};

/// Shared, interior-mutable holder of a state model.
pub trait Store<T> {
    /// Mutate the state. `None` if the backing storage has been disposed.
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;

    /// Read the state without subscribing. `None` if disposed.
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
}

impl<T> Store<T> for RwSignal<T>
where
    T: Send + Sync + 'static,
{
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

impl<T> Store<T> for RefCell<T> {
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

impl<T, S> Store<T> for &S
where
    S: Store<T> + ?Sized,
{
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        (**self).update_with(f)
    }

    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        (**self).read_with(f)
    }
}

//! Leptos Scoped Timeouts
//!
//! Timers and window listeners whose lifetime is bound to the reactive
//! owner that created them. When the owning component is unmounted the
//! pending timeout is dropped (and therefore cleared) and listeners are
//! removed, so a callback can never run against a view that is gone.

use gloo_timers::callback::Timeout;
use leptos::ev::EventDescriptor;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Owner-scoped slot holding at most one pending handle.
///
/// Replacing or clearing drops the previous handle; disposing the owner
/// drops whatever is still held.
pub struct ScopedSlot<H: 'static> {
    slot: StoredValue<Option<H>, LocalStorage>,
}

impl<H: 'static> Clone for ScopedSlot<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: 'static> Copy for ScopedSlot<H> {}

impl<H: 'static> ScopedSlot<H> {
    pub fn new() -> Self {
        Self {
            slot: StoredValue::new_local(None),
        }
    }

    /// Hold `handle`, dropping the one held before
    pub fn replace(&self, handle: H) {
        // Slot already disposed: `handle` is dropped here
        let _ = self.slot.try_set_value(Some(handle));
    }

    /// Drop the held handle, if any
    pub fn clear(&self) {
        let _ = self.slot.try_update_value(|slot| slot.take());
    }

    pub fn is_pending(&self) -> bool {
        self.slot.try_with_value(|slot| slot.is_some()).unwrap_or(false)
    }
}

impl<H: 'static> Default for ScopedSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// A single-slot timeout owned by the current reactive scope.
///
/// Scheduling while a timeout is pending replaces it; the replaced timeout
/// never fires.
#[derive(Clone, Copy)]
pub struct ScopedTimeout {
    slot: ScopedSlot<Timeout>,
}

impl ScopedTimeout {
    /// Create an empty slot owned by the current owner
    pub fn new() -> Self {
        Self {
            slot: ScopedSlot::new(),
        }
    }

    /// Run `callback` after `millis`, cancelling whatever was pending
    pub fn schedule<F>(&self, millis: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.slot.replace(Timeout::new(millis, callback));
    }

    /// Cancel the pending timeout, if any
    pub fn cancel(&self) {
        self.slot.clear();
    }
}

impl Default for ScopedTimeout {
    fn default() -> Self {
        Self::new()
    }
}

/// Bind a window event listener that is removed when the current owner is
/// cleaned up.
pub fn bind_window_listener<E, F>(event: E, handler: F)
where
    E: EventDescriptor + 'static,
    E::EventType: JsCast,
    F: Fn(E::EventType) + 'static,
{
    let handle = window_event_listener(event, handler);
    on_cleanup(move || handle.remove());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Stand-in for a timer handle; counts how often one is dropped
    struct Handle(Rc<Cell<u32>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_replace_drops_pending_handle() {
        let owner = Owner::new();
        owner.with(|| {
            let dropped = Rc::new(Cell::new(0));
            let slot = ScopedSlot::new();
            assert!(!slot.is_pending());

            slot.replace(Handle(dropped.clone()));
            assert!(slot.is_pending());
            assert_eq!(dropped.get(), 0);

            // A second reset request supersedes the first
            slot.replace(Handle(dropped.clone()));
            assert_eq!(dropped.get(), 1);
            assert!(slot.is_pending());
        });
    }

    #[test]
    fn test_clear_drops_and_is_idempotent() {
        let owner = Owner::new();
        owner.with(|| {
            let dropped = Rc::new(Cell::new(0));
            let slot = ScopedSlot::new();

            slot.replace(Handle(dropped.clone()));
            slot.clear();
            assert_eq!(dropped.get(), 1);
            assert!(!slot.is_pending());

            slot.clear();
            assert_eq!(dropped.get(), 1);
        });
    }

    #[test]
    fn test_copies_share_one_slot() {
        let owner = Owner::new();
        owner.with(|| {
            let dropped = Rc::new(Cell::new(0));
            let slot = ScopedSlot::new();
            let copy = slot;

            slot.replace(Handle(dropped.clone()));
            copy.clear();
            assert_eq!(dropped.get(), 1);
            assert!(!slot.is_pending());
        });
    }
}

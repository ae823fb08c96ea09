//! UI Context
//!
//! Presentational open/closed flags shared between components via the
//! Leptos Context API. Data state (cart, theme) is not here: it lives in
//! the store and is passed to features explicitly.

use leptos::prelude::*;

use crate::models::ModalKind;

/// A queued notification
#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub id: u64,
    pub text: String,
}

/// Overlay flags and the toast queue
#[derive(Clone, Copy)]
pub struct UiContext {
    /// Mobile navigation open
    pub menu_open: RwSignal<bool>,
    /// Mini cart panel open
    pub cart_open: RwSignal<bool>,
    /// Legal modal content, `None` when closed
    pub modal: RwSignal<Option<ModalKind>>,
    pub toasts: RwSignal<Vec<ToastMessage>>,
    next_toast_id: StoredValue<u64>,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            menu_open: RwSignal::new(false),
            cart_open: RwSignal::new(false),
            modal: RwSignal::new(None),
            toasts: RwSignal::new(Vec::new()),
            next_toast_id: StoredValue::new(0),
        }
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn close_menu(&self) {
        if self.menu_open.get_untracked() {
            self.menu_open.set(false);
        }
    }

    pub fn toggle_cart(&self) {
        self.cart_open.update(|open| *open = !*open);
    }

    pub fn open_cart(&self) {
        self.cart_open.set(true);
    }

    pub fn close_cart(&self) {
        self.cart_open.set(false);
    }

    pub fn open_modal(&self, kind: ModalKind) {
        self.modal.set(Some(kind));
    }

    pub fn close_modal(&self) {
        if self.modal.get_untracked().is_some() {
            self.modal.set(None);
        }
    }

    /// Whether an overlay should keep the page from scrolling
    pub fn scroll_locked(&self) -> bool {
        self.menu_open.get() || self.modal.get().is_some()
    }

    /// Queue a transient notification
    pub fn notify(&self, text: impl Into<String>) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id + 1);
        let text = text.into();
        log::debug!("toast #{}: {}", id, text);
        self.toasts.update(|toasts| toasts.push(ToastMessage { id, text }));
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the UI context provided by `App`
pub fn use_ui() -> UiContext {
    expect_context::<UiContext>()
}

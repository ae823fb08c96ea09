//! Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity. The store is
//! built once in `App` and its fields are handed to the features that own
//! them; nothing reads it from an ambient global.

use reactive_stores::Store;

use crate::cart;
use crate::config::{CART_KEY, THEME_KEY};
use crate::models::{LineItem, Theme};
use crate::storage::KeyValueStore;

/// Page-session state; each field is persisted on its own
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Line items in insertion order
    pub cart: Vec<LineItem>,
    pub theme: Theme,
}

impl AppState {
    /// One-time startup load. Absent keys keep defaults; a malformed cart
    /// is logged and replaced by an empty one.
    pub fn hydrate(storage: &dyn KeyValueStore) -> Self {
        let mut state = Self::default();

        if let Some(tag) = storage.get(THEME_KEY).filter(|tag| !tag.is_empty()) {
            state.theme = Theme::from_tag(&tag);
        }

        if let Some(text) = storage.get(CART_KEY) {
            match cart::decode_cart(&text) {
                Ok(items) => state.cart = items,
                Err(e) => log::error!("failed to load saved cart: {}", e),
            }
        }

        log::info!(
            "hydrated state: theme={}, {} cart item(s)",
            state.theme.as_str(),
            state.cart.len()
        );
        state
    }
}

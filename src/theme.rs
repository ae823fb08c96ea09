//! Theme Switching
//!
//! The mode lives in the store; this module persists it and mirrors it
//! onto the document root as the `theme-dark` class.

use crate::config::THEME_KEY;
use crate::dom;
use crate::models::Theme;
use crate::storage::KeyValueStore;

const DARK_CLASS: &str = "theme-dark";

/// Flip `current`, persist the result and return it
pub fn toggle_theme(current: Theme, storage: &dyn KeyValueStore) -> Theme {
    let next = current.toggled();
    storage.set(THEME_KEY, next.as_str());
    next
}

/// Mirror `theme` onto the root element. Idempotent, never persists.
pub fn apply_theme(theme: Theme) {
    match dom::document_root() {
        Ok(root) => {
            let _ = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
        }
        Err(e) => log::debug!("theme not applied: {}", e),
    }
}

/// Value for the toggle's `aria-pressed`
pub fn aria_pressed(theme: Theme) -> &'static str {
    if theme.is_dark() { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_toggle_persists() {
        let store = MemoryStore::new();
        let next = toggle_theme(Theme::Light, &store);
        assert_eq!(next, Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(aria_pressed(next), "true");
    }

    #[test]
    fn test_even_toggles_restore_mode() {
        let store = MemoryStore::with_entries([(THEME_KEY, "light")]);
        let once = toggle_theme(Theme::Light, &store);
        let twice = toggle_theme(once, &store);
        assert_eq!(twice, Theme::Light);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(aria_pressed(twice), "false");
    }
}

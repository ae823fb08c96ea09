//! Focus Handling for Overlays
//!
//! The mobile menu remembers what had focus when it opened and hands it
//! back on close. Generic over the focus handle so it runs without a DOM.

/// Open flag plus the focus owner to restore
#[derive(Debug, Clone)]
pub struct FocusReturn<T> {
    open: bool,
    previous: Option<T>,
}

impl<T> Default for FocusReturn<T> {
    fn default() -> Self {
        Self { open: false, previous: None }
    }
}

impl<T> FocusReturn<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `focused` and mark open. Re-opening keeps the first record.
    pub fn open(&mut self, focused: Option<T>) {
        if !self.open {
            self.previous = focused;
            self.open = true;
        }
    }

    /// Mark closed and return the element to refocus
    pub fn close(&mut self) -> Option<T> {
        self.open = false;
        self.previous.take()
    }
}

/// While a trap is active, focus that lands outside the trapped region
/// (and not on the control that opened it) must be pulled back.
pub fn should_redirect_focus(trap_active: bool, inside_region: bool, on_opener: bool) -> bool {
    trap_active && !inside_region && !on_opener
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_restores_previous_focus() {
        let mut menu = FocusReturn::new();
        menu.open(Some("contact-link"));
        assert_eq!(menu.close(), Some("contact-link"));
        assert_eq!(menu.close(), None);

        // Closed again: the next open records afresh
        menu.open(Some("cart-toggle"));
        assert_eq!(menu.close(), Some("cart-toggle"));
    }

    #[test]
    fn test_reopen_keeps_first_record() {
        let mut menu = FocusReturn::new();
        menu.open(Some("hero-button"));
        menu.open(Some("first-menu-link"));
        assert_eq!(menu.close(), Some("hero-button"));
    }

    #[test]
    fn test_redirect_rules() {
        assert!(should_redirect_focus(true, false, false));
        assert!(!should_redirect_focus(true, true, false));
        assert!(!should_redirect_focus(true, false, true));
        assert!(!should_redirect_focus(false, false, false));
    }
}

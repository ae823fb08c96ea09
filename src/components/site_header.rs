//! Site Header Component
//!
//! Sticky header that tints after a short scroll and slides away while
//! scrolling down.

use leptos::ev;
use leptos::prelude::*;
use leptos_timeouts::bind_window_listener;
use reactive_stores::Field;

use super::{AnchorLink, CartToggle, NavMenu, ThemeToggle};
use crate::dom;
use crate::models::{LineItem, Theme};
use crate::scroll::{ScrollEffects, ScrollTracker};
use crate::storage::Persistence;

/// Scroll-driven presentation, updated from a window scroll listener
pub fn use_scroll_effects() -> ReadSignal<ScrollEffects> {
    let (effects, set_effects) = signal(ScrollEffects::default());
    let tracker = StoredValue::new(ScrollTracker::new());

    bind_window_listener(ev::scroll, move |_| {
        let y = dom::scroll_y();
        if let Some(next) = tracker.try_update_value(|t| t.update(y)) {
            if next != effects.get_untracked() {
                set_effects.set(next);
            }
        }
    });

    effects
}

#[component]
pub fn SiteHeader(
    scroll: ReadSignal<ScrollEffects>,
    #[prop(into)] theme: Field<Theme>,
    #[prop(into)] cart: Field<Vec<LineItem>>,
    persistence: Persistence,
) -> impl IntoView {
    view! {
        <header
            class=move || if scroll.get().scrolled { "header is-scrolled" } else { "header" }
            style:transform=move || {
                if scroll.get().header_hidden { "translateY(-100%)" } else { "translateY(0)" }
            }
        >
            <div class="header__inner container">
                <AnchorLink href="#inicio" class="brand">"Junto Comigo"</AnchorLink>
                <NavMenu />
                <div class="header__actions">
                    <ThemeToggle theme=theme persistence=persistence />
                    <CartToggle cart=cart />
                </div>
            </div>
        </header>
    }
}

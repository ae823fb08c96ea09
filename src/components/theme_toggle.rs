//! Theme Toggle Component

use leptos::prelude::*;
use reactive_stores::Field;

use crate::models::Theme;
use crate::storage::Persistence;
use crate::theme;

/// Light/dark switch; persists every change
#[component]
pub fn ThemeToggle(
    #[prop(into)] theme: Field<Theme>,
    persistence: Persistence,
) -> impl IntoView {
    let on_click = move |_| {
        let next = theme::toggle_theme(theme.get_untracked(), &*persistence);
        *theme.write() = next;
        theme::apply_theme(next);
        log::info!("theme switched to {}", next.as_str());
    };

    view! {
        <button
            id="themeToggle"
            class="theme-toggle"
            aria-label="Alternar tema"
            aria-pressed=move || theme::aria_pressed(theme.get())
            on:click=on_click
        >
            {move || if theme.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}

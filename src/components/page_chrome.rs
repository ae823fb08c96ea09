//! Page Chrome Components
//!
//! Loading overlay and back-to-top control.

use leptos::prelude::*;
use leptos_timeouts::ScopedTimeout;

use crate::config::{LOADING_FADE_DELAY_MS, LOADING_REMOVE_DELAY_MS};
use crate::dom;
use crate::scroll::ScrollEffects;

/// Full-screen loader that fades out shortly after mount
#[component]
pub fn LoadingScreen() -> impl IntoView {
    let (loaded, set_loaded) = signal(false);
    let (removed, set_removed) = signal(false);
    let fade = ScopedTimeout::new();
    let remove = ScopedTimeout::new();

    fade.schedule(LOADING_FADE_DELAY_MS, move || {
        set_loaded.set(true);
        remove.schedule(LOADING_REMOVE_DELAY_MS, move || set_removed.set(true));
    });

    view! {
        <div
            id="loadingScreen"
            class=move || if loaded.get() { "loading-screen loaded" } else { "loading-screen" }
            style:display=move || if removed.get() { "none" } else { "flex" }
            aria-hidden="true"
        >
            <div class="loading-screen__spinner"></div>
        </div>
    }
}

#[component]
pub fn BackToTop(scroll: ReadSignal<ScrollEffects>) -> impl IntoView {
    view! {
        <button
            id="backToTop"
            class=move || if scroll.get().back_to_top { "back-to-top is-visible" } else { "back-to-top" }
            aria-label="Voltar ao topo"
            on:click=move |_| dom::scroll_to_top()
        >
            "↑"
        </button>
    }
}

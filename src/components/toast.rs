//! Toast Components
//!
//! Notifications fade in, stay for a few seconds, fade out and are then
//! removed from the queue. Each toast owns its timers.

use leptos::prelude::*;
use leptos_timeouts::ScopedTimeout;

use crate::config::{TOAST_FADE_MS, TOAST_SHOW_DELAY_MS, TOAST_VISIBLE_MS};
use crate::context::{use_ui, ToastMessage};

/// Renders the toast queue from `UiContext`
#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = use_ui();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || ui.toasts.get()
                key=|toast: &ToastMessage| toast.id
                children=move |toast: ToastMessage| view! { <Toast toast=toast /> }
            />
        </div>
    }
}

#[component]
fn Toast(toast: ToastMessage) -> impl IntoView {
    let ui = use_ui();
    let id = toast.id;
    let (visible, set_visible) = signal(false);

    let show = ScopedTimeout::new();
    let hide = ScopedTimeout::new();
    let remove = ScopedTimeout::new();

    show.schedule(TOAST_SHOW_DELAY_MS, move || set_visible.set(true));
    hide.schedule(TOAST_VISIBLE_MS, move || {
        set_visible.set(false);
        remove.schedule(TOAST_FADE_MS, move || {
            // Removal unmounts this toast; leave the timer callback first
            request_animation_frame(move || ui.dismiss_toast(id));
        });
    });

    view! {
        <div class="toast" role="status" style:opacity=move || if visible.get() { "1" } else { "0" }>
            {toast.text}
        </div>
    }
}

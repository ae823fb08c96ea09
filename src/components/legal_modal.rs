//! Legal Modal Component
//!
//! Dialog showing terms, privacy or security text, plus the footer links
//! that open it.

use leptos::ev;
use leptos::prelude::*;
use leptos_timeouts::bind_window_listener;

use crate::context::use_ui;
use crate::legal;
use crate::models::ModalKind;

#[component]
pub fn LegalModal() -> impl IntoView {
    let ui = use_ui();

    bind_window_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            ui.close_modal();
        }
    });

    let is_open = move || ui.modal.get().is_some();
    let title = move || ui.modal.get().map(legal::title).unwrap_or_default();
    let body = move || ui.modal.get().map(legal::body_html).unwrap_or_default();

    view! {
        <div
            id="modal"
            class=move || if is_open() { "modal active" } else { "modal" }
            role="dialog"
            aria-modal="true"
            aria-labelledby="modalTitle"
            aria-hidden=move || if is_open() { "false" } else { "true" }
        >
            <div id="modalOverlay" class="modal__overlay" on:click=move |_| ui.close_modal()></div>
            <div class="modal__dialog">
                <button id="modalClose" class="modal__close" aria-label="Fechar" on:click=move |_| ui.close_modal()>
                    "×"
                </button>
                <h2 id="modalTitle">{title}</h2>
                <div id="modalBody" class="modal__body" inner_html=body></div>
            </div>
        </div>
    }
}

/// Footer link opening the modal for a kind tag (`terms`, `privacy`, ...)
#[component]
pub fn ModalTrigger(#[prop(into)] kind: String, children: Children) -> impl IntoView {
    let ui = use_ui();
    let modal_kind = ModalKind::from_tag(&kind);

    view! {
        <a
            href="#"
            class="modal-trigger"
            data-modal=kind
            on:click=move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                ui.open_modal(modal_kind);
            }
        >
            {children()}
        </a>
    }
}

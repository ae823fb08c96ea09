//! Navigation Menu Component
//!
//! Mobile menu with focus trap. Opening remembers the focused element and
//! moves focus to the first link; closing gives focus back.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_timeouts::bind_window_listener;
use wasm_bindgen::JsCast;

use super::AnchorLink;
use crate::context::use_ui;
use crate::dom;
use crate::focus::{should_redirect_focus, FocusReturn};

/// Section anchors in menu order
const NAV_LINKS: &[(&str, &str)] = &[
    ("#inicio", "Início"),
    ("#sobre", "Sobre"),
    ("#planos", "Planos"),
    ("#contato", "Contato"),
];

#[component]
pub fn NavMenu() -> impl IntoView {
    let ui = use_ui();
    let toggle_ref = NodeRef::<html::Button>::new();
    let list_ref = NodeRef::<html::Ul>::new();
    let focus_return = StoredValue::new_local(FocusReturn::<web_sys::HtmlElement>::new());

    let focus_first_link = move || {
        let first = list_ref
            .get_untracked()
            .and_then(|list| list.query_selector("a").ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        if let Some(link) = first {
            let _ = link.focus();
        }
    };

    // Open/close side effects, wherever the flag was flipped from
    Effect::new(move |_| {
        if ui.menu_open.get() {
            focus_return.update_value(|f| f.open(dom::active_element()));
            focus_first_link();
        } else if let Some(previous) = focus_return.try_update_value(|f| f.close()).flatten() {
            let _ = previous.focus();
        }
    });

    bind_window_listener(ev::focusin, move |ev: web_sys::FocusEvent| {
        let open = ui.menu_open.get_untracked();
        if !open {
            return;
        }
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
            return;
        };
        let inside = list_ref
            .get_untracked()
            .map(|list| list.contains(Some(&target)))
            .unwrap_or(false);
        let on_opener = toggle_ref
            .get_untracked()
            .map(|button| button.is_same_node(Some(&target)))
            .unwrap_or(false);

        if should_redirect_focus(open, inside, on_opener) {
            focus_first_link();
        }
    });

    bind_window_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            ui.close_menu();
        }
    });

    view! {
        <nav class="nav" aria-label="Principal">
            <button
                node_ref=toggle_ref
                id="navToggle"
                class="nav__toggle"
                aria-controls="navList"
                aria-label="Abrir menu"
                aria-expanded=move || if ui.menu_open.get() { "true" } else { "false" }
                on:click=move |_| ui.toggle_menu()
            >
                <span class="nav__bar"></span>
                <span class="nav__bar"></span>
                <span class="nav__bar"></span>
            </button>
            <ul
                node_ref=list_ref
                id="navList"
                class=move || if ui.menu_open.get() { "nav__list is-open" } else { "nav__list" }
            >
                {NAV_LINKS.iter().map(|(href, label)| view! {
                    <li on:click=move |_| ui.close_menu()>
                        <AnchorLink href=*href class="nav__link">{*label}</AnchorLink>
                    </li>
                }).collect_view()}
            </ul>
        </nav>
    }
}

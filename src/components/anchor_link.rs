//! Anchor Link Component
//!
//! In-page link that scrolls smoothly to its target.

use leptos::prelude::*;

use crate::context::use_ui;
use crate::dom;

/// `<a href="#id">` that scrolls its target into view and closes the
/// mobile menu. Without a matching target the browser handles the click.
#[component]
pub fn AnchorLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let ui = use_ui();
    let target = href.clone();

    let on_click = move |ev: web_sys::MouseEvent| {
        if dom::scroll_to_anchor(&target) {
            ev.prevent_default();
            ui.close_menu();
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

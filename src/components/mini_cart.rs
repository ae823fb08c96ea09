//! Mini Cart Components
//!
//! Header toggle with item badge, and the slide-in panel listing the
//! cart. Both render straight from the cart field, so every change
//! replaces the previous output.

use leptos::prelude::*;
use reactive_stores::Field;

use crate::cart::{self, CartRow};
use crate::context::use_ui;
use crate::models::LineItem;

/// Header button opening the panel, with the item count badge
#[component]
pub fn CartToggle(#[prop(into)] cart: Field<Vec<LineItem>>) -> impl IntoView {
    let ui = use_ui();
    let badge = Memo::new(move |_| cart::cart_badge(cart.read().len()));

    view! {
        <button
            id="cartToggle"
            class="cart-toggle"
            aria-controls="miniCart"
            aria-label="Abrir carrinho"
            aria-expanded=move || if ui.cart_open.get() { "true" } else { "false" }
            on:click=move |_| ui.toggle_cart()
        >
            <span class="cart-toggle__icon" aria-hidden="true">"🛒"</span>
            <span
                class="cart-count"
                style:display=move || if badge.get().visible { "flex" } else { "none" }
            >
                {move || badge.get().label}
            </span>
        </button>
    }
}

/// Slide-in cart panel
#[component]
pub fn MiniCart(#[prop(into)] cart: Field<Vec<LineItem>>) -> impl IntoView {
    let ui = use_ui();
    let rows = move || cart::cart_rows(&cart.read());
    let is_empty = move || cart.read().is_empty();

    view! {
        <aside
            id="miniCart"
            class=move || if ui.cart_open.get() { "mini-cart open" } else { "mini-cart" }
            aria-label="Carrinho"
        >
            <div class="mini-cart__header">
                <h3>"Seu carrinho"</h3>
                <button
                    id="closeCart"
                    class="mini-cart__close"
                    aria-label="Fechar carrinho"
                    on:click=move |_| ui.close_cart()
                >
                    "×"
                </button>
            </div>
            <p
                class="mini-cart__empty"
                style:display=move || if is_empty() { "block" } else { "none" }
            >
                "Seu carrinho está vazio."
            </p>
            <div class="mini-cart__content">
                <Show when=move || !is_empty()>
                    <div class="mini-cart__items">
                        <For
                            each=rows
                            key=|row: &CartRow| row.key()
                            children=move |row: CartRow| {
                                view! {
                                    <div class="mini-cart__item">
                                        <h4>{row.title}</h4>
                                        <p>{row.price_label}</p>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </div>
        </aside>
    }
}

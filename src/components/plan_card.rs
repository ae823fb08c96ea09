//! Plan Card Component
//!
//! Pricing card whose action adds the plan to the cart.

use chrono::Utc;
use leptos::prelude::*;
use reactive_stores::Field;

use crate::cart;
use crate::context::use_ui;
use crate::models::{LineItem, PlanOffer};
use crate::storage::Persistence;

#[component]
pub fn PlanCard(
    plan: PlanOffer,
    #[prop(into)] cart: Field<Vec<LineItem>>,
    persistence: Persistence,
) -> impl IntoView {
    let ui = use_ui();

    // Append, write through, notify, then show the panel
    let add_to_cart = move |_| {
        let item = cart::add_item(&mut cart.write(), &*persistence, plan.name, plan.price_text, Utc::now());
        log::info!("cart: added {} (id {})", item.plan, item.id);
        ui.notify(cart::added_notice(plan.name));
        ui.open_cart();
    };

    view! {
        <article class=if plan.highlighted { "card card--highlight" } else { "card" }>
            <h3 class="card__title">{plan.name}</h3>
            <p class="card__tagline">{plan.tagline}</p>
            <p class="card__price">{cart::format_price(cart::parse_price(plan.price_text))}</p>
            <ul class="card__features">
                {plan.features.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
            </ul>
            <button
                type="button"
                class="btn card__action"
                data-plan=plan.name
                data-price=plan.price_text
                on:click=add_to_cart
            >
                "Adicionar ao carrinho"
            </button>
        </article>
    }
}

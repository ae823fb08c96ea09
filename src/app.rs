//! Junto Comigo Frontend App
//!
//! Root component: hydrates state once, then hands each feature the
//! state field and storage handle it works on.

use leptos::prelude::*;
use reactive_stores::{Field, Store};

use crate::components::{
    use_scroll_effects, About, BackToTop, ContactSection, Hero, LegalModal, LoadingScreen, MiniCart,
    PlansSection, SiteFooter, SiteHeader, ToastHost,
};
use crate::context::UiContext;
use crate::dom;
use crate::models::{LineItem, Theme};
use crate::storage::Persistence;
use crate::store::{AppState, AppStateStoreFields};
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    // Hydration
    let persistence = Persistence::browser();
    let state = AppState::hydrate(&*persistence);
    theme::apply_theme(state.theme);

    let store = Store::new(state);
    let cart: Field<Vec<LineItem>> = store.cart().into();
    let theme: Field<Theme> = store.theme().into();

    // Overlay flags for all children
    let ui = UiContext::new();
    provide_context(ui);

    Effect::new(move |_| dom::set_body_scroll_locked(ui.scroll_locked()));

    let scroll = use_scroll_effects();

    view! {
        <LoadingScreen />
        <SiteHeader scroll=scroll theme=theme cart=cart persistence=persistence.clone() />
        <main>
            <Hero />
            <About />
            <PlansSection cart=cart persistence=persistence />
            <ContactSection />
        </main>
        <SiteFooter />
        <MiniCart cart=cart />
        <LegalModal />
        <ToastHost />
        <BackToTop scroll=scroll />
    }
}

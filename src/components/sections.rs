//! Page Sections
//!
//! Static marketing content plus the sections that host interactive
//! components.

use leptos::prelude::*;
use reactive_stores::Field;

use super::{AnchorLink, ContactForm, ModalTrigger, PlanCard};
use crate::models::{LineItem, PLANS};
use crate::storage::Persistence;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="inicio" class="hero">
            <div class="container hero__inner">
                <h1 class="hero__title">"Companhia certa para cada ocasião"</h1>
                <p class="hero__lead">
                    "Acompanhamento social profissional para eventos, jantares e viagens, com discrição e segurança."
                </p>
                <div class="hero__actions">
                    <AnchorLink href="#planos" class="btn">"Ver planos"</AnchorLink>
                    <AnchorLink href="#contato" class="btn btn--ghost">"Fale conosco"</AnchorLink>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="sobre" class="section">
            <div class="container">
                <h2 class="section__title">"Sobre nós"</h2>
                <p>
                    "Somos uma equipe de profissionais verificados que acompanham você em compromissos sociais e corporativos. "
                    "Cada encontro é planejado com antecedência e conduzido com total confidencialidade."
                </p>
            </div>
        </section>
    }
}

#[component]
pub fn PlansSection(
    #[prop(into)] cart: Field<Vec<LineItem>>,
    persistence: Persistence,
) -> impl IntoView {
    view! {
        <section id="planos" class="section section--alt">
            <div class="container">
                <h2 class="section__title">"Planos"</h2>
                <div class="cards">
                    {PLANS.iter().map(|plan| view! {
                        <PlanCard plan=*plan cart=cart persistence=persistence.clone() />
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contato" class="section">
            <div class="container">
                <h2 class="section__title">"Contato"</h2>
                <p>"Conte-nos sobre o seu evento. Respondemos em até um dia útil."</p>
                <ContactForm />
            </div>
        </section>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer__inner">
                <p>"© Junto Comigo"</p>
                <nav class="footer__links" aria-label="Documentos">
                    <ModalTrigger kind="terms">"Termos de Uso"</ModalTrigger>
                    <ModalTrigger kind="privacy">"Privacidade"</ModalTrigger>
                    <ModalTrigger kind="security">"Segurança"</ModalTrigger>
                </nav>
            </div>
        </footer>
    }
}

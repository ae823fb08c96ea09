//! Contact Form Component
//!
//! Validates on submit, focuses the first invalid field and simulates a
//! successful send. The reset timer belongs to this component: it is
//! replaced by a new submission and dropped with the form.

use leptos::html;
use leptos::prelude::*;
use leptos_timeouts::ScopedTimeout;

use crate::config::FORM_RESET_DELAY_MS;
use crate::error::FormField;
use crate::validation::{self, FormPhase};

#[component]
pub fn ContactForm() -> impl IntoView {
    let form_ref = NodeRef::<html::Form>::new();
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let phone_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let (phase, set_phase) = signal(FormPhase::Idle);
    let reset_timer = ScopedTimeout::new();

    let read_fields = move || validation::ContactForm {
        name: name_ref.get_untracked().map(|i| i.value()).unwrap_or_default(),
        email: email_ref.get_untracked().map(|i| i.value()).unwrap_or_default(),
        phone: phone_ref.get_untracked().map(|i| i.value()).unwrap_or_default(),
        message: message_ref.get_untracked().map(|t| t.value()).unwrap_or_default(),
    };

    let focus_field = move |field: FormField| {
        let target: Option<web_sys::HtmlElement> = match field {
            FormField::Name => name_ref.get_untracked().map(Into::into),
            FormField::Email => email_ref.get_untracked().map(Into::into),
            FormField::Message => message_ref.get_untracked().map(Into::into),
        };
        if let Some(el) = target {
            let _ = el.focus();
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let next = validation::submit(&read_fields());
        set_phase.set(next);

        match next {
            FormPhase::Rejected(e) => {
                // Keep what the user is correcting
                reset_timer.cancel();
                focus_field(e.field);
            }
            FormPhase::Submitted => {
                log::info!("contact form submitted (simulated)");
                reset_timer.schedule(FORM_RESET_DELAY_MS, move || {
                    if let Some(form) = form_ref.get_untracked() {
                        form.reset();
                    }
                    set_phase.set(FormPhase::Idle);
                });
            }
            FormPhase::Idle => {}
        }
    };

    let status_text = move || phase.get().status().map(|s| s.text).unwrap_or_default();
    let status_color = move || match phase.get().status() {
        Some(status) if status.ok => "var(--jc-green)",
        _ => "var(--jc-orange)",
    };

    view! {
        <form node_ref=form_ref id="contactForm" class="form" novalidate=true on:submit=on_submit>
            <div class="form__row">
                <label for="name">"Nome"</label>
                <input node_ref=name_ref id="name" name="name" type="text" autocomplete="name" />
            </div>
            <div class="form__row">
                <label for="email">"E-mail"</label>
                <input node_ref=email_ref id="email" name="email" type="email" autocomplete="email" />
            </div>
            <div class="form__row">
                <label for="phone">"Telefone"</label>
                <input node_ref=phone_ref id="phone" name="phone" type="tel" autocomplete="tel" />
            </div>
            <div class="form__row">
                <label for="message">"Mensagem"</label>
                <textarea node_ref=message_ref id="message" name="message" rows="5"></textarea>
            </div>
            <button type="submit" class="btn">"Enviar mensagem"</button>
            <p id="formStatus" class="form__status" role="status" aria-live="polite" style:color=status_color>
                {status_text}
            </p>
        </form>
    }
}

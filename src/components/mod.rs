//! UI Components
//!
//! Leptos components for the page and its interactive widgets.

mod anchor_link;
mod contact_form;
mod legal_modal;
mod mini_cart;
mod nav_menu;
mod page_chrome;
mod plan_card;
mod sections;
mod site_header;
mod theme_toggle;
mod toast;

pub use anchor_link::AnchorLink;
pub use contact_form::ContactForm;
pub use legal_modal::{LegalModal, ModalTrigger};
pub use mini_cart::{CartToggle, MiniCart};
pub use nav_menu::NavMenu;
pub use page_chrome::{BackToTop, LoadingScreen};
pub use plan_card::PlanCard;
pub use sections::{About, ContactSection, Hero, PlansSection, SiteFooter};
pub use site_header::{use_scroll_effects, SiteHeader};
pub use theme_toggle::ThemeToggle;
pub use toast::ToastHost;

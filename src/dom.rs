//! Browser Capabilities
//!
//! Typed lookups for the window-level handles features depend on. Each
//! lookup returns `Result`/`Option` so a missing capability switches off
//! only the feature that asked for it.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

use crate::error::MissingHandle;

pub fn window() -> Result<Window, MissingHandle> {
    web_sys::window().ok_or(MissingHandle("window"))
}

pub fn document() -> Result<Document, MissingHandle> {
    window()?.document().ok_or(MissingHandle("document"))
}

/// The `<html>` element
pub fn document_root() -> Result<Element, MissingHandle> {
    document()?
        .document_element()
        .ok_or(MissingHandle("document root"))
}

pub fn body() -> Result<HtmlElement, MissingHandle> {
    document()?.body().ok_or(MissingHandle("body"))
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

/// Element that currently has focus, if it can take focus back later
pub fn active_element() -> Option<HtmlElement> {
    document()
        .ok()?
        .active_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .ok()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn scroll_behavior() -> ScrollBehavior {
    if prefers_reduced_motion() {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    }
}

/// Vertical scroll offset, 0 when unknown
pub fn scroll_y() -> f64 {
    window().ok().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Lock or release page scrolling behind an overlay
pub fn set_body_scroll_locked(locked: bool) {
    match body() {
        Ok(body) => {
            let value = if locked { "hidden" } else { "" };
            let _ = body.style().set_property("overflow", value);
        }
        Err(e) => log::debug!("scroll lock skipped: {}", e),
    }
}

/// Scroll the element named by an in-page `#id` href into view.
/// Returns `false` when there is no such element.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(target) = href
        .strip_prefix('#')
        .filter(|id| !id.is_empty())
        .and_then(element_by_id)
    else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(scroll_behavior());
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn scroll_to_top() {
    match window() {
        Ok(win) => {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(scroll_behavior());
            win.scroll_to_with_scroll_to_options(&options);
        }
        Err(e) => log::debug!("scroll to top skipped: {}", e),
    }
}

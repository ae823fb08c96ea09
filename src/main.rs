//! Junto Comigo Frontend Entry Point

mod app;
mod cart;
mod components;
mod config;
mod context;
mod dom;
mod error;
mod focus;
mod legal;
mod markdown;
mod models;
mod scroll;
mod storage;
mod store;
mod theme;
mod validation;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    // Only fails when a logger is already installed
    let _ = rolling_logger::init(config::LOG_CAPACITY, level);

    mount_to_body(App);
}

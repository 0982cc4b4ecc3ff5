//! Summit Route Console Entry Point

mod api;
mod app;
mod bindings;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod forms;
mod grid;
mod logging;
mod models;
mod query;
mod routes;
mod session;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Debug);
    log::info!(target: "app", "[APP] console starting");
    mount_to_body(App);
}

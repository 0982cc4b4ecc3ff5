//! Global Console State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::routes::Route;

/// Console-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ConsoleState {
    /// Page currently shown
    pub route: Route,
}

impl ConsoleState {
    pub fn new(route: Route) -> Self {
        Self { route }
    }
}

/// Type alias for the store
pub type ConsoleStore = Store<ConsoleState>;

/// Get the console store from context
pub fn use_console_store() -> ConsoleStore {
    expect_context::<ConsoleStore>()
}

// ========================
// Navigation
// ========================

/// Route for the browser's current location
pub fn current_route() -> Route {
    web_sys::window()
        .map(|w| w.location())
        .map(|location| {
            let path = location.pathname().unwrap_or_default();
            let search = location.search().unwrap_or_default();
            Route::from_location(&path, &search)
        })
        .unwrap_or_default()
}

/// Push `route` onto the history stack and show it
pub fn navigate(store: &ConsoleStore, route: Route) {
    let href = route.href();
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if let Err(err) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&href)) {
            log::warn!(target: "store", "[NAV] pushState failed for {}: {:?}", href, err);
        }
    }
    log::debug!(target: "store", "[NAV] -> {}", href);
    store.route().set(route);
}

//! In-app Link Component

use leptos::prelude::*;

use crate::routes::Route;
use crate::store::{navigate, use_console_store};

/// Anchor that switches route through the history API instead of reloading.
/// Modified clicks (new tab etc.) fall through to the browser.
#[component]
pub fn NavLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let store = use_console_store();
    let target = href.clone();

    let on_click = move |ev: web_sys::MouseEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        let (path, search) = target.split_once('?').unwrap_or((target.as_str(), ""));
        navigate(&store, Route::from_location(path, search));
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

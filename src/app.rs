//! Console App
//!
//! Navigation shell: header, the page for the current route, footer.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::bindings::{EXECUTABLES, PROCESS_EVENTS, SYSTEMS};
use crate::components::{
    ContentPanel, Dashboard, EntityGrid, FileInfoPage, Footer, NavHeader, PasswordChange,
    PasswordReset, ProfilePage, SystemInfoPage,
};
use crate::config::ConsoleConfig;
use crate::context::ConsoleContext;
use crate::routes::Route;
use crate::session;
use crate::store::{current_route, ConsoleState, ConsoleStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    provide_context(ConsoleContext::new(
        ConsoleConfig::from_document(),
        session::csrf_token(),
    ));

    let store = Store::new(ConsoleState::new(current_route()));
    provide_context(store);

    // Back/forward buttons
    let _ = window_event_listener(ev::popstate, move |_| {
        let route = current_route();
        log::debug!(target: "app", "[APP] popstate -> {:?}", route);
        store.route().set(route);
    });

    let page = move || match store.route().get() {
        Route::Dashboard => view! { <Dashboard /> }.into_any(),
        Route::Systems => view! { <EntityGrid binding=SYSTEMS /> }.into_any(),
        Route::Executables => view! { <EntityGrid binding=EXECUTABLES /> }.into_any(),
        Route::ProcessEvents => view! { <EntityGrid binding=PROCESS_EVENTS /> }.into_any(),
        Route::SystemInfo { uuid } => view! { <SystemInfoPage uuid=uuid /> }.into_any(),
        Route::FileInfo { sha256 } => view! { <FileInfoPage sha256=sha256 /> }.into_any(),
        Route::Profile => view! { <ProfilePage /> }.into_any(),
        Route::ChangePassword => view! { <PasswordChange /> }.into_any(),
        Route::PasswordReset => view! { <PasswordReset /> }.into_any(),
        Route::Content(content) => view! { <ContentPanel page=content /> }.into_any(),
    };

    view! {
        <NavHeader />
        <div class="container">{page}</div>
        <Footer />
    }
}

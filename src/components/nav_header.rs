//! Navigation Header Component
//!
//! Top navbar with the section links; the active section is highlighted.

use leptos::prelude::*;

use crate::api::ContentPage;
use crate::components::NavLink;
use crate::routes::Route;
use crate::store::{use_console_store, ConsoleStateStoreFields};

const SECTIONS: &[(&str, Route)] = &[
    ("Home", Route::Dashboard),
    ("Systems", Route::Systems),
    ("Executables", Route::Executables),
    ("Process Events", Route::ProcessEvents),
];

#[component]
pub fn NavHeader() -> impl IntoView {
    let store = use_console_store();
    let section = Memo::new(move |_| store.route().get().section());

    let tab_class = move |route: Route| {
        move || {
            if section.get() == route {
                "active"
            } else {
                ""
            }
        }
    };

    view! {
        <div class="navbar navbar-default" role="navigation">
            <div class="container">
                <div class="navbar-header">
                    <NavLink href="/" class="navbar-brand">"Summit Route"</NavLink>
                </div>
                <div class="navbar-collapse collapse">
                    <ul class="nav navbar-nav">
                        {SECTIONS.iter().map(|(label, route)| {
                            view! {
                                <li class=tab_class(route.clone())>
                                    <NavLink href=route.href()>{*label}</NavLink>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                    <ul class="nav navbar-nav navbar-right">
                        <li class=tab_class(Route::Profile)>
                            <NavLink href=Route::Profile.href()>
                                <span class="glyphicon glyphicon-user"></span>
                                " Profile"
                            </NavLink>
                        </li>
                        // Server-side route, full page load
                        <li><a href="/logout">"Logout"</a></li>
                        <li class=tab_class(Route::Content(ContentPage::Help))>
                            <NavLink href=Route::Content(ContentPage::Help).href()>"Help"</NavLink>
                        </li>
                    </ul>
                </div>
            </div>
        </div>
    }
}

use leptos::prelude::*;

use crate::api::ContentPage;
use crate::components::NavLink;
use crate::routes::Route;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <div class="footer">
            <div class="container">
                <p class="text-muted">
                    "© Summit Route LLC 2015 | "
                    <NavLink href=Route::Content(ContentPage::PrivacyPolicy).href()>"Privacy Policy"</NavLink>
                    " | "
                    <NavLink href=Route::Content(ContentPage::Terms).href()>"Terms of Use"</NavLink>
                </p>
            </div>
        </div>
    }
}

//! Server-rendered Content Panel
//!
//! Help, privacy policy and terms are fetched once and injected as HTML.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ContentPage};
use crate::components::{Flash, FlashMessage};
use crate::context::use_console;
use crate::error::LOAD_FAILED_MESSAGE;

#[component]
pub fn ContentPanel(page: ContentPage) -> impl IntoView {
    let api_client = StoredValue::new(use_console().api);
    let html = RwSignal::new(String::new());
    let flash = RwSignal::new(None::<FlashMessage>);

    Effect::new(move |prev: Option<()>| {
        if prev.is_some() {
            return;
        }
        let api_client = api_client.get_value();
        spawn_local(async move {
            match api::fetch_content(&api_client, page).await {
                Ok(body) => {
                    html.try_set(body);
                }
                Err(err) => {
                    log::warn!(target: "content", "[CONTENT] {} failed: {}", page.title(), err);
                    flash.try_set(Some(FlashMessage::danger(LOAD_FAILED_MESSAGE)));
                }
            }
        });
    });

    view! {
        <div>
            <Flash message=flash />
            <div class="content-page" inner_html=move || html.get()></div>
        </div>
    }
}

//! Flash Banner Component
//!
//! Dismissable success/danger banner shared by the form pages.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            text: text.into(),
        }
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Danger,
            text: text.into(),
        }
    }
}

#[component]
pub fn Flash(message: RwSignal<Option<FlashMessage>>) -> impl IntoView {
    move || {
        message.get().map(|flash| {
            let class = match flash.kind {
                FlashKind::Success => "alert alert-success alert-dismissable",
                FlashKind::Danger => "alert alert-danger alert-dismissable",
            };
            view! {
                <div class="flash show">
                    <div class=class role="alert">
                        <button type="button" class="close" on:click=move |_| message.set(None)>
                            "×"
                        </button>
                        {flash.text}
                    </div>
                </div>
            }
        })
    }
}

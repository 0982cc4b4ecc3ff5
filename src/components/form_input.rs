//! Form Input Component
//!
//! Labelled input whose group is colored by its [`FieldStatus`].

use leptos::prelude::*;

use crate::forms::{FieldState, FieldStatus};

#[component]
pub fn FormInput(
    #[prop(into)] label: String,
    /// Field inside the owning form's state
    field: Signal<FieldState>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] input_type: Option<String>,
    /// `email` or `password` adds the matching icon
    #[prop(optional_no_strip)] addon: Option<&'static str>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    let icon = match addon {
        Some("email") => Some("fa fa-envelope"),
        Some(a) if a.contains("password") => Some("fa fa-key"),
        _ => None,
    };
    let status: Memo<FieldStatus> = Memo::new(move |_| field.with(|f| f.status()));

    view! {
        <div class=move || status.get().class()>
            <label class="control-label">{label}</label>
            <div class="input-group">
                {icon.map(|icon| view! {
                    <span class="input-group-addon"><i class=icon></i></span>
                })}
                <input
                    class="form-control"
                    type=input_type
                    prop:value=move || field.with(|f| f.value.clone())
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            </div>
        </div>
    }
}

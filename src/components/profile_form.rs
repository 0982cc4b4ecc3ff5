//! Profile Form Component
//!
//! Loads the account profile, lets the user edit name and email, and
//! posts the result. Save is only offered once something changed.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Flash, FlashMessage, FormInput, NavLink};
use crate::context::use_console;
use crate::error::{FormField, LOAD_FAILED_MESSAGE};
use crate::forms::{ProfileField, ProfileForm, CHANGES_SAVED_MESSAGE};
use crate::routes::Route;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api_client = StoredValue::new(use_console().api);
    let form = RwSignal::new(ProfileForm::default());
    let loaded = RwSignal::new(false);
    let flash = RwSignal::new(None::<FlashMessage>);

    // Prefill once
    Effect::new(move |prev: Option<()>| {
        if prev.is_some() {
            return;
        }
        let api_client = api_client.get_value();
        spawn_local(async move {
            match api::fetch_profile(&api_client).await {
                Ok(profile) => {
                    form.try_set(ProfileForm::from_profile(&profile));
                    loaded.try_set(true);
                }
                Err(err) => {
                    log::warn!(target: "profile", "[PROFILE] load failed: {}", err);
                    flash.try_set(Some(FlashMessage::danger(LOAD_FAILED_MESSAGE)));
                }
            }
        });
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !form.try_update(|f| f.begin_save()).unwrap_or(false) {
            return;
        }
        let profile = form.with_untracked(|f| f.to_profile());
        let api_client = api_client.get_value();
        spawn_local(async move {
            match api::save_profile(&api_client, &profile).await {
                Ok(()) => {
                    form.try_update(|f| f.saved());
                    flash.try_set(Some(FlashMessage::success(CHANGES_SAVED_MESSAGE)));
                }
                Err(err) => {
                    form.try_update(|f| f.failed(err.field() == Some(FormField::Email)));
                    flash.try_set(Some(FlashMessage::danger(err.user_message())));
                }
            }
        });
    };

    let field_input = move |label: &'static str, which: ProfileField, addon: Option<&'static str>| {
        view! {
            <FormInput
                label=label
                field=Signal::derive(move || form.with(|f| f.field(which).clone()))
                on_input=move |value: String| form.update(|f| f.edit(which, value))
                addon=addon
            />
        }
    };

    view! {
        <div>
            <Flash message=flash />
            <Show when=move || loaded.get()>
                <form on:submit=on_submit>
                    <fieldset>
                        <legend>"Profile"</legend>
                        {field_input("First name", ProfileField::FirstName, None)}
                        {field_input("Last name", ProfileField::LastName, None)}
                        {field_input("Email", ProfileField::Email, Some("email"))}
                        <div class="form-group">
                            <div class="col-md-4">
                                <button
                                    type="submit"
                                    class="btn btn-primary"
                                    disabled=move || form.with(|f| !f.can_save())
                                >
                                    {move || form.with(|f| f.phase.button_label("Save", "Saving..."))}
                                </button>
                            </div>
                            <div class="col-md-4">
                                <NavLink href=Route::ChangePassword.href()>"Change password"</NavLink>
                            </div>
                        </div>
                    </fieldset>
                </form>
            </Show>
        </div>
    }
}

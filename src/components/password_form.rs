//! Password Change / Reset Components

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Flash, FlashMessage, FormInput};
use crate::context::use_console;
use crate::forms::{FieldState, PasswordForm, PASSWORD_CHANGED_MESSAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PasswordField {
    New,
    Confirmation,
    Current,
}

fn field_of(form: &PasswordForm, which: PasswordField) -> FieldState {
    match which {
        PasswordField::New => form.new_password.clone(),
        PasswordField::Confirmation => form.confirmation.clone(),
        PasswordField::Current => form.current_password.clone().unwrap_or_default(),
    }
}

fn edit(form: &mut PasswordForm, which: PasswordField, value: String) {
    match which {
        PasswordField::New => form.new_password.edit(value),
        PasswordField::Confirmation => form.confirmation.edit(value),
        PasswordField::Current => {
            if let Some(current) = &mut form.current_password {
                current.edit(value);
            }
        }
    }
    // A mismatch only marks the confirmation input
    let _ = form.validate();
}

#[component]
fn PasswordFormView(initial: PasswordForm) -> impl IntoView {
    let api_client = StoredValue::new(use_console().api);
    let is_reset = initial.is_reset();
    let form = RwSignal::new(initial);
    let flash = RwSignal::new(None::<FlashMessage>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !form.try_update(|f| f.begin_save()).unwrap_or(false) {
            return;
        }
        let (new_password, current) = form.with_untracked(|f| {
            (
                f.new_password.value.clone(),
                f.current_password.as_ref().map(|c| c.value.clone()),
            )
        });
        let api_client = api_client.get_value();
        spawn_local(async move {
            let outcome = match &current {
                Some(current) => api::change_password(&api_client, &new_password, current).await,
                None => api::reset_password(&api_client, &new_password).await,
            };
            match outcome {
                Ok(()) => {
                    form.try_update(|f| f.saved());
                    flash.try_set(Some(FlashMessage::success(PASSWORD_CHANGED_MESSAGE)));
                }
                Err(err) => {
                    log::warn!(target: "password", "[PASSWORD] submit failed: {}", err);
                    form.try_update(|f| f.phase.finish());
                    flash.try_set(Some(FlashMessage::danger(err.user_message())));
                }
            }
        });
    };

    let password_input = move |label: &'static str, which: PasswordField| {
        view! {
            <FormInput
                label=label
                input_type="password"
                addon=Some("password")
                field=Signal::derive(move || form.with(|f| field_of(f, which)))
                on_input=move |value: String| form.update(|f| edit(f, which, value))
            />
        }
    };

    let (legend, idle, busy) = if is_reset {
        ("Reset Password", "Reset Password", "Resetting...")
    } else {
        ("Change Password", "Change Password", "Changing...")
    };

    view! {
        <form on:submit=on_submit>
            <Flash message=flash />
            <fieldset>
                <legend>{legend}</legend>
                {password_input("New password", PasswordField::New)}
                {password_input("Re-enter new password", PasswordField::Confirmation)}
                {(!is_reset).then(|| password_input("Current Password", PasswordField::Current))}
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || form.with(|f| !f.can_save())
                >
                    {move || form.with(|f| f.phase.button_label(idle, busy))}
                </button>
            </fieldset>
        </form>
    }
}

#[component]
pub fn PasswordChange() -> impl IntoView {
    view! { <PasswordFormView initial=PasswordForm::change() /> }
}

#[component]
pub fn PasswordReset() -> impl IntoView {
    view! { <PasswordFormView initial=PasswordForm::reset() /> }
}

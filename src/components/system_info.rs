//! System Info Component
//!
//! Read-only agent details plus the user-editable comment, switched
//! between Viewing and Editing.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{Flash, FlashMessage};
use crate::context::use_console;
use crate::error::LOAD_FAILED_MESSAGE;
use crate::forms::{CommentEditor, EditMode, CHANGES_SAVED_MESSAGE};
use crate::models::SystemInfo;

#[component]
pub fn SystemInfoPage(#[prop(into)] uuid: String) -> impl IntoView {
    let api_client = StoredValue::new(use_console().api);
    let uuid = StoredValue::new(uuid);
    let info = RwSignal::new(None::<SystemInfo>);
    let editor = RwSignal::new(CommentEditor::new(""));
    let flash = RwSignal::new(None::<FlashMessage>);

    Effect::new(move |prev: Option<()>| {
        if prev.is_some() {
            return;
        }
        let api_client = api_client.get_value();
        let uuid = uuid.get_value();
        spawn_local(async move {
            match api::fetch_system_info(&api_client, &uuid).await {
                Ok(loaded) => {
                    editor.try_set(CommentEditor::new(loaded.comment.clone()));
                    info.try_set(Some(loaded));
                }
                Err(err) => {
                    log::warn!(target: "systeminfo", "[SYSTEM] load {} failed: {}", uuid, err);
                    flash.try_set(Some(FlashMessage::danger(LOAD_FAILED_MESSAGE)));
                }
            }
        });
    });

    let on_save = move |_: web_sys::MouseEvent| {
        let Some(draft) = editor.try_update(|e| e.begin_save()).flatten() else {
            return;
        };
        let api_client = api_client.get_value();
        let uuid = uuid.get_value();
        spawn_local(async move {
            match api::save_system_comment(&api_client, &uuid, &draft).await {
                Ok(()) => {
                    editor.try_update(|e| e.save(draft));
                    flash.try_set(Some(FlashMessage::success(CHANGES_SAVED_MESSAGE)));
                }
                Err(err) => {
                    editor.try_update(|e| e.save_failed());
                    flash.try_set(Some(FlashMessage::danger(err.user_message())));
                }
            }
        });
    };

    let detail = move |label: &'static str, value: fn(&SystemInfo) -> &str| {
        view! {
            <tr>
                <td class="datalabel">{label}</td>
                <td class="datafield">
                    {move || info.with(|i| i.as_ref().map(|i| value(i).to_string()).unwrap_or_default())}
                </td>
            </tr>
        }
    };

    // Keystrokes must not rebuild the fieldset
    let editing = Memo::new(move |_| editor.with(|e| e.is_editing()));

    let user_data = move || {
        if editing.get() {
            let draft = move || match editor.with(|e| e.mode.clone()) {
                EditMode::Editing { draft, .. } => draft,
                EditMode::Viewing => String::new(),
            };
            view! {
                <fieldset>
                    <legend>"User defined data"</legend>
                    <div class="form-group">
                        <table>
                            <tr>
                                <td class="datalabel">"Comment"</td>
                                <td>
                                    <input
                                        class="form-control"
                                        type="text"
                                        prop:value=draft
                                        on:input=move |ev| editor.update(|e| e.update_draft(event_target_value(&ev)))
                                    />
                                </td>
                            </tr>
                        </table>
                    </div>
                    <div class="form-group">
                        <div class="col-md-6">
                            <button
                                type="button"
                                class="btn btn-primary"
                                disabled=move || editor.with(|e| !e.can_save())
                                on:click=on_save
                            >
                                {move || editor.with(|e| e.phase.button_label("Save", "Saving..."))}
                            </button>
                        </div>
                        <div class="col-md-6">
                            <button type="button" class="btn btn-default" on:click=move |_| editor.update(|e| e.cancel())>
                                "Ignore changes"
                            </button>
                        </div>
                    </div>
                </fieldset>
            }
            .into_any()
        } else {
            view! {
                <fieldset>
                    <legend>"User defined data"</legend>
                    <div class="form-group">
                        <table>
                            <tr>
                                <td class="datalabel">"Comment"</td>
                                <td class="datafield">{move || editor.with(|e| e.comment().to_string())}</td>
                            </tr>
                        </table>
                    </div>
                    <div class="form-group">
                        <div class="col-md-6">
                            <button type="button" class="btn btn-primary" on:click=move |_| editor.update(|e| e.edit())>
                                "Edit"
                            </button>
                        </div>
                    </div>
                </fieldset>
            }
            .into_any()
        }
    };

    view! {
        <div>
            <h2>"System Information"</h2>
            <table>
                {detail("Identifier", |i| i.uuid.as_str())}
                {detail("MachineGUID", |i| i.machine_guid.as_str())}
                {detail("Agent Version", |i| i.agent_version.as_str())}
                {detail("OS", |i| i.os.as_str())}
                {detail("Manufacturer", |i| i.manufacturer.as_str())}
                {detail("Model", |i| i.model.as_str())}
                {detail("First Seen", |i| i.first_seen.as_str())}
                {detail("Last Seen", |i| i.last_seen.as_str())}
            </table>
            <Flash message=flash />
            <form on:submit=|ev: web_sys::SubmitEvent| ev.prevent_default()>
                {user_data}
            </form>
        </div>
    }
}

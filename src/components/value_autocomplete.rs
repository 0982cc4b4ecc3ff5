//! Value Autocomplete Component
//!
//! Filter value input with fuzzy suggestions for `textoptions` columns.
//! Suggestions only help typing; any value may be submitted.

use leptos::prelude::*;

/// Value input with suggestions
///
/// Props:
/// - suggest: Suggestions for the text typed so far (empty for plain columns)
/// - on_submit: Called with the entered value; returns true when accepted,
///   which clears the input
#[component]
pub fn ValueAutocomplete(
    #[prop(into)] placeholder: Signal<String>,
    #[prop(into)] suggest: Callback<String, Vec<&'static str>>,
    #[prop(into)] on_submit: Callback<String, bool>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());
    let (selected_idx, set_selected_idx) = signal(0usize);

    let suggestions = move || {
        let current = input_value.get();
        if current.trim().is_empty() {
            return vec![];
        }
        suggest.run(current)
    };

    let submit = move |value: String| {
        if on_submit.run(value) {
            set_input_value.set(String::new());
            set_selected_idx.set(0);
        }
    };

    let on_form_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        submit(input_value.get_untracked());
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let sugg = suggestions();
        match ev.key().as_str() {
            "Tab" => {
                if let Some(choice) = sugg.get(selected_idx.get()) {
                    ev.prevent_default();
                    set_input_value.set(choice.to_string());
                    set_selected_idx.set(0);
                }
            }
            "ArrowDown" => {
                ev.prevent_default();
                let sel = selected_idx.get();
                if sel + 1 < sugg.len() {
                    set_selected_idx.set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                set_selected_idx.update(|sel| *sel = sel.saturating_sub(1));
            }
            _ => {}
        }
    };

    view! {
        <div class="filter-value-wrapper">
            <form class="filter-value-form" on:submit=on_form_submit>
                <input
                    type="text"
                    class="filter-tokenizer-text-input"
                    placeholder=placeholder
                    autocomplete="off"
                    prop:value=move || input_value.get()
                    on:input=move |ev| {
                        set_input_value.set(event_target_value(&ev));
                        set_selected_idx.set(0);
                    }
                    on:keydown=on_keydown
                />
                <button type="submit">"+"</button>
            </form>

            {move || {
                let sugg = suggestions();
                if sugg.is_empty() {
                    return view! { <div></div> }.into_any();
                }
                let selected = selected_idx.get();
                view! {
                    <ul class="filter-tokenizer-list__container">
                        {sugg.into_iter().enumerate().map(|(i, option)| {
                            view! {
                                <li
                                    class=if i == selected {
                                        "filter-tokenizer-list__item selected"
                                    } else {
                                        "filter-tokenizer-list__item"
                                    }
                                    on:mousedown=move |ev| {
                                        ev.prevent_default();
                                        submit(option.to_string());
                                    }
                                >
                                    {option}
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </div>
    }
}

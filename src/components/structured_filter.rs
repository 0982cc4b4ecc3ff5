//! Structured Filter Component
//!
//! Token editor above a grid: pick a category and operator, enter a
//! value, and the token is appended. Every add or remove reports the
//! serialized filter to the owner.

use leptos::prelude::*;

use crate::components::ValueAutocomplete;
use crate::filter::FilterEditor;
use crate::models::{ColumnDescriptor, ColumnKind, Operator};

#[component]
pub fn StructuredFilter(
    columns: &'static [ColumnDescriptor],
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let editor = RwSignal::new(FilterEditor::new(columns.to_vec()));
    let (category, set_category) = signal(columns.first().map(|c| c.category));
    let (operator, set_operator) = signal(columns.first().map(|c| c.kind.default_operator()));
    let (error, set_error) = signal(None::<String>);

    let kind = move || {
        category
            .get()
            .and_then(|cat| columns.iter().find(|c| c.category == cat))
            .map(|c| c.kind)
    };

    let on_category = move |ev: web_sys::Event| {
        let picked = event_target_value(&ev);
        let column = columns.iter().find(|c| c.category == picked);
        set_category.set(column.map(|c| c.category));
        set_operator.set(column.map(|c| c.kind.default_operator()));
        set_error.set(None);
    };

    let on_operator = move |ev: web_sys::Event| {
        set_operator.set(Operator::from_wire(&event_target_value(&ev)));
    };

    let add_value = Callback::new(move |raw: String| {
        let Some(cat) = category.get_untracked() else {
            return false;
        };
        let added = editor.try_update(|e| {
            e.submit(cat, operator.get_untracked(), &raw, |filter| on_change.run(filter))
        });
        match added {
            Some(Ok(())) => {
                set_error.set(None);
                true
            }
            Some(Err(err)) => {
                set_error.set(Some(err.to_string()));
                false
            }
            None => false,
        }
    });

    let remove = move |index: usize| {
        editor.try_update(|e| e.discard(index, |filter| on_change.run(filter)));
    };

    let suggest = Callback::new(move |query: String| match category.get_untracked() {
        Some(cat) => editor.with_untracked(|e| e.suggestions(cat, &query)),
        None => Vec::new(),
    });

    let placeholder = Signal::derive(move || match kind() {
        Some(ColumnKind::Date) => "YYYY-MM-DD".to_string(),
        Some(ColumnKind::Int) => "Number".to_string(),
        _ => "Value".to_string(),
    });

    view! {
        <div class="filter-tokenizer">
            <div class="filter-tokens">
                {move || editor.with(|e| {
                    e.tokens().iter().enumerate().map(|(index, token)| {
                        view! {
                            <span class="typeahead-token">
                                {token.to_string()}
                                <a class="typeahead-token-close" href="#" on:click=move |ev| {
                                    ev.prevent_default();
                                    remove(index);
                                }>"×"</a>
                            </span>
                        }
                    }).collect_view()
                })}
            </div>
            <div class="filter-input-group">
                <select class="form-control filter-category" on:change=on_category>
                    {columns.iter().map(|column| {
                        view! {
                            <option value=column.category selected=move || category.get() == Some(column.category)>
                                {column.category}
                            </option>
                        }
                    }).collect_view()}
                </select>
                <select class="form-control filter-operator" on:change=on_operator>
                    {move || kind().map(|kind| kind.operators().iter().map(|op| {
                        let op = *op;
                        view! {
                            <option value=op.as_str() selected=move || operator.get() == Some(op)>
                                {op.as_str()}
                            </option>
                        }
                    }).collect_view())}
                </select>
                <ValueAutocomplete placeholder=placeholder suggest=suggest on_submit=add_value />
            </div>
            {move || error.get().map(|message| view! {
                <p class="help-block filter-error">{message}</p>
            })}
        </div>
    }
}

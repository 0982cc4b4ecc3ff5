//! Paginated Grid Component
//!
//! Renders a [`GridState`] and drives its fetches. Every fetch captures
//! the grid's state handle and the ticket id it was issued under; the
//! outcome is offered back to the state, which keeps it only if no newer
//! fetch has been issued since.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::DataSource;
use crate::components::NavLink;
use crate::config::PAGE_SIZE_CHOICES;
use crate::context::use_console;
use crate::grid::{FetchTicket, GridState, GridView};
use crate::models::{Cell, QuerySpec, ResultPage, RowRecord};

/// Owned cells for `columns` in header order; `None` where the row has no value
fn cells_in_order(record: &RowRecord, columns: &[&'static str]) -> Vec<Option<Cell>> {
    columns.iter().map(|column| record.get(column).cloned()).collect()
}

#[component]
pub fn PaginatedGrid(
    /// Display headers; header clicks sort by these names
    columns: &'static [&'static str],
    default_sort: &'static str,
    source: Rc<dyn DataSource>,
    /// Serialized structured filter; absent for unfiltered grids
    #[prop(optional)]
    filter: Option<Signal<String>>,
) -> impl IntoView {
    let config = StoredValue::new(use_console().config);
    let (default_page_size, max_page_size) = config.with_value(|c| (c.default_page_size, c.max_page_size));
    let state = RwSignal::new(GridState::new(QuerySpec::new(
        default_sort,
        default_page_size,
    )));
    let source = StoredValue::new_local(source);

    let run = move |ticket: FetchTicket| {
        let source = source.get_value();
        spawn_local(async move {
            let outcome = source.fetch_page(&ticket.query).await;
            // Disposed once the grid is unmounted
            state.try_update(|s| s.apply(ticket.id, outcome));
        });
    };
    let dispatch = move |ticket: Option<Option<FetchTicket>>| {
        if let Some(ticket) = ticket.flatten() {
            run(ticket);
        }
    };

    // First run mounts; later runs follow the filter
    let filter = filter.unwrap_or_else(|| Signal::stored(String::new()));
    Effect::new(move |_| {
        let filter = filter.get();
        dispatch(state.try_update(|s| s.set_filter(filter).or_else(|| s.mount())));
    });

    on_cleanup(move || {
        state.try_update_untracked(|s| s.detach());
    });

    let header = move |column: &'static str| {
        let arrow = move || {
            state.with(|s| {
                let query = s.query();
                match (query.sort_column == column, query.sort_ascending) {
                    (false, _) => "",
                    (true, true) => " ▲",
                    (true, false) => " ▼",
                }
            })
        };
        view! {
            <th class="sortable" on:click=move |_| dispatch(state.try_update(|s| s.click_header(column)))>
                {column}
                <span class="sort-arrow">{arrow}</span>
            </th>
        }
    };

    let rows = move |page: ResultPage| {
        page.rows
            .into_iter()
            .map(|record| {
                let cells = cells_in_order(&record, columns)
                    .into_iter()
                    .map(|cell| match cell {
                        Some(Cell::Link { href, label }) => view! {
                            <td><NavLink href=href>{label}</NavLink></td>
                        }
                        .into_any(),
                        Some(Cell::Text(text)) => view! { <td>{text}</td> }.into_any(),
                        None => view! { <td></td> }.into_any(),
                    })
                    .collect_view();
                view! { <tr>{cells}</tr> }
            })
            .collect_view()
    };

    let pager = move || {
        let (page, pages, page_size) = state.with(|s| (s.query().page, s.page_count(), s.query().page_size));
        view! {
            <div class="griddle-footer row">
                <div class="col-xs-4">
                    <button
                        type="button"
                        class="btn btn-default"
                        disabled={page == 0}
                        on:click=move |_| dispatch(state.try_update(|s| s.previous_page()))
                    >
                        "Previous"
                    </button>
                </div>
                <div class="col-xs-4 text-center">
                    <select
                        class="form-control"
                        on:change=move |ev| {
                            if let Ok(n) = event_target_value(&ev).parse::<usize>() {
                                dispatch(state.try_update(|s| s.go_to_page(n.saturating_sub(1))));
                            }
                        }
                    >
                        {(1..=pages.max(1)).map(|n| view! {
                            <option value=n.to_string() selected={n == page + 1}>{n}</option>
                        }).collect_view()}
                    </select>
                    " / " {pages}
                </div>
                <div class="col-xs-4 text-right">
                    <select
                        class="form-control page-size"
                        on:change=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                                dispatch(state.try_update(|s| s.set_page_size(config.with_value(|c| c.clamp_page_size(size)))));
                            }
                        }
                    >
                        {PAGE_SIZE_CHOICES.iter().copied().filter(|size| *size <= max_page_size).map(|size| view! {
                            <option value=size.to_string() selected={size == page_size}>{size}" per page"</option>
                        }).collect_view()}
                    </select>
                    <button
                        type="button"
                        class="btn btn-default"
                        disabled={page + 1 >= pages}
                        on:click=move |_| dispatch(state.try_update(|s| s.next_page()))
                    >
                        "Next"
                    </button>
                </div>
            </div>
        }
    };

    move || {
        let body = state.with(|s| match s.view() {
            GridView::Error(message) => Err(message.to_string()),
            GridView::Rows(page) => Ok(Some(page.clone())),
            GridView::Loading => Ok(None),
        });
        match body {
            Err(message) => view! {
                <div class="alert alert-danger" role="alert">{message}</div>
            }
            .into_any(),
            Ok(None) => view! { <p class="grid-loading">"Loading data..."</p> }.into_any(),
            Ok(Some(page)) => {
                let table_class = move || if state.with(|s| s.is_loading()) { "table loading" } else { "table" };
                view! {
                    <div class="griddle">
                        <table class=table_class>
                            <thead>
                                <tr>{columns.iter().map(|column| header(*column)).collect_view()}</tr>
                            </thead>
                            <tbody>{rows(page)}</tbody>
                        </table>
                        {pager}
                    </div>
                }
                .into_any()
            }
        }
    }
}

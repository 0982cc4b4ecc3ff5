//! Entity Grid Component
//!
//! A [`GridBinding`] turned into a page: title, optional structured
//! filter, and the paginated grid over the binding's endpoint.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::{DataSource, RemoteDataSource};
use crate::bindings::GridBinding;
use crate::components::{PaginatedGrid, StructuredFilter};
use crate::context::use_console;

#[component]
pub fn EntityGrid(binding: GridBinding) -> impl IntoView {
    let ctx = use_console();
    let source: Rc<dyn DataSource> = Rc::new(RemoteDataSource::new(
        ctx.api,
        binding.endpoint,
        binding.projection,
    ));
    let (filter, set_filter) = signal(String::new());

    view! {
        <div class="entity-grid">
            <h2>{binding.title}</h2>
            {binding.has_filter().then(|| view! {
                <StructuredFilter
                    columns=binding.filter_columns
                    on_change=move |serialized: String| set_filter.set(serialized)
                />
            })}
            <PaginatedGrid
                columns=binding.columns
                default_sort=binding.default_sort
                source=source
                filter=Signal::from(filter)
            />
        </div>
    }
}
